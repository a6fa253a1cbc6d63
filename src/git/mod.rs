//! Source-control abstraction layer
//!
//! The pipeline never touches git directly; it talks to the
//! [SourceControl] trait, which covers exactly the operations
//! documentation publishing needs: listing release tags, checking out a
//! revision, and committing the generated site.
//!
//! Implementations:
//!
//! - [repository::Git2Repository]: real implementation using the `git2` crate
//! - [mock::MockRepository]: in-memory implementation for testing
//!
//! Checkouts of a single working copy must never interleave; callers
//! process one revision at a time per repository.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Narrow source-control contract consumed by the publish pipeline.
///
/// Implementors must be `Send + Sync` so a pipeline can process
/// different components on different threads, each with its own
/// exclusive working copy.
pub trait SourceControl: Send + Sync {
    /// List all tag names in the repository.
    ///
    /// Returns raw tag strings; filtering and ordering is the version
    /// selector's job, not the repository's.
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Check out a revision (tag or branch name), forcing the working
    /// tree to match it.
    fn checkout(&self, refname: &str) -> Result<()>;

    /// Stage every change in the working tree and commit it with the
    /// given message. Used for the publishing repository after a
    /// successful site build.
    fn add_all_and_commit(&self, message: &str) -> Result<()>;

    /// Full hash of the current HEAD commit.
    fn head_hash(&self) -> Result<String>;
}
