//! Domain types for documentation publishing: minor version lines and
//! the revision records handed to the site generator's data layer.

pub mod revision;
pub mod version;

pub use revision::{build_revisions, Revision};
pub use version::MinorLine;
