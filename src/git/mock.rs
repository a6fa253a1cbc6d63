use crate::error::Result;
use crate::git::SourceControl;
use std::sync::Mutex;

/// Mock repository for testing without actual git operations.
///
/// Records every checkout and commit so tests can assert on the order
/// of operations the pipeline performed.
pub struct MockRepository {
    tags: Vec<String>,
    head: String,
    checkouts: Mutex<Vec<String>>,
    commits: Mutex<Vec<String>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: Vec::new(),
            head: "0000000000000000000000000000000000000000".to_string(),
            checkouts: Mutex::new(Vec::new()),
            commits: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock repository with the given tags
    pub fn with_tags(tags: &[&str]) -> Self {
        let mut repo = Self::new();
        for tag in tags {
            repo.add_tag(*tag);
        }
        repo
    }

    /// Add a tag name
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Refs checked out so far, in order
    pub fn checked_out(&self) -> Vec<String> {
        self.checkouts.lock().unwrap().clone()
    }

    /// Commit messages recorded so far, in order
    pub fn committed(&self) -> Vec<String> {
        self.commits.lock().unwrap().clone()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceControl for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }

    fn checkout(&self, refname: &str) -> Result<()> {
        self.checkouts.lock().unwrap().push(refname.to_string());
        Ok(())
    }

    fn add_all_and_commit(&self, message: &str) -> Result<()> {
        self.commits.lock().unwrap().push(message.to_string());
        Ok(())
    }

    fn head_hash(&self) -> Result<String> {
        Ok(self.head.clone())
    }
}
