use crate::error::{DocsPublishError, Result};
use git2::{build::CheckoutBuilder, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository implementing our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::SourceControl for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn checkout(&self, refname: &str) -> Result<()> {
        let (object, reference) = self.repo.revparse_ext(refname).map_err(|e| {
            DocsPublishError::Git(git2::Error::from_str(&format!(
                "cannot resolve '{}': {}",
                refname, e
            )))
        })?;

        let mut checkout_opts = CheckoutBuilder::new();
        checkout_opts.force();
        self.repo.checkout_tree(&object, Some(&mut checkout_opts))?;

        // Branches move HEAD to the branch ref; tags leave HEAD detached
        // at the tagged commit.
        match reference.and_then(|r| r.name().map(|n| n.to_string())) {
            Some(ref_name) if ref_name.starts_with("refs/heads/") => {
                self.repo.set_head(&ref_name)?;
            }
            _ => {
                let commit_id = object
                    .peel(git2::ObjectType::Commit)
                    .map_err(DocsPublishError::Git)?
                    .id();
                self.repo.set_head_detached(commit_id)?;
            }
        }

        Ok(())
    }

    fn add_all_and_commit(&self, message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        index
            .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
            .map_err(|e| DocsPublishError::publish(format!("cannot stage changes: {}", e)))?;
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;
        let signature = self.repo.signature()?;

        // First commit on an unborn branch has no parent.
        let parent = match self.repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(_) => None,
        };
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(
                Some("HEAD"),
                &signature,
                &signature,
                message,
                &tree,
                &parents,
            )
            .map_err(|e| DocsPublishError::publish(format!("commit failed: {}", e)))?;

        Ok(())
    }

    fn head_hash(&self) -> Result<String> {
        let head = self.repo.head()?;
        let oid = head.target().ok_or_else(|| {
            DocsPublishError::Git(git2::Error::from_str("HEAD is detached or invalid"))
        })?;
        Ok(oid.to_string())
    }
}

// SAFETY: Git2Repository wraps git2::Repository which is Send + Sync.
// git2 library is thread-safe for read operations via libgit2's thread-safe design.
unsafe impl Sync for Git2Repository {}
