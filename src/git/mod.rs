//! Version control abstraction layer
//!
//! The release flow only needs three operations from git: stage the rewritten
//! manifests, commit them, and tag the commit when a new version line starts.
//! They are expressed by the [Repository] trait so the workflow can run against
//! a real repository or a recording mock.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use std::path::PathBuf;

/// Common git operation trait for abstraction
///
/// Implementations map their underlying failures to
/// [crate::error::VersionUpError::VersionControl].
pub trait Repository {
    /// Add the given files to the index
    ///
    /// # Arguments
    /// * `paths` - Files inside the working tree (absolute or relative to it)
    fn stage_paths(&self, paths: &[PathBuf]) -> Result<()>;

    /// Commit the current index on top of HEAD
    ///
    /// # Returns
    /// * `Ok(String)` - Hex id of the new commit
    fn commit(&self, message: &str) -> Result<String>;

    /// Create a tag pointing at HEAD
    ///
    /// # Errors
    /// Fails if the tag already exists
    fn create_tag(&self, name: &str) -> Result<()>;
}

impl<R: Repository + ?Sized> Repository for &R {
    fn stage_paths(&self, paths: &[PathBuf]) -> Result<()> {
        (**self).stage_paths(paths)
    }

    fn commit(&self, message: &str) -> Result<String> {
        (**self).commit(message)
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        (**self).create_tag(name)
    }
}

/// What to record in version control after the manifests were rewritten
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRequest {
    pub message: String,
    pub paths: Vec<PathBuf>,
    /// Tag to create on the new commit, if any
    pub tag: Option<String>,
}

/// Result of a successful [commit_release]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReceipt {
    pub commit: String,
    pub tag: Option<String>,
}

/// Stage the manifest files, commit them and optionally tag the commit.
pub fn commit_release<R: Repository + ?Sized>(
    repo: &R,
    request: &CommitRequest,
) -> Result<CommitReceipt> {
    repo.stage_paths(&request.paths)?;
    let commit = repo.commit(&request.message)?;

    if let Some(tag) = &request.tag {
        repo.create_tag(tag)?;
    }

    Ok(CommitReceipt {
        commit,
        tag: request.tag.clone(),
    })
}
