use crate::error::{Result, VersionUpError};
use crate::git::Repository;
use std::path::PathBuf;
use std::sync::Mutex;

#[derive(Debug, Default)]
struct Recorded {
    staged: Vec<PathBuf>,
    commits: Vec<String>,
    tags: Vec<String>,
}

/// Mock repository for testing without actual git operations
#[derive(Debug, Default)]
pub struct MockRepository {
    recorded: Mutex<Recorded>,
    fail_commit: bool,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose commits always fail
    pub fn failing_commit() -> Self {
        MockRepository {
            fail_commit: true,
            ..Self::default()
        }
    }

    /// Every path staged so far
    pub fn staged(&self) -> Vec<PathBuf> {
        self.lock().staged.clone()
    }

    /// Messages of every commit created so far
    pub fn commits(&self) -> Vec<String> {
        self.lock().commits.clone()
    }

    /// Every tag created so far
    pub fn tags(&self) -> Vec<String> {
        self.lock().tags.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Recorded> {
        // A poisoned lock only means another test thread panicked mid-record
        self.recorded
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Repository for MockRepository {
    fn stage_paths(&self, paths: &[PathBuf]) -> Result<()> {
        self.lock().staged.extend(paths.iter().cloned());
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<String> {
        if self.fail_commit {
            return Err(VersionUpError::version_control("mock commit failure"));
        }

        let mut recorded = self.lock();
        recorded.commits.push(message.to_string());
        Ok(format!("{:040x}", recorded.commits.len()))
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let mut recorded = self.lock();
        if recorded.tags.iter().any(|t| t == name) {
            return Err(VersionUpError::version_control(format!(
                "tag '{}' already exists",
                name
            )));
        }
        recorded.tags.push(name.to_string());
        Ok(())
    }
}
