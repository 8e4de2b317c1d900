use crate::error::{Result, VersionUpError};
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path.as_ref()).map_err(|e| {
            VersionControlContext::new("Not in a git repository").wrap(e)
        })?;

        Ok(Git2Repository { repo })
    }

    fn workdir(&self) -> Result<PathBuf> {
        let workdir = self
            .repo
            .workdir()
            .ok_or_else(|| VersionUpError::version_control("Repository has no working tree"))?;

        workdir.canonicalize().map_err(|e| {
            VersionUpError::version_control(format!(
                "Cannot resolve working tree {}: {}",
                workdir.display(),
                e
            ))
        })
    }

    /// Path of `path` relative to the working tree, as the index expects it
    fn relative_to_workdir(&self, workdir: &Path, path: &Path) -> Result<PathBuf> {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            workdir.join(path)
        };

        let absolute = absolute.canonicalize().map_err(|e| {
            VersionUpError::version_control(format!("Cannot stage {}: {}", path.display(), e))
        })?;

        absolute
            .strip_prefix(workdir)
            .map(Path::to_path_buf)
            .map_err(|_| {
                VersionUpError::version_control(format!(
                    "Cannot stage {}: outside of the working tree {}",
                    path.display(),
                    workdir.display()
                ))
            })
    }
}

/// Prefixes libgit2 messages with what was being attempted
struct VersionControlContext(&'static str);

impl VersionControlContext {
    fn new(what: &'static str) -> Self {
        VersionControlContext(what)
    }

    fn wrap(&self, e: git2::Error) -> VersionUpError {
        VersionUpError::version_control(format!("{}: {}", self.0, e.message()))
    }
}

impl super::Repository for Git2Repository {
    fn stage_paths(&self, paths: &[PathBuf]) -> Result<()> {
        let workdir = self.workdir()?;
        let mut index = self.repo.index()?;

        for path in paths {
            let relative = self.relative_to_workdir(&workdir, path)?;
            index
                .add_path(&relative)
                .map_err(|e| VersionControlContext::new("Cannot add file to index").wrap(e))?;
        }

        index.write()?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<String> {
        let mut index = self.repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;

        let signature = self
            .repo
            .signature()
            .map_err(|e| VersionControlContext::new("Cannot determine commit author").wrap(e))?;

        // An unborn HEAD means this is the first commit
        let parent = match self.repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(_) => None,
        };
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        let oid = self
            .repo
            .commit(
                Some("HEAD"),
                &signature,
                &signature,
                message,
                &tree,
                &parents,
            )
            .map_err(|e| VersionControlContext::new("Cannot create commit").wrap(e))?;

        Ok(oid.to_string())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .map_err(|e| {
                VersionUpError::version_control(format!(
                    "Cannot create tag '{}': {}",
                    name,
                    e.message()
                ))
            })?;
        Ok(())
    }
}
