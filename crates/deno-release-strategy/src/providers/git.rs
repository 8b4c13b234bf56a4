use std::path::{Path, PathBuf};

use deno_release_core::{FileContents, RepositoryRef};
use deno_release_git::{GitError, Repository};

use crate::traits::ContentSource;
use crate::{Result, StrategyError};

/// Reads files from the branches of a local git repository.
pub struct Git2ContentSource {
    repo_path: PathBuf,
}

impl Git2ContentSource {
    #[must_use]
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
        }
    }

    #[must_use]
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or HEAD is detached.
    pub fn current_branch(&self) -> Result<String> {
        let repo = Repository::open(&self.repo_path)?;
        Ok(repo.current_branch()?)
    }

    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened.
    pub fn repository_ref(&self) -> Result<Option<RepositoryRef>> {
        let repo = Repository::open(&self.repo_path)?;
        Ok(repo.repository_ref()?)
    }
}

impl ContentSource for Git2ContentSource {
    fn file_contents_on_branch(&self, path: &str, branch: &str) -> Result<FileContents> {
        let repo = Repository::open(&self.repo_path)?;
        repo.file_contents_on_branch(path, branch)
            .map_err(|e| match e {
                GitError::FileNotFound { path, branch } => {
                    StrategyError::FileNotFound { path, branch }
                }
                other => StrategyError::Git(other),
            })
    }
}
