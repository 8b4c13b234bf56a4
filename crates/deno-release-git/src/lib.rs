mod error;
mod repository;

pub use error::GitError;
pub use repository::Repository;

use std::path::Path;

use deno_release_core::FileContents;

pub type Result<T> = std::result::Result<T, GitError>;

/// # Errors
///
/// Returns an error if the path is not a git repository or if HEAD is detached.
pub fn current_branch(path: &Path) -> Result<String> {
    Repository::open(path)?.current_branch()
}

/// # Errors
///
/// Returns [`GitError::FileNotFound`] if the file does not exist on the branch.
pub fn file_contents_on_branch(
    repo_path: &Path,
    file: &str,
    branch: &str,
) -> Result<FileContents> {
    Repository::open(repo_path)?.file_contents_on_branch(file, branch)
}
