use deno_release_core::FileContents;

use crate::Result;

pub trait ContentSource: Send + Sync {
    /// # Errors
    ///
    /// Returns [`crate::StrategyError::FileNotFound`] if the path does not exist
    /// on the branch. Any other failure must be reported as a different error
    /// so callers never mistake an unreadable file for a missing one.
    fn file_contents_on_branch(&self, path: &str, branch: &str) -> Result<FileContents>;
}

impl<T: ContentSource + ?Sized> ContentSource for &T {
    fn file_contents_on_branch(&self, path: &str, branch: &str) -> Result<FileContents> {
        (**self).file_contents_on_branch(path, branch)
    }
}
