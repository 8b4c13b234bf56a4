use std::path::Path;

use deno_release_core::FileContents;

use crate::{GitError, Result};

use super::Repository;

impl Repository {
    /// Reads a file from the tree of the commit `branch` points at, ignoring
    /// the working tree.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if the branch cannot be resolved,
    /// [`GitError::FileNotFound`] if the path does not exist in its tree and
    /// [`GitError::NotAFile`] if the path names a directory.
    pub fn file_contents_on_branch(&self, path: &str, branch: &str) -> Result<FileContents> {
        let commit = self
            .inner
            .revparse_single(branch)
            .and_then(|object| object.peel_to_commit())
            .map_err(|_| GitError::RefNotFound {
                refspec: branch.to_string(),
            })?;
        let tree = commit.tree()?;

        let entry = match tree.get_path(Path::new(path)) {
            Ok(entry) => entry,
            Err(e) if e.code() == git2::ErrorCode::NotFound => {
                return Err(GitError::FileNotFound {
                    path: path.to_string(),
                    branch: branch.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        if entry.kind() != Some(git2::ObjectType::Blob) {
            return Err(GitError::NotAFile {
                path: path.to_string(),
                branch: branch.to_string(),
            });
        }

        let blob = self.inner.find_blob(entry.id())?;
        let content =
            String::from_utf8(blob.content().to_vec()).map_err(|source| GitError::InvalidUtf8 {
                path: path.to_string(),
                branch: branch.to_string(),
                source,
            })?;

        Ok(FileContents::new(content, blob.id().to_string())
            .with_mode(format!("{:o}", entry.filemode())))
    }
}
