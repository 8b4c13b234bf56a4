use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("git operation failed")]
    Git(#[from] git2::Error),

    #[error("not a git repository: '{path}'")]
    NotARepository { path: PathBuf },

    #[error("failed to resolve reference '{refspec}'")]
    RefNotFound { refspec: String },

    #[error("file '{path}' not found on branch '{branch}'")]
    FileNotFound { path: String, branch: String },

    #[error("'{path}' on branch '{branch}' is not a file")]
    NotAFile { path: String, branch: String },

    #[error("file '{path}' on branch '{branch}' is not valid UTF-8")]
    InvalidUtf8 {
        path: String,
        branch: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("HEAD is detached, not on a branch")]
    DetachedHead,
}
