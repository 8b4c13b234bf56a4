use std::path::PathBuf;

use deno_release_core::RepositoryRef;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error(transparent)]
    Core(#[from] deno_release_core::CoreError),

    #[error(transparent)]
    Git(#[from] deno_release_git::GitError),

    #[error(transparent)]
    Updater(#[from] deno_release_updaters::UpdaterError),

    #[error("file '{path}' not found on branch '{branch}'")]
    FileNotFound { path: String, branch: String },

    #[error("missing required manifest '{expected}' in repository '{repository}'")]
    MissingRequiredManifest {
        expected: String,
        repository: RepositoryRef,
    },

    #[error("failed to read '{path}' from content source")]
    Source {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to read configuration file '{path}'")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON configuration")]
    JsonConfig(#[source] serde_json::Error),

    #[error("invalid TOML configuration")]
    TomlConfig(#[source] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, StrategyError>;
