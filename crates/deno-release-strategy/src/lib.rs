mod changes;
mod config;
mod error;
mod manifest;
pub mod providers;
mod resolver;
mod strategy;
pub mod traits;
mod update;

#[cfg(test)]
pub(crate) mod mocks;

pub use changes::{ChangeSet, FileChange, build_change_set};
pub use config::{DEFAULT_CHANGELOG_PATH, ReleaseConfig, StrategyConfig};
pub use error::{Result, StrategyError};
pub use manifest::{
    DEFAULT_MANIFEST_FILE, DENO_CONFIG_FILES, ManifestParseError, PackageDescriptor,
    ResolvedManifest,
};
pub use resolver::ManifestResolver;
pub use strategy::{
    CHANGELOG_JSON, DenoStrategy, LOCK_FILES, SAMPLES_MANIFEST, StrategyOptions,
    normalize_component,
};
pub use update::{BuildUpdatesOptions, UpdateDirective};
