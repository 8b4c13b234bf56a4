mod changelog;
mod changelog_json;
mod error;
mod json;
mod package_json;
mod package_lock_json;
mod samples_package_json;

pub use changelog::Changelog;
pub use changelog_json::{ChangelogJson, ProgrammingLanguage};
pub use error::UpdaterError;
pub use package_json::PackageJson;
pub use package_lock_json::PackageLockJson;
pub use samples_package_json::SamplesPackageJson;

pub type Result<T> = std::result::Result<T, UpdaterError>;

pub trait ContentUpdater {
    /// Produces the new file text. `content` is `None` when the file does not
    /// exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the existing content cannot be parsed or lacks the
    /// structure the updater edits.
    fn update_content(&self, content: Option<&str>) -> Result<String>;
}

/// A configured file mutation, applied by whoever commits the release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Updater {
    PackageLockJson(PackageLockJson),
    SamplesPackageJson(SamplesPackageJson),
    PackageJson(PackageJson),
    Changelog(Changelog),
    ChangelogJson(ChangelogJson),
}

impl ContentUpdater for Updater {
    fn update_content(&self, content: Option<&str>) -> Result<String> {
        match self {
            Self::PackageLockJson(updater) => updater.update_content(content),
            Self::SamplesPackageJson(updater) => updater.update_content(content),
            Self::PackageJson(updater) => updater.update_content(content),
            Self::Changelog(updater) => updater.update_content(content),
            Self::ChangelogJson(updater) => updater.update_content(content),
        }
    }
}

impl From<PackageLockJson> for Updater {
    fn from(updater: PackageLockJson) -> Self {
        Self::PackageLockJson(updater)
    }
}

impl From<SamplesPackageJson> for Updater {
    fn from(updater: SamplesPackageJson) -> Self {
        Self::SamplesPackageJson(updater)
    }
}

impl From<PackageJson> for Updater {
    fn from(updater: PackageJson) -> Self {
        Self::PackageJson(updater)
    }
}

impl From<Changelog> for Updater {
    fn from(updater: Changelog) -> Self {
        Self::Changelog(updater)
    }
}

impl From<ChangelogJson> for Updater {
    fn from(updater: ChangelogJson) -> Self {
        Self::ChangelogJson(updater)
    }
}
