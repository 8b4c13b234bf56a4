use deno_release_core::{ConventionalCommit, FileContents, VersionsMap};
use deno_release_updaters::Updater;
use semver::Version;

/// A request to create or modify one file as part of a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDirective {
    pub path: String,
    pub create_if_missing: bool,
    /// Contents already read while building the update set.
    pub cached_file_contents: Option<FileContents>,
    pub updater: Updater,
}

impl UpdateDirective {
    #[must_use]
    pub fn new(path: impl Into<String>, updater: impl Into<Updater>) -> Self {
        Self {
            path: path.into(),
            create_if_missing: false,
            cached_file_contents: None,
            updater: updater.into(),
        }
    }

    #[must_use]
    pub fn create_if_missing(mut self) -> Self {
        self.create_if_missing = true;
        self
    }

    #[must_use]
    pub fn with_cached_contents(mut self, contents: FileContents) -> Self {
        self.cached_file_contents = Some(contents);
        self
    }
}

/// Release parameters handed over by the orchestration host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildUpdatesOptions {
    pub new_version: Version,
    pub versions_map: VersionsMap,
    pub changelog_entry: String,
    pub commits: Vec<ConventionalCommit>,
}

impl BuildUpdatesOptions {
    #[must_use]
    pub fn new(new_version: Version) -> Self {
        Self {
            new_version,
            versions_map: VersionsMap::new(),
            changelog_entry: String::new(),
            commits: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_versions_map(mut self, versions_map: VersionsMap) -> Self {
        self.versions_map = versions_map;
        self
    }

    #[must_use]
    pub fn with_changelog_entry(mut self, changelog_entry: impl Into<String>) -> Self {
        self.changelog_entry = changelog_entry.into();
        self
    }

    #[must_use]
    pub fn with_commits(mut self, commits: Vec<ConventionalCommit>) -> Self {
        self.commits = commits;
        self
    }
}
