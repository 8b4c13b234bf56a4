use deno_release_core::{RepositoryRef, filter_commits};
use deno_release_updaters::{
    Changelog, ChangelogJson, PackageJson, PackageLockJson, ProgrammingLanguage,
    SamplesPackageJson,
};
use semver::Version;
use tracing::debug;

use crate::{Result, StrategyError};
use crate::config::StrategyConfig;
use crate::manifest::ResolvedManifest;
use crate::resolver::ManifestResolver;
use crate::traits::ContentSource;
use crate::update::{BuildUpdatesOptions, UpdateDirective};

pub const LOCK_FILES: [&str; 2] = ["package-lock.json", "npm-shrinkwrap.json"];
pub const SAMPLES_MANIFEST: &str = "samples/package.json";
pub const CHANGELOG_JSON: &str = "changelog.json";

const FALLBACK_MANIFEST: &str = "package.json";

#[derive(Debug, Clone)]
pub struct StrategyOptions {
    pub target_branch: String,
    pub repository: RepositoryRef,
    pub config: StrategyConfig,
}

impl StrategyOptions {
    #[must_use]
    pub fn new(target_branch: impl Into<String>, repository: RepositoryRef) -> Self {
        Self {
            target_branch: target_branch.into(),
            repository,
            config: StrategyConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: StrategyConfig) -> Self {
        self.config = config;
        self
    }
}

/// Release strategy for Deno projects configured through `deno.json`,
/// `deno.jsonc` or `package.json`.
///
/// An instance serves one release build: the manifest it resolves is cached
/// and reused by every later call on the same instance.
pub struct DenoStrategy<S> {
    config: StrategyConfig,
    resolver: ManifestResolver,
    source: S,
}

impl<S> DenoStrategy<S>
where
    S: ContentSource,
{
    pub fn new(options: StrategyOptions, source: S) -> Self {
        let resolver = ManifestResolver::new(
            options.config.path.clone(),
            options.target_branch,
            options.repository,
        );
        Self {
            config: options.config,
            resolver,
            source,
        }
    }

    /// Replaces the manifest candidates, in precedence order.
    #[must_use]
    pub fn with_manifest_candidates<I, T>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.resolver = self.resolver.with_candidates(candidates);
        self
    }

    #[must_use]
    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    #[must_use]
    pub fn resolved_manifest(&self) -> Option<&ResolvedManifest> {
        self.resolver.resolved()
    }

    /// Package name declared by the component's manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if no manifest can be resolved.
    pub fn default_package_name(&mut self) -> Result<Option<String>> {
        self.resolver.package_name(&self.source)
    }

    /// The configured package name, falling back to the manifest's.
    ///
    /// # Errors
    ///
    /// Returns an error if no name is configured and no manifest can be resolved.
    pub fn package_name(&mut self) -> Result<Option<String>> {
        match &self.config.package_name {
            Some(name) => Ok(Some(name.clone())),
            None => self.default_package_name(),
        }
    }

    /// The configured component, falling back to the package name, without
    /// any npm scope.
    ///
    /// # Errors
    ///
    /// Returns an error if neither a component nor a package name is configured
    /// and no manifest can be resolved.
    pub fn component(&mut self) -> Result<String> {
        let component = match &self.config.component {
            Some(component) => Some(component.clone()),
            None => self.package_name()?,
        };
        Ok(normalize_component(component.as_deref()))
    }

    /// Builds the file updates for a release, in a fixed order: lockfiles,
    /// samples manifest, primary manifest, then changelogs.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::MissingRequiredManifest`] if the component has
    /// no manifest and no package name is configured, or the content source's
    /// error if reading a manifest candidate fails.
    pub fn build_updates(
        &mut self,
        options: &BuildUpdatesOptions,
    ) -> Result<Vec<UpdateDirective>> {
        let package_name = self.package_name()?.unwrap_or_default();
        let version = &options.new_version;
        let manifest_update = self.manifest_update(version)?;
        let path = &self.config.path;

        let mut updates: Vec<UpdateDirective> = LOCK_FILES
            .iter()
            .map(|lock_file| {
                UpdateDirective::new(
                    path.add_path(lock_file),
                    PackageLockJson::new(version.clone(), options.versions_map.clone()),
                )
            })
            .collect();

        updates.push(UpdateDirective::new(
            path.add_path(SAMPLES_MANIFEST),
            SamplesPackageJson::new(version.clone(), package_name.clone()),
        ));

        updates.push(manifest_update);

        if !self.config.skip_changelog {
            updates.push(
                UpdateDirective::new(
                    path.add_path(&self.config.changelog_path),
                    Changelog::new(version.clone(), options.changelog_entry.clone()),
                )
                .create_if_missing(),
            );

            if !options.commits.is_empty() && !package_name.is_empty() {
                let commits =
                    filter_commits(&options.commits, self.config.changelog_sections.as_deref());
                updates.push(UpdateDirective::new(
                    CHANGELOG_JSON,
                    ChangelogJson::new(
                        package_name.clone(),
                        version.clone(),
                        commits,
                        ProgrammingLanguage::JavaScript,
                    ),
                ));
            }
        }

        debug!(
            version = %version,
            package = %package_name,
            count = updates.len(),
            "built release updates"
        );
        Ok(updates)
    }

    /// The primary manifest update. Without a configured package name the
    /// manifest must exist; with one, a missing manifest falls back to an
    /// uncached `package.json` update.
    fn manifest_update(&mut self, version: &Version) -> Result<UpdateDirective> {
        let resolved = match self.resolver.resolve(&self.source) {
            Ok(manifest) => Some(manifest.clone()),
            Err(StrategyError::MissingRequiredManifest { .. })
                if self.config.package_name.is_some() =>
            {
                None
            }
            Err(e) => return Err(e),
        };

        let update = match resolved {
            Some(manifest) => {
                UpdateDirective::new(manifest.path, PackageJson::new(version.clone()))
                    .with_cached_contents(manifest.contents)
            }
            None => {
                let path = self.config.path.add_path(FALLBACK_MANIFEST);
                debug!(manifest = %path, "no manifest found, using configured package name");
                UpdateDirective::new(path, PackageJson::new(version.clone()))
            }
        };
        Ok(update)
    }
}

/// Strips an npm scope (`@scope/name` becomes `name`). `None` and empty input
/// yield an empty string.
#[must_use]
pub fn normalize_component(component: Option<&str>) -> String {
    let Some(component) = component.filter(|c| !c.is_empty()) else {
        return String::new();
    };

    component
        .strip_prefix('@')
        .and_then(|rest| rest.split_once('/'))
        .filter(|(scope, _)| {
            !scope.is_empty()
                && scope
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        })
        .map_or_else(
            || component.to_string(),
            |(_, name)| name.split('/').next().unwrap_or(name).to_string(),
        )
}
