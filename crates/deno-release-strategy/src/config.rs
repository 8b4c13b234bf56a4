use std::path::Path;

use deno_release_core::{ChangelogSection, ComponentPath};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Result, StrategyError};

pub const DEFAULT_CHANGELOG_PATH: &str = "CHANGELOG.md";

fn default_changelog_path() -> String {
    DEFAULT_CHANGELOG_PATH.to_string()
}

/// Per-component strategy settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StrategyConfig {
    #[serde(default)]
    pub path: ComponentPath,
    pub component: Option<String>,
    pub package_name: Option<String>,
    #[serde(default)]
    pub skip_changelog: bool,
    #[serde(default = "default_changelog_path")]
    pub changelog_path: String,
    pub changelog_sections: Option<Vec<ChangelogSection>>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            path: ComponentPath::root(),
            component: None,
            package_name: None,
            skip_changelog: false,
            changelog_path: default_changelog_path(),
            changelog_sections: None,
        }
    }
}

impl StrategyConfig {
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = ComponentPath::new(path);
        self
    }

    #[must_use]
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    #[must_use]
    pub fn with_package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = Some(package_name.into());
        self
    }

    #[must_use]
    pub fn with_skip_changelog(mut self, skip_changelog: bool) -> Self {
        self.skip_changelog = skip_changelog;
        self
    }

    #[must_use]
    pub fn with_changelog_path(mut self, changelog_path: impl Into<String>) -> Self {
        self.changelog_path = changelog_path.into();
        self
    }

    #[must_use]
    pub fn with_changelog_sections(mut self, sections: Vec<ChangelogSection>) -> Self {
        self.changelog_sections = Some(sections);
        self
    }

    /// # Errors
    ///
    /// Returns [`StrategyError::JsonConfig`] if the document is not a valid configuration.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(StrategyError::JsonConfig)
    }

    /// # Errors
    ///
    /// Returns [`StrategyError::TomlConfig`] if the document is not a valid configuration.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(StrategyError::TomlConfig)
    }
}

/// Repository-wide configuration: one [`StrategyConfig`] per component path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReleaseConfig {
    #[serde(default)]
    pub packages: IndexMap<String, StrategyConfig>,
}

impl ReleaseConfig {
    /// # Errors
    ///
    /// Returns [`StrategyError::JsonConfig`] if the document is not a valid configuration.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content).map_err(StrategyError::JsonConfig)?;
        Ok(config.with_package_paths())
    }

    /// # Errors
    ///
    /// Returns [`StrategyError::TomlConfig`] if the document is not a valid configuration.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(StrategyError::TomlConfig)?;
        Ok(config.with_package_paths())
    }

    /// Reads a `.toml` file as TOML and anything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::ConfigRead`] if the file cannot be read, or a
    /// parse error if its content is not a valid configuration.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| StrategyError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        if is_toml {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    #[must_use]
    pub fn package(&self, path: &str) -> Option<&StrategyConfig> {
        self.packages.get(ComponentPath::new(path).as_str())
    }

    fn with_package_paths(mut self) -> Self {
        for (path, config) in &mut self.packages {
            config.path = ComponentPath::new(path.clone());
        }
        self
    }
}
