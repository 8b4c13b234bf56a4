use semver::Version;
use serde_json::Value;

use crate::json::{parse_object, stringify_like};
use crate::{ContentUpdater, Result};

const FILE: &str = "samples manifest";

/// Points the samples project's dependency on the package at the new version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplesPackageJson {
    pub version: Version,
    pub package_name: String,
}

impl SamplesPackageJson {
    #[must_use]
    pub fn new(version: Version, package_name: impl Into<String>) -> Self {
        Self {
            version,
            package_name: package_name.into(),
        }
    }
}

impl ContentUpdater for SamplesPackageJson {
    fn update_content(&self, content: Option<&str>) -> Result<String> {
        let mut samples = parse_object(content, FILE)?;
        let original = content.unwrap_or_default();

        let Some(dependency) = samples
            .get_mut("dependencies")
            .and_then(Value::as_object_mut)
            .and_then(|dependencies| dependencies.get_mut(&self.package_name))
        else {
            return Ok(original.to_string());
        };
        *dependency = Value::String(format!("^{}", self.version));

        stringify_like(&samples, original)
    }
}
