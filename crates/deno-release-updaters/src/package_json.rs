use semver::Version;
use serde_json::Value;

use crate::json::{parse_object, stringify_like};
use crate::{ContentUpdater, Result};

const FILE: &str = "package manifest";

/// Sets the top-level `version` of a `package.json` or `deno.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageJson {
    pub version: Version,
}

impl PackageJson {
    #[must_use]
    pub fn new(version: Version) -> Self {
        Self { version }
    }
}

impl ContentUpdater for PackageJson {
    fn update_content(&self, content: Option<&str>) -> Result<String> {
        let mut manifest = parse_object(content, FILE)?;
        manifest.insert(
            "version".to_string(),
            Value::String(self.version.to_string()),
        );
        stringify_like(&manifest, content.unwrap_or_default())
    }
}
