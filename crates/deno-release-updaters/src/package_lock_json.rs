use deno_release_core::VersionsMap;
use semver::Version;
use serde_json::Value;

use crate::json::{parse_object, stringify_like};
use crate::{ContentUpdater, Result};

const FILE: &str = "lockfile";

/// Syncs versions in `package-lock.json` and `npm-shrinkwrap.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLockJson {
    pub version: Version,
    pub versions_map: VersionsMap,
}

impl PackageLockJson {
    #[must_use]
    pub fn new(version: Version, versions_map: VersionsMap) -> Self {
        Self {
            version,
            versions_map,
        }
    }

    fn mapped_version(&self, entry: &serde_json::Map<String, Value>) -> Option<Value> {
        let name = entry.get("name").and_then(Value::as_str)?;
        self.versions_map
            .get(name)
            .map(|version| Value::String(version.to_string()))
    }
}

impl ContentUpdater for PackageLockJson {
    fn update_content(&self, content: Option<&str>) -> Result<String> {
        let mut lock = parse_object(content, FILE)?;
        let version = Value::String(self.version.to_string());
        lock.insert("version".to_string(), version.clone());

        let lockfile_version = lock.get("lockfileVersion").and_then(Value::as_u64);
        if matches!(lockfile_version, Some(2 | 3)) {
            if let Some(packages) = lock.get_mut("packages").and_then(Value::as_object_mut) {
                if let Some(root) = packages.get_mut("").and_then(Value::as_object_mut) {
                    root.insert("version".to_string(), version);
                }
                for entry in packages.values_mut().filter_map(Value::as_object_mut) {
                    if let Some(mapped) = self.mapped_version(entry) {
                        entry.insert("version".to_string(), mapped);
                    }
                }
            }
        }

        // lockfileVersion 1 keeps workspace packages under `dependencies`
        if let Some(dependencies) = lock.get_mut("dependencies").and_then(Value::as_object_mut) {
            for (name, dependency) in dependencies {
                let (Some(mapped), Some(dependency)) =
                    (self.versions_map.get(name), dependency.as_object_mut())
                else {
                    continue;
                };
                dependency.insert("version".to_string(), Value::String(mapped.to_string()));
            }
        }

        stringify_like(&lock, content.unwrap_or_default())
    }
}
