use deno_release_core::FileContents;
use serde_json::{Map, Value};
use thiserror::Error;

/// Manifest candidates in precedence order.
pub const DENO_CONFIG_FILES: [&str; 3] = ["deno.json", "deno.jsonc", "package.json"];

/// Reported as the expected manifest when no candidate list is configured.
pub const DEFAULT_MANIFEST_FILE: &str = DENO_CONFIG_FILES[0];

/// The manifest that won resolution for one release build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedManifest {
    pub file_name: String,
    pub path: String,
    pub contents: FileContents,
}

#[derive(Debug, Error)]
pub enum ManifestParseError {
    #[error("invalid JSON")]
    InvalidJson(#[source] serde_json::Error),

    #[error("invalid package manifest structure: expected a JSON object")]
    NotAnObject,
}

/// The fields of a manifest this crate reads. Everything else is kept in
/// `extra` uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDescriptor {
    pub name: Option<String>,
    pub version: Option<String>,
    pub extra: Map<String, Value>,
}

impl PackageDescriptor {
    /// Only the document's shape is validated. A `name` or `version` that is
    /// not a string reads as absent and stays in `extra`.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestParseError::InvalidJson`] for unparsable text and
    /// [`ManifestParseError::NotAnObject`] when the document is not a JSON
    /// object.
    pub fn parse(content: &str) -> Result<Self, ManifestParseError> {
        let value: Value =
            serde_json::from_str(content).map_err(ManifestParseError::InvalidJson)?;
        let Value::Object(mut extra) = value else {
            return Err(ManifestParseError::NotAnObject);
        };

        let name = take_string(&mut extra, "name");
        let version = take_string(&mut extra, "version");
        Ok(Self {
            name,
            version,
            extra,
        })
    }
}

fn take_string(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    if !map.get(key).is_some_and(Value::is_string) {
        return None;
    }
    match map.remove(key) {
        Some(Value::String(value)) => Some(value),
        _ => None,
    }
}
