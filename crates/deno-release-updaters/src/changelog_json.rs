use std::fmt;

use chrono::{SecondsFormat, Utc};
use deno_release_core::ConventionalCommit;
use semver::Version;
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::json::{parse_object, stringify_like};
use crate::{ContentUpdater, Result, UpdaterError};

const FILE: &str = "changelog.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProgrammingLanguage {
    #[serde(rename = "JAVASCRIPT")]
    JavaScript,
    #[serde(rename = "TYPESCRIPT")]
    TypeScript,
}

impl fmt::Display for ProgrammingLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::JavaScript => "JAVASCRIPT",
            Self::TypeScript => "TYPESCRIPT",
        };
        write!(f, "{s}")
    }
}

/// Prepends a release record to a machine-readable `changelog.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogJson {
    pub artifact_name: String,
    pub version: Version,
    pub commits: Vec<ConventionalCommit>,
    pub language: ProgrammingLanguage,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Change<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    sha: &'a str,
    message: &'a str,
    issues: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    breaking_change_note: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReleaseRecord<'a> {
    changes: Vec<Change<'a>>,
    version: String,
    language: ProgrammingLanguage,
    artifact_name: &'a str,
    id: String,
    create_time: &'a str,
}

impl<'a> From<&'a ConventionalCommit> for Change<'a> {
    fn from(commit: &'a ConventionalCommit) -> Self {
        Self {
            kind: &commit.kind,
            sha: &commit.sha,
            message: &commit.bare_message,
            issues: commit
                .references
                .iter()
                .map(|reference| reference.issue.as_str())
                .collect(),
            scope: commit.scope.as_deref(),
            breaking_change_note: commit.breaking_change_note(),
        }
    }
}

impl ChangelogJson {
    #[must_use]
    pub fn new(
        artifact_name: impl Into<String>,
        version: Version,
        commits: Vec<ConventionalCommit>,
        language: ProgrammingLanguage,
    ) -> Self {
        Self {
            artifact_name: artifact_name.into(),
            version,
            commits,
            language,
        }
    }
}

impl ContentUpdater for ChangelogJson {
    fn update_content(&self, content: Option<&str>) -> Result<String> {
        let mut changelog = parse_object(content, FILE)?;
        info!(
            version = %self.version,
            artifact = %self.artifact_name,
            "adding release to changelog.json"
        );

        let create_time = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let record = ReleaseRecord {
            changes: self.commits.iter().map(Change::from).collect(),
            version: self.version.to_string(),
            language: self.language,
            artifact_name: &self.artifact_name,
            id: Uuid::new_v4().to_string(),
            create_time: &create_time,
        };
        let record = serde_json::to_value(&record).map_err(UpdaterError::Serialize)?;

        let entries = changelog
            .entry("entries")
            .or_insert_with(|| Value::Array(Vec::new()))
            .as_array_mut()
            .ok_or_else(|| UpdaterError::Shape {
                file: FILE,
                field: "entries".to_string(),
                expected: "array",
            })?;
        entries.insert(0, record);
        changelog.insert("updateTime".to_string(), Value::String(create_time));

        stringify_like(&changelog, content.unwrap_or_default())
    }
}
