use std::fmt;

use indexmap::IndexMap;
use semver::Version;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CoreError, Result};

pub const DEFAULT_FILE_MODE: &str = "100644";

/// Per-component versions for a release, keyed by package name in release order.
pub type VersionsMap = IndexMap<String, Version>;

/// Contents of a file as read from a branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContents {
    pub content: String,
    pub sha: String,
    pub mode: String,
}

impl FileContents {
    #[must_use]
    pub fn new(content: impl Into<String>, sha: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            sha: sha.into(),
            mode: DEFAULT_FILE_MODE.to_string(),
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryRef {
    pub owner: String,
    pub repo: String,
}

impl RepositoryRef {
    #[must_use]
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Accepts scheme URLs (`https://host/owner/repo.git`) as well as the
    /// scp-like form `git@host:owner/repo.git`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UrlParse` if the URL cannot be parsed and
    /// `CoreError::InvalidRepositoryPath` if it has fewer than two path segments.
    pub fn from_remote_url(remote: &str) -> Result<Self> {
        let path = match remote.split_once(':') {
            Some((host, path)) if !remote.contains("://") && host.contains('@') => {
                path.to_string()
            }
            _ => {
                let url = Url::parse(remote).map_err(|source| CoreError::UrlParse {
                    url: remote.to_string(),
                    source,
                })?;
                url.path().to_string()
            }
        };

        let path = path.trim_start_matches('/').trim_end_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        if segments.len() < 2 {
            return Err(CoreError::InvalidRepositoryPath {
                url: remote.to_string(),
            });
        }

        Ok(Self::new(segments[0], segments[1]))
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
