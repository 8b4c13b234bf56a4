use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use deno_release_core::FileContents;

use crate::traits::ContentSource;
use crate::{Result, StrategyError};

/// Scripted content source that records every path it is asked for.
#[derive(Default)]
pub struct MockContentSource {
    files: HashMap<String, FileContents>,
    failures: HashSet<String>,
    fetched: Mutex<Vec<String>>,
}

impl MockContentSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        let sha = format!("sha-{}", self.files.len());
        self.files
            .insert(path.to_string(), FileContents::new(content, sha));
        self
    }

    /// Makes reads of `path` fail with a permission error.
    #[must_use]
    pub fn with_failure(mut self, path: &str) -> Self {
        self.failures.insert(path.to_string());
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().expect("lock poisoned").clone()
    }
}

impl ContentSource for MockContentSource {
    fn file_contents_on_branch(&self, path: &str, branch: &str) -> Result<FileContents> {
        self.fetched
            .lock()
            .expect("lock poisoned")
            .push(path.to_string());

        if self.failures.contains(path) {
            return Err(StrategyError::Source {
                path: path.to_string(),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "permission denied",
                )),
            });
        }

        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| StrategyError::FileNotFound {
                path: path.to_string(),
                branch: branch.to_string(),
            })
    }
}
