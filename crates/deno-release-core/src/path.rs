use serde::{Deserialize, Serialize};

pub const ROOT_PROJECT_PATH: &str = ".";

/// Repository-relative directory of a component. `.` is the repository root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ComponentPath(String);

impl ComponentPath {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let trimmed = path.trim_end_matches(['/', '\\']);
        if trimmed.is_empty() {
            return Self::root();
        }
        Self(trimmed.to_string())
    }

    #[must_use]
    pub fn root() -> Self {
        Self(ROOT_PROJECT_PATH.to_string())
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == ROOT_PROJECT_PATH
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prefixes `file` with the component directory.
    #[must_use]
    pub fn add_path(&self, file: &str) -> String {
        if self.is_root() {
            return file.to_string();
        }
        let file = file.trim_start_matches(['/', '\\']);
        format!("{}/{file}", self.0)
    }
}

impl From<String> for ComponentPath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<ComponentPath> for String {
    fn from(path: ComponentPath) -> Self {
        path.0
    }
}

impl Default for ComponentPath {
    fn default() -> Self {
        Self::root()
    }
}
