use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpdaterError {
    #[error("failed to parse {file} as JSON")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected '{field}' in {file} to be a JSON {expected}")]
    Shape {
        file: &'static str,
        field: String,
        expected: &'static str,
    },

    #[error("{file} does not exist and cannot be created by this updater")]
    MissingContent { file: &'static str },

    #[error("failed to serialize JSON")]
    Serialize(#[source] serde_json::Error),
}
