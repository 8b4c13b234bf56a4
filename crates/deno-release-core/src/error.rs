use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("failed to parse remote URL '{url}'")]
    UrlParse {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid repository path in remote URL '{url}': expected owner/repo format")]
    InvalidRepositoryPath { url: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
