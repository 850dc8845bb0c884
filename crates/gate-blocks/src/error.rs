//! Error types for gate-blocks

use gate_version::VersionError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid block parameters '{markup}': {message}")]
    InvalidParameter { markup: String, message: String },

    #[error("Unknown block parameter '{key}' in '{markup}' (expected eq, gte, lte or inline)")]
    UnknownParameter { key: String, markup: String },

    #[error("Invalid {key} version: {source}")]
    InvalidVersion {
        key: String,
        value: String,
        #[source]
        source: VersionError,
    },

    #[error("Document has no '{field}' field to compare against")]
    MissingVersion { field: String },

    #[error("Invalid block tag name '{0}'")]
    InvalidTag(String),

    #[error("Failed to compile marker pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl Error {
    pub fn invalid_parameter(markup: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            markup: markup.into(),
            message: message.into(),
        }
    }
}
