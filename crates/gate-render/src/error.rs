//! Error types for gate-render

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration at {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Config file too large: {path} is {size} bytes (max {max})")]
    ConfigTooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("Invalid front matter in {document}: {message}")]
    FrontMatter { document: String, message: String },

    #[error("{document}:{line}: '{tag}' block is never closed")]
    UnclosedBlock {
        document: String,
        tag: String,
        line: usize,
    },

    #[error("{document}:{line}: '{tag}' has no matching opening tag")]
    UnexpectedEndTag {
        document: String,
        tag: String,
        line: usize,
    },

    #[error("{document}:{line}: expected '{expected}' but found '{found}'")]
    MismatchedEndTag {
        document: String,
        expected: String,
        found: String,
        line: usize,
    },

    #[error("{document}:{line}: block '{{% {tag} {markup} %}}' failed: {source}")]
    Block {
        document: String,
        line: usize,
        tag: String,
        markup: String,
        #[source]
        source: gate_blocks::Error,
    },

    #[error("No handler registered for '{0}'")]
    UnregisteredTag(String),

    #[error(transparent)]
    Blocks(#[from] gate_blocks::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
