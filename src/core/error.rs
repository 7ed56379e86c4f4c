//! Error types for the crate

use thiserror::Error;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tag error: {0}")]
    Tag(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}
