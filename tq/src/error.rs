//! Error types

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while parsing input or loading configuration
///
/// Queue operations themselves never fail: an empty extraction is `None`
/// and a rejected key adjustment is `false`.
#[derive(Debug, Error)]
pub enum TaskQueueError {
    #[error("Invalid integer '{token}'")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid task id: {0}")]
    InvalidTaskId(String),

    #[error("Invalid priority: {0}")]
    InvalidPriority(String),

    #[error("Failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
