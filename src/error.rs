//! Error handling for the skillspark application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillSparkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("The server is taking too long to respond. Please try again in a few minutes.")]
    Timeout,

    #[error("Upload failed: {0}")]
    ServiceRejected(String),

    #[error("Server error while analyzing resume.")]
    ServerError,

    #[error("Unable to analyze resume right now.")]
    AnalysisUnavailable,

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, SkillSparkError>;

/// Classify reqwest failures, keeping timeouts distinct from other transport errors
impl From<reqwest::Error> for SkillSparkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SkillSparkError::Timeout
        } else {
            SkillSparkError::Network(err.to_string())
        }
    }
}
