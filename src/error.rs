//! Error types for the content and configuration layers

use thiserror::Error;

/// Failures talking to the hosted content API
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("request to content API failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("content API returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode content API response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failures loading or validating site configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("missing required setting `{0}`")]
    Missing(&'static str),
}
