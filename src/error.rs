/// Error types for the roster and wall collaborators
use thiserror::Error;

/// Failure while reading the roster. Every variant ends the run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// No roster access token was configured.
    #[error("roster credential is not configured ({0} is not set)")]
    MissingCredential(&'static str),

    /// The roster store answered with a non-2xx status.
    #[error("roster API error: {status} - {body}")]
    UpstreamHttp { status: u16, body: String },

    /// Network failure or a body that is not the expected JSON.
    #[error("roster request failed: {detail}")]
    Transport { detail: String },
}

/// Failure while posting the announcement.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PublishError {
    /// No wall access token was configured.
    #[error("wall credential is not configured ({0} is not set)")]
    MissingCredential(&'static str),

    /// The wall API answered with a non-2xx status.
    #[error("wall API HTTP error: {status} - {body}")]
    UpstreamHttp { status: u16, body: String },

    /// HTTP succeeded but the wall API rejected the request.
    #[error("wall API error {code}: {message}")]
    ApiLevel { code: i64, message: String },

    /// Network failure or an unreadable response.
    #[error("wall request failed: {detail}")]
    Transport { detail: String },
}

/// Invalid settings detected before any run starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a signed integer, got '{value}'")]
    InvalidInteger { name: &'static str, value: String },

    #[error("{name} must be a valid URL, got '{value}'")]
    InvalidUrl { name: &'static str, value: String },
}
