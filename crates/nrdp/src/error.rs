//! Error types for the NRDP client.
//!
//! Validation errors are raised synchronously by record setters, document
//! errors by the builder, and transport errors only surface through
//! [`crate::Submitter::try_submit`].

use thiserror::Error;

/// A field or metric argument was rejected at assignment time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} must be a single line")]
    InvalidLine { field: &'static str },

    #[error("{field} code {value} is outside 0..=3")]
    InvalidRange { field: &'static str, value: i64 },

    #[error("{field} is not a state code: {value:?}")]
    InvalidState { field: &'static str, value: String },

    #[error("invalid performance data label {label:?}")]
    InvalidLabel { label: String },

    #[error("invalid performance data units {units:?}")]
    InvalidUnits { units: String },

    #[error("performance data {field} must be a finite number")]
    InvalidNumber { field: &'static str },
}

/// The checkresults document could not be produced.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("result #{index} cannot be submitted: {reason}")]
    InvalidResult { index: usize, reason: String },

    #[error("failed to write document: {0}")]
    Write(String),
}

/// Submitter configuration is incomplete or unusable.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be a non-empty string")]
    MissingField(&'static str),

    #[error("invalid endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("client certificate {path:?}: {reason}")]
    Certificate { path: String, reason: String },

    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// The request never produced an HTTP response.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

/// Detailed outcome of a failed submission.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("endpoint rejected submission with status {status}")]
    Rejected { status: u16 },
}
