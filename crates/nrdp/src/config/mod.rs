//! Submitter configuration.
//!
//! This module defines the endpoint, credential and transport settings used
//! to build a [`crate::Submitter`], and loads them from TOML and the
//! environment.

mod methods;
mod types;

pub use types::{BasicAuth, ClientCert, SubmitterConfig};

/// Environment variable overriding the configured endpoint
pub const ENV_ENDPOINT: &str = "NRDP_ENDPOINT";

/// Environment variable overriding the configured token
pub const ENV_TOKEN: &str = "NRDP_TOKEN";

/// Request timeout applied when the config does not set one
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
