//! Construction, loading and validation for [`SubmitterConfig`].

use std::path::Path;
use std::time::Duration;
use std::{env, fs};

use tracing::debug;

use super::types::{BasicAuth, ClientCert, SubmitterConfig};
use super::{DEFAULT_TIMEOUT_SECONDS, ENV_ENDPOINT, ENV_TOKEN};
use crate::error::ConfigError;

impl SubmitterConfig {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            cert: None,
            auth: None,
        }
    }

    /// Set basic auth credentials
    pub fn with_auth(mut self, username: impl Into<String>, password: Option<String>) -> Self {
        self.auth = Some(BasicAuth { username: username.into(), password });
        self
    }

    /// Set the client certificate
    pub fn with_cert(mut self, cert: ClientCert) -> Self {
        self.cert = Some(cert);
        self
    }

    /// Set request timeout
    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Parse a TOML document
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Read and parse a TOML file
    ///
    /// ```no_run
    /// let config = nrdp::SubmitterConfig::from_file("/etc/nrdp/client.toml")?
    ///     .with_env_overrides();
    /// # Ok::<(), nrdp::ConfigError>(())
    /// ```
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading submitter config from {}", path.display());

        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Replace endpoint and token with `NRDP_ENDPOINT` / `NRDP_TOKEN` when set
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            self.endpoint = endpoint;
        }
        if let Some(token) = lookup(ENV_TOKEN) {
            self.token = token;
        }
        self
    }

    /// Check the fields every submission needs
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::MissingField("endpoint"));
        }

        if self.token.trim().is_empty() {
            return Err(ConfigError::MissingField("token"));
        }

        if let Some(auth) = &self.auth {
            if auth.username.is_empty() {
                return Err(ConfigError::MissingField("auth.username"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let config = SubmitterConfig::new("https://nagios.example.com/nrdp/", "secret");

        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECONDS));
        assert!(config.auth.is_none());
        assert!(config.cert.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_fields() {
        let config = SubmitterConfig::new("", "secret");
        assert!(matches!(config.validate(), Err(ConfigError::MissingField("endpoint"))));

        let config = SubmitterConfig::new("https://nagios.example.com/nrdp/", "  ");
        assert!(matches!(config.validate(), Err(ConfigError::MissingField("token"))));

        let config = SubmitterConfig::new("https://nagios.example.com/nrdp/", "secret")
            .with_auth("", None);
        assert!(matches!(config.validate(), Err(ConfigError::MissingField("auth.username"))));
    }

    #[test]
    fn test_overrides() {
        let config = SubmitterConfig::new("https://old.example.com/nrdp/", "old").with_overrides(
            |name| match name {
                ENV_TOKEN => Some("new".to_string()),
                _ => None,
            },
        );

        assert_eq!(config.endpoint, "https://old.example.com/nrdp/");
        assert_eq!(config.token, "new");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = SubmitterConfig::new("https://nagios.example.com/nrdp/", "s3cr3t")
            .with_auth("nrdp", Some("hunter2".to_string()));

        let debug = format!("{config:?}");
        assert!(!debug.contains("s3cr3t"));
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("nrdp"));
    }
}
