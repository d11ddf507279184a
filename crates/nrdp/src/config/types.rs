//! Configuration data structures for the submitter.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::DEFAULT_TIMEOUT_SECONDS;

/// Where and how to submit check results
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitterConfig {
    /// NRDP URL, e.g. `https://nagios.example.com/nrdp/`
    pub endpoint: String,

    /// Shared token configured on the NRDP server
    pub token: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// TLS client certificate presented to the endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert: Option<ClientCert>,

    /// HTTP basic auth in front of the endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<BasicAuth>,
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl fmt::Debug for SubmitterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmitterConfig")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .field("cert", &self.cert)
            .field("auth", &self.auth)
            .finish()
    }
}

/// HTTP basic auth credentials
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAuth {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// PEM client certificate, either one bundle holding certificate and key or
/// a separate certificate and key file.
///
/// In TOML: `cert = "/etc/nrdp/client.pem"` or
/// `cert = ["/etc/nrdp/client.crt", "/etc/nrdp/client.key"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClientCert {
    Bundle(PathBuf),
    Pair(PathBuf, PathBuf),
}

impl ClientCert {
    /// Files to read, in the order their PEM blocks are concatenated
    pub fn paths(&self) -> Vec<&Path> {
        match self {
            ClientCert::Bundle(bundle) => vec![bundle.as_path()],
            ClientCert::Pair(cert, key) => vec![cert.as_path(), key.as_path()],
        }
    }
}
