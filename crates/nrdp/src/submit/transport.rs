//! HTTP transport for submissions.

use std::fs;
use std::path::Path;

use async_trait::async_trait;
use url::Url;

use crate::config::{BasicAuth, ClientCert, SubmitterConfig};
use crate::error::{ConfigError, TransportError};

/// Sends one form-encoded POST and reports the response status.
///
/// Implementations must not retry; an `Err` means no HTTP response was
/// received at all.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_form(&self, endpoint: &str, form: &[(&str, &str)]) -> Result<u16, TransportError>;
}

/// reqwest-backed transport with optional basic auth and client certificate
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    auth: Option<BasicAuth>,
}

impl HttpTransport {
    pub fn new(config: &SubmitterConfig) -> Result<Self, ConfigError> {
        validate_endpoint(&config.endpoint)?;

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .user_agent(concat!("nrdp/", env!("CARGO_PKG_VERSION")));

        if let Some(cert) = &config.cert {
            builder = builder.identity(load_identity(cert)?);
        }

        let client = builder.build().map_err(ConfigError::Client)?;

        Ok(Self { client, auth: config.auth.clone() })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_form(&self, endpoint: &str, form: &[(&str, &str)]) -> Result<u16, TransportError> {
        let mut request = self.client.post(endpoint).form(form);

        if let Some(auth) = &self.auth {
            request = request.basic_auth(&auth.username, auth.password.as_ref());
        }

        let response = request.send().await?;

        Ok(response.status().as_u16())
    }
}

/// The endpoint must at least be an absolute http(s) URL for reqwest to use it
fn validate_endpoint(endpoint: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };

    let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme {other}"))),
    }
}

/// Concatenate the PEM file(s) into one buffer holding certificate and key
fn load_identity(cert: &ClientCert) -> Result<reqwest::Identity, ConfigError> {
    let paths = cert.paths();
    let mut pem = Vec::new();

    for path in &paths {
        let contents = fs::read(path).map_err(|e| certificate_error(path, e))?;
        pem.extend_from_slice(&contents);
        if !pem.ends_with(b"\n") {
            pem.push(b'\n');
        }
    }

    reqwest::Identity::from_pem(&pem).map_err(|e| certificate_error(paths[0], e))
}

fn certificate_error(path: &Path, error: impl ToString) -> ConfigError {
    ConfigError::Certificate { path: path.display().to_string(), reason: error.to_string() }
}
