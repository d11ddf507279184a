//! Submitter: builds the document and POSTs it once.

use std::fmt;

use tracing::{debug, info, warn};

use super::transport::{HttpTransport, Transport};
use super::SUBMIT_COMMAND;
use crate::config::SubmitterConfig;
use crate::document::build_document_string;
use crate::error::{ConfigError, DocumentError, SubmitError};
use crate::result::CheckResult;

/// Submits batches of check results to one NRDP endpoint.
///
/// Each call sends exactly one request; there is no retry. Calls share no
/// mutable state, so one submitter can serve concurrent tasks as long as
/// each passes its own batch.
pub struct Submitter<T = HttpTransport> {
    endpoint: String,
    token: String,
    transport: T,
}

impl<T: fmt::Debug> fmt::Debug for Submitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submitter")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .field("transport", &self.transport)
            .finish()
    }
}

impl Submitter<HttpTransport> {
    /// Validate `config` and build the default reqwest transport from it
    pub fn new(config: SubmitterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self { endpoint: config.endpoint, token: config.token, transport })
    }
}

impl<T: Transport> Submitter<T> {
    /// Validate `config` and submit through `transport` instead of reqwest
    pub fn with_transport(config: SubmitterConfig, transport: T) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { endpoint: config.endpoint, token: config.token, transport })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Submit `results`, returning whether the endpoint accepted them.
    ///
    /// Transport failures and non-2xx responses are logged and reported as
    /// `Ok(false)`. A batch that cannot be turned into a document is an
    /// error, and nothing is sent.
    pub async fn submit(&self, results: &[CheckResult]) -> Result<bool, DocumentError> {
        match self.try_submit(results).await {
            Ok(_) => Ok(true),
            Err(SubmitError::Document(error)) => Err(error),
            Err(error) => {
                warn!(endpoint = %self.endpoint, "Check result submission failed: {error}");
                Ok(false)
            }
        }
    }

    /// Submit `results` and return the 2xx status, or why the submission
    /// failed.
    pub async fn try_submit(&self, results: &[CheckResult]) -> Result<u16, SubmitError> {
        let document = build_document_string(results)?;

        let form = [
            ("cmd", SUBMIT_COMMAND),
            ("token", self.token.as_str()),
            ("XMLDATA", document.as_str()),
        ];

        debug!(endpoint = %self.endpoint, results = results.len(), "Submitting check results");

        let status = self.transport.post_form(&self.endpoint, &form).await?;

        if !(200..300).contains(&status) {
            return Err(SubmitError::Rejected { status });
        }

        info!(endpoint = %self.endpoint, status, results = results.len(), "Submitted check results");

        Ok(status)
    }
}
