//! NRDP - passive check result submission for Nagios-compatible servers
//!
//! This library builds validated host and service check results, renders
//! them into the `checkresults` XML document and POSTs it to an NRDP
//! endpoint.
//!
//! ```no_run
//! use nrdp::{Metric, ServiceResult, ServiceState, Submitter, SubmitterConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut result = ServiceResult::new()
//!     .with_host("web01")?
//!     .with_service("HTTP")?
//!     .with_state(ServiceState::Ok)
//!     .with_output("200 OK")?;
//! result.add_perf_data("latency", Metric::new(12.5).units("ms").warning(50).critical(100))?;
//!
//! let config = SubmitterConfig::new("https://nagios.example.com/nrdp/", "secret");
//! let submitter = Submitter::new(config)?;
//! let accepted = submitter.submit(&[result.into()]).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod result;
pub mod submit;
pub mod validation;

// Re-export main types
pub use config::{BasicAuth, ClientCert, SubmitterConfig};
pub use document::{build_document, build_document_string};
pub use error::{ConfigError, DocumentError, SubmitError, TransportError, ValidationError};
pub use result::{
    CheckResult, HostResult, HostState, Metric, PerfData, PerfValue, ServiceResult, ServiceState,
    State,
};
pub use submit::{HttpTransport, Submitter, Transport};
