//! Submission of checkresults documents to an NRDP endpoint.

mod submitter;
mod transport;

pub use submitter::Submitter;
pub use transport::{HttpTransport, Transport};

/// NRDP command for passive check results
pub const SUBMIT_COMMAND: &str = "submitcheck";
