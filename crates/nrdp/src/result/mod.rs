//! Check result records.
//!
//! This module contains the host and service result types, their state
//! codes and the performance data they carry.

mod fields;
pub mod host;
pub mod perf_data;
pub mod service;
pub mod state;

pub use host::HostResult;
pub use perf_data::{Metric, PerfData, PerfValue};
pub use service::ServiceResult;
pub use state::{HostState, ServiceState, State};

/// A host or service result, as batched into one checkresults document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Host(HostResult),
    Service(ServiceResult),
}

impl CheckResult {
    /// Value of the `type` attribute on `<checkresult>`
    pub fn kind(&self) -> &'static str {
        match self {
            CheckResult::Host(_) => "host",
            CheckResult::Service(_) => "service",
        }
    }

    pub fn host(&self) -> Option<&str> {
        match self {
            CheckResult::Host(result) => result.host(),
            CheckResult::Service(result) => result.host(),
        }
    }

    /// Numeric state code, if one has been set
    pub fn state_code(&self) -> Option<u8> {
        match self {
            CheckResult::Host(result) => result.state().map(State::code),
            CheckResult::Service(result) => result.state().map(State::code),
        }
    }

    pub fn formatted(&self) -> String {
        match self {
            CheckResult::Host(result) => result.formatted(),
            CheckResult::Service(result) => result.formatted(),
        }
    }
}

impl From<HostResult> for CheckResult {
    fn from(result: HostResult) -> Self {
        CheckResult::Host(result)
    }
}

impl From<ServiceResult> for CheckResult {
    fn from(result: ServiceResult) -> Self {
        CheckResult::Service(result)
    }
}
