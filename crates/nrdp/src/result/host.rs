//! Host check result.

use super::fields::Fields;
use super::perf_data::{Metric, PerfData};
use super::state::{HostState, State};
use crate::error::ValidationError;

/// Outcome of a check scoped to a whole host.
///
/// Every setter validates its input and leaves the record unchanged when it
/// fails, so a `HostResult` may be incomplete but is never invalid.
///
/// ```
/// use nrdp::{HostResult, HostState};
///
/// let result = HostResult::new()
///     .with_host("web01")?
///     .with_state(HostState::Down)
///     .with_output("PING timed out")?;
///
/// assert_eq!(result.formatted(), "DOWN: PING timed out");
/// # Ok::<(), nrdp::ValidationError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostResult {
    fields: Fields<HostState>,
}

impl HostResult {
    /// Create an empty result with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Result<Self, ValidationError> {
        self.set_host(host)?;
        Ok(self)
    }

    pub fn with_state(mut self, state: HostState) -> Self {
        self.set_state(state);
        self
    }

    pub fn with_state_code(mut self, code: i64) -> Result<Self, ValidationError> {
        self.set_state_code(code)?;
        Ok(self)
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Result<Self, ValidationError> {
        self.set_output(output)?;
        Ok(self)
    }

    pub fn with_long_output(mut self, long_output: impl Into<String>) -> Self {
        self.set_long_output(long_output);
        self
    }

    pub fn host(&self) -> Option<&str> {
        self.fields.host.as_deref()
    }

    /// Set the host name; it must be non-empty and a single line
    pub fn set_host(&mut self, host: impl Into<String>) -> Result<(), ValidationError> {
        self.fields.set_host(host)
    }

    pub fn state(&self) -> Option<HostState> {
        self.fields.state
    }

    pub fn set_state(&mut self, state: HostState) {
        self.fields.state = Some(state);
    }

    /// Set the state from its raw code, rejecting anything outside `0..=3`
    pub fn set_state_code(&mut self, code: i64) -> Result<(), ValidationError> {
        self.fields.set_state_code(code)
    }

    pub fn state_string(&self) -> Option<&'static str> {
        self.fields.state.map(State::name)
    }

    pub fn output(&self) -> Option<&str> {
        self.fields.output.as_deref()
    }

    /// Set the one-line summary
    pub fn set_output(&mut self, output: impl Into<String>) -> Result<(), ValidationError> {
        self.fields.set_output(output)
    }

    pub fn long_output(&self) -> Option<&str> {
        self.fields.long_output.as_deref()
    }

    /// Set the extended detail; may span several lines
    pub fn set_long_output(&mut self, long_output: impl Into<String>) {
        self.fields.long_output = Some(long_output.into());
    }

    pub fn perf_data(&self) -> &PerfData {
        &self.fields.perf_data
    }

    /// Attach a metric under `label`, replacing any earlier one in place
    pub fn add_perf_data(&mut self, label: &str, metric: Metric) -> Result<(), ValidationError> {
        self.fields.add_perf_data(label, &metric)
    }

    /// Render the `<output>` text: `STATE[: output][ | perf data][\nlong output]`
    pub fn formatted(&self) -> String {
        self.fields.formatted()
    }
}
