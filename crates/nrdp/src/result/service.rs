//! Service check result.

use super::fields::Fields;
use super::perf_data::{Metric, PerfData};
use super::state::{ServiceState, State};
use crate::error::ValidationError;
use crate::validation::validate_name;

/// Outcome of a check scoped to one service on a host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceResult {
    fields: Fields<ServiceState>,
    service: Option<String>,
}

impl ServiceResult {
    /// Create an empty result with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Result<Self, ValidationError> {
        self.set_host(host)?;
        Ok(self)
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Result<Self, ValidationError> {
        self.set_service(service)?;
        Ok(self)
    }

    pub fn with_state(mut self, state: ServiceState) -> Self {
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

    pub fn set_host(&mut self, host: impl Into<String>) -> Result<(), ValidationError> {
        self.fields.set_host(host)
    }

    pub fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }

    /// Set the service description as configured on the monitoring server
    pub fn set_service(&mut self, service: impl Into<String>) -> Result<(), ValidationError> {
        let service = service.into();
        validate_name("service", &service)?;
        self.service = Some(service);
        Ok(())
    }

    pub fn state(&self) -> Option<ServiceState> {
        self.fields.state
    }

    pub fn set_state(&mut self, state: ServiceState) {
        self.fields.state = Some(state);
    }

    pub fn set_state_code(&mut self, code: i64) -> Result<(), ValidationError> {
        self.fields.set_state_code(code)
    }

    pub fn state_string(&self) -> Option<&'static str> {
        self.fields.state.map(State::name)
    }

    pub fn output(&self) -> Option<&str> {
        self.fields.output.as_deref()
    }

    pub fn set_output(&mut self, output: impl Into<String>) -> Result<(), ValidationError> {
        self.fields.set_output(output)
    }

    pub fn long_output(&self) -> Option<&str> {
        self.fields.long_output.as_deref()
    }

    pub fn set_long_output(&mut self, long_output: impl Into<String>) {
        self.fields.long_output = Some(long_output.into());
    }

    pub fn perf_data(&self) -> &PerfData {
        &self.fields.perf_data
    }

    pub fn add_perf_data(&mut self, label: &str, metric: Metric) -> Result<(), ValidationError> {
        self.fields.add_perf_data(label, &metric)
    }

    pub fn formatted(&self) -> String {
        self.fields.formatted()
    }
}
