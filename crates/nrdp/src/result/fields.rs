//! Field storage shared by host and service results.

use super::perf_data::{Metric, PerfData};
use super::state::State;
use crate::error::ValidationError;
use crate::validation::{validate_name, validate_single_line};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Fields<S> {
    pub(crate) host: Option<String>,
    pub(crate) state: Option<S>,
    pub(crate) output: Option<String>,
    pub(crate) long_output: Option<String>,
    pub(crate) perf_data: PerfData,
}

impl<S> Default for Fields<S> {
    fn default() -> Self {
        Self {
            host: None,
            state: None,
            output: None,
            long_output: None,
            perf_data: PerfData::new(),
        }
    }
}

impl<S: State> Fields<S> {
    pub(crate) fn set_host(&mut self, host: impl Into<String>) -> Result<(), ValidationError> {
        let host = host.into();
        validate_name("host", &host)?;
        self.host = Some(host);
        Ok(())
    }

    pub(crate) fn set_state_code(&mut self, code: i64) -> Result<(), ValidationError> {
        self.state = Some(S::from_code(code)?);
        Ok(())
    }

    pub(crate) fn set_output(&mut self, output: impl Into<String>) -> Result<(), ValidationError> {
        let output = output.into();
        validate_single_line("output", &output)?;
        self.output = Some(output);
        Ok(())
    }

    pub(crate) fn add_perf_data(&mut self, label: &str, metric: &Metric) -> Result<(), ValidationError> {
        self.perf_data.add(label, metric)
    }

    /// `STATE[: output][ | perf data][\nlong output]`
    pub(crate) fn formatted(&self) -> String {
        let mut formatted = self.state.unwrap_or(S::UNKNOWN).name().to_string();

        if let Some(output) = self.output.as_deref().filter(|output| !output.is_empty()) {
            formatted.push_str(": ");
            formatted.push_str(output);
        }

        if !self.perf_data.is_empty() {
            formatted.push_str(" | ");
            formatted.push_str(&self.perf_data.to_string());
        }

        if let Some(long_output) = self.long_output.as_deref().filter(|long| !long.is_empty()) {
            formatted.push('\n');
            formatted.push_str(long_output);
        }

        formatted
    }
}
