//! Host and service state codes.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Behaviour shared by [`HostState`] and [`ServiceState`].
pub trait State: Copy + fmt::Debug + fmt::Display + PartialEq + Eq {
    /// The "cannot be determined" state, code 3 for both variants
    const UNKNOWN: Self;

    /// Numeric code written into `<state>`
    fn code(self) -> u8;

    /// Uppercase name used as the first word of the formatted output
    fn name(self) -> &'static str;

    /// Convert a raw code, rejecting anything outside `0..=3`
    fn from_code(code: i64) -> Result<Self, ValidationError>;
}

/// Parse a decimal state code such as `"2"`.
fn parse_code<S: State>(value: &str) -> Result<S, ValidationError> {
    let code: i64 = value
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidState { field: "state", value: value.to_string() })?;

    S::from_code(code)
}

fn out_of_range(value: i64) -> ValidationError {
    ValidationError::InvalidRange { field: "state", value }
}

/// State of a host check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostState {
    /// The host is up
    Up,
    /// The host is down
    Down,
    /// Our path to the host is down
    Unreachable,
    /// The state of the host cannot be determined
    Unknown,
}

impl State for HostState {
    const UNKNOWN: Self = HostState::Unknown;

    fn code(self) -> u8 {
        match self {
            HostState::Up => 0,
            HostState::Down => 1,
            HostState::Unreachable => 2,
            HostState::Unknown => 3,
        }
    }

    fn name(self) -> &'static str {
        match self {
            HostState::Up => "UP",
            HostState::Down => "DOWN",
            HostState::Unreachable => "UNREACHABLE",
            HostState::Unknown => "UNKNOWN",
        }
    }

    fn from_code(code: i64) -> Result<Self, ValidationError> {
        match code {
            0 => Ok(HostState::Up),
            1 => Ok(HostState::Down),
            2 => Ok(HostState::Unreachable),
            3 => Ok(HostState::Unknown),
            _ => Err(out_of_range(code)),
        }
    }
}

impl TryFrom<i64> for HostState {
    type Error = ValidationError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl FromStr for HostState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_code(s)
    }
}

impl fmt::Display for HostState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// State of a service check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceState {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl State for ServiceState {
    const UNKNOWN: Self = ServiceState::Unknown;

    fn code(self) -> u8 {
        match self {
            ServiceState::Ok => 0,
            ServiceState::Warning => 1,
            ServiceState::Critical => 2,
            ServiceState::Unknown => 3,
        }
    }

    fn name(self) -> &'static str {
        match self {
            ServiceState::Ok => "OK",
            ServiceState::Warning => "WARNING",
            ServiceState::Critical => "CRITICAL",
            ServiceState::Unknown => "UNKNOWN",
        }
    }

    fn from_code(code: i64) -> Result<Self, ValidationError> {
        match code {
            0 => Ok(ServiceState::Ok),
            1 => Ok(ServiceState::Warning),
            2 => Ok(ServiceState::Critical),
            3 => Ok(ServiceState::Unknown),
            _ => Err(out_of_range(code)),
        }
    }
}

impl TryFrom<i64> for ServiceState {
    type Error = ValidationError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl FromStr for ServiceState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_code(s)
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
