//! Performance data attached to a check result.
//!
//! Each metric is rendered once, when it is added, into the
//! `value[units][;warn;crit;min;max]` form Nagios expects after the `|`.

use std::fmt;

use crate::error::ValidationError;
use crate::validation::{validate_label, validate_units};

/// A numeric metric value or threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PerfValue {
    Int(i128),
    Float(f64),
}

impl PerfValue {
    fn check_finite(self, field: &'static str) -> Result<Self, ValidationError> {
        match self {
            PerfValue::Float(value) if !value.is_finite() => {
                Err(ValidationError::InvalidNumber { field })
            }
            _ => Ok(self),
        }
    }
}

impl fmt::Display for PerfValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PerfValue::Int(value) => write!(f, "{value}"),
            // Keep `50.0` distinct from the integer `50`
            PerfValue::Float(value) if value.fract() == 0.0 => write!(f, "{value:.1}"),
            PerfValue::Float(value) => write!(f, "{value}"),
        }
    }
}

macro_rules! perf_value_from {
    ($variant:ident => $($ty:ty),+) => {
        $(
            impl From<$ty> for PerfValue {
                fn from(value: $ty) -> Self {
                    PerfValue::$variant(value.into())
                }
            }
        )+
    };
}

perf_value_from!(Int => i8, i16, i32, i64, i128, u8, u16, u32, u64);
perf_value_from!(Float => f64);

impl From<isize> for PerfValue {
    fn from(value: isize) -> Self {
        PerfValue::Int(value as i128)
    }
}

impl From<usize> for PerfValue {
    fn from(value: usize) -> Self {
        PerfValue::Int(value as i128)
    }
}

/// Goes through the shortest `f32` text so `0.1f32` stays `0.1`.
impl From<f32> for PerfValue {
    fn from(value: f32) -> Self {
        PerfValue::Float(value.to_string().parse().unwrap_or(f64::from(value)))
    }
}

/// One metric and its optional thresholds, passed to `add_perf_data`.
///
/// ```
/// use nrdp::Metric;
///
/// let metric = Metric::new(12.5).units("ms").warning(50).critical(100);
/// assert_eq!(metric.render().unwrap(), "12.5ms;50;100;;");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    value: PerfValue,
    units: String,
    warning: Option<PerfValue>,
    critical: Option<PerfValue>,
    minimum: Option<PerfValue>,
    maximum: Option<PerfValue>,
}

impl Metric {
    pub fn new(value: impl Into<PerfValue>) -> Self {
        Self {
            value: value.into(),
            units: String::new(),
            warning: None,
            critical: None,
            minimum: None,
            maximum: None,
        }
    }

    /// Unit of measure, e.g. `ms`, `%`, `B`
    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    pub fn warning(mut self, warning: impl Into<PerfValue>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    pub fn critical(mut self, critical: impl Into<PerfValue>) -> Self {
        self.critical = Some(critical.into());
        self
    }

    pub fn minimum(mut self, minimum: impl Into<PerfValue>) -> Self {
        self.minimum = Some(minimum.into());
        self
    }

    pub fn maximum(mut self, maximum: impl Into<PerfValue>) -> Self {
        self.maximum = Some(maximum.into());
        self
    }

    /// Validate and render the metric.
    ///
    /// The threshold suffix is only written when at least one threshold is
    /// set; absent thresholds inside it are left empty.
    pub fn render(&self) -> Result<String, ValidationError> {
        validate_units(&self.units)?;

        let value = self.value.check_finite("value")?;
        let thresholds = [
            ("warning", self.warning),
            ("critical", self.critical),
            ("minimum", self.minimum),
            ("maximum", self.maximum),
        ];

        let mut rendered = format!("{value}{}", self.units);

        if thresholds.iter().any(|(_, threshold)| threshold.is_some()) {
            for (field, threshold) in thresholds {
                rendered.push(';');
                if let Some(threshold) = threshold {
                    rendered.push_str(&threshold.check_finite(field)?.to_string());
                }
            }
        }

        Ok(rendered)
    }
}

/// Insertion-ordered label → rendered metric store.
///
/// Re-adding a label replaces its value but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerfData {
    entries: Vec<(String, String)>,
}

impl PerfData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate, render and store `metric` under `label`.
    pub fn add(&mut self, label: &str, metric: &Metric) -> Result<(), ValidationError> {
        validate_label(label)?;
        let rendered = metric.render()?;

        match self.entries.iter_mut().find(|(existing, _)| existing == label) {
            Some((_, value)) => *value = rendered,
            None => self.entries.push((label.to_string(), rendered)),
        }

        Ok(())
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(label, value)| (label.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Space separated `'label'=value` pairs.
impl fmt::Display for PerfData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (label, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "'{label}'={value}")?;
        }
        Ok(())
    }
}
