//! Tracing subscriber setup shared by NRDP client binaries and tests.

mod tracing;

pub use crate::tracing::{init, try_init};
