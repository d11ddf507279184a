use std::env::{VarError, var};

use tracing::{level_filters::LevelFilter, warn};
use tracing_subscriber::{
    Layer, Registry, filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
    util::TryInitError,
};

/// Install the global subscriber at `INFO`, panicking if one is already set.
pub fn init() {
    tracing_subscriber::registry().with(log_layer(LevelFilter::INFO)).init();
}

/// Install the global subscriber unless another one already owns the slot.
///
/// Test binaries call this from every test, so a second call is not an error
/// worth surfacing beyond the returned value.
pub fn try_init() -> Result<(), TryInitError> {
    tracing_subscriber::registry().with(log_layer(LevelFilter::INFO)).try_init()
}

/// `RUST_LOG` picks the filter, `RUST_LOG_FORMAT=json` switches to JSON lines.
fn log_layer(level: LevelFilter) -> Box<dyn Layer<Registry> + Send + Sync> {
    let env_filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();

    match log_format().as_str() {
        "json" => tracing_subscriber::fmt::layer().json().with_filter(env_filter).boxed(),
        _ => tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_filter(env_filter)
            .boxed(),
    }
}

/// `RUST_LOG_FORMAT`, empty when unset or not valid unicode.
fn log_format() -> String {
    var("RUST_LOG_FORMAT")
        .inspect_err(|error| {
            if let VarError::NotUnicode(_) = error {
                warn!("Failed to read RUST_LOG_FORMAT, falling back to compact output: {error}")
            }
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_reported_not_panicking() {
        let _ = try_init();
        assert!(try_init().is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_log_format_falls_back_on_invalid_value() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        unsafe { std::env::set_var("RUST_LOG_FORMAT", OsStr::from_bytes(b"js\xffon")) };
        assert_eq!(log_format(), "");

        unsafe { std::env::set_var("RUST_LOG_FORMAT", "json") };
        assert_eq!(log_format(), "json");

        unsafe { std::env::remove_var("RUST_LOG_FORMAT") };
        assert_eq!(log_format(), "");
    }
}
