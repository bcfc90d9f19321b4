use crate::error::{ChoiceError, Result};
use tracing::warn;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Parses a filter such as `"info"`, `"debug"` or `"student_choices=trace"`.
pub fn log_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level)
        .map_err(|err| ChoiceError::InvalidArgument(format!("log level {level:?}: {err}")))
}

/// Installs a stderr logger filtered at `level`. Stdout is left to the
/// generated data. An unparsable level falls back to `warn` and says so.
pub fn init_tracing(level: &str) {
    let (filter, rejected) = match log_filter(level) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_LOG_LEVEL), Some(err)),
    };

    let console_layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    let _ = Registry::default().with(console_layer).try_init();

    if let Some(err) = rejected {
        warn!("{err}; using {DEFAULT_LOG_LEVEL}");
    }
}
