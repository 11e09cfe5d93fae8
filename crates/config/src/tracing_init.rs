use tracing_subscriber::{fmt, EnvFilter};

/// Resolve the log filter: `RUST_LOG` wins, then `LOG_LEVEL`, then
/// `default_level`.
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env("RUST_LOG")
        .or_else(|_| EnvFilter::try_from_env("LOG_LEVEL"))
        .unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global fmt subscriber. A second call is a no-op and returns
/// `false`.
pub fn init_tracing(default_level: &str) -> bool {
    fmt()
        .with_env_filter(build_filter(default_level))
        .with_target(true)
        .try_init()
        .is_ok()
}
