use tracing_subscriber::EnvFilter;

/// Filter for the diagnostic logs, read from `RUST_LOG`.
///
/// Everything is turned off when the variable is unset or invalid, so that stderr only
/// receives the error trace.
pub fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"))
}
