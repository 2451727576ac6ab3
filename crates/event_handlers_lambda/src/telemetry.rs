use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Installs the JSON log formatter used by every handler binary.
///
/// CloudWatch stamps each line itself, so timestamps and ANSI colours are
/// left out. The level comes from `RUST_LOG`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .json()
        .try_init();
}
