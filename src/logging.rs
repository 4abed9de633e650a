use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "STONE_CLASSIFIER_LOG";

/// Errors only, which also silences ONNX Runtime's informational output.
const DEFAULT_FILTER: &str = "error";

/// Install the stderr subscriber. Stdout carries the single result line, so
/// logs never go there. Calling this twice is harmless.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
