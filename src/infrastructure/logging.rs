//! Logging configuration
//!
//! Initializes tracing for the application. Output goes to stderr so that
//! command output on stdout stays clean.

/// Initializes logging with the specified level; `RUST_LOG` takes precedence
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(true)
        .try_init();
}
