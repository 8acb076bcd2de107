use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the diagnostic subscriber on stderr.
///
/// Filtered by `RUST_LOG`, e.g. `RUST_LOG=pdfburger=debug`. User-facing
/// messages do not go through here.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pdfburger=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}
