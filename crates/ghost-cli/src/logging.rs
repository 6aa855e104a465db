use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber: `RUST_LOG` wins, otherwise the level
/// given on the command line. Events go to stderr so the board stays
/// clean on stdout.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    // Ignore error if a global subscriber is already set (e.g., when running in tests)
    let _ = tracing::subscriber::set_global_default(subscriber);
}
