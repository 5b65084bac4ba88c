use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Install a stderr `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `fallback` (the config's
/// `logging.filter`) is used. A second call is a no-op.
pub fn init(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
