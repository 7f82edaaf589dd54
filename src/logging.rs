/// Stderr logging for the binary.
///
/// The library only emits `tracing` events; this installs the subscriber.
/// `RUST_LOG` overrides the default filter.
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter: warnings only, or debug for this crate under `--debug`.
#[must_use]
pub fn default_filter(debug: bool) -> &'static str {
    if debug { "warn,keyglyph=debug" } else { "warn" }
}

/// Install the global subscriber. Safe to call once per process.
pub fn init(debug: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init();
}
