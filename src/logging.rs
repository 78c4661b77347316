//! Diagnostic output for the `facetlist` binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the embedding application. The binary routes events to stderr so that
//! JSON written to stdout stays machine-readable.

use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a default filter directive.
#[must_use]
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	}
}

/// Install the global subscriber. `RUST_LOG` takes precedence over
/// `verbosity`. Calling this more than once keeps the first subscriber.
pub fn initialize(verbosity: u8) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}
