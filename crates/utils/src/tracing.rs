// Copyright 2023 Ulvetanna Inc.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter directives, e.g. `gadgets_circuits=debug`.
pub const LOG_ENV_VAR: &str = "GADGETS_LOG";

/// Installs a global subscriber printing spans and events to stderr.
///
/// The filter is read from [`LOG_ENV_VAR`], then from `RUST_LOG`, and defaults to `warn`.
/// Calling this more than once is harmless, later calls leave the first subscriber in place.
pub fn init_tracing() {
	let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
		.or_else(|_| EnvFilter::try_from_default_env())
		.unwrap_or_else(|_| EnvFilter::new("warn"));

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.try_init();
}
