//! Logging bootstrap.
//!
//! Rosterly emits diagnostics through the `log` facade; the only mandatory
//! event is a load failure from the data source. Embedders that already run
//! a logger can skip this module entirely. For everything else,
//! [`init_logging`] starts a `flexi_logger` stderr sink exactly once per
//! process.
//!
//! # Invariants
//! - Initialization is idempotent: the first call wins, later calls are
//!   accepted and ignored.
//! - Initialization never panics.

use flexi_logger::{Logger, LoggerHandle};
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Initializes stderr logging at the given level spec (e.g. `"info"`,
/// `"rosterly=debug"`).
///
/// Returns a human-readable error string when the level spec is invalid or
/// the backend fails to start. Calling again after a successful init is a
/// no-op.
pub fn init_logging(level: &str) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let handle = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    // A racing second init loses; drop its handle and keep the first.
    let _ = LOGGER.set(handle);
    Ok(())
}

/// Returns the default log level for the current build mode.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}
