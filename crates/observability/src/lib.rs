//! Tracing/logging setup shared by binaries and test harnesses.
//!
//! Library crates only emit `tracing` events; installing a subscriber is the
//! embedding process's call, made once through [`init`].

/// Initialize process-wide logging from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, output format) and subscriber install.
pub mod tracing;

pub use self::tracing::{LogFormat, TracingConfig, UnknownLogFormat};
