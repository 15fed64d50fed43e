//! Shared observability setup for orgdesk processes.
//!
//! The domain crates emit `tracing` events but never install a subscriber;
//! the hosting process calls [`init`] once at startup.

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
