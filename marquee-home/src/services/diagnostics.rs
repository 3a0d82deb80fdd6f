//! Failure-record logging trait
//!
//! Load failures are part of a section's observable contract (one record
//! per failed cycle, fixed message), so the sink is injected rather than
//! reached through the global `log` facade. Ambient diagnostics elsewhere
//! in the crate still use `log` macros directly.

use crate::error::ApiError;

/// Structured failure-record sink.
pub trait LogService: Send + Sync {
    /// Record a failure with its source error.
    fn error_with_source(&self, message: &str, error: &ApiError);
}

/// Forwards failure records to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLogService;

impl LogService for DefaultLogService {
    fn error_with_source(&self, message: &str, error: &ApiError) {
        log::error!("{message}: {error}");
    }
}
