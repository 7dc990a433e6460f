//! A collection of various utility helpers.

mod error;
pub use self::error::*;

use std::sync::Arc;

/// A logger type which is called with various information regarding the plotting progress.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Creates a logger which ignores all messages.
pub fn create_silent_logger() -> InfoLogger {
    Arc::new(|_| {})
}
