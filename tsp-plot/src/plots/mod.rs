//! Contains logic to lay out and draw tours as a multi-panel figure.

/// Type alias for the result of a drawing function.
pub type DrawResult<T> = Result<T, Box<dyn std::error::Error>>;

mod config;
pub use self::config::*;

mod layout;
pub use self::layout::*;

mod drawing;
pub use self::drawing::*;
