//! Contains models to represent a TSP instance and its solutions.

mod instance;
pub use self::instance::*;

mod tour;
pub use self::tour::*;

mod solutions;
pub use self::solutions::*;
