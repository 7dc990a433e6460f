//! A crate to visualize ***Traveling Salesman Problem*** solutions.
//!
//! It reads an instance (point coordinates with per-point costs) and one or many tours over it,
//! then renders every tour as a separate panel of a single image.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//! use tsp_plot::plot_solutions;
//!
//! plot_solutions(Path::new("solutions"), Path::new("output.png"), Path::new("data/TSPB.csv")).unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub mod models;
pub mod plots;
pub mod utils;

mod plotter;
pub use self::plotter::*;
