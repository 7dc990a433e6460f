//! A command line interface to plot solutions of *Traveling Salesman Problem*.
//!
//! ## Usage
//!
//! - plot a single tour over the default instance (`data/TSPB.csv`) into `output.png`
//!
//!     `plot_solution solutions/greedy_cycle.txt`
//!
//! - plot every `.txt` tour in the directory side by side, using a specific instance
//!
//!     `plot_solution solutions/ comparison.svg --instance-path=data/TSPA.csv`
//!
//! For more details, simply run
//!
//!     plot_solution --help

mod cli;

use self::cli::{get_app, run_app};
use std::process;

fn main() {
    let matches = get_app().get_matches();

    if let Err(err) = run_app(&matches) {
        eprintln!("{err}");
        process::exit(1);
    }
}
