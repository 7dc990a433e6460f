#[cfg(test)]
#[path = "../tests/unit/cli_test.rs"]
mod cli_test;

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use tsp_plot::models::read_instance_file;
use tsp_plot::plots::{PlotConfig, read_config};
use tsp_plot::utils::{InfoLogger, create_silent_logger};
use tsp_plot::TspPlotter;

pub const SOLUTION_ARG_NAME: &str = "SOLUTION";
pub const OUTPUT_ARG_NAME: &str = "OUTPUT";
pub const INSTANCE_ARG_NAME: &str = "instance-path";
pub const CONFIG_ARG_NAME: &str = "config";
pub const LOG_ARG_NAME: &str = "log";

pub fn get_app() -> Command {
    Command::new("plot_solution")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Plots TSP solutions over their instance, one panel per solution")
        .arg(
            Arg::new(SOLUTION_ARG_NAME)
                .help("Sets a solution file or a directory with solution files (*.txt)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new(OUTPUT_ARG_NAME)
                .help("Sets an output image file, the format is defined by the extension")
                .required(false)
                .default_value("output.png")
                .index(2),
        )
        .arg(
            Arg::new(INSTANCE_ARG_NAME)
                .help("Specifies path to TSP instance")
                .long(INSTANCE_ARG_NAME)
                .required(false)
                .default_value("data/TSPB.csv"),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to drawing config in json format")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_app(matches: &ArgMatches) -> Result<(), String> {
    let solution_path = get_path(matches, SOLUTION_ARG_NAME)?;
    let output_path = get_path(matches, OUTPUT_ARG_NAME)?;
    let instance_path = get_path(matches, INSTANCE_ARG_NAME)?;

    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| {
            File::open(path)
                .map_err(|err| format!("cannot open config file '{path}': '{err}'"))
                .and_then(|file| read_config(BufReader::new(file)).map_err(|err| err.to_string()))
        })
        .unwrap_or_else(|| Ok(PlotConfig::default()))?;

    let logger: InfoLogger =
        if matches.get_flag(LOG_ARG_NAME) { Arc::new(|msg: &str| println!("{msg}")) } else { create_silent_logger() };

    let instance = read_instance_file(instance_path).map_err(|err| err.to_string())?;

    TspPlotter::new(instance)
        .with_config(config)
        .with_logger(logger)
        .plot(solution_path, output_path)
        .map_err(|err| format!("cannot plot solutions: '{err}'"))
}

fn get_path<'a>(matches: &'a ArgMatches, arg_name: &str) -> Result<&'a Path, String> {
    matches.get_one::<String>(arg_name).map(Path::new).ok_or_else(|| format!("missing '{arg_name}' argument"))
}
