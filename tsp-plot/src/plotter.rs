#[cfg(test)]
#[path = "../tests/unit/plotter_test.rs"]
mod plotter_test;

use crate::models::*;
use crate::plots::*;
use crate::utils::{GenericResult, InfoLogger, create_silent_logger};
use std::path::Path;

/// Plots tours over the instance they were built for.
pub struct TspPlotter {
    instance: Instance,
    config: PlotConfig,
    logger: InfoLogger,
}

impl TspPlotter {
    /// Creates a new instance of `TspPlotter` with default drawing configuration.
    pub fn new(instance: Instance) -> Self {
        Self { instance, config: PlotConfig::default(), logger: create_silent_logger() }
    }

    /// Sets drawing configuration.
    pub fn with_config(mut self, config: PlotConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets logger.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Creates figure layout for solutions found by the given path: a tour file or a directory with them.
    pub fn create_figure(&self, solution_path: &Path) -> GenericResult<Figure> {
        (self.logger)(&format!("instance has {} points", self.instance.size()));

        let sources = resolve_solutions(solution_path)?;
        (self.logger)(&format!("found {} solution(s) in '{}'", sources.len(), solution_path.display()));

        let solutions = read_solutions(sources.as_slice())?;
        solutions.iter().filter(|solution| !solution.tour.is_permutation(self.instance.size())).for_each(|solution| {
            (self.logger)(&format!(
                "tour '{}' does not visit every of {} points exactly once, it has {} entries",
                solution.name,
                self.instance.size(),
                solution.tour.indices().len()
            ))
        });

        create_figure(&self.instance, solutions.as_slice(), &self.config)
    }

    /// Plots solutions found by the given path and saves the figure into the output path.
    pub fn plot(&self, solution_path: &Path, output_path: &Path) -> GenericResult<()> {
        self.config.validate()?;
        OutputFormat::from_path(output_path)?;

        let figure = self.create_figure(solution_path)?;
        render_figure(&figure, output_path, &self.config)?;

        (self.logger)(&format!(
            "figure with {} panel(s) of {}x{} pixels is written into '{}'",
            figure.panels.len(),
            figure.size.0,
            figure.size.1,
            output_path.display()
        ));

        Ok(())
    }
}

/// Reads the instance and solutions, then writes the figure with one panel per solution into the output path.
pub fn plot_solutions(solution_path: &Path, output_path: &Path, instance_path: &Path) -> GenericResult<()> {
    let instance = read_instance_file(instance_path)?;

    TspPlotter::new(instance).plot(solution_path, output_path)
}
