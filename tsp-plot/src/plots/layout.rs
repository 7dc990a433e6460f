#[cfg(test)]
#[path = "../../tests/unit/plots/layout_test.rs"]
mod layout_test;

use crate::models::{Instance, Solution};
use crate::plots::PlotConfig;
use crate::utils::GenericResult;
use std::ops::Range;

/// A relative padding added to each side of the instance bounds.
const AXIS_PADDING: f64 = 0.05;

/// A scatter point with its marker size.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterPoint {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Marker size: point cost divided by marker divisor.
    pub size: f64,
}

/// A line segment between two tour points.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// Start coordinate.
    pub from: (f64, f64),
    /// End coordinate.
    pub to: (f64, f64),
}

/// A single sub-plot which corresponds to one tour.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    /// Panel title: a solution name.
    pub title: String,
    /// All instance points.
    pub points: Vec<ScatterPoint>,
    /// Segments of the closed tour.
    pub segments: Vec<Segment>,
    /// Whether y axis labels are drawn: only the leftmost panel keeps them.
    pub show_y_labels: bool,
}

/// A composed figure with panels arranged horizontally.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    /// Panels from left to right.
    pub panels: Vec<Panel>,
    /// X axis range shared by all panels.
    pub x_range: Range<f64>,
    /// Y axis range shared by all panels.
    pub y_range: Range<f64>,
    /// Figure size in pixels.
    pub size: (u32, u32),
}

/// Creates a figure layout with one panel per solution.
pub fn create_figure(instance: &Instance, solutions: &[Solution], config: &PlotConfig) -> GenericResult<Figure> {
    if solutions.is_empty() {
        return Err("cannot create figure without solutions".into());
    }

    let points = create_points(instance, config.marker_divisor);

    let panels = solutions
        .iter()
        .enumerate()
        .map(|(idx, solution)| -> GenericResult<Panel> {
            solution.tour.validate(instance).map_err(|err| err.context(&format!("invalid tour '{}'", solution.name)))?;

            Ok(Panel {
                title: solution.name.clone(),
                points: points.clone(),
                segments: create_segments(instance, solution)?,
                show_y_labels: idx == 0,
            })
        })
        .collect::<GenericResult<Vec<_>>>()?;

    let ((min_x, max_x), (min_y, max_y)) = instance.bounds();
    let width = u32::try_from(panels.len())
        .ok()
        .and_then(|count| count.checked_mul(config.panel_width))
        .ok_or_else(|| format!("figure is too wide: {} panels", panels.len()))?;

    Ok(Figure {
        panels,
        x_range: pad_range(min_x, max_x),
        y_range: pad_range(min_y, max_y),
        size: (width, config.height),
    })
}

/// Returns marker size for given point cost.
pub fn get_marker_size(cost: f64, marker_divisor: f64) -> f64 {
    cost / marker_divisor
}

fn create_points(instance: &Instance, marker_divisor: f64) -> Vec<ScatterPoint> {
    instance
        .xs()
        .iter()
        .zip(instance.ys())
        .zip(instance.costs())
        .map(|((&x, &y), &cost)| ScatterPoint { x, y, size: get_marker_size(cost, marker_divisor) })
        .collect()
}

fn create_segments(instance: &Instance, solution: &Solution) -> GenericResult<Vec<Segment>> {
    solution
        .tour
        .legs()
        .map(|(from, to)| -> GenericResult<Segment> {
            match (instance.coordinate(from), instance.coordinate(to)) {
                (Some(from), Some(to)) => Ok(Segment { from, to }),
                _ => Err(format!("cannot find coordinates for leg {from}->{to} in tour '{}'", solution.name).into()),
            }
        })
        .collect()
}

fn pad_range(min: f64, max: f64) -> Range<f64> {
    let span = max - min;
    let padding = if span > 0. { span * AXIS_PADDING } else { 1. };

    (min - padding)..(max + padding)
}
