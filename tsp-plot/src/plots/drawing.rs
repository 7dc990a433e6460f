#[cfg(test)]
#[path = "../../tests/unit/plots/drawing_test.rs"]
mod drawing_test;

use super::DrawResult;
use crate::plots::{Figure, Panel, PlotConfig};
use crate::utils::GenericResult;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Marker sizes are specified in points, an image is drawn with 150 dots per inch.
const PIXELS_PER_POINT: f64 = 150. / 72.;

/// Specifies an output image format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// A raster image: png, bmp or jpeg.
    Bitmap,
    /// A vector image.
    Svg,
}

impl OutputFormat {
    /// Infers output format from the file extension.
    pub fn from_path(path: &Path) -> GenericResult<Self> {
        let extension = path.extension().and_then(|ext| ext.to_str()).map(|ext| ext.to_lowercase());

        match extension.as_deref() {
            Some("png" | "bmp" | "jpg" | "jpeg") => Ok(OutputFormat::Bitmap),
            Some("svg") => Ok(OutputFormat::Svg),
            Some(other) => Err(format!("unsupported output format: '{other}'").into()),
            None => Err(format!("cannot infer output format from '{}'", path.display()).into()),
        }
    }
}

/// Renders figure into the file, the backend is selected by the file extension.
pub fn render_figure(figure: &Figure, output_path: &Path, config: &PlotConfig) -> GenericResult<()> {
    match OutputFormat::from_path(output_path)? {
        OutputFormat::Bitmap => {
            draw_figure(&BitMapBackend::new(output_path, figure.size).into_drawing_area(), figure, config)
        }
        OutputFormat::Svg => {
            draw_figure(&SVGBackend::new(output_path, figure.size).into_drawing_area(), figure, config)
        }
    }
    .map_err(|err| format!("cannot draw figure into '{}': '{err}'", output_path.display()).into())
}

/// Draws all panels of the figure side by side.
pub fn draw_figure<B>(area: &DrawingArea<B, Shift>, figure: &Figure, config: &PlotConfig) -> DrawResult<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    area.fill(&WHITE)?;

    let panel_areas = area.split_evenly((1, figure.panels.len()));

    figure
        .panels
        .iter()
        .zip(panel_areas.iter())
        .try_for_each(|(panel, panel_area)| draw_panel(panel_area, panel, figure, config))?;

    area.present()?;

    Ok(())
}

/// Returns marker radius in pixels for the given marker size.
pub fn get_marker_radius(size: f64) -> i32 {
    // marker size is an area in points squared
    ((size.max(0.).sqrt() / 2. * PIXELS_PER_POINT).round() as i32).max(1)
}

fn draw_panel<B>(area: &DrawingArea<B, Shift>, panel: &Panel, figure: &Figure, config: &PlotConfig) -> DrawResult<()>
where
    B: DrawingBackend,
    B::ErrorType: 'static,
{
    let mut chart = ChartBuilder::on(area)
        .caption(panel.title.as_str(), ("sans-serif", config.caption_size))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(if panel.show_y_labels { 40 } else { 0 })
        .build_cartesian_2d(figure.x_range.clone(), figure.y_range.clone())?;

    let mut mesh = chart.configure_mesh();
    mesh.disable_mesh();
    if !panel.show_y_labels {
        mesh.y_labels(0);
    }
    mesh.draw()?;

    let [r, g, b] = config.point_color;
    let point_style = RGBColor(r, g, b).filled();
    chart.draw_series(
        panel.points.iter().map(|point| Circle::new((point.x, point.y), get_marker_radius(point.size), point_style)),
    )?;

    let [r, g, b] = config.line_color;
    let line_style = RGBColor(r, g, b).stroke_width(config.line_width);
    chart.draw_series(
        panel.segments.iter().map(|segment| PathElement::new(vec![segment.from, segment.to], line_style)),
    )?;

    Ok(())
}
