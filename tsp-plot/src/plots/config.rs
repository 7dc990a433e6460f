//! Drawing configuration.

#[cfg(test)]
#[path = "../../tests/unit/plots/config_test.rs"]
mod config_test;

use crate::utils::GenericResult;
use serde::Deserialize;
use std::io::{BufReader, Read};

/// A drawing configuration. Every field can be omitted in the json representation.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlotConfig {
    /// Width of a single panel in pixels. Figure width is proportional to the amount of panels.
    pub panel_width: u32,
    /// Height of the figure in pixels.
    pub height: u32,
    /// A divisor applied to the point cost to get its marker size.
    pub marker_divisor: f64,
    /// Tour line color as rgb.
    pub line_color: [u8; 3],
    /// Line width in pixels.
    pub line_width: u32,
    /// Scatter point color as rgb.
    pub point_color: [u8; 3],
    /// Font size of the panel title.
    pub caption_size: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            panel_width: 750,
            height: 750,
            marker_divisor: 10.,
            line_color: [255, 0, 0],
            line_width: 1,
            point_color: [31, 119, 180],
            caption_size: 20,
        }
    }
}

impl PlotConfig {
    /// Checks that configuration can be used to draw a figure.
    pub fn validate(&self) -> GenericResult<()> {
        if self.panel_width == 0 || self.height == 0 {
            return Err(format!("figure size must be positive, got {}x{}", self.panel_width, self.height).into());
        }

        if !self.marker_divisor.is_finite() || self.marker_divisor <= 0. {
            return Err(format!("marker divisor must be a positive number, got {}", self.marker_divisor).into());
        }

        Ok(())
    }
}

/// Reads drawing configuration from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<PlotConfig> {
    let config: PlotConfig =
        serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))?;

    config.validate()?;

    Ok(config)
}
