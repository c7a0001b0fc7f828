use serde::{Deserialize, Serialize};

use crate::core::{Axis, CanvasSize, Interpolation, NiceScale};
use crate::error::{ChartError, ChartResult};

/// Public chart setup.
///
/// Serializable so hosts can persist and reload chart setup as JSON. Missing
/// fields fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    #[serde(default)]
    pub canvas: CanvasSize,
    #[serde(default)]
    pub interpolation: Interpolation,
    #[serde(default = "default_max_ticks")]
    pub max_ticks: usize,
    #[serde(default = "default_x_axis")]
    pub x_axis: Axis,
    #[serde(default = "default_y_axis")]
    pub y_axis: Axis,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::default(),
            interpolation: Interpolation::default(),
            max_ticks: default_max_ticks(),
            x_axis: default_x_axis(),
            y_axis: default_y_axis(),
        }
    }
}

impl LineChartConfig {
    #[must_use]
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    #[must_use]
    pub fn with_max_ticks(mut self, max_ticks: usize) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    #[must_use]
    pub fn with_axes(mut self, x_axis: Axis, y_axis: Axis) -> Self {
        self.x_axis = x_axis;
        self.y_axis = y_axis;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.canvas.validate()?;
        if self.max_ticks < 2 {
            return Err(ChartError::InvalidTickCount {
                max_ticks: self.max_ticks,
            });
        }
        if !self.x_axis.is_horizontal() {
            return Err(ChartError::InvalidData(format!(
                "x axis must be Bottom or Top, got {:?}",
                self.x_axis
            )));
        }
        if self.y_axis.is_horizontal() {
            return Err(ChartError::InvalidData(format!(
                "y axis must be Left or Right, got {:?}",
                self.y_axis
            )));
        }
        Ok(self)
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config: {e}"))
        })
    }

    /// Parses and validates a config.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart config json: {e}"))
        })?;
        config.validate()
    }
}

fn default_max_ticks() -> usize {
    NiceScale::DEFAULT_MAX_TICKS
}

fn default_x_axis() -> Axis {
    Axis::Bottom
}

fn default_y_axis() -> Axis {
    Axis::Left
}
