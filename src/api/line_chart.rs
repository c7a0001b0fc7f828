use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::range::map_between;
use crate::core::{
    AxisLayout, CanvasSize, Dataset, Interpolation, Offset, Path, Point, ProjectionWindows,
    Range, axis_ticks, project_with_windows, unproject,
};
use crate::error::{ChartError, ChartResult};

use super::LineChartConfig;

/// Everything a host needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    /// Accepted data with canvas offsets populated.
    pub dataset: Dataset,
    pub path: Path,
    /// `None` when the chart holds no data.
    pub windows: Option<ProjectionWindows>,
    pub x_axis: Option<AxisLayout>,
    pub y_axis: Option<AxisLayout>,
}

/// Point nearest a canvas X position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub index: usize,
    pub point: Point,
}

/// Facade tying a validated dataset to a canvas and a pan/zoom window.
///
/// Unset windows follow the dataset extent (auto-fit). Panning and zooming
/// pin both windows explicitly until [`LineChart::reset_windows`].
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    config: LineChartConfig,
    dataset: Dataset,
    x_window: Option<Range>,
    y_window: Option<Range>,
}

impl LineChart {
    pub fn new(config: LineChartConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
            dataset: Dataset::default(),
            x_window: None,
            y_window: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> LineChartConfig {
        self.config
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.config.canvas
    }

    /// Validates and stores a new dataset, resetting any pan/zoom state.
    ///
    /// A rejected dataset leaves the previous one in place.
    pub fn set_data(&mut self, points: Vec<Point>) -> ChartResult<()> {
        let count = points.len();
        let dataset = Dataset::validated(points).inspect_err(|err| {
            warn!(count, error = %err, "rejected dataset");
        })?;
        debug!(count, "accepted dataset");
        self.dataset = dataset;
        self.reset_windows();
        Ok(())
    }

    pub fn set_interpolation(&mut self, interpolation: Interpolation) {
        self.config.interpolation = interpolation;
    }

    pub fn resize(&mut self, canvas: CanvasSize) -> ChartResult<()> {
        self.config.canvas = canvas.validate()?;
        Ok(())
    }

    pub fn set_x_window(&mut self, window: Range) -> ChartResult<()> {
        self.x_window = Some(non_degenerate(window)?);
        Ok(())
    }

    pub fn set_y_window(&mut self, window: Range) -> ChartResult<()> {
        self.y_window = Some(non_degenerate(window)?);
        Ok(())
    }

    pub fn reset_windows(&mut self) {
        self.x_window = None;
        self.y_window = None;
    }

    /// Windows the next frame will use, `None` without data.
    pub fn windows(&self) -> ChartResult<Option<ProjectionWindows>> {
        ProjectionWindows::resolve(&self.dataset, self.x_window, self.y_window)
    }

    /// Shifts both windows so content follows a drag of `(dx, dy)` pixels.
    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64) -> ChartResult<()> {
        if !dx.is_finite() || !dy.is_finite() {
            return Err(ChartError::InvalidData(
                "pan delta must be finite".to_owned(),
            ));
        }
        let Some(windows) = self.windows()? else {
            return Ok(());
        };
        let canvas = self.config.canvas;

        let x_delta = -dx * windows.x.span() / canvas.width;
        let y_delta = dy * windows.y.span() / canvas.height;
        let x_window = non_degenerate(windows.x.shifted(x_delta)?)?;
        let y_window = non_degenerate(windows.y.shifted(y_delta)?)?;
        self.x_window = Some(x_window);
        self.y_window = Some(y_window);
        trace!(x_delta, y_delta, "pan windows");
        Ok(())
    }

    /// Zooms the X window around the data value under `anchor_px`.
    ///
    /// `factor < 1` zooms in. The Y window is pinned at its current value.
    pub fn zoom_x(&mut self, factor: f64, anchor_px: f64) -> ChartResult<()> {
        let Some(windows) = self.windows()? else {
            return Ok(());
        };
        let anchor = map_between(
            anchor_px,
            (0.0, self.config.canvas.width),
            (windows.x.start(), windows.x.end()),
        )?;
        let zoomed = non_degenerate(windows.x.zoomed(factor, anchor)?)?;
        self.x_window = Some(zoomed);
        self.y_window = Some(windows.y);
        trace!(factor, anchor, "zoom x window");
        Ok(())
    }

    /// Projects, interpolates and lays out ticks for the current state.
    pub fn frame(&self) -> ChartResult<ChartFrame> {
        let Some(windows) = self.windows()? else {
            return Ok(ChartFrame {
                dataset: Dataset::default(),
                path: Path::new(),
                windows: None,
                x_axis: None,
                y_axis: None,
            });
        };

        let canvas = self.config.canvas;
        let dataset = project_with_windows(&self.dataset, canvas, windows)?;
        let path = self.config.interpolation.interpolate(&dataset);
        let x_axis = axis_ticks(self.config.x_axis, windows.x, canvas, self.config.max_ticks)?;
        let y_axis = axis_ticks(self.config.y_axis, windows.y, canvas, self.config.max_ticks)?;
        trace!(
            points = dataset.len(),
            commands = path.len(),
            x_ticks = x_axis.ticks.len(),
            y_ticks = y_axis.ticks.len(),
            "built chart frame"
        );

        Ok(ChartFrame {
            dataset,
            path,
            windows: Some(windows),
            x_axis: Some(x_axis),
            y_axis: Some(y_axis),
        })
    }

    /// Point whose canvas X is nearest `canvas_x`.
    pub fn highlight(&self, canvas_x: f64) -> ChartResult<Option<Highlight>> {
        let Some(windows) = self.windows()? else {
            return Ok(None);
        };
        let dataset = project_with_windows(&self.dataset, self.config.canvas, windows)?;
        Ok(dataset.nearest_by_offset_x(canvas_x).map(|index| Highlight {
            index,
            point: dataset.points()[index],
        }))
    }

    /// Data-space coordinates under a canvas position.
    pub fn data_at(&self, offset: Offset) -> ChartResult<Option<(f64, f64)>> {
        let Some(windows) = self.windows()? else {
            return Ok(None);
        };
        unproject(offset, self.config.canvas, windows).map(Some)
    }
}

fn non_degenerate(window: Range) -> ChartResult<Range> {
    if window.is_degenerate() {
        return Err(ChartError::DegenerateRange {
            start: window.start(),
            end: window.end(),
        });
    }
    Ok(window)
}
