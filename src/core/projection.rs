#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::range::map_between;
use crate::core::{CanvasSize, Dataset, Offset, Point, Range};
use crate::error::{ChartError, ChartResult};

/// Width a zero-width auto-fit window is widened to.
pub const DEGENERATE_WINDOW_SPAN: f64 = 1.0;

/// Data-space windows mapped onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionWindows {
    pub x: Range,
    pub y: Range,
}

impl ProjectionWindows {
    /// Resolves the windows used to project `dataset`.
    ///
    /// Missing windows default to the dataset extent; a zero-width extent
    /// (single point, flat series) is widened to [`DEGENERATE_WINDOW_SPAN`].
    /// Explicit windows must have non-zero width. Returns `Ok(None)` when a
    /// window is missing and the dataset has no extent to default to.
    pub fn resolve(
        dataset: &Dataset,
        x_window: Option<Range>,
        y_window: Option<Range>,
    ) -> ChartResult<Option<Self>> {
        for window in [x_window, y_window].into_iter().flatten() {
            if window.is_degenerate() {
                return Err(ChartError::DegenerateRange {
                    start: window.start(),
                    end: window.end(),
                });
            }
        }

        let x = match x_window {
            Some(window) => window,
            None => match dataset.x_range() {
                Some(extent) => extent.widened_if_degenerate(DEGENERATE_WINDOW_SPAN),
                None => return Ok(None),
            },
        };
        let y = match y_window {
            Some(window) => window,
            None => match dataset.y_range() {
                Some(extent) => extent.widened_if_degenerate(DEGENERATE_WINDOW_SPAN),
                None => return Ok(None),
            },
        };

        Ok(Some(Self { x, y }))
    }
}

/// Maps every point into canvas space and returns a new dataset.
///
/// `offset.x` spans `[0, width]` over the X window and `offset.y` spans
/// `[height, 0]` over the Y window (data Y up, canvas Y down). The input is
/// left untouched.
pub fn project(
    dataset: &Dataset,
    canvas: CanvasSize,
    x_window: Option<Range>,
    y_window: Option<Range>,
) -> ChartResult<Dataset> {
    let canvas = canvas.validate()?;
    let Some(windows) = ProjectionWindows::resolve(dataset, x_window, y_window)? else {
        return Ok(Dataset::default());
    };
    project_with_windows(dataset, canvas, windows)
}

/// Projection with already-resolved windows.
pub fn project_with_windows(
    dataset: &Dataset,
    canvas: CanvasSize,
    windows: ProjectionWindows,
) -> ChartResult<Dataset> {
    let canvas = canvas.validate()?;
    trace!(
        count = dataset.len(),
        width = canvas.width,
        height = canvas.height,
        "project dataset"
    );

    #[cfg(feature = "parallel-projection")]
    {
        let projected: Vec<ChartResult<Point>> = dataset
            .points()
            .par_iter()
            .map(|point| project_point(*point, canvas, windows))
            .collect();
        projected.into_iter().collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        let mut out = Vec::with_capacity(dataset.len());
        for point in dataset {
            out.push(project_point(*point, canvas, windows)?);
        }
        Ok(Dataset::new(out))
    }
}

/// Maps a single data-space point into canvas space.
pub fn project_point(
    point: Point,
    canvas: CanvasSize,
    windows: ProjectionWindows,
) -> ChartResult<Point> {
    let x = map_between(
        point.x,
        (windows.x.start(), windows.x.end()),
        (0.0, canvas.width),
    )?;
    let y = map_between(
        point.y,
        (windows.y.start(), windows.y.end()),
        (canvas.height, 0.0),
    )?;
    Ok(point.with_offset(Offset::new(x, y)))
}

/// Maps a canvas position back to data space.
pub fn unproject(
    offset: Offset,
    canvas: CanvasSize,
    windows: ProjectionWindows,
) -> ChartResult<(f64, f64)> {
    let canvas = canvas.validate()?;
    let x = map_between(
        offset.x,
        (0.0, canvas.width),
        (windows.x.start(), windows.x.end()),
    )?;
    let y = map_between(
        offset.y,
        (canvas.height, 0.0),
        (windows.y.start(), windows.y.end()),
    )?;
    Ok((x, y))
}
