use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::range::map_between;
use crate::core::{Axis, CanvasSize, NiceScale, Range};
use crate::error::{ChartError, ChartResult};

/// Relative slack for keeping ticks that land on a window edge after
/// floating-point rounding.
const EDGE_TOLERANCE_RATIO: f64 = 1e-9;

/// Gridline value with its canvas coordinate along the axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub position: f64,
}

pub type AxisTicks = SmallVec<[AxisTick; 12]>;

/// Tick placement for one axis over a data window.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayout {
    pub axis: Axis,
    pub scale: NiceScale,
    pub ticks: AxisTicks,
}

/// Computes nice ticks over `window` and places them along `axis`.
///
/// Horizontal axes span `[0, width]`; vertical axes span `[height, 0]`.
/// Ticks the nice bounds add outside the window are dropped.
pub fn axis_ticks(
    axis: Axis,
    window: Range,
    canvas: CanvasSize,
    max_ticks: usize,
) -> ChartResult<AxisLayout> {
    let canvas = canvas.validate()?;
    if window.is_degenerate() {
        return Err(ChartError::DegenerateRange {
            start: window.start(),
            end: window.end(),
        });
    }

    let scale = NiceScale::compute(window, max_ticks)?;
    let extent = if axis.is_horizontal() {
        (0.0, canvas.width)
    } else {
        (canvas.height, 0.0)
    };

    let slack = window.span() * EDGE_TOLERANCE_RATIO;
    let mut ticks = AxisTicks::new();
    for value in scale.ticks() {
        if value < window.start() - slack || value > window.end() + slack {
            continue;
        }
        let position = map_between(value, (window.start(), window.end()), extent)?;
        ticks.push(AxisTick { value, position });
    }

    Ok(AxisLayout { axis, scale, ticks })
}
