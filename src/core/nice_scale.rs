use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Range;
use crate::error::{ChartError, ChartResult};

/// Rounding strategy used when snapping a value to a nice number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NiceRounding {
    /// Snap to the nearest nice number (`<1.5 → 1`, `<3 → 2`, `<7 → 5`).
    Round,
    /// Snap to the smallest nice number not below the value.
    Ceiling,
}

/// Human-friendly tick spacing and axis bounds for a data range.
///
/// `nice_min <= range.start`, `nice_max >= range.end`, and the bounds are
/// whole multiples of `tick_spacing`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NiceScale {
    pub tick_spacing: f64,
    pub nice_min: f64,
    pub nice_max: f64,
    pub max_ticks: usize,
}

impl NiceScale {
    pub const DEFAULT_MAX_TICKS: usize = 5;

    /// Width a zero-width input range is widened to before computing.
    pub const DEGENERATE_RANGE_SPAN: f64 = 1.0;

    /// Computes the scale with [`Self::DEFAULT_MAX_TICKS`].
    pub fn for_range(range: Range) -> ChartResult<Self> {
        Self::compute(range, Self::DEFAULT_MAX_TICKS)
    }

    pub fn compute(range: Range, max_ticks: usize) -> ChartResult<Self> {
        if max_ticks < 2 {
            return Err(ChartError::InvalidTickCount { max_ticks });
        }

        let range = if range.is_degenerate() {
            debug!(
                value = range.start(),
                "widening zero-width range for nice scale"
            );
            range.widened_if_degenerate(Self::DEGENERATE_RANGE_SPAN)
        } else {
            range
        };

        let loose_range = nice_number(range.span(), NiceRounding::Ceiling)?;
        let tick_spacing = nice_number(loose_range / (max_ticks - 1) as f64, NiceRounding::Round)?;
        let mut nice_min = (range.start() / tick_spacing).floor() * tick_spacing;
        let mut nice_max = (range.end() / tick_spacing).ceil() * tick_spacing;
        // Division can round a bound that sits one ulp off a grid line onto
        // the line itself, leaving the bound inside the range.
        if nice_min > range.start() {
            nice_min -= tick_spacing;
        }
        if nice_max < range.end() {
            nice_max += tick_spacing;
        }

        Ok(Self {
            tick_spacing,
            nice_min,
            nice_max,
            max_ticks,
        })
    }

    /// Number of gridline intervals between `nice_min` and `nice_max`.
    #[must_use]
    pub fn interval_count(self) -> usize {
        ((self.nice_max - self.nice_min) / self.tick_spacing).round() as usize
    }

    /// Tick values from `nice_min` to `nice_max` inclusive.
    ///
    /// Each value is computed from its index rather than accumulated so
    /// rounding error does not drift across the axis.
    #[must_use]
    pub fn ticks(self) -> Vec<f64> {
        (0..=self.interval_count())
            .map(|i| self.nice_min + i as f64 * self.tick_spacing)
            .collect()
    }
}

/// Snaps a positive finite `value` to 1, 2, 5 or 10 times a power of ten.
pub fn nice_number(value: f64, rounding: NiceRounding) -> ChartResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "nice number input must be finite and > 0, got {value}"
        )));
    }

    let exponent = value.log10().floor() as i32;
    let magnitude = 10f64.powi(exponent);
    let fraction = value / magnitude;

    let nice_fraction = match rounding {
        NiceRounding::Round => {
            if fraction < 1.5 {
                1.0
            } else if fraction < 3.0 {
                2.0
            } else if fraction < 7.0 {
                5.0
            } else {
                10.0
            }
        }
        NiceRounding::Ceiling => {
            if fraction <= 1.0 {
                1.0
            } else if fraction <= 2.0 {
                2.0
            } else if fraction <= 5.0 {
                5.0
            } else {
                10.0
            }
        }
    };

    Ok(nice_fraction * magnitude)
}
