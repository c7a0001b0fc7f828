use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Closed interval `[start, end]` with finite bounds and `start <= end`.
///
/// Used both for data-space windows and canvas pixel extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RangeRepr", into = "RangeRepr")]
pub struct Range {
    start: f64,
    end: f64,
}

#[derive(Serialize, Deserialize)]
struct RangeRepr {
    start: f64,
    end: f64,
}

impl TryFrom<RangeRepr> for Range {
    type Error = ChartError;

    fn try_from(repr: RangeRepr) -> ChartResult<Self> {
        Range::new(repr.start, repr.end)
    }
}

impl From<Range> for RangeRepr {
    fn from(range: Range) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

impl Range {
    pub fn new(start: f64, end: f64) -> ChartResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ChartError::InvalidData(
                "range bounds must be finite".to_owned(),
            ));
        }
        if start > end {
            return Err(ChartError::InvalidData(format!(
                "range start {start} must be <= end {end}"
            )));
        }

        Ok(Self { start, end })
    }

    /// Builds a range from bounds given in either order.
    pub fn new_unordered(a: f64, b: f64) -> ChartResult<Self> {
        if a <= b {
            Self::new(a, b)
        } else {
            Self::new(b, a)
        }
    }

    /// Smallest range covering every value, or `None` for an empty or
    /// non-finite input.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut bounds: Option<(f64, f64)> = None;
        for value in values {
            if !value.is_finite() {
                return None;
            }
            bounds = Some(match bounds {
                Some((min, max)) => (min.min(value), max.max(value)),
                None => (value, value),
            });
        }
        bounds.map(|(start, end)| Self { start, end })
    }

    #[must_use]
    pub fn start(self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(self) -> f64 {
        self.end
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.start == self.end
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.start && value <= self.end
    }

    /// Widens a zero-width range to `min_span` centred on its value.
    ///
    /// At magnitudes where `min_span` is below float resolution the range is
    /// widened to the nearest representable neighbours instead, so the
    /// result always has `start < end`.
    #[must_use]
    pub fn widened_if_degenerate(self, min_span: f64) -> Self {
        if !self.is_degenerate() {
            return self;
        }
        let value = self.start;
        // |v| * EPSILON is at least one ulp of v, so v +- half always moves.
        let half = (min_span / 2.0).max(value.abs() * f64::EPSILON);
        Self {
            start: (value - half).max(f64::MIN),
            end: (value + half).min(f64::MAX),
        }
    }

    /// Translates the range by `delta` (panning).
    pub fn shifted(self, delta: f64) -> ChartResult<Self> {
        if !delta.is_finite() {
            return Err(ChartError::InvalidData(
                "shift delta must be finite".to_owned(),
            ));
        }
        Self::new(self.start + delta, self.end + delta)
    }

    /// Scales the range around `anchor`.
    ///
    /// `factor < 1` zooms in (narrower window), `factor > 1` zooms out.
    /// The anchor keeps its relative position inside the range.
    pub fn zoomed(self, factor: f64, anchor: f64) -> ChartResult<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ChartError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }
        if !anchor.is_finite() {
            return Err(ChartError::InvalidData(
                "zoom anchor must be finite".to_owned(),
            ));
        }

        let start = anchor - (anchor - self.start) * factor;
        let end = anchor + (self.end - anchor) * factor;
        Self::new(start, end)
    }

    /// Maps `value` from this range into `target`, see [`map_range`].
    pub fn map_to(self, value: f64, target: Range) -> ChartResult<f64> {
        map_range(value, self, target)
    }
}

/// Linearly rescales `value` from `from` into `to`, preserving its ratio.
///
/// Values outside `from` extrapolate. The mapping is exact at both
/// endpoints of `from`.
pub fn map_range(value: f64, from: Range, to: Range) -> ChartResult<f64> {
    map_between(value, (from.start, from.end), (to.start, to.end))
}

/// Same mapping as [`map_range`] over raw `(start, end)` pairs.
///
/// Either pair may be descending, which is how the inverted canvas Y axis
/// (`[height, 0]`) is expressed.
pub fn map_between(value: f64, from: (f64, f64), to: (f64, f64)) -> ChartResult<f64> {
    let (from_start, from_end) = from;
    let (to_start, to_end) = to;

    if from_start == from_end {
        return Err(ChartError::DegenerateRange {
            start: from_start,
            end: from_end,
        });
    }
    if !value.is_finite() {
        return Err(ChartError::InvalidData("value must be finite".to_owned()));
    }

    if value == from_end {
        return Ok(to_end);
    }

    let normalized = (value - from_start) / (from_end - from_start);
    let mapped = to_start + normalized * (to_end - to_start);
    if !mapped.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "mapping {value} overflowed the target range"
        )));
    }
    Ok(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_midpoint() {
        let from = Range::new(0.0, 500.0).expect("from");
        let to = Range::new(0.0, 1.0).expect("to");
        assert_eq!(map_range(250.0, from, to).expect("map"), 0.5);
    }

    #[test]
    fn rejects_zero_width_source() {
        let from = Range::new(3.0, 3.0).expect("from");
        let to = Range::new(0.0, 1.0).expect("to");
        assert_eq!(
            map_range(3.0, from, to),
            Err(ChartError::DegenerateRange {
                start: 3.0,
                end: 3.0
            })
        );
    }

    #[test]
    fn descending_target_inverts() {
        let mapped = map_between(10.0, (0.0, 10.0), (500.0, 0.0)).expect("map");
        assert_eq!(mapped, 0.0);
        let mapped = map_between(0.0, (0.0, 10.0), (500.0, 0.0)).expect("map");
        assert_eq!(mapped, 500.0);
    }

    #[test]
    fn zoom_keeps_anchor_fixed() {
        let range = Range::new(0.0, 100.0).expect("range");
        let zoomed = range.zoomed(0.5, 20.0).expect("zoom");
        assert_eq!(zoomed.start(), 10.0);
        assert_eq!(zoomed.end(), 60.0);
    }

    #[test]
    fn rejects_inverted_bounds() {
        assert!(Range::new(2.0, 1.0).is_err());
        let range = Range::new_unordered(2.0, 1.0).expect("unordered");
        assert_eq!((range.start(), range.end()), (1.0, 2.0));
    }
}
