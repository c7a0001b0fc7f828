use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::validation::validate;
use crate::core::{Point, Range};
use crate::error::ChartResult;

/// Ordered sequence of points.
///
/// A dataset is never mutated in place once accepted; projection and
/// windowing return new datasets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    points: Vec<Point>,
}

impl Dataset {
    /// Wraps points as-is. Use [`Dataset::validated`] at the data boundary.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Wraps points after they pass [`validate`].
    pub fn validated(points: Vec<Point>) -> ChartResult<Self> {
        let dataset = Self::new(points);
        validate(&dataset)?;
        Ok(dataset)
    }

    /// Lenient acceptance path for raw feeds.
    ///
    /// Drops non-finite samples, sorts by `x` and keeps the last sample of
    /// each run of equal `x` values. The result always passes validation
    /// unless it is empty.
    #[must_use]
    pub fn canonicalize(mut points: Vec<Point>) -> Self {
        let original_len = points.len();
        points.retain(|point| point.is_finite());
        points.sort_by_key(|point| OrderedFloat(point.x));

        let mut deduped: Vec<Point> = Vec::with_capacity(points.len());
        let mut duplicate_count = 0_usize;
        for point in points {
            if let Some(last) = deduped.last_mut() {
                if OrderedFloat(point.x) == OrderedFloat(last.x) {
                    *last = point;
                    duplicate_count += 1;
                    continue;
                }
            }
            deduped.push(point);
        }

        let filtered_count = original_len.saturating_sub(deduped.len() + duplicate_count);
        if filtered_count > 0 || duplicate_count > 0 {
            warn!(
                filtered_count,
                duplicate_count,
                canonical_count = deduped.len(),
                "canonicalized dataset"
            );
        }
        Self::new(deduped)
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Extent of the `x` values, `None` when empty or non-finite.
    #[must_use]
    pub fn x_range(&self) -> Option<Range> {
        Range::from_values(self.points.iter().map(|point| point.x))
    }

    /// Extent of the `y` values, `None` when empty or non-finite.
    #[must_use]
    pub fn y_range(&self) -> Option<Range> {
        Range::from_values(self.points.iter().map(|point| point.y))
    }

    /// Returns the points whose `x` lies inside the inclusive window.
    #[must_use]
    pub fn points_in_window(&self, x_window: Range) -> Self {
        self.points
            .iter()
            .copied()
            .filter(|point| x_window.contains(point.x))
            .collect()
    }

    /// Index of the projected point whose `offset.x` is nearest `canvas_x`.
    ///
    /// Relies on offsets increasing with index, which holds for any
    /// validated dataset after projection. Ties resolve to the lower index.
    #[must_use]
    pub fn nearest_by_offset_x(&self, canvas_x: f64) -> Option<usize> {
        if self.points.is_empty() || !canvas_x.is_finite() {
            return None;
        }

        let upper = self
            .points
            .partition_point(|point| point.offset.x < canvas_x);
        if upper == 0 {
            return Some(0);
        }
        if upper == self.points.len() {
            return Some(upper - 1);
        }

        let below = canvas_x - self.points[upper - 1].offset.x;
        let above = self.points[upper].offset.x - canvas_x;
        if below <= above {
            Some(upper - 1)
        } else {
            Some(upper)
        }
    }
}

impl FromIterator<Point> for Dataset {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Point>> for Dataset {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
