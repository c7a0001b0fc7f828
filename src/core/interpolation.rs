use serde::{Deserialize, Serialize};

use crate::core::{Dataset, Offset, Path};

/// Curve drawn through the projected offsets of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Interpolation {
    /// Straight segments between consecutive points.
    #[default]
    Linear,
    /// Cubic segments whose first control point borrows the next point's X.
    CubicX,
    /// Cubic segments whose first control point borrows the previous point's X.
    CubicY,
    /// Steffen monotone cubic Hermite spline; never overshoots between
    /// samples when the data is monotonic in X.
    MonotoneX,
}

impl Interpolation {
    pub const ALL: [Self; 4] = [Self::Linear, Self::CubicX, Self::CubicY, Self::MonotoneX];

    /// Builds the path through `dataset`'s canvas offsets.
    ///
    /// The dataset must already be projected. Never fails: an empty dataset
    /// yields an empty path and a single point yields one `MoveTo`.
    #[must_use]
    pub fn interpolate(self, dataset: &Dataset) -> Path {
        let offsets: Vec<Offset> = dataset.iter().map(|point| point.offset).collect();
        match self {
            Self::Linear => linear(&offsets),
            Self::CubicX => cubic(&offsets, |prev, p| {
                (Offset::new(p.x, prev.y), Offset::new(prev.x, p.y))
            }),
            Self::CubicY => cubic(&offsets, |prev, p| {
                (Offset::new(prev.x, p.y), Offset::new(p.x, prev.y))
            }),
            Self::MonotoneX => monotone_x(&offsets),
        }
    }
}

fn linear(offsets: &[Offset]) -> Path {
    let mut path = Path::with_capacity(offsets.len());
    let Some((first, rest)) = offsets.split_first() else {
        return path;
    };
    path.move_to(*first);
    for offset in rest {
        path.line_to(*offset);
    }
    path
}

fn cubic<F>(offsets: &[Offset], controls: F) -> Path
where
    F: Fn(Offset, Offset) -> (Offset, Offset),
{
    let mut path = Path::with_capacity(offsets.len());
    let Some(first) = offsets.first() else {
        return path;
    };
    path.move_to(*first);
    for pair in offsets.windows(2) {
        let (control1, control2) = controls(pair[0], pair[1]);
        path.cubic_to(control1, control2, pair[1]);
    }
    path
}

fn monotone_x(offsets: &[Offset]) -> Path {
    let mut curve = MonotoneCurve::new(offsets.len());
    for offset in offsets {
        curve.push(*offset);
    }
    curve.finish()
}

/// Sliding three-point window for the monotone spline.
struct MonotoneCurve {
    path: Path,
    accepted: usize,
    p0: Offset,
    p1: Offset,
    t0: f64,
}

impl MonotoneCurve {
    fn new(capacity: usize) -> Self {
        Self {
            path: Path::with_capacity(capacity),
            accepted: 0,
            p0: Offset::default(),
            p1: Offset::default(),
            t0: 0.0,
        }
    }

    fn push(&mut self, p: Offset) {
        if self.accepted > 0 && p == self.p1 {
            return;
        }

        let mut t1 = self.t0;
        match self.accepted {
            0 => self.path.move_to(p),
            1 => {}
            2 => {
                t1 = slope3(self.p0, self.p1, p);
                self.emit(slope2(self.p0, self.p1, t1), t1);
            }
            _ => {
                t1 = slope3(self.p0, self.p1, p);
                self.emit(self.t0, t1);
            }
        }

        self.accepted += 1;
        self.p0 = self.p1;
        self.p1 = p;
        self.t0 = t1;
    }

    fn finish(mut self) -> Path {
        match self.accepted {
            2 => self.path.line_to(self.p1),
            n if n >= 3 => {
                let t1 = slope2(self.p0, self.p1, self.t0);
                self.emit(self.t0, t1);
            }
            _ => {}
        }
        self.path
    }

    /// Cubic segment from `p0` to `p1` with tangents `t0`, `t1`.
    fn emit(&mut self, t0: f64, t1: f64) {
        let (p0, p1) = (self.p0, self.p1);
        let dx = (p1.x - p0.x) / 3.0;
        self.path.cubic_to(
            Offset::new(p0.x + dx, p0.y + dx * t0),
            Offset::new(p1.x - dx, p1.y - dx * t1),
            p1,
        );
    }
}

/// `-1` for negative values, `1` otherwise (zero counts as positive).
fn sign(value: f64) -> f64 {
    if value < 0.0 { -1.0 } else { 1.0 }
}

/// Tangent at `p1` given its neighbours, clamped so the curve cannot
/// overshoot either adjacent secant.
fn slope3(p0: Offset, p1: Offset, p2: Offset) -> f64 {
    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    // Coincident X neighbours are filtered before this runs; if one slips
    // through, the tangent is flat rather than a one-sided secant.
    if h0 == 0.0 || h1 == 0.0 || h0 + h1 == 0.0 {
        return 0.0;
    }

    let s0 = (p1.y - p0.y) / h0;
    let s1 = (p2.y - p1.y) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let slope = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if slope.is_finite() { slope } else { 0.0 }
}

/// One-sided tangent at an end of the curve, derived from the neighbouring
/// tangent `t`.
fn slope2(p0: Offset, p1: Offset, t: f64) -> f64 {
    let h = p1.x - p0.x;
    if h != 0.0 {
        (3.0 * (p1.y - p0.y) / h - t) / 2.0
    } else {
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slope3_is_zero_at_local_extremum() {
        let slope = slope3(
            Offset::new(0.0, 0.0),
            Offset::new(1.0, 5.0),
            Offset::new(2.0, 0.0),
        );
        assert_eq!(slope, 0.0);
    }

    #[test]
    fn slope3_is_bounded_by_secants() {
        let slope = slope3(
            Offset::new(0.0, 0.0),
            Offset::new(1.0, 1.0),
            Offset::new(2.0, 4.0),
        );
        // s0 = 1, s1 = 3, p = 2 -> 2 * min(1, 3, 1) = 2
        assert_eq!(slope, 2.0);
    }

    #[test]
    fn slope2_falls_back_on_zero_width() {
        assert_eq!(slope2(Offset::new(1.0, 0.0), Offset::new(1.0, 3.0), 0.7), 0.7);
        assert_eq!(slope2(Offset::new(0.0, 0.0), Offset::new(1.0, 3.0), 1.0), 4.0);
    }
}
