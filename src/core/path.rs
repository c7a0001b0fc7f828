//! Draw instructions produced by interpolation.
//!
//! A path is an ordered list of commands over canvas-space offsets. Hosts
//! replay it onto whatever canvas API they render with.

use serde::{Deserialize, Serialize};

use crate::core::Offset;

/// A single drawing instruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    /// Start a new sub-path without drawing.
    MoveTo(Offset),
    /// Straight line from the current position.
    LineTo(Offset),
    /// Cubic Bezier from the current position.
    CubicTo {
        control1: Offset,
        control2: Offset,
        to: Offset,
    },
}

impl PathCommand {
    /// Position the command leaves the pen at.
    #[must_use]
    pub fn end_point(self) -> Offset {
        match self {
            Self::MoveTo(to) | Self::LineTo(to) | Self::CubicTo { to, .. } => to,
        }
    }
}

/// One drawn piece of a path with its starting position resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    Line {
        from: Offset,
        to: Offset,
    },
    Cubic {
        from: Offset,
        control1: Offset,
        control2: Offset,
        to: Offset,
    },
}

impl PathSegment {
    #[must_use]
    pub fn from(self) -> Offset {
        match self {
            Self::Line { from, .. } | Self::Cubic { from, .. } => from,
        }
    }

    #[must_use]
    pub fn to(self) -> Offset {
        match self {
            Self::Line { to, .. } | Self::Cubic { to, .. } => to,
        }
    }

    /// Evaluates the segment at parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(self, t: f64) -> Offset {
        match self {
            Self::Line { from, to } => Offset::new(
                from.x + (to.x - from.x) * t,
                from.y + (to.y - from.y) * t,
            ),
            Self::Cubic {
                from,
                control1,
                control2,
                to,
            } => {
                let u = 1.0 - t;
                let b0 = u * u * u;
                let b1 = 3.0 * u * u * t;
                let b2 = 3.0 * u * t * t;
                let b3 = t * t * t;
                Offset::new(
                    b0 * from.x + b1 * control1.x + b2 * control2.x + b3 * to.x,
                    b0 * from.y + b1 * control1.y + b2 * control2.y + b3 * to.y,
                )
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    pub fn move_to(&mut self, to: Offset) {
        self.commands.push(PathCommand::MoveTo(to));
    }

    pub fn line_to(&mut self, to: Offset) {
        self.commands.push(PathCommand::LineTo(to));
    }

    pub fn cubic_to(&mut self, control1: Offset, control2: Offset, to: Offset) {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            to,
        });
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Target of the first `MoveTo`.
    #[must_use]
    pub fn start(&self) -> Option<Offset> {
        self.commands.iter().find_map(|command| match command {
            PathCommand::MoveTo(to) => Some(*to),
            _ => None,
        })
    }

    /// Last drawn coordinate.
    #[must_use]
    pub fn end(&self) -> Option<Offset> {
        self.commands.last().map(|command| command.end_point())
    }

    /// Drawn pieces with their start positions resolved.
    #[must_use]
    pub fn segments(&self) -> Vec<PathSegment> {
        let mut segments = Vec::with_capacity(self.commands.len().saturating_sub(1));
        let mut current: Option<Offset> = None;
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(to) => current = Some(to),
                PathCommand::LineTo(to) => {
                    if let Some(from) = current {
                        segments.push(PathSegment::Line { from, to });
                    }
                    current = Some(to);
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => {
                    if let Some(from) = current {
                        segments.push(PathSegment::Cubic {
                            from,
                            control1,
                            control2,
                            to,
                        });
                    }
                    current = Some(to);
                }
            }
        }
        segments
    }

    /// Flattens the path into a polyline with `steps_per_segment` samples
    /// per drawn segment (minimum 1).
    #[must_use]
    pub fn sample(&self, steps_per_segment: usize) -> Vec<Offset> {
        let steps = steps_per_segment.max(1);
        let segments = self.segments();
        let Some(first) = segments.first() else {
            return self.start().into_iter().collect();
        };

        let mut out = Vec::with_capacity(segments.len() * steps + 1);
        out.push(first.from());
        for segment in segments {
            for step in 1..=steps {
                out.push(segment.point_at(step as f64 / steps as f64));
            }
        }
        out
    }

    /// Conservative bounding box over every command, including control
    /// points. Returns `(min, max)` corners.
    #[must_use]
    pub fn bounds(&self) -> Option<(Offset, Offset)> {
        let mut min = Offset::new(f64::INFINITY, f64::INFINITY);
        let mut max = Offset::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        let mut include = |p: Offset| {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        };

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(to) | PathCommand::LineTo(to) => include(to),
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => {
                    include(control1);
                    include(control2);
                    include(to);
                }
            }
        }

        (!self.commands.is_empty()).then_some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubic_endpoints_match() {
        let segment = PathSegment::Cubic {
            from: Offset::new(0.0, 0.0),
            control1: Offset::new(1.0, 3.0),
            control2: Offset::new(2.0, -3.0),
            to: Offset::new(3.0, 1.0),
        };
        assert_eq!(segment.point_at(0.0), Offset::new(0.0, 0.0));
        assert_eq!(segment.point_at(1.0), Offset::new(3.0, 1.0));
    }

    #[test]
    fn sample_of_lone_move_is_its_point() {
        let mut path = Path::new();
        path.move_to(Offset::new(4.0, 2.0));
        assert_eq!(path.sample(8), vec![Offset::new(4.0, 2.0)]);
        assert!(path.segments().is_empty());
    }

    #[test]
    fn bounds_include_control_points() {
        let mut path = Path::new();
        path.move_to(Offset::new(0.0, 0.0));
        path.cubic_to(Offset::new(5.0, -2.0), Offset::new(1.0, 9.0), Offset::new(2.0, 2.0));
        let (min, max) = path.bounds().expect("bounds");
        assert_eq!(min, Offset::new(0.0, -2.0));
        assert_eq!(max, Offset::new(5.0, 9.0));
    }
}
