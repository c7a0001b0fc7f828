pub mod axis;
pub mod dataset;
pub mod interpolation;
pub mod nice_scale;
pub mod path;
pub mod projection;
pub mod range;
pub mod types;
pub mod validation;

pub use axis::{AxisLayout, AxisTick, AxisTicks, axis_ticks};
pub use dataset::Dataset;
pub use interpolation::Interpolation;
pub use nice_scale::{NiceRounding, NiceScale, nice_number};
pub use path::{Path, PathCommand, PathSegment};
pub use projection::{ProjectionWindows, project, project_point, project_with_windows, unproject};
pub use range::{Range, map_between, map_range};
pub use types::{Axis, CanvasSize, Offset, Point};
pub use validation::validate;
