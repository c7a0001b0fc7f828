//! linechart-core: numeric core for line charts and function plots.
//!
//! Maps data space onto a canvas, picks human-readable axis ticks and turns
//! projected points into draw instructions. Everything here is pure and
//! independent of any UI toolkit; hosts replay the resulting [`core::Path`]
//! and tick positions on their own canvas.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{LineChart, LineChartConfig};
pub use error::{ChartError, ChartResult, ValidationError, ValidationReason};
