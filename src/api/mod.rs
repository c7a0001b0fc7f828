mod chart_config;
mod line_chart;

pub use chart_config::LineChartConfig;
pub use line_chart::{ChartFrame, Highlight, LineChart};
