use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("degenerate range: start={start}, end={end}")]
    DegenerateRange { start: f64, end: f64 },

    #[error("invalid tick count: max_ticks={max_ticks} (must be >= 2)")]
    InvalidTickCount { max_ticks: usize },

    #[error("invalid canvas size: width={width}, height={height}")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Coordinate component named in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Coordinate {
    X,
    Y,
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Stable reason code for a rejected dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationReason {
    Empty,
    NanCoordinate,
    InfiniteCoordinate,
    DuplicateX,
    NonIncreasingX,
}

#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum ValidationError {
    #[error("dataset is empty")]
    Empty,

    #[error("point {index} has NaN {coordinate}")]
    NanCoordinate { index: usize, coordinate: Coordinate },

    #[error("point {index} has infinite {coordinate}")]
    InfiniteCoordinate { index: usize, coordinate: Coordinate },

    #[error("point {index} repeats x={x}")]
    DuplicateX { index: usize, x: f64 },

    #[error("point {index} has x={x} which is below previous x={previous}")]
    NonIncreasingX { index: usize, previous: f64, x: f64 },
}

impl ValidationError {
    #[must_use]
    pub fn reason(self) -> ValidationReason {
        match self {
            Self::Empty => ValidationReason::Empty,
            Self::NanCoordinate { .. } => ValidationReason::NanCoordinate,
            Self::InfiniteCoordinate { .. } => ValidationReason::InfiniteCoordinate,
            Self::DuplicateX { .. } => ValidationReason::DuplicateX,
            Self::NonIncreasingX { .. } => ValidationReason::NonIncreasingX,
        }
    }

    /// Index of the offending point, when the failure is tied to one.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::NanCoordinate { index, .. }
            | Self::InfiniteCoordinate { index, .. }
            | Self::DuplicateX { index, .. }
            | Self::NonIncreasingX { index, .. } => Some(index),
        }
    }
}
