use crate::core::{Dataset, Point};
use crate::error::{Coordinate, ValidationError};

/// Checks the invariants a dataset must hold before it is accepted.
///
/// Points are scanned in order and the first failure is reported. A point's
/// own coordinates are checked before its ordering against the previous
/// point, so a NaN `x` is reported as NaN rather than as an ordering error.
pub fn validate(dataset: &Dataset) -> Result<(), ValidationError> {
    let points = dataset.points();
    if points.is_empty() {
        return Err(ValidationError::Empty);
    }

    let mut previous: Option<Point> = None;
    for (index, point) in points.iter().copied().enumerate() {
        check_coordinate(index, Coordinate::X, point.x)?;
        check_coordinate(index, Coordinate::Y, point.y)?;

        if let Some(previous) = previous {
            if point.x == previous.x {
                return Err(ValidationError::DuplicateX { index, x: point.x });
            }
            if point.x < previous.x {
                return Err(ValidationError::NonIncreasingX {
                    index,
                    previous: previous.x,
                    x: point.x,
                });
            }
        }
        previous = Some(point);
    }

    Ok(())
}

fn check_coordinate(
    index: usize,
    coordinate: Coordinate,
    value: f64,
) -> Result<(), ValidationError> {
    if value.is_nan() {
        return Err(ValidationError::NanCoordinate { index, coordinate });
    }
    if value.is_infinite() {
        return Err(ValidationError::InfiniteCoordinate { index, coordinate });
    }
    Ok(())
}
