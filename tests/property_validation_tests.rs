use linechart_core::ValidationReason;
use linechart_core::core::{Dataset, Point, validate};
use proptest::prelude::*;

fn finite_points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-10_000.0f64..10_000.0, -10_000.0f64..10_000.0), 2..96)
        .prop_map(|raw| raw.into_iter().map(|(x, y)| Point::new(x, y)).collect())
}

/// Sorted by X with duplicate X values removed; at least two points.
fn accepted_points() -> impl Strategy<Value = Vec<Point>> {
    finite_points()
        .prop_map(|points| Dataset::canonicalize(points).into_points())
        .prop_filter("needs two distinct x values", |points| points.len() >= 2)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn sorted_deduplicated_points_are_accepted(points in accepted_points()) {
        prop_assert_eq!(validate(&Dataset::new(points)), Ok(()));
    }

    #[test]
    fn injected_nan_is_rejected(
        points in accepted_points(),
        position in any::<prop::sample::Index>(),
        on_x in any::<bool>(),
    ) {
        let mut points = points;
        let index = position.index(points.len());
        if on_x {
            points[index].x = f64::NAN;
        } else {
            points[index].y = f64::NAN;
        }

        let err = validate(&Dataset::new(points)).expect_err("nan must be rejected");
        prop_assert_eq!(err.reason(), ValidationReason::NanCoordinate);
        prop_assert_eq!(err.index(), Some(index));
    }

    #[test]
    fn injected_duplicate_x_is_rejected(
        points in accepted_points(),
        position in any::<prop::sample::Index>(),
    ) {
        let mut points = points;
        let index = 1 + position.index(points.len() - 1);
        points[index].x = points[index - 1].x;

        let err = validate(&Dataset::new(points)).expect_err("duplicate must be rejected");
        prop_assert_eq!(err.reason(), ValidationReason::DuplicateX);
        prop_assert_eq!(err.index(), Some(index));
    }

    #[test]
    fn injected_out_of_order_x_is_rejected(
        points in accepted_points(),
        position in any::<prop::sample::Index>(),
    ) {
        let mut points = points;
        let index = 1 + position.index(points.len() - 1);
        points.swap(index - 1, index);

        let err = validate(&Dataset::new(points)).expect_err("inversion must be rejected");
        prop_assert_eq!(err.reason(), ValidationReason::NonIncreasingX);
        prop_assert_eq!(err.index(), Some(index));
    }
}
