use linechart_core::core::{CanvasSize, Dataset, Interpolation, Point, project};
use proptest::prelude::*;

const SAMPLES_PER_SEGMENT: usize = 64;

/// Strictly increasing in both X and Y.
fn increasing_points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((0.1f64..10.0, 0.01f64..50.0), 2..48).prop_map(|steps| {
        let mut x = 0.0;
        let mut y = 0.0;
        steps
            .into_iter()
            .map(|(dx, dy)| {
                x += dx;
                y += dy;
                Point::new(x, y)
            })
            .collect()
    })
}

/// Strictly increasing in X, arbitrary Y.
fn arbitrary_points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((0.1f64..10.0, -500.0f64..500.0), 1..48).prop_map(|steps| {
        let mut x = 0.0;
        steps
            .into_iter()
            .map(|(dx, y)| {
                x += dx;
                Point::new(x, y)
            })
            .collect()
    })
}

fn projected(points: Vec<Point>, width: f64, height: f64) -> Dataset {
    let dataset = Dataset::validated(points).expect("generated dataset is valid");
    project(&dataset, CanvasSize::new(width, height), None, None).expect("projection")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn monotone_x_never_overshoots(
        points in increasing_points(),
        width in 100.0f64..2_000.0,
        height in 100.0f64..2_000.0,
    ) {
        let dataset = projected(points, width, height);
        let path = Interpolation::MonotoneX.interpolate(&dataset);
        let segments = path.segments();
        prop_assert_eq!(segments.len(), dataset.len() - 1);

        for (segment, pair) in segments.iter().zip(dataset.points().windows(2)) {
            let lo = pair[0].offset.y.min(pair[1].offset.y);
            let hi = pair[0].offset.y.max(pair[1].offset.y);
            let tolerance = 1e-9 * height;
            for step in 0..=SAMPLES_PER_SEGMENT {
                let t = step as f64 / SAMPLES_PER_SEGMENT as f64;
                let y = segment.point_at(t).y;
                prop_assert!(y >= lo - tolerance, "y={} below {}", y, lo);
                prop_assert!(y <= hi + tolerance, "y={} above {}", y, hi);
            }
        }
    }

    #[test]
    fn every_variant_preserves_endpoints(
        points in arbitrary_points(),
        width in 10.0f64..2_000.0,
        height in 10.0f64..2_000.0,
    ) {
        let dataset = projected(points, width, height);
        let first = dataset.points()[0].offset;
        let last = dataset.points()[dataset.len() - 1].offset;

        for interpolation in Interpolation::ALL {
            let path = interpolation.interpolate(&dataset);
            prop_assert_eq!(path.start(), Some(first));
            prop_assert_eq!(path.end(), Some(last));
        }
    }

    #[test]
    fn linear_path_visits_every_offset(points in arbitrary_points()) {
        let dataset = projected(points, 800.0, 600.0);
        let path = Interpolation::Linear.interpolate(&dataset);
        let visited: Vec<_> = path.commands().iter().map(|command| command.end_point()).collect();
        let offsets: Vec<_> = dataset.iter().map(|point| point.offset).collect();
        prop_assert_eq!(visited, offsets);
    }
}
