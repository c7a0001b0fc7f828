use linechart_core::core::{CanvasSize, Dataset, Point, Range, map_range, project};
use proptest::prelude::*;

/// Rounding budget for mapping between two ranges; grows when the source
/// span is small relative to its offset from zero.
fn tolerance(from: Range, to: Range) -> f64 {
    let relative = (from.start().abs() + from.end().abs()) / from.span();
    1e-12 * (relative * to.span() + to.start().abs() + to.end().abs())
}

fn range_strategy() -> impl Strategy<Value = Range> {
    (-1_000_000.0f64..1_000_000.0, 0.001f64..1_000_000.0)
        .prop_map(|(start, span)| Range::new(start, start + span).expect("valid range"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn mapping_is_exact_at_endpoints(from in range_strategy(), to in range_strategy()) {
        prop_assert_eq!(map_range(from.start(), from, to).expect("start"), to.start());
        prop_assert_eq!(map_range(from.end(), from, to).expect("end"), to.end());
    }

    #[test]
    fn mapping_is_monotonic(
        from in range_strategy(),
        to in range_strategy(),
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let v_lo = from.start() + lo * from.span();
        let v_hi = from.start() + hi * from.span();
        let m_lo = map_range(v_lo, from, to).expect("lo");
        let m_hi = map_range(v_hi, from, to).expect("hi");
        prop_assert!(m_lo <= m_hi + tolerance(from, to));
    }

    #[test]
    fn mapping_is_affine(from in range_strategy(), to in range_strategy(), t in 0.0f64..1.0) {
        let mid = from.start() + t * from.span();
        let mapped = map_range(mid, from, to).expect("map");
        let expected = to.start() + t * to.span();
        prop_assert!((mapped - expected).abs() <= tolerance(from, to));
    }

    #[test]
    fn projecting_twice_yields_identical_offsets(
        raw in prop::collection::vec((-1_000.0f64..1_000.0, -1_000.0f64..1_000.0), 1..64),
        width in 1.0f64..4_000.0,
        height in 1.0f64..4_000.0,
    ) {
        let dataset = Dataset::canonicalize(
            raw.into_iter().map(|(x, y)| Point::new(x, y)).collect(),
        );
        let canvas = CanvasSize::new(width, height);
        let first = project(&dataset, canvas, None, None).expect("first");
        let second = project(&dataset, canvas, None, None).expect("second");
        prop_assert_eq!(first, second);
    }
}
