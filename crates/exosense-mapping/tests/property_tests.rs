//! Property-based tests for range mapping.

use exosense_mapping::{PotentiometerScale, RangeSpec, map};
use proptest::prelude::*;
use quickcheck_macros::quickcheck;

fn close(a: f64, b: f64, scale: f64) -> bool {
    (a - b).abs() <= 1e-9 * scale.max(1.0)
}

fn distinct_bounds() -> impl Strategy<Value = (f64, f64)> {
    (-1.0e6f64..1.0e6, 1.0e-3f64..1.0e6).prop_map(|(lo, width)| (lo, lo + width))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn map_hits_output_endpoints(
        (in_min, in_max) in distinct_bounds(),
        out_min in -1.0e6f64..1.0e6,
        out_max in -1.0e6f64..1.0e6,
    ) {
        let at_min = map(in_min, in_min, in_max, out_min, out_max);
        let at_max = map(in_max, in_min, in_max, out_min, out_max);
        let scale = out_min.abs().max(out_max.abs());
        prop_assert!(close(at_min, out_min, scale), "map(in_min) = {} != {}", at_min, out_min);
        prop_assert!(close(at_max, out_max, scale), "map(in_max) = {} != {}", at_max, out_max);
    }

    #[test]
    fn map_is_affine(
        (in_min, in_max) in distinct_bounds(),
        out_min in -1.0e3f64..1.0e3,
        out_max in -1.0e3f64..1.0e3,
        a in -1.0e6f64..1.0e6,
        b in -1.0e6f64..1.0e6,
    ) {
        // The midpoint of two inputs maps to the midpoint of their outputs.
        let fa = map(a, in_min, in_max, out_min, out_max);
        let fb = map(b, in_min, in_max, out_min, out_max);
        let fmid = map((a + b) / 2.0, in_min, in_max, out_min, out_max);
        let scale = fa.abs().max(fb.abs()).max(out_min.abs()).max(out_max.abs());
        prop_assert!((fmid - (fa + fb) / 2.0).abs() <= 1e-6 * scale.max(1.0));
    }

    #[test]
    fn range_spec_matches_free_function(
        (in_min, in_max) in distinct_bounds(),
        out_min in -1.0e6f64..1.0e6,
        out_max in -1.0e6f64..1.0e6,
        x in -1.0e7f64..1.0e7,
    ) {
        let spec = RangeSpec::new(in_min, in_max, out_min, out_max).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(spec.map(x).to_bits(), map(x, in_min, in_max, out_min, out_max).to_bits());
    }

    #[test]
    fn percentage_always_within_display_window(raw in any::<u16>(), full_scale in 1.0f64..70_000.0) {
        let scale = PotentiometerScale { full_scale, ..PotentiometerScale::default() };
        let pct = scale.percentage(raw);
        prop_assert!((0.0..=100.0).contains(&pct));
    }

    #[test]
    fn equal_input_bounds_always_rejected(bound in -1.0e9f64..1.0e9) {
        prop_assert!(RangeSpec::new(bound, bound, 0.0, 1.0).is_err());
    }
}

#[quickcheck]
fn map_is_idempotent(x: i32, lo: i16, width: u16, out_min: i16, out_max: i16) -> bool {
    let in_min = f64::from(lo);
    let in_max = in_min + f64::from(width) + 1.0;
    let first = map(f64::from(x), in_min, in_max, f64::from(out_min), f64::from(out_max));
    let second = map(f64::from(x), in_min, in_max, f64::from(out_min), f64::from(out_max));
    first.to_bits() == second.to_bits()
}
