#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{Line, LineIntersection};
use crate::error::{GeolineError, GeometryError};
use crate::math::Vector2;

/// Decimals with one fractional digit in `[-5, 5]`.
fn coefficient() -> impl Strategy<Value = Decimal> {
    (-50i64..=50).prop_map(|n| Decimal::new(n, 1))
}

/// Decimals with five fractional digits, for exercising rounding.
fn fine_coefficient() -> impl Strategy<Value = Decimal> {
    (-10_000_000i64..=10_000_000).prop_map(|n| Decimal::new(n, 5))
}

/// Decimals anywhere from tiny fractions up to about `1e28`.
fn wide_coefficient() -> impl Strategy<Value = Decimal> {
    let bound = 10i128.pow(28);
    (-bound..=bound, 0u32..=28).prop_map(|(m, scale)| Decimal::from_i128_with_scale(m, scale))
}

fn any_line() -> impl Strategy<Value = Line> {
    (coefficient(), coefficient(), coefficient())
        .prop_map(|(a, b, c)| Line::new(Vector2::new(a, b), c).unwrap())
}

fn proper_line() -> impl Strategy<Value = Line> {
    any_line().prop_filter("normal vector must be nonzero", |l| !l.is_degenerate())
}

proptest! {
    #[test]
    fn line_is_parallel_and_equal_to_itself(l in proper_line()) {
        prop_assert!(l.is_parallel_to(&l));
        prop_assert_eq!(l.is_equal_to(&l), Ok(true));
        prop_assert_eq!(l.intersection_with(&l), Ok(LineIntersection::Coincident));
    }

    #[test]
    fn parallelism_is_symmetric(l1 in any_line(), l2 in any_line()) {
        prop_assert_eq!(l1.is_parallel_to(&l2), l2.is_parallel_to(&l1));
    }

    #[test]
    fn crossing_point_satisfies_both_equations(l1 in proper_line(), l2 in proper_line()) {
        prop_assume!(!l1.is_parallel_to(&l2));
        let result = l1.intersection_with(&l2).unwrap();
        let LineIntersection::Point(p) = result else {
            return Err(TestCaseError::fail(format!("expected a point, got {result:?}")));
        };
        prop_assert!(l1.contains_point(&p).unwrap(), "{p} not on {l1}");
        prop_assert!(l2.contains_point(&p).unwrap(), "{p} not on {l2}");
    }

    #[test]
    fn scaled_line_coincides(l in proper_line(), k in coefficient()) {
        prop_assume!(!k.is_zero());
        let normal = l.normal_vector().times_scalar(k).unwrap();
        let scaled = Line::new(normal, l.constant_term() * k).unwrap();
        prop_assert_eq!(l.intersection_with(&scaled), Ok(LineIntersection::Coincident));
    }

    #[test]
    fn shifted_line_is_disjoint(l in proper_line(), shift in coefficient()) {
        prop_assume!(!shift.is_zero());
        let shifted = Line::new(*l.normal_vector(), l.constant_term() + shift).unwrap();
        prop_assert_eq!(l.intersection_with(&shifted), Ok(LineIntersection::Disjoint));
    }

    #[test]
    fn rendering_round_trips_up_to_rounding(
        a in fine_coefficient(),
        b in fine_coefficient(),
        c in fine_coefficient(),
    ) {
        let l = Line::new(Vector2::new(a, b), c).unwrap();
        let parsed: Line = l.to_string().parse().unwrap();
        prop_assert_eq!(parsed.normal_vector(), &Vector2::new(a.round_dp(3), b.round_dp(3)));
        prop_assert_eq!(parsed.constant_term(), c.round_dp(3));
    }

    #[test]
    fn wide_range_inputs_never_panic(
        a1 in wide_coefficient(), b1 in wide_coefficient(), c1 in wide_coefficient(),
        a2 in wide_coefficient(), b2 in wide_coefficient(), c2 in wide_coefficient(),
    ) {
        let overflow = GeolineError::Geometry(GeometryError::Overflow);
        let (l1, l2) = match (
            Line::new(Vector2::new(a1, b1), c1),
            Line::new(Vector2::new(a2, b2), c2),
        ) {
            (Ok(l1), Ok(l2)) => (l1, l2),
            (Err(e), _) | (_, Err(e)) => {
                prop_assert_eq!(e, overflow);
                return Ok(());
            }
        };
        let parallel = l1.is_parallel_to(&l2);
        prop_assert_eq!(parallel, l2.is_parallel_to(&l1));
        match l1.intersection_with(&l2) {
            Ok(LineIntersection::Point(_)) => prop_assert!(!parallel),
            Ok(outcome) => prop_assert!(parallel, "{outcome:?} for crossing lines {l1} and {l2}"),
            Err(e) => prop_assert!(
                e == overflow || e == GeolineError::Geometry(GeometryError::DegenerateLine),
                "unexpected error {e}"
            ),
        }
        let _ = l1.to_string();
    }
}
