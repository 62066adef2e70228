pub mod intersect_2d;
pub mod vector_2d;

use rust_decimal::Decimal;

use crate::error::{GeometryError, Result};

pub use intersect_2d::solve_2x2;
pub use vector_2d::Vector2;

/// Backing storage for [`Vector2`].
pub type Coords2 = nalgebra::Vector2<Decimal>;

/// Default number of decimal places kept after division and square roots.
pub const DEFAULT_PRECISION: u32 = 28;

/// Largest precision a [`Decimal`] can carry.
pub const MAX_PRECISION: u32 = 28;

/// Default tolerance for "effectively zero" comparisons: `1e-10`.
pub const DEFAULT_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 10);

/// Working arithmetic settings: how many decimal places inexact results keep
/// and below which magnitude a value counts as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    precision: u32,
    epsilon: Decimal,
}

impl Context {
    /// Creates a context.
    ///
    /// # Errors
    ///
    /// Returns an error if `precision` exceeds [`MAX_PRECISION`] or `epsilon`
    /// is negative.
    pub fn new(precision: u32, epsilon: Decimal) -> Result<Self> {
        if precision > MAX_PRECISION {
            return Err(GeometryError::InvalidPrecision {
                precision,
                max: MAX_PRECISION,
            }
            .into());
        }
        if epsilon < Decimal::ZERO {
            return Err(GeometryError::InvalidEpsilon(epsilon).into());
        }
        Ok(Self { precision, epsilon })
    }

    /// Returns the number of decimal places kept after inexact operations.
    #[must_use]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Returns the near-zero tolerance.
    #[must_use]
    pub fn epsilon(&self) -> Decimal {
        self.epsilon
    }

    /// Returns whether `value` is zero or smaller in magnitude than epsilon.
    #[must_use]
    pub fn is_near_zero(&self, value: Decimal) -> bool {
        value.is_zero() || value.abs() < self.epsilon
    }

    /// Rounds `value` to the working precision.
    #[must_use]
    pub fn round(&self, value: Decimal) -> Decimal {
        value.round_dp(self.precision)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Lifts a `checked_*` result into the crate error.
pub(crate) fn in_range(value: Option<Decimal>) -> Result<Decimal> {
    value.ok_or_else(|| GeometryError::Overflow.into())
}

/// Returns the index of the first element that is not near zero, or `None`
/// if every element is.
#[must_use]
pub fn first_nonzero_index(values: &[Decimal], ctx: &Context) -> Option<usize> {
    values.iter().position(|v| !ctx.is_near_zero(*v))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::error::GeolineError;

    #[test]
    fn default_epsilon_is_one_e_minus_ten() {
        assert_eq!(DEFAULT_EPSILON, dec!(0.0000000001));
        assert_eq!(Context::default().epsilon(), DEFAULT_EPSILON);
        assert_eq!(Context::default().precision(), DEFAULT_PRECISION);
    }

    #[test]
    fn near_zero_uses_strict_bound() {
        let ctx = Context::default();
        assert!(ctx.is_near_zero(dec!(0)));
        assert!(ctx.is_near_zero(dec!(-0.00000000009)));
        assert!(!ctx.is_near_zero(dec!(0.0000000001)));
        assert!(!ctx.is_near_zero(dec!(-3)));
    }

    #[test]
    fn zero_epsilon_still_treats_zero_as_zero() {
        let ctx = Context::new(10, Decimal::ZERO).unwrap();
        assert!(ctx.is_near_zero(Decimal::ZERO));
        assert!(!ctx.is_near_zero(dec!(0.0000000000001)));
    }

    #[test]
    fn context_rejects_excess_precision() {
        let err = Context::new(29, DEFAULT_EPSILON).unwrap_err();
        assert_eq!(
            err,
            GeolineError::Geometry(GeometryError::InvalidPrecision {
                precision: 29,
                max: 28
            })
        );
    }

    #[test]
    fn context_rejects_negative_epsilon() {
        let err = Context::new(10, dec!(-0.1)).unwrap_err();
        assert!(matches!(
            err,
            GeolineError::Geometry(GeometryError::InvalidEpsilon(_))
        ));
    }

    #[test]
    fn first_nonzero_index_finds_leading_component() {
        let ctx = Context::default();
        assert_eq!(first_nonzero_index(&[dec!(1), dec!(2)], &ctx), Some(0));
        assert_eq!(first_nonzero_index(&[dec!(0), dec!(2)], &ctx), Some(1));
        assert_eq!(
            first_nonzero_index(&[dec!(0.00000000001), dec!(-2)], &ctx),
            Some(1)
        );
    }

    #[test]
    fn in_range_maps_none_to_overflow() {
        assert_eq!(
            in_range(Decimal::MAX.checked_add(Decimal::ONE)),
            Err(GeolineError::Geometry(GeometryError::Overflow))
        );
        assert_eq!(in_range(dec!(2).checked_mul(dec!(3))), Ok(dec!(6)));
    }

    #[test]
    fn first_nonzero_index_none_when_all_near_zero() {
        let ctx = Context::default();
        assert_eq!(first_nonzero_index(&[dec!(0), dec!(0)], &ctx), None);
        assert_eq!(first_nonzero_index(&[], &ctx), None);
    }
}
