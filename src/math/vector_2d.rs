use std::f64::consts::PI;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};

use super::{in_range, Context, Coords2};
use crate::error::{GeometryError, Result};

/// An immutable 2D vector with exact decimal components.
///
/// Arithmetic is checked: anything that leaves the decimal range returns
/// [`GeometryError::Overflow`] instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2 {
    coords: Coords2,
}

impl Vector2 {
    /// Creates a vector from two exact components.
    #[must_use]
    pub fn new(x: impl Into<Decimal>, y: impl Into<Decimal>) -> Self {
        Self {
            coords: Coords2::new(x.into(), y.into()),
        }
    }

    /// The zero vector.
    #[must_use]
    pub fn zeros() -> Self {
        Self::new(Decimal::ZERO, Decimal::ZERO)
    }

    /// Creates a vector from two decimal strings such as `"1.25"`.
    ///
    /// # Errors
    ///
    /// Returns an error if either string is not a valid decimal.
    pub fn parse(x: &str, y: &str) -> Result<Self> {
        Ok(Self::new(parse_decimal(x)?, parse_decimal(y)?))
    }

    /// Returns the first component.
    #[must_use]
    pub fn x(&self) -> Decimal {
        self.coords.x
    }

    /// Returns the second component.
    #[must_use]
    pub fn y(&self) -> Decimal {
        self.coords.y
    }

    /// Returns the components in index order.
    #[must_use]
    pub fn coordinates(&self) -> &[Decimal] {
        self.coords.as_slice()
    }

    /// Componentwise sum.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Overflow`] if a component leaves the decimal range.
    pub fn plus(&self, other: &Self) -> Result<Self> {
        self.zip_checked(other, Decimal::checked_add)
    }

    /// Componentwise difference.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Overflow`] if a component leaves the decimal range.
    pub fn minus(&self, other: &Self) -> Result<Self> {
        self.zip_checked(other, Decimal::checked_sub)
    }

    /// Scales both components by `k`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Overflow`] if a component leaves the decimal range.
    pub fn times_scalar(&self, k: Decimal) -> Result<Self> {
        let scaled = self.coords.map(|c| c.checked_mul(k));
        Ok(Self::new(in_range(scaled.x)?, in_range(scaled.y)?))
    }

    /// Sum of componentwise products.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Overflow`] if a product or the sum leaves the
    /// decimal range.
    pub fn dot(&self, other: &Self) -> Result<Decimal> {
        let products = self.coords.zip_map(&other.coords, Decimal::checked_mul);
        in_range(in_range(products.x)?.checked_add(in_range(products.y)?))
    }

    /// Euclidean length, rounded to the context's precision.
    ///
    /// The components are divided by the largest one before squaring, so
    /// only the final rescale can overflow.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Overflow`] if the length itself exceeds the
    /// decimal range.
    pub fn magnitude(&self, ctx: &Context) -> Result<Decimal> {
        let Some((largest, unit)) = self.scaled_by_largest() else {
            return Ok(Decimal::ZERO);
        };
        let len = in_range(largest.checked_mul(unit_length(&unit)))?;
        Ok(ctx.round(len))
    }

    /// Returns whether the magnitude is near zero.
    #[must_use]
    pub fn is_zero(&self, ctx: &Context) -> bool {
        self.magnitude(ctx).is_ok_and(|len| ctx.is_near_zero(len))
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the magnitude is near zero.
    pub fn normalized(&self, ctx: &Context) -> Result<Self> {
        if self.is_zero(ctx) {
            return Err(GeometryError::ZeroVector.into());
        }
        let Some((_, unit)) = self.scaled_by_largest() else {
            return Err(GeometryError::ZeroVector.into());
        };
        // One component of `unit` is ±1, so its length lies in [1, √2].
        let len = unit_length(&unit);
        Ok(Self {
            coords: unit.map(|c| ctx.round(c / len)),
        })
    }

    /// Angle between the two vectors in radians, in `[0, π]`.
    ///
    /// The cosine is clamped to `[-1, 1]` before `acos` so rounding noise on
    /// (anti)parallel inputs cannot produce NaN.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if either vector is zero.
    pub fn angle_with(&self, other: &Self, ctx: &Context) -> Result<f64> {
        let u1 = self.normalized(ctx)?;
        let u2 = other.normalized(ctx)?;
        let cos = u1.dot(&u2)?.to_f64().unwrap_or(0.0).clamp(-1.0, 1.0);
        Ok(cos.acos())
    }

    /// Parallel when either vector is zero, or the angle between them is
    /// `0` or `π` within epsilon.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Self, ctx: &Context) -> bool {
        if self.is_zero(ctx) || other.is_zero(ctx) {
            return true;
        }
        let Ok(angle) = self.angle_with(other, ctx) else {
            return true;
        };
        let eps = ctx.epsilon().to_f64().unwrap_or(0.0);
        angle < eps || (PI - angle) < eps
    }

    /// Orthogonal when the dot product is near zero.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Overflow`] if the dot product leaves the
    /// decimal range.
    pub fn is_orthogonal_to(&self, other: &Self, ctx: &Context) -> Result<bool> {
        Ok(ctx.is_near_zero(self.dot(other)?))
    }

    fn zip_checked(
        &self,
        other: &Self,
        op: fn(Decimal, Decimal) -> Option<Decimal>,
    ) -> Result<Self> {
        let combined = self.coords.zip_map(&other.coords, op);
        Ok(Self::new(in_range(combined.x)?, in_range(combined.y)?))
    }

    /// Splits the vector into its largest absolute component and the vector
    /// divided by it. `None` for the exact zero vector.
    fn scaled_by_largest(&self) -> Option<(Decimal, Coords2)> {
        let largest = self.coords.iter().map(|c| c.abs()).max().unwrap_or_default();
        if largest.is_zero() {
            return None;
        }
        // |c| <= largest, so each quotient stays within [-1, 1].
        Some((largest, self.coords.map(|c| c / largest)))
    }
}

/// Length of a vector whose components lie in `[-1, 1]`.
fn unit_length(unit: &Coords2) -> Decimal {
    unit.dot(unit).sqrt().unwrap_or_default()
}

impl Default for Vector2 {
    fn default() -> Self {
        Self::zeros()
    }
}

impl Index<usize> for Vector2 {
    type Output = Decimal;

    fn index(&self, index: usize) -> &Decimal {
        &self.coords[index]
    }
}

impl From<[Decimal; 2]> for Vector2 {
    fn from([x, y]: [Decimal; 2]) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x().normalize(), self.y().normalize())
    }
}

fn parse_decimal(s: &str) -> Result<Decimal> {
    Decimal::from_str(s.trim()).map_err(|_| GeometryError::InvalidNumber(s.to_owned()).into())
}
