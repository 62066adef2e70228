use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::error::{GeometryError, Result};
use crate::math::{first_nonzero_index, in_range, solve_2x2, Context, Vector2};

/// An infinite 2D line in normal form: `normal · (x_1, x_2) = constant_term`.
///
/// The base point is derived once at construction. It is `None` when the
/// normal vector has no component above the context's epsilon, which makes
/// the line degenerate.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    normal_vector: Vector2,
    constant_term: Decimal,
    basepoint: Option<Vector2>,
    ctx: Context,
}

/// How two lines relate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineIntersection {
    /// Parallel and distinct: no common point.
    Disjoint,
    /// The same line: infinitely many common points.
    Coincident,
    /// A single crossing point.
    Point(Vector2),
}

impl LineIntersection {
    /// Returns the crossing point, if the intersection is unique.
    #[must_use]
    pub fn point(&self) -> Option<&Vector2> {
        match self {
            Self::Point(p) => Some(p),
            Self::Disjoint | Self::Coincident => None,
        }
    }

    /// Returns whether the lines cross at exactly one point.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        matches!(self, Self::Point(_))
    }
}

impl Line {
    /// Creates a line using the default [`Context`].
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Overflow`] if the base point does not fit the
    /// decimal range.
    pub fn new(normal_vector: Vector2, constant_term: impl Into<Decimal>) -> Result<Self> {
        Self::with_context(Context::default(), normal_vector, constant_term)
    }

    /// Creates a line whose arithmetic follows `ctx`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Overflow`] if the base point does not fit the
    /// decimal range.
    pub fn with_context(
        ctx: Context,
        normal_vector: Vector2,
        constant_term: impl Into<Decimal>,
    ) -> Result<Self> {
        let constant_term = constant_term.into();
        let basepoint = compute_basepoint(&normal_vector, constant_term, &ctx)?;
        Ok(Self {
            normal_vector,
            constant_term,
            basepoint,
            ctx,
        })
    }

    /// Returns the normal vector.
    #[must_use]
    pub fn normal_vector(&self) -> &Vector2 {
        &self.normal_vector
    }

    /// Returns the right-hand side of the line equation.
    #[must_use]
    pub fn constant_term(&self) -> Decimal {
        self.constant_term
    }

    /// Returns a point on the line with all but one coordinate zero.
    #[must_use]
    pub fn basepoint(&self) -> Option<&Vector2> {
        self.basepoint.as_ref()
    }

    /// Returns the arithmetic context the line was built with.
    #[must_use]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Returns whether the normal vector is effectively zero.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.basepoint.is_none()
    }

    /// Returns whether `point` satisfies the line equation within epsilon.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Overflow`] if evaluating the equation leaves
    /// the decimal range.
    pub fn contains_point(&self, point: &Vector2) -> Result<bool> {
        let lhs = self.normal_vector.dot(point)?;
        Ok(self
            .ctx
            .is_near_zero(in_range(lhs.checked_sub(self.constant_term))?))
    }

    /// Two lines are parallel iff their normal vectors are.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        self.normal_vector
            .is_parallel_to(&other.normal_vector, &self.ctx)
    }

    /// Coincidence test for parallel lines: the vector joining the two base
    /// points must be orthogonal to the normal.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] if either line has no base
    /// point, or [`GeometryError::Overflow`] if the test leaves the decimal
    /// range.
    pub fn is_equal_to(&self, other: &Self) -> Result<bool> {
        let (Some(p1), Some(p2)) = (&self.basepoint, &other.basepoint) else {
            return Err(GeometryError::DegenerateLine.into());
        };
        let joining = p1.minus(p2)?;
        joining.is_orthogonal_to(&self.normal_vector, &self.ctx)
    }

    /// Classifies the two lines and, when they cross once, returns the point.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] if the lines are parallel and
    /// either has a zero normal vector, or [`GeometryError::Overflow`] if the
    /// crossing point does not fit the decimal range.
    pub fn intersection_with(&self, other: &Self) -> Result<LineIntersection> {
        if !self.is_parallel_to(other) {
            let solution = solve_2x2(
                [self.normal_vector.x(), self.normal_vector.y()],
                self.constant_term,
                [other.normal_vector.x(), other.normal_vector.y()],
                other.constant_term,
                &self.ctx,
            )?;
            if let Some((x, y)) = solution {
                let point = Vector2::new(x, y);
                debug!(lhs = %self, rhs = %other, %point, "lines cross at a unique point");
                return Ok(LineIntersection::Point(point));
            }
            debug!(
                lhs = %self,
                rhs = %other,
                "zero determinant for non-parallel normals, treating as parallel"
            );
        }

        let outcome = if self.is_equal_to(other)? {
            LineIntersection::Coincident
        } else {
            LineIntersection::Disjoint
        };
        debug!(lhs = %self, rhs = %other, ?outcome, "lines are parallel");
        Ok(outcome)
    }
}

impl Default for Line {
    fn default() -> Self {
        Self {
            normal_vector: Vector2::zeros(),
            constant_term: Decimal::ZERO,
            basepoint: None,
            ctx: Context::default(),
        }
    }
}

fn compute_basepoint(
    normal: &Vector2,
    constant_term: Decimal,
    ctx: &Context,
) -> Result<Option<Vector2>> {
    let Some(index) = first_nonzero_index(normal.coordinates(), ctx) else {
        trace!(%normal, "normal vector is zero, line has no base point");
        return Ok(None);
    };
    let mut coords = [Decimal::ZERO; 2];
    coords[index] = ctx.round(in_range(constant_term.checked_div(normal[index]))?);
    let basepoint = Vector2::from(coords);
    trace!(%normal, %constant_term, %basepoint, "derived base point");
    Ok(Some(basepoint))
}
