use rust_decimal::Decimal;

use super::{in_range, Context};
use crate::error::Result;

/// Solves the 2x2 system `a·x + b·y = k1`, `c·x + d·y = k2` by Cramer's rule.
///
/// Returns `Ok(None)` when the determinant is exactly zero. The solution is
/// rounded to the context's precision.
///
/// # Errors
///
/// Returns [`GeometryError::Overflow`](crate::GeometryError::Overflow) if the
/// determinant, a numerator or a quotient leaves the decimal range.
#[allow(clippy::many_single_char_names)]
pub fn solve_2x2(
    [a, b]: [Decimal; 2],
    k1: Decimal,
    [c, d]: [Decimal; 2],
    k2: Decimal,
    ctx: &Context,
) -> Result<Option<(Decimal, Decimal)>> {
    let det = cross(a, d, b, c)?;
    if det.is_zero() {
        return Ok(None);
    }
    let x = in_range(cross(d, k1, b, k2)?.checked_div(det))?;
    let y = in_range(cross(a, k2, c, k1)?.checked_div(det))?;
    Ok(Some((ctx.round(x), ctx.round(y))))
}

/// `p·q − r·s` with every step checked.
fn cross(p: Decimal, q: Decimal, r: Decimal, s: Decimal) -> Result<Decimal> {
    let lhs = in_range(p.checked_mul(q))?;
    let rhs = in_range(r.checked_mul(s))?;
    in_range(lhs.checked_sub(rhs))
}
