//! Text form of a [`Line`]: `2x_1 - x_2 = 3`.
//!
//! Coefficients are rounded to three decimal places and printed with all
//! three places unless they are integers. Zero terms are dropped,
//! unit coefficients lose their numeral, and the first term carries its sign
//! without a separating space.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::Line;
use crate::error::{GeolineError, ParseLineError};
use crate::math::Vector2;

const DECIMAL_PLACES: u32 = 3;

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, &coefficient) in self.normal_vector().coordinates().iter().enumerate() {
            let rounded = coefficient.round_dp(DECIMAL_PLACES);
            if rounded.is_zero() {
                continue;
            }
            let negative = rounded.is_sign_negative();
            match (first, negative) {
                (true, true) => f.write_str("-")?,
                (true, false) => {}
                (false, true) => f.write_str(" - ")?,
                (false, false) => f.write_str(" + ")?,
            }
            if rounded.abs() != Decimal::ONE {
                write_rounded(f, rounded.abs())?;
            }
            write!(f, "x_{}", i + 1)?;
            first = false;
        }
        if first {
            f.write_str("0")?;
        }
        f.write_str(" = ")?;
        write_rounded(f, self.constant_term().round_dp(DECIMAL_PLACES))
    }
}

/// Integers print bare, everything else with exactly three places.
fn write_rounded(f: &mut fmt::Formatter<'_>, value: Decimal) -> fmt::Result {
    if value.fract().is_zero() {
        write!(f, "{}", value.normalize())
    } else {
        write!(f, "{value:.3}")
    }
}

impl FromStr for Line {
    type Err = GeolineError;

    /// Reads the form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (normal_vector, constant_term) = parse_equation(s)?;
        Line::new(normal_vector, constant_term)
    }
}

/// Splits `<terms> = <constant>` into the normal vector and constant term.
fn parse_equation(s: &str) -> Result<(Vector2, Decimal), ParseLineError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseLineError::Empty);
    }
    let (lhs, rhs) = s
        .split_once('=')
        .ok_or_else(|| ParseLineError::MissingEquals(s.to_owned()))?;
    let constant_term = parse_number(rhs.trim())?;

    let mut coefficients: [Option<Decimal>; 2] = [None; 2];
    let mut sign: Option<Decimal> = None;
    let lhs = lhs.trim();
    if lhs != "0" {
        for (pos, token) in lhs.split_whitespace().enumerate() {
            match token {
                "+" | "-" if pos > 0 && sign.is_none() => {
                    sign = Some(if token == "-" { -Decimal::ONE } else { Decimal::ONE });
                }
                _ if pos > 0 && sign.is_none() => {
                    return Err(ParseLineError::UnexpectedToken(token.to_owned()));
                }
                _ => {
                    let (index, value) = parse_term(token)?;
                    let slot = &mut coefficients[index];
                    if slot.is_some() {
                        return Err(ParseLineError::DuplicateVariable(index + 1));
                    }
                    *slot = Some(value * sign.take().unwrap_or(Decimal::ONE));
                }
            }
        }
        if sign.is_some() || coefficients.iter().all(Option::is_none) {
            return Err(ParseLineError::UnexpectedToken(lhs.to_owned()));
        }
    }

    let [a, b] = coefficients.map(Option::unwrap_or_default);
    Ok((Vector2::new(a, b), constant_term))
}

/// Splits a term such as `-2.5x_1` into its zero-based variable index and
/// coefficient.
fn parse_term(token: &str) -> Result<(usize, Decimal), ParseLineError> {
    let (coefficient, variable) = token
        .split_once("x_")
        .ok_or_else(|| ParseLineError::UnexpectedToken(token.to_owned()))?;
    let index = match variable {
        "1" => 0,
        "2" => 1,
        _ => return Err(ParseLineError::UnknownVariable(format!("x_{variable}"))),
    };
    let value = match coefficient {
        "" => Decimal::ONE,
        "-" => -Decimal::ONE,
        _ => parse_number(coefficient)?,
    };
    Ok((index, value))
}

fn parse_number(s: &str) -> Result<Decimal, ParseLineError> {
    Decimal::from_str(s).map_err(|_| ParseLineError::InvalidNumber(s.to_owned()))
}
