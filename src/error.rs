use rust_decimal::Decimal;
use thiserror::Error;

/// Top-level error type for the geoline crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Parse(#[from] ParseLineError),
}

/// Errors related to geometric computations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A coincidence test touched a line whose normal vector is zero,
    /// so it has no base point.
    #[error("degenerate line: normal vector has no nonzero component")]
    DegenerateLine,

    #[error("zero-length vector")]
    ZeroVector,

    /// An intermediate or final value does not fit the decimal range.
    #[error("arithmetic overflow: result exceeds the decimal range")]
    Overflow,

    #[error("precision {precision} exceeds the maximum of {max} decimal places")]
    InvalidPrecision { precision: u32, max: u32 },

    #[error("epsilon must be non-negative, got {0}")]
    InvalidEpsilon(Decimal),

    #[error("invalid decimal number: {0:?}")]
    InvalidNumber(String),
}

/// Errors produced when reading a line back from its `a x_1 + b x_2 = c` form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLineError {
    #[error("empty input")]
    Empty,

    #[error("missing '=' in {0:?}")]
    MissingEquals(String),

    #[error("invalid number {0:?}")]
    InvalidNumber(String),

    #[error("unknown variable {0:?}, expected x_1 or x_2")]
    UnknownVariable(String),

    #[error("variable x_{0} appears more than once")]
    DuplicateVariable(usize),

    #[error("unexpected token {0:?}")]
    UnexpectedToken(String),
}

/// Convenience type alias for results using [`GeolineError`].
pub type Result<T> = std::result::Result<T, GeolineError>;
