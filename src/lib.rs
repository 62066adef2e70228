//! Exact-decimal 2D lines in normal form `a·x_1 + b·x_2 = c`.
//!
//! ```
//! use geoline::{Line, LineIntersection, Vector2};
//!
//! let l1 = Line::new(Vector2::new(1, 1), 1)?;
//! let l2 = Line::new(Vector2::new(1, -1), 1)?;
//! assert_eq!(l1.intersection_with(&l2)?, LineIntersection::Point(Vector2::new(1, 0)));
//! assert_eq!(l2.to_string(), "x_1 - x_2 = 1");
//! # Ok::<(), geoline::GeolineError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeolineError, GeometryError, ParseLineError, Result};
pub use geometry::{Line, LineIntersection};
pub use math::{Context, Vector2};
