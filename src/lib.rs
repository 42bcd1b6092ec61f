//! facing_point - a 2D point with a facing direction
//!
//! A [`Point`] carries a position `(x, y)` and a direction `r` in radians. It
//! can step forward, turn, orbit another point, and answer how far away and in
//! which direction another point lies.
//!
//! ```
//! use facing_point::{Point, RelativeDirection};
//!
//! let mut p = Point::new(0.0, 0.0, 0.0)?;
//! p.advance(5.0)?;
//! assert_eq!(p.location(), (0.0, 5.0));
//!
//! let target = Point::new(0.0, 20.0, 0.0)?;
//! assert_eq!(p.direction_to_point(&target)?, RelativeDirection::Front);
//! # Ok::<(), facing_point::PointError>(())
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

pub(crate) mod config;
/// Error type shared by all point operations
pub mod error;
/// Core data structures (Point, RelativeDirection)
pub mod models;
/// Utility functions (angle normalization, rotation geometry)
pub mod utils;

pub use error::PointError;
pub use models::{Point, RelativeDirection};
pub use utils::angle::normalize_radian;
pub use utils::geometry::RotationMode;
