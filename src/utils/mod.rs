//! Numeric helpers for the point model
//!
//! - Angles (normalization into [0, 2π), circular distance)
//! - Geometry (truncating position updates, rotation about a point, relative bearings)

pub mod angle;
pub mod geometry;
