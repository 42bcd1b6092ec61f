use std::fmt;

use super::RelativeDirection;
use crate::config;
use crate::error::{PointError, ensure_finite, ensure_positive};
use crate::utils::angle::normalize_radian;
use crate::utils::geometry::{
    RotationMode, compose_angle, distance, rotate_position, truncate_to_int,
};

/// 2D point with a facing direction
///
/// The direction `r` is in radians. It is kept as given by [`Point::new`];
/// [`Point::set_direction`] normalizes into [0, 2π) while [`Point::rotate`]
/// adds a normalized delta without wrapping the sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
    r: f64,
}

impl Point {
    /// Create a new point. All three values must be finite.
    pub fn new(x: f64, y: f64, r: f64) -> Result<Self, PointError> {
        Ok(Self {
            x: ensure_finite("x", x)?,
            y: ensure_finite("y", y)?,
            r: ensure_finite("r", r)?,
        })
    }

    /// X coordinate
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Current position as `(x, y)`
    pub fn location(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Move to `(x, y)`
    pub fn set_location(&mut self, x: f64, y: f64) -> Result<(), PointError> {
        let x = ensure_finite("x", x)?;
        let y = ensure_finite("y", y)?;
        log::trace!("set_location ({}, {}) -> ({x}, {y})", self.x, self.y);
        self.x = x;
        self.y = y;
        Ok(())
    }

    /// Facing direction in radians, exactly as stored
    pub fn direction(&self) -> f64 {
        self.r
    }

    /// Face `r` radians, normalized into [0, 2π)
    pub fn set_direction(&mut self, r: f64) -> Result<(), PointError> {
        let r = normalize_radian(ensure_finite("r", r)?);
        log::trace!("set_direction {} -> {r}", self.r);
        self.r = r;
        Ok(())
    }

    /// Step `distance` units along the facing direction
    ///
    /// Each component (`sin(r) * distance` for x, `cos(r) * distance` for y)
    /// is truncated toward zero before it is applied.
    pub fn advance(&mut self, distance: f64) -> Result<(), PointError> {
        let distance = ensure_positive("distance", distance)?;
        let (sin, cos) = self.r.sin_cos();
        let x = ensure_finite("x", self.x + truncate_to_int(sin * distance))?;
        let y = ensure_finite("y", self.y + truncate_to_int(cos * distance))?;
        log::trace!("advance {distance}: ({}, {}) -> ({x}, {y})", self.x, self.y);
        self.x = x;
        self.y = y;
        Ok(())
    }

    /// Turn by `r` radians
    ///
    /// `r` is normalized and added to the current direction. The sum itself is
    /// stored as is and may reach past 2π.
    pub fn rotate(&mut self, r: f64) -> Result<(), PointError> {
        let delta = normalize_radian(ensure_finite("r", r)?);
        let r = self.r + delta;
        log::trace!("rotate {delta}: {} -> {r}", self.r);
        self.r = r;
        Ok(())
    }

    /// Rotate position and direction about `origin` using the process-wide
    /// rotation mode (`POINT_ROTATION_MODE`, stepwise by default)
    pub fn rotate_about_point(&mut self, origin: &Point, r: f64) -> Result<(), PointError> {
        self.rotate_about_point_with(origin, r, config::rotation_mode())
    }

    /// Rotate position and direction about `origin` by `r` radians
    ///
    /// The new position is truncated toward zero. The facing direction turns
    /// by the same normalized angle, as with [`Point::rotate`].
    pub fn rotate_about_point_with(
        &mut self,
        origin: &Point,
        r: f64,
        mode: RotationMode,
    ) -> Result<(), PointError> {
        let r = normalize_radian(ensure_finite("r", r)?);
        let (x, y) = rotate_position(self.location(), origin.location(), r, mode);
        let x = ensure_finite("x", x)?;
        let y = ensure_finite("y", y)?;
        log::trace!(
            "rotate_about_point ({}, {}) by {r} [{mode}]: ({}, {}) -> ({x}, {y})",
            origin.x,
            origin.y,
            self.x,
            self.y
        );
        self.x = x;
        self.y = y;
        self.rotate(r)
    }

    /// Euclidean distance to `other`
    pub fn distance_to_point(&self, other: &Point) -> f64 {
        distance(self.location(), other.location())
    }

    /// Angle of `other` relative to this point, offset by the facing direction
    ///
    /// The result is not normalized and can exceed 2π when the direction is
    /// non-zero. Fails with [`PointError::SameLocation`] if both points share
    /// a position.
    pub fn angle_to_point(&self, other: &Point) -> Result<f64, PointError> {
        if self.x == other.x && self.y == other.y {
            log::debug!("angle_to_point: both points at ({}, {})", self.x, self.y);
            return Err(PointError::SameLocation);
        }
        let atan = (other.y - self.y).atan2(other.x - self.x);
        Ok(compose_angle(atan, self.direction()))
    }

    /// Coarse direction of `other`, see [`RelativeDirection::from_angle`]
    pub fn direction_to_point(&self, other: &Point) -> Result<RelativeDirection, PointError> {
        self.angle_to_point(other).map(RelativeDirection::from_angle)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) facing {} rad", self.x, self.y, self.r)
    }
}
