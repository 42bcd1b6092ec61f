//! Geometry helpers for position updates and relative angles

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use super::angle::QUARTER_TURN;

/// Position update policy: drop the fractional part, rounding toward zero.
///
/// Sub-unit movement is discarded, so a step whose sine or cosine component
/// is below one leaves that coordinate unchanged.
#[inline]
pub fn truncate_to_int(value: f64) -> f64 {
    value.trunc()
}

/// How `rotate_position` derives the new y coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationMode {
    /// New y is computed from the already rotated (and truncated) x
    #[default]
    Stepwise,
    /// Both coordinates are computed from the original position
    Simultaneous,
}

impl RotationMode {
    /// Lowercase name, as accepted by `FromStr`
    pub fn as_str(&self) -> &'static str {
        match self {
            RotationMode::Stepwise => "stepwise",
            RotationMode::Simultaneous => "simultaneous",
        }
    }
}

impl fmt::Display for RotationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RotationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stepwise" => Ok(RotationMode::Stepwise),
            "simultaneous" => Ok(RotationMode::Simultaneous),
            other => Err(format!("unknown rotation mode `{other}`")),
        }
    }
}

/// Rotate `position` about `origin` by `radians` and truncate the result
///
/// `radians` is used as given; callers normalize first. The x component is
/// computed and truncated before y, and in `Stepwise` mode y is derived from
/// that truncated x.
pub fn rotate_position(
    position: (f64, f64),
    origin: (f64, f64),
    radians: f64,
    mode: RotationMode,
) -> (f64, f64) {
    let (old_x, old_y) = position;
    let (ox, oy) = origin;
    let (sin, cos) = radians.sin_cos();

    let new_x = truncate_to_int(ox + cos * (old_x - ox) - sin * (old_y - oy));
    let x_for_y = match mode {
        RotationMode::Stepwise => new_x,
        RotationMode::Simultaneous => old_x,
    };
    let new_y = truncate_to_int(oy + sin * (x_for_y - ox) + cos * (old_y - oy));

    (new_x, new_y)
}

/// Euclidean distance between two positions
pub fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

/// Turn a raw `atan2` bearing into an angle measured from the facing direction
///
/// The bearing is split into three cases (lower half, upper right quadrant,
/// upper left quadrant) and `facing` is added on top. The sum is not
/// normalized.
pub fn compose_angle(atan: f64, facing: f64) -> f64 {
    if atan <= 0.0 {
        atan.abs() + QUARTER_TURN + facing
    } else if atan <= QUARTER_TURN {
        (atan - QUARTER_TURN).abs() + facing
    } else {
        TAU - atan + QUARTER_TURN + facing
    }
}
