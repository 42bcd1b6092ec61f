use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::utils::angle::EIGHTH_TURN;

/// Coarse position of another point relative to a facing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativeDirection {
    /// Within 45° of straight ahead
    Front,
    /// Centered on a quarter turn clockwise
    Right,
    /// Centered on a half turn
    Back,
    /// Everything else, including angles past 7π/4
    Left,
}

impl RelativeDirection {
    /// Classify an angle produced by `Point::angle_to_point`
    ///
    /// Sectors are compared against the raw value without wrapping it first:
    /// (-π/4, π/4] is front, (π/4, 3π/4] right, (3π/4, 5π/4] back and any
    /// other value, including one above 7π/4 or 2π, is left.
    pub fn from_angle(angle: f64) -> Self {
        if angle > -EIGHTH_TURN && angle <= EIGHTH_TURN {
            RelativeDirection::Front
        } else if angle > EIGHTH_TURN && angle <= PI - EIGHTH_TURN {
            RelativeDirection::Right
        } else if angle > PI - EIGHTH_TURN && angle <= PI + EIGHTH_TURN {
            RelativeDirection::Back
        } else {
            RelativeDirection::Left
        }
    }

    /// Lowercase label ("front", "right", "back", "left")
    pub fn as_str(&self) -> &'static str {
        match self {
            RelativeDirection::Front => "front",
            RelativeDirection::Right => "right",
            RelativeDirection::Back => "back",
            RelativeDirection::Left => "left",
        }
    }
}

impl fmt::Display for RelativeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelativeDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "front" => Ok(RelativeDirection::Front),
            "right" => Ok(RelativeDirection::Right),
            "back" => Ok(RelativeDirection::Back),
            "left" => Ok(RelativeDirection::Left),
            other => Err(format!("unknown direction `{other}`")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn test_sector_centers() {
        assert_eq!(RelativeDirection::from_angle(0.0), RelativeDirection::Front);
        assert_eq!(RelativeDirection::from_angle(PI / 2.0), RelativeDirection::Right);
        assert_eq!(RelativeDirection::from_angle(PI), RelativeDirection::Back);
        assert_eq!(RelativeDirection::from_angle(3.0 * PI / 2.0), RelativeDirection::Left);
    }

    #[test]
    fn test_sector_boundaries_are_upper_inclusive() {
        assert_eq!(RelativeDirection::from_angle(EIGHTH_TURN), RelativeDirection::Front);
        assert_eq!(RelativeDirection::from_angle(PI - EIGHTH_TURN), RelativeDirection::Right);
        assert_eq!(RelativeDirection::from_angle(PI + EIGHTH_TURN), RelativeDirection::Back);
        assert_eq!(RelativeDirection::from_angle(-EIGHTH_TURN), RelativeDirection::Left);
    }

    #[test]
    fn test_unwrapped_angles() {
        // Just short of a full turn is geometrically "front" but is not wrapped
        assert_eq!(RelativeDirection::from_angle(TAU - 0.1), RelativeDirection::Left);
        assert_eq!(RelativeDirection::from_angle(TAU + 0.1), RelativeDirection::Left);
        assert_eq!(RelativeDirection::from_angle(-0.1), RelativeDirection::Front);
    }

    #[test]
    fn test_labels() {
        for dir in [
            RelativeDirection::Front,
            RelativeDirection::Right,
            RelativeDirection::Back,
            RelativeDirection::Left,
        ] {
            assert_eq!(dir.to_string().parse::<RelativeDirection>(), Ok(dir));
        }
        assert!("up".parse::<RelativeDirection>().is_err());
    }
}
