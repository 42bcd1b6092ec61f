//! Radian helpers shared by the point model
//!
//! All angles are plain `f64` radians. "Normalized" means the half-open
//! interval [0, 2π).

use std::f64::consts::{PI, TAU};

/// Quarter turn (π/2)
pub const QUARTER_TURN: f64 = PI / 2.0;

/// Half of a quarter turn (π/4), the half-width of a direction sector
pub const EIGHTH_TURN: f64 = PI / 4.0;

/// Map any finite angle into [0, 2π)
///
/// Works on the signed fractional part of `radians / 2π`, so negative inputs
/// wrap into the tail of the range (-π/2 becomes 3π/2).
pub fn normalize_radian(radians: f64) -> f64 {
    let turns = radians / TAU;
    let frac = turns - turns.trunc();
    let normalized = if frac < 0.0 { TAU + frac * TAU } else { frac * TAU };
    // A tiny negative fraction can round up to a full turn
    if normalized >= TAU { 0.0 } else { normalized }
}

/// Shortest unsigned difference between two angles, in [0, π]
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let diff = normalize_radian(a - b);
    if diff > PI { TAU - diff } else { diff }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_normalize_in_range() {
        assert!((normalize_radian(1.0) - 1.0).abs() < EPS);
        assert!(normalize_radian(0.0).abs() < EPS);
        assert!((normalize_radian(PI) - PI).abs() < EPS);
    }

    #[test]
    fn test_normalize_full_turns() {
        assert!(normalize_radian(TAU).abs() < EPS);
        assert!(normalize_radian(-TAU).abs() < EPS);
        assert!((normalize_radian(5.0 * TAU + 0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_negative_wraps_to_tail() {
        assert!((normalize_radian(-QUARTER_TURN) - 3.0 * QUARTER_TURN).abs() < EPS);
        assert!((normalize_radian(-PI) - PI).abs() < EPS);
        assert!((normalize_radian(-TAU - 1.0) - (TAU - 1.0)).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_never_returns_full_turn() {
        let r = normalize_radian(-1e-18);
        assert!((0.0..TAU).contains(&r));
    }

    #[test]
    fn test_angular_distance() {
        assert!(angular_distance(0.0, TAU).abs() < EPS);
        assert!((angular_distance(0.1, TAU - 0.1) - 0.2).abs() < EPS);
        assert!((angular_distance(0.0, PI) - PI).abs() < EPS);
        assert!((angular_distance(QUARTER_TURN, 0.0) - QUARTER_TURN).abs() < EPS);
    }
}
