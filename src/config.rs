use std::str::FromStr;
use std::sync::OnceLock;

use crate::utils::geometry::RotationMode;

fn parse_or<T: FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_env<T: FromStr>(name: &str, default: T) -> T {
    parse_or(std::env::var(name).ok().as_deref(), default)
}

static ROTATION_MODE: OnceLock<RotationMode> = OnceLock::new();

/// Coordinate update used by `Point::rotate_about_point`, read from
/// `POINT_ROTATION_MODE` on first use.
pub(crate) fn rotation_mode() -> RotationMode {
    *ROTATION_MODE.get_or_init(|| {
        let mode = parse_env("POINT_ROTATION_MODE", RotationMode::Stepwise);
        log::debug!("rotation mode: {mode}");
        mode
    })
}
