use clap::{Parser, Subcommand};
use facing_point::utils::angle::angular_distance;
use facing_point::error::ensure_finite;
use facing_point::{Point, PointError, RelativeDirection, RotationMode, normalize_radian};
use std::process::ExitCode;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "pointtool", version, about = "facing_point CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize an angle into [0, 2π)
    Normalize {
        #[arg(long, allow_hyphen_values = true)]
        radians: f64,
    },
    /// Distance between two positions
    Distance {
        #[arg(long, allow_hyphen_values = true)]
        from: Coords,
        #[arg(long, allow_hyphen_values = true)]
        to: Coords,
    },
    /// Angle from a facing point to a position
    Angle {
        #[arg(long, allow_hyphen_values = true)]
        from: Coords,
        #[arg(long, allow_hyphen_values = true)]
        to: Coords,
    },
    /// Coarse direction (front/right/back/left) from a facing point to a position
    Direction {
        #[arg(long, allow_hyphen_values = true)]
        from: Coords,
        #[arg(long, allow_hyphen_values = true)]
        to: Coords,
        /// Exit with failure unless the direction matches (front, right, back, left)
        #[arg(long)]
        expect: Option<RelativeDirection>,
    },
    /// Apply a sequence of moves and print the point after each one
    Walk {
        #[arg(long, allow_hyphen_values = true)]
        start: Coords,
        /// advance:D, rotate:R, face:R or orbit:X,Y:ANGLE
        #[arg(long = "step", allow_hyphen_values = true)]
        steps: Vec<Step>,
        /// Overrides POINT_ROTATION_MODE for orbit steps
        #[arg(long)]
        mode: Option<RotationMode>,
    },
}

/// `X,Y` or `X,Y,R` from the command line; a missing direction is zero
#[derive(Clone, Copy, Debug)]
struct Coords {
    x: f64,
    y: f64,
    r: f64,
}

impl Coords {
    fn point(&self) -> Result<Point, PointError> {
        Point::new(self.x, self.y, self.r)
    }
}

impl FromStr for Coords {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let vals = s
            .split(',')
            .map(|tok| {
                tok.trim()
                    .parse::<f64>()
                    .map_err(|e| format!("bad number `{}`: {e}", tok.trim()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        match vals.as_slice() {
            [x, y] => Ok(Coords { x: *x, y: *y, r: 0.0 }),
            [x, y, r] => Ok(Coords { x: *x, y: *y, r: *r }),
            _ => Err(format!("expected X,Y or X,Y,R, got `{s}`")),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Step {
    Advance(f64),
    Rotate(f64),
    Face(f64),
    Orbit { x: f64, y: f64, angle: f64 },
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, arg) = s
            .split_once(':')
            .ok_or_else(|| format!("expected KIND:ARGS, got `{s}`"))?;
        let number = |tok: &str| {
            tok.trim()
                .parse::<f64>()
                .map_err(|e| format!("bad number `{}`: {e}", tok.trim()))
        };
        match kind.trim() {
            "advance" => Ok(Step::Advance(number(arg)?)),
            "rotate" => Ok(Step::Rotate(number(arg)?)),
            "face" => Ok(Step::Face(number(arg)?)),
            "orbit" => {
                let (origin, angle) = arg
                    .split_once(':')
                    .ok_or_else(|| format!("expected orbit:X,Y:ANGLE, got `{s}`"))?;
                let (x, y) = origin
                    .split_once(',')
                    .ok_or_else(|| format!("expected orbit:X,Y:ANGLE, got `{s}`"))?;
                Ok(Step::Orbit {
                    x: number(x)?,
                    y: number(y)?,
                    angle: number(angle)?,
                })
            }
            other => Err(format!("unknown step `{other}`")),
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Normalize { radians } => normalize_cmd(radians).map(|()| ExitCode::SUCCESS),
        Command::Distance { from, to } => distance_cmd(from, to).map(|()| ExitCode::SUCCESS),
        Command::Angle { from, to } => angle_cmd(from, to).map(|()| ExitCode::SUCCESS),
        Command::Direction { from, to, expect } => direction_cmd(from, to, expect),
        Command::Walk { start, steps, mode } => {
            walk_cmd(start, &steps, mode).map(|()| ExitCode::SUCCESS)
        }
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn normalize_cmd(radians: f64) -> Result<(), PointError> {
    let normalized = normalize_radian(ensure_finite("radians", radians)?);
    println!("{normalized:.6} rad ({:.2}°)", normalized.to_degrees());
    Ok(())
}

fn distance_cmd(from: Coords, to: Coords) -> Result<(), PointError> {
    let d = from.point()?.distance_to_point(&to.point()?);
    println!("{d:.6}");
    Ok(())
}

fn angle_cmd(from: Coords, to: Coords) -> Result<(), PointError> {
    let angle = from.point()?.angle_to_point(&to.point()?)?;
    let wrapped = normalize_radian(angle);
    println!("{angle:.6} rad (normalized {wrapped:.6})");
    println!("  off straight ahead by {:.6} rad", angular_distance(angle, 0.0));
    if angle != wrapped {
        println!("  note: raw angle lies outside [0, 2π)");
    }
    Ok(())
}

fn direction_cmd(
    from: Coords,
    to: Coords,
    expect: Option<RelativeDirection>,
) -> Result<ExitCode, PointError> {
    let direction = from.point()?.direction_to_point(&to.point()?)?;
    println!("{direction}");
    match expect {
        Some(expected) if expected != direction => {
            eprintln!("expected {expected}, got {direction}");
            Ok(ExitCode::FAILURE)
        }
        _ => Ok(ExitCode::SUCCESS),
    }
}

fn walk_cmd(start: Coords, steps: &[Step], mode: Option<RotationMode>) -> Result<(), PointError> {
    let mut point = start.point()?;
    println!("start: {point}");
    for (i, step) in steps.iter().enumerate() {
        match *step {
            Step::Advance(d) => point.advance(d)?,
            Step::Rotate(r) => point.rotate(r)?,
            Step::Face(r) => point.set_direction(r)?,
            Step::Orbit { x, y, angle } => {
                let origin = Point::new(x, y, 0.0)?;
                match mode {
                    Some(mode) => point.rotate_about_point_with(&origin, angle, mode)?,
                    None => point.rotate_about_point(&origin, angle)?,
                }
            }
        }
        println!("  step {}: {step:?} -> {point}", i + 1);
    }
    Ok(())
}
