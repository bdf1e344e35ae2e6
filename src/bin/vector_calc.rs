//! Vector calculator
//!
//! Evaluates a single vector operation on vectors written in the same
//! `"x,y"` / `"x,y,z"` form the library prints, and prints the result.
//!
//! Usage:
//!   cargo run --bin vector_calc -- magnitude 3,4,12
//!   cargo run --bin vector_calc -- add 2,3 1,1
//!   cargo run --bin vector_calc -- --json rotate 0,1 180 --degrees
//!   cargo run --bin vector_calc -- heading -1,1 --degrees
//!
//! Vectors and angles may start with `-` (`magnitude -3,4,12`).

use std::str::FromStr;

use clap::{ArgAction, Parser, Subcommand};
use planevec::{Angle, Vector, Vector2D, Vector3D, VectorError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

/// Type alias for the error type used throughout this binary
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Vector calculator
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Evaluates 2D/3D vector operations on comma-separated components",
    long_about = None
)]
struct Args {
    /// Print the result as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Euclidean length of a vector
    Magnitude {
        #[arg(allow_hyphen_values = true)]
        vector: VectorArg,
    },
    /// Unit vector in the same direction
    Normalize {
        #[arg(allow_hyphen_values = true)]
        vector: VectorArg,
    },
    /// Dot product of two vectors
    Dot {
        #[arg(allow_hyphen_values = true)]
        a: VectorArg,
        #[arg(allow_hyphen_values = true)]
        b: VectorArg,
    },
    /// Cross product of two vectors
    Cross {
        #[arg(allow_hyphen_values = true)]
        a: VectorArg,
        #[arg(allow_hyphen_values = true)]
        b: VectorArg,
    },
    /// Adds `b` into `a`
    Add {
        #[arg(allow_hyphen_values = true)]
        a: VectorArg,
        #[arg(allow_hyphen_values = true)]
        b: VectorArg,
    },
    /// Subtracts `b` from `a`
    Subtract {
        #[arg(allow_hyphen_values = true)]
        a: VectorArg,
        #[arg(allow_hyphen_values = true)]
        b: VectorArg,
    },
    /// Rotates a 2D vector counter-clockwise
    Rotate {
        #[arg(allow_hyphen_values = true)]
        vector: VectorArg,
        #[arg(allow_hyphen_values = true)]
        angle: f64,
        /// Interpret the angle in degrees instead of radians
        #[arg(long, action = ArgAction::SetTrue)]
        degrees: bool,
    },
    /// Direction of a 2D vector from the positive x axis, in (-π, π]
    Heading {
        #[arg(allow_hyphen_values = true)]
        vector: VectorArg,
        /// Report the heading in degrees instead of radians
        #[arg(long, action = ArgAction::SetTrue)]
        degrees: bool,
    },
    /// Random vector of the given magnitude
    Random {
        /// Generate a 2D vector
        #[arg(long, action = ArgAction::SetTrue)]
        planar: bool,
        #[arg(long, default_value_t = 1.0)]
        magnitude: f64,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// A vector given on the command line; the component count picks the type
#[derive(Debug, Clone, Copy)]
enum VectorArg {
    Planar(Vector2D),
    Spatial(Vector3D),
}

impl FromStr for VectorArg {
    type Err = VectorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.split(',').count() {
            2 => Ok(VectorArg::Planar(s.parse()?)),
            _ => Ok(VectorArg::Spatial(s.parse()?)),
        }
    }
}

/// Result of one operation
#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
enum Output {
    Scalar(f64),
    Planar(Vector2D),
    Spatial(Vector3D),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Scalar(value) => write!(f, "{}", value),
            Output::Planar(v) => write!(f, "{}", v),
            Output::Spatial(v) => write!(f, "{}", v),
        }
    }
}

/// Applies a binary in-place operation, keeping `a`'s dimensionality
fn combine(a: VectorArg, b: VectorArg, subtract: bool) -> Result<Output> {
    match a {
        VectorArg::Planar(mut lhs) => {
            let rhs = match b {
                VectorArg::Planar(v) => planevec::Operand2D::from(v),
                VectorArg::Spatial(v) => planevec::Operand2D::from(v),
            };
            if subtract {
                lhs.subtract(rhs)?;
            } else {
                lhs.add(rhs)?;
            }
            Ok(Output::Planar(lhs))
        }
        VectorArg::Spatial(mut lhs) => {
            let rhs = match b {
                VectorArg::Planar(v) => planevec::Operand3D::from(v),
                VectorArg::Spatial(v) => planevec::Operand3D::from(v),
            };
            if subtract {
                lhs.subtract(rhs);
            } else {
                lhs.add(rhs);
            }
            Ok(Output::Spatial(lhs))
        }
    }
}

fn evaluate(command: Command) -> Result<Output> {
    let output = match command {
        Command::Magnitude { vector } => Output::Scalar(match vector {
            VectorArg::Planar(v) => v.magnitude(),
            VectorArg::Spatial(v) => v.magnitude(),
        }),
        Command::Normalize { vector } => match vector {
            VectorArg::Planar(mut v) => {
                v.try_normalize()?;
                Output::Planar(v)
            }
            VectorArg::Spatial(mut v) => {
                v.try_normalize()?;
                Output::Spatial(v)
            }
        },
        Command::Dot { a, b } => {
            let lhs = to_3d(a);
            Output::Scalar(match b {
                VectorArg::Planar(v) => lhs.dot(&v),
                VectorArg::Spatial(v) => lhs.dot(&v),
            })
        }
        Command::Cross { a, b } => Output::Spatial(to_3d(a).cross(&to_3d(b))),
        Command::Add { a, b } => combine(a, b, false)?,
        Command::Subtract { a, b } => combine(a, b, true)?,
        Command::Rotate {
            vector,
            angle,
            degrees,
        } => {
            let VectorArg::Planar(mut v) = vector else {
                return Err("rotate needs a 2D vector".into());
            };
            let angle = if degrees {
                Angle::from_degrees(angle)
            } else {
                Angle::from_radians(angle)
            };
            v.rotate(angle.to_radians());
            Output::Planar(v)
        }
        Command::Heading { vector, degrees } => {
            let VectorArg::Planar(v) = vector else {
                return Err("heading needs a 2D vector".into());
            };
            let heading = v.heading();
            Output::Scalar(if degrees {
                heading.to_degrees()
            } else {
                heading.to_radians()
            })
        }
        Command::Random {
            planar,
            magnitude,
            seed,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            if planar {
                Output::Planar(Vector2D::random_with_rng(magnitude, &mut rng))
            } else {
                Output::Spatial(Vector3D::random_with_rng(magnitude, &mut rng))
            }
        }
    };
    Ok(output)
}

fn to_3d(arg: VectorArg) -> Vector3D {
    match arg {
        VectorArg::Planar(v) => v.into(),
        VectorArg::Spatial(v) => v,
    }
}

fn run(args: Args) -> Result<()> {
    let output = evaluate(args.command)?;

    if args.json {
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn main() {
    if let Err(e) = run(Args::parse()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
