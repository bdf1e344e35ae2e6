//! # Angle Module
//!
//! Planar vectors describe their direction with an angle measured
//! counter-clockwise from the positive x axis. Everything in the vector API
//! takes and returns radians as plain `f64`; this module adds an `Angle`
//! value for callers that think in degrees.
//!
//! ## Internal Storage
//!
//! An `Angle` keeps the value in the unit it was created with:
//! - Values provided in degrees are stored exactly as degrees
//! - Values provided in radians are stored exactly as radians
//! - Conversion only occurs when `to_degrees()` or `to_radians()` is called
//!
//! ## Examples
//!
//! ```rust
//! use planevec::{Angle, Vector, Vector2D};
//!
//! let heading = Angle::from_degrees(90.0);
//! let v = Vector2D::from_heading(2.0, heading);
//! assert!(v.x.abs() < 1e-15);
//! assert!((v.magnitude() - 2.0).abs() < 1e-15);
//! ```

use std::f64::consts::PI;

/// Internal representation format for angle values
#[derive(Debug, Clone, Copy, PartialEq)]
enum AngleFormat {
    /// Angle stored in degrees
    Degrees(f64),
    /// Angle stored in radians
    Radians(f64),
}

/// An angular measurement that remembers the unit it was given in
///
/// Two angles compare equal only when both the unit and the value match,
/// so `Angle::from_degrees(180.0) != Angle::from_radians(PI)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    angle: AngleFormat,
}

impl Angle {
    /// Creates an angle from a value in degrees
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planevec::Angle;
    ///
    /// let right_angle = Angle::from_degrees(90.0);
    /// assert_eq!(right_angle.to_degrees(), 90.0);
    /// ```
    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            angle: AngleFormat::Degrees(degrees),
        }
    }

    /// Creates an angle from a value in radians
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planevec::Angle;
    ///
    /// let right_angle = Angle::from_radians(std::f64::consts::FRAC_PI_2);
    /// assert_eq!(right_angle.to_radians(), std::f64::consts::FRAC_PI_2);
    /// ```
    pub fn from_radians(radians: f64) -> Self {
        Angle {
            angle: AngleFormat::Radians(radians),
        }
    }

    /// Returns the angle value in degrees
    ///
    /// Exact if the angle was stored in degrees.
    pub fn to_degrees(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg,
            AngleFormat::Radians(rad) => rad * (180.0 / PI),
        }
    }

    /// Returns the angle value in radians
    ///
    /// Exact if the angle was stored in radians.
    pub fn to_radians(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg * (PI / 180.0),
            AngleFormat::Radians(rad) => rad,
        }
    }
}
