//! # Two-Dimensional Vector
//!
//! [`Vector2D`] is a vector in the xy plane. It stores only `x` and `y`;
//! [`Vector2D::z`] always returns exactly `0.0`, so no operation can leave a
//! planar vector with a z-component.
//!
//! On top of the shared [`Vector`] arithmetic it has a polar view: an angle
//! measured counter-clockwise from the positive x axis in radians, with
//! `angle()` in `[-π, π]`.
//!
//! The in-place `set`, `add` and `subtract` refuse a [`Vector3D`](super::Vector3D) operand
//! with [`VectorError::DimensionMismatch`] rather than dropping its z.
//!
//! ## Examples
//!
//! ```rust
//! use planevec::{Vector, Vector2D};
//! use std::f64::consts::PI;
//!
//! let v = Vector2D::from_polar(10.0, PI / 4.0);
//! assert!((v.magnitude() - 10.0).abs() < 1e-12);
//! assert!((v.angle() - PI / 4.0).abs() < 1e-12);
//! ```

use std::f64::consts::PI;
use std::fmt;
use std::ops;
use std::str::FromStr;

use nalgebra as na;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Angle, Operand2D, Vector};
use crate::errors::{check_arity, parse_components, Result, VectorError};

/// Two-dimensional Euclidean vector with an implicit zero z
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    /// X-component
    pub x: f64,
    /// Y-component
    pub y: f64,
}

impl Vector2D {
    /// The zero vector
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    /// Creates a planar vector with exactly these components
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    /// Always `0.0`
    pub const fn z(&self) -> f64 {
        0.0
    }

    /// Overwrites x and y
    ///
    /// # Errors
    ///
    /// [`VectorError::DimensionMismatch`] for a [`Vector3D`](super::Vector3D) source; the
    /// vector is left unchanged.
    pub fn set(&mut self, operand: impl Into<Operand2D>) -> Result<()> {
        let (x, y) = operand.into().planar("set")?;
        self.x = x;
        self.y = y;
        Ok(())
    }

    /// Adds the operand component-wise
    ///
    /// # Errors
    ///
    /// [`VectorError::DimensionMismatch`] for a [`Vector3D`](super::Vector3D) operand; the
    /// vector is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planevec::{Vector2D, Vector3D, VectorError};
    ///
    /// let mut v = Vector2D::new(2.0, 3.0);
    /// v.add((1.0, 1.0)).unwrap();
    /// assert_eq!(v, Vector2D::new(3.0, 4.0));
    ///
    /// let err = v.add(Vector3D::new(4.0, 9.0, 12.0)).unwrap_err();
    /// assert_eq!(err, VectorError::DimensionMismatch { operation: "add" });
    /// ```
    pub fn add(&mut self, operand: impl Into<Operand2D>) -> Result<()> {
        let (x, y) = operand.into().planar("add")?;
        self.x += x;
        self.y += y;
        Ok(())
    }

    /// Subtracts the operand component-wise
    ///
    /// # Errors
    ///
    /// [`VectorError::DimensionMismatch`] for a [`Vector3D`](super::Vector3D) operand; the
    /// vector is left unchanged.
    pub fn subtract(&mut self, operand: impl Into<Operand2D>) -> Result<()> {
        let (x, y) = operand.into().planar("subtract")?;
        self.x -= x;
        self.y -= y;
        Ok(())
    }

    /// Angle from the positive x axis, `atan2(y, x)`, in `[-π, π]`
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Same as [`Vector2D::angle`] as an [`Angle`]
    pub fn heading(&self) -> Angle {
        Angle::from_radians(self.angle())
    }

    /// Points the vector at `angle` radians keeping its magnitude
    pub fn set_angle(&mut self, angle: f64) {
        let mag = self.magnitude();
        self.x = angle.cos() * mag;
        self.y = angle.sin() * mag;
    }

    /// Rotates counter-clockwise about the z axis by `angle` radians
    pub fn rotate(&mut self, angle: f64) {
        self.set_angle(self.angle() + angle);
    }

    /// Returns `[x, y]`
    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Returns a new vector with the same components
    pub fn copy(&self) -> Vector2D {
        *self
    }

    /// Returns `a + b` as a new vector
    pub fn sum(a: &Vector2D, b: &Vector2D) -> Vector2D {
        Vector2D::new(a.x + b.x, a.y + b.y)
    }

    /// Returns `a - b` as a new vector
    pub fn difference(a: &Vector2D, b: &Vector2D) -> Vector2D {
        Vector2D::new(a.x - b.x, a.y - b.y)
    }

    /// Returns the zero vector
    pub fn zero() -> Vector2D {
        Vector2D::ZERO
    }

    /// Returns a normalized copy of `v`; the zero vector gives NaN components
    pub fn unit(v: &Vector2D) -> Vector2D {
        let mut unit = *v;
        unit.normalize();
        unit
    }

    /// Returns a random unit vector using the thread-local generator
    pub fn random_unit() -> Vector2D {
        Self::random(1.0)
    }

    /// Returns a random unit vector drawn from `rng`
    pub fn random_unit_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Vector2D {
        Self::random_with_rng(1.0, rng)
    }

    /// Returns a random vector with the given magnitude
    pub fn random(magnitude: f64) -> Vector2D {
        Self::random_with_rng(magnitude, &mut rand::thread_rng())
    }

    /// Returns a random vector with the given magnitude drawn from `rng`
    ///
    /// The angle is uniform in `[0, 2π)`, so directions are uniform on the
    /// circle.
    pub fn random_with_rng<R: Rng + ?Sized>(magnitude: f64, rng: &mut R) -> Vector2D {
        Self::from_polar(magnitude, rng.gen_range(0.0..2.0 * PI))
    }

    /// Creates a vector from `[x, y]`
    pub fn from_array([x, y]: [f64; 2]) -> Vector2D {
        Vector2D::new(x, y)
    }

    /// Creates a vector from a slice that must hold exactly two values
    pub fn from_slice(values: &[f64]) -> Result<Vector2D> {
        check_arity(2, values.len())?;
        Ok(Vector2D::new(values[0], values[1]))
    }

    /// Creates a vector from polar form (magnitude, angle in radians)
    pub fn from_polar(magnitude: f64, angle: f64) -> Vector2D {
        Vector2D::new(magnitude * angle.cos(), magnitude * angle.sin())
    }

    /// Creates a vector from a magnitude and an [`Angle`] in either unit
    pub fn from_heading(magnitude: f64, heading: Angle) -> Vector2D {
        Self::from_polar(magnitude, heading.to_radians())
    }

    /// Unit vector at `angle` radians
    pub fn from_angle(angle: f64) -> Vector2D {
        Self::from_polar(1.0, angle)
    }
}

impl Vector for Vector2D {
    fn components(&self) -> [f64; 3] {
        [self.x, self.y, self.z()]
    }

    fn map<F: FnMut(f64) -> f64>(&mut self, mut f: F) {
        self.x = f(self.x);
        self.y = f(self.y);
    }
}

/// Writes comma-separated components with no spaces
///
/// Each component uses the standard `f64` formatting: the shortest digits
/// that parse back to the same value, never in exponent form. `3.0` prints
/// as `3`, `-0.0` as `-0`, `1e21` as `1000000000000000000000`, and
/// non-finite values as `NaN`, `inf` and `-inf`.
impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Vector2D {
    type Err = VectorError;

    /// Parses the `"x,y"` form written by `Display`
    fn from_str(s: &str) -> Result<Self> {
        Vector2D::from_slice(&parse_components(s, 2)?)
    }
}

impl TryFrom<&[f64]> for Vector2D {
    type Error = VectorError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Vector2D::from_slice(values)
    }
}

impl From<[f64; 2]> for Vector2D {
    fn from(values: [f64; 2]) -> Self {
        Vector2D::from_array(values)
    }
}

impl From<na::Vector2<f64>> for Vector2D {
    fn from(v: na::Vector2<f64>) -> Self {
        Vector2D::new(v.x, v.y)
    }
}

impl From<Vector2D> for na::Vector2<f64> {
    fn from(v: Vector2D) -> Self {
        na::Vector2::new(v.x, v.y)
    }
}

impl ops::Add for Vector2D {
    type Output = Vector2D;

    fn add(self, other: Vector2D) -> Vector2D {
        Vector2D::sum(&self, &other)
    }
}

impl ops::Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, other: Vector2D) -> Vector2D {
        Vector2D::difference(&self, &other)
    }
}

impl ops::Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(mut self, scalar: f64) -> Vector2D {
        self.scale(scalar);
        self
    }
}

impl ops::Div<f64> for Vector2D {
    type Output = Vector2D;

    fn div(self, scalar: f64) -> Vector2D {
        Vector2D::new(self.x / scalar, self.y / scalar)
    }
}

impl ops::Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

impl ops::AddAssign for Vector2D {
    fn add_assign(&mut self, other: Vector2D) {
        *self = Vector2D::sum(self, &other);
    }
}

impl ops::SubAssign for Vector2D {
    fn sub_assign(&mut self, other: Vector2D) {
        *self = Vector2D::difference(self, &other);
    }
}
