//! # Three-Dimensional Vector
//!
//! [`Vector3D`] stores three independent `f64` components with no hidden
//! state. It accepts planar vectors anywhere it accepts 3D ones: a
//! [`Vector2D`] operand simply has nothing to contribute along z.
//!
//! ## Examples
//!
//! ```rust
//! use planevec::{Vector, Vector3D};
//!
//! let mut v = Vector3D::new(3.0, 4.0, 12.0);
//! assert_eq!(v.magnitude(), 13.0);
//!
//! v.set_magnitude(26.0);
//! assert_eq!(v, Vector3D::new(6.0, 8.0, 24.0));
//! assert_eq!(v.to_string(), "6,8,24");
//! ```

use std::fmt;
use std::ops;
use std::str::FromStr;

use nalgebra as na;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Operand3D, Vector, Vector2D};
use crate::errors::{check_arity, parse_components, Result, VectorError};

/// Three-dimensional Euclidean vector
///
/// `Copy` value type; `copy()` and plain assignment both give an independent
/// vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3D {
    /// X-component
    pub x: f64,
    /// Y-component
    pub y: f64,
    /// Z-component
    pub z: f64,
}

impl Vector3D {
    /// The zero vector
    pub const ZERO: Vector3D = Vector3D {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a vector with exactly these components
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3D { x, y, z }
    }

    /// Overwrites all components
    ///
    /// A [`Vector2D`] source sets z to its zero z.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planevec::{Vector2D, Vector3D};
    ///
    /// let mut v = Vector3D::new(2.0, 3.0, 4.0);
    /// v.set((12.0, 34.0, 664.0));
    /// assert_eq!(v, Vector3D::new(12.0, 34.0, 664.0));
    ///
    /// v.set(Vector2D::new(4.0, 9.0));
    /// assert_eq!(v, Vector3D::new(4.0, 9.0, 0.0));
    /// ```
    pub fn set(&mut self, operand: impl Into<Operand3D>) {
        let [x, y, z] = match operand.into() {
            Operand3D::Vector3(v) => v.components(),
            Operand3D::Vector2(v) => v.components(),
            Operand3D::Components(x, y, z) => [x, y, z],
        };
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Adds the operand component-wise
    ///
    /// A [`Vector2D`] operand adds to x and y and leaves z untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planevec::{Vector2D, Vector3D};
    ///
    /// let mut v = Vector3D::new(2.0, 3.0, 4.0);
    /// v.add(Vector2D::new(3.0, 4.0));
    /// assert_eq!(v, Vector3D::new(5.0, 7.0, 4.0));
    /// ```
    pub fn add(&mut self, operand: impl Into<Operand3D>) {
        match operand.into() {
            Operand3D::Vector3(v) => {
                self.x += v.x;
                self.y += v.y;
                self.z += v.z;
            }
            Operand3D::Vector2(v) => {
                self.x += v.x;
                self.y += v.y;
            }
            Operand3D::Components(x, y, z) => {
                self.x += x;
                self.y += y;
                self.z += z;
            }
        }
    }

    /// Subtracts the operand component-wise
    ///
    /// A [`Vector2D`] operand subtracts from x and y and leaves z untouched.
    pub fn subtract(&mut self, operand: impl Into<Operand3D>) {
        match operand.into() {
            Operand3D::Vector3(v) => {
                self.x -= v.x;
                self.y -= v.y;
                self.z -= v.z;
            }
            Operand3D::Vector2(v) => {
                self.x -= v.x;
                self.y -= v.y;
            }
            Operand3D::Components(x, y, z) => {
                self.x -= x;
                self.y -= y;
                self.z -= z;
            }
        }
    }

    /// Returns `[x, y, z]`
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns a new vector with the same components
    pub fn copy(&self) -> Vector3D {
        *self
    }

    /// Returns `a + b` as a new vector; either side may be planar
    pub fn sum<A: Vector, B: Vector>(a: &A, b: &B) -> Vector3D {
        let [x1, y1, z1] = a.components();
        let [x2, y2, z2] = b.components();
        Vector3D::new(x1 + x2, y1 + y2, z1 + z2)
    }

    /// Returns `a - b` as a new vector; either side may be planar
    pub fn difference<A: Vector, B: Vector>(a: &A, b: &B) -> Vector3D {
        let [x1, y1, z1] = a.components();
        let [x2, y2, z2] = b.components();
        Vector3D::new(x1 - x2, y1 - y2, z1 - z2)
    }

    /// Returns the zero vector
    pub fn zero() -> Vector3D {
        Vector3D::ZERO
    }

    /// Returns a normalized copy of `v`
    ///
    /// Unguarded: the zero vector gives NaN components. See [`Vector3D::try_unit`].
    pub fn unit<V: Vector>(v: &V) -> Vector3D {
        let mut unit = v.to_vector3d();
        unit.normalize();
        unit
    }

    /// Returns a normalized copy of `v`, or an error for the zero vector
    pub fn try_unit<V: Vector>(v: &V) -> Result<Vector3D> {
        let mut unit = v.to_vector3d();
        unit.try_normalize()?;
        Ok(unit)
    }

    /// Returns a random unit vector using the thread-local generator
    pub fn random_unit() -> Vector3D {
        Self::random_unit_with_rng(&mut rand::thread_rng())
    }

    /// Returns a random unit vector drawn from `rng`
    ///
    /// Each component is drawn from `[-0.5, 0.5)` and the result normalized.
    /// Directions toward the cube's corners come up more often than a uniform
    /// distribution on the sphere would give.
    pub fn random_unit_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Vector3D {
        let v = Vector3D::new(
            rng.gen::<f64>() - 0.5,
            rng.gen::<f64>() - 0.5,
            rng.gen::<f64>() - 0.5,
        );
        Vector3D::unit(&v)
    }

    /// Returns a random vector with the given magnitude
    pub fn random(magnitude: f64) -> Vector3D {
        Self::random_with_rng(magnitude, &mut rand::thread_rng())
    }

    /// Returns a random vector with the given magnitude drawn from `rng`
    pub fn random_with_rng<R: Rng + ?Sized>(magnitude: f64, rng: &mut R) -> Vector3D {
        let mut v = Self::random_unit_with_rng(rng);
        v.scale(magnitude);
        v
    }

    /// Creates a vector from `[x, y, z]`
    pub fn from_array([x, y, z]: [f64; 3]) -> Vector3D {
        Vector3D::new(x, y, z)
    }

    /// Creates a vector from a slice that must hold exactly three values
    pub fn from_slice(values: &[f64]) -> Result<Vector3D> {
        check_arity(3, values.len())?;
        Ok(Vector3D::new(values[0], values[1], values[2]))
    }

    /// Lifts a planar vector into 3D with `z = 0`
    pub fn from_2d(v: &Vector2D) -> Vector3D {
        Vector3D::new(v.x, v.y, v.z())
    }
}

impl Vector for Vector3D {
    fn components(&self) -> [f64; 3] {
        self.to_array()
    }

    fn map<F: FnMut(f64) -> f64>(&mut self, mut f: F) {
        self.x = f(self.x);
        self.y = f(self.y);
        self.z = f(self.z);
    }
}

/// Writes comma-separated components with no spaces
///
/// Each component uses the standard `f64` formatting: the shortest digits
/// that parse back to the same value, never in exponent form. `3.0` prints
/// as `3`, `-0.0` as `-0`, `1e21` as `1000000000000000000000`, and
/// non-finite values as `NaN`, `inf` and `-inf`.
impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

impl FromStr for Vector3D {
    type Err = VectorError;

    /// Parses the `"x,y,z"` form written by `Display`
    fn from_str(s: &str) -> Result<Self> {
        Vector3D::from_slice(&parse_components(s, 3)?)
    }
}

impl TryFrom<&[f64]> for Vector3D {
    type Error = VectorError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Vector3D::from_slice(values)
    }
}

impl From<[f64; 3]> for Vector3D {
    fn from(values: [f64; 3]) -> Self {
        Vector3D::from_array(values)
    }
}

impl From<Vector2D> for Vector3D {
    fn from(v: Vector2D) -> Self {
        Vector3D::from_2d(&v)
    }
}

impl From<na::Vector3<f64>> for Vector3D {
    fn from(v: na::Vector3<f64>) -> Self {
        Vector3D::new(v.x, v.y, v.z)
    }
}

impl From<Vector3D> for na::Vector3<f64> {
    fn from(v: Vector3D) -> Self {
        na::Vector3::new(v.x, v.y, v.z)
    }
}

// Arithmetic operators return new vectors
impl ops::Add for Vector3D {
    type Output = Vector3D;

    fn add(self, other: Vector3D) -> Vector3D {
        Vector3D::sum(&self, &other)
    }
}

impl ops::Add<Vector2D> for Vector3D {
    type Output = Vector3D;

    fn add(self, other: Vector2D) -> Vector3D {
        Vector3D::sum(&self, &other)
    }
}

impl ops::Sub for Vector3D {
    type Output = Vector3D;

    fn sub(self, other: Vector3D) -> Vector3D {
        Vector3D::difference(&self, &other)
    }
}

impl ops::Sub<Vector2D> for Vector3D {
    type Output = Vector3D;

    fn sub(self, other: Vector2D) -> Vector3D {
        Vector3D::difference(&self, &other)
    }
}

impl ops::Mul<f64> for Vector3D {
    type Output = Vector3D;

    fn mul(mut self, scalar: f64) -> Vector3D {
        self.scale(scalar);
        self
    }
}

impl ops::Div<f64> for Vector3D {
    type Output = Vector3D;

    fn div(self, scalar: f64) -> Vector3D {
        Vector3D::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl ops::Neg for Vector3D {
    type Output = Vector3D;

    fn neg(self) -> Vector3D {
        Vector3D::new(-self.x, -self.y, -self.z)
    }
}

impl ops::AddAssign for Vector3D {
    fn add_assign(&mut self, other: Vector3D) {
        Vector3D::add(self, other);
    }
}

impl ops::SubAssign for Vector3D {
    fn sub_assign(&mut self, other: Vector3D) {
        self.subtract(other);
    }
}
