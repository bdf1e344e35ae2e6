//! # Vector Module
//!
//! Two value types live here: [`Vector3D`], a plain three-component vector,
//! and [`Vector2D`], a planar vector whose z-component is always exactly zero.
//! They are separate structs rather than one specialising the other. The
//! arithmetic that means the same thing in both spaces (magnitude, scaling,
//! dot and cross products) is written once on the [`Vector`] trait; each type
//! only says how to read its components and how to `map` over the ones it
//! owns.
//!
//! ## In-place vs. pure operations
//!
//! Methods taking `&mut self` (`set`, `add`, `subtract`, `scale`,
//! `normalize`, ...) modify the receiver and return nothing (or a `Result`
//! for the 2D forms that can reject an operand). Associated functions such as
//! [`Vector3D::sum`] and the `std::ops` operators leave their inputs alone and
//! return a new vector.
//!
//! ## Examples
//!
//! ```rust
//! use planevec::{Vector, Vector2D, Vector3D};
//!
//! let mut v = Vector3D::new(1.0, 2.0, 3.0);
//! v.add(Vector2D::new(1.0, 1.0));
//! assert_eq!(v, Vector3D::new(2.0, 3.0, 3.0));
//!
//! let mut p = Vector2D::new(2.0, 3.0);
//! assert!(p.add(Vector3D::new(4.0, 9.0, 12.0)).is_err());
//! ```

pub mod angle;
pub mod operand;
pub mod vector2d;
pub mod vector3d;

pub use angle::Angle;
pub use operand::{Operand2D, Operand3D};
pub use vector2d::Vector2D;
pub use vector3d::Vector3D;

use crate::errors::{Result, VectorError};
use log::warn;
use std::f64::consts::PI;

/// Operations shared by 2D and 3D vectors
///
/// Implementors provide their components as `[x, y, z]` (a planar vector
/// reports `z = 0`) and a `map` that touches only the components they store.
/// Everything else is derived from those two.
pub trait Vector: Copy {
    /// Returns `[x, y, z]`
    fn components(&self) -> [f64; 3];

    /// Applies `f` to each stored component in place
    fn map<F: FnMut(f64) -> f64>(&mut self, f: F);

    /// Returns this vector as a [`Vector3D`]
    fn to_vector3d(&self) -> Vector3D {
        let [x, y, z] = self.components();
        Vector3D::new(x, y, z)
    }

    /// Returns `x² + y² + z²`
    fn magnitude_squared(&self) -> f64 {
        let [x, y, z] = self.components();
        x * x + y * y + z * z
    }

    /// Returns the Euclidean length, `0.0` for the zero vector
    fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Multiplies every component by `scalar`
    fn scale(&mut self, scalar: f64) {
        self.map(|component| component * scalar);
    }

    /// Rescales to `magnitude` keeping the direction
    ///
    /// This is `scale(magnitude / self.magnitude())` with no guard: on a zero
    /// vector the components become NaN. Use [`Vector::try_set_magnitude`]
    /// to get an error instead.
    fn set_magnitude(&mut self, magnitude: f64) {
        let current = self.magnitude();
        if current == 0.0 {
            warn!("rescaling a zero-magnitude vector; components will be non-finite");
        }
        self.scale(magnitude / current);
    }

    /// Rescales to `magnitude`, refusing a zero vector
    ///
    /// The vector is left unchanged on error.
    fn try_set_magnitude(&mut self, magnitude: f64) -> Result<()> {
        if self.magnitude() == 0.0 {
            return Err(VectorError::ZeroMagnitude);
        }
        self.set_magnitude(magnitude);
        Ok(())
    }

    /// Rescales to unit length; unguarded like [`Vector::set_magnitude`]
    fn normalize(&mut self) {
        self.set_magnitude(1.0);
    }

    /// Rescales to unit length, refusing a zero vector
    fn try_normalize(&mut self) -> Result<()> {
        self.try_set_magnitude(1.0)
    }

    /// Dot product; a planar operand contributes `z = 0`
    fn dot<V: Vector>(&self, other: &V) -> f64 {
        let [x1, y1, z1] = self.components();
        let [x2, y2, z2] = other.components();
        x1 * x2 + y1 * y2 + z1 * z2
    }

    /// Cross product
    ///
    /// Always a [`Vector3D`]: crossing two planar vectors gives a vector
    /// along z.
    fn cross<V: Vector>(&self, other: &V) -> Vector3D {
        let [x1, y1, z1] = self.components();
        let [x2, y2, z2] = other.components();
        Vector3D::new(
            y1 * z2 - y2 * z1,
            z1 * x2 - z2 * x1,
            x1 * y2 - x2 * y1,
        )
    }

    /// Angle between the two vectors in radians, in `[0, π]`
    ///
    /// Returns `0.0` if either vector has zero length.
    fn angle_between<V: Vector>(&self, other: &V) -> f64 {
        let mag_product = self.magnitude() * other.magnitude();
        if mag_product == 0.0 {
            return 0.0;
        }

        let cos_angle = self.dot(other) / mag_product;

        // Handle numerical precision issues
        if cos_angle >= 1.0 {
            0.0
        } else if cos_angle <= -1.0 {
            PI
        } else {
            cos_angle.acos()
        }
    }
}
