//! Right-hand inputs for the in-place `set`/`add`/`subtract` operations
//!
//! Each vector type accepts a closed set of operand shapes: another vector of
//! either dimension or raw components. Callers rarely name these enums; the
//! `From` impls let `v.add(other)` and `v.add((1.0, 2.0, 3.0))` both work.

use super::{Vector2D, Vector3D};
use crate::errors::{Result, VectorError};
use log::debug;

/// Operand accepted by [`Vector3D::set`], [`Vector3D::add`] and
/// [`Vector3D::subtract`]
///
/// Every variant is accepted. A `Vector2` operand has no z to contribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand3D {
    Vector3(Vector3D),
    Vector2(Vector2D),
    Components(f64, f64, f64),
}

/// Operand accepted by [`Vector2D::set`], [`Vector2D::add`] and
/// [`Vector2D::subtract`]
///
/// `Vector3` is part of the set so it can be rejected with a
/// [`VectorError::DimensionMismatch`] instead of being silently truncated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand2D {
    Vector2(Vector2D),
    Vector3(Vector3D),
    Components(f64, f64),
}

impl Operand2D {
    /// Returns the `(x, y)` pair to apply, or rejects a 3D operand
    pub(crate) fn planar(self, operation: &'static str) -> Result<(f64, f64)> {
        match self {
            Operand2D::Vector2(v) => Ok((v.x, v.y)),
            Operand2D::Components(x, y) => Ok((x, y)),
            Operand2D::Vector3(v) => {
                debug!("refusing to {} 3D vector {} into a 2D vector", operation, v);
                Err(VectorError::DimensionMismatch { operation })
            }
        }
    }
}

impl From<Vector3D> for Operand3D {
    fn from(v: Vector3D) -> Self {
        Operand3D::Vector3(v)
    }
}

impl From<&Vector3D> for Operand3D {
    fn from(v: &Vector3D) -> Self {
        Operand3D::Vector3(*v)
    }
}

impl From<Vector2D> for Operand3D {
    fn from(v: Vector2D) -> Self {
        Operand3D::Vector2(v)
    }
}

impl From<&Vector2D> for Operand3D {
    fn from(v: &Vector2D) -> Self {
        Operand3D::Vector2(*v)
    }
}

impl From<(f64, f64, f64)> for Operand3D {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Operand3D::Components(x, y, z)
    }
}

impl From<[f64; 3]> for Operand3D {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Operand3D::Components(x, y, z)
    }
}

impl From<Vector2D> for Operand2D {
    fn from(v: Vector2D) -> Self {
        Operand2D::Vector2(v)
    }
}

impl From<&Vector2D> for Operand2D {
    fn from(v: &Vector2D) -> Self {
        Operand2D::Vector2(*v)
    }
}

impl From<Vector3D> for Operand2D {
    fn from(v: Vector3D) -> Self {
        Operand2D::Vector3(v)
    }
}

impl From<&Vector3D> for Operand2D {
    fn from(v: &Vector3D) -> Self {
        Operand2D::Vector3(*v)
    }
}

impl From<(f64, f64)> for Operand2D {
    fn from((x, y): (f64, f64)) -> Self {
        Operand2D::Components(x, y)
    }
}

impl From<[f64; 2]> for Operand2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Operand2D::Components(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand3d_conversions() {
        let v = Vector3D::new(1.0, 2.0, 3.0);
        assert_eq!(Operand3D::from(v), Operand3D::Vector3(v));
        assert_eq!(Operand3D::from(&v), Operand3D::Vector3(v));
        assert_eq!(
            Operand3D::from((1.0, 2.0, 3.0)),
            Operand3D::Components(1.0, 2.0, 3.0)
        );
        assert_eq!(
            Operand3D::from([1.0, 2.0, 3.0]),
            Operand3D::Components(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn test_planar_accepts_2d_and_pairs() {
        let p = Vector2D::new(4.0, 9.0);
        assert_eq!(Operand2D::from(p).planar("set"), Ok((4.0, 9.0)));
        assert_eq!(Operand2D::from((1.0, -1.0)).planar("add"), Ok((1.0, -1.0)));
    }

    #[test]
    fn test_planar_rejects_3d() {
        let operand = Operand2D::from(Vector3D::new(4.0, 9.0, 12.0));
        assert_eq!(
            operand.planar("subtract"),
            Err(VectorError::DimensionMismatch {
                operation: "subtract"
            })
        );
    }
}
