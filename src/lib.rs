//! Planevec: 2D and 3D Euclidean vector arithmetic
//!
//! This crate provides two small `f64` value types, [`Vector3D`] and
//! [`Vector2D`], with component-wise arithmetic, dot and cross products,
//! magnitude and normalization, and a polar view of planar vectors.
//!
//! Shared operations live on the [`Vector`] trait, so bring it into scope:
//!
//! ```rust
//! use planevec::{Vector, Vector2D, Vector3D};
//!
//! let a = Vector3D::new(1.0, 0.0, 0.0);
//! let b = Vector2D::new(0.0, 1.0);
//! assert_eq!(a.cross(&b), Vector3D::new(0.0, 0.0, 1.0));
//! ```
//!
//! Both vector types are `Copy` plain data with no interior mutability.
//! Mutating one instance from several threads needs the caller's own lock.

pub mod errors;
pub mod vector;

// Re-export commonly used types
pub use errors::{Result, VectorError};
pub use vector::{Angle, Operand2D, Operand3D, Vector, Vector2D, Vector3D};
