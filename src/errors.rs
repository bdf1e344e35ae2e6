//! Error types for vector operations
//!
//! Only two things can go wrong with plain vector arithmetic: combining a 3D
//! vector into a 2D one, and rescaling a vector that has no length. The
//! remaining variants cover building vectors from untrusted slices or text.

use thiserror::Error;

/// Main error type for planevec
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    /// A 3D vector was passed to an in-place operation on a 2D vector
    #[error("cannot {operation} a 3D vector into a 2D vector")]
    DimensionMismatch {
        /// The rejected operation (`set`, `add` or `subtract`)
        operation: &'static str,
    },

    /// The vector has zero magnitude, so it has no direction to keep
    #[error("cannot rescale a zero-magnitude vector")]
    ZeroMagnitude,

    /// Wrong number of components for the target vector type
    #[error("expected {expected} components, found {found}")]
    ArityMismatch {
        /// Components required by the target type
        expected: usize,
        /// Components actually supplied
        found: usize,
    },

    /// A text component could not be parsed as a number
    #[error("component {index} is not a number: {value:?}")]
    InvalidComponent {
        /// Zero-based position of the component
        index: usize,
        /// The offending text
        value: String,
    },
}

/// Extension of the Result type for vector operations
pub type Result<T> = std::result::Result<T, VectorError>;

/// Checks that `found` components match what the target type needs
pub(crate) fn check_arity(expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(VectorError::ArityMismatch { expected, found })
    }
}

/// Parses comma-separated components, the inverse of the `Display` impls
pub(crate) fn parse_components(text: &str, expected: usize) -> Result<Vec<f64>> {
    let values = text
        .split(',')
        .enumerate()
        .map(|(index, part)| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| VectorError::InvalidComponent {
                    index,
                    value: part.to_string(),
                })
        })
        .collect::<Result<Vec<f64>>>()?;
    check_arity(expected, values.len())?;
    Ok(values)
}
