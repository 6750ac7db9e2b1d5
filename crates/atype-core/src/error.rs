//! Error Types - Array Type Error Handling
//!
//! Provides the error type shared by every crate of the workspace: array type
//! construction, structural checks, shape inference and (de)serialization.
//!
//! Array types embedded in errors are carried in their rendered form, e.g.
//! `(Float32)[2 3]`, so the values stay self-describing when logged.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use thiserror::Error;

use crate::dtype::DType;

// =============================================================================
// Error Types
// =============================================================================

/// The main error type for array type operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An axis length given to a constructor was negative.
    #[error("cannot create array type {dtype} with axis {axis} of length {length} < 0")]
    NegativeAxisLength {
        /// Element kind of the rejected array type.
        dtype: DType,
        /// Position of the offending axis.
        axis: usize,
        /// The negative length.
        length: i64,
    },

    /// The element count, or its storage in bits, does not fit in `usize`.
    #[error("cannot create array type {dtype} with axis lengths {axis_lengths:?}: element count overflows")]
    AxisLengthsOverflow {
        /// Element kind of the rejected array type.
        dtype: DType,
        /// The requested axis lengths.
        axis_lengths: Vec<u64>,
    },

    /// Axis index out of range, after negative-index normalization.
    #[error("axis {axis} out of bounds for {num_axes} axes (array type {array_type})")]
    InvalidAxis {
        /// The axis as given by the caller.
        axis: i64,
        /// Number of axes of the array type.
        num_axes: usize,
        /// Rendered array type.
        array_type: String,
    },

    /// Number of axes differs from the expected one.
    #[error("array type {array_type} has incompatible number of axes {actual} (wanted {expected})")]
    AxisCountMismatch {
        /// Rendered array type.
        array_type: String,
        /// The expected number of axes.
        expected: usize,
        /// The actual number of axes.
        actual: usize,
    },

    /// One axis has a length different from the expected one.
    #[error(
        "array type {array_type} axis {axis} has length {actual}, wanted {expected} (wanted={wanted:?})"
    )]
    AxisLengthMismatch {
        /// Rendered array type.
        array_type: String,
        /// The mismatching axis.
        axis: usize,
        /// The expected length.
        expected: i64,
        /// The actual length.
        actual: usize,
        /// All requested axis lengths, including wildcards.
        wanted: Vec<i64>,
    },

    /// Element kind differs from the expected one.
    #[error("array type {array_type} has incompatible dtype {actual} (wanted {expected})")]
    DTypeMismatch {
        /// Rendered array type.
        array_type: String,
        /// The expected element kind.
        expected: DType,
        /// The actual element kind.
        actual: DType,
    },

    /// A scalar was required.
    #[error("array type {array_type} is not a scalar")]
    NotScalar {
        /// Rendered array type.
        array_type: String,
    },

    /// A host value has no corresponding element kind.
    #[error("cannot convert host type {type_name:?} to a valid array element kind")]
    UnsupportedHostType {
        /// Name of the host representation.
        type_name: String,
    },

    /// An empty sequence was found while inferring an array type.
    #[error(
        "empty sequence at axis {axis} (axis lengths so far {axis_lengths:?}): inner axis lengths cannot be inferred"
    )]
    EmptySequence {
        /// Axis at which the empty sequence was found.
        axis: usize,
        /// Axis lengths inferred up to and including the empty axis.
        axis_lengths: Vec<usize>,
    },

    /// Sibling sub-sequences have different array types.
    #[error("sub-sequences have irregular array types, found {first} and {other}")]
    IrregularShape {
        /// Rendered array type of the first sibling.
        first: String,
        /// Rendered array type of the mismatching sibling.
        other: String,
    },

    /// Unknown element kind name.
    #[error("unknown dtype name {name:?}")]
    UnknownDType {
        /// The name that failed to resolve.
        name: String,
    },

    /// An axis with an unknown length was asked for its length.
    #[error("axis {axis} has an unknown length")]
    UnknownAxisLength {
        /// The axis without a known length.
        axis: usize,
    },

    /// Serializing an array type failed.
    #[error("failed to serialize array type {array_type}: {message}")]
    Encode {
        /// Rendered array type.
        array_type: String,
        /// Description of the underlying failure.
        message: String,
    },

    /// Deserializing an array type failed.
    #[error("failed to deserialize array type: {message}")]
    Decode {
        /// Description of the underlying failure.
        message: String,
    },
}

// =============================================================================
// Result Type
// =============================================================================

/// A specialized Result type for array type operations.
pub type Result<T> = core::result::Result<T, Error>;

// =============================================================================
// Helper Functions
// =============================================================================

impl Error {
    /// Creates a new out-of-range axis error.
    #[must_use]
    pub fn invalid_axis(axis: i64, num_axes: usize, array_type: impl ToString) -> Self {
        Self::InvalidAxis {
            axis,
            num_axes,
            array_type: array_type.to_string(),
        }
    }

    /// Creates a new irregular shape error from two conflicting array types.
    #[must_use]
    pub fn irregular_shape(first: impl ToString, other: impl ToString) -> Self {
        Self::IrregularShape {
            first: first.to_string(),
            other: other.to_string(),
        }
    }

    /// Creates a new decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::AxisCountMismatch {
            array_type: "(Float32)[2 3]".to_string(),
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "array type (Float32)[2 3] has incompatible number of axes 2 (wanted 3)"
        );

        let err = Error::irregular_shape("(Float32)[3]", "(Float32)[2]");
        assert!(err.to_string().contains("(Float32)[3] and (Float32)[2]"));
    }

    #[test]
    fn test_error_equality() {
        let err1 = Error::decode("truncated");
        let err2 = Error::decode("truncated");
        assert_eq!(err1, err2);
        assert_ne!(err1, Error::decode("other"));
    }
}
