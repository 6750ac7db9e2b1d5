//! Checks - Structural Validation of Array Types
//!
//! Every structural property comes in two forms:
//! - `check_*` returns a descriptive `Error` naming the expected value, the
//!   actual value and the array type involved.
//! - `assert_*` panics with the same message, for call sites where a mismatch
//!   is a programming error.
//!
//! Both forms exist as `ArrayType` methods and as free functions over any
//! value implementing [`HasArrayType`], so containers that carry an array
//! type are validated the same way.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use std::sync::Arc;

use atype_core::error::{Error, Result};
use atype_core::DType;

use crate::array_type::ArrayType;

// =============================================================================
// Constants
// =============================================================================

/// Wildcard axis length: matches an axis of any length.
pub const UNCHECKED_AXIS: i64 = -1;

// =============================================================================
// HasArrayType
// =============================================================================

/// Implemented by anything that carries an array type.
///
/// This is the accessor higher-level values (arrays on a device, function
/// parameters, ...) implement to share the check and assert functions below.
pub trait HasArrayType {
    /// Returns the array type of the value.
    fn array_type(&self) -> &ArrayType;
}

impl HasArrayType for ArrayType {
    fn array_type(&self) -> &ArrayType {
        self
    }
}

impl<T: HasArrayType + ?Sized> HasArrayType for &T {
    fn array_type(&self) -> &ArrayType {
        (**self).array_type()
    }
}

impl<T: HasArrayType + ?Sized> HasArrayType for Box<T> {
    fn array_type(&self) -> &ArrayType {
        (**self).array_type()
    }
}

impl<T: HasArrayType + ?Sized> HasArrayType for Arc<T> {
    fn array_type(&self) -> &ArrayType {
        (**self).array_type()
    }
}

// =============================================================================
// Checks
// =============================================================================

impl ArrayType {
    /// Checks the number of axes.
    pub fn check_num_axes(&self, num_axes: usize) -> Result<()> {
        if self.rank() != num_axes {
            return Err(Error::AxisCountMismatch {
                array_type: self.to_string(),
                expected: num_axes,
                actual: self.rank(),
            });
        }
        Ok(())
    }

    /// Checks the axis lengths.
    ///
    /// `wanted` must have one entry per axis; an entry of [`UNCHECKED_AXIS`]
    /// (or any other negative value) accepts any length for that axis.
    ///
    /// # Example
    /// ```rust
    /// use atype::{ArrayType, DType, UNCHECKED_AXIS};
    ///
    /// let at = ArrayType::new(DType::Float32, &[2, 3]);
    /// assert!(at.check_axis_lengths(&[2, UNCHECKED_AXIS]).is_ok());
    /// assert!(at.check_axis_lengths(&[2, 4]).is_err());
    /// assert!(at.check_axis_lengths(&[2]).is_err());
    /// ```
    pub fn check_axis_lengths(&self, wanted: &[i64]) -> Result<()> {
        self.check_num_axes(wanted.len())?;
        for (axis, (&expected, &actual)) in wanted.iter().zip(self.axis_lengths()).enumerate() {
            if expected < 0 {
                continue;
            }
            if expected as u64 != actual as u64 {
                return Err(Error::AxisLengthMismatch {
                    array_type: self.to_string(),
                    axis,
                    expected,
                    actual,
                    wanted: wanted.to_vec(),
                });
            }
        }
        Ok(())
    }

    /// Checks the element kind.
    pub fn check_dtype(&self, dtype: DType) -> Result<()> {
        if self.dtype() != dtype {
            return Err(Error::DTypeMismatch {
                array_type: self.to_string(),
                expected: dtype,
                actual: self.dtype(),
            });
        }
        Ok(())
    }

    /// Checks both the element kind and the axis lengths.
    pub fn check(&self, dtype: DType, wanted: &[i64]) -> Result<()> {
        self.check_dtype(dtype)?;
        self.check_axis_lengths(wanted)
    }

    /// Checks that this is a scalar (a valid array type with no axes).
    pub fn check_scalar(&self) -> Result<()> {
        if !self.is_scalar() {
            return Err(Error::NotScalar {
                array_type: self.to_string(),
            });
        }
        Ok(())
    }

    // =========================================================================
    // Asserts
    // =========================================================================

    /// Like [`ArrayType::check_num_axes`], but panics on mismatch.
    #[track_caller]
    pub fn assert_num_axes(&self, num_axes: usize) {
        assert_ok("assert_num_axes", self.check_num_axes(num_axes));
    }

    /// Like [`ArrayType::check_axis_lengths`], but panics on mismatch.
    #[track_caller]
    pub fn assert_axis_lengths(&self, wanted: &[i64]) {
        assert_ok("assert_axis_lengths", self.check_axis_lengths(wanted));
    }

    /// Like [`ArrayType::check_dtype`], but panics on mismatch.
    #[track_caller]
    pub fn assert_dtype(&self, dtype: DType) {
        assert_ok("assert_dtype", self.check_dtype(dtype));
    }

    /// Like [`ArrayType::check`], but panics on mismatch.
    #[track_caller]
    pub fn assert(&self, dtype: DType, wanted: &[i64]) {
        assert_ok("assert", self.check(dtype, wanted));
    }

    /// Like [`ArrayType::check_scalar`], but panics if not a scalar.
    #[track_caller]
    pub fn assert_scalar(&self) {
        assert_ok("assert_scalar", self.check_scalar());
    }
}

#[track_caller]
fn assert_ok(operation: &str, result: Result<()>) {
    if let Err(err) = result {
        tracing::debug!(operation, error = %err, "array type assertion failed");
        panic!("ArrayType::{operation}: {err}");
    }
}

// =============================================================================
// Free Functions
// =============================================================================

/// Checks the number of axes of any value carrying an array type.
pub fn check_num_axes<T: HasArrayType + ?Sized>(value: &T, num_axes: usize) -> Result<()> {
    value.array_type().check_num_axes(num_axes)
}

/// Checks the axis lengths of any value carrying an array type.
pub fn check_axis_lengths<T: HasArrayType + ?Sized>(value: &T, wanted: &[i64]) -> Result<()> {
    value.array_type().check_axis_lengths(wanted)
}

/// Checks the element kind of any value carrying an array type.
pub fn check_dtype<T: HasArrayType + ?Sized>(value: &T, dtype: DType) -> Result<()> {
    value.array_type().check_dtype(dtype)
}

/// Checks element kind and axis lengths of any value carrying an array type.
pub fn check<T: HasArrayType + ?Sized>(value: &T, dtype: DType, wanted: &[i64]) -> Result<()> {
    value.array_type().check(dtype, wanted)
}

/// Checks that any value carrying an array type is a scalar.
pub fn check_scalar<T: HasArrayType + ?Sized>(value: &T) -> Result<()> {
    value.array_type().check_scalar()
}

/// Panics if the number of axes differs.
#[track_caller]
pub fn assert_num_axes<T: HasArrayType + ?Sized>(value: &T, num_axes: usize) {
    assert_ok("assert_num_axes", check_num_axes(value, num_axes));
}

/// Panics if the axis lengths differ.
#[track_caller]
pub fn assert_axis_lengths<T: HasArrayType + ?Sized>(value: &T, wanted: &[i64]) {
    assert_ok("assert_axis_lengths", check_axis_lengths(value, wanted));
}

/// Panics if the element kind differs.
#[track_caller]
pub fn assert_dtype<T: HasArrayType + ?Sized>(value: &T, dtype: DType) {
    assert_ok("assert_dtype", check_dtype(value, dtype));
}

/// Panics if the element kind or the axis lengths differ.
#[track_caller]
pub fn assert<T: HasArrayType + ?Sized>(value: &T, dtype: DType, wanted: &[i64]) {
    assert_ok("assert", check(value, dtype, wanted));
}

/// Panics if the value is not a scalar.
#[track_caller]
pub fn assert_scalar<T: HasArrayType + ?Sized>(value: &T) {
    assert_ok("assert_scalar", check_scalar(value));
}

// =============================================================================
// Tests
// =============================================================================
