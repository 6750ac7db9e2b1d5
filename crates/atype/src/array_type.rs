//! Array Type - Element Kind and Axis Lengths
//!
//! `ArrayType` describes the type of an array without holding any data: the
//! element kind of its unit element and the length of each of its axes.
//!
//! Example: the nested value `[[0, 1, 2], [3, 4, 5]]` of `i32` has array type
//! `(Int32)[2 3]`. It has 2 axes; axis 0 has length 2 and axis 1 has length 3.
//!
//! # Key Features
//! - Validating constructor, invalid sentinel and scalar shortcuts
//! - Size, zero-size and memory footprint queries
//! - Negative axis indexing, counting from the last axis
//! - Full and axes-only equality, axis concatenation
//!
//! An `ArrayType` is immutable once built: its fields are private and every
//! transformation returns a new value.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use core::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use atype_core::error::{Error, Result};
use atype_core::{DType, Element};

// =============================================================================
// Type Aliases
// =============================================================================

/// Axis lengths of an array type.
/// Uses `SmallVec` for stack allocation of up to 6 axes.
pub type AxisLengths = SmallVec<[usize; 6]>;

// =============================================================================
// ArrayType
// =============================================================================

/// Element kind plus ordered axis lengths of an array.
///
/// `ArrayType::default()` is the invalid sentinel.
///
/// Every `ArrayType` has an element count, and a storage size in bits for any
/// element kind, that fit in `usize`. Constructors and deserialization reject
/// axis lengths that break this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawArrayType")]
pub struct ArrayType {
    dtype: DType,
    axis_lengths: AxisLengths,
}

/// Unvalidated wire form of [`ArrayType`].
#[derive(Deserialize)]
struct RawArrayType {
    dtype: DType,
    axis_lengths: AxisLengths,
}

impl TryFrom<RawArrayType> for ArrayType {
    type Error = Error;

    fn try_from(raw: RawArrayType) -> Result<Self> {
        Self::from_lengths(raw.dtype, raw.axis_lengths)
    }
}

impl ArrayType {
    /// Creates an array type, rejecting negative axis lengths.
    ///
    /// # Arguments
    /// * `dtype` - Element kind
    /// * `axis_lengths` - Length of each axis; zero is allowed
    ///
    /// # Returns
    /// The new array type, or `Error::NegativeAxisLength`.
    pub fn make(dtype: DType, axis_lengths: &[i64]) -> Result<Self> {
        let mut lengths = AxisLengths::with_capacity(axis_lengths.len());
        for (axis, &length) in axis_lengths.iter().enumerate() {
            if length < 0 {
                return Err(Error::NegativeAxisLength {
                    dtype,
                    axis,
                    length,
                });
            }
            let length = usize::try_from(length).map_err(|_| Error::AxisLengthsOverflow {
                dtype,
                axis_lengths: axis_lengths.iter().map(|&l| l as u64).collect(),
            })?;
            lengths.push(length);
        }
        Self::from_lengths(dtype, lengths)
    }

    /// Creates an array type from lengths that cannot be negative.
    ///
    /// Returns `Error::AxisLengthsOverflow` if the element count overflows.
    pub fn try_new(dtype: DType, axis_lengths: &[usize]) -> Result<Self> {
        Self::from_lengths(dtype, AxisLengths::from_slice(axis_lengths))
    }

    /// Creates an array type from lengths that cannot be negative.
    ///
    /// # Panics
    /// If the element count overflows, see [`ArrayType::try_new`].
    #[must_use]
    pub fn new(dtype: DType, axis_lengths: &[usize]) -> Self {
        match Self::try_new(dtype, axis_lengths) {
            Ok(array_type) => array_type,
            Err(err) => panic!("ArrayType::new: {err}"),
        }
    }

    fn from_lengths(dtype: DType, axis_lengths: AxisLengths) -> Result<Self> {
        if checked_size(&axis_lengths).is_none() {
            return Err(Error::AxisLengthsOverflow {
                dtype,
                axis_lengths: axis_lengths.iter().map(|&l| l as u64).collect(),
            });
        }
        Ok(Self {
            dtype,
            axis_lengths,
        })
    }

    /// Returns the invalid sentinel: `DType::Invalid` and no axes.
    #[must_use]
    pub fn invalid() -> Self {
        Self::default()
    }

    /// Returns the scalar (zero axes) array type of the given element kind.
    #[must_use]
    pub fn scalar_of(dtype: DType) -> Self {
        Self {
            dtype,
            axis_lengths: AxisLengths::new(),
        }
    }

    /// Returns the scalar array type for the host type `T`.
    #[must_use]
    pub fn scalar<T: Element>() -> Self {
        Self::scalar_of(T::DTYPE)
    }

    /// Returns the element kind.
    #[must_use]
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Returns the axis lengths.
    #[must_use]
    pub fn axis_lengths(&self) -> &[usize] {
        &self.axis_lengths
    }

    /// Returns whether this is a valid array type (element kind is not invalid).
    #[must_use]
    pub fn ok(&self) -> bool {
        self.dtype.is_valid()
    }

    /// Returns the number of axes.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.axis_lengths.len()
    }

    /// Returns whether this is a valid array type with zero axes.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        self.ok() && self.rank() == 0
    }

    /// Returns the number of elements (not bytes): the product of the axis lengths.
    ///
    /// Scalars have size 1.
    #[must_use]
    pub fn size(&self) -> usize {
        self.axis_lengths.iter().product()
    }

    /// Returns whether any axis has length zero.
    ///
    /// Scalars are not zero-size: they have no axes and one element.
    #[must_use]
    pub fn is_zero_size(&self) -> bool {
        self.axis_lengths.contains(&0)
    }

    /// Returns the number of bytes needed to store an array of this type.
    ///
    /// Sub-byte element kinds are packed, see [`DType::storage_bytes`].
    #[must_use]
    pub fn memory_bytes(&self) -> usize {
        self.dtype.storage_bytes(self.size())
    }

    /// Normalizes an axis index, supporting negative indexing.
    ///
    /// # Arguments
    /// * `axis` - Axis index; `-1` refers to the last axis
    ///
    /// # Returns
    /// Normalized positive index, or `Error::InvalidAxis` if out of bounds.
    pub fn normalize_axis(&self, axis: i64) -> Result<usize> {
        let rank = self.rank() as i64;
        let normalized = if axis < 0 { axis + rank } else { axis };
        if normalized < 0 || normalized >= rank {
            return Err(Error::invalid_axis(axis, self.rank(), self));
        }
        Ok(normalized as usize)
    }

    /// Returns the length of the given axis; `-1` refers to the last axis.
    ///
    /// # Panics
    /// If the axis is out of bounds, like out-of-bounds slice indexing.
    #[must_use]
    pub fn axis_length(&self, axis: i64) -> usize {
        match self.normalize_axis(axis) {
            Ok(axis) => self.axis_lengths[axis],
            Err(err) => panic!("ArrayType::axis_length({axis}): {err}"),
        }
    }

    /// Compares element kind and axis lengths. Same as `==`.
    #[must_use]
    pub fn equal(&self, other: &Self) -> bool {
        self == other
    }

    /// Compares axis lengths only; element kinds may differ.
    ///
    /// All scalars are axes-equal to each other.
    #[must_use]
    pub fn equal_axes(&self, other: &Self) -> bool {
        self.axis_lengths == other.axis_lengths
    }

    /// Returns a copy with the element kind replaced.
    #[must_use]
    pub fn with_dtype(&self, dtype: DType) -> Self {
        Self {
            dtype,
            axis_lengths: self.axis_lengths.clone(),
        }
    }

    /// Concatenates the axes of `self` and `other`, see [`concatenate_axes`].
    #[must_use]
    pub fn concatenate_axes(&self, other: &Self) -> Self {
        concatenate_axes(self, other)
    }
}

// =============================================================================
// Axis Concatenation
// =============================================================================

/// Concatenates the axes of two array types.
///
/// Both must be valid and have the same element kind, and the combined
/// element count must not overflow, otherwise the invalid sentinel is
/// returned. If either is a scalar the result is a copy of the
/// other one; otherwise the axes of `a` are followed by the axes of `b`.
#[must_use]
pub fn concatenate_axes(a: &ArrayType, b: &ArrayType) -> ArrayType {
    if !a.ok() || !b.ok() || a.dtype != b.dtype {
        return ArrayType::invalid();
    }
    if a.is_scalar() {
        return b.clone();
    }
    if b.is_scalar() {
        return a.clone();
    }
    let mut axis_lengths = AxisLengths::with_capacity(a.rank() + b.rank());
    axis_lengths.extend_from_slice(&a.axis_lengths);
    axis_lengths.extend_from_slice(&b.axis_lengths);
    ArrayType::from_lengths(a.dtype, axis_lengths).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "axis concatenation overflows");
        ArrayType::invalid()
    })
}

/// Returns the element count, or `None` if it, or its storage in bits for
/// the widest element kind, overflows `usize`.
fn checked_size(axis_lengths: &[usize]) -> Option<usize> {
    let size = axis_lengths
        .iter()
        .try_fold(1usize, |size, &length| size.checked_mul(length))?;
    size.checked_mul(DType::MAX_BITS)?;
    Some(size)
}

// =============================================================================
// Display
// =============================================================================

impl fmt::Display for ArrayType {
    /// Renders `(Float32)` for scalars and `(Float32)[2 3]` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.dtype)?;
        if self.rank() == 0 {
            return Ok(());
        }
        f.write_str("[")?;
        for (i, length) in self.axis_lengths.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{length}")?;
        }
        f.write_str("]")
    }
}

// =============================================================================
// Tests
// =============================================================================
