//! Strides - Row-Major Offsets for Array Types
//!
//! Strides map a coordinate vector to the linear offset of the element it
//! designates. Layout is always row-major: the last axis is contiguous.
//! Strides are expressed in elements, not bytes.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use smallvec::SmallVec;

use crate::array_type::{ArrayType, AxisLengths};

// =============================================================================
// Type Aliases
// =============================================================================

/// Strides type - step sizes, in elements, for each axis.
pub type Strides = SmallVec<[usize; 6]>;

// =============================================================================
// Stride Utilities
// =============================================================================

/// Computes row-major (C-order) strides for the given axis lengths.
///
/// If any axis has length zero there is no valid offset at all, and every
/// stride is zero.
#[must_use]
pub fn contiguous_strides(axis_lengths: &[usize]) -> Strides {
    let mut strides: Strides = smallvec::smallvec![0; axis_lengths.len()];
    if axis_lengths.contains(&0) {
        return strides;
    }

    let mut stride = 1usize;
    for (axis, &length) in axis_lengths.iter().enumerate().rev() {
        strides[axis] = stride;
        stride *= length;
    }
    strides
}

/// Computes the linear index from per-axis coordinates.
#[must_use]
pub fn linear_index(coordinates: &[usize], strides: &[usize]) -> usize {
    debug_assert_eq!(coordinates.len(), strides.len());

    coordinates
        .iter()
        .zip(strides.iter())
        .map(|(&coordinate, &stride)| coordinate * stride)
        .sum()
}

/// Converts a row-major linear index back to per-axis coordinates.
#[must_use]
pub fn unravel_index(mut linear: usize, axis_lengths: &[usize]) -> AxisLengths {
    let mut coordinates: AxisLengths = smallvec::smallvec![0; axis_lengths.len()];

    for (axis, &length) in axis_lengths.iter().enumerate().rev() {
        if length == 0 {
            break;
        }
        coordinates[axis] = linear % length;
        linear /= length;
    }

    coordinates
}

// =============================================================================
// ArrayType Integration
// =============================================================================

impl ArrayType {
    /// Returns the row-major strides of this array type, one per axis.
    ///
    /// Scalars have no strides; zero-size array types have all strides zero.
    #[must_use]
    pub fn strides(&self) -> Strides {
        contiguous_strides(self.axis_lengths())
    }

    /// Returns the flat (row-major) index of the given coordinates.
    #[must_use]
    pub fn flat_index(&self, coordinates: &[usize]) -> usize {
        linear_index(coordinates, &self.strides())
    }

    /// Returns the coordinates of the given flat (row-major) index.
    #[must_use]
    pub fn unravel(&self, flat_index: usize) -> AxisLengths {
        unravel_index(flat_index, self.axis_lengths())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use atype_core::DType;

    #[test]
    fn test_strides() {
        let at = ArrayType::new(DType::Float32, &[2, 3, 4]);
        assert_eq!(at.strides().as_slice(), &[12, 4, 1]);

        let at = ArrayType::new(DType::Float32, &[5]);
        assert_eq!(at.strides().as_slice(), &[1]);

        let at = ArrayType::new(DType::Float32, &[3, 1, 2]);
        assert_eq!(at.strides().as_slice(), &[2, 2, 1]);
    }

    #[test]
    fn test_strides_degenerate() {
        assert!(ArrayType::scalar_of(DType::Float32).strides().is_empty());

        let at = ArrayType::new(DType::Float32, &[2, 0, 4]);
        assert_eq!(at.strides().as_slice(), &[0, 0, 0]);
    }

    #[test]
    fn test_flat_index_of_matrix() {
        let at = ArrayType::new(DType::Float32, &[2, 3]);
        let flat: Vec<usize> = [[0, 0], [0, 2], [1, 0], [1, 2]]
            .iter()
            .map(|coordinates| at.flat_index(coordinates))
            .collect();
        assert_eq!(flat, vec![0, 2, 3, 5]);

        // Singleton axes contribute nothing to the flat index.
        let at = ArrayType::new(DType::Int8, &[2, 1, 3]);
        assert_eq!(at.flat_index(&[1, 0, 2]), 5);
        assert_eq!(linear_index(&[1, 0, 2], &at.strides()), 5);
    }

    #[test]
    fn test_unravel_skips_over_singleton_axes() {
        let at = ArrayType::new(DType::Uint16, &[3, 1, 4]);
        assert_eq!(at.unravel(0).as_slice(), &[0, 0, 0]);
        assert_eq!(at.unravel(3).as_slice(), &[0, 0, 3]);
        assert_eq!(at.unravel(4).as_slice(), &[1, 0, 0]);
        assert_eq!(at.unravel(11).as_slice(), &[2, 0, 3]);
        assert_eq!(unravel_index(7, at.axis_lengths()), at.unravel(7));
    }

    #[test]
    fn test_flat_index_inverts_unravel() {
        let at = ArrayType::new(DType::Int16, &[3, 1, 5, 2]);
        for flat in 0..at.size() {
            assert_eq!(at.flat_index(&at.unravel(flat)), flat);
        }
    }
}
