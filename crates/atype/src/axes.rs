//! Axes - Partially Known Axis Lengths
//!
//! `Axes` describes the axes of an array whose lengths may not all be known
//! yet, e.g. a batch axis fixed only at run time. Once every length is known
//! it resolves into an [`ArrayType`].
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use core::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use atype_core::error::{Error, Result};
use atype_core::DType;

use crate::array_type::{ArrayType, AxisLengths};

// =============================================================================
// Axis
// =============================================================================

/// A single axis, with a known or unknown length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Length not known yet.
    #[default]
    Unknown,
    /// Known length.
    Known(usize),
}

impl Axis {
    /// Returns true if the length is known.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Returns the length, or `Error::UnknownAxisLength` for `axis` if unknown.
    pub fn size(&self, axis: usize) -> Result<usize> {
        match self {
            Self::Known(length) => Ok(*length),
            Self::Unknown => Err(Error::UnknownAxisLength { axis }),
        }
    }

    /// Returns true if an axis of the given length is compatible with this one.
    #[must_use]
    pub const fn matches(&self, length: usize) -> bool {
        match self {
            Self::Known(known) => *known == length,
            Self::Unknown => true,
        }
    }
}

impl From<usize> for Axis {
    fn from(length: usize) -> Self {
        Self::Known(length)
    }
}

impl From<Option<usize>> for Axis {
    fn from(length: Option<usize>) -> Self {
        length.map_or(Self::Unknown, Self::Known)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(length) => write!(f, "{length}"),
            Self::Unknown => f.write_str("?"),
        }
    }
}

// =============================================================================
// Axes
// =============================================================================

/// Ordered sequence of axes, some possibly of unknown length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Axes(SmallVec<[Axis; 6]>);

impl Axes {
    /// Creates axes from anything convertible into [`Axis`].
    pub fn new<I>(axes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Axis>,
    {
        Self(axes.into_iter().map(Into::into).collect())
    }

    /// Returns the number of axes.
    #[must_use]
    pub fn num_axes(&self) -> usize {
        self.0.len()
    }

    /// Returns true if every axis length is known.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.0.iter().all(Axis::is_known)
    }

    /// Returns the axes as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Axis] {
        &self.0
    }

    /// Returns the given axis, or `None` if out of range.
    #[must_use]
    pub fn get(&self, axis: usize) -> Option<Axis> {
        self.0.get(axis).copied()
    }

    /// Sets the length of one axis, e.g. once it becomes known.
    ///
    /// # Panics
    /// If `axis >= num_axes()`.
    pub fn set(&mut self, axis: usize, value: impl Into<Axis>) {
        self.0[axis] = value.into();
    }

    /// Resolves into an array type, failing on the first unknown axis or if
    /// the element count overflows.
    pub fn resolve(&self, dtype: DType) -> Result<ArrayType> {
        let axis_lengths = self
            .0
            .iter()
            .enumerate()
            .map(|(axis, a)| a.size(axis))
            .collect::<Result<AxisLengths>>()?;
        ArrayType::try_new(dtype, &axis_lengths)
    }
}

impl From<&ArrayType> for Axes {
    fn from(array_type: &ArrayType) -> Self {
        Self::new(array_type.axis_lengths().iter().copied())
    }
}

impl fmt::Display for Axes {
    /// Renders `[2 ? 4]`, with `?` for unknown lengths.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, axis) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{axis}")?;
        }
        f.write_str("]")
    }
}

impl ArrayType {
    /// Returns true if this array type has as many axes as `axes`, and each
    /// known axis has the same length. Unknown axes match any length.
    #[must_use]
    pub fn matches_axes(&self, axes: &Axes) -> bool {
        self.rank() == axes.num_axes()
            && axes
                .as_slice()
                .iter()
                .zip(self.axis_lengths())
                .all(|(axis, &length)| axis.matches(length))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis() {
        assert_eq!(Axis::from(3_usize).size(0), Ok(3));
        assert!(Axis::from(3_usize).is_known());
        assert_eq!(
            Axis::Unknown.size(2),
            Err(Error::UnknownAxisLength { axis: 2 })
        );
        assert_eq!(Axis::from(None), Axis::Unknown);
        assert_eq!(Axis::default(), Axis::Unknown);
    }

    #[test]
    fn test_axes_known() {
        let mut axes = Axes::new([Some(2_usize), None, Some(4)]);
        assert_eq!(axes.num_axes(), 3);
        assert!(!axes.is_known());
        assert_eq!(axes.to_string(), "[2 ? 4]");
        assert_eq!(
            axes.resolve(DType::Float32),
            Err(Error::UnknownAxisLength { axis: 1 })
        );

        axes.set(1, 3_usize);
        assert!(axes.is_known());
        assert_eq!(
            axes.resolve(DType::Float32).unwrap(),
            ArrayType::new(DType::Float32, &[2, 3, 4])
        );
        assert!(Axes::default().is_known());
    }

    #[test]
    fn test_matches_axes() {
        let at = ArrayType::new(DType::Int32, &[8, 3]);
        assert!(at.matches_axes(&Axes::from(&at)));
        assert!(at.matches_axes(&Axes::new([None, Some(3_usize)])));
        assert!(!at.matches_axes(&Axes::new([None, Some(4_usize)])));
        assert!(!at.matches_axes(&Axes::new([None::<usize>])));
        assert!(ArrayType::scalar_of(DType::Int32).matches_axes(&Axes::default()));
    }
}
