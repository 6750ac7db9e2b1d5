//! Iteration - Row-Major Enumeration of Coordinates
//!
//! Enumerates every coordinate of an array type, or of a subset of its axes,
//! in row-major order, yielding `(flat_index, coordinates)` pairs.
//!
//! # Buffer Ownership
//!
//! An [`AxisIter`] owns one coordinate buffer for its whole life and mutates
//! it in place on every step; no step allocates. The slice returned by
//! [`AxisIter::next`] borrows that buffer and is only valid until the next
//! call. Copy it (e.g. with [`AxisIter::into_owned`]) to keep a snapshot.
//!
//! The buffer is either allocated by the iteration (on the stack for up to 6
//! axes) or supplied by the caller, which lets repeated iterations reuse one
//! buffer and lets partial iterations read fixed coordinates from it.
//!
//! Each iteration is single-pass and single-consumer; create a new one to
//! start over. Stopping early (dropping the iteration, or returning
//! `ControlFlow::Break` from [`AxisIter::for_each_while`]) has no other effect.
//!
//! # Strategies
//!
//! Full iteration picks one of two equivalent counters: a dense one that
//! walks every axis and skips singleton axes, used when most axes are
//! non-trivial, and a sparse one that walks a precomputed list of the
//! non-trivial axes only. Both produce the same sequence.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use core::ops::{ControlFlow, Deref, DerefMut};

use smallvec::SmallVec;

use crate::array_type::{ArrayType, AxisLengths};
use crate::strides::{linear_index, Strides};

// =============================================================================
// Constants
// =============================================================================

/// Full iteration uses the dense counter when `rank <= non_trivial + DENSE_SLACK`,
/// where `non_trivial` is the number of axes longer than 1.
pub const DENSE_SLACK: usize = 2;

// =============================================================================
// Strategy
// =============================================================================

/// Algorithm selected by an iteration, exposed for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Nothing to yield: invalid array type or an empty axis.
    Empty,
    /// Exactly one coordinate: scalars and all-singleton array types.
    Single,
    /// Counter over every axis, skipping singleton axes.
    Dense,
    /// Counter over the precomputed non-trivial axes only.
    Sparse,
    /// Counter over caller-selected axes, with incremental flat index.
    Partial,
}

type AxisList = SmallVec<[usize; 6]>;

#[derive(Debug)]
enum Plan {
    Empty,
    Single,
    Dense,
    /// Non-trivial axes, least significant (last) axis first.
    Sparse(AxisList),
    /// Axes to iterate in caller order; the last one varies fastest.
    Partial { axes: AxisList, strides: Strides },
}

impl Plan {
    fn strategy(&self) -> Strategy {
        match self {
            Self::Empty => Strategy::Empty,
            Self::Single => Strategy::Single,
            Self::Dense => Strategy::Dense,
            Self::Sparse(_) => Strategy::Sparse,
            Self::Partial { .. } => Strategy::Partial,
        }
    }
}

// =============================================================================
// Coordinate Buffer
// =============================================================================

#[derive(Debug)]
enum Buffer<'a> {
    Owned(AxisLengths),
    Borrowed(&'a mut [usize]),
}

impl Deref for Buffer<'_> {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        match self {
            Self::Owned(coordinates) => coordinates,
            Self::Borrowed(coordinates) => coordinates,
        }
    }
}

impl DerefMut for Buffer<'_> {
    fn deref_mut(&mut self) -> &mut [usize] {
        match self {
            Self::Owned(coordinates) => coordinates,
            Self::Borrowed(coordinates) => coordinates,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Pending,
    Running,
    Finished,
}

// =============================================================================
// AxisIter
// =============================================================================

/// Single-pass sequence of `(flat_index, coordinates)` pairs over an array type.
///
/// Created by [`ArrayType::iterate`], [`ArrayType::iterate_on`] and
/// [`ArrayType::iterate_on_axes`]. See the module documentation for the
/// buffer aliasing rules.
///
/// # Example
/// ```rust
/// use atype::{ArrayType, DType};
///
/// let at = ArrayType::new(DType::Float64, &[3, 2]);
/// let mut iter = at.iterate();
/// while let Some((flat_index, coordinates)) = iter.next() {
///     assert_eq!(at.flat_index(coordinates), flat_index);
/// }
/// ```
#[derive(Debug)]
pub struct AxisIter<'a> {
    axis_lengths: &'a [usize],
    coordinates: Buffer<'a>,
    plan: Plan,
    flat_index: usize,
    phase: Phase,
}

impl<'a> AxisIter<'a> {
    fn full(array_type: &'a ArrayType, mut coordinates: Buffer<'a>) -> Self {
        coordinates.fill(0);
        let plan = plan_full(array_type);
        tracing::trace!(
            array_type = %array_type,
            strategy = ?plan.strategy(),
            "full iteration"
        );
        Self::with_plan(array_type, coordinates, plan, 0)
    }

    fn partial(
        array_type: &'a ArrayType,
        axes: &[usize],
        strides: Option<&[usize]>,
        coordinates: Option<&'a mut [usize]>,
    ) -> Self {
        let rank = array_type.rank();
        let strides = match strides {
            Some(strides) if strides.len() != rank => panic!(
                "ArrayType::iterate_on_axes given {} strides, want one per axis ({rank}) for {array_type}",
                strides.len()
            ),
            Some(strides) => Strides::from_slice(strides),
            None => array_type.strides(),
        };
        let mut coordinates = match coordinates {
            Some(coordinates) if coordinates.len() != rank => panic!(
                "ArrayType::iterate_on_axes given {} coordinates, want one per axis ({rank}) for {array_type}",
                coordinates.len()
            ),
            Some(coordinates) => Buffer::Borrowed(coordinates),
            None => Buffer::Owned(smallvec::smallvec![0; rank]),
        };
        for (i, &axis) in axes.iter().enumerate() {
            if axis >= rank {
                panic!(
                    "ArrayType::iterate_on_axes: invalid axis {axis}, must be 0 <= axis < {rank} for {array_type}"
                );
            }
            if axes[..i].contains(&axis) {
                panic!("ArrayType::iterate_on_axes: axis {axis} listed more than once in {axes:?}");
            }
        }

        let lengths = array_type.axis_lengths();
        if !array_type.ok() || axes.iter().any(|&axis| lengths[axis] == 0) {
            return Self::with_plan(array_type, coordinates, Plan::Empty, 0);
        }

        for &axis in axes {
            coordinates[axis] = 0;
        }
        let flat_index = linear_index(&coordinates, &strides);
        tracing::trace!(
            array_type = %array_type,
            axes = ?axes,
            flat_index,
            "partial iteration"
        );
        let plan = Plan::Partial {
            axes: AxisList::from_slice(axes),
            strides,
        };
        Self::with_plan(array_type, coordinates, plan, flat_index)
    }

    fn with_plan(
        array_type: &'a ArrayType,
        coordinates: Buffer<'a>,
        plan: Plan,
        flat_index: usize,
    ) -> Self {
        let phase = match plan {
            Plan::Empty => Phase::Finished,
            _ => Phase::Pending,
        };
        Self {
            axis_lengths: array_type.axis_lengths(),
            coordinates,
            plan,
            flat_index,
            phase,
        }
    }

    /// Returns the algorithm this iteration runs.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.plan.strategy()
    }

    /// Advances the iteration and returns the next pair.
    ///
    /// The coordinates borrow the iteration's buffer: they are overwritten by
    /// the following call.
    pub fn next(&mut self) -> Option<(usize, &[usize])> {
        match self.phase {
            Phase::Finished => return None,
            Phase::Pending => self.phase = Phase::Running,
            Phase::Running => {
                if !self.advance() {
                    self.phase = Phase::Finished;
                    return None;
                }
            }
        }
        Some((self.flat_index, &*self.coordinates))
    }

    /// Moves the counter to the next coordinate. Returns false once every
    /// coordinate has been produced.
    fn advance(&mut self) -> bool {
        let lengths = self.axis_lengths;
        let coordinates = &mut *self.coordinates;
        match &self.plan {
            Plan::Empty | Plan::Single => false,
            Plan::Dense => {
                self.flat_index += 1;
                for axis in (0..lengths.len()).rev() {
                    if lengths[axis] == 1 {
                        continue;
                    }
                    coordinates[axis] += 1;
                    if coordinates[axis] < lengths[axis] {
                        return true;
                    }
                    // Carry into the next axis to the left.
                    coordinates[axis] = 0;
                }
                false
            }
            Plan::Sparse(axes) => {
                self.flat_index += 1;
                for &axis in axes {
                    coordinates[axis] += 1;
                    if coordinates[axis] < lengths[axis] {
                        return true;
                    }
                    coordinates[axis] = 0;
                }
                false
            }
            Plan::Partial { axes, strides } => {
                for &axis in axes.iter().rev() {
                    coordinates[axis] += 1;
                    self.flat_index += strides[axis];
                    if coordinates[axis] < lengths[axis] {
                        return true;
                    }
                    self.flat_index -= coordinates[axis] * strides[axis];
                    coordinates[axis] = 0;
                }
                false
            }
        }
    }

    /// Calls `f` for every remaining pair until it returns `ControlFlow::Break`.
    ///
    /// Returns `ControlFlow::Break` if the iteration was stopped early.
    pub fn for_each_while<F>(mut self, mut f: F) -> ControlFlow<()>
    where
        F: FnMut(usize, &[usize]) -> ControlFlow<()>,
    {
        while let Some((flat_index, coordinates)) = self.next() {
            f(flat_index, coordinates)?;
        }
        ControlFlow::Continue(())
    }

    /// Calls `f` for every remaining pair.
    pub fn for_each<F>(mut self, mut f: F)
    where
        F: FnMut(usize, &[usize]),
    {
        while let Some((flat_index, coordinates)) = self.next() {
            f(flat_index, coordinates);
        }
    }

    /// Converts into a standard iterator that copies the coordinates at each step.
    #[must_use]
    pub fn into_owned(self) -> OwnedAxisIter<'a> {
        OwnedAxisIter { inner: self }
    }

    /// Collects a snapshot of every remaining pair.
    #[must_use]
    pub fn collect_owned(self) -> Vec<(usize, AxisLengths)> {
        self.into_owned().collect()
    }
}

fn plan_full(array_type: &ArrayType) -> Plan {
    if !array_type.ok() {
        return Plan::Empty;
    }
    let lengths = array_type.axis_lengths();
    if lengths.is_empty() {
        return Plan::Single;
    }
    if lengths.contains(&0) {
        return Plan::Empty;
    }

    let non_trivial = lengths.iter().filter(|&&length| length > 1).count();
    if non_trivial == 0 {
        Plan::Single
    } else if lengths.len() <= non_trivial + DENSE_SLACK {
        Plan::Dense
    } else {
        Plan::Sparse(non_trivial_axes(lengths))
    }
}

fn non_trivial_axes(lengths: &[usize]) -> AxisList {
    (0..lengths.len())
        .rev()
        .filter(|&axis| lengths[axis] > 1)
        .collect()
}

// =============================================================================
// Owned Adapter
// =============================================================================

/// Standard [`Iterator`] over an [`AxisIter`], copying the coordinates of each step.
#[derive(Debug)]
pub struct OwnedAxisIter<'a> {
    inner: AxisIter<'a>,
}

impl Iterator for OwnedAxisIter<'_> {
    type Item = (usize, AxisLengths);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(flat_index, coordinates)| (flat_index, AxisLengths::from_slice(coordinates)))
    }
}

// =============================================================================
// ArrayType Integration
// =============================================================================

impl ArrayType {
    /// Iterates over every coordinate of this array type, in row-major order.
    ///
    /// Yields `(flat_index, coordinates)`, with `flat_index` going from 0 to
    /// `size() - 1`. Scalars yield one `(0, [])` pair; zero-size and invalid
    /// array types yield nothing. Singleton axes stay at 0.
    #[must_use]
    pub fn iterate(&self) -> AxisIter<'_> {
        let coordinates = Buffer::Owned(smallvec::smallvec![0; self.rank()]);
        AxisIter::full(self, coordinates)
    }

    /// Like [`ArrayType::iterate`], but updates the caller's buffer in place.
    ///
    /// The buffer is reset to zeros first.
    ///
    /// # Panics
    /// If `coordinates.len() != rank()`.
    #[must_use]
    pub fn iterate_on<'a>(&'a self, coordinates: &'a mut [usize]) -> AxisIter<'a> {
        if coordinates.len() != self.rank() {
            panic!(
                "ArrayType::iterate_on given {} coordinates, want one per axis ({}) for {self}",
                coordinates.len(),
                self.rank()
            );
        }
        AxisIter::full(self, Buffer::Borrowed(coordinates))
    }

    /// Iterates over the coordinates of the given axes only.
    ///
    /// # Arguments
    /// * `axes` - Axes to iterate over, each `< rank()`; the last listed axis
    ///   varies fastest. Other axes keep the value they have in `coordinates`.
    /// * `strides` - Precomputed [`ArrayType::strides`], one per axis. Only
    ///   saves recomputing them; the sequence is the same either way.
    /// * `coordinates` - Buffer to iterate on, one entry per axis. Entries of
    ///   iterated axes are reset to 0; the others are read as fixed values
    ///   and never modified. If `None`, a zeroed buffer is allocated.
    ///
    /// The yielded flat index is the dot product of the full coordinates with
    /// the strides. It is computed once, then updated incrementally.
    ///
    /// # Panics
    /// On an out-of-range or repeated axis, or on a strides or coordinates
    /// buffer whose length differs from `rank()`.
    ///
    /// # Example
    /// ```rust
    /// use atype::{ArrayType, DType};
    ///
    /// let at = ArrayType::new(DType::Float32, &[2, 3, 4]);
    /// let mut coordinates = [0, 1, 0];
    /// let flat: Vec<usize> = at
    ///     .iterate_on_axes(&[0, 2], None, Some(&mut coordinates[..]))
    ///     .into_owned()
    ///     .map(|(flat_index, _)| flat_index)
    ///     .collect();
    /// assert_eq!(flat, vec![4, 5, 6, 7, 16, 17, 18, 19]);
    /// ```
    #[must_use]
    pub fn iterate_on_axes<'a>(
        &'a self,
        axes: &[usize],
        strides: Option<&[usize]>,
        coordinates: Option<&'a mut [usize]>,
    ) -> AxisIter<'a> {
        AxisIter::partial(self, axes, strides, coordinates)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strides::unravel_index;
    use atype_core::DType;

    fn snapshot(iter: AxisIter<'_>) -> Vec<(usize, Vec<usize>)> {
        iter.into_owned()
            .map(|(flat_index, coordinates)| (flat_index, coordinates.to_vec()))
            .collect()
    }

    fn forced<'a>(array_type: &'a ArrayType, plan: Plan) -> AxisIter<'a> {
        let coordinates = Buffer::Owned(smallvec::smallvec![0; array_type.rank()]);
        AxisIter::with_plan(array_type, coordinates, plan, 0)
    }

    fn reference(array_type: &ArrayType) -> Vec<(usize, Vec<usize>)> {
        (0..array_type.size())
            .map(|flat| (flat, unravel_index(flat, array_type.axis_lengths()).to_vec()))
            .collect()
    }

    #[test]
    fn test_only_singleton_axes() {
        let at = ArrayType::new(DType::Float32, &[1, 1, 1, 1]);
        let iter = at.iterate();
        assert_eq!(iter.strategy(), Strategy::Single);
        assert_eq!(snapshot(iter), vec![(0, vec![0, 0, 0, 0])]);
    }

    #[test]
    fn test_all_axes_non_trivial() {
        let at = ArrayType::new(DType::Float64, &[3, 2]);
        let iter = at.iterate();
        assert_eq!(iter.strategy(), Strategy::Dense);
        assert_eq!(
            snapshot(iter),
            vec![
                (0, vec![0, 0]),
                (1, vec![0, 1]),
                (2, vec![1, 0]),
                (3, vec![1, 1]),
                (4, vec![2, 0]),
                (5, vec![2, 1]),
            ]
        );
    }

    #[test]
    fn test_mixed_singleton_axes() {
        let at = ArrayType::new(DType::BFloat16, &[3, 1, 2, 1]);
        let want = vec![
            (0, vec![0, 0, 0, 0]),
            (1, vec![0, 0, 1, 0]),
            (2, vec![1, 0, 0, 0]),
            (3, vec![1, 0, 1, 0]),
            (4, vec![2, 0, 0, 0]),
            (5, vec![2, 0, 1, 0]),
        ];
        assert_eq!(snapshot(at.iterate()), want);
        assert_eq!(snapshot(forced(&at, Plan::Dense)), want);
        let sparse = Plan::Sparse(non_trivial_axes(at.axis_lengths()));
        assert_eq!(snapshot(forced(&at, sparse)), want);
    }

    #[test]
    fn test_many_singleton_axes_use_sparse() {
        let at = ArrayType::new(DType::Int8, &[1, 3, 1, 1, 1, 2, 1]);
        let iter = at.iterate();
        assert_eq!(iter.strategy(), Strategy::Sparse);
        assert_eq!(snapshot(iter), reference(&at));
    }

    #[test]
    fn test_strategies_agree() {
        let shapes: &[&[usize]] = &[
            &[5],
            &[2, 3, 4],
            &[1, 4],
            &[4, 1],
            &[2, 1, 1, 1, 3],
            &[1, 1, 2, 1, 1, 2, 1, 1],
            &[3, 1, 1, 1, 1, 1, 1, 1, 1, 2],
            &[1, 1, 1, 1, 1, 1, 1, 7],
        ];
        for shape in shapes {
            let at = ArrayType::new(DType::Float32, shape);
            let want = reference(&at);
            assert_eq!(snapshot(at.iterate()), want, "auto {at}");
            assert_eq!(snapshot(forced(&at, Plan::Dense)), want, "dense {at}");
            let sparse = Plan::Sparse(non_trivial_axes(at.axis_lengths()));
            assert_eq!(snapshot(forced(&at, sparse)), want, "sparse {at}");
        }
    }

    #[test]
    fn test_scalar_yields_once() {
        let at = ArrayType::scalar_of(DType::Int32);
        assert_eq!(snapshot(at.iterate()), vec![(0, vec![])]);
    }

    #[test]
    fn test_zero_size_and_invalid_yield_nothing() {
        let at = ArrayType::new(DType::Int32, &[3, 0, 2]);
        let iter = at.iterate();
        assert_eq!(iter.strategy(), Strategy::Empty);
        assert!(snapshot(iter).is_empty());
        assert!(snapshot(ArrayType::invalid().iterate()).is_empty());
    }

    #[test]
    fn test_next_after_end_stays_none() {
        let at = ArrayType::new(DType::Int32, &[2]);
        let mut iter = at.iterate();
        assert!(iter.next().is_some());
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_early_stop() {
        let at = ArrayType::new(DType::Float32, &[4, 4]);
        let mut seen = Vec::new();
        let flow = at.iterate().for_each_while(|flat_index, _| {
            seen.push(flat_index);
            if flat_index == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(flow, ControlFlow::Break(()));
        assert_eq!(seen, vec![0, 1, 2]);

        let flow = at.iterate().for_each_while(|_, _| ControlFlow::Continue(()));
        assert_eq!(flow, ControlFlow::Continue(()));
    }

    #[test]
    fn test_iterate_on_resets_caller_buffer() {
        let at = ArrayType::new(DType::Float32, &[2, 2]);
        let mut coordinates = [7, 7];
        let mut iter = at.iterate_on(&mut coordinates);
        assert_eq!(iter.next(), Some((0, &[0, 0][..])));
        assert_eq!(iter.next(), Some((1, &[0, 1][..])));
        drop(iter);
        assert_eq!(coordinates, [0, 1]);
    }

    #[test]
    #[should_panic(expected = "want one per axis")]
    fn test_iterate_on_wrong_length_panics() {
        let at = ArrayType::new(DType::Float32, &[2, 2]);
        let mut coordinates = [0; 3];
        let _ = at.iterate_on(&mut coordinates);
    }

    #[test]
    fn test_iterate_on_axes_with_fixed_axis() {
        let at = ArrayType::new(DType::Float32, &[2, 3, 4]);
        let mut coordinates = [0, 1, 0];
        let got = snapshot(at.iterate_on_axes(&[0, 2], None, Some(&mut coordinates[..])));
        assert_eq!(
            got,
            vec![
                (4, vec![0, 1, 0]),
                (5, vec![0, 1, 1]),
                (6, vec![0, 1, 2]),
                (7, vec![0, 1, 3]),
                (16, vec![1, 1, 0]),
                (17, vec![1, 1, 1]),
                (18, vec![1, 1, 2]),
                (19, vec![1, 1, 3]),
            ]
        );
        assert_eq!(coordinates[1], 1);
    }

    #[test]
    fn test_iterate_on_axes_precomputed_strides() {
        let at = ArrayType::new(DType::Float32, &[2, 3, 4]);
        let strides = at.strides();
        let mut a = [0, 2, 0];
        let mut b = [0, 2, 0];
        let computed = snapshot(at.iterate_on_axes(&[2, 0], None, Some(&mut a[..])));
        let given = snapshot(at.iterate_on_axes(&[2, 0], Some(&strides[..]), Some(&mut b[..])));
        assert_eq!(computed, given);
        // Axis 0 is listed last, so it varies fastest.
        assert_eq!(computed[0], (8, vec![0, 2, 0]));
        assert_eq!(computed[1], (20, vec![1, 2, 0]));
        assert_eq!(computed[2], (9, vec![0, 2, 1]));
        assert_eq!(computed.len(), 8);
    }

    #[test]
    fn test_iterate_on_axes_flat_index_is_dot_product() {
        let at = ArrayType::new(DType::Int64, &[3, 1, 4, 2]);
        let strides = at.strides();
        let mut coordinates = [0, 0, 3, 0];
        at.iterate_on_axes(&[0, 1, 3], None, Some(&mut coordinates[..]))
            .for_each(|flat_index, coordinates| {
                assert_eq!(flat_index, linear_index(coordinates, &strides));
                assert_eq!(coordinates[2], 3);
            });
    }

    #[test]
    fn test_iterate_on_all_axes_matches_full_iteration() {
        let at = ArrayType::new(DType::Uint8, &[2, 1, 3]);
        let partial = snapshot(at.iterate_on_axes(&[0, 1, 2], None, None));
        assert_eq!(partial, snapshot(at.iterate()));
    }

    #[test]
    fn test_iterate_on_axes_edge_cases() {
        let scalar = ArrayType::scalar_of(DType::Float32);
        assert_eq!(
            snapshot(scalar.iterate_on_axes(&[], None, None)),
            vec![(0, vec![])]
        );

        let at = ArrayType::new(DType::Float32, &[2, 3]);
        let mut coordinates = [1, 2];
        assert_eq!(
            snapshot(at.iterate_on_axes(&[], None, Some(&mut coordinates[..]))),
            vec![(5, vec![1, 2])]
        );

        let empty = ArrayType::new(DType::Float32, &[2, 0, 3]);
        let iter = empty.iterate_on_axes(&[1], None, None);
        assert_eq!(iter.strategy(), Strategy::Empty);
        assert!(snapshot(iter).is_empty());
    }

    #[test]
    #[should_panic(expected = "invalid axis 3")]
    fn test_iterate_on_axes_out_of_range_panics() {
        let at = ArrayType::new(DType::Float32, &[2, 3, 4]);
        let _ = at.iterate_on_axes(&[0, 3], None, None);
    }

    #[test]
    #[should_panic(expected = "listed more than once")]
    fn test_iterate_on_axes_repeated_axis_panics() {
        let at = ArrayType::new(DType::Float32, &[2, 3, 4]);
        let _ = at.iterate_on_axes(&[1, 1], None, None);
    }

    #[test]
    #[should_panic(expected = "strides")]
    fn test_iterate_on_axes_wrong_strides_panics() {
        let at = ArrayType::new(DType::Float32, &[2, 3, 4]);
        let _ = at.iterate_on_axes(&[0], Some(&[4, 1][..]), None);
    }

    #[test]
    #[should_panic(expected = "coordinates")]
    fn test_iterate_on_axes_wrong_coordinates_panics() {
        let at = ArrayType::new(DType::Float32, &[2, 3, 4]);
        let mut coordinates = [0; 2];
        let _ = at.iterate_on_axes(&[0], None, Some(&mut coordinates[..]));
    }
}
