//! Atype - Array Types and Coordinate Iteration
//!
//! An array type is the element kind plus the axis lengths of an array,
//! without its data. This crate builds it on top of `atype-core` and adds
//! everything needed to reason about array layouts:
//!
//! # Key Features
//! - `ArrayType`: validated construction, size and memory queries, negative
//!   axis indexing, equality, axis concatenation
//! - Row-major strides, flat index and coordinate conversion
//! - Allocation-free iteration over all coordinates or over selected axes
//! - `check_*` / `assert_*` validation of axis lengths, element kind,
//!   axis count and scalar-ness, for any value implementing `HasArrayType`
//! - Shape inference from nested host values
//! - Binary (`bincode`) and JSON encoding
//! - Partially known `Axes`
//!
//! # Example
//! ```rust
//! use atype::prelude::*;
//!
//! let at = ArrayType::make(DType::Float32, &[2, 3]).unwrap();
//! assert_eq!(at.to_string(), "(Float32)[2 3]");
//! assert_eq!(at.size(), 6);
//! assert_eq!(at.memory_bytes(), 24);
//! assert_eq!(at.strides().as_slice(), &[3, 1]);
//! at.assert(DType::Float32, &[2, UNCHECKED_AXIS]);
//!
//! let mut count = 0;
//! at.iterate().for_each(|flat_index, coordinates| {
//!     assert_eq!(at.flat_index(coordinates), flat_index);
//!     count += 1;
//! });
//! assert_eq!(count, 6);
//! ```
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Numeric/array-layout allowances
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::panic)]
#![allow(clippy::manual_assert)]
#![allow(clippy::iter_not_returning_iterator)]

// =============================================================================
// Modules
// =============================================================================

pub mod array_type;
pub mod axes;
pub mod check;
pub mod codec;
pub mod infer;
pub mod iter;
pub mod strides;

// =============================================================================
// Re-exports
// =============================================================================

pub use array_type::{concatenate_axes, ArrayType, AxisLengths};
pub use axes::{Axes, Axis};
pub use check::{HasArrayType, UNCHECKED_AXIS};
pub use infer::Value;
pub use iter::{AxisIter, OwnedAxisIter, Strategy, DENSE_SLACK};
pub use strides::{contiguous_strides, linear_index, unravel_index, Strides};

pub use atype_core::{bf16, convert, f16, Complex, DType, Element, Error, HostValue, Result};

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for working with array types.
pub mod prelude {
    pub use crate::array_type::{ArrayType, AxisLengths};
    pub use crate::axes::{Axes, Axis};
    pub use crate::check::{HasArrayType, UNCHECKED_AXIS};
    pub use crate::infer::Value;
    pub use crate::iter::{AxisIter, Strategy};
    pub use crate::strides::Strides;

    pub use atype_core::prelude::*;
}
