//! Atype Core - Element Kinds and Errors for Array Types
//!
//! This crate provides the leaf layer the `atype` crate builds on: the closed
//! set of element kinds an array can hold, host scalar values with their
//! coercion rules, and the error type shared across the workspace.
//!
//! # Key Features
//! - `DType` enum with stable wire tags, bit widths and a name/alias table
//! - `HostValue` scalars and the `Element` trait for Rust host types
//! - Lossy-but-total single value coercion between element kinds
//! - Unified `Error`/`Result` types
//!
//! # Example
//! ```rust
//! use atype_core::{convert, DType, HostValue};
//!
//! assert_eq!("f32".parse::<DType>().unwrap(), DType::Float32);
//! assert_eq!(DType::Float32.size_of(), 4);
//! assert_eq!(convert::<i32>(&HostValue::F64(2.5)), 2);
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
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::unused_self)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::panic)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::manual_assert)]
#![allow(clippy::float_cmp)]
#![allow(clippy::derivable_impls)]

// =============================================================================
// Modules
// =============================================================================

pub mod convert;
pub mod dtype;
pub mod error;
pub mod scalar;

// =============================================================================
// Re-exports
// =============================================================================

pub use convert::{convert, Element};
pub use dtype::DType;
pub use error::{Error, Result};
pub use scalar::{Complex, HostValue};

// Re-exported so downstream crates name the same half-precision types.
pub use half::{bf16, f16};

// =============================================================================
// Prelude
// =============================================================================

/// Convenient imports for common usage.
pub mod prelude {
    pub use crate::convert::{convert, Element};
    pub use crate::dtype::DType;
    pub use crate::error::{Error, Result};
    pub use crate::scalar::{Complex, HostValue};
}
