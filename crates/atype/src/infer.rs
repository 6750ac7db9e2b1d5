//! Shape Inference - Array Types of Nested Host Values
//!
//! [`Value`] is a nested sequence of host scalars, the input of
//! [`ArrayType::from_value`]. Each nesting level becomes one axis; the
//! innermost scalars give the element kind.
//!
//! Inference fails when:
//! - a scalar has no supported element kind (`Error::UnsupportedHostType`),
//! - sibling sub-sequences have different array types (`Error::IrregularShape`),
//! - a sequence is empty (`Error::EmptySequence`): the lengths of the axes
//!   below it cannot be inferred from zero elements.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use half::{bf16, f16};

use atype_core::error::{Error, Result};
use atype_core::{Complex, HostValue};

use crate::array_type::{ArrayType, AxisLengths};

// =============================================================================
// Value
// =============================================================================

/// Arbitrarily nested sequence of host scalars.
///
/// # Example
/// ```rust
/// use atype::{ArrayType, DType, Value};
///
/// let value = Value::from(vec![vec![0_i32, 1, 2], vec![3, 4, 5]]);
/// let at = ArrayType::from_value(&value).unwrap();
/// assert_eq!(at, ArrayType::new(DType::Int32, &[2, 3]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A single scalar.
    Scalar(HostValue),
    /// A sequence of values, one axis level.
    Seq(Vec<Value>),
}

impl Value {
    /// Builds a sequence from anything convertible into values.
    pub fn seq<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Returns true for a scalar.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Scalar(HostValue::from(value))
                }
            }
        )*
    };
}

impl_from_scalar!(
    bool,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    f16,
    bf16,
    f32,
    f64,
    Complex<f32>,
    Complex<f64>,
    String,
    &str,
    char,
    (),
);

impl From<HostValue> for Value {
    fn from(value: HostValue) -> Self {
        Self::Scalar(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::seq(items)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Self::seq(items)
    }
}

#[cfg(feature = "json")]
impl From<&serde_json::Value> for Value {
    /// Maps JSON numbers to `i64`, then `u64`, then `f64`.
    ///
    /// `null` and objects have no element kind and fail inference.
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Json::Null => Self::Scalar(HostValue::Opaque("null")),
            Json::Bool(b) => Self::Scalar(HostValue::Bool(*b)),
            Json::Number(n) => {
                let host = if let Some(i) = n.as_i64() {
                    HostValue::I64(i)
                } else if let Some(u) = n.as_u64() {
                    HostValue::U64(u)
                } else {
                    HostValue::F64(n.as_f64().unwrap_or(f64::NAN))
                };
                Self::Scalar(host)
            }
            Json::String(s) => Self::Scalar(HostValue::Str(s.clone())),
            Json::Array(items) => Self::Seq(items.iter().map(Self::from).collect()),
            Json::Object(_) => Self::Scalar(HostValue::Opaque("object")),
        }
    }
}

// =============================================================================
// Inference
// =============================================================================

impl ArrayType {
    /// Infers the array type of a nested value.
    ///
    /// Errors carry full array types, including the axes above the level
    /// where the problem was found.
    pub fn from_value(value: &Value) -> Result<Self> {
        let mut prefix = AxisLengths::new();
        infer(value, &mut prefix).map_err(|err| {
            tracing::debug!(error = %err, "array type inference rejected value");
            err
        })
    }

    /// Infers the array type of a JSON value, see [`ArrayType::from_value`].
    #[cfg(feature = "json")]
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self> {
        Self::from_value(&Value::from(value))
    }
}

/// `prefix` holds the lengths of the enclosing sequences and is restored
/// before returning successfully.
fn infer(value: &Value, prefix: &mut AxisLengths) -> Result<ArrayType> {
    match value {
        Value::Scalar(host) => {
            let dtype = host.dtype();
            if !dtype.is_valid() {
                return Err(Error::UnsupportedHostType {
                    type_name: host.type_name().to_string(),
                });
            }
            ArrayType::try_new(dtype, prefix)
        }
        Value::Seq(items) => {
            let Some((head, tail)) = items.split_first() else {
                let mut axis_lengths = prefix.to_vec();
                axis_lengths.push(0);
                return Err(Error::EmptySequence {
                    axis: prefix.len(),
                    axis_lengths,
                });
            };

            prefix.push(items.len());
            let first = infer(head, prefix)?;
            for item in tail {
                let other = infer(item, prefix)?;
                if other != first {
                    return Err(Error::irregular_shape(&first, &other));
                }
            }
            prefix.pop();
            Ok(first)
        }
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
    fn test_scalar() {
        let at = ArrayType::from_value(&Value::from(1.5_f32)).unwrap();
        assert_eq!(at, ArrayType::scalar_of(DType::Float32));

        let at = ArrayType::from_value(&Value::from(Complex::new(0.0_f64, 1.0))).unwrap();
        assert_eq!(at, ArrayType::scalar_of(DType::Complex128));
    }

    #[test]
    fn test_regular_nesting() {
        let value = Value::from(vec![vec![vec![0_u8; 4]; 3]; 2]);
        let at = ArrayType::from_value(&value).unwrap();
        assert_eq!(at, ArrayType::new(DType::Uint8, &[2, 3, 4]));

        let value = Value::from([[true], [false]]);
        let at = ArrayType::from_value(&value).unwrap();
        assert_eq!(at, ArrayType::new(DType::Bool, &[2, 1]));

        let value = Value::seq([f16::from_f32(1.0), f16::from_f32(2.0)]);
        let at = ArrayType::from_value(&value).unwrap();
        assert_eq!(at, ArrayType::new(DType::Float16, &[2]));
    }

    #[test]
    fn test_irregular_lengths() {
        let value = Value::from(vec![vec![1_i32, 2], vec![3]]);
        let err = ArrayType::from_value(&value).unwrap_err();
        assert_eq!(err, Error::irregular_shape("(Int32)[2 2]", "(Int32)[2 1]"));
    }

    #[test]
    fn test_irregular_dtypes_and_depths() {
        let value = Value::seq([Value::from(1_i32), Value::from(2.0_f64)]);
        let err = ArrayType::from_value(&value).unwrap_err();
        assert_eq!(err, Error::irregular_shape("(Int32)[2]", "(Float64)[2]"));

        let value = Value::seq([Value::from(1_i32), Value::from(vec![2_i32])]);
        assert!(matches!(
            ArrayType::from_value(&value),
            Err(Error::IrregularShape { .. })
        ));
    }

    #[test]
    fn test_empty_sequence() {
        let value = Value::from(Vec::<f32>::new());
        let err = ArrayType::from_value(&value).unwrap_err();
        assert_eq!(
            err,
            Error::EmptySequence {
                axis: 0,
                axis_lengths: vec![0],
            }
        );

        let value = Value::from(vec![Vec::<f32>::new(), Vec::new()]);
        let err = ArrayType::from_value(&value).unwrap_err();
        assert_eq!(
            err,
            Error::EmptySequence {
                axis: 1,
                axis_lengths: vec![2, 0],
            }
        );
    }

    #[test]
    fn test_unsupported_host_type() {
        let err = ArrayType::from_value(&Value::from(vec!["a", "b"])).unwrap_err();
        assert_eq!(
            err,
            Error::UnsupportedHostType {
                type_name: "str".to_string(),
            }
        );

        let err = ArrayType::from_value(&Value::from('x')).unwrap_err();
        assert!(err.to_string().contains("char"));
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_from_json_value() {
        let json: serde_json::Value = serde_json::json!([[1, 2, 3], [4, 5, 6]]);
        let at = ArrayType::from_json_value(&json).unwrap();
        assert_eq!(at, ArrayType::new(DType::Int64, &[2, 3]));

        let json = serde_json::json!([0.5, 1.5]);
        let at = ArrayType::from_json_value(&json).unwrap();
        assert_eq!(at, ArrayType::new(DType::Float64, &[2]));

        let json = serde_json::json!([1, 2.5]);
        assert!(ArrayType::from_json_value(&json).is_err());

        let json = serde_json::json!([{"a": 1}]);
        let err = ArrayType::from_json_value(&json).unwrap_err();
        assert!(err.to_string().contains("object"));
    }
}
