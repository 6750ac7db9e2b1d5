//! Host Scalars - Values Coming From Outside an Array
//!
//! `HostValue` is the closed set of scalar representations this workspace
//! understands when values are handed over by a caller: Rust primitives,
//! half-precision floats and complex numbers. Representations that map to no
//! element kind (strings, anything opaque) are still representable so that
//! callers get a descriptive error, or a zero value, instead of a type error.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use core::fmt;

use half::{bf16, f16};
use serde::{Deserialize, Serialize};

use crate::dtype::DType;

// =============================================================================
// Complex
// =============================================================================

/// Complex number with interleaved (real, imaginary) layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Complex<T> {
    /// Real part.
    pub re: T,
    /// Imaginary part.
    pub im: T,
}

impl<T> Complex<T> {
    /// Creates a new complex number.
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

impl<T: Copy> Complex<T> {
    /// Returns the real part.
    pub fn real(&self) -> T {
        self.re
    }

    /// Returns the imaginary part.
    pub fn imag(&self) -> T {
        self.im
    }
}

// =============================================================================
// HostValue
// =============================================================================

/// A single scalar value in one of the supported host representations.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    /// Boolean.
    Bool(bool),
    /// 8-bit signed integer.
    I8(i8),
    /// 16-bit signed integer.
    I16(i16),
    /// 32-bit signed integer.
    I32(i32),
    /// 64-bit signed integer.
    I64(i64),
    /// 8-bit unsigned integer.
    U8(u8),
    /// 16-bit unsigned integer.
    U16(u16),
    /// 32-bit unsigned integer.
    U32(u32),
    /// 64-bit unsigned integer.
    U64(u64),
    /// IEEE half precision float.
    F16(f16),
    /// Truncated (brain) 16-bit float.
    BF16(bf16),
    /// 32-bit float.
    F32(f32),
    /// 64-bit float.
    F64(f64),
    /// Complex number of two 32-bit floats.
    C64(Complex<f32>),
    /// Complex number of two 64-bit floats.
    C128(Complex<f64>),
    /// Text; has no element kind.
    Str(String),
    /// Any other host representation, identified by its type name.
    Opaque(&'static str),
}

impl HostValue {
    /// Returns the element kind this representation maps to.
    ///
    /// `Str` and `Opaque` values map to `DType::Invalid`.
    #[must_use]
    pub const fn dtype(&self) -> DType {
        match self {
            Self::Bool(_) => DType::Bool,
            Self::I8(_) => DType::Int8,
            Self::I16(_) => DType::Int16,
            Self::I32(_) => DType::Int32,
            Self::I64(_) => DType::Int64,
            Self::U8(_) => DType::Uint8,
            Self::U16(_) => DType::Uint16,
            Self::U32(_) => DType::Uint32,
            Self::U64(_) => DType::Uint64,
            Self::F16(_) => DType::Float16,
            Self::BF16(_) => DType::BFloat16,
            Self::F32(_) => DType::Float32,
            Self::F64(_) => DType::Float64,
            Self::C64(_) => DType::Complex64,
            Self::C128(_) => DType::Complex128,
            Self::Str(_) | Self::Opaque(_) => DType::Invalid,
        }
    }

    /// Returns the name of the host representation, used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::F16(_) => "f16",
            Self::BF16(_) => "bf16",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::C64(_) => "Complex<f32>",
            Self::C128(_) => "Complex<f64>",
            Self::Str(_) => "str",
            Self::Opaque(name) => name,
        }
    }
}

impl fmt::Display for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::U8(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::F16(v) => write!(f, "{v}"),
            Self::BF16(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::C64(v) => write!(f, "({}{:+}i)", v.re, v.im),
            Self::C128(v) => write!(f, "({}{:+}i)", v.re, v.im),
            Self::Str(v) => write!(f, "{v:?}"),
            Self::Opaque(name) => write!(f, "<{name}>"),
        }
    }
}

// =============================================================================
// Conversions Into HostValue
// =============================================================================

macro_rules! impl_from_host {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for HostValue {
            fn from(v: $ty) -> Self {
                Self::$variant(v)
            }
        }
    };
}

impl_from_host!(bool, Bool);
impl_from_host!(i8, I8);
impl_from_host!(i16, I16);
impl_from_host!(i32, I32);
impl_from_host!(i64, I64);
impl_from_host!(u8, U8);
impl_from_host!(u16, U16);
impl_from_host!(u32, U32);
impl_from_host!(u64, U64);
impl_from_host!(f16, F16);
impl_from_host!(bf16, BF16);
impl_from_host!(f32, F32);
impl_from_host!(f64, F64);
impl_from_host!(Complex<f32>, C64);
impl_from_host!(Complex<f64>, C128);
impl_from_host!(String, Str);

// Pointer-sized integers are 64-bit on every supported target.
impl From<isize> for HostValue {
    fn from(v: isize) -> Self {
        Self::I64(v as i64)
    }
}

impl From<usize> for HostValue {
    fn from(v: usize) -> Self {
        Self::U64(v as u64)
    }
}

impl From<&str> for HostValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<char> for HostValue {
    fn from(_: char) -> Self {
        Self::Opaque("char")
    }
}

impl From<()> for HostValue {
    fn from((): ()) -> Self {
        Self::Opaque("()")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_value_dtype() {
        assert_eq!(HostValue::from(1.0f32).dtype(), DType::Float32);
        assert_eq!(HostValue::from(1i32).dtype(), DType::Int32);
        assert_eq!(HostValue::from(7isize).dtype(), DType::Int64);
        assert_eq!(HostValue::from(7usize).dtype(), DType::Uint64);
        assert_eq!(HostValue::from(true).dtype(), DType::Bool);
        assert_eq!(HostValue::from(bf16::ONE).dtype(), DType::BFloat16);
        assert_eq!(
            HostValue::from(Complex::new(1.0f64, 2.0)).dtype(),
            DType::Complex128
        );
        assert_eq!(HostValue::from("x").dtype(), DType::Invalid);
        assert_eq!(HostValue::from('x').dtype(), DType::Invalid);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(HostValue::from("x").type_name(), "str");
        assert_eq!(HostValue::from('x').type_name(), "char");
        assert_eq!(HostValue::from(3u16).type_name(), "u16");
    }

    #[test]
    fn test_display() {
        assert_eq!(HostValue::from(Complex::new(1.0f32, -2.0)).to_string(), "(1-2i)");
        assert_eq!(HostValue::from(3i8).to_string(), "3");
        assert_eq!(HostValue::Opaque("unit").to_string(), "<unit>");
    }
}
