//! Scalar Coercion - Host Values to Element Kinds
//!
//! Converts a single [`HostValue`] into the host type of a given element kind.
//! The rules are fixed:
//!
//! - integer and float representations narrow or widen with `as` semantics;
//! - complex inputs keep only their real part when the target is real;
//! - half and truncated floats (`f16`, `bf16`) are produced through an `f32`
//!   intermediate;
//! - representations the target cannot interpret (text, opaque values, and
//!   booleans for numeric targets) yield the target's zero value.
//!
//! The last rule is a lossy fallback, not an error: coercion never fails.
//! Shape inference, which does fail on unsupported input, lives elsewhere.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use core::fmt::Debug;

use half::{bf16, f16};

use crate::dtype::DType;
use crate::scalar::{Complex, HostValue};

// =============================================================================
// Element Trait
// =============================================================================

/// Trait for Rust types that are the host representation of an element kind.
pub trait Element: Copy + Debug + Default + Send + Sync + 'static {
    /// The element kind represented by this type.
    const DTYPE: DType;

    /// Coerces any host value into this type. Never fails.
    fn from_host(value: &HostValue) -> Self;

    /// Wraps this value back into a `HostValue`.
    fn into_host(self) -> HostValue;

    /// Returns the element kind of this type.
    #[must_use]
    fn dtype() -> DType {
        Self::DTYPE
    }
}

/// Coerces a host value to `T`, see the module documentation for the rules.
pub fn convert<T: Element>(value: &HostValue) -> T {
    T::from_host(value)
}

fn fallback<T: Element>(value: &HostValue) -> T {
    let target = T::DTYPE;
    tracing::trace!(
        from = value.type_name(),
        to = %target,
        "unsupported host value coerced to zero"
    );
    T::default()
}

// =============================================================================
// Real Implementations
// =============================================================================

macro_rules! impl_real_element {
    ($ty:ty, $dtype:expr) => {
        impl Element for $ty {
            const DTYPE: DType = $dtype;

            fn from_host(value: &HostValue) -> Self {
                match value {
                    HostValue::I8(v) => *v as $ty,
                    HostValue::I16(v) => *v as $ty,
                    HostValue::I32(v) => *v as $ty,
                    HostValue::I64(v) => *v as $ty,
                    HostValue::U8(v) => *v as $ty,
                    HostValue::U16(v) => *v as $ty,
                    HostValue::U32(v) => *v as $ty,
                    HostValue::U64(v) => *v as $ty,
                    HostValue::F16(v) => v.to_f32() as $ty,
                    HostValue::BF16(v) => v.to_f32() as $ty,
                    HostValue::F32(v) => *v as $ty,
                    HostValue::F64(v) => *v as $ty,
                    HostValue::C64(v) => v.re as $ty,
                    HostValue::C128(v) => v.re as $ty,
                    HostValue::Bool(_) | HostValue::Str(_) | HostValue::Opaque(_) => {
                        fallback(value)
                    }
                }
            }

            fn into_host(self) -> HostValue {
                HostValue::from(self)
            }
        }
    };
}

impl_real_element!(i8, DType::Int8);
impl_real_element!(i16, DType::Int16);
impl_real_element!(i32, DType::Int32);
impl_real_element!(i64, DType::Int64);
impl_real_element!(u8, DType::Uint8);
impl_real_element!(u16, DType::Uint16);
impl_real_element!(u32, DType::Uint32);
impl_real_element!(u64, DType::Uint64);
impl_real_element!(f32, DType::Float32);
impl_real_element!(f64, DType::Float64);

impl Element for f16 {
    const DTYPE: DType = DType::Float16;

    fn from_host(value: &HostValue) -> Self {
        match value {
            HostValue::F16(v) => *v,
            _ => f16::from_f32(f32::from_host(value)),
        }
    }

    fn into_host(self) -> HostValue {
        HostValue::F16(self)
    }
}

impl Element for bf16 {
    const DTYPE: DType = DType::BFloat16;

    fn from_host(value: &HostValue) -> Self {
        match value {
            HostValue::BF16(v) => *v,
            _ => bf16::from_f32(f32::from_host(value)),
        }
    }

    fn into_host(self) -> HostValue {
        HostValue::BF16(self)
    }
}

// =============================================================================
// Bool and Complex Implementations
// =============================================================================

impl Element for bool {
    const DTYPE: DType = DType::Bool;

    /// Any non-zero number is `true`.
    fn from_host(value: &HostValue) -> Self {
        match value {
            HostValue::Bool(v) => *v,
            HostValue::C64(v) => v.re != 0.0 || v.im != 0.0,
            HostValue::C128(v) => v.re != 0.0 || v.im != 0.0,
            HostValue::Str(_) | HostValue::Opaque(_) => fallback(value),
            _ => f64::from_host(value) != 0.0,
        }
    }

    fn into_host(self) -> HostValue {
        HostValue::Bool(self)
    }
}

macro_rules! impl_complex_element {
    ($ty:ty, $dtype:expr, $variant:ident) => {
        impl Element for Complex<$ty> {
            const DTYPE: DType = $dtype;

            /// Real inputs get a zero imaginary part.
            fn from_host(value: &HostValue) -> Self {
                match value {
                    HostValue::C64(v) => Complex::new(v.re as $ty, v.im as $ty),
                    HostValue::C128(v) => Complex::new(v.re as $ty, v.im as $ty),
                    HostValue::Bool(_) | HostValue::Str(_) | HostValue::Opaque(_) => {
                        fallback(value)
                    }
                    _ => Complex::new(<$ty as Element>::from_host(value), 0.0),
                }
            }

            fn into_host(self) -> HostValue {
                HostValue::$variant(self)
            }
        }
    };
}

impl_complex_element!(f32, DType::Complex64, C64);
impl_complex_element!(f64, DType::Complex128, C128);

// =============================================================================
// Dispatch Over DType
// =============================================================================

impl HostValue {
    /// Coerces this value into the host representation of `dtype`.
    ///
    /// Returns `None` only for kinds without a host representation: the
    /// invalid kind, 8-bit floats, sub-byte integers and microscaling floats.
    #[must_use]
    pub fn cast(&self, dtype: DType) -> Option<HostValue> {
        let cast = match dtype {
            DType::Bool => bool::from_host(self).into_host(),
            DType::Int8 => i8::from_host(self).into_host(),
            DType::Int16 => i16::from_host(self).into_host(),
            DType::Int32 => i32::from_host(self).into_host(),
            DType::Int64 => i64::from_host(self).into_host(),
            DType::Uint8 => u8::from_host(self).into_host(),
            DType::Uint16 => u16::from_host(self).into_host(),
            DType::Uint32 => u32::from_host(self).into_host(),
            DType::Uint64 => u64::from_host(self).into_host(),
            DType::Float16 => f16::from_host(self).into_host(),
            DType::BFloat16 => bf16::from_host(self).into_host(),
            DType::Float32 => f32::from_host(self).into_host(),
            DType::Float64 => f64::from_host(self).into_host(),
            DType::Complex64 => Complex::<f32>::from_host(self).into_host(),
            DType::Complex128 => Complex::<f64>::from_host(self).into_host(),
            DType::Invalid
            | DType::F8E5M2
            | DType::F8E4M3FN
            | DType::F8E4M3B11FNUZ
            | DType::F8E5M2FNUZ
            | DType::F8E4M3FNUZ
            | DType::S4
            | DType::U4
            | DType::S2
            | DType::U2
            | DType::F8E4M3
            | DType::F8E3M4
            | DType::F8E8M0FNU
            | DType::F4E2M1FN
            | DType::F6E3M2FN
            | DType::F6E2M3FN => return None,
        };
        Some(cast)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(convert::<f32>(&HostValue::F32(1.5)), 1.5);
        assert_eq!(convert::<i64>(&HostValue::I64(-9)), -9);
        assert_eq!(convert::<f16>(&HostValue::F16(f16::from_f32(0.25))).to_f32(), 0.25);
    }

    #[test]
    fn test_narrowing_and_widening() {
        assert_eq!(convert::<i8>(&HostValue::I32(300)), 44);
        assert_eq!(convert::<u8>(&HostValue::I8(-1)), 255);
        assert_eq!(convert::<i32>(&HostValue::F64(-2.9)), -2);
        assert_eq!(convert::<f64>(&HostValue::U16(65535)), 65535.0);
        assert_eq!(convert::<f32>(&HostValue::BF16(bf16::from_f32(2.0))), 2.0);
    }

    #[test]
    fn test_complex_to_real_keeps_real_part() {
        let z = HostValue::C128(Complex::new(3.5, -7.0));
        assert_eq!(convert::<f64>(&z), 3.5);
        assert_eq!(convert::<i32>(&z), 3);
        assert_eq!(convert::<f16>(&z).to_f32(), 3.5);
    }

    #[test]
    fn test_real_to_complex() {
        let z: Complex<f32> = convert(&HostValue::I16(4));
        assert_eq!(z, Complex::new(4.0, 0.0));
        let z: Complex<f64> = convert(&HostValue::C64(Complex::new(1.0, 2.0)));
        assert_eq!(z, Complex::new(1.0, 2.0));
    }

    #[test]
    fn test_narrow_floats_route_through_f32() {
        let h: f16 = convert(&HostValue::F64(1.0e-3));
        assert_eq!(h, f16::from_f32(1.0e-3_f64 as f32));
        let b: bf16 = convert(&HostValue::I64(3));
        assert_eq!(b, bf16::from_f32(3.0));
    }

    #[test]
    fn test_unsupported_inputs_yield_zero() {
        assert_eq!(convert::<f32>(&HostValue::from("1.0")), 0.0);
        assert_eq!(convert::<u64>(&HostValue::Opaque("map")), 0);
        assert_eq!(convert::<i32>(&HostValue::Bool(true)), 0);
        assert!(!convert::<bool>(&HostValue::from("true")));
        assert_eq!(
            convert::<Complex<f64>>(&HostValue::Opaque("map")),
            Complex::default()
        );
    }

    #[test]
    fn test_bool_from_numbers() {
        assert!(convert::<bool>(&HostValue::I32(2)));
        assert!(!convert::<bool>(&HostValue::F64(0.0)));
        assert!(convert::<bool>(&HostValue::C64(Complex::new(0.0, 1.0))));
    }

    #[test]
    fn test_cast_dispatch() {
        let v = HostValue::F64(2.75);
        assert_eq!(v.cast(DType::Int16), Some(HostValue::I16(2)));
        assert_eq!(v.cast(DType::Float32), Some(HostValue::F32(2.75)));
        assert_eq!(
            v.cast(DType::Complex64),
            Some(HostValue::C64(Complex::new(2.75, 0.0)))
        );
        assert_eq!(v.cast(DType::Bool), Some(HostValue::Bool(true)));
        assert_eq!(v.cast(DType::F8E4M3FN), None);
        assert_eq!(v.cast(DType::S4), None);
        assert_eq!(v.cast(DType::Invalid), None);

        for dtype in DType::ALL {
            if let Some(cast) = v.cast(dtype) {
                assert_eq!(cast.dtype(), dtype);
            }
        }
    }

    #[test]
    fn test_element_dtype() {
        assert_eq!(f32::dtype(), DType::Float32);
        assert_eq!(bf16::dtype(), DType::BFloat16);
        assert_eq!(<Complex<f64>>::dtype(), DType::Complex128);
        assert_eq!(bool::dtype(), DType::Bool);
    }
}
