//! Data Types - Element Kinds for Array Types
//!
//! Defines the closed set of element kinds an array type can carry, together
//! with their bit widths, storage sizes and the canonical/alias name table.
//! The numbering of the tags is stable: it is what gets written by the binary
//! encoding of an array type.
//!
//! # Key Features
//! - Runtime element kind via the `DType` enum, with an explicit invalid tag 0
//! - Booleans, signed/unsigned integers, IEEE floats, truncated floats, complex
//! - 8-bit float, sub-byte integer and microscaling float kinds
//! - Case-insensitive lookup by canonical name or short alias
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// =============================================================================
// DType Enum
// =============================================================================

/// Runtime representation of the element kind of an array.
///
/// The discriminant of each variant is its wire tag; variants are declared in
/// tag order so that serde's variant index matches the tag as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum DType {
    /// Invalid element kind, the "zero value" of `DType`.
    Invalid = 0,
    /// Boolean value, stored as one byte.
    Bool = 1,
    /// 8-bit signed integer.
    Int8 = 2,
    /// 16-bit signed integer.
    Int16 = 3,
    /// 32-bit signed integer.
    Int32 = 4,
    /// 64-bit signed integer.
    Int64 = 5,
    /// 8-bit unsigned integer.
    Uint8 = 6,
    /// 16-bit unsigned integer.
    Uint16 = 7,
    /// 32-bit unsigned integer.
    Uint32 = 8,
    /// 64-bit unsigned integer.
    Uint64 = 9,
    /// 16-bit floating point (IEEE half precision).
    Float16 = 10,
    /// 32-bit floating point (single precision).
    Float32 = 11,
    /// 64-bit floating point (double precision).
    Float64 = 12,
    /// Truncated 16-bit float: 1 sign bit, 8 exponent bits, 7 mantissa bits.
    BFloat16 = 13,
    /// Complex number made of two 32-bit floats (real, imaginary).
    Complex64 = 14,
    /// Complex number made of two 64-bit floats (real, imaginary).
    Complex128 = 15,
    /// 8-bit float E5M2 ("FP8 Formats for Deep Learning").
    F8E5M2 = 16,
    /// 8-bit float E4M3, finite only ("FP8 Formats for Deep Learning").
    F8E4M3FN = 17,
    /// 8-bit float E4M3 with exponent bias 11 (HFP8).
    F8E4M3B11FNUZ = 18,
    /// 8-bit float E5M2, finite, unsigned zero.
    F8E5M2FNUZ = 19,
    /// 8-bit float E4M3, finite, unsigned zero.
    F8E4M3FNUZ = 20,
    /// 4-bit signed integer.
    S4 = 21,
    /// 4-bit unsigned integer.
    U4 = 22,
    /// 2-bit signed integer.
    S2 = 23,
    /// 2-bit unsigned integer.
    U2 = 24,
    /// 8-bit float with 4 exponent and 3 mantissa bits, IEEE-754 conventions.
    F8E4M3 = 25,
    /// 8-bit float with 3 exponent and 4 mantissa bits, IEEE-754 conventions.
    F8E3M4 = 26,
    /// OCP microscaling 8-bit exponent-only scale.
    F8E8M0FNU = 27,
    /// OCP microscaling 4-bit float.
    F4E2M1FN = 28,
    /// OCP microscaling 6-bit float, 3 exponent bits.
    F6E3M2FN = 29,
    /// OCP microscaling 6-bit float, 2 exponent bits.
    F6E2M3FN = 30,
}

impl DType {
    /// Every element kind, in tag order.
    pub const ALL: [DType; 31] = [
        Self::Invalid,
        Self::Bool,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Uint8,
        Self::Uint16,
        Self::Uint32,
        Self::Uint64,
        Self::Float16,
        Self::Float32,
        Self::Float64,
        Self::BFloat16,
        Self::Complex64,
        Self::Complex128,
        Self::F8E5M2,
        Self::F8E4M3FN,
        Self::F8E4M3B11FNUZ,
        Self::F8E5M2FNUZ,
        Self::F8E4M3FNUZ,
        Self::S4,
        Self::U4,
        Self::S2,
        Self::U2,
        Self::F8E4M3,
        Self::F8E3M4,
        Self::F8E8M0FNU,
        Self::F4E2M1FN,
        Self::F6E3M2FN,
        Self::F6E2M3FN,
    ];

    /// Widest element, in bits (`Complex128`).
    pub const MAX_BITS: usize = 128;

    /// Returns the wire tag of this element kind.
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Looks up an element kind by its wire tag.
    #[must_use]
    pub fn from_tag(tag: u8) -> Option<Self> {
        Self::ALL.get(tag as usize).copied()
    }

    /// Returns true unless this is `DType::Invalid`.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        !matches!(self, Self::Invalid)
    }

    /// Returns the number of bits used by one element.
    #[must_use]
    pub const fn bits(self) -> usize {
        match self {
            Self::Invalid => 0,
            Self::S2 | Self::U2 => 2,
            Self::S4 | Self::U4 | Self::F4E2M1FN => 4,
            Self::F6E3M2FN | Self::F6E2M3FN => 6,
            Self::Bool
            | Self::Int8
            | Self::Uint8
            | Self::F8E5M2
            | Self::F8E4M3FN
            | Self::F8E4M3B11FNUZ
            | Self::F8E5M2FNUZ
            | Self::F8E4M3FNUZ
            | Self::F8E4M3
            | Self::F8E3M4
            | Self::F8E8M0FNU => 8,
            Self::Int16 | Self::Uint16 | Self::Float16 | Self::BFloat16 => 16,
            Self::Int32 | Self::Uint32 | Self::Float32 => 32,
            Self::Int64 | Self::Uint64 | Self::Float64 | Self::Complex64 => 64,
            Self::Complex128 => 128,
        }
    }

    /// Returns the size in bytes of a single element stored on its own.
    ///
    /// Sub-byte kinds occupy a whole byte when stored alone; use
    /// [`DType::storage_bytes`] for packed runs of elements.
    #[must_use]
    pub const fn size_of(self) -> usize {
        self.bits().div_ceil(8)
    }

    /// Number of bytes needed to store `count` packed elements of this kind.
    ///
    /// Elements are packed bit-contiguously, so this is
    /// `ceil(bits * count / 8)`. For byte-aligned kinds it equals
    /// `size_of() * count`.
    #[must_use]
    pub const fn storage_bytes(self, count: usize) -> usize {
        (self.bits() * count).div_ceil(8)
    }

    /// Returns true for kinds narrower than one byte.
    #[must_use]
    pub const fn is_sub_byte(self) -> bool {
        self.is_valid() && self.bits() < 8
    }

    /// Returns true if this is a real floating point kind, of any width.
    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(
            self,
            Self::Float16
                | Self::Float32
                | Self::Float64
                | Self::BFloat16
                | Self::F8E5M2
                | Self::F8E4M3FN
                | Self::F8E4M3B11FNUZ
                | Self::F8E5M2FNUZ
                | Self::F8E4M3FNUZ
                | Self::F8E4M3
                | Self::F8E3M4
                | Self::F8E8M0FNU
                | Self::F4E2M1FN
                | Self::F6E3M2FN
                | Self::F6E2M3FN
        )
    }

    /// Returns true if this is an integer kind, of any width or signedness.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::Uint8
                | Self::Uint16
                | Self::Uint32
                | Self::Uint64
                | Self::S4
                | Self::U4
                | Self::S2
                | Self::U2
        )
    }

    /// Returns true for unsigned integer kinds.
    #[must_use]
    pub const fn is_unsigned(self) -> bool {
        matches!(
            self,
            Self::Uint8 | Self::Uint16 | Self::Uint32 | Self::Uint64 | Self::U4 | Self::U2
        )
    }

    /// Returns true if values of this kind can be negative.
    #[must_use]
    pub const fn is_signed(self) -> bool {
        (self.is_integer() && !self.is_unsigned()) || self.is_float() || self.is_complex()
    }

    /// Returns true for the complex kinds.
    #[must_use]
    pub const fn is_complex(self) -> bool {
        matches!(self, Self::Complex64 | Self::Complex128)
    }

    /// Returns the canonical name of this element kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Invalid => "InvalidDType",
            Self::Bool => "Bool",
            Self::Int8 => "Int8",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Uint8 => "Uint8",
            Self::Uint16 => "Uint16",
            Self::Uint32 => "Uint32",
            Self::Uint64 => "Uint64",
            Self::Float16 => "Float16",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::BFloat16 => "BFloat16",
            Self::Complex64 => "Complex64",
            Self::Complex128 => "Complex128",
            Self::F8E5M2 => "F8E5M2",
            Self::F8E4M3FN => "F8E4M3FN",
            Self::F8E4M3B11FNUZ => "F8E4M3B11FNUZ",
            Self::F8E5M2FNUZ => "F8E5M2FNUZ",
            Self::F8E4M3FNUZ => "F8E4M3FNUZ",
            Self::S4 => "S4",
            Self::U4 => "U4",
            Self::S2 => "S2",
            Self::U2 => "U2",
            Self::F8E4M3 => "F8E4M3",
            Self::F8E3M4 => "F8E3M4",
            Self::F8E8M0FNU => "F8E8M0FNU",
            Self::F4E2M1FN => "F4E2M1FN",
            Self::F6E3M2FN => "F6E3M2FN",
            Self::F6E2M3FN => "F6E2M3FN",
        }
    }

    /// Returns the short aliases accepted for this element kind.
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Invalid => &["INVALID"],
            Self::Bool => &["PRED"],
            Self::Int8 => &["S8"],
            Self::Int16 => &["S16"],
            Self::Int32 => &["S32"],
            Self::Int64 => &["S64"],
            Self::Uint8 => &["U8"],
            Self::Uint16 => &["U16"],
            Self::Uint32 => &["U32"],
            Self::Uint64 => &["U64"],
            Self::Float16 => &["F16"],
            Self::Float32 => &["F32"],
            Self::Float64 => &["F64"],
            Self::BFloat16 => &["BF16"],
            Self::Complex64 => &["C64"],
            Self::Complex128 => &["C128"],
            _ => &[],
        }
    }

    /// Looks up an element kind by canonical name or alias, ignoring case.
    ///
    /// Returns `None` for unknown names; [`DType::from_str`] returns an error
    /// instead.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.iter().copied().find(|dtype| {
            dtype.name().eq_ignore_ascii_case(name)
                || dtype
                    .aliases()
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(name))
        })
    }
}

impl Default for DType {
    fn default() -> Self {
        Self::Invalid
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| Error::UnknownDType {
            name: s.to_string(),
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
