//! Codec - Binary and JSON Encoding of Array Types
//!
//! The binary form is `bincode`: the element kind tag (`u32`, little endian)
//! followed by the axis lengths (`u64` count, then one `u64` per axis). Every
//! constructible array type round-trips exactly, and decoding applies the
//! same validation as construction.
//!
//! With the `json` feature, array types also render to and parse from JSON,
//! e.g. `{"dtype":"Float32","axis_lengths":[2,3]}`.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use atype_core::error::{Error, Result};

use crate::array_type::ArrayType;

// =============================================================================
// Binary
// =============================================================================

impl ArrayType {
    /// Encodes this array type to bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| self.encode_error(&e))
    }

    /// Decodes an array type from bytes produced by [`ArrayType::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| decode_error(&e))
    }

    /// Writes the binary form of this array type to a stream.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        bincode::serialize_into(writer, self).map_err(|e| self.encode_error(&e))
    }

    /// Reads one array type in binary form from a stream.
    pub fn read_from<R: Read>(reader: R) -> Result<Self> {
        bincode::deserialize_from(reader).map_err(|e| decode_error(&e))
    }

    /// Saves the binary form of this array type to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref()).map_err(|e| self.encode_error(&e))?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush().map_err(|e| self.encode_error(&e))
    }

    /// Loads an array type saved by [`ArrayType::save`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref()).map_err(|e| decode_error(&e))?;
        Self::read_from(BufReader::new(file))
    }

    fn encode_error(&self, err: &dyn std::fmt::Display) -> Error {
        Error::Encode {
            array_type: self.to_string(),
            message: err.to_string(),
        }
    }
}

fn decode_error(err: &dyn std::fmt::Display) -> Error {
    tracing::debug!(error = %err, "array type decoding failed");
    Error::decode(err.to_string())
}

// =============================================================================
// JSON
// =============================================================================

#[cfg(feature = "json")]
impl ArrayType {
    /// Renders this array type as JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| self.encode_error(&e))
    }

    /// Parses an array type rendered by [`ArrayType::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| decode_error(&e))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use atype_core::DType;

    fn samples() -> Vec<ArrayType> {
        vec![
            ArrayType::invalid(),
            ArrayType::scalar_of(DType::Bool),
            ArrayType::new(DType::Float32, &[2, 3]),
            ArrayType::new(DType::Complex128, &[1, 0, 7]),
            ArrayType::new(DType::F4E2M1FN, &[1, 2, 3, 4, 5, 6, 7, 8]),
        ]
    }

    #[test]
    fn test_binary_layout() {
        let at = ArrayType::new(DType::Float32, &[2, 3]);
        let bytes = at.encode().unwrap();
        let mut want = Vec::new();
        want.extend_from_slice(&11u32.to_le_bytes());
        want.extend_from_slice(&2u64.to_le_bytes());
        want.extend_from_slice(&2u64.to_le_bytes());
        want.extend_from_slice(&3u64.to_le_bytes());
        assert_eq!(bytes, want);
    }

    #[test]
    fn test_decode_inverts_encode() {
        for at in samples() {
            let bytes = at.encode().unwrap();
            let decoded = ArrayType::decode(&bytes).unwrap();
            assert!(decoded.equal(&at), "{at}");
        }
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        let err = ArrayType::decode(&[11, 0]).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));

        let mut bytes = ArrayType::scalar_of(DType::Int8).encode().unwrap();
        bytes[0] = 200;
        assert!(ArrayType::decode(&bytes).is_err());
    }

    #[test]
    fn test_decode_rejects_overflowing_lengths() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&11u32.to_le_bytes());
        bytes.extend_from_slice(&2u64.to_le_bytes());
        bytes.extend_from_slice(&(1u64 << 33).to_le_bytes());
        bytes.extend_from_slice(&(1u64 << 33).to_le_bytes());

        let err = ArrayType::decode(&bytes).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
        assert!(err.to_string().contains("element count overflows"));
        assert!(ArrayType::read_from(bytes.as_slice()).is_err());
    }

    #[test]
    fn test_stream_sequence() {
        let mut buffer = Vec::new();
        for at in samples() {
            at.write_to(&mut buffer).unwrap();
        }
        let mut reader = buffer.as_slice();
        for at in samples() {
            assert_eq!(ArrayType::read_from(&mut reader).unwrap(), at);
        }
        assert!(reader.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = ArrayType::load("/nonexistent/array_type.bin").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json() {
        let at = ArrayType::new(DType::Int16, &[4, 1]);
        let json = at.to_json().unwrap();
        assert_eq!(json, r#"{"dtype":"Int16","axis_lengths":[4,1]}"#);
        assert_eq!(ArrayType::from_json(&json).unwrap(), at);

        assert!(ArrayType::from_json(r#"{"dtype":"Nope","axis_lengths":[]}"#).is_err());

        let huge = format!(r#"{{"dtype":"Float32","axis_lengths":[{0},{0}]}}"#, 1u64 << 33);
        let err = ArrayType::from_json(&huge).unwrap_err();
        assert!(err.to_string().contains("element count overflows"));
    }
}
