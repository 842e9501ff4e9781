//! Compact-size VarInt encoding/decoding
//!
//! VarInt is the length/count prefix used throughout the wire format.
//! It uses 1, 3, 5 or 9 bytes depending on the value.
//!
//! Encoding rules:
//! - If value < 0xfd: single byte
//! - If value <= 0xffff: 0xfd prefix + 2 bytes (little-endian)
//! - If value <= 0xffffffff: 0xfe prefix + 4 bytes (little-endian)
//! - Otherwise: 0xff prefix + 8 bytes (little-endian)
//!
//! Decoding accepts only the shortest form for each value.

use crate::error::{GenesisError, Result};
use std::borrow::Cow;

/// Error type for VarInt decoding failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VarIntError {
    /// Insufficient bytes to decode VarInt
    InsufficientBytes,
    /// Value encoded with a longer prefix than it needs
    NonCanonical,
}

impl std::fmt::Display for VarIntError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VarIntError::InsufficientBytes => write!(f, "Insufficient bytes to decode VarInt"),
            VarIntError::NonCanonical => write!(f, "Non-canonical VarInt encoding"),
        }
    }
}

impl std::error::Error for VarIntError {}

impl From<VarIntError> for GenesisError {
    fn from(err: VarIntError) -> Self {
        GenesisError::Format(Cow::Owned(err.to_string()))
    }
}

/// Number of bytes `encode_varint(value)` produces
#[inline]
pub fn varint_size(value: u64) -> usize {
    match value {
        0..=0xfc => 1,
        0xfd..=0xffff => 3,
        0x1_0000..=0xffff_ffff => 5,
        _ => 9,
    }
}

/// Encode a u64 value as a VarInt
///
/// # Examples
///
/// ```
/// use blvm_genesis::serialization::varint::encode_varint;
///
/// assert_eq!(encode_varint(0), vec![0]);
/// assert_eq!(encode_varint(252), vec![252]);
/// assert_eq!(encode_varint(253), vec![0xfd, 253, 0]);
/// assert_eq!(encode_varint(65535), vec![0xfd, 255, 255]);
/// assert_eq!(encode_varint(65536), vec![0xfe, 0, 0, 1, 0]);
/// ```
pub fn encode_varint(value: u64) -> Vec<u8> {
    let mut result = Vec::with_capacity(varint_size(value));
    write_varint(&mut result, value);
    result
}

/// Append the VarInt encoding of `value` to `out`
pub fn write_varint(out: &mut Vec<u8>, value: u64) {
    if value < 0xfd {
        out.push(value as u8);
    } else if value <= 0xffff {
        out.push(0xfd);
        out.extend_from_slice(&(value as u16).to_le_bytes());
    } else if value <= 0xffff_ffff {
        out.push(0xfe);
        out.extend_from_slice(&(value as u32).to_le_bytes());
    } else {
        out.push(0xff);
        out.extend_from_slice(&value.to_le_bytes());
    }
}

/// Decode a VarInt from bytes
///
/// Returns the decoded value and the number of bytes consumed.
///
/// # Errors
///
/// Returns a format error if the input is truncated or not minimally encoded.
///
/// # Examples
///
/// ```
/// use blvm_genesis::serialization::varint::decode_varint;
///
/// assert_eq!(decode_varint(&[0]), Ok((0, 1)));
/// assert_eq!(decode_varint(&[252]), Ok((252, 1)));
/// assert_eq!(decode_varint(&[0xfd, 253, 0]), Ok((253, 3)));
/// assert_eq!(decode_varint(&[0xfe, 0, 0, 1, 0]), Ok((65536, 5)));
/// assert!(decode_varint(&[]).is_err());
/// ```
pub fn decode_varint(data: &[u8]) -> Result<(u64, usize)> {
    let first_byte = *data.first().ok_or(VarIntError::InsufficientBytes)?;

    match first_byte {
        // Single byte encoding
        b if b < 0xfd => Ok((b as u64, 1)),

        // 2-byte encoding (0xfd prefix)
        0xfd => {
            let payload = data.get(1..3).ok_or(VarIntError::InsufficientBytes)?;
            let value = u16::from_le_bytes([payload[0], payload[1]]) as u64;

            // Values below 0xfd must use the single byte form
            if value < 0xfd {
                return Err(VarIntError::NonCanonical.into());
            }
            Ok((value, 3))
        }

        // 4-byte encoding (0xfe prefix)
        0xfe => {
            let payload = data.get(1..5).ok_or(VarIntError::InsufficientBytes)?;
            let value =
                u32::from_le_bytes([payload[0], payload[1], payload[2], payload[3]]) as u64;

            if value <= 0xffff {
                return Err(VarIntError::NonCanonical.into());
            }
            Ok((value, 5))
        }

        // 8-byte encoding (0xff prefix)
        _ => {
            let payload = data.get(1..9).ok_or(VarIntError::InsufficientBytes)?;
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(payload);
            let value = u64::from_le_bytes(bytes);

            if value <= 0xffff_ffff {
                return Err(VarIntError::NonCanonical.into());
            }
            Ok((value, 9))
        }
    }
}
