//! Canonical wire format serialization/deserialization
//!
//! Every byte that feeds a consensus hash is produced here. All integers are
//! little-endian; hashes are written exactly as stored, never reversed.

pub mod block;
pub mod transaction;
pub mod varint;

pub use block::{
    deserialize_block, deserialize_block_header, serialize_block, serialize_block_header,
};
pub use transaction::{
    deserialize_outpoint, deserialize_transaction, deserialize_transaction_with_len,
    serialize_outpoint, serialize_transaction, serialize_transaction_input,
    serialize_transaction_output,
};
pub use varint::{decode_varint, encode_varint, VarIntError};

use crate::error::{GenesisError, Result};
use std::borrow::Cow;

/// Take `len` bytes at `*offset`, advancing the offset.
///
/// `on_short` describes the error when the buffer ends early.
#[inline]
pub(crate) fn take<'a>(
    data: &'a [u8],
    offset: &mut usize,
    len: usize,
    on_short: &dyn std::fmt::Display,
) -> Result<&'a [u8]> {
    let end = offset
        .checked_add(len)
        .filter(|end| *end <= data.len())
        .ok_or_else(|| GenesisError::Format(Cow::Owned(on_short.to_string())))?;
    let bytes = &data[*offset..end];
    *offset = end;
    Ok(bytes)
}

#[inline]
pub(crate) fn take_u32(
    data: &[u8],
    offset: &mut usize,
    on_short: &dyn std::fmt::Display,
) -> Result<u32> {
    let b = take(data, offset, 4, on_short)?;
    Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

#[inline]
pub(crate) fn take_hash(
    data: &[u8],
    offset: &mut usize,
    on_short: &dyn std::fmt::Display,
) -> Result<crate::types::Hash> {
    let mut hash = [0u8; 32];
    hash.copy_from_slice(take(data, offset, 32, on_short)?);
    Ok(hash)
}

/// Decode a VarInt at `*offset`, advancing the offset.
#[inline]
pub(crate) fn take_varint(data: &[u8], offset: &mut usize) -> Result<u64> {
    let (value, len) = varint::decode_varint(&data[*offset..])?;
    *offset += len;
    Ok(value)
}
