//! Transaction wire format serialization/deserialization
//!
//! Must match the network's serialization exactly: the transaction id is the
//! double hash of these bytes.

use super::varint::{varint_size, write_varint};
use super::{take, take_hash, take_u32, take_varint};
use crate::constants::{MIN_TX_INPUT_SIZE, MIN_TX_OUTPUT_SIZE, OUTPOINT_SIZE};
use crate::error::{GenesisError, Result};
use crate::types::*;
use std::borrow::Cow;

/// Error type for transaction parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionParseError {
    InsufficientBytes,
    InvalidInputCount,
    InvalidOutputCount,
    InvalidScriptLength,
    TrailingBytes,
}

impl std::fmt::Display for TransactionParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionParseError::InsufficientBytes => {
                write!(f, "Insufficient bytes to parse transaction")
            }
            TransactionParseError::InvalidInputCount => write!(f, "Invalid input count"),
            TransactionParseError::InvalidOutputCount => write!(f, "Invalid output count"),
            TransactionParseError::InvalidScriptLength => write!(f, "Invalid script length"),
            TransactionParseError::TrailingBytes => {
                write!(f, "Unexpected trailing bytes after transaction")
            }
        }
    }
}

impl std::error::Error for TransactionParseError {}

impl From<TransactionParseError> for GenesisError {
    fn from(err: TransactionParseError) -> Self {
        GenesisError::Format(Cow::Owned(err.to_string()))
    }
}

const SHORT: TransactionParseError = TransactionParseError::InsufficientBytes;

/// Exact serialized size of a transaction
pub fn serialized_size(tx: &Transaction) -> usize {
    4 + varint_size(tx.inputs.len() as u64)
        + tx
            .inputs
            .iter()
            .map(|i| OUTPOINT_SIZE + varint_size(i.script_sig.len() as u64) + i.script_sig.len() + 4)
            .sum::<usize>()
        + varint_size(tx.outputs.len() as u64)
        + tx
            .outputs
            .iter()
            .map(|o| 8 + varint_size(o.script_pubkey.len() as u64) + o.script_pubkey.len())
            .sum::<usize>()
        + 4
}

fn write_outpoint(out: &mut Vec<u8>, outpoint: &OutPoint) {
    out.extend_from_slice(&outpoint.hash);
    out.extend_from_slice(&outpoint.index.to_le_bytes());
}

fn write_input(out: &mut Vec<u8>, input: &TransactionInput) {
    write_outpoint(out, &input.prevout);
    write_varint(out, input.script_sig.len() as u64);
    out.extend_from_slice(&input.script_sig);
    out.extend_from_slice(&input.sequence.to_le_bytes());
}

fn write_output(out: &mut Vec<u8>, output: &TransactionOutput) {
    out.extend_from_slice(&output.value.to_le_bytes());
    write_varint(out, output.script_pubkey.len() as u64);
    out.extend_from_slice(&output.script_pubkey);
}

/// Serialize an outpoint: hash (32 bytes, as stored) then index (4 bytes LE)
pub fn serialize_outpoint(outpoint: &OutPoint) -> Vec<u8> {
    let mut result = Vec::with_capacity(OUTPOINT_SIZE);
    write_outpoint(&mut result, outpoint);
    result
}

/// Serialize an input: outpoint, VarInt script length, script, sequence (4 bytes LE)
pub fn serialize_transaction_input(input: &TransactionInput) -> Vec<u8> {
    let mut result = Vec::with_capacity(MIN_TX_INPUT_SIZE + input.script_sig.len() + 8);
    write_input(&mut result, input);
    result
}

/// Serialize an output: value (8 bytes LE), VarInt script length, script
pub fn serialize_transaction_output(output: &TransactionOutput) -> Vec<u8> {
    let mut result = Vec::with_capacity(MIN_TX_OUTPUT_SIZE + output.script_pubkey.len() + 8);
    write_output(&mut result, output);
    result
}

/// Append the wire encoding of `tx` to `out`
pub fn write_transaction(out: &mut Vec<u8>, tx: &Transaction) {
    out.extend_from_slice(&tx.version.to_le_bytes());

    write_varint(out, tx.inputs.len() as u64);
    for input in &tx.inputs {
        write_input(out, input);
    }

    write_varint(out, tx.outputs.len() as u64);
    for output in &tx.outputs {
        write_output(out, output);
    }

    out.extend_from_slice(&tx.lock_time.to_le_bytes());
}

/// Serialize a transaction to wire format
///
/// Format:
/// - Version (4 bytes, little-endian, signed)
/// - Input count (VarInt)
/// - For each input:
///   - Previous output hash (32 bytes)
///   - Previous output index (4 bytes, little-endian)
///   - Script length (VarInt)
///   - Script bytes
///   - Sequence (4 bytes, little-endian)
/// - Output count (VarInt)
/// - For each output:
///   - Value (8 bytes, little-endian, signed)
///   - Script length (VarInt)
///   - Script bytes
/// - Lock time (4 bytes, little-endian)
pub fn serialize_transaction(tx: &Transaction) -> Vec<u8> {
    let mut result = Vec::with_capacity(serialized_size(tx));
    write_transaction(&mut result, tx);
    debug_assert_eq!(result.len(), serialized_size(tx));
    result
}

fn read_outpoint(data: &[u8], offset: &mut usize) -> Result<OutPoint> {
    let hash = take_hash(data, offset, &SHORT)?;
    let index = take_u32(data, offset, &SHORT)?;
    Ok(OutPoint { hash, index })
}

fn read_script(data: &[u8], offset: &mut usize) -> Result<ByteString> {
    let len = take_varint(data, offset)?;
    let len = usize::try_from(len).map_err(|_| TransactionParseError::InvalidScriptLength)?;
    Ok(take(data, offset, len, &SHORT)?.to_vec())
}

/// Deserialize an outpoint (exactly 36 bytes)
pub fn deserialize_outpoint(data: &[u8]) -> Result<OutPoint> {
    let mut offset = 0;
    let outpoint = read_outpoint(data, &mut offset)?;
    if offset != data.len() {
        return Err(TransactionParseError::TrailingBytes.into());
    }
    Ok(outpoint)
}

/// Deserialize a transaction from the front of `data`
///
/// Returns the transaction and the number of bytes consumed; anything after
/// the lock time is left for the caller (e.g. the next transaction in a block).
pub fn deserialize_transaction_with_len(data: &[u8]) -> Result<(Transaction, usize)> {
    let mut offset = 0;

    let version = take_u32(data, &mut offset, &SHORT)? as i32;

    // Bound the count by what the remaining bytes could hold before allocating
    let input_count = take_varint(data, &mut offset)?;
    if input_count > ((data.len() - offset) / MIN_TX_INPUT_SIZE) as u64 {
        return Err(TransactionParseError::InvalidInputCount.into());
    }

    let mut inputs = Vec::with_capacity(input_count as usize);
    for _ in 0..input_count {
        let prevout = read_outpoint(data, &mut offset)?;
        let script_sig = read_script(data, &mut offset)?;
        let sequence = take_u32(data, &mut offset, &SHORT)?;
        inputs.push(TransactionInput {
            prevout,
            script_sig,
            sequence,
        });
    }

    let output_count = take_varint(data, &mut offset)?;
    if output_count > ((data.len() - offset) / MIN_TX_OUTPUT_SIZE) as u64 {
        return Err(TransactionParseError::InvalidOutputCount.into());
    }

    let mut outputs = Vec::with_capacity(output_count as usize);
    for _ in 0..output_count {
        let raw = take(data, &mut offset, 8, &SHORT)?;
        let mut value = [0u8; 8];
        value.copy_from_slice(raw);
        let script_pubkey = read_script(data, &mut offset)?;
        outputs.push(TransactionOutput {
            value: i64::from_le_bytes(value),
            script_pubkey,
        });
    }

    let lock_time = take_u32(data, &mut offset, &SHORT)?;

    Ok((
        Transaction {
            version,
            inputs,
            outputs,
            lock_time,
        },
        offset,
    ))
}

/// Deserialize a transaction that occupies all of `data`
pub fn deserialize_transaction(data: &[u8]) -> Result<Transaction> {
    let (tx, consumed) = deserialize_transaction_with_len(data)?;
    if consumed != data.len() {
        return Err(TransactionParseError::TrailingBytes.into());
    }
    Ok(tx)
}
