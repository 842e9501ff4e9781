//! Block header and block wire format serialization/deserialization
//!
//! The block hash is the double hash of the 80 header bytes produced here.

use super::transaction::{deserialize_transaction_with_len, write_transaction};
use super::varint::write_varint;
use super::{take_hash, take_u32, take_varint};
use crate::constants::{BLOCK_HEADER_SIZE, MIN_TX_SIZE};
use crate::error::{GenesisError, Result};
use crate::types::*;
use std::borrow::Cow;

/// Error type for block parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockParseError {
    InsufficientBytes,
    InvalidTransactionCount,
    TrailingBytes,
}

impl std::fmt::Display for BlockParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockParseError::InsufficientBytes => {
                write!(f, "Insufficient bytes to parse block header")
            }
            BlockParseError::InvalidTransactionCount => write!(f, "Invalid transaction count"),
            BlockParseError::TrailingBytes => write!(f, "Unexpected trailing bytes after block"),
        }
    }
}

impl std::error::Error for BlockParseError {}

impl From<BlockParseError> for GenesisError {
    fn from(err: BlockParseError) -> Self {
        GenesisError::Format(Cow::Owned(err.to_string()))
    }
}

/// Serialize a block header to wire format
///
/// Block header is exactly 80 bytes:
/// - Version (4 bytes, little-endian, signed)
/// - Previous block hash (32 bytes, as stored)
/// - Merkle root (32 bytes, as stored)
/// - Timestamp (4 bytes, little-endian)
/// - Bits (4 bytes, little-endian)
/// - Nonce (4 bytes, little-endian)
pub fn serialize_block_header(header: &BlockHeader) -> [u8; BLOCK_HEADER_SIZE] {
    let mut result = [0u8; BLOCK_HEADER_SIZE];
    result[0..4].copy_from_slice(&header.version.to_le_bytes());
    result[4..36].copy_from_slice(&header.prev_block_hash);
    result[36..68].copy_from_slice(&header.merkle_root);
    result[68..72].copy_from_slice(&header.timestamp.to_le_bytes());
    result[72..76].copy_from_slice(&header.bits.to_le_bytes());
    result[76..80].copy_from_slice(&header.nonce.to_le_bytes());
    result
}

/// Deserialize a block header from the first 80 bytes of `data`
///
/// Bytes past the header are ignored; a block body usually follows.
pub fn deserialize_block_header(data: &[u8]) -> Result<BlockHeader> {
    if data.len() < BLOCK_HEADER_SIZE {
        return Err(BlockParseError::InsufficientBytes.into());
    }

    let short = BlockParseError::InsufficientBytes;
    let mut offset = 0;

    let version = take_u32(data, &mut offset, &short)? as i32;
    let prev_block_hash = take_hash(data, &mut offset, &short)?;
    let merkle_root = take_hash(data, &mut offset, &short)?;
    let timestamp = take_u32(data, &mut offset, &short)?;
    let bits = take_u32(data, &mut offset, &short)?;
    let nonce = take_u32(data, &mut offset, &short)?;
    debug_assert_eq!(offset, BLOCK_HEADER_SIZE);

    Ok(BlockHeader {
        version,
        prev_block_hash,
        merkle_root,
        timestamp,
        bits,
        nonce,
    })
}

/// Serialize a complete block to wire format
///
/// Format:
/// - Block header (80 bytes)
/// - VarInt: transaction count
/// - Each transaction in order
pub fn serialize_block(block: &Block) -> Vec<u8> {
    let body: usize = block
        .transactions
        .iter()
        .map(super::transaction::serialized_size)
        .sum();
    let mut result = Vec::with_capacity(BLOCK_HEADER_SIZE + 9 + body);

    result.extend_from_slice(&serialize_block_header(&block.header));
    write_varint(&mut result, block.transactions.len() as u64);
    for tx in &block.transactions {
        write_transaction(&mut result, tx);
    }

    result
}

/// Deserialize a complete block; `data` must contain exactly one block
pub fn deserialize_block(data: &[u8]) -> Result<Block> {
    let header = deserialize_block_header(data)?;
    let mut offset = BLOCK_HEADER_SIZE;

    let tx_count = take_varint(data, &mut offset)?;
    if tx_count == 0 || tx_count > ((data.len() - offset) / MIN_TX_SIZE) as u64 {
        return Err(BlockParseError::InvalidTransactionCount.into());
    }

    let mut transactions = Vec::with_capacity(tx_count as usize);
    for _ in 0..tx_count {
        let (tx, consumed) = deserialize_transaction_with_len(&data[offset..])?;
        offset += consumed;
        transactions.push(tx);
    }

    if offset != data.len() {
        return Err(BlockParseError::TrailingBytes.into());
    }

    Ok(Block {
        header,
        transactions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_header() -> BlockHeader {
        BlockHeader {
            version: 1,
            prev_block_hash: [1; 32],
            merkle_root: [2; 32],
            timestamp: 1234567890,
            bits: 0x1d00ffff,
            nonce: 0x12345678,
        }
    }

    #[test]
    fn test_serialize_deserialize_block_header() {
        let header = sample_header();

        let serialized = serialize_block_header(&header);
        assert_eq!(serialized.len(), 80);

        let deserialized = deserialize_block_header(&serialized).unwrap();
        assert_eq!(deserialized, header);
    }

    #[test]
    fn test_deserialize_block_header_insufficient_bytes() {
        let data = vec![0u8; 79];
        assert_eq!(
            deserialize_block_header(&data),
            Err(BlockParseError::InsufficientBytes.into())
        );
    }

    #[test]
    fn test_block_round_trip() {
        let tx = Transaction {
            version: 1,
            inputs: vec![TransactionInput {
                prevout: OutPoint::null(),
                script_sig: vec![0x04, 0xff, 0xff, 0x00, 0x1d],
                sequence: 0xffffffff,
            }],
            outputs: vec![TransactionOutput {
                value: 50,
                script_pubkey: vec![0x51],
            }],
            lock_time: 0,
        };
        let block = Block {
            header: sample_header(),
            transactions: vec![tx.clone(), tx],
        };

        let bytes = serialize_block(&block);
        assert_eq!(&bytes[..80], &serialize_block_header(&block.header));
        assert_eq!(bytes[80], 2);
        assert_eq!(deserialize_block(&bytes).unwrap(), block);
    }

    #[test]
    fn test_deserialize_block_without_transactions() {
        let mut bytes = serialize_block_header(&sample_header()).to_vec();
        bytes.push(0);
        assert_eq!(
            deserialize_block(&bytes),
            Err(BlockParseError::InvalidTransactionCount.into())
        );
    }
}
