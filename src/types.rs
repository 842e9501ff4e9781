//! Core block and transaction types
//!
//! Field widths match the wire format exactly, so every value of these types
//! survives a serialize/deserialize round trip unchanged.

use serde::{Deserialize, Serialize};

/// Hash type: 256-bit hash, stored in the byte order produced by hashing
pub type Hash = [u8; 32];

/// Byte string type
pub type ByteString = Vec<u8>;

/// The all-zero hash used as the previous-block hash of every genesis block
/// and as the prevout hash of coinbase inputs.
pub const ZERO_HASH: Hash = [0u8; 32];

/// OutPoint: 𝒪 = ℍ × ℕ₃₂
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    pub hash: Hash,
    pub index: u32,
}

impl OutPoint {
    /// The outpoint carried by a coinbase input: zero hash, sentinel index.
    pub const fn null() -> Self {
        OutPoint {
            hash: ZERO_HASH,
            index: crate::constants::COINBASE_PREVOUT_INDEX,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.hash == ZERO_HASH && self.index == crate::constants::COINBASE_PREVOUT_INDEX
    }
}

/// Transaction Input: ℐ = 𝒪 × 𝕊 × ℕ₃₂
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub prevout: OutPoint,
    pub script_sig: ByteString,
    pub sequence: u32,
}

/// Transaction Output: 𝒯 = ℤ₆₄ × 𝕊
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
    pub value: i64,
    pub script_pubkey: ByteString,
}

/// Transaction: 𝒯𝒳 = ℤ₃₂ × ℐ* × 𝒯* × ℕ₃₂
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub lock_time: u32,
}

/// Block Header: ℋ = ℤ₃₂ × ℍ × ℍ × ℕ₃₂ × ℕ₃₂ × ℕ₃₂
///
/// `Copy` so that the per-network genesis headers can be `const` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block_hash: Hash,
    pub merkle_root: Hash,
    /// Unix seconds
    pub timestamp: u32,
    /// Compact difficulty target, stored opaquely
    pub bits: u32,
    pub nonce: u32,
}

/// Block: ℬ = ℋ × 𝒯𝒳*
///
/// The first transaction must be the coinbase; see
/// [`crate::block::check_block_structure`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}
