//! Hash primitives
//!
//! Every identifier in the chain is SHA256(SHA256(bytes)). The `sha2` crate is
//! the only implementation used, pinned to an exact version in Cargo.toml.

use crate::error::{GenesisError, Result};
use crate::types::Hash;
use sha2::{Digest, Sha256};
use std::borrow::Cow;

/// Double SHA256 hasher
///
/// Stateless; exists so callers can hold a hasher value the way they hold
/// other engines, and so benchmarks can compare it against raw `sha2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleSha256;

impl DoubleSha256 {
    pub fn new() -> Self {
        Self
    }

    /// Single SHA256
    pub fn hash(&self, data: &[u8]) -> Hash {
        let digest = Sha256::digest(data);
        let mut result = [0u8; 32];
        result.copy_from_slice(&digest);
        result
    }

    /// SHA256(SHA256(data))
    pub fn hash256(&self, data: &[u8]) -> Hash {
        let first = Sha256::digest(data);
        let second = Sha256::digest(first);
        let mut result = [0u8; 32];
        result.copy_from_slice(&second);
        result
    }
}

/// Convenience function for single SHA256 hash
#[inline]
pub fn sha256(data: &[u8]) -> Hash {
    DoubleSha256::new().hash(data)
}

/// Double SHA256: the hash behind transaction ids, block hashes and Merkle nodes
#[inline]
pub fn double_sha256(data: &[u8]) -> Hash {
    DoubleSha256::new().hash256(data)
}

/// Render a hash in display order (bytes reversed, lowercase hex)
///
/// ```
/// let mut hash = [0u8; 32];
/// hash[0] = 0x6a;
/// let shown = blvm_genesis::crypto::hash_to_hex(&hash);
/// assert!(shown.ends_with("6a"));
/// ```
pub fn hash_to_hex(hash: &Hash) -> String {
    let mut reversed = *hash;
    reversed.reverse();
    hex::encode(reversed)
}

/// Parse a display-order hex string back into a stored-order hash
pub fn hash_from_hex(s: &str) -> Result<Hash> {
    let mut hash = [0u8; 32];
    hex::decode_to_slice(s, &mut hash)
        .map_err(|e| GenesisError::Format(Cow::Owned(format!("Invalid hash hex: {e}"))))?;
    hash.reverse();
    Ok(hash)
}
