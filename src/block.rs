//! Block hashing and structural checks

use crate::crypto::double_sha256;
use crate::error::{GenesisError, Result};
use crate::serialization::block::serialize_block_header;
use crate::transaction::is_coinbase;
use crate::types::*;

/// Calculate block hash: SHA256(SHA256(80-byte header))
#[inline]
pub fn calculate_block_hash(header: &BlockHeader) -> Hash {
    double_sha256(&serialize_block_header(header))
}

/// Check the transaction layout every block must have
///
/// - at least one transaction
/// - the first transaction is a coinbase
/// - no other transaction is a coinbase
pub fn check_block_structure(block: &Block) -> Result<()> {
    let first = block
        .transactions
        .first()
        .ok_or_else(|| GenesisError::InvalidBlock("Block has no transactions".into()))?;

    if !is_coinbase(first) {
        return Err(GenesisError::InvalidBlock(
            "First transaction is not a coinbase".into(),
        ));
    }

    if let Some(pos) = block.transactions[1..].iter().position(is_coinbase) {
        return Err(GenesisError::InvalidBlock(
            format!("Transaction {} is a second coinbase", pos + 1).into(),
        ));
    }

    Ok(())
}
