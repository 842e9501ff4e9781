//! Merkle root computation
//!
//! Tree rule: hash each transaction, then repeatedly pair adjacent hashes left
//! to right. An odd level pairs its last hash with itself. Each parent is the
//! double hash of the 64-byte concatenation `left || right`.

use crate::crypto::double_sha256;
use crate::error::{GenesisError, Result};
use crate::transaction::calculate_tx_id;
use crate::types::*;

/// Calculate the Merkle root of a block's transactions
///
/// For a single transaction the root is that transaction's id.
///
/// # Errors
///
/// An empty transaction list has no root and is rejected as an invalid block.
pub fn calculate_merkle_root(transactions: &[Transaction]) -> Result<Hash> {
    if transactions.is_empty() {
        return Err(empty_tree());
    }

    #[cfg(feature = "rayon")]
    let tx_ids: Vec<Hash> = {
        use rayon::prelude::*;
        transactions.par_iter().map(calculate_tx_id).collect()
    };

    #[cfg(not(feature = "rayon"))]
    let tx_ids: Vec<Hash> = transactions.iter().map(calculate_tx_id).collect();

    Ok(merkle_tree_from_hashes(tx_ids).0)
}

/// Calculate the Merkle root from precomputed transaction ids
pub fn calculate_merkle_root_from_tx_ids(tx_ids: &[Hash]) -> Result<Hash> {
    if tx_ids.is_empty() {
        return Err(empty_tree());
    }
    Ok(merkle_tree_from_hashes(tx_ids.to_vec()).0)
}

/// Calculate the Merkle root and report whether the tree is mutated
///
/// The flag is set when any level holds two identical hashes in the same
/// pair (CVE-2012-2459). Such a tree has the same root as a shorter,
/// different transaction list, so validators should reject the block. The
/// root itself is computed exactly as [`calculate_merkle_root_from_tx_ids`].
pub fn calculate_merkle_root_with_mutation(tx_ids: &[Hash]) -> Result<(Hash, bool)> {
    if tx_ids.is_empty() {
        return Err(empty_tree());
    }
    Ok(merkle_tree_from_hashes(tx_ids.to_vec()))
}

fn empty_tree() -> GenesisError {
    GenesisError::InvalidBlock("Cannot calculate merkle root for empty transaction list".into())
}

/// Core tree building. Returns the root and the mutation flag.
fn merkle_tree_from_hashes(mut hashes: Vec<Hash>) -> (Hash, bool) {
    debug_assert!(!hashes.is_empty());
    let mut mutated = false;

    while hashes.len() > 1 {
        for pair in hashes.chunks_exact(2) {
            if pair[0] == pair[1] {
                mutated = true;
            }
        }

        // Duplicate last hash if odd number of hashes
        if hashes.len() & 1 != 0 {
            hashes.push(hashes[hashes.len() - 1]);
        }

        // Stack-allocated 64-byte buffer for combining hash pairs
        hashes = hashes
            .chunks_exact(2)
            .map(|pair| {
                let mut combined = [0u8; 64];
                combined[..32].copy_from_slice(&pair[0]);
                combined[32..].copy_from_slice(&pair[1]);
                double_sha256(&combined)
            })
            .collect();
    }

    (hashes[0], mutated)
}
