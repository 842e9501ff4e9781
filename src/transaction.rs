//! Transaction classification

use crate::crypto::double_sha256;
use crate::serialization::transaction::serialize_transaction;
use crate::types::*;

/// Check if transaction is coinbase
///
/// A coinbase has exactly one input, and that input's prevout is the null
/// outpoint (zero hash, index 0xffffffff).
#[inline]
pub fn is_coinbase(tx: &Transaction) -> bool {
    tx.inputs.len() == 1 && tx.inputs[0].prevout.is_null()
}

/// Calculate transaction ID
///
/// Transaction ID is SHA256(SHA256(serialized_tx)) where serialized_tx is the
/// transaction in wire format.
#[inline]
pub fn calculate_tx_id(tx: &Transaction) -> Hash {
    double_sha256(&serialize_transaction(tx))
}
