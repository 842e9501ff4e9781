//! Error types for genesis serialization and verification

use crate::network::Network;
use crate::types::Hash;
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Which recomputed value disagreed with the recorded genesis parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchField {
    /// Merkle root recomputed from the transaction set
    MerkleRoot,
    /// Double hash of the assembled header
    BlockHash,
    /// Merkle root stored in the header table itself
    HeaderMerkleRoot,
}

impl MismatchField {
    pub fn as_str(self) -> &'static str {
        match self {
            MismatchField::MerkleRoot => "merkle_root",
            MismatchField::BlockHash => "block_hash",
            MismatchField::HeaderMerkleRoot => "header_merkle_root",
        }
    }
}

impl fmt::Display for MismatchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum GenesisError {
    #[error("Format error: {0}")]
    Format(Cow<'static, str>),

    #[error("Invalid block: {0}")]
    InvalidBlock(Cow<'static, str>),

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error(
        "Consensus mismatch on {network} genesis {field}: expected {}, computed {}",
        crate::crypto::hash_to_hex(.expected),
        crate::crypto::hash_to_hex(.computed)
    )]
    ConsensusMismatch {
        network: Network,
        field: MismatchField,
        expected: Hash,
        computed: Hash,
    },

    #[error("Invalid configuration: {0}")]
    Config(Cow<'static, str>),
}

impl GenesisError {
    /// A genesis mismatch means the build or its tables are wrong; the node
    /// must not continue. Everything else is local to the caller.
    pub fn is_fatal(&self) -> bool {
        matches!(self, GenesisError::ConsensusMismatch { .. })
    }
}

pub type Result<T> = std::result::Result<T, GenesisError>;
