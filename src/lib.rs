//! # blvm-genesis
//!
//! Genesis block parameters for every supported network, together with the
//! consensus-critical pipeline that turns a header and its transactions into
//! the hashes every node must reproduce.
//!
//! ## Architecture
//!
//! Leaves first:
//! - [`serialization`]: canonical little-endian wire format (VarInt, outpoints,
//!   transactions, 80-byte headers, blocks) and the matching parsers
//! - [`crypto`], [`transaction`], [`block`], [`merkle`]: double SHA256, transaction id,
//!   block hash, Merkle root
//! - [`genesis`]: the per-network records and their verification
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: no I/O, no shared mutable state; everything may be
//!    called from any thread
//! 2. **One Codec**: every hash is taken over bytes produced by [`serialization`]
//! 3. **Fail Fast**: a genesis that does not reproduce its recorded hashes is a
//!    fatal [`GenesisError::ConsensusMismatch`]
//!
//! ## Usage
//!
//! ```rust
//! use blvm_genesis::{genesis, Network};
//!
//! let main = genesis::lookup(Network::Mainnet);
//! genesis::verify(main).unwrap();
//! assert_eq!(
//!     blvm_genesis::crypto::hash_to_hex(&main.genesis_hash()),
//!     "6a1f879bcea5471cbfdee1fd0cb2ddcc4fed569a500e352d41de967703e83172"
//! );
//! ```

pub mod block;
pub mod config;
pub mod constants;
pub mod crypto;
pub mod error;
pub mod genesis;
pub mod merkle;
pub mod network;
pub mod serialization;
pub mod transaction;
pub mod types;

pub use block::{calculate_block_hash, check_block_structure};
pub use config::GenesisConfig;
pub use crypto::double_sha256;
pub use error::{GenesisError, MismatchField, Result};
pub use genesis::{ensure_genesis, lookup, lookup_by_id, verify, verify_all, NetworkGenesis};
pub use merkle::calculate_merkle_root;
pub use network::Network;
pub use transaction::{calculate_tx_id, is_coinbase};
pub use types::{
    Block, BlockHeader, ByteString, Hash, OutPoint, Transaction, TransactionInput,
    TransactionOutput,
};
