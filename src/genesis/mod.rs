//! Genesis registry
//!
//! One immutable [`NetworkGenesis`] per supported network, built on first use
//! and shared for the life of the process. [`verify`] recomputes the Merkle
//! root and block hash from the structural fields and compares them with the
//! recorded values; a node must refuse to start if that fails for its network.

pub mod data;

use crate::block::{calculate_block_hash, check_block_structure};
use crate::config::GenesisConfig;
use crate::crypto::hash_to_hex;
use crate::error::{GenesisError, MismatchField, Result};
use crate::merkle::calculate_merkle_root;
use crate::network::Network;
use crate::types::*;
use std::sync::OnceLock;
use tracing::{debug, error, info};

/// Genesis parameters of one network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkGenesis {
    pub network: Network,
    pub block: Block,
    pub expected_block_hash: Hash,
    pub expected_merkle_root: Hash,
}

impl NetworkGenesis {
    fn new(network: Network, header: BlockHeader, block_hash: Hash) -> Self {
        NetworkGenesis {
            network,
            block: Block {
                header,
                transactions: vec![data::genesis_coinbase_tx()],
            },
            expected_block_hash: block_hash,
            expected_merkle_root: data::GENESIS_MERKLE_ROOT,
        }
    }

    /// The recorded genesis block hash
    pub fn genesis_hash(&self) -> Hash {
        self.expected_block_hash
    }

    pub fn genesis_block(&self) -> &Block {
        &self.block
    }
}

static REGISTRY: OnceLock<[NetworkGenesis; 4]> = OnceLock::new();

fn registry() -> &'static [NetworkGenesis; 4] {
    REGISTRY.get_or_init(|| {
        [
            NetworkGenesis::new(
                Network::Mainnet,
                data::MAIN_GENESIS_HEADER,
                data::MAIN_GENESIS_HASH,
            ),
            NetworkGenesis::new(
                Network::Regtest,
                data::REGTEST_GENESIS_HEADER,
                data::REGTEST_GENESIS_HASH,
            ),
            NetworkGenesis::new(
                Network::Testnet,
                data::TESTNET_GENESIS_HEADER,
                data::TESTNET_GENESIS_HASH,
            ),
            NetworkGenesis::new(
                Network::Simnet,
                data::SIMNET_GENESIS_HEADER,
                data::SIMNET_GENESIS_HASH,
            ),
        ]
    })
}

/// Look up the genesis record of a network
pub fn lookup(network: Network) -> &'static NetworkGenesis {
    &registry()[registry_index(network)]
}

// Registry order matches Network::ALL
fn registry_index(network: Network) -> usize {
    match network {
        Network::Mainnet => 0,
        Network::Regtest => 1,
        Network::Testnet => 2,
        Network::Simnet => 3,
    }
}

/// Look up the genesis record for a configured network identifier
///
/// # Errors
///
/// [`GenesisError::UnknownNetwork`] if `id` names no supported network.
pub fn lookup_by_id(id: &str) -> Result<&'static NetworkGenesis> {
    Ok(lookup(id.parse::<Network>()?))
}

/// Recorded genesis block hash of a network
pub fn genesis_hash(network: Network) -> Hash {
    lookup(network).genesis_hash()
}

fn mismatch(network: Network, field: MismatchField, expected: Hash, computed: Hash) -> GenesisError {
    error!(
        %network,
        %field,
        expected = %hash_to_hex(&expected),
        computed = %hash_to_hex(&computed),
        "genesis consensus mismatch"
    );
    GenesisError::ConsensusMismatch {
        network,
        field,
        expected,
        computed,
    }
}

/// Verify a genesis record against its own structural data
///
/// 1. The block must be structurally valid (coinbase first).
/// 2. The Merkle root recomputed from the transactions must equal
///    `expected_merkle_root`.
/// 3. The header's stored Merkle root must equal `expected_merkle_root`.
///    This is stricter than step 4 alone, which never reads the stored field:
///    a record whose header carries a stale root fails here even though its
///    substituted header would hash correctly.
/// 4. The double hash of the header, with its Merkle root replaced by the
///    recomputed one, must equal `expected_block_hash`.
///
/// # Errors
///
/// [`GenesisError::ConsensusMismatch`] naming the first field that diverged.
/// This is fatal for a node; there is nothing to retry.
pub fn verify(genesis: &NetworkGenesis) -> Result<()> {
    let network = genesis.network;
    check_block_structure(&genesis.block)?;

    let merkle_root = calculate_merkle_root(&genesis.block.transactions)?;
    if merkle_root != genesis.expected_merkle_root {
        return Err(mismatch(
            network,
            MismatchField::MerkleRoot,
            genesis.expected_merkle_root,
            merkle_root,
        ));
    }

    if genesis.block.header.merkle_root != genesis.expected_merkle_root {
        return Err(mismatch(
            network,
            MismatchField::HeaderMerkleRoot,
            genesis.expected_merkle_root,
            genesis.block.header.merkle_root,
        ));
    }

    let header = BlockHeader {
        merkle_root,
        ..genesis.block.header
    };
    let block_hash = calculate_block_hash(&header);
    if block_hash != genesis.expected_block_hash {
        return Err(mismatch(
            network,
            MismatchField::BlockHash,
            genesis.expected_block_hash,
            block_hash,
        ));
    }

    debug!(
        %network,
        block_hash = %hash_to_hex(&block_hash),
        merkle_root = %hash_to_hex(&merkle_root),
        "genesis block verified"
    );
    Ok(())
}

/// Verify every network's genesis record
pub fn verify_all() -> Result<()> {
    Network::ALL.iter().try_for_each(|n| verify(lookup(*n)))
}

static STARTUP_VERIFICATION: OnceLock<[Result<()>; 4]> = OnceLock::new();

/// Verification outcome of the registry's own record, computed once
fn verified(network: Network) -> Result<()> {
    let outcomes = STARTUP_VERIFICATION.get_or_init(|| Network::ALL.map(|n| verify(lookup(n))));
    outcomes[registry_index(network)].clone()
}

/// Startup entry point: select the configured network's genesis and verify
/// it before handing it out
///
/// # Errors
///
/// Whatever [`verify`] reports. The node must not start on an error.
pub fn ensure_genesis(config: &GenesisConfig) -> Result<&'static NetworkGenesis> {
    let genesis = lookup(config.network);
    verified(config.network)?;
    info!(
        network = %config.network,
        genesis = %hash_to_hex(&genesis.expected_block_hash),
        "genesis parameters loaded"
    );
    Ok(genesis)
}
