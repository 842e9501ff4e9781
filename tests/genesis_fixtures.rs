//! Genesis fixture tests
//!
//! Every node must reproduce these exact hashes from the structural genesis
//! data. Consensus-critical: any difference here = a different chain.

use blvm_genesis::block::calculate_block_hash;
use blvm_genesis::crypto::{hash_from_hex, hash_to_hex};
use blvm_genesis::genesis::{self, data};
use blvm_genesis::merkle::calculate_merkle_root;
use blvm_genesis::serialization::{
    deserialize_block, deserialize_block_header, serialize_block, serialize_block_header,
    serialize_transaction,
};
use blvm_genesis::transaction::{calculate_tx_id, is_coinbase};
use blvm_genesis::{BlockHeader, GenesisError, MismatchField, Network};

const MAIN_MERKLE_ROOT: &str = "5c4a38bcc3d0a4a46f0186b2882a801c3c19e8d90e9d296614e7f36310e4a936";
const MAIN_BLOCK_HASH: &str = "7231e8037796de412d350e509a56ed4fccddb20cfde1debf1c47a5ce9b871f6a";

/// Main network header bytes: version 1, zero prev hash, merkle root,
/// time 1389040865, bits 0x1e0ffff0, nonce 3716037
const MAIN_HEADER_HEX: &str = "01000000\
    0000000000000000000000000000000000000000000000000000000000000000\
    5c4a38bcc3d0a4a46f0186b2882a801c3c19e8d90e9d296614e7f36310e4a936\
    e114cb52f0ff0f1ec5b33800";

#[test]
fn test_main_coinbase_hashes_to_merkle_root() {
    let coinbase = data::genesis_coinbase_tx();
    assert!(is_coinbase(&coinbase));

    let serialized = serialize_transaction(&coinbase);
    assert_eq!(serialized.len(), 213);
    assert_eq!(
        hex::encode(&serialized[..48]),
        "01000000010000000000000000000000000000000000000000000000000000000000000000ffffffff5604ffff001d01"
    );

    assert_eq!(hex::encode(calculate_tx_id(&coinbase)), MAIN_MERKLE_ROOT);
    assert_eq!(
        hex::encode(calculate_merkle_root(&[coinbase]).unwrap()),
        MAIN_MERKLE_ROOT
    );
}

#[test]
fn test_main_header_hashes_to_block_hash() {
    let header = data::MAIN_GENESIS_HEADER;
    assert_eq!(header.version, 1);
    assert_eq!(header.prev_block_hash, [0u8; 32]);
    assert_eq!(header.timestamp, 1389040865);
    assert_eq!(header.bits, 0x1e0ffff0);
    assert_eq!(header.nonce, 3716037);

    let bytes = serialize_block_header(&header);
    let expected: String = MAIN_HEADER_HEX.split_whitespace().collect();
    assert_eq!(hex::encode(bytes), expected);

    assert_eq!(hex::encode(calculate_block_hash(&header)), MAIN_BLOCK_HASH);
}

#[test]
fn test_display_order_is_reversed() {
    let main = genesis::lookup(Network::Mainnet);
    assert_eq!(
        hash_to_hex(&main.expected_block_hash),
        "6a1f879bcea5471cbfdee1fd0cb2ddcc4fed569a500e352d41de967703e83172"
    );
    assert_eq!(
        hash_to_hex(&main.expected_merkle_root),
        "36a9e41063f3e71466299d0ed9e8193c1c802a88b286016fa4a4d0c3bc384a5c"
    );
    assert_eq!(
        hash_from_hex("6a1f879bcea5471cbfdee1fd0cb2ddcc4fed569a500e352d41de967703e83172")
            .unwrap(),
        main.expected_block_hash
    );
}

#[test]
fn test_all_networks_verify() {
    for network in Network::ALL {
        let record = genesis::lookup(network);
        assert_eq!(record.network, network);
        assert_eq!(genesis::verify(record), Ok(()), "{network} genesis must verify");
    }
    assert_eq!(genesis::verify_all(), Ok(()));
}

#[test]
fn test_recorded_hashes_per_network() {
    let expected = [
        (Network::Mainnet, MAIN_BLOCK_HASH),
        (
            Network::Regtest,
            "2b9137b1d1d5990f6e699f1872f2989a1e8ca1c2decda40833bf6588694f2162",
        ),
        (
            Network::Testnet,
            "5f897e5455f5dedb02465329e3c6cce1bf0a070fbd36cc41299ac41c489c0572",
        ),
        (
            Network::Simnet,
            "2b9137b1d1d5990f6e699f1872f2989a1e8ca1c2decda40833bf6588694f2162",
        ),
    ];
    for (network, hash) in expected {
        assert_eq!(hex::encode(genesis::genesis_hash(network)), hash, "{network}");
    }
}

#[test]
fn test_networks_share_merkle_root_but_not_block_hash() {
    let main = genesis::lookup(Network::Mainnet);
    let regtest = genesis::lookup(Network::Regtest);
    let simnet = genesis::lookup(Network::Simnet);

    assert_eq!(main.block.transactions, regtest.block.transactions);
    assert_eq!(main.block.transactions, simnet.block.transactions);
    assert_eq!(main.expected_merkle_root, regtest.expected_merkle_root);
    assert_eq!(main.expected_merkle_root, simnet.expected_merkle_root);

    assert_ne!(main.expected_block_hash, regtest.expected_block_hash);
    assert_ne!(main.expected_block_hash, simnet.expected_block_hash);
    assert_eq!(
        calculate_block_hash(&regtest.block.header),
        calculate_block_hash(&simnet.block.header)
    );
}

#[test]
fn test_single_header_field_changes_block_hash_only() {
    let genesis = genesis::lookup(Network::Mainnet);
    let base = genesis.block.header;
    let base_hash = calculate_block_hash(&base);
    let base_root = calculate_merkle_root(&genesis.block.transactions).unwrap();

    let variants = vec![
        BlockHeader { version: 2, ..base },
        BlockHeader {
            prev_block_hash: [1; 32],
            ..base
        },
        BlockHeader {
            timestamp: base.timestamp + 1,
            ..base
        },
        BlockHeader {
            bits: 0x207fffff,
            ..base
        },
        BlockHeader {
            nonce: base.nonce + 1,
            ..base
        },
    ];

    for header in variants {
        assert_ne!(calculate_block_hash(&header), base_hash, "{header:?}");
    }

    // Header fields do not feed the Merkle root
    assert_eq!(
        calculate_merkle_root(&genesis.block.transactions).unwrap(),
        base_root
    );
}

#[test]
fn test_flipped_block_hash_bit_is_consensus_mismatch() {
    let mut tampered = genesis::lookup(Network::Mainnet).clone();
    let true_hash = tampered.expected_block_hash;
    tampered.expected_block_hash[31] ^= 0x01;

    let err = genesis::verify(&tampered).unwrap_err();
    assert!(err.is_fatal());
    assert_eq!(
        err,
        GenesisError::ConsensusMismatch {
            network: Network::Mainnet,
            field: MismatchField::BlockHash,
            expected: tampered.expected_block_hash,
            computed: true_hash,
        }
    );
    let message = err.to_string();
    assert!(message.contains("block_hash"), "{message}");
    assert!(message.contains(&hash_to_hex(&true_hash)), "{message}");
}

#[test]
fn test_tampered_coinbase_is_merkle_root_mismatch() {
    let mut tampered = genesis::lookup(Network::Regtest).clone();
    tampered.block.transactions[0].outputs[0].value += 1;

    match genesis::verify(&tampered) {
        Err(GenesisError::ConsensusMismatch { field, network, .. }) => {
            assert_eq!(field, MismatchField::MerkleRoot);
            assert_eq!(network, Network::Regtest);
        }
        other => panic!("expected merkle root mismatch, got {other:?}"),
    }
}

#[test]
fn test_genesis_block_wire_round_trip() {
    for network in Network::ALL {
        let block = genesis::lookup(network).genesis_block();
        let bytes = serialize_block(block);
        assert_eq!(bytes.len(), 80 + 1 + 213);
        assert_eq!(&deserialize_block(&bytes).unwrap(), block);
        assert_eq!(deserialize_block_header(&bytes).unwrap(), block.header);
    }
}

#[test]
fn test_lookup_by_unknown_id() {
    assert_eq!(
        genesis::lookup_by_id("litecoin").unwrap_err(),
        GenesisError::UnknownNetwork("litecoin".to_string())
    );
    assert_eq!(
        genesis::lookup_by_id("simnet").unwrap().network,
        Network::Simnet
    );
}
