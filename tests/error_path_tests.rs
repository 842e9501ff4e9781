//! Tests for error paths and edge cases

use blvm_genesis::serialization::{
    deserialize_block, deserialize_outpoint, deserialize_transaction,
    deserialize_transaction_with_len, serialize_block, serialize_transaction,
};
use blvm_genesis::*;

fn main_block_bytes() -> Vec<u8> {
    serialize_block(lookup(Network::Mainnet).genesis_block())
}

#[test]
fn test_truncated_block_is_format_error() {
    let bytes = main_block_bytes();
    for len in [0, 79, 80, 81, 100, bytes.len() - 1] {
        assert!(
            matches!(deserialize_block(&bytes[..len]), Err(GenesisError::Format(_))),
            "prefix of {len} bytes"
        );
    }
}

#[test]
fn test_trailing_byte_after_block() {
    let mut bytes = main_block_bytes();
    bytes.push(0);
    assert!(matches!(
        deserialize_block(&bytes),
        Err(GenesisError::Format(_))
    ));
}

#[test]
fn test_zero_transaction_count() {
    let mut bytes = main_block_bytes();
    bytes.truncate(80);
    bytes.push(0x00);
    assert!(matches!(
        deserialize_block(&bytes),
        Err(GenesisError::Format(_))
    ));
}

#[test]
fn test_transaction_count_exceeds_data() {
    let mut bytes = main_block_bytes();
    // Claim 0xffff transactions
    let body = bytes.split_off(81);
    bytes.truncate(80);
    bytes.extend_from_slice(&[0xfd, 0xff, 0xff]);
    bytes.extend_from_slice(&body);
    assert!(deserialize_block(&bytes).is_err());
}

#[test]
fn test_script_length_exceeds_data() {
    let coinbase = genesis::data::genesis_coinbase_tx();
    let mut bytes = serialize_transaction(&coinbase);
    // script_sig length byte: version(4) + count(1) + outpoint(36)
    assert_eq!(bytes[41], 86);
    bytes[41] = 0xfc;
    assert!(matches!(
        deserialize_transaction(&bytes),
        Err(GenesisError::Format(_))
    ));
}

#[test]
fn test_transaction_trailing_bytes() {
    let coinbase = genesis::data::genesis_coinbase_tx();
    let mut bytes = serialize_transaction(&coinbase);
    bytes.extend_from_slice(&[0xde, 0xad]);

    assert!(deserialize_transaction(&bytes).is_err());

    let (tx, consumed) = deserialize_transaction_with_len(&bytes).unwrap();
    assert_eq!(tx, coinbase);
    assert_eq!(consumed, 213);
}

#[test]
fn test_outpoint_length() {
    assert!(deserialize_outpoint(&[0u8; 35]).is_err());
    assert!(deserialize_outpoint(&[0u8; 37]).is_err());
    let outpoint = deserialize_outpoint(&[0u8; 36]).unwrap();
    assert!(!outpoint.is_null());
}

#[test]
fn test_structure_errors() {
    let mut block = lookup(Network::Regtest).genesis_block().clone();
    block.transactions.push(block.transactions[0].clone());
    let err = check_block_structure(&block).unwrap_err();
    assert!(matches!(err, GenesisError::InvalidBlock(_)));
    assert!(!err.is_fatal());

    block.transactions.clear();
    assert!(check_block_structure(&block).is_err());
}

#[test]
fn test_unknown_network_error_message() {
    let err = lookup_by_id("signet").unwrap_err();
    assert_eq!(err.to_string(), "Unknown network: signet");
    assert!(!err.is_fatal());
}
