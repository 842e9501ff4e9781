//! Genesis block tables
//!
//! Hashes are in stored byte order (the order double hashing produces).
//! The display form, reversed, is given in the comment above each one.

use crate::constants::{COINBASE_PREVOUT_INDEX, GENESIS_REWARD, SEQUENCE_FINAL};
use crate::types::*;

/// Coinbase input script shared by every network's genesis block.
///
/// Opaque: `04 ffff001d 01 04`, then OP_PUSHDATA1 of 77 bytes of text
/// ("Der Tagesspiegel 06/Jan/2014 Henry Maske, famous fighter, is now 50 years old").
pub const GENESIS_COINBASE_SCRIPT_SIG: [u8; 86] = [
    0x04, 0xff, 0xff, 0x00, 0x1d, 0x01, 0x04, 0x4c, 0x4d, 0x44, 0x65, 0x72,
    0x20, 0x54, 0x61, 0x67, 0x65, 0x73, 0x73, 0x70, 0x69, 0x65, 0x67, 0x65,
    0x6c, 0x20, 0x30, 0x36, 0x2f, 0x4a, 0x61, 0x6e, 0x2f, 0x32, 0x30, 0x31,
    0x34, 0x20, 0x48, 0x65, 0x6e, 0x72, 0x79, 0x20, 0x4d, 0x61, 0x73, 0x6b,
    0x65, 0x2c, 0x20, 0x66, 0x61, 0x6d, 0x6f, 0x75, 0x73, 0x20, 0x66, 0x69,
    0x67, 0x68, 0x74, 0x65, 0x72, 0x2c, 0x20, 0x69, 0x73, 0x20, 0x6e, 0x6f,
    0x77, 0x20, 0x35, 0x30, 0x20, 0x79, 0x65, 0x61, 0x72, 0x73, 0x20, 0x6f,
    0x6c, 0x64,
];

/// Pay-to-pubkey output script of the genesis coinbase (65-byte key, OP_CHECKSIG)
pub const GENESIS_COINBASE_SCRIPT_PUBKEY: [u8; 67] = [
    0x41, 0x04, 0x01, 0x84, 0x71, 0x0f, 0xa6, 0x89, 0xad, 0x50, 0x23, 0x69,
    0x0c, 0x80, 0xf3, 0xa4, 0x9c, 0x8f, 0x13, 0xf8, 0xd4, 0x5b, 0x8c, 0x85,
    0x7f, 0xbc, 0xbc, 0x8b, 0xc4, 0xa8, 0xe4, 0xd3, 0xeb, 0x4b, 0x10, 0xf4,
    0xd4, 0x60, 0x4f, 0xa0, 0x8d, 0xce, 0x60, 0x1a, 0xaf, 0x0f, 0x47, 0x02,
    0x16, 0xfe, 0x1b, 0x51, 0x85, 0x0b, 0x4a, 0xcf, 0x21, 0xb1, 0x79, 0xc4,
    0x50, 0x70, 0xac, 0x7b, 0x03, 0xa9, 0xac,
];

/// Merkle root of every genesis block (they all hold the same coinbase).
/// 36a9e41063f3e71466299d0ed9e8193c1c802a88b286016fa4a4d0c3bc384a5c
pub const GENESIS_MERKLE_ROOT: Hash = [
    0x5c, 0x4a, 0x38, 0xbc, 0xc3, 0xd0, 0xa4, 0xa4,
    0x6f, 0x01, 0x86, 0xb2, 0x88, 0x2a, 0x80, 0x1c,
    0x3c, 0x19, 0xe8, 0xd9, 0x0e, 0x9d, 0x29, 0x66,
    0x14, 0xe7, 0xf3, 0x63, 0x10, 0xe4, 0xa9, 0x36,
];

/// 6a1f879bcea5471cbfdee1fd0cb2ddcc4fed569a500e352d41de967703e83172
pub const MAIN_GENESIS_HASH: Hash = [
    0x72, 0x31, 0xe8, 0x03, 0x77, 0x96, 0xde, 0x41,
    0x2d, 0x35, 0x0e, 0x50, 0x9a, 0x56, 0xed, 0x4f,
    0xcc, 0xdd, 0xb2, 0x0c, 0xfd, 0xe1, 0xde, 0xbf,
    0x1c, 0x47, 0xa5, 0xce, 0x9b, 0x87, 0x1f, 0x6a,
];

/// 62214f698865bf3308a4cddec2a18c1e9a98f272189f696e0f99d5d1b137912b
pub const REGTEST_GENESIS_HASH: Hash = [
    0x2b, 0x91, 0x37, 0xb1, 0xd1, 0xd5, 0x99, 0x0f,
    0x6e, 0x69, 0x9f, 0x18, 0x72, 0xf2, 0x98, 0x9a,
    0x1e, 0x8c, 0xa1, 0xc2, 0xde, 0xcd, 0xa4, 0x08,
    0x33, 0xbf, 0x65, 0x88, 0x69, 0x4f, 0x21, 0x62,
];

/// 72059c481cc49a2941cc36bd0f070abfe1ccc6e329534602dbdef555547e895f
pub const TESTNET_GENESIS_HASH: Hash = [
    0x5f, 0x89, 0x7e, 0x54, 0x55, 0xf5, 0xde, 0xdb,
    0x02, 0x46, 0x53, 0x29, 0xe3, 0xc6, 0xcc, 0xe1,
    0xbf, 0x0a, 0x07, 0x0f, 0xbd, 0x36, 0xcc, 0x41,
    0x29, 0x9a, 0xc4, 0x1c, 0x48, 0x9c, 0x05, 0x72,
];

/// Simnet's header is identical to regtest's, and so is its hash.
pub const SIMNET_GENESIS_HASH: Hash = REGTEST_GENESIS_HASH;

pub const MAIN_GENESIS_HEADER: BlockHeader = BlockHeader {
    version: 1,
    prev_block_hash: ZERO_HASH,
    merkle_root: GENESIS_MERKLE_ROOT,
    timestamp: 1389040865,
    bits: 0x1e0ffff0,
    nonce: 3716037,
};

pub const REGTEST_GENESIS_HEADER: BlockHeader = BlockHeader {
    version: 1,
    prev_block_hash: ZERO_HASH,
    merkle_root: GENESIS_MERKLE_ROOT,
    timestamp: 1296688602,
    bits: 0x207fffff,
    nonce: 0,
};

pub const TESTNET_GENESIS_HEADER: BlockHeader = BlockHeader {
    version: 1,
    prev_block_hash: ZERO_HASH,
    merkle_root: GENESIS_MERKLE_ROOT,
    timestamp: 1473357600,
    bits: 0x1e0ffff0,
    nonce: 5653466,
};

pub const SIMNET_GENESIS_HEADER: BlockHeader = BlockHeader {
    version: 1,
    prev_block_hash: ZERO_HASH,
    merkle_root: GENESIS_MERKLE_ROOT,
    timestamp: 1296688602,
    bits: 0x207fffff,
    nonce: 0,
};

/// The coinbase transaction shared by all genesis blocks
pub fn genesis_coinbase_tx() -> Transaction {
    Transaction {
        version: 1,
        inputs: vec![TransactionInput {
            prevout: OutPoint {
                hash: ZERO_HASH,
                index: COINBASE_PREVOUT_INDEX,
            },
            script_sig: GENESIS_COINBASE_SCRIPT_SIG.to_vec(),
            sequence: SEQUENCE_FINAL,
        }],
        outputs: vec![TransactionOutput {
            value: GENESIS_REWARD,
            script_pubkey: GENESIS_COINBASE_SCRIPT_PUBKEY.to_vec(),
        }],
        lock_time: 0,
    }
}
