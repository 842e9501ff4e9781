//! Wire-format and coinbase constants

/// Size of a hash in bytes
pub const HASH_SIZE: usize = 32;

/// Serialized block header size: 4 + 32 + 32 + 4 + 4 + 4
pub const BLOCK_HEADER_SIZE: usize = 80;

/// Prevout index marking "no previous output" (coinbase inputs only)
pub const COINBASE_PREVOUT_INDEX: u32 = 0xffff_ffff;

/// Sequence number for final transaction
pub const SEQUENCE_FINAL: u32 = 0xffff_ffff;

/// Smallest units per coin
pub const SATOSHIS_PER_COIN: i64 = 100_000_000;

/// Genesis coinbase reward: 50 coins
pub const GENESIS_REWARD: i64 = 50 * SATOSHIS_PER_COIN;

/// Serialized size of an outpoint: 32-byte hash + 4-byte index
pub const OUTPOINT_SIZE: usize = HASH_SIZE + 4;

/// Smallest possible serialized input: outpoint, 1-byte empty script, sequence
pub const MIN_TX_INPUT_SIZE: usize = OUTPOINT_SIZE + 1 + 4;

/// Smallest possible serialized output: value, 1-byte empty script
pub const MIN_TX_OUTPUT_SIZE: usize = 8 + 1;

/// Smallest possible serialized transaction: version, two empty counts, lock time
pub const MIN_TX_SIZE: usize = 4 + 1 + 1 + 4;
