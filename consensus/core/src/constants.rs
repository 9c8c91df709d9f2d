/// Current block version
pub const BLOCK_VERSION: i32 = 1;

/// Number of base units in one coin
pub const COIN: i64 = 100_000_000;

/// Block reward paid by the genesis coinbase (and the first subsidy epoch)
pub const INITIAL_BLOCK_REWARD: i64 = 50 * COIN;

/// Length of the network magic prefixing every wire message
pub const MESSAGE_START_SIZE: usize = 4;

/// Sequence number of a final input
pub const SEQUENCE_FINAL: u32 = 0xffff_ffff;

/// Output index used by the null outpoint of a coinbase input
pub const NULL_OUTPOINT_INDEX: u32 = 0xffff_ffff;

/// Script opcode OP_CHECKSIG
pub const OP_CHECKSIG: u8 = 0xac;
