use hex_literal::hex;

use crate::block::{Block, Header};
use crate::constants::{BLOCK_VERSION, INITIAL_BLOCK_REWARD, OP_CHECKSIG};
use crate::pow::PowAlgorithm;
use crate::tx::{Transaction, TransactionOutput};
use crate::{Hash, ZERO_HASH};

/// Headline embedded in every genesis coinbase
pub const GENESIS_COINBASE_MESSAGE: &[u8] = b"Tessera 19/Oct/2026 Five algorithms, three networks, one chain of record";

/// Key the genesis reward is paid to (unspendable by convention)
pub const GENESIS_OUTPUT_PUBKEY: [u8; 65] = hex!(
    "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61de"
    "b649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f"
);

/// Difficulty pushed at the start of the coinbase script, Bitcoin's original limit
const GENESIS_SCRIPT_BITS: u32 = 486_604_799;

/// Genesis headers are hashed with double SHA-256, so their bits must stay
/// within this algorithm's pow limit.
pub const GENESIS_POW_ALGORITHM: PowAlgorithm = PowAlgorithm::Sha256d;

/// The constants uniquely representing the genesis block
#[derive(Clone, Debug)]
pub struct GenesisBlock {
    pub hash: Hash,
    pub version: i32,
    pub hash_merkle_root: Hash,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl GenesisBlock {
    /// The single coinbase shared by all networks
    pub fn build_genesis_transactions(&self) -> Vec<Transaction> {
        let output = TransactionOutput::new(INITIAL_BLOCK_REWARD, genesis_output_script());
        vec![Transaction::new_coinbase(1, genesis_coinbase_script(), vec![output])]
    }
}

impl From<&GenesisBlock> for Header {
    fn from(genesis: &GenesisBlock) -> Self {
        Header {
            version: genesis.version,
            prev_block_hash: ZERO_HASH,
            hash_merkle_root: genesis.hash_merkle_root,
            time: genesis.time,
            bits: genesis.bits,
            nonce: genesis.nonce,
        }
    }
}

impl From<&GenesisBlock> for Block {
    fn from(genesis: &GenesisBlock) -> Self {
        Block::new(genesis.into(), genesis.build_genesis_transactions())
    }
}

fn push_data(script: &mut Vec<u8>, data: &[u8]) {
    // Direct pushes only, every genesis push is shorter than OP_PUSHDATA1
    debug_assert!(data.len() < 0x4c);
    script.push(data.len() as u8);
    script.extend_from_slice(data);
}

/// `<bits> <4> <message>`, the classic genesis scriptSig shape
pub fn genesis_coinbase_script() -> Vec<u8> {
    let mut script = Vec::with_capacity(8 + GENESIS_COINBASE_MESSAGE.len());
    push_data(&mut script, &GENESIS_SCRIPT_BITS.to_le_bytes());
    push_data(&mut script, &[4]);
    push_data(&mut script, GENESIS_COINBASE_MESSAGE);
    script
}

/// `<pubkey> OP_CHECKSIG`
pub fn genesis_output_script() -> Vec<u8> {
    let mut script = Vec::with_capacity(GENESIS_OUTPUT_PUBKEY.len() + 2);
    push_data(&mut script, &GENESIS_OUTPUT_PUBKEY);
    script.push(OP_CHECKSIG);
    script
}

const GENESIS_MERKLE_ROOT: Hash =
    Hash::from_bytes(hex!("850e1827ac911414f35b6a91d173e40f1ce0bb39b69a8188885df6b77423c80c"));

pub const GENESIS: GenesisBlock = GenesisBlock {
    hash: Hash::from_bytes(hex!("ee8ad0186b2533c07005b8bdc7cbab1920885a8904091e25c44b2ef300000000")),
    version: BLOCK_VERSION,
    hash_merkle_root: GENESIS_MERKLE_ROOT,
    time: 1_792_368_000,
    bits: 0x1d00_ffff,
    nonce: 1_491_238_497,
};

pub const TESTNET_GENESIS: GenesisBlock = GenesisBlock {
    hash: Hash::from_bytes(hex!("dda5148feca4fc4255654d93db96d32aac38be66d134f23f90c80e1800000000")),
    version: BLOCK_VERSION,
    hash_merkle_root: GENESIS_MERKLE_ROOT,
    time: 1_792_368_001,
    bits: 0x1d00_ffff,
    nonce: 3_203_808_896,
};

pub const REGTEST_GENESIS: GenesisBlock = GenesisBlock {
    hash: Hash::from_bytes(hex!("7f493155c2c31f482f07cd51505c6ba91591efb776d7a5286575b27924a68115")),
    version: BLOCK_VERSION,
    hash_merkle_root: GENESIS_MERKLE_ROOT,
    time: 1_792_368_002,
    bits: 0x207f_ffff,
    nonce: 4,
};
