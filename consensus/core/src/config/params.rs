//! Per-network consensus parameter sets.
//!
//! Each network gets one builder producing a fully populated [`Params`]. The
//! values are fixed at compile time; builders only assemble them and verify
//! that the assembled set is internally consistent. An inconsistent set is a
//! programming error and aborts the process.

use primitive_types::U256;
use std::net::SocketAddr;

use super::base58::{Base58Prefixes, Base58Type, MAINNET_BASE58_PREFIXES, TESTNET_BASE58_PREFIXES};
use super::genesis::{GenesisBlock, GENESIS, GENESIS_POW_ALGORITHM, REGTEST_GENESIS, TESTNET_GENESIS};
use super::seeds::{mainnet_fixed_seeds, DnsSeed, MAINNET_DNS_SEEDS, TESTNET_DNS_SEEDS};
use crate::block::Block;
use crate::constants::MESSAGE_START_SIZE;
use crate::network::NetworkType;
use crate::pow::{bits_to_target, hash_meets_target, PowAlgorithm, PowLimits};
use crate::Hash;

/// Wire magic of the production network. The bytes are rarely used upper
/// ASCII, invalid as UTF-8, and produce a large 32-bit integer with any
/// alignment.
pub const MAINNET_MESSAGE_START: [u8; MESSAGE_START_SIZE] = [0xaf, 0x45, 0x76, 0xee];
pub const TESTNET_MESSAGE_START: [u8; MESSAGE_START_SIZE] = [0x01, 0xf5, 0x55, 0xa4];
pub const REGTEST_MESSAGE_START: [u8; MESSAGE_START_SIZE] = [0xfa, 0xbf, 0xb5, 0xda];

pub const MAINNET_ALERT_KEY: [u8; 65] = hex_literal::hex!(
    "04a7ddb4abc601ff87b56f263ecbf1b96da6faaaf43eac4166204dbf5e3c3827"
    "79810d003d403eff299580ce9e7dad37d2ce328b35effae3e95dbfc989ffae41f2"
);
pub const TESTNET_ALERT_KEY: [u8; 65] = hex_literal::hex!(
    "04721a2eb580a225cfc07b9eff249a1d933b88d87a2b3e4733b88404009f0b8a"
    "e121e76d6b58fb8b3d54963d797e7a641e6173a05b8a6bfbac0db6f886d4e5fa52"
);

/// One day
const TARGET_TIMESPAN: i64 = 24 * 60 * 60;
/// Two and a half minutes
const TARGET_SPACING: i64 = 150;

/// Chain parameters of one network
#[derive(Debug, Clone)]
pub struct Params {
    network: NetworkType,
    genesis_block: Block,
    genesis_hash: Hash,
    message_start: [u8; MESSAGE_START_SIZE],
    alert_key: Vec<u8>,
    default_port: u16,
    rpc_port: u16,
    /// Threads the miner uses when none (or a negative count) is configured
    default_miner_threads: i32,
    pow_limits: PowLimits,
    subsidy_halving_interval: u32,
    target_timespan: i64,
    target_spacing: i64,

    require_rpc_password: bool,
    /// Refuse to mine without peers, so a fork is not mined alone
    mining_requires_peers: bool,
    default_check_mempool: bool,
    allow_min_difficulty_blocks: bool,
    require_standard: bool,
    /// Stop after one block so tests mine exactly what they ask for
    mine_blocks_on_demand: bool,

    data_dir_suffix: &'static str,
    dns_seeds: Vec<DnsSeed>,
    fixed_seeds: Vec<SocketAddr>,
    base58_prefixes: Base58Prefixes,
}

impl Params {
    /// Builds the parameter set of `network`
    pub fn new(network: NetworkType) -> Self {
        match network {
            NetworkType::Mainnet => mainnet_params(),
            NetworkType::Testnet => testnet_params(),
            NetworkType::Regtest => regtest_params(),
        }
    }

    pub fn network(&self) -> NetworkType {
        self.network
    }

    pub fn genesis_hash(&self) -> Hash {
        self.genesis_hash
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis_block
    }

    pub fn message_start(&self) -> [u8; MESSAGE_START_SIZE] {
        self.message_start
    }

    pub fn alert_key(&self) -> &[u8] {
        &self.alert_key
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }

    pub fn default_miner_threads(&self) -> i32 {
        self.default_miner_threads
    }

    pub fn pow_limit(&self, algo: PowAlgorithm) -> U256 {
        self.pow_limits.get(algo)
    }

    pub fn pow_limits(&self) -> &PowLimits {
        &self.pow_limits
    }

    pub fn subsidy_halving_interval(&self) -> u32 {
        self.subsidy_halving_interval
    }

    pub fn target_timespan(&self) -> i64 {
        self.target_timespan
    }

    pub fn target_spacing(&self) -> i64 {
        self.target_spacing
    }

    /// Number of blocks between difficulty retargets
    pub fn retarget_interval(&self) -> i64 {
        self.target_timespan / self.target_spacing
    }

    pub fn require_rpc_password(&self) -> bool {
        self.require_rpc_password
    }

    pub fn mining_requires_peers(&self) -> bool {
        self.mining_requires_peers
    }

    pub fn default_check_mempool(&self) -> bool {
        self.default_check_mempool
    }

    pub fn allow_min_difficulty_blocks(&self) -> bool {
        self.allow_min_difficulty_blocks
    }

    pub fn require_standard(&self) -> bool {
        self.require_standard
    }

    pub fn mine_blocks_on_demand(&self) -> bool {
        self.mine_blocks_on_demand
    }

    /// Sub-directory of the data directory, empty for mainnet
    pub fn data_dir_suffix(&self) -> &'static str {
        self.data_dir_suffix
    }

    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    pub fn fixed_seeds(&self) -> &[SocketAddr] {
        &self.fixed_seeds
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &'static [u8] {
        self.base58_prefixes.get(kind)
    }

    pub fn base58_prefixes(&self) -> &Base58Prefixes {
        &self.base58_prefixes
    }

    /// BIP70 network name
    pub fn network_id_string(&self) -> &'static str {
        self.network.bip70_name()
    }

    /// Panics with the offending network and field if the set contradicts itself.
    pub fn assert_consistent(&self) {
        let network = self.network;

        let computed = self.genesis_block.hash();
        assert_eq!(
            computed, self.genesis_hash,
            "{network} chain parameters: genesis_hash {} does not match genesis block hash {computed}",
            self.genesis_hash
        );
        assert!(
            self.genesis_block.has_valid_merkle_root(),
            "{network} chain parameters: genesis block merkle root does not commit to its transactions"
        );
        let genesis_bits = self.genesis_block.header.bits;
        assert!(
            bits_to_target(genesis_bits) <= self.pow_limit(GENESIS_POW_ALGORITHM),
            "{network} chain parameters: genesis bits 0x{genesis_bits:08x} exceed the {GENESIS_POW_ALGORITHM} pow limit"
        );
        assert!(
            hash_meets_target(&self.genesis_hash, genesis_bits),
            "{network} chain parameters: genesis hash does not meet its own target 0x{genesis_bits:08x}"
        );
        assert!(
            self.genesis_block.header.prev_block_hash.is_zero(),
            "{network} chain parameters: genesis block has a parent"
        );

        for (kind, prefix) in self.base58_prefixes.iter() {
            assert!(!prefix.is_empty(), "{network} chain parameters: base58 prefix {kind} is empty");
        }

        for (algo, limit) in self.pow_limits.iter() {
            assert!(!limit.is_zero(), "{network} chain parameters: pow limit for {algo} is zero");
        }

        assert!(self.target_spacing > 0, "{network} chain parameters: target_spacing must be positive");
        assert!(
            self.target_timespan >= self.target_spacing,
            "{network} chain parameters: target_timespan {} shorter than target_spacing {}",
            self.target_timespan,
            self.target_spacing
        );

        assert_ne!(self.default_port, self.rpc_port, "{network} chain parameters: default_port equals rpc_port");

        for seed in &self.dns_seeds {
            assert!(
                !seed.name.is_empty() && !seed.host.is_empty(),
                "{network} chain parameters: DNS seed with empty name or host: {seed:?}"
            );
        }
    }
}

/// Panics if two networks share a wire magic or a port.
pub fn assert_distinct_networks() {
    let all: Vec<Params> = NetworkType::iter().map(Params::new).collect();
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a.message_start, b.message_start, "{} and {} share a message start", a.network, b.network);
            assert_ne!(a.default_port, b.default_port, "{} and {} share a p2p port", a.network, b.network);
            assert_ne!(a.rpc_port, b.rpc_port, "{} and {} share an rpc port", a.network, b.network);
            for port in [a.default_port, a.rpc_port] {
                assert!(
                    port != b.default_port && port != b.rpc_port,
                    "{} port {port} collides with a {} port",
                    a.network,
                    b.network
                );
            }
        }
    }
}

fn genesis_parts(genesis: &GenesisBlock) -> (Block, Hash) {
    (genesis.into(), genesis.hash)
}

/// Production network
pub fn mainnet_params() -> Params {
    let (genesis_block, genesis_hash) = genesis_parts(&GENESIS);
    let params = Params {
        network: NetworkType::Mainnet,
        genesis_block,
        genesis_hash,
        message_start: MAINNET_MESSAGE_START,
        alert_key: MAINNET_ALERT_KEY.to_vec(),
        default_port: 10888,
        rpc_port: 10889,
        default_miner_threads: 0,
        pow_limits: PowLimits {
            sha256d: U256::MAX >> 32,
            scrypt: U256::MAX >> 20,
            groestl: U256::MAX >> 20,
            skein: U256::MAX >> 20,
            qubit: U256::MAX >> 20,
        },
        subsidy_halving_interval: 967_680,
        target_timespan: TARGET_TIMESPAN,
        target_spacing: TARGET_SPACING,
        require_rpc_password: true,
        mining_requires_peers: true,
        default_check_mempool: false,
        allow_min_difficulty_blocks: false,
        require_standard: true,
        mine_blocks_on_demand: false,
        data_dir_suffix: "",
        dns_seeds: MAINNET_DNS_SEEDS.to_vec(),
        fixed_seeds: mainnet_fixed_seeds(),
        base58_prefixes: MAINNET_BASE58_PREFIXES,
    };
    params.assert_consistent();
    params
}

/// Public test network: mainnet rules with min-difficulty blocks allowed
pub fn testnet_params() -> Params {
    let (genesis_block, genesis_hash) = genesis_parts(&TESTNET_GENESIS);
    let params = Params {
        network: NetworkType::Testnet,
        genesis_block,
        genesis_hash,
        message_start: TESTNET_MESSAGE_START,
        alert_key: TESTNET_ALERT_KEY.to_vec(),
        default_port: 20888,
        rpc_port: 20889,
        default_miner_threads: 0,
        pow_limits: PowLimits {
            sha256d: U256::MAX >> 32,
            scrypt: U256::MAX >> 20,
            groestl: U256::MAX >> 20,
            skein: U256::MAX >> 20,
            qubit: U256::MAX >> 20,
        },
        subsidy_halving_interval: 967_680,
        target_timespan: TARGET_TIMESPAN,
        target_spacing: TARGET_SPACING,
        require_rpc_password: true,
        mining_requires_peers: true,
        default_check_mempool: false,
        allow_min_difficulty_blocks: true,
        require_standard: false,
        mine_blocks_on_demand: false,
        data_dir_suffix: "testnet",
        dns_seeds: TESTNET_DNS_SEEDS.to_vec(),
        fixed_seeds: Vec::new(),
        base58_prefixes: TESTNET_BASE58_PREFIXES,
    };
    params.assert_consistent();
    params
}

/// Private regression-test network with trivial difficulty and no peers
pub fn regtest_params() -> Params {
    let (genesis_block, genesis_hash) = genesis_parts(&REGTEST_GENESIS);
    let params = Params {
        network: NetworkType::Regtest,
        genesis_block,
        genesis_hash,
        message_start: REGTEST_MESSAGE_START,
        alert_key: Vec::new(),
        default_port: 18444,
        rpc_port: 18445,
        default_miner_threads: 1,
        pow_limits: PowLimits {
            sha256d: U256::MAX >> 1,
            scrypt: U256::MAX >> 1,
            groestl: U256::MAX >> 1,
            skein: U256::MAX >> 1,
            qubit: U256::MAX >> 1,
        },
        subsidy_halving_interval: 150,
        target_timespan: TARGET_TIMESPAN,
        target_spacing: TARGET_SPACING,
        require_rpc_password: false,
        mining_requires_peers: false,
        default_check_mempool: true,
        allow_min_difficulty_blocks: true,
        require_standard: false,
        mine_blocks_on_demand: true,
        data_dir_suffix: "regtest",
        dns_seeds: Vec::new(),
        fixed_seeds: Vec::new(),
        base58_prefixes: TESTNET_BASE58_PREFIXES,
    };
    params.assert_consistent();
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genesis_round_trip() {
        for network in NetworkType::iter() {
            let params = Params::new(network);
            assert_eq!(params.network(), network);
            assert_eq!(params.genesis_block().hash(), params.genesis_hash());
        }
    }

    #[test]
    fn test_distinct_networks() {
        assert_distinct_networks();
    }

    #[test]
    fn test_pow_limits_total_and_regtest_loosest() {
        let main = mainnet_params();
        let regtest = regtest_params();
        for algo in PowAlgorithm::ALL {
            assert!(!main.pow_limit(algo).is_zero());
            assert!(regtest.pow_limit(algo) > main.pow_limit(algo), "{algo}");
        }
        assert_eq!(main.pow_limit(PowAlgorithm::Sha256d), U256::MAX >> 32);
        assert_eq!(main.pow_limit(PowAlgorithm::Qubit), U256::MAX >> 20);
    }

    #[test]
    fn test_base58_prefixes() {
        for network in NetworkType::iter() {
            let params = Params::new(network);
            for kind in Base58Type::ALL {
                assert!(!params.base58_prefix(kind).is_empty(), "{network} {kind}");
            }
        }
        assert_eq!(mainnet_params().base58_prefix(Base58Type::PubkeyAddress), &[50]);
        assert_eq!(testnet_params().base58_prefix(Base58Type::SecretKey), &[239]);
        assert_eq!(regtest_params().base58_prefixes(), testnet_params().base58_prefixes());
    }

    #[test]
    fn test_policy_flags() {
        let main = mainnet_params();
        assert!(main.require_rpc_password());
        assert!(main.mining_requires_peers());
        assert!(main.require_standard());
        assert!(!main.allow_min_difficulty_blocks());
        assert!(!main.mine_blocks_on_demand());
        assert!(!main.default_check_mempool());

        let test = testnet_params();
        assert!(test.allow_min_difficulty_blocks());
        assert!(!test.require_standard());
        assert!(test.require_rpc_password());

        let regtest = regtest_params();
        assert!(regtest.mine_blocks_on_demand());
        assert!(regtest.default_check_mempool());
        assert!(!regtest.require_rpc_password());
        assert!(!regtest.mining_requires_peers());
        assert!(regtest.allow_min_difficulty_blocks());
        assert_eq!(regtest.default_miner_threads(), 1);
        assert_eq!(main.default_miner_threads(), 0);
    }

    #[test]
    fn test_timing() {
        for network in NetworkType::iter() {
            let params = Params::new(network);
            assert_eq!(params.target_timespan(), 86_400);
            assert_eq!(params.target_spacing(), 150);
            assert_eq!(params.retarget_interval(), 576);
        }
        assert_eq!(mainnet_params().subsidy_halving_interval(), 967_680);
        assert_eq!(regtest_params().subsidy_halving_interval(), 150);
    }

    #[test]
    fn test_seeds_and_storage() {
        let main = mainnet_params();
        assert_eq!(main.dns_seeds().len(), 2);
        assert!(!main.fixed_seeds().is_empty());
        assert_eq!(main.data_dir_suffix(), "");

        let test = testnet_params();
        assert_eq!(test.dns_seeds().len(), 1);
        assert!(test.fixed_seeds().is_empty());
        assert_eq!(test.data_dir_suffix(), "testnet");

        let regtest = regtest_params();
        assert!(regtest.dns_seeds().is_empty());
        assert!(regtest.fixed_seeds().is_empty());
        assert_eq!(regtest.data_dir_suffix(), "regtest");
    }

    #[test]
    fn test_alert_keys_and_ids() {
        assert_eq!(mainnet_params().alert_key().len(), 65);
        assert_eq!(testnet_params().alert_key().len(), 65);
        assert!(regtest_params().alert_key().is_empty());

        assert_eq!(mainnet_params().network_id_string(), "main");
        assert_eq!(testnet_params().network_id_string(), "test");
        assert_eq!(regtest_params().network_id_string(), "regtest");
    }

    #[test]
    fn test_ports() {
        let main = mainnet_params();
        assert_eq!((main.default_port(), main.rpc_port()), (10888, 10889));
        let test = testnet_params();
        assert_eq!((test.default_port(), test.rpc_port()), (20888, 20889));
        let regtest = regtest_params();
        assert_eq!((regtest.default_port(), regtest.rpc_port()), (18444, 18445));
    }

    #[test]
    #[should_panic(expected = "genesis_hash")]
    fn test_inconsistent_genesis_panics() {
        let mut params = mainnet_params();
        params.genesis_hash = TESTNET_GENESIS.hash;
        params.assert_consistent();
    }

    #[test]
    #[should_panic(expected = "exceed the sha256d pow limit")]
    fn test_genesis_looser_than_pow_limit_panics() {
        let mut params = mainnet_params();
        params.genesis_block.header.bits = 0x1e0f_fff0;
        params.genesis_hash = params.genesis_block.hash();
        params.assert_consistent();
    }

    #[test]
    fn test_genesis_bits_within_pow_limit() {
        for network in NetworkType::iter() {
            let params = Params::new(network);
            let target = bits_to_target(params.genesis_block().header.bits);
            assert!(target <= params.pow_limit(GENESIS_POW_ALGORITHM), "{network}");
        }
    }

    #[test]
    #[should_panic(expected = "pow limit for skein is zero")]
    fn test_zero_pow_limit_panics() {
        let mut params = regtest_params();
        params.pow_limits.skein = U256::zero();
        params.assert_consistent();
    }

    #[test]
    #[should_panic(expected = "base58 prefix script_address is empty")]
    fn test_empty_base58_prefix_panics() {
        let mut params = testnet_params();
        params.base58_prefixes.script_address = &[];
        params.assert_consistent();
    }

    #[test]
    #[should_panic(expected = "default_port equals rpc_port")]
    fn test_port_clash_panics() {
        let mut params = mainnet_params();
        params.rpc_port = params.default_port;
        params.assert_consistent();
    }

    #[test]
    #[should_panic(expected = "DNS seed with empty name or host")]
    fn test_empty_dns_seed_panics() {
        let mut params = testnet_params();
        params.dns_seeds.push(DnsSeed::new("", "seed.example"));
        params.assert_consistent();
    }
}
