//! Effective node settings: the loaded [`Config`] resolved against the
//! selected network's chain parameters.

use consensus_core::config::base58::Base58Type;
use consensus_core::{NetworkType, Params, PowAlgorithm};
use primitive_types::U256;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::NodeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcSettings {
    pub bind_address: String,
    pub port: u16,
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiningSettings {
    pub threads: usize,
    pub requires_peers: bool,
    pub on_demand: bool,
}

/// Where the node looks for its first peers, in order of preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeerBootstrap {
    /// Operator-supplied peers only
    Manual(Vec<String>),
    /// DNS seeds first, fixed seeds if they yield nothing
    Seeds { dns_seeds: Vec<String>, fixed_seeds: Vec<SocketAddr> },
    /// Nothing to connect to; regtest nodes are linked by hand
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSettings {
    pub network: NetworkType,
    pub data_dir: PathBuf,
    pub listen_address: String,
    pub p2p_port: u16,
    pub max_peers: usize,
    pub rpc: Option<RpcSettings>,
    pub mining: Option<MiningSettings>,
    pub check_mempool: bool,
    pub require_standard: bool,
    pub peer_bootstrap: PeerBootstrap,
}

impl NodeSettings {
    pub fn derive(config: &Config, params: &Params) -> Result<Self, NodeError> {
        let network = params.network();

        let data_dir = match params.data_dir_suffix() {
            "" => config.storage.data_dir.clone(),
            suffix => config.storage.data_dir.join(suffix),
        };

        let rpc = if config.rpc.enabled {
            let password = config.rpc.password.clone().filter(|p| !p.is_empty());
            if password.is_none() && params.require_rpc_password() {
                return Err(NodeError::RpcPasswordRequired(network));
            }
            Some(RpcSettings {
                bind_address: config.rpc.bind_address.clone(),
                port: config.rpc.port.unwrap_or(params.rpc_port()),
                password,
            })
        } else {
            None
        };

        let mining = config.mining.enabled.then(|| MiningSettings {
            threads: miner_threads(config.mining.threads, params),
            requires_peers: params.mining_requires_peers(),
            on_demand: params.mine_blocks_on_demand(),
        });

        Ok(Self {
            network,
            data_dir,
            listen_address: config.p2p.listen_address.clone(),
            p2p_port: config.p2p.port.unwrap_or(params.default_port()),
            max_peers: config.p2p.max_peers,
            rpc,
            mining,
            check_mempool: params.default_check_mempool(),
            require_standard: params.require_standard(),
            peer_bootstrap: peer_bootstrap(config, params),
        })
    }

    /// Creates the network's data directory if missing
    pub fn ensure_data_dir(&self) -> Result<(), NodeError> {
        if self.data_dir.is_dir() {
            debug!("Using existing data directory {:?}", self.data_dir);
            return Ok(());
        }
        info!("Creating data directory {:?}", self.data_dir);
        fs::create_dir_all(&self.data_dir).map_err(|source| NodeError::DataDir { path: self.data_dir.clone(), source })
    }
}

/// Configured thread count, falling back to the network default for negative
/// or missing values, and to one thread per core when that default is zero.
fn miner_threads(configured: Option<i32>, params: &Params) -> usize {
    let threads = match configured {
        Some(n) if n >= 0 => n,
        _ => params.default_miner_threads(),
    };
    if threads <= 0 {
        num_cpus::get()
    } else {
        threads as usize
    }
}

fn peer_bootstrap(config: &Config, params: &Params) -> PeerBootstrap {
    if !config.p2p.bootstrap_peers.is_empty() {
        return PeerBootstrap::Manual(config.p2p.bootstrap_peers.clone());
    }

    let dns_seeds: Vec<String> = if config.p2p.dns_seed {
        params.dns_seeds().iter().map(|seed| seed.host.to_string()).collect()
    } else {
        Vec::new()
    };
    let fixed_seeds = params.fixed_seeds().to_vec();

    if dns_seeds.is_empty() && fixed_seeds.is_empty() {
        if params.network() != NetworkType::Regtest {
            warn!("No peer sources available for {}", params.network());
        }
        return PeerBootstrap::None;
    }
    PeerBootstrap::Seeds { dns_seeds, fixed_seeds }
}

/// Serializable view of [`Params`] printed by `--dump-params`
#[derive(Debug, Serialize)]
pub struct ParamsSummary {
    pub network: NetworkType,
    pub network_id: &'static str,
    pub genesis_hash: String,
    pub genesis_time: u32,
    pub genesis_bits: String,
    pub message_start: String,
    pub alert_key: String,
    pub default_port: u16,
    pub rpc_port: u16,
    pub default_miner_threads: i32,
    pub pow_limits: BTreeMap<PowAlgorithm, String>,
    pub subsidy_halving_interval: u32,
    pub target_timespan: i64,
    pub target_spacing: i64,
    pub retarget_interval: i64,
    pub require_rpc_password: bool,
    pub mining_requires_peers: bool,
    pub default_check_mempool: bool,
    pub allow_min_difficulty_blocks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub data_dir_suffix: &'static str,
    pub dns_seeds: Vec<String>,
    pub fixed_seeds: Vec<SocketAddr>,
    pub base58_prefixes: BTreeMap<String, String>,
}

impl From<&Params> for ParamsSummary {
    fn from(params: &Params) -> Self {
        let header = params.genesis_block().header;
        Self {
            network: params.network(),
            network_id: params.network_id_string(),
            genesis_hash: params.genesis_hash().to_string(),
            genesis_time: header.time,
            genesis_bits: format!("0x{:08x}", header.bits),
            message_start: hex::encode(params.message_start()),
            alert_key: hex::encode(params.alert_key()),
            default_port: params.default_port(),
            rpc_port: params.rpc_port(),
            default_miner_threads: params.default_miner_threads(),
            pow_limits: params.pow_limits().iter().map(|(algo, limit)| (algo, target_hex(limit))).collect(),
            subsidy_halving_interval: params.subsidy_halving_interval(),
            target_timespan: params.target_timespan(),
            target_spacing: params.target_spacing(),
            retarget_interval: params.retarget_interval(),
            require_rpc_password: params.require_rpc_password(),
            mining_requires_peers: params.mining_requires_peers(),
            default_check_mempool: params.default_check_mempool(),
            allow_min_difficulty_blocks: params.allow_min_difficulty_blocks(),
            require_standard: params.require_standard(),
            mine_blocks_on_demand: params.mine_blocks_on_demand(),
            data_dir_suffix: params.data_dir_suffix(),
            dns_seeds: params.dns_seeds().iter().map(|seed| format!("{} ({})", seed.host, seed.name)).collect(),
            fixed_seeds: params.fixed_seeds().to_vec(),
            base58_prefixes: Base58Type::ALL
                .into_iter()
                .map(|kind| (kind.to_string(), hex::encode(params.base58_prefix(kind))))
                .collect(),
        }
    }
}

impl ParamsSummary {
    /// Pretty-printed JSON, as written by `--dump-params`
    pub fn to_json(&self) -> Result<String, NodeError> {
        serde_json::to_string_pretty(self).map_err(NodeError::DumpParams)
    }
}

/// Full-width big-endian hex of a target
fn target_hex(target: U256) -> String {
    let mut bytes = [0u8; 32];
    target.to_big_endian(&mut bytes);
    hex::encode(bytes)
}
