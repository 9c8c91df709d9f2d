use consensus_core::NetworkFlags;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::error::NodeError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub storage: StorageConfig,
    pub rpc: RpcConfig,
    pub mining: MiningConfig,
    pub p2p: P2PConfig,
}

/// Network switches; merged with the command line, either source can set them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub testnet: bool,
    pub regtest: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Base directory, the network suffix is appended at startup
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpcConfig {
    pub enabled: bool,
    pub bind_address: String,
    /// Network default when unset
    pub port: Option<u16>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    pub enabled: bool,
    /// Negative or unset means the network default
    pub threads: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct P2PConfig {
    pub listen_address: String,
    /// Network default when unset
    pub port: Option<u16>,
    pub max_peers: usize,
    pub dns_seed: bool,
    pub bootstrap_peers: Vec<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: PathBuf::from("./data") }
    }
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self { enabled: true, bind_address: "127.0.0.1".to_string(), port: None, password: None }
    }
}

impl Default for P2PConfig {
    fn default() -> Self {
        Self { listen_address: "0.0.0.0".to_string(), port: None, max_peers: 125, dns_seed: true, bootstrap_peers: vec![] }
    }
}

impl Config {
    /// Load configuration from file if it exists, otherwise use defaults
    pub fn load(path: &Path) -> Result<Self, NodeError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content =
            fs::read_to_string(path).map_err(|source| NodeError::ConfigRead { path: path.to_path_buf(), source })?;
        toml::from_str(&content).map_err(|source| NodeError::ConfigParse { path: path.to_path_buf(), source })
    }

    /// Override config with CLI arguments
    pub fn apply_cli_overrides(&mut self, args: &Args) {
        self.network.testnet |= args.testnet;
        self.network.regtest |= args.regtest;

        if let Some(data_dir) = &args.data_dir {
            self.storage.data_dir = data_dir.clone();
        }

        if let Some(rpc_port) = args.rpc_port {
            self.rpc.port = Some(rpc_port);
        }

        if let Some(password) = &args.rpc_password {
            self.rpc.password = Some(password.clone());
        }

        if args.no_rpc {
            self.rpc.enabled = false;
        }

        if let Some(p2p_port) = args.p2p_port {
            self.p2p.port = Some(p2p_port);
        }

        if args.no_dns_seed {
            self.p2p.dns_seed = false;
        }

        if args.enable_mining {
            self.mining.enabled = true;
        }

        if let Some(threads) = args.miner_threads {
            self.mining.threads = Some(threads);
        }

        if let Some(peers) = &args.bootstrap_peers {
            self.p2p.bootstrap_peers =
                peers.split(',').map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect();
        }
    }

    pub fn network_flags(&self) -> NetworkFlags {
        NetworkFlags::new(self.network.testnet, self.network.regtest)
    }
}
