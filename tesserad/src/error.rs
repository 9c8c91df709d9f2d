use consensus_core::NetworkType;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NodeError {
    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead { path: PathBuf, source: std::io::Error },

    #[error("Failed to parse config file {}: {source}", path.display())]
    ConfigParse { path: PathBuf, source: toml::de::Error },

    #[error("Invalid combination of --regtest and --testnet.")]
    InvalidNetworkFlags,

    #[error("RPC on {0} requires a password, set rpc.password or pass --rpc-password")]
    RpcPasswordRequired(NetworkType),

    #[error("Failed to serialize chain parameters: {0}")]
    DumpParams(#[source] serde_json::Error),

    #[error("Failed to create data directory {}: {source}", path.display())]
    DataDir { path: PathBuf, source: std::io::Error },
}
