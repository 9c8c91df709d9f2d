use thiserror::Error;

use crate::network::NetworkType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Invalid combination of --regtest and --testnet")]
    ConflictingNetworkFlags,

    #[error("chain parameters for {active} are already selected, refusing to switch to {requested}")]
    AlreadySelected { active: NetworkType, requested: NetworkType },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkParseError {
    #[error("Unknown network type: {0}")]
    UnknownNetwork(String),

    #[error("Unknown proof-of-work algorithm: {0}")]
    UnknownAlgorithm(String),
}
