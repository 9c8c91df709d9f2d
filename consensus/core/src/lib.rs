//! Consensus core types for Tessera.
//!
//! Besides the minimal block model needed to describe each network's genesis
//! block, this crate owns the chain parameters: the per-network constant sets
//! in [`config::params`] and the write-once process-wide selection of one of
//! them in [`config::selection`].

pub mod block;
pub mod config;
pub mod constants;
pub mod errors;
pub mod hashing;
pub mod merkle;
pub mod network;
pub mod pow;
pub mod tx;

pub use crypto_hashes::Hash;

pub use config::params::Params;
pub use config::selection::{
    current_network, params, params_selected, select_params, select_params_from_flags, try_params, NetworkFlags, ParamsSelector,
};
pub use network::NetworkType;
pub use pow::{PowAlgorithm, PowLimits};

/// All-zero hash, used as the previous-block link of every genesis header.
pub const ZERO_HASH: Hash = Hash::zeroed();
