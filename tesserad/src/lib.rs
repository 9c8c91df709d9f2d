//! Tesserad - Tessera node bootstrap
//!
//! Parses the command line and config file, selects the chain parameters of
//! the requested network and derives the effective node settings from them.

pub mod cli;
pub mod config;
pub mod error;
pub mod settings;
pub mod ui;

pub use cli::Args;
pub use config::Config;
pub use error::NodeError;
pub use settings::{NodeSettings, ParamsSummary};
