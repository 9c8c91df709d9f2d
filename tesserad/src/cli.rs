use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "tesserad")]
#[command(about = "Tessera node daemon", long_about = None)]
pub struct Args {
    /// Path to configuration file (optional, uses defaults if not provided)
    #[arg(short, long)]
    pub config_path: Option<PathBuf>,

    /// Data directory; testnet and regtest use a sub-directory of it
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Use the public test network
    #[arg(long)]
    pub testnet: bool,

    /// Use a private regression-test network
    #[arg(long)]
    pub regtest: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Enable mining
    #[arg(long)]
    pub enable_mining: bool,

    /// Miner threads, negative for the network default
    #[arg(long, allow_negative_numbers = true)]
    pub miner_threads: Option<i32>,

    /// RPC server port
    #[arg(long)]
    pub rpc_port: Option<u16>,

    /// RPC password
    #[arg(long)]
    pub rpc_password: Option<String>,

    /// P2P listen port
    #[arg(long)]
    pub p2p_port: Option<u16>,

    /// Bootstrap peers (comma-separated), replaces seed discovery
    #[arg(long)]
    pub bootstrap_peers: Option<String>,

    /// Do not query DNS seeds
    #[arg(long)]
    pub no_dns_seed: bool,

    /// Disable RPC server
    #[arg(long)]
    pub no_rpc: bool,

    /// Print the selected chain parameters as JSON and exit
    #[arg(long)]
    pub dump_params: bool,
}

pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_flags_parse() {
        let args = Args::try_parse_from(["tesserad", "--testnet", "--regtest"]).unwrap();
        assert!(args.testnet && args.regtest);

        let args = Args::try_parse_from(["tesserad"]).unwrap();
        assert!(!args.testnet && !args.regtest);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_negative_miner_threads() {
        let args = Args::try_parse_from(["tesserad", "--miner-threads", "-1", "--enable-mining"]).unwrap();
        assert_eq!(args.miner_threads, Some(-1));
        assert!(args.enable_mining);
    }
}
