//! User interface utilities for better console output

use consensus_core::config::base58::Base58Type;
use consensus_core::Params;

use crate::settings::{NodeSettings, PeerBootstrap};

/// ANSI color codes for terminal output
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const BRIGHT_RED: &str = "\x1b[91m";
    pub const BRIGHT_GREEN: &str = "\x1b[92m";
    pub const BRIGHT_YELLOW: &str = "\x1b[93m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
    pub const BRIGHT_WHITE: &str = "\x1b[97m";
}

/// Print startup banner
pub fn print_banner(version: &str, network: &str) {
    println!();
    println!("{}╔══════════════════════════════════════════════════════════════╗{}", colors::BRIGHT_CYAN, colors::RESET);
    println!("{}║{}                                                              {}║{}", colors::BRIGHT_CYAN, colors::RESET, colors::BRIGHT_CYAN, colors::RESET);
    println!("{}║{}              {}TESSERA NODE - TESSERAD v{:<8}{}                {}║{}",
        colors::BRIGHT_CYAN, colors::RESET, colors::BOLD, version, colors::RESET, colors::BRIGHT_CYAN, colors::RESET);
    println!("{}║{}                                                              {}║{}", colors::BRIGHT_CYAN, colors::RESET, colors::BRIGHT_CYAN, colors::RESET);
    println!("{}║{}  Network: {}{:<50}{}  {}║{}",
        colors::BRIGHT_CYAN, colors::RESET, colors::BRIGHT_GREEN, network, colors::RESET, colors::BRIGHT_CYAN, colors::RESET);
    println!("{}║{}                                                              {}║{}", colors::BRIGHT_CYAN, colors::RESET, colors::BRIGHT_CYAN, colors::RESET);
    println!("{}╚══════════════════════════════════════════════════════════════╝{}", colors::BRIGHT_CYAN, colors::RESET);
    println!();
}

/// Print status line with icon and color
pub fn print_status(icon: &str, message: &str, status: StatusType) {
    let color = match status {
        StatusType::Success => colors::BRIGHT_GREEN,
        StatusType::Info => colors::BRIGHT_CYAN,
        StatusType::Warning => colors::BRIGHT_YELLOW,
        StatusType::Error => colors::BRIGHT_RED,
    };

    println!("{}[{}]{} {} {}{}", color, icon, colors::RESET, color, message, colors::RESET);
}

/// Status types for colored output
#[derive(Debug, Clone, Copy)]
pub enum StatusType {
    Success,
    Info,
    Warning,
    Error,
}

/// Print a section header
pub fn print_section(title: &str) {
    println!();
    println!("{}━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━{}", colors::DIM, colors::RESET);
    println!("{}  {}{}{}", colors::BRIGHT_CYAN, colors::BOLD, title, colors::RESET);
    println!("{}━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━{}", colors::DIM, colors::RESET);
    println!();
}

/// Print key-value pair in a formatted way
pub fn print_kv(key: &str, value: &str) {
    println!("  {}{}:{} {}{}{}",
        colors::BRIGHT_WHITE, key, colors::RESET,
        colors::BRIGHT_CYAN, value, colors::RESET);
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Print the consensus constants of the selected network
pub fn print_params_summary(params: &Params) {
    print_section("Chain Parameters");

    print_kv("Network", &format!("{} ({})", params.network(), params.network_id_string()));
    print_kv("Genesis", &params.genesis_hash().to_string());
    print_kv("Message Start", &hex::encode(params.message_start()));
    print_kv("Ports (p2p/rpc)", &format!("{}/{}", params.default_port(), params.rpc_port()));
    print_kv(
        "Retarget",
        &format!(
            "every {} blocks ({}s window, {}s spacing)",
            params.retarget_interval(),
            params.target_timespan(),
            params.target_spacing()
        ),
    );
    print_kv("Halving Interval", &params.subsidy_halving_interval().to_string());
    for (algo, limit) in params.pow_limits().iter() {
        print_kv(&format!("PoW Limit {}", algo), &format!("2^{} - 1", limit.bits()));
    }
    print_kv("Min-Difficulty Blocks", yes_no(params.allow_min_difficulty_blocks()));
    print_kv("Standard Txs Only", yes_no(params.require_standard()));
    print_kv("Address Prefix", &hex::encode(params.base58_prefix(Base58Type::PubkeyAddress)));
}

/// Print the effective node settings
pub fn print_settings_summary(settings: &NodeSettings) {
    print_section("Configuration");

    print_kv("Data Directory", settings.data_dir.to_str().unwrap_or("N/A"));
    print_kv("P2P Listen", &format!("{}:{}", settings.listen_address, settings.p2p_port));
    let rpc_status = match &settings.rpc {
        Some(rpc) => format!("{}:{}", rpc.bind_address, rpc.port),
        None => "Disabled".to_string(),
    };
    print_kv("RPC Server", &rpc_status);
    match &settings.mining {
        Some(mining) => {
            print_kv("Mining", "Enabled");
            print_kv("Mining Threads", &mining.threads.to_string());
            if mining.on_demand {
                print_kv("Mining Mode", "on demand");
            }
        }
        None => print_kv("Mining", "Disabled"),
    }
    let peers = match &settings.peer_bootstrap {
        PeerBootstrap::Manual(peers) => peers.join(", "),
        PeerBootstrap::Seeds { dns_seeds, fixed_seeds } => {
            format!("{} DNS seeds, {} fixed seeds", dns_seeds.len(), fixed_seeds.len())
        }
        PeerBootstrap::None => "none".to_string(),
    };
    print_kv("Peer Bootstrap", &peers);
    print_kv("Check Mempool", yes_no(settings.check_mempool));
}
