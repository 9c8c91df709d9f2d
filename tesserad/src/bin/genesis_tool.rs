use clap::Parser;
use consensus_core::block::{Block, Header};
use consensus_core::config::genesis::{GenesisBlock, GENESIS, REGTEST_GENESIS, TESTNET_GENESIS};
use consensus_core::pow::{bits_to_target, hash_meets_target};
use consensus_core::NetworkType;
use std::process;
use std::time::Instant;

/// Prints, verifies and re-mines the genesis block of a Tessera network.
#[derive(Parser, Debug)]
#[command(name = "genesis_tool")]
struct Opts {
    /// Network whose genesis block to start from (mainnet, testnet, regtest)
    #[arg(long, default_value = "mainnet")]
    network: NetworkType,

    /// Search for a nonce meeting the target, starting from zero
    #[arg(long)]
    mine: bool,

    /// Override bits (compact representation). Accepts decimal or 0x-prefixed hex.
    #[arg(long, value_parser = parse_bits)]
    bits: Option<u32>,

    /// Override header time (seconds since the epoch)
    #[arg(long)]
    time: Option<u32>,

    /// Print the serialized-as-JSON block
    #[arg(long)]
    json: bool,
}

fn parse_bits(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    };
    parsed.map_err(|e| format!("invalid bits '{s}': {e}"))
}

fn genesis_for(network: NetworkType) -> &'static GenesisBlock {
    match network {
        NetworkType::Mainnet => &GENESIS,
        NetworkType::Testnet => &TESTNET_GENESIS,
        NetworkType::Regtest => &REGTEST_GENESIS,
    }
}

/// Scans the whole nonce space for a header meeting its own target.
fn mine(header: &mut Header) -> bool {
    let start = Instant::now();
    for nonce in 0..=u32::MAX {
        header.nonce = nonce;
        if hash_meets_target(&header.hash(), header.bits) {
            println!("Found valid nonce {} in {:.2}s", nonce, start.elapsed().as_secs_f64());
            return true;
        }
        if nonce % 1_000_000 == 0 && nonce > 0 {
            let rate = nonce as f64 / start.elapsed().as_secs_f64().max(1e-6);
            println!("Tried {} nonces (rate {:.2} kH/s)", nonce, rate / 1000.0);
        }
    }
    false
}

/// Genesis header of `network` with the command-line overrides applied
fn header_with_overrides(network: NetworkType, bits: Option<u32>, time: Option<u32>) -> Header {
    let mut header: Header = genesis_for(network).into();
    if let Some(bits) = bits {
        header.bits = bits;
    }
    if let Some(time) = time {
        header.time = time;
    }
    header
}

fn main() {
    let opts = Opts::parse();

    let genesis = genesis_for(opts.network);
    let mut header = header_with_overrides(opts.network, opts.bits, opts.time);

    if opts.mine && !mine(&mut header) {
        eprintln!("Nonce space exhausted without meeting target 0x{:08x}", header.bits);
        process::exit(1);
    }

    let block = Block::new(header, genesis.build_genesis_transactions());
    let hash = block.hash();

    if opts.json {
        match serde_json::to_string_pretty(&block) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Failed to serialize block: {e}"),
        }
    }

    println!("Network: {}", opts.network);
    println!("Genesis hash: {}", hash);
    println!("Merkle root: {}", block.header.hash_merkle_root);
    println!("Time: {}", block.header.time);
    println!("Bits: 0x{:08x}", block.header.bits);
    println!("Nonce: {}", block.header.nonce);
    println!("Meets target: {}", hash_meets_target(&hash, block.header.bits));
    println!("Target: 0x{:x}", bits_to_target(block.header.bits));

    if hash == genesis.hash {
        println!("Matches built-in {} genesis", opts.network);
    } else if opts.bits.is_none() && opts.time.is_none() && !opts.mine {
        eprintln!("Built-in {} genesis hash {} does not match rebuilt block", opts.network, genesis.hash);
        process::exit(1);
    }
}
