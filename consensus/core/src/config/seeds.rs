//! Peer discovery bootstrap data: DNS seeds and hardcoded fixed seeds.

use serde::Serialize;
use std::net::{Ipv4Addr, SocketAddr};

/// A DNS seed: a hostname whose A/AAAA records list reachable peers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DnsSeed {
    /// Operator label, shown in logs
    pub name: &'static str,
    pub host: &'static str,
}

impl DnsSeed {
    pub const fn new(name: &'static str, host: &'static str) -> Self {
        Self { name, host }
    }
}

pub const MAINNET_DNS_SEEDS: &[DnsSeed] = &[
    DnsSeed::new("tessera.network", "seed.tessera.network"),
    DnsSeed::new("tesserapool.org", "dnsseed.tesserapool.org"),
];

pub const TESTNET_DNS_SEEDS: &[DnsSeed] = &[DnsSeed::new("tessera.network", "testnet-seed.tessera.network")];

/// Long-running mainnet nodes, tried when DNS seeding yields nothing.
const MAINNET_FIXED_SEEDS: &[([u8; 4], u16)] = &[
    ([192, 0, 2, 17], 10888),
    ([192, 0, 2, 94], 10888),
    ([198, 51, 100, 23], 10888),
    ([198, 51, 100, 161], 10888),
    ([203, 0, 113, 8], 10888),
    ([203, 0, 113, 200], 10888),
];

pub fn mainnet_fixed_seeds() -> Vec<SocketAddr> {
    to_socket_addrs(MAINNET_FIXED_SEEDS)
}

fn to_socket_addrs(table: &[([u8; 4], u16)]) -> Vec<SocketAddr> {
    table.iter().map(|&(octets, port)| SocketAddr::from((Ipv4Addr::from(octets), port))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixed_seeds_are_unique_and_on_mainnet_port() {
        let seeds = mainnet_fixed_seeds();
        assert_eq!(seeds.len(), MAINNET_FIXED_SEEDS.len());
        assert_eq!(seeds.iter().collect::<HashSet<_>>().len(), seeds.len());
        assert!(seeds.iter().all(|addr| addr.port() == 10888));
    }

    #[test]
    fn test_dns_seeds_non_empty() {
        for seed in MAINNET_DNS_SEEDS.iter().chain(TESTNET_DNS_SEEDS) {
            assert!(!seed.name.is_empty());
            assert!(!seed.host.is_empty());
        }
        assert_eq!(MAINNET_DNS_SEEDS.len(), 2);
        assert_eq!(TESTNET_DNS_SEEDS.len(), 1);
    }
}
