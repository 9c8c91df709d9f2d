use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::params::{MAINNET_MESSAGE_START, REGTEST_MESSAGE_START, TESTNET_MESSAGE_START};
use crate::constants::MESSAGE_START_SIZE;
use crate::errors::NetworkParseError;

/// Network type identifies the network a node is operating on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    /// Production network
    Mainnet,
    /// Public test network, reset from time to time
    Testnet,
    /// Private regression-test network with trivial proof of work
    Regtest,
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::Mainnet => write!(f, "mainnet"),
            NetworkType::Testnet => write!(f, "testnet"),
            NetworkType::Regtest => write!(f, "regtest"),
        }
    }
}

impl FromStr for NetworkType {
    type Err = NetworkParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" => Ok(NetworkType::Mainnet),
            "testnet" | "test" => Ok(NetworkType::Testnet),
            "regtest" => Ok(NetworkType::Regtest),
            _ => Err(NetworkParseError::UnknownNetwork(s.to_string())),
        }
    }
}

impl NetworkType {
    /// Returns an iterator over all NetworkType variants
    pub fn iter() -> impl Iterator<Item = NetworkType> {
        [NetworkType::Mainnet, NetworkType::Testnet, NetworkType::Regtest].into_iter()
    }

    /// BIP70 network string: "main", "test" or "regtest"
    pub fn bip70_name(self) -> &'static str {
        match self {
            NetworkType::Mainnet => "main",
            NetworkType::Testnet => "test",
            NetworkType::Regtest => "regtest",
        }
    }

    /// Returns the network whose wire messages start with `magic`.
    pub fn from_message_start(magic: &[u8; MESSAGE_START_SIZE]) -> Option<NetworkType> {
        // Note: any new network must be added here and to the builders in config::params
        match *magic {
            MAINNET_MESSAGE_START => Some(NetworkType::Mainnet),
            TESTNET_MESSAGE_START => Some(NetworkType::Testnet),
            REGTEST_MESSAGE_START => Some(NetworkType::Regtest),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_display() {
        assert_eq!(NetworkType::Mainnet.to_string(), "mainnet");
        assert_eq!(NetworkType::Testnet.to_string(), "testnet");
        assert_eq!(NetworkType::Regtest.to_string(), "regtest");
    }

    #[test]
    fn test_network_from_str() {
        assert_eq!("mainnet".parse::<NetworkType>().unwrap(), NetworkType::Mainnet);
        assert_eq!("main".parse::<NetworkType>().unwrap(), NetworkType::Mainnet);
        assert_eq!("TESTNET".parse::<NetworkType>().unwrap(), NetworkType::Testnet);
        assert_eq!("test".parse::<NetworkType>().unwrap(), NetworkType::Testnet);
        assert_eq!("regtest".parse::<NetworkType>().unwrap(), NetworkType::Regtest);
        assert!("devnet".parse::<NetworkType>().is_err());
    }

    #[test]
    fn test_bip70_names() {
        let names: Vec<_> = NetworkType::iter().map(NetworkType::bip70_name).collect();
        assert_eq!(names, vec!["main", "test", "regtest"]);
    }

    #[test]
    fn test_from_message_start() {
        for network in NetworkType::iter() {
            let magic = crate::Params::new(network).message_start();
            assert_eq!(NetworkType::from_message_start(&magic), Some(network));
        }
        assert_eq!(NetworkType::from_message_start(&[0, 0, 0, 0]), None);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&NetworkType::Regtest).unwrap(), "\"regtest\"");
        let parsed: NetworkType = serde_json::from_str("\"testnet\"").unwrap();
        assert_eq!(parsed, NetworkType::Testnet);
    }
}
