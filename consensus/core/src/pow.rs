//! Proof-of-work algorithms and per-algorithm difficulty bounds.
//!
//! Tessera blocks are mined with one of five hash algorithms, each retargeted
//! independently. Every network therefore carries one proof-of-work limit per
//! algorithm; [`PowLimits`] stores them as named fields so a builder cannot
//! forget one.

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::NetworkParseError;
use crate::Hash;

/// Number of supported proof-of-work algorithms
pub const NUM_ALGOS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowAlgorithm {
    Sha256d,
    Scrypt,
    Groestl,
    Skein,
    Qubit,
}

impl PowAlgorithm {
    pub const ALL: [PowAlgorithm; NUM_ALGOS] =
        [PowAlgorithm::Sha256d, PowAlgorithm::Scrypt, PowAlgorithm::Groestl, PowAlgorithm::Skein, PowAlgorithm::Qubit];

    pub fn name(self) -> &'static str {
        match self {
            PowAlgorithm::Sha256d => "sha256d",
            PowAlgorithm::Scrypt => "scrypt",
            PowAlgorithm::Groestl => "groestl",
            PowAlgorithm::Skein => "skein",
            PowAlgorithm::Qubit => "qubit",
        }
    }
}

impl fmt::Display for PowAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PowAlgorithm {
    type Err = NetworkParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        PowAlgorithm::ALL
            .into_iter()
            .find(|algo| algo.name() == lower)
            .ok_or_else(|| NetworkParseError::UnknownAlgorithm(s.to_string()))
    }
}

/// Loosest valid target for each algorithm on one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowLimits {
    pub sha256d: U256,
    pub scrypt: U256,
    pub groestl: U256,
    pub skein: U256,
    pub qubit: U256,
}

impl PowLimits {
    pub fn get(&self, algo: PowAlgorithm) -> U256 {
        match algo {
            PowAlgorithm::Sha256d => self.sha256d,
            PowAlgorithm::Scrypt => self.scrypt,
            PowAlgorithm::Groestl => self.groestl,
            PowAlgorithm::Skein => self.skein,
            PowAlgorithm::Qubit => self.qubit,
        }
    }

    /// Iterates `(algorithm, limit)` pairs in [`PowAlgorithm::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (PowAlgorithm, U256)> + '_ {
        PowAlgorithm::ALL.into_iter().map(move |algo| (algo, self.get(algo)))
    }
}

/// Converts difficulty bits (compact form) to a 256-bit target.
///
/// Negative encodings (sign bit set) and overflowing exponents decode to
/// zero, a target no hash can meet.
pub fn bits_to_target(bits: u32) -> U256 {
    let exponent = (bits >> 24) as usize;
    let mantissa = bits & 0x007f_ffff;

    if bits & 0x0080_0000 != 0 && mantissa != 0 {
        return U256::zero();
    }

    if exponent <= 3 {
        U256::from(mantissa >> (8 * (3 - exponent)))
    } else {
        let shift = 8 * (exponent - 3);
        let significant_bits = 32 - mantissa.leading_zeros() as usize;
        if significant_bits + shift > 256 {
            return U256::zero();
        }
        U256::from(mantissa) << shift
    }
}

/// Interprets a hash as the little-endian 256-bit number PoW compares.
pub fn hash_to_u256(hash: &Hash) -> U256 {
    U256::from_little_endian(hash.as_bytes())
}

/// Whether `hash` meets the target encoded by `bits`.
pub fn hash_meets_target(hash: &Hash, bits: u32) -> bool {
    let target = bits_to_target(bits);
    !target.is_zero() && hash_to_u256(hash) <= target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_to_target() {
        // Bitcoin's original limit
        let target = bits_to_target(0x1d00ffff);
        assert_eq!(target, U256::from(0xffffu64) << 208);

        assert_eq!(bits_to_target(0x207fffff), U256::from(0x7fffffu64) << 232);
        assert_eq!(bits_to_target(0x03123456), U256::from(0x123456u64));
        assert_eq!(bits_to_target(0x02123456), U256::from(0x1234u64));
    }

    #[test]
    fn test_bits_to_target_degenerate() {
        assert!(bits_to_target(0x04923456).is_zero());
        assert!(bits_to_target(0xff123456).is_zero());
    }

    #[test]
    fn test_algorithm_names_roundtrip() {
        for algo in PowAlgorithm::ALL {
            assert_eq!(algo.to_string().parse::<PowAlgorithm>().unwrap(), algo);
        }
        assert_eq!("SCRYPT".parse::<PowAlgorithm>().unwrap(), PowAlgorithm::Scrypt);
        assert!("x11".parse::<PowAlgorithm>().is_err());
    }

    #[test]
    fn test_limits_lookup_is_total() {
        let limits = PowLimits {
            sha256d: U256::from(1u64),
            scrypt: U256::from(2u64),
            groestl: U256::from(3u64),
            skein: U256::from(4u64),
            qubit: U256::from(5u64),
        };
        let values: Vec<u64> = limits.iter().map(|(_, limit)| limit.low_u64()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
        assert_eq!(limits.get(PowAlgorithm::Skein), U256::from(4u64));
    }

    #[test]
    fn test_hash_meets_target() {
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        let tiny = Hash::from_bytes(bytes);
        assert!(hash_meets_target(&tiny, 0x207fffff));
        assert!(!hash_meets_target(&Hash::from_bytes([0xff; 32]), 0x207fffff));
        assert!(!hash_meets_target(&tiny, 0x04923456));
    }
}
