pub mod builders;
pub mod hasher;

// Re-export commonly used types
pub use builders::HeaderHashBuilder;
pub use hasher::{double_sha256, sha256, HashError, HashWriter, Hashable};

use std::fmt;
use std::hash::Hash as StdHash;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const HASH_SIZE: usize = 32;

/// A 32-byte hash wrapper used across the project.
///
/// Bytes are stored in the order the hash function produced them. The
/// textual form follows the Bitcoin convention of printing the bytes
/// reversed, so that hashes read as big-endian 256-bit numbers and
/// proof-of-work hashes show their leading zeros.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hash([u8; HASH_SIZE]);

impl Hash {
    /// Create a hash from a 32-byte array
    pub const fn from_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns raw bytes
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    /// Creates a zeroed hash
    pub const fn zeroed() -> Self {
        Self([0u8; HASH_SIZE])
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Tries to create a Hash from a slice of bytes
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, HashError> {
        let array: [u8; HASH_SIZE] = slice.try_into().map_err(|_| HashError::InvalidLength(slice.len()))?;
        Ok(Self(array))
    }

    /// Parses the reversed (display) hex form, e.g. a genesis hash as printed
    /// by block explorers.
    pub fn from_hex(s: &str) -> Result<Self, HashError> {
        let mut bytes = [0u8; HASH_SIZE];
        hex::decode_to_slice(s, &mut bytes).map_err(|e| HashError::InvalidHex(e.to_string()))?;
        bytes.reverse();
        Ok(Self(bytes))
    }

    /// Reversed hex form, the inverse of [`Hash::from_hex`].
    pub fn to_hex(&self) -> String {
        let mut bytes = self.0;
        bytes.reverse();
        hex::encode(bytes)
    }
}

impl From<[u8; HASH_SIZE]> for Hash {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Hash> for [u8; HASH_SIZE] {
    fn from(h: Hash) -> Self {
        h.0
    }
}

impl TryFrom<&[u8]> for Hash {
    type Error = HashError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from_slice(slice)
    }
}

impl FromStr for Hash {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_hex())
    }
}

impl StdHash for Hash {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // the low word is already uniformly distributed
        let mut le = [0u8; 8];
        le.copy_from_slice(&self.0[0..8]);
        u64::from_le_bytes(le).hash(state);
    }
}

impl Deref for Hash {
    type Target = [u8; HASH_SIZE];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl hasher::Hashable for Hash {
    fn hash_into(&self, state: &mut HashWriter) {
        state.update(&self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_byte_reversed() {
        let mut bytes = [0u8; 32];
        bytes[31] = 0xab;
        bytes[0] = 0x01;
        let h = Hash::from_bytes(bytes);
        let text = h.to_string();
        assert!(text.starts_with("ab"));
        assert!(text.ends_with("01"));
        assert_eq!(text.parse::<Hash>().unwrap(), h);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(Hash::from_hex("00"), Err(HashError::InvalidHex(_))));
        assert!(matches!(Hash::try_from_slice(&[0u8; 31]), Err(HashError::InvalidLength(31))));
    }

    #[test]
    fn zeroed_is_zero() {
        assert!(Hash::zeroed().is_zero());
        assert!(!Hash::from_bytes([1u8; 32]).is_zero());
    }
}
