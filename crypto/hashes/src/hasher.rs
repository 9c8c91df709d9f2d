use sha2::{Digest, Sha256};
use std::io::Write;
use thiserror::Error;

use crate::Hash;

/// Types that feed their consensus encoding into a [`HashWriter`].
pub trait Hashable {
    fn hash_into(&self, state: &mut HashWriter);

    /// Double SHA-256 of the encoding, the identifier used for headers and
    /// transactions.
    fn double_sha256(&self) -> Hash {
        let mut writer = HashWriter::new();
        self.hash_into(&mut writer);
        writer.finalize_double()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashError {
    #[error("Hash decoding error: expected 32 bytes, got {0}")]
    InvalidLength(usize),

    #[error("Hash decoding error: {0}")]
    InvalidHex(String),
}

/// Compute SHA256(SHA256(data))
pub fn double_sha256(data: &[u8]) -> Hash {
    let first = Sha256::digest(data);
    Hash::from_bytes(Sha256::digest(first).into())
}

/// Compute SHA256(data)
pub fn sha256(data: &[u8]) -> Hash {
    Hash::from_bytes(Sha256::digest(data).into())
}

/// HashWriter wraps a Sha256 hasher to implement Write trait
#[derive(Clone)]
pub struct HashWriter(Sha256);

impl HashWriter {
    pub fn new() -> Self {
        Self(Sha256::new())
    }

    pub fn update(&mut self, bytes: impl AsRef<[u8]>) {
        self.0.update(bytes);
    }

    pub fn finalize(self) -> Hash {
        Hash::from_bytes(self.0.finalize().into())
    }

    /// Finishes the stream and hashes the digest once more.
    pub fn finalize_double(self) -> Hash {
        let first = self.0.finalize();
        Hash::from_bytes(Sha256::digest(first).into())
    }

    pub fn hash_object<T: Hashable + ?Sized>(&mut self, obj: &T) {
        obj.hash_into(self);
    }
}

impl Write for HashWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Default for HashWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_double_sha256() {
        let hash = double_sha256(b"hello");
        assert_eq!(
            hash.as_bytes(),
            &hex!("9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50")
        );
    }

    #[test]
    fn test_hash_writer() {
        let mut writer = HashWriter::new();
        writer.write_all(b"hello").unwrap();
        assert_eq!(
            writer.finalize().as_bytes(),
            &hex!("2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824")
        );
    }

    #[test]
    fn test_writer_double_matches_free_function() {
        let mut writer = HashWriter::new();
        writer.update(b"hel");
        writer.update(b"lo");
        assert_eq!(writer.finalize_double(), double_sha256(b"hello"));
    }
}
