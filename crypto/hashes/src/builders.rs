use crate::{hasher::HashWriter, Hash};

/// Incrementally hashes an 80-byte Bitcoin-layout block header.
///
/// Fields must be added in consensus order: version, previous block,
/// merkle root, time, bits, nonce.
#[derive(Clone, Default)]
pub struct HeaderHashBuilder {
    writer: HashWriter,
}

impl HeaderHashBuilder {
    pub fn new() -> Self {
        Self { writer: HashWriter::new() }
    }

    pub fn add_version(&mut self, version: i32) -> &mut Self {
        self.writer.update(version.to_le_bytes());
        self
    }

    pub fn add_prev_block(&mut self, prev: &Hash) -> &mut Self {
        self.writer.update(prev.as_bytes());
        self
    }

    pub fn add_merkle_root(&mut self, root: &Hash) -> &mut Self {
        self.writer.update(root.as_bytes());
        self
    }

    pub fn add_time(&mut self, time: u32) -> &mut Self {
        self.writer.update(time.to_le_bytes());
        self
    }

    pub fn add_bits(&mut self, bits: u32) -> &mut Self {
        self.writer.update(bits.to_le_bytes());
        self
    }

    pub fn add_nonce(&mut self, nonce: u32) -> &mut Self {
        self.writer.update(nonce.to_le_bytes());
        self
    }

    pub fn finalize(self) -> Hash {
        self.writer.finalize_double()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::double_sha256;

    #[test]
    fn matches_flat_serialization() {
        let prev = Hash::from_bytes([7u8; 32]);
        let root = Hash::from_bytes([9u8; 32]);

        let mut builder = HeaderHashBuilder::new();
        builder.add_version(1).add_prev_block(&prev).add_merkle_root(&root).add_time(10).add_bits(0x207fffff).add_nonce(3);

        let mut flat = Vec::with_capacity(80);
        flat.extend_from_slice(&1i32.to_le_bytes());
        flat.extend_from_slice(prev.as_bytes());
        flat.extend_from_slice(root.as_bytes());
        flat.extend_from_slice(&10u32.to_le_bytes());
        flat.extend_from_slice(&0x207fffffu32.to_le_bytes());
        flat.extend_from_slice(&3u32.to_le_bytes());
        assert_eq!(flat.len(), 80);

        assert_eq!(builder.finalize(), double_sha256(&flat));
    }
}
