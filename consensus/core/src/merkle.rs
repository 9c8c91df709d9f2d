use crypto_hashes::HashWriter;

use crate::Hash;

/// Bitcoin-style merkle tree over transaction ids
#[derive(Clone, Debug)]
pub struct MerkleTree {
    /// Nodes at each level of the tree (leaves at level 0)
    levels: Vec<Vec<Hash>>,
}

impl MerkleTree {
    /// Odd levels pair their last node with itself.
    pub fn from_hashes(hashes: Vec<Hash>) -> Self {
        if hashes.is_empty() {
            return Self { levels: vec![] };
        }

        let mut levels = vec![hashes];
        while let Some(current_level) = levels.last().filter(|level| level.len() > 1) {
            let next_level: Vec<Hash> = current_level
                .chunks(2)
                .map(|chunk| {
                    let left = chunk[0];
                    let right = chunk.get(1).copied().unwrap_or(left);
                    Self::hash_pair(&left, &right)
                })
                .collect();
            levels.push(next_level);
        }

        Self { levels }
    }

    /// Returns the merkle root, or the zero hash for an empty tree
    pub fn root(&self) -> Hash {
        self.levels.last().and_then(|level| level.first().copied()).unwrap_or_default()
    }

    /// Number of leaves
    pub fn len(&self) -> usize {
        self.levels.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    fn hash_pair(left: &Hash, right: &Hash) -> Hash {
        let mut writer = HashWriter::new();
        writer.update(left.as_bytes());
        writer.update(right.as_bytes());
        writer.finalize_double()
    }
}
