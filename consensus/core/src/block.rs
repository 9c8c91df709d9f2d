use serde::{Deserialize, Serialize};

use crate::{hashing, merkle::MerkleTree, tx::Transaction, Hash};

/// Bitcoin-layout block header
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub version: i32,
    pub prev_block_hash: Hash,
    pub hash_merkle_root: Hash,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl Header {
    pub fn hash(&self) -> Hash {
        hashing::header::hash(self)
    }
}

/// Complete block structure including header and transactions
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub header: Header,
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Creates a new block with the given header and transactions
    pub fn new(header: Header, transactions: Vec<Transaction>) -> Self {
        Self { header, transactions }
    }

    pub fn hash(&self) -> Hash {
        self.header.hash()
    }

    /// Merkle root over the ids of the block's transactions
    pub fn calculate_merkle_root(&self) -> Hash {
        let tx_hashes = self.transactions.iter().map(Transaction::id).collect();
        MerkleTree::from_hashes(tx_hashes).root()
    }

    /// Whether the header commits to the transactions it carries
    pub fn has_valid_merkle_root(&self) -> bool {
        !self.transactions.is_empty() && self.calculate_merkle_root() == self.header.hash_merkle_root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::TransactionOutput;

    #[test]
    fn test_single_tx_merkle_root_is_txid() {
        let tx = Transaction::new_coinbase(1, vec![0x51], vec![TransactionOutput::new(1, vec![0xac])]);
        let header = Header { hash_merkle_root: tx.id(), ..Default::default() };
        let block = Block::new(header, vec![tx.clone()]);
        assert_eq!(block.calculate_merkle_root(), tx.id());
        assert!(block.has_valid_merkle_root());
        assert_eq!(block.hash(), header.hash());
    }

    #[test]
    fn test_empty_block_has_no_valid_root() {
        let block = Block::new(Header::default(), vec![]);
        assert!(!block.has_valid_merkle_root());
    }
}
