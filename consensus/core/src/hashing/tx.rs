use crypto_hashes::{HashWriter, Hashable};

use super::{write_compact_size, write_var_bytes};
use crate::tx::{Transaction, TransactionInput, TransactionOutpoint, TransactionOutput};
use crate::Hash;

/// Transaction id: double SHA-256 over the legacy (non-witness) encoding
pub fn id(tx: &Transaction) -> Hash {
    tx.double_sha256()
}

impl Hashable for TransactionOutpoint {
    fn hash_into(&self, state: &mut HashWriter) {
        state.update(self.transaction_id.as_bytes());
        state.update(self.index.to_le_bytes());
    }
}

impl Hashable for TransactionInput {
    fn hash_into(&self, state: &mut HashWriter) {
        state.hash_object(&self.previous_outpoint);
        write_var_bytes(state, &self.signature_script);
        state.update(self.sequence.to_le_bytes());
    }
}

impl Hashable for TransactionOutput {
    fn hash_into(&self, state: &mut HashWriter) {
        state.update(self.value.to_le_bytes());
        write_var_bytes(state, &self.script_public_key);
    }
}

impl Hashable for Transaction {
    fn hash_into(&self, state: &mut HashWriter) {
        state.update(self.version.to_le_bytes());
        write_compact_size(state, self.inputs.len());
        for input in &self.inputs {
            state.hash_object(input);
        }
        write_compact_size(state, self.outputs.len());
        for output in &self.outputs {
            state.hash_object(output);
        }
        state.update(self.lock_time.to_le_bytes());
    }
}
