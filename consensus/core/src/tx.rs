//!
//! # Transaction
//!
//! The minimal transaction model needed to build genesis coinbases. Encoding
//! follows the legacy Bitcoin layout so transaction ids match the merkle
//! roots committed in the genesis headers.
//!

use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::constants::{NULL_OUTPOINT_INDEX, SEQUENCE_FINAL};
use crate::hashing;
use crate::Hash;

/// A 32-byte transaction identifier.
pub type TransactionId = Hash;

pub type TransactionIndexType = u32;

/// Reference to an output of an earlier transaction
#[derive(Eq, Default, Hash, PartialEq, Debug, Copy, Clone, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub struct TransactionOutpoint {
    pub transaction_id: TransactionId,
    pub index: TransactionIndexType,
}

impl TransactionOutpoint {
    pub fn new(transaction_id: TransactionId, index: u32) -> Self {
        Self { transaction_id, index }
    }

    /// The outpoint spent by a coinbase input
    pub fn null() -> Self {
        Self { transaction_id: Hash::zeroed(), index: NULL_OUTPOINT_INDEX }
    }

    pub fn is_null(&self) -> bool {
        self.transaction_id.is_zero() && self.index == NULL_OUTPOINT_INDEX
    }
}

impl Display for TransactionOutpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.transaction_id, self.index)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInput {
    pub previous_outpoint: TransactionOutpoint,
    #[serde(with = "hex::serde")]
    pub signature_script: Vec<u8>,
    pub sequence: u32,
}

impl TransactionInput {
    pub fn new(previous_outpoint: TransactionOutpoint, signature_script: Vec<u8>, sequence: u32) -> Self {
        Self { previous_outpoint, signature_script, sequence }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionOutput {
    pub value: i64,
    #[serde(with = "hex::serde")]
    pub script_public_key: Vec<u8>,
}

impl TransactionOutput {
    pub fn new(value: i64, script_public_key: Vec<u8>) -> Self {
        Self { value, script_public_key }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub lock_time: u32,
}

impl Transaction {
    pub fn new(version: i32, inputs: Vec<TransactionInput>, outputs: Vec<TransactionOutput>, lock_time: u32) -> Self {
        Self { version, inputs, outputs, lock_time }
    }

    /// Builds a coinbase spending the null outpoint with a final sequence.
    pub fn new_coinbase(version: i32, signature_script: Vec<u8>, outputs: Vec<TransactionOutput>) -> Self {
        let input = TransactionInput::new(TransactionOutpoint::null(), signature_script, SEQUENCE_FINAL);
        Self::new(version, vec![input], outputs, 0)
    }

    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_outpoint.is_null()
    }

    pub fn id(&self) -> TransactionId {
        hashing::tx::id(self)
    }

    /// Sum of all output values, `None` on overflow
    pub fn total_output_value(&self) -> Option<i64> {
        self.outputs.iter().try_fold(0i64, |acc, out| acc.checked_add(out.value))
    }
}
