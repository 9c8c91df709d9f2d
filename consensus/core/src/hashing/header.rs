use crypto_hashes::HeaderHashBuilder;

use crate::block::Header;
use crate::Hash;

/// Computes the hash of a block header: double SHA-256 over its 80-byte encoding
pub fn hash(header: &Header) -> Hash {
    let mut builder = HeaderHashBuilder::new();
    builder
        .add_version(header.version)
        .add_prev_block(&header.prev_block_hash)
        .add_merkle_root(&header.hash_merkle_root)
        .add_time(header.time)
        .add_bits(header.bits)
        .add_nonce(header.nonce);
    builder.finalize()
}
