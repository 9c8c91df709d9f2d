//! Consensus encodings fed to double SHA-256.

pub mod header;
pub mod tx;

use crypto_hashes::HashWriter;

/// Writes `len` as a Bitcoin CompactSize integer.
pub(crate) fn write_compact_size(writer: &mut HashWriter, len: usize) {
    let len = len as u64;
    match len {
        0..=0xfc => writer.update([len as u8]),
        0xfd..=0xffff => {
            writer.update([0xfd]);
            writer.update((len as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            writer.update([0xfe]);
            writer.update((len as u32).to_le_bytes());
        }
        _ => {
            writer.update([0xff]);
            writer.update(len.to_le_bytes());
        }
    }
}

/// Writes a length-prefixed byte string.
pub(crate) fn write_var_bytes(writer: &mut HashWriter, bytes: &[u8]) {
    write_compact_size(writer, bytes.len());
    writer.update(bytes);
}
