// src/digest/mod.rs - RUNNING CRC-64 DIGEST
// Stateful wrapper over the engine with a persistable 20-byte state

mod error;

use std::hash::Hasher;

use crate::engine::{checksum, update};
use crate::table::{Table, WellKnownTables};

pub use error::DigestError;

/// Size of a CRC-64 checksum in bytes.
pub const SIZE: usize = 8;

/// Serialized state identifier: "crc" followed by a format byte.
const MAGIC: &[u8; 4] = b"crc\x02";

/// Length of a marshaled digest: magic, table fingerprint, accumulator.
pub const MARSHALED_SIZE: usize = MAGIC.len() + 8 + 8;

/// Running CRC-64 over a sequence of writes.
///
/// Holds the true (non-complemented) checksum of everything written so far.
/// Writes take `&mut self`; sharing one digest between threads needs
/// outside synchronization.
#[derive(Debug, Clone)]
pub struct Digest {
    // Table for the chosen polynomial
    table: Table,

    // Checksum of all bytes written since creation or the last reset
    crc: u64,
}

/// Create a digest bound to `table`, starting from an empty input.
pub fn new_digest(table: Table) -> Digest {
    Digest::new(table)
}

impl Digest {
    pub fn new(table: Table) -> Self {
        Self { table, crc: 0 }
    }

    /// Table this digest computes with.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Feed `data` into the running checksum.
    ///
    /// Always consumes everything; returns `data.len()`.
    pub fn write(&mut self, data: &[u8]) -> usize {
        self.crc = update(self.crc, &self.table, data);
        data.len()
    }

    /// Current checksum.
    pub fn sum64(&self) -> u64 {
        self.crc
    }

    /// Append the current checksum to `out` as 8 big-endian bytes.
    pub fn sum(&self, mut out: Vec<u8>) -> Vec<u8> {
        out.extend_from_slice(&self.crc.to_be_bytes());
        out
    }

    pub fn reset(&mut self) {
        self.crc = 0;
    }

    pub const fn size(&self) -> usize {
        SIZE
    }

    /// Writes of any length are accepted.
    pub const fn block_size(&self) -> usize {
        1
    }

    /// Serialize the running state.
    ///
    /// Layout: magic, big-endian table fingerprint, big-endian checksum.
    pub fn marshal(&self) -> [u8; MARSHALED_SIZE] {
        let mut out = [0u8; MARSHALED_SIZE];
        out[..4].copy_from_slice(MAGIC);
        out[4..12].copy_from_slice(&table_fingerprint(&self.table).to_be_bytes());
        out[12..].copy_from_slice(&self.crc.to_be_bytes());
        out
    }

    /// Restore the running checksum from [`Digest::marshal`] output.
    ///
    /// The table is never read from the blob; it only has to match the one
    /// this digest already holds. On error the digest is left untouched.
    pub fn unmarshal(&mut self, state: &[u8]) -> Result<(), DigestError> {
        if state.len() < MAGIC.len() || &state[..MAGIC.len()] != MAGIC {
            return Err(DigestError::InvalidFormat);
        }

        let state: &[u8; MARSHALED_SIZE] = state.try_into().map_err(|_| DigestError::InvalidSize)?;

        let (fingerprint, crc) = state[4..].split_at(8);
        if read_u64(fingerprint) != table_fingerprint(&self.table) {
            return Err(DigestError::TableMismatch);
        }

        self.crc = read_u64(crc);
        Ok(())
    }
}

impl Hasher for Digest {
    fn finish(&self) -> u64 {
        self.sum64()
    }

    fn write(&mut self, bytes: &[u8]) {
        Digest::write(self, bytes);
    }
}

/// ISO checksum of the table's entries serialized as big-endian words.
///
/// Only a compatibility check between a saved state and the digest
/// restoring it, not a cryptographic binding.
pub fn table_fingerprint(table: &Table) -> u64 {
    let mut bytes = Vec::with_capacity(256 * 8);
    for entry in table.entries() {
        bytes.extend_from_slice(&entry.to_be_bytes());
    }

    checksum(&bytes, &WellKnownTables::global().iso())
}

fn read_u64(bytes: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&bytes[..8]);
    u64::from_be_bytes(word)
}
