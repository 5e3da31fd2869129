// src/engine/mod.rs - CHECKSUM ENGINE
// Byte-wise and slicing-by-8 CRC-64 update over caller-supplied buffers

use log::trace;

use crate::table::{SlicingTable, Table};

/// Inputs shorter than this never take the slicing path.
const BULK_MIN_LEN: usize = 64;

/// A custom table only gets a slicing set built on the fly above this length.
const CUSTOM_SLICING_MIN_LEN: usize = 16384;

/// Add the bytes in `data` to `crc` and return the new checksum.
///
/// `crc` is the true checksum of everything processed so far (0 to start),
/// so `update(update(0, t, a), t, b) == checksum(a ++ b, t)`.
pub fn update(crc: u64, table: &Table, mut data: &[u8]) -> u64 {
    let mut crc = !crc;

    while data.len() >= BULK_MIN_LEN {
        let built;
        let slicing: &SlicingTable = match table.slicing() {
            Some(cached) => cached,
            None if data.len() > CUSTOM_SLICING_MIN_LEN => {
                trace!(
                    "building slicing table for custom polynomial {:#018x} ({} bytes pending)",
                    table.polynomial(),
                    data.len()
                );
                built = SlicingTable::new(table.entries());
                &built
            }
            None => break,
        };

        while data.len() > 8 {
            let Some((chunk, rest)) = data.split_first_chunk::<8>() else {
                break;
            };
            crc = slicing.fold(crc, chunk);
            data = rest;
        }
    }

    let entries = table.entries();
    for &b in data {
        crc = entries[((crc as u8) ^ b) as usize] ^ (crc >> 8);
    }

    !crc
}

/// CRC-64 checksum of `data` using the polynomial behind `table`.
pub fn checksum(data: &[u8], table: &Table) -> u64 {
    update(0, table, data)
}
