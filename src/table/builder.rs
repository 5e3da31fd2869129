// Base table generation for a single reflected polynomial

/// Build the canonical 256-entry reflected CRC-64 table for `poly`.
///
/// Entry `i` is the CRC contribution of byte value `i`, computed
/// bit-at-a-time, least significant bit first.
pub fn build_table(poly: u64) -> [u64; 256] {
    let mut table = [0u64; 256];

    for (i, entry) in table.iter_mut().enumerate() {
        let mut crc = i as u64;
        for _ in 0..8 {
            if crc & 1 == 1 {
                crc = (crc >> 1) ^ poly;
            } else {
                crc >>= 1;
            }
        }
        *entry = crc;
    }

    table
}
