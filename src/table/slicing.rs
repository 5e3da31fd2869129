// Slicing-by-8 table sets

/// Eight folded CRC-64 tables for processing 8 input bytes per iteration.
///
/// Slice 0 is the base table; slice `j` holds the contribution of a byte
/// that still has `j` more bytes to travel through the register. Roughly
/// 16 KiB, so it only pays off on large inputs.
pub struct SlicingTable {
    slices: [[u64; 256]; 8],
}

impl SlicingTable {
    /// Derive the full slicing set from a base table.
    pub fn new(base: &[u64; 256]) -> Self {
        let mut slices = [[0u64; 256]; 8];
        slices[0] = *base;

        for i in 0..256 {
            let mut crc = base[i];
            for slice in slices.iter_mut().skip(1) {
                crc = base[(crc & 0xFF) as usize] ^ (crc >> 8);
                slice[i] = crc;
            }
        }

        Self { slices }
    }

    /// Slice 0, identical to the table the set was built from.
    pub fn base(&self) -> &[u64; 256] {
        &self.slices[0]
    }

    /// Fold 8 little-endian bytes into `crc`.
    ///
    /// `crc` is the internal, complemented register value.
    #[inline]
    pub(crate) fn fold(&self, crc: u64, chunk: &[u8; 8]) -> u64 {
        let s = &self.slices;
        let crc = crc ^ u64::from_le_bytes(*chunk);

        s[7][(crc & 0xFF) as usize]
            ^ s[6][((crc >> 8) & 0xFF) as usize]
            ^ s[5][((crc >> 16) & 0xFF) as usize]
            ^ s[4][((crc >> 24) & 0xFF) as usize]
            ^ s[3][((crc >> 32) & 0xFF) as usize]
            ^ s[2][((crc >> 40) & 0xFF) as usize]
            ^ s[1][((crc >> 48) & 0xFF) as usize]
            ^ s[0][(crc >> 56) as usize]
    }
}
