// Bit-at-a-time CRC-64, the table-free definition of the checksum

/// Add `data` to `crc` one bit at a time using reflected polynomial `poly`.
///
/// Slow, but it needs no tables, so it serves as the reference the
/// table-driven engine is checked against.
pub fn update(poly: u64, crc: u64, data: &[u8]) -> u64 {
    let mut crc = !crc;

    for &byte in data {
        crc ^= byte as u64;

        // Process each bit
        for _ in 0..8 {
            if crc & 1 == 1 {
                crc = (crc >> 1) ^ poly;
            } else {
                crc >>= 1;
            }
        }
    }

    !crc // Final XOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{ECMA, ISO};

    #[test]
    fn test_bitwise_vectors() {
        // Known CRC-64 check values for "123456789"
        let test_data = b"123456789";
        assert_eq!(update(ECMA, 0, test_data), 0x995DC9BBDF1939FA);
        assert_eq!(update(ISO, 0, test_data), 0xB90956C775A41001);
    }

    #[test]
    fn test_bitwise_resume() {
        let crc = update(ECMA, 0, b"12345");
        assert_eq!(update(ECMA, crc, b"6789"), 0x995DC9BBDF1939FA);
    }
}
