// src/lib.rs - CRC-64 CHECKSUM PRIMITIVES
// Table generation, slicing-by-8 engine and persistable running digest

pub mod config;
pub mod digest;
pub mod engine;
pub mod table;
pub mod util;

// Re-export primary public interface
pub use config::Config;
pub use digest::{new_digest, table_fingerprint, Digest, DigestError};
pub use engine::{checksum, update};
pub use table::{make_table, Table, TableKind, WellKnownTables, ECMA, ISO};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_surface() {
        let table = make_table(ECMA);
        let sum = checksum(b"123456789", &table);

        let mut digest = new_digest(table);
        digest.write(b"1234");
        digest.write(b"56789");
        assert_eq!(digest.sum64(), sum);

        let mut restored = new_digest(make_table(ECMA));
        restored.unmarshal(&digest.marshal()).unwrap();
        assert_eq!(restored.sum64(), 0x995DC9BBDF1939FA);
    }
}
