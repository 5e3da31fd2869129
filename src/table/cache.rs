// src/table/cache.rs - WELL-KNOWN TABLE REGISTRY
// Built once, shared read-only by every checksum computation

use std::sync::OnceLock;

use log::debug;

use super::{build_table, SlicingTable, Table, TableKind, ECMA, ISO};

/// Registry of the ISO and ECMA tables together with their slicing sets.
///
/// Immutable once built. Most callers go through [`WellKnownTables::global`];
/// a registry can also be built explicitly and leaked or stored in a
/// `static` by the caller.
pub struct WellKnownTables {
    // ISO 3309 / HDLC
    iso: SlicingTable,

    // ECMA-182
    ecma: SlicingTable,
}

static GLOBAL: OnceLock<WellKnownTables> = OnceLock::new();

impl WellKnownTables {
    /// Build both slicing sets.
    pub fn build() -> Self {
        let tables = Self {
            iso: SlicingTable::new(&build_table(ISO)),
            ecma: SlicingTable::new(&build_table(ECMA)),
        };
        debug!("built slicing-by-8 tables for ISO and ECMA polynomials");
        tables
    }

    /// Process-wide registry, built on first use.
    ///
    /// Concurrent first callers block until the single build finishes.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::build)
    }

    /// Return a table handle for `poly`.
    ///
    /// ISO and ECMA handles point into this registry, so every call returns
    /// the same entries. Other polynomials get a new `Custom` table.
    pub fn acquire(&'static self, poly: u64) -> Table {
        match poly {
            ISO => self.iso(),
            ECMA => self.ecma(),
            _ => Table::custom(poly),
        }
    }

    pub fn iso(&'static self) -> Table {
        Table::well_known(ISO, TableKind::Iso, &self.iso)
    }

    pub fn ecma(&'static self) -> Table {
        Table::well_known(ECMA, TableKind::Ecma, &self.ecma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_stable() {
        let registry = WellKnownTables::global();

        let a = registry.acquire(ISO);
        let b = registry.acquire(ISO);
        assert!(std::ptr::eq(a.entries(), b.entries()));

        let a = registry.acquire(ECMA);
        let b = registry.acquire(ECMA);
        assert!(std::ptr::eq(a.entries(), b.entries()));
    }

    #[test]
    fn test_global_is_single_instance() {
        assert!(std::ptr::eq(WellKnownTables::global(), WellKnownTables::global()));
    }

    #[test]
    fn test_custom_is_fresh() {
        let registry = WellKnownTables::global();
        let poly = 0x42F0E1EBA9EA3693;

        let a = registry.acquire(poly);
        let b = registry.acquire(poly);
        assert_eq!(a.kind(), TableKind::Custom);
        assert_eq!(a.entries(), b.entries());
        assert!(!std::ptr::eq(a.entries(), b.entries()));
    }

    #[test]
    fn test_cached_entries_match_builder() {
        let registry = WellKnownTables::global();
        assert_eq!(registry.iso().entries(), &build_table(ISO));
        assert_eq!(registry.ecma().entries(), &build_table(ECMA));
    }

    #[test]
    fn test_concurrent_first_use() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| WellKnownTables::global() as *const WellKnownTables as usize))
            .collect();

        let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }
}
