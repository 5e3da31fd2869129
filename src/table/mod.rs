// src/table/mod.rs - CRC-64 LOOKUP TABLES
// Table handles, well-known polynomials and the tag used for fast-path dispatch

pub mod builder;
pub mod cache;
pub mod slicing;

use std::fmt;
use std::sync::Arc;

pub use builder::build_table;
pub use cache::WellKnownTables;
pub use slicing::SlicingTable;

/// The ISO polynomial, defined in ISO 3309 and used in HDLC.
pub const ISO: u64 = 0xD800000000000000;

/// The ECMA polynomial, defined in ECMA-182.
pub const ECMA: u64 = 0xC96C5795D7870F42;

/// Which table family a [`Table`] belongs to.
///
/// Set once when the table is acquired. `Iso` and `Ecma` tables carry a
/// precomputed slicing-by-8 set, `Custom` tables do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Iso,
    Ecma,
    Custom,
}

/// A 256-entry CRC-64 lookup table for one reflected polynomial.
///
/// Cloning is cheap: well-known tables point into the process-wide registry,
/// custom tables share their entries through an `Arc`.
#[derive(Clone)]
pub struct Table {
    // Reflected polynomial the entries were built from
    poly: u64,

    // Fast-path tag
    kind: TableKind,

    // Backing storage
    entries: Entries,
}

#[derive(Clone)]
enum Entries {
    WellKnown(&'static SlicingTable),
    Custom(Arc<[u64; 256]>),
}

impl Table {
    /// Build a fresh table with no slicing cache, whatever the polynomial.
    ///
    /// Prefer [`make_table`] unless an independent copy is really wanted:
    /// a custom table only takes the bulk path for very large inputs.
    pub fn custom(poly: u64) -> Self {
        Self {
            poly,
            kind: TableKind::Custom,
            entries: Entries::Custom(Arc::new(build_table(poly))),
        }
    }

    pub(crate) fn well_known(poly: u64, kind: TableKind, slicing: &'static SlicingTable) -> Self {
        Self {
            poly,
            kind,
            entries: Entries::WellKnown(slicing),
        }
    }

    /// Reflected polynomial this table was built from.
    pub fn polynomial(&self) -> u64 {
        self.poly
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    /// The 256 lookup entries.
    pub fn entries(&self) -> &[u64; 256] {
        match &self.entries {
            Entries::WellKnown(slicing) => slicing.base(),
            Entries::Custom(entries) => entries,
        }
    }

    /// Precomputed slicing-by-8 set, present only for well-known tables.
    pub(crate) fn slicing(&self) -> Option<&'static SlicingTable> {
        match self.entries {
            Entries::WellKnown(slicing) => Some(slicing),
            Entries::Custom(_) => None,
        }
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("poly", &format_args!("{:#018x}", self.poly))
            .field("kind", &self.kind)
            .finish()
    }
}

/// Return the table for `poly`.
///
/// ISO and ECMA come from the process-wide registry and are identity-stable
/// across calls; any other polynomial gets a freshly built table owned by the
/// caller.
pub fn make_table(poly: u64) -> Table {
    WellKnownTables::global().acquire(poly)
}
