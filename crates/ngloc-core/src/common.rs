// crates/ngloc-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Row totals per entity kind.
///
/// Returned by [`crate::LocationSearch::stats`] for a store, and by
/// [`crate::NestedDataset::counts`] for an in-memory tree, so the two can be
/// compared directly after a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub zones: usize,
    pub states: usize,
    pub lgas: usize,
    pub cities: usize,
    pub wards: usize,
    pub postal_codes: usize,
}

impl DbStats {
    /// True when every count is zero.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
