// crates/ngloc-core/src/lib.rs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # ngloc-core
//!
//! Nigeria's administrative hierarchy as data: geopolitical zones, states,
//! Local Government Areas (LGAs), and per-LGA cities, wards and postal codes.
//!
//! The crate is organised leaf-first:
//!
//! - [`model`]: the flat source form, the nested form, the normalizer between
//!   them, and the stored row types.
//! - [`store`]: a SQLite schema with natural-key constraints and cascading
//!   foreign keys, plus a generic get-or-create.
//! - [`loader`]: the bulk loader that materializes a nested dataset in one
//!   transaction.
//! - [`search`]: read-only lookups over a loaded store.
//! - [`dataset`]: the bundled reference data.
//!
//! ```no_run
//! use ngloc_core::{dataset, load, store, LoadOptions, LocationSearch};
//!
//! let mut conn = store::open("ng_locations.sqlite3")?;
//! let report = load(&mut conn, &dataset::nigeria_nested()?, LoadOptions::default())?;
//! println!("{} LGAs created", report.created.lgas);
//!
//! let results = conn.search_locations("ibadan")?;
//! println!("{} LGAs match", results.lgas.len());
//! # Ok::<(), ngloc_core::NgLocError>(())
//! ```

pub mod common;
pub mod dataset;
pub mod error;
pub mod loader; // The bulk loader + dataset file I/O
pub mod model;
pub mod search;
pub mod store;

// Re-exports
pub use crate::common::DbStats;
pub use crate::error::{NgLocError, Result};
pub use crate::loader::{clear, load, LoadOptions, LoadReport, SourceFormat};
pub use crate::model::{
    normalize, normalize_value, City, CityEntry, FlatDataset, Lga, NestedDataset, NestedLga,
    PostalCode, PostalCodeEntry, State, Ward, WardEntry, Zone,
};
// Export the Search Trait (Crucial for users!)
pub use crate::search::{LocationSearch, SearchResults};
// Re-export so callers can name `Connection` without a direct dependency.
pub use rusqlite;
