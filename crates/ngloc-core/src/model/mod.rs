// crates/ngloc-core/src/model/mod.rs
pub mod convert;
pub mod flat;
pub mod nested;
pub mod records;

pub use convert::{normalize, normalize_value};
pub use flat::{FlatDataset, FlatState, FlatZone};
pub use nested::{
    CityEntry, NestedDataset, NestedLga, NestedState, NestedZone, PostalCodeEntry, WardEntry,
};
pub use records::{City, Lga, PostalCode, State, Ward, Zone};
