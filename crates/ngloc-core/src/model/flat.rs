// crates/ngloc-core/src/model/flat.rs
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::error::Result;

/// # The Flat Source Model
///
/// The form the reference data is authored in: every state lists its LGAs as
/// plain names.
///
/// **Structure:** zone name -> `FlatZone` -> state name -> `FlatState` -> `Vec<lga name>`
///
/// `states` and `lgas` are structural and must be present; a dataset missing
/// either fails to parse. `code` and `capital` on a state default to `""`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatDataset {
    pub zones: IndexMap<String, FlatZone>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlatZone {
    pub code: String,
    pub states: IndexMap<String, FlatState>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FlatState {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub capital: String,
    pub lgas: Vec<String>,
}

impl FlatDataset {
    /// Parse a flat dataset from any JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse a flat dataset from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    pub fn state_count(&self) -> usize {
        self.zones.values().map(|z| z.states.len()).sum()
    }

    /// Number of LGA names listed, duplicates included.
    pub fn lga_count(&self) -> usize {
        self.zones
            .values()
            .flat_map(|z| z.states.values())
            .map(|s| s.lgas.len())
            .sum()
    }
}
