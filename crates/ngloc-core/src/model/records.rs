// crates/ngloc-core/src/model/records.rs
//! Rows as stored in the relational store. Ids are SQLite rowids.
//!
//! **Ownership:** Zone -> State -> LGA -> {City, Ward, PostalCode}.
//! A postal code may also point at a city in its LGA; that link is cleared,
//! not cascaded, when the city goes away.

use serde::{Deserialize, Serialize};

/// One of the six geopolitical zones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: i64,
    pub name: String,
    pub code: String,
}

/// A state (or the FCT).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub id: i64,
    pub zone_id: i64,
    pub name: String,
    pub code: String,
    pub capital: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Local Government Area.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lga {
    pub id: i64,
    pub state_id: i64,
    pub name: String,
    pub code: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    pub lga_id: i64,
    pub name: String,
    pub is_capital: bool,
    pub population: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ward {
    pub id: i64,
    pub lga_id: i64,
    pub name: String,
    pub code: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalCode {
    pub id: i64,
    pub lga_id: i64,
    pub city_id: Option<i64>,
    pub code: String,
    pub area: String,
}

impl Zone {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl State {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// `None` when the source data gave no capital.
    pub fn capital(&self) -> Option<&str> {
        Some(self.capital.as_str()).filter(|c| !c.is_empty())
    }

    /// `(latitude, longitude)` when both are known.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

impl Lga {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl City {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

impl Ward {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PostalCode {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn area(&self) -> &str {
        &self.area
    }
}
