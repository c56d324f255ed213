// crates/ngloc-core/src/model/nested.rs
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

use crate::common::DbStats;
use crate::error::{NgLocError, Result};

/// # The Nested Model
///
/// A "Tree" structure keyed by name at every level. This is what the bulk
/// loader consumes.
///
/// **Structure:** zone -> state -> LGA -> `{cities, wards, postal_codes}`
///
/// Children of an LGA are written either as bare strings or as objects with
/// extra attributes; both spellings deserialize into the same entry types.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NestedDataset {
    pub zones: IndexMap<String, NestedZone>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NestedZone {
    pub code: String,
    pub states: IndexMap<String, NestedState>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NestedState {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub capital: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    pub lgas: IndexMap<String, NestedLga>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NestedLga {
    #[serde(default)]
    pub cities: Vec<CityEntry>,
    #[serde(default)]
    pub wards: Vec<WardEntry>,
    #[serde(default)]
    pub postal_codes: Vec<PostalCodeEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CityEntry {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        is_capital: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        population: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        latitude: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        longitude: Option<f64>,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WardEntry {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        code: String,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostalCodeEntry {
    Code(String),
    Detailed {
        code: String,
        #[serde(default)]
        area: String,
        /// Name of a city in the same LGA.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        city: Option<String>,
    },
}

impl CityEntry {
    pub fn name(&self) -> &str {
        match self {
            CityEntry::Name(name) | CityEntry::Detailed { name, .. } => name,
        }
    }

    pub fn is_capital(&self) -> bool {
        matches!(self, CityEntry::Detailed { is_capital: true, .. })
    }

    pub fn population(&self) -> Option<i64> {
        match self {
            CityEntry::Name(_) => None,
            CityEntry::Detailed { population, .. } => *population,
        }
    }

    pub fn latitude(&self) -> Option<f64> {
        match self {
            CityEntry::Name(_) => None,
            CityEntry::Detailed { latitude, .. } => *latitude,
        }
    }

    pub fn longitude(&self) -> Option<f64> {
        match self {
            CityEntry::Name(_) => None,
            CityEntry::Detailed { longitude, .. } => *longitude,
        }
    }
}

impl WardEntry {
    pub fn name(&self) -> &str {
        match self {
            WardEntry::Name(name) | WardEntry::Detailed { name, .. } => name,
        }
    }

    pub fn code(&self) -> &str {
        match self {
            WardEntry::Name(_) => "",
            WardEntry::Detailed { code, .. } => code,
        }
    }
}

impl PostalCodeEntry {
    pub fn code(&self) -> &str {
        match self {
            PostalCodeEntry::Code(code) | PostalCodeEntry::Detailed { code, .. } => code,
        }
    }

    pub fn area(&self) -> &str {
        match self {
            PostalCodeEntry::Code(_) => "",
            PostalCodeEntry::Detailed { area, .. } => area,
        }
    }

    pub fn city(&self) -> Option<&str> {
        match self {
            PostalCodeEntry::Code(_) => None,
            PostalCodeEntry::Detailed { city, .. } => city.as_deref(),
        }
    }
}

impl From<&str> for CityEntry {
    fn from(name: &str) -> Self {
        CityEntry::Name(name.to_owned())
    }
}

impl From<&str> for WardEntry {
    fn from(name: &str) -> Self {
        WardEntry::Name(name.to_owned())
    }
}

impl From<&str> for PostalCodeEntry {
    fn from(code: &str) -> Self {
        PostalCodeEntry::Code(code.to_owned())
    }
}

impl NestedDataset {
    /// Parse a nested dataset from any JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Pretty-printed JSON, keys in dataset order.
    pub fn to_writer_pretty<W: Write>(&self, writer: W) -> Result<()> {
        Ok(serde_json::to_writer_pretty(writer, self)?)
    }

    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Totals per entity kind as they would be materialized by a loader run
    /// against an empty store.
    ///
    /// States are counted once per distinct name, because the store treats a
    /// state name as globally unique.
    pub fn counts(&self) -> DbStats {
        let mut stats = DbStats {
            zones: self.zones.len(),
            ..DbStats::default()
        };
        let mut state_names: IndexSet<&str> = IndexSet::new();
        for zone in self.zones.values() {
            for (state_name, state) in &zone.states {
                state_names.insert(state_name.as_str());
                stats.lgas += state.lgas.len();
                for lga in state.lgas.values() {
                    stats.cities += lga.cities.len();
                    stats.wards += lga.wards.len();
                    stats.postal_codes += lga.postal_codes.len();
                }
            }
        }
        stats.states = state_names.len();
        stats
    }

    /// Mutable access to one LGA by its full path.
    pub fn lga_mut(&mut self, zone: &str, state: &str, lga: &str) -> Result<&mut NestedLga> {
        self.zones
            .get_mut(zone)
            .and_then(|z| z.states.get_mut(state))
            .and_then(|s| s.lgas.get_mut(lga))
            .ok_or_else(|| NgLocError::NotFound(format!("LGA {zone} / {state} / {lga}")))
    }

    /// Append a city to an LGA unless one with the same name is already listed.
    ///
    /// Returns `true` if the city was added.
    pub fn add_city(
        &mut self,
        zone: &str,
        state: &str,
        lga: &str,
        city: impl Into<CityEntry>,
    ) -> Result<bool> {
        let city = city.into();
        let target = self.lga_mut(zone, state, lga)?;
        if target.cities.iter().any(|c| c.name() == city.name()) {
            return Ok(false);
        }
        target.cities.push(city);
        Ok(true)
    }

    /// Append a ward to an LGA unless one with the same name is already listed.
    pub fn add_ward(
        &mut self,
        zone: &str,
        state: &str,
        lga: &str,
        ward: impl Into<WardEntry>,
    ) -> Result<bool> {
        let ward = ward.into();
        let target = self.lga_mut(zone, state, lga)?;
        if target.wards.iter().any(|w| w.name() == ward.name()) {
            return Ok(false);
        }
        target.wards.push(ward);
        Ok(true)
    }

    /// Append a postal code to an LGA unless the code is already listed there.
    pub fn add_postal_code(
        &mut self,
        zone: &str,
        state: &str,
        lga: &str,
        postal_code: impl Into<PostalCodeEntry>,
    ) -> Result<bool> {
        let postal_code = postal_code.into();
        let target = self.lga_mut(zone, state, lga)?;
        if target
            .postal_codes
            .iter()
            .any(|p| p.code() == postal_code.code())
        {
            return Ok(false);
        }
        target.postal_codes.push(postal_code);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAGOS: &str = r#"{
        "South West": {
            "code": "south_west",
            "states": {
                "Lagos": {
                    "code": "LA",
                    "capital": "Ikeja",
                    "lgas": {
                        "Ikeja": {
                            "cities": [{"name": "Ikeja", "is_capital": true}, "Ogba"],
                            "wards": ["Alausa", {"name": "Opebi", "code": "W2"}],
                            "postal_codes": [{"code": "100001", "area": "GRA", "city": "Ikeja"}]
                        },
                        "Eti-Osa": {}
                    }
                }
            }
        }
    }"#;

    fn lagos() -> NestedDataset {
        NestedDataset::from_json_str(LAGOS).expect("parse nested fixture")
    }

    #[test]
    fn parses_bare_and_detailed_entries() {
        let db = lagos();
        let ikeja = &db.zones["South West"].states["Lagos"].lgas["Ikeja"];

        assert_eq!(ikeja.cities[0].name(), "Ikeja");
        assert!(ikeja.cities[0].is_capital());
        assert!(!ikeja.cities[1].is_capital());
        assert_eq!(ikeja.wards[1].code(), "W2");
        assert_eq!(ikeja.wards[0].code(), "");
        assert_eq!(ikeja.postal_codes[0].city(), Some("Ikeja"));
        assert_eq!(ikeja.postal_codes[0].area(), "GRA");
    }

    #[test]
    fn missing_child_arrays_default_to_empty() {
        let db = lagos();
        let eti_osa = &db.zones["South West"].states["Lagos"].lgas["Eti-Osa"];
        assert_eq!(eti_osa, &NestedLga::default());
    }

    #[test]
    fn counts_every_level() {
        let stats = lagos().counts();
        assert_eq!(stats.zones, 1);
        assert_eq!(stats.states, 1);
        assert_eq!(stats.lgas, 2);
        assert_eq!(stats.cities, 2);
        assert_eq!(stats.wards, 2);
        assert_eq!(stats.postal_codes, 1);
    }

    #[test]
    fn state_listed_under_two_zones_counts_once() {
        let db = NestedDataset::from_json_str(
            r#"{
                "South West": {"code": "south_west", "states": {
                    "Lagos": {"lgas": {"Ikeja": {}}},
                    "Ogun": {"lgas": {"Ifo": {}}}
                }},
                "North Central": {"code": "north_central", "states": {
                    "Lagos": {"lgas": {"Eti-Osa": {}}},
                    "Kwara": {"lgas": {"Ilorin West": {}}}
                }}
            }"#,
        )
        .unwrap();

        let stats = db.counts();
        assert_eq!((stats.zones, stats.states, stats.lgas), (2, 3, 4));
    }

    #[test]
    fn coordinates_are_optional() {
        let db = NestedDataset::from_json_str(
            r#"{"South West": {"code": "south_west", "states": {
                "Lagos": {"latitude": 6.5244, "longitude": 3.3792, "lgas": {"Ikeja": {
                    "cities": [{"name": "Ikeja", "latitude": 6.6018, "longitude": 3.3515}, "Ogba"]
                }}}
            }}}"#,
        )
        .unwrap();
        let state = &db.zones["South West"].states["Lagos"];
        assert_eq!((state.latitude, state.longitude), (Some(6.5244), Some(3.3792)));
        let cities = &state.lgas["Ikeja"].cities;
        assert_eq!(cities[0].latitude(), Some(6.6018));
        assert_eq!(cities[1].longitude(), None);

        let json = lagos().to_json_string_pretty().unwrap();
        assert!(!json.contains("latitude"));
    }

    #[test]
    fn add_helpers_skip_duplicates() {
        let mut db = lagos();
        assert!(!db.add_city("South West", "Lagos", "Ikeja", "Ogba").unwrap());
        assert!(db.add_city("South West", "Lagos", "Ikeja", "Oregun").unwrap());
        assert!(db.add_ward("South West", "Lagos", "Eti-Osa", "Ikate").unwrap());
        assert!(!db.add_ward("South West", "Lagos", "Eti-Osa", "Ikate").unwrap());
        assert!(!db
            .add_postal_code("South West", "Lagos", "Ikeja", "100001")
            .unwrap());
        assert!(db
            .add_postal_code("South West", "Lagos", "Eti-Osa", "105102")
            .unwrap());

        let stats = db.counts();
        assert_eq!((stats.cities, stats.wards, stats.postal_codes), (3, 3, 2));
    }

    #[test]
    fn add_helpers_reject_unknown_paths() {
        let mut db = lagos();
        let err = db.add_city("South West", "Ogun", "Ifo", "Ifo").unwrap_err();
        assert!(matches!(err, NgLocError::NotFound(_)));
    }

    #[test]
    fn bare_strings_serialize_back_as_strings() {
        let json = lagos().to_json_string_pretty().unwrap();
        assert!(json.contains("\"Ogba\""));
        assert!(json.contains("\"is_capital\": true"));
        assert_eq!(NestedDataset::from_json_str(&json).unwrap(), lagos());
    }
}
