// crates/ngloc-core/src/dataset.rs

//! # Bundled Reference Data
//!
//! Nigeria's six geopolitical zones, 36 states plus the FCT, and their 774
//! LGAs, compiled into the crate. The data is parsed on every call and handed
//! to the caller; nothing is cached in a global.

use crate::error::Result;
use crate::model::{normalize, FlatDataset, NestedDataset};

/// Flat source form of the full dataset (LGAs as name lists).
pub const NIGERIA_JSON: &str = include_str!("../data/nigeria.json");

/// Nested sample with cities, wards and postal codes for a handful of LGAs
/// in Lagos, Ogun and Rivers.
///
/// The names and postal codes are sample data. The few extra attributes are
/// illustrative only and exist to exercise the detailed entry forms: the
/// `is_capital` flags on Ikeja, Abeokuta and Port Harcourt, Ikeja's
/// population, the "Ikeja GRA" area on postal code 100001 and the ward code
/// "RI-PHC-01". Do not treat them as reference figures.
pub const SAMPLE_EXTENDED_JSON: &str = include_str!("../data/sample_extended.json");

/// The full dataset in its flat source form.
pub fn nigeria() -> Result<FlatDataset> {
    FlatDataset::from_json_str(NIGERIA_JSON)
}

/// The full dataset normalized for loading.
pub fn nigeria_nested() -> Result<NestedDataset> {
    Ok(normalize(&nigeria()?))
}

/// The extended sample, already nested.
pub fn sample_extended() -> Result<NestedDataset> {
    NestedDataset::from_json_str(SAMPLE_EXTENDED_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_covers_the_country() {
        let flat = nigeria().unwrap();
        assert_eq!(flat.zone_count(), 6);
        assert_eq!(flat.state_count(), 37);
        assert_eq!(flat.lga_count(), 774);

        let stats = nigeria_nested().unwrap().counts();
        assert_eq!((stats.zones, stats.states, stats.lgas), (6, 37, 774));
        assert_eq!(stats.cities + stats.wards + stats.postal_codes, 0);
    }

    #[test]
    fn every_state_has_code_capital_and_lgas() {
        let flat = nigeria().unwrap();
        for zone in flat.zones.values() {
            for (name, state) in &zone.states {
                assert_eq!(state.code.len(), 2, "{name} code");
                assert!(!state.capital.is_empty(), "{name} capital");
                assert!(!state.lgas.is_empty(), "{name} lgas");
            }
        }
    }

    #[test]
    fn sample_extra_attributes_are_the_illustrative_ones() {
        let sample = sample_extended().unwrap();
        let mut capitals = Vec::new();
        let mut populations = Vec::new();
        let mut areas = Vec::new();
        let mut ward_codes = Vec::new();
        for state in sample.zones.values().flat_map(|z| z.states.values()) {
            for lga in state.lgas.values() {
                for city in &lga.cities {
                    if city.is_capital() {
                        capitals.push(city.name());
                    }
                    if let Some(population) = city.population() {
                        populations.push((city.name(), population));
                    }
                }
                areas.extend(lga.postal_codes.iter().map(|p| p.area()).filter(|a| !a.is_empty()));
                ward_codes.extend(lga.wards.iter().map(|w| w.code()).filter(|c| !c.is_empty()));
            }
        }
        assert_eq!(capitals, ["Ikeja", "Abeokuta", "Port Harcourt"]);
        assert_eq!(populations, [("Ikeja", 313_196)]);
        assert_eq!(areas, ["Ikeja GRA"]);
        assert_eq!(ward_codes, ["RI-PHC-01"]);
    }

    #[test]
    fn sample_lgas_exist_in_full_dataset() {
        let full = nigeria_nested().unwrap();
        let sample = sample_extended().unwrap();
        for (zone_name, zone) in &sample.zones {
            for (state_name, state) in &zone.states {
                let full_state = &full.zones[zone_name].states[state_name];
                assert_eq!(full_state.code, state.code);
                for lga_name in state.lgas.keys() {
                    assert!(
                        full_state.lgas.contains_key(lga_name),
                        "{lga_name} missing from {state_name}"
                    );
                }
            }
        }
    }
}
