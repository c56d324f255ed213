// crates/ngloc-core/src/model/convert.rs
use indexmap::IndexMap;
use tracing::debug;

use crate::error::Result;
use crate::model::flat::FlatDataset;
use crate::model::nested::{NestedDataset, NestedLga, NestedState, NestedZone};

/// **Normalizer:** Flat -> Nested.
///
/// Every LGA name becomes a key mapping to an LGA with empty `cities`,
/// `wards` and `postal_codes`. Zones and states keep their source order.
/// Repeated LGA names inside one state collapse into a single entry.
pub fn normalize(flat: &FlatDataset) -> NestedDataset {
    let mut zones = IndexMap::with_capacity(flat.zones.len());

    for (zone_name, zone) in &flat.zones {
        debug!(zone = %zone_name, "normalizing zone");
        let mut states = IndexMap::with_capacity(zone.states.len());

        for (state_name, state) in &zone.states {
            debug!(state = %state_name, lgas = state.lgas.len(), "normalizing state");
            let lgas: IndexMap<String, NestedLga> = state
                .lgas
                .iter()
                .map(|lga| (lga.clone(), NestedLga::default()))
                .collect();

            states.insert(
                state_name.clone(),
                NestedState {
                    code: state.code.clone(),
                    capital: state.capital.clone(),
                    lgas,
                    ..NestedState::default()
                },
            );
        }

        zones.insert(
            zone_name.clone(),
            NestedZone {
                code: zone.code.clone(),
                states,
            },
        );
    }

    NestedDataset { zones }
}

/// Parse an untyped JSON document as a flat dataset and normalize it.
///
/// A document missing a `states` or `lgas` container is rejected rather than
/// silently skipped.
pub fn normalize_value(value: serde_json::Value) -> Result<NestedDataset> {
    let flat: FlatDataset = serde_json::from_value(value)?;
    Ok(normalize(&flat))
}
