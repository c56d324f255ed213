// crates/ngloc-core/src/loader/mod.rs

//! # Bulk Loader
//!
//! Materializes a [`NestedDataset`] into the relational store.
//!
//! Every row is fetched-or-created by its natural key, so rerunning a load
//! against unchanged input creates nothing. The insertion pass runs in a
//! single transaction; the optional clear step does not.

use rusqlite::{Connection, Transaction};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::common::DbStats;
use crate::error::{NgLocError, Result, SqliteContext};
use crate::model::{City, Lga, NestedLga, NestedDataset, PostalCode, State, Ward, Zone};
use crate::search::LocationSearch;
use crate::store::{
    delete_all, get_or_create, reassign_state_zone, CityDefaults, Keyed, LgaDefaults,
    PostalCodeDefaults, StateDefaults, WardDefaults, ZoneDefaults,
};

mod common_io;
mod source;

pub use source::SourceFormat;

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Delete every existing location row before loading.
    pub clear: bool,
}

/// Outcome of one [`load`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Rows inserted by this run, per entity kind.
    pub created: DbStats,
    /// Existing states whose zone was changed to match the input.
    pub states_reassigned: usize,
    /// Rows in the store after the run.
    pub totals: DbStats,
}

/// Load `data` into the store behind `conn`.
///
/// 1. With `options.clear`, deletes postal codes, wards, cities, LGAs, states
///    and zones, in that order. This step commits on its own.
/// 2. In one transaction: zones by name (code set on creation), states by name
///    across all zones (an existing state found under another zone is moved to
///    the current one), LGAs by `(state, name)`, then each LGA's cities and
///    wards by `(lga, name)` and postal codes by `(code, lga)`.
///
/// Any failure drops the transaction uncommitted, leaving the store as it was
/// after step 1.
pub fn load(
    conn: &mut Connection,
    data: &NestedDataset,
    options: LoadOptions,
) -> Result<LoadReport> {
    if options.clear {
        clear(conn)?;
    }

    let tx = conn.transaction().op("begin load transaction")?;
    let mut report = LoadReport::default();

    for (zone_name, zone) in &data.zones {
        let (zone_row, created) =
            get_or_create::<Zone>(&tx, zone_name.as_str(), ZoneDefaults { code: &zone.code })?;
        if created {
            report.created.zones += 1;
            info!(zone = %zone_name, "created zone");
        }

        for (state_name, state) in &zone.states {
            let (mut state_row, created) = get_or_create::<State>(
                &tx,
                state_name.as_str(),
                StateDefaults {
                    zone_id: zone_row.id,
                    code: &state.code,
                    capital: &state.capital,
                    latitude: state.latitude,
                    longitude: state.longitude,
                },
            )?;
            if created {
                report.created.states += 1;
                info!(state = %state_name, zone = %zone_name, "created state");
            } else if state_row.zone_id != zone_row.id {
                reassign_state_zone(&tx, &mut state_row, zone_row.id)?;
                report.states_reassigned += 1;
                warn!(state = %state_name, zone = %zone_name, "moved existing state to zone");
            }

            for (lga_name, lga) in &state.lgas {
                let (lga_row, created) = get_or_create::<Lga>(
                    &tx,
                    (state_row.id, lga_name.as_str()),
                    LgaDefaults { code: "" },
                )?;
                if created {
                    report.created.lgas += 1;
                    debug!(lga = %lga_name, state = %state_name, "created lga");
                }
                load_lga_children(&tx, &lga_row, lga, &mut report.created)?;
            }
        }
    }

    tx.commit().op("commit load transaction")?;

    report.totals = conn.stats()?;
    info!(
        zones = report.created.zones,
        states = report.created.states,
        lgas = report.created.lgas,
        cities = report.created.cities,
        wards = report.created.wards,
        postal_codes = report.created.postal_codes,
        "load committed"
    );
    Ok(report)
}

/// Remove every location row, children before parents.
pub fn clear(conn: &Connection) -> Result<()> {
    warn!("clearing existing location data");
    delete_all::<PostalCode>(conn)?;
    delete_all::<Ward>(conn)?;
    delete_all::<City>(conn)?;
    delete_all::<Lga>(conn)?;
    delete_all::<State>(conn)?;
    delete_all::<Zone>(conn)?;
    Ok(())
}

fn load_lga_children(
    tx: &Transaction<'_>,
    lga_row: &Lga,
    lga: &NestedLga,
    created: &mut DbStats,
) -> Result<()> {
    for city in &lga.cities {
        let (_, was_created) = get_or_create::<City>(
            tx,
            (lga_row.id, city.name()),
            CityDefaults {
                is_capital: city.is_capital(),
                population: city.population(),
                latitude: city.latitude(),
                longitude: city.longitude(),
            },
        )?;
        created.cities += usize::from(was_created);
    }

    for ward in &lga.wards {
        let (_, was_created) = get_or_create::<Ward>(
            tx,
            (lga_row.id, ward.name()),
            WardDefaults { code: ward.code() },
        )?;
        created.wards += usize::from(was_created);
    }

    for postal_code in &lga.postal_codes {
        let city_id = match postal_code.city() {
            Some(city_name) => Some(
                City::find_by_key(tx, (lga_row.id, city_name))?
                    .ok_or_else(|| {
                        NgLocError::InvalidData(format!(
                            "postal code {} refers to unknown city {city_name} in LGA {}",
                            postal_code.code(),
                            lga_row.name
                        ))
                    })?
                    .id,
            ),
            None => None,
        };
        let (_, was_created) = get_or_create::<PostalCode>(
            tx,
            (postal_code.code(), lga_row.id),
            PostalCodeDefaults {
                area: postal_code.area(),
                city_id,
            },
        )?;
        created.postal_codes += usize::from(was_created);
    }

    Ok(())
}
