// crates/ngloc-core/src/search.rs
use rusqlite::{params, Connection, Params};
use serde::Serialize;

use crate::common::DbStats;
use crate::error::{Result, SqliteContext};
use crate::model::{City, Lga, PostalCode, State, Ward, Zone};
use crate::store::{count, Record};

// Id subqueries resolving a parent by name, case-insensitively.
const ZONE_IDS: &str = "SELECT id FROM zones WHERE name = ?1 COLLATE NOCASE";
const STATE_IDS: &str = "SELECT id FROM states WHERE name = ?1 COLLATE NOCASE";
const STATE_IDS_2: &str = "SELECT id FROM states WHERE name = ?2 COLLATE NOCASE";

/// Matches from [`LocationSearch::search_locations`], one list per entity kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults {
    pub zones: Vec<Zone>,
    pub states: Vec<State>,
    pub lgas: Vec<Lga>,
    pub cities: Vec<City>,
    pub wards: Vec<Ward>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
            && self.states.is_empty()
            && self.lgas.is_empty()
            && self.cities.is_empty()
            && self.wards.is_empty()
    }

    pub fn total(&self) -> usize {
        self.zones.len() + self.states.len() + self.lgas.len() + self.cities.len() + self.wards.len()
    }
}

/// Read-only queries over a loaded store.
///
/// Single-row lookups match names case-insensitively and return `None` both
/// when nothing matches and when more than one row does. Collection lookups
/// return an empty `Vec` when nothing matches. `Err` is reserved for storage
/// failures.
///
/// # Example
///
/// ```no_run
/// use ngloc_core::{dataset, load, store, LoadOptions, LocationSearch};
///
/// let mut conn = store::open_in_memory()?;
/// load(&mut conn, &dataset::nigeria_nested()?, LoadOptions::default())?;
///
/// let lagos = conn.get_state_by_name("lagos")?.expect("Lagos is bundled");
/// println!("{} ({}), capital {:?}", lagos.name(), lagos.code(), lagos.capital());
/// for lga in conn.get_lgas_by_state("Lagos")? {
///     println!("- {}", lga.name());
/// }
/// # Ok::<(), ngloc_core::NgLocError>(())
/// ```
pub trait LocationSearch {
    fn stats(&self) -> Result<DbStats>;

    fn get_all_zones(&self) -> Result<Vec<Zone>>;
    fn get_zone_by_name(&self, name: &str) -> Result<Option<Zone>>;
    fn get_zone_by_code(&self, code: &str) -> Result<Option<Zone>>;

    fn get_all_states(&self) -> Result<Vec<State>>;
    fn get_states_by_zone(&self, zone_name: &str) -> Result<Vec<State>>;
    fn get_state_by_name(&self, name: &str) -> Result<Option<State>>;
    fn get_state_by_code(&self, code: &str) -> Result<Option<State>>;

    fn get_lgas_by_state(&self, state_name: &str) -> Result<Vec<Lga>>;
    fn get_lgas_by_zone(&self, zone_name: &str) -> Result<Vec<Lga>>;
    /// An LGA name can recur across states; pass `state_name` to narrow it.
    fn get_lga_by_name(&self, name: &str, state_name: Option<&str>) -> Result<Option<Lga>>;

    fn get_cities_by_lga(&self, lga_name: &str, state_name: Option<&str>) -> Result<Vec<City>>;
    fn get_cities_by_state(&self, state_name: &str) -> Result<Vec<City>>;
    fn get_city_by_name(&self, name: &str, state_name: Option<&str>) -> Result<Option<City>>;

    fn get_wards_by_lga(&self, lga_name: &str, state_name: Option<&str>) -> Result<Vec<Ward>>;
    fn get_wards_by_state(&self, state_name: &str) -> Result<Vec<Ward>>;

    /// Exact code match. A code shared by several LGAs is ambiguous and
    /// yields `None`; use [`LocationSearch::get_postal_codes_by_code`].
    fn get_postal_code(&self, code: &str) -> Result<Option<PostalCode>>;
    fn get_postal_codes_by_code(&self, code: &str) -> Result<Vec<PostalCode>>;
    fn get_postal_codes_by_lga(
        &self,
        lga_name: &str,
        state_name: Option<&str>,
    ) -> Result<Vec<PostalCode>>;
    fn get_postal_codes_by_state(&self, state_name: &str) -> Result<Vec<PostalCode>>;

    /// Case-insensitive substring match on names across zones, states, LGAs,
    /// cities and wards. The query is used as given, so an empty query
    /// matches every row. `%` and `_` match literally.
    fn search_locations(&self, query: &str) -> Result<SearchResults>;
}

impl LocationSearch for Connection {
    fn stats(&self) -> Result<DbStats> {
        Ok(DbStats {
            zones: count::<Zone>(self)?,
            states: count::<State>(self)?,
            lgas: count::<Lga>(self)?,
            cities: count::<City>(self)?,
            wards: count::<Ward>(self)?,
            postal_codes: count::<PostalCode>(self)?,
        })
    }

    fn get_all_zones(&self) -> Result<Vec<Zone>> {
        select_all(self, "1", [])
    }

    fn get_zone_by_name(&self, name: &str) -> Result<Option<Zone>> {
        select_single(self, "name = ?1 COLLATE NOCASE", [name])
    }

    fn get_zone_by_code(&self, code: &str) -> Result<Option<Zone>> {
        select_single(self, "code = ?1 COLLATE NOCASE", [code])
    }

    fn get_all_states(&self) -> Result<Vec<State>> {
        select_all(self, "1", [])
    }

    fn get_states_by_zone(&self, zone_name: &str) -> Result<Vec<State>> {
        select_all(self, &format!("zone_id IN ({ZONE_IDS})"), [zone_name])
    }

    fn get_state_by_name(&self, name: &str) -> Result<Option<State>> {
        select_single(self, "name = ?1 COLLATE NOCASE", [name])
    }

    fn get_state_by_code(&self, code: &str) -> Result<Option<State>> {
        select_single(self, "code = ?1 COLLATE NOCASE", [code])
    }

    fn get_lgas_by_state(&self, state_name: &str) -> Result<Vec<Lga>> {
        select_all(self, &format!("state_id IN ({STATE_IDS})"), [state_name])
    }

    fn get_lgas_by_zone(&self, zone_name: &str) -> Result<Vec<Lga>> {
        select_all(
            self,
            &format!("state_id IN (SELECT id FROM states WHERE zone_id IN ({ZONE_IDS}))"),
            [zone_name],
        )
    }

    fn get_lga_by_name(&self, name: &str, state_name: Option<&str>) -> Result<Option<Lga>> {
        match state_name {
            Some(state) => select_single(
                self,
                &format!("name = ?1 COLLATE NOCASE AND state_id IN ({STATE_IDS_2})"),
                params![name, state],
            ),
            None => select_single(self, "name = ?1 COLLATE NOCASE", [name]),
        }
    }

    fn get_cities_by_lga(&self, lga_name: &str, state_name: Option<&str>) -> Result<Vec<City>> {
        by_lga(self, lga_name, state_name)
    }

    fn get_cities_by_state(&self, state_name: &str) -> Result<Vec<City>> {
        by_state(self, state_name)
    }

    fn get_city_by_name(&self, name: &str, state_name: Option<&str>) -> Result<Option<City>> {
        match state_name {
            Some(state) => select_single(
                self,
                &format!(
                    "name = ?1 COLLATE NOCASE AND lga_id IN \
                     (SELECT id FROM lgas WHERE state_id IN ({STATE_IDS_2}))"
                ),
                params![name, state],
            ),
            None => select_single(self, "name = ?1 COLLATE NOCASE", [name]),
        }
    }

    fn get_wards_by_lga(&self, lga_name: &str, state_name: Option<&str>) -> Result<Vec<Ward>> {
        by_lga(self, lga_name, state_name)
    }

    fn get_wards_by_state(&self, state_name: &str) -> Result<Vec<Ward>> {
        by_state(self, state_name)
    }

    fn get_postal_code(&self, code: &str) -> Result<Option<PostalCode>> {
        select_single(self, "code = ?1", [code.trim()])
    }

    fn get_postal_codes_by_code(&self, code: &str) -> Result<Vec<PostalCode>> {
        select_all(self, "code = ?1", [code.trim()])
    }

    fn get_postal_codes_by_lga(
        &self,
        lga_name: &str,
        state_name: Option<&str>,
    ) -> Result<Vec<PostalCode>> {
        by_lga(self, lga_name, state_name)
    }

    fn get_postal_codes_by_state(&self, state_name: &str) -> Result<Vec<PostalCode>> {
        by_state(self, state_name)
    }

    fn search_locations(&self, query: &str) -> Result<SearchResults> {
        let pattern = format!("%{}%", escape_like(query));
        let filter = "name LIKE ?1 ESCAPE '\\'";

        Ok(SearchResults {
            zones: select_all(self, filter, [&pattern])?,
            states: select_all(self, filter, [&pattern])?,
            lgas: select_all(self, filter, [&pattern])?,
            cities: select_all(self, filter, [&pattern])?,
            wards: select_all(self, filter, [&pattern])?,
        })
    }
}

// -----------------------------------------------------------------------------
// QUERY HELPERS
// -----------------------------------------------------------------------------

/// Collections are ordered by name; postal codes by code.
fn order_by<E: Record>() -> &'static str {
    if E::TABLE == PostalCode::TABLE {
        "code, id"
    } else {
        "name, id"
    }
}

fn select_all<E: Record, P: Params>(conn: &Connection, filter: &str, params: P) -> Result<Vec<E>> {
    let sql = format!(
        "SELECT {} FROM {} WHERE {filter} ORDER BY {}",
        E::COLUMNS,
        E::TABLE,
        order_by::<E>()
    );
    let mut stmt = conn.prepare_cached(&sql).op("prepare lookup")?;
    let rows = stmt
        .query_map(params, E::from_row)
        .op("run lookup")?
        .collect::<rusqlite::Result<Vec<E>>>()
        .op("read lookup rows")?;
    Ok(rows)
}

/// Exactly one match, or `None`.
fn select_single<E: Record, P: Params>(
    conn: &Connection,
    filter: &str,
    params: P,
) -> Result<Option<E>> {
    let sql = format!(
        "SELECT {} FROM {} WHERE {filter} LIMIT 2",
        E::COLUMNS,
        E::TABLE
    );
    let mut stmt = conn.prepare_cached(&sql).op("prepare lookup")?;
    let mut rows = stmt
        .query_map(params, E::from_row)
        .op("run lookup")?
        .collect::<rusqlite::Result<Vec<E>>>()
        .op("read lookup rows")?;
    if rows.len() == 1 {
        Ok(rows.pop())
    } else {
        Ok(None)
    }
}

/// Rows of a table keyed by `lga_id`, selected by LGA name and optional state.
fn by_lga<E: Record>(conn: &Connection, lga_name: &str, state_name: Option<&str>) -> Result<Vec<E>> {
    match state_name {
        Some(state) => select_all(
            conn,
            &format!(
                "lga_id IN (SELECT id FROM lgas WHERE name = ?1 COLLATE NOCASE \
                 AND state_id IN ({STATE_IDS_2}))"
            ),
            params![lga_name, state],
        ),
        None => select_all(
            conn,
            "lga_id IN (SELECT id FROM lgas WHERE name = ?1 COLLATE NOCASE)",
            [lga_name],
        ),
    }
}

/// Rows of a table keyed by `lga_id`, selected by state name.
fn by_state<E: Record>(conn: &Connection, state_name: &str) -> Result<Vec<E>> {
    select_all(
        conn,
        &format!("lga_id IN (SELECT id FROM lgas WHERE state_id IN ({STATE_IDS}))"),
        [state_name],
    )
}

/// Escape `LIKE` wildcards so the query is matched literally.
fn escape_like(q: &str) -> String {
    let mut out = String::with_capacity(q.len());
    for ch in q.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
