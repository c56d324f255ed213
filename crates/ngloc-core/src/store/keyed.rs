// crates/ngloc-core/src/store/keyed.rs
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::{Result, SqliteContext};
use crate::model::{City, Lga, PostalCode, State, Ward, Zone};

/// A row type backed by one table.
pub trait Record: Sized {
    const TABLE: &'static str;
    /// Column list matching [`Record::from_row`], unqualified.
    const COLUMNS: &'static str;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

/// A record with a natural key, supporting get-or-create.
///
/// `Key` is the uniqueness constraint the row is looked up by; `Defaults`
/// carries the attributes written only when a new row is inserted.
pub trait Keyed: Record {
    type Key<'k>: Copy;
    type Defaults<'d>: Copy;

    fn find_by_key(conn: &Connection, key: Self::Key<'_>) -> Result<Option<Self>>;
    fn insert(conn: &Connection, key: Self::Key<'_>, defaults: Self::Defaults<'_>)
        -> Result<Self>;
}

/// Look a row up by its natural key and insert it only if absent.
///
/// Returns the row and whether it was created by this call.
pub fn get_or_create<E: Keyed>(
    conn: &Connection,
    key: E::Key<'_>,
    defaults: E::Defaults<'_>,
) -> Result<(E, bool)> {
    if let Some(row) = E::find_by_key(conn, key)? {
        return Ok((row, false));
    }
    E::insert(conn, key, defaults).map(|row| (row, true))
}

/// Delete every row of one table. Returns the number of rows removed,
/// not counting rows removed by cascades.
pub fn delete_all<E: Record>(conn: &Connection) -> Result<usize> {
    conn.execute(&format!("DELETE FROM {}", E::TABLE), [])
        .op("delete all rows")
}

/// Delete one row by id. Foreign-key actions apply to its dependants.
pub fn delete_by_id<E: Record>(conn: &Connection, id: i64) -> Result<bool> {
    conn.execute(&format!("DELETE FROM {} WHERE id = ?1", E::TABLE), [id])
        .map(|n| n > 0)
        .op("delete row")
}

/// Fetch one row by id.
pub fn find_by_id<E: Record>(conn: &Connection, id: i64) -> Result<Option<E>> {
    conn.query_row(
        &format!("SELECT {} FROM {} WHERE id = ?1", E::COLUMNS, E::TABLE),
        [id],
        E::from_row,
    )
    .optional()
    .op("find row by id")
}

/// Row count of one table.
pub fn count<E: Record>(conn: &Connection) -> Result<usize> {
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", E::TABLE), [], |row| {
        row.get::<_, i64>(0)
    })
    .map(|n| usize::try_from(n).unwrap_or_default())
    .op("count rows")
}

fn find_one<E: Record, P: rusqlite::Params>(
    conn: &Connection,
    filter: &str,
    params: P,
) -> Result<Option<E>> {
    conn.query_row(
        &format!("SELECT {} FROM {} WHERE {filter}", E::COLUMNS, E::TABLE),
        params,
        E::from_row,
    )
    .optional()
    .op("find row by natural key")
}

// -----------------------------------------------------------------------------
// Zone
// -----------------------------------------------------------------------------

impl Record for Zone {
    const TABLE: &'static str = "zones";
    const COLUMNS: &'static str = "id, name, code";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Zone {
            id: row.get(0)?,
            name: row.get(1)?,
            code: row.get(2)?,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ZoneDefaults<'a> {
    pub code: &'a str,
}

impl Keyed for Zone {
    type Key<'k> = &'k str;
    type Defaults<'d> = ZoneDefaults<'d>;

    fn find_by_key(conn: &Connection, name: &str) -> Result<Option<Self>> {
        find_one(conn, "name = ?1", [name])
    }

    fn insert(conn: &Connection, name: &str, defaults: ZoneDefaults<'_>) -> Result<Self> {
        conn.execute(
            "INSERT INTO zones (name, code) VALUES (?1, ?2)",
            params![name, defaults.code],
        )
        .op("insert zone")?;
        Ok(Zone {
            id: conn.last_insert_rowid(),
            name: name.to_owned(),
            code: defaults.code.to_owned(),
        })
    }
}

// -----------------------------------------------------------------------------
// State
// -----------------------------------------------------------------------------

impl Record for State {
    const TABLE: &'static str = "states";
    const COLUMNS: &'static str = "id, zone_id, name, code, capital, latitude, longitude";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(State {
            id: row.get(0)?,
            zone_id: row.get(1)?,
            name: row.get(2)?,
            code: row.get(3)?,
            capital: row.get(4)?,
            latitude: row.get(5)?,
            longitude: row.get(6)?,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StateDefaults<'a> {
    pub zone_id: i64,
    pub code: &'a str,
    pub capital: &'a str,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Keyed for State {
    /// State names are unique across the whole country, not per zone.
    type Key<'k> = &'k str;
    type Defaults<'d> = StateDefaults<'d>;

    fn find_by_key(conn: &Connection, name: &str) -> Result<Option<Self>> {
        find_one(conn, "name = ?1", [name])
    }

    fn insert(conn: &Connection, name: &str, defaults: StateDefaults<'_>) -> Result<Self> {
        conn.execute(
            "INSERT INTO states (zone_id, name, code, capital, latitude, longitude) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                defaults.zone_id,
                name,
                defaults.code,
                defaults.capital,
                defaults.latitude,
                defaults.longitude
            ],
        )
        .op("insert state")?;
        Ok(State {
            id: conn.last_insert_rowid(),
            zone_id: defaults.zone_id,
            name: name.to_owned(),
            code: defaults.code.to_owned(),
            capital: defaults.capital.to_owned(),
            latitude: defaults.latitude,
            longitude: defaults.longitude,
        })
    }
}

/// Point an existing state at another zone.
pub fn reassign_state_zone(conn: &Connection, state: &mut State, zone_id: i64) -> Result<()> {
    conn.execute(
        "UPDATE states SET zone_id = ?1 WHERE id = ?2",
        params![zone_id, state.id],
    )
    .op("reassign state zone")?;
    state.zone_id = zone_id;
    Ok(())
}

// -----------------------------------------------------------------------------
// LGA
// -----------------------------------------------------------------------------

impl Record for Lga {
    const TABLE: &'static str = "lgas";
    const COLUMNS: &'static str = "id, state_id, name, code";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Lga {
            id: row.get(0)?,
            state_id: row.get(1)?,
            name: row.get(2)?,
            code: row.get(3)?,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LgaDefaults<'a> {
    pub code: &'a str,
}

impl Keyed for Lga {
    /// `(state_id, name)`
    type Key<'k> = (i64, &'k str);
    type Defaults<'d> = LgaDefaults<'d>;

    fn find_by_key(conn: &Connection, (state_id, name): (i64, &str)) -> Result<Option<Self>> {
        find_one(conn, "state_id = ?1 AND name = ?2", params![state_id, name])
    }

    fn insert(
        conn: &Connection,
        (state_id, name): (i64, &str),
        defaults: LgaDefaults<'_>,
    ) -> Result<Self> {
        conn.execute(
            "INSERT INTO lgas (state_id, name, code) VALUES (?1, ?2, ?3)",
            params![state_id, name, defaults.code],
        )
        .op("insert lga")?;
        Ok(Lga {
            id: conn.last_insert_rowid(),
            state_id,
            name: name.to_owned(),
            code: defaults.code.to_owned(),
        })
    }
}

// -----------------------------------------------------------------------------
// City
// -----------------------------------------------------------------------------

impl Record for City {
    const TABLE: &'static str = "cities";
    const COLUMNS: &'static str = "id, lga_id, name, is_capital, population, latitude, longitude";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(City {
            id: row.get(0)?,
            lga_id: row.get(1)?,
            name: row.get(2)?,
            is_capital: row.get(3)?,
            population: row.get(4)?,
            latitude: row.get(5)?,
            longitude: row.get(6)?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CityDefaults {
    pub is_capital: bool,
    pub population: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Keyed for City {
    /// `(lga_id, name)`
    type Key<'k> = (i64, &'k str);
    type Defaults<'d> = CityDefaults;

    fn find_by_key(conn: &Connection, (lga_id, name): (i64, &str)) -> Result<Option<Self>> {
        find_one(conn, "lga_id = ?1 AND name = ?2", params![lga_id, name])
    }

    fn insert(
        conn: &Connection,
        (lga_id, name): (i64, &str),
        defaults: CityDefaults,
    ) -> Result<Self> {
        conn.execute(
            "INSERT INTO cities (lga_id, name, is_capital, population, latitude, longitude) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                lga_id,
                name,
                defaults.is_capital,
                defaults.population,
                defaults.latitude,
                defaults.longitude
            ],
        )
        .op("insert city")?;
        Ok(City {
            id: conn.last_insert_rowid(),
            lga_id,
            name: name.to_owned(),
            is_capital: defaults.is_capital,
            population: defaults.population,
            latitude: defaults.latitude,
            longitude: defaults.longitude,
        })
    }
}

// -----------------------------------------------------------------------------
// Ward
// -----------------------------------------------------------------------------

impl Record for Ward {
    const TABLE: &'static str = "wards";
    const COLUMNS: &'static str = "id, lga_id, name, code";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Ward {
            id: row.get(0)?,
            lga_id: row.get(1)?,
            name: row.get(2)?,
            code: row.get(3)?,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WardDefaults<'a> {
    pub code: &'a str,
}

impl Keyed for Ward {
    /// `(lga_id, name)`
    type Key<'k> = (i64, &'k str);
    type Defaults<'d> = WardDefaults<'d>;

    fn find_by_key(conn: &Connection, (lga_id, name): (i64, &str)) -> Result<Option<Self>> {
        find_one(conn, "lga_id = ?1 AND name = ?2", params![lga_id, name])
    }

    fn insert(
        conn: &Connection,
        (lga_id, name): (i64, &str),
        defaults: WardDefaults<'_>,
    ) -> Result<Self> {
        conn.execute(
            "INSERT INTO wards (lga_id, name, code) VALUES (?1, ?2, ?3)",
            params![lga_id, name, defaults.code],
        )
        .op("insert ward")?;
        Ok(Ward {
            id: conn.last_insert_rowid(),
            lga_id,
            name: name.to_owned(),
            code: defaults.code.to_owned(),
        })
    }
}

// -----------------------------------------------------------------------------
// PostalCode
// -----------------------------------------------------------------------------

impl Record for PostalCode {
    const TABLE: &'static str = "postal_codes";
    const COLUMNS: &'static str = "id, lga_id, city_id, code, area";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(PostalCode {
            id: row.get(0)?,
            lga_id: row.get(1)?,
            city_id: row.get(2)?,
            code: row.get(3)?,
            area: row.get(4)?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PostalCodeDefaults<'a> {
    pub area: &'a str,
    pub city_id: Option<i64>,
}

impl Keyed for PostalCode {
    /// `(code, lga_id)`
    type Key<'k> = (&'k str, i64);
    type Defaults<'d> = PostalCodeDefaults<'d>;

    fn find_by_key(conn: &Connection, (code, lga_id): (&str, i64)) -> Result<Option<Self>> {
        find_one(conn, "code = ?1 AND lga_id = ?2", params![code, lga_id])
    }

    fn insert(
        conn: &Connection,
        (code, lga_id): (&str, i64),
        defaults: PostalCodeDefaults<'_>,
    ) -> Result<Self> {
        conn.execute(
            "INSERT INTO postal_codes (lga_id, city_id, code, area) VALUES (?1, ?2, ?3, ?4)",
            params![lga_id, defaults.city_id, code, defaults.area],
        )
        .op("insert postal code")?;
        Ok(PostalCode {
            id: conn.last_insert_rowid(),
            lga_id,
            city_id: defaults.city_id,
            code: code.to_owned(),
            area: defaults.area.to_owned(),
        })
    }
}
