// crates/ngloc-core/src/store/mod.rs

//! # Relational Store
//!
//! SQLite-backed storage for the location hierarchy. Tables carry the natural
//! key constraints and the foreign-key actions; [`Keyed`] gives every entity
//! kind a uniform get-or-create.

use rusqlite::Connection;
use std::path::Path;

use crate::error::{Result, SqliteContext};

mod keyed;
mod schema;

pub use keyed::{
    count, delete_all, delete_by_id, find_by_id, get_or_create, reassign_state_zone,
    CityDefaults, Keyed, LgaDefaults, PostalCodeDefaults, Record, StateDefaults, WardDefaults,
    ZoneDefaults,
};
pub use schema::{initialise_schema, SCHEMA_VERSION};

/// Open (or create) a database file and make sure the schema is in place.
pub fn open(path: impl AsRef<Path>) -> Result<Connection> {
    let mut conn = Connection::open(path.as_ref()).op("open database")?;
    initialise_schema(&mut conn)?;
    Ok(conn)
}

/// A fresh, schema-initialised in-memory database.
pub fn open_in_memory() -> Result<Connection> {
    let mut conn = Connection::open_in_memory().op("open in-memory database")?;
    initialise_schema(&mut conn)?;
    Ok(conn)
}
