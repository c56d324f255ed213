// crates/ngloc-core/src/store/schema.rs
use rusqlite::{Connection, OptionalExtension, Transaction};

use crate::error::{NgLocError, Result, SqliteContext};

pub const SCHEMA_VERSION: i64 = 2;

/// Create the location tables inside an existing SQLite database.
///
/// Enables foreign keys, creates the six entity tables and their indexes, and
/// records the schema version, all in one transaction. Running it against an
/// initialised database is a no-op; a database stamped with another version
/// is rejected.
///
/// Parent deletes cascade down Zone -> State -> LGA -> {City, Ward,
/// PostalCode}. Deleting a city clears `postal_codes.city_id` instead.
pub fn initialise_schema(connection: &mut Connection) -> Result<()> {
    connection
        .pragma_update(None, "foreign_keys", true)
        .op("enable foreign keys")?;

    let transaction = connection.transaction().op("begin schema transaction")?;

    create_tables(&transaction)?;
    create_indexes(&transaction)?;
    ensure_schema_version(&transaction)?;

    transaction.commit().op("commit schema transaction")
}

fn create_tables(transaction: &Transaction<'_>) -> Result<()> {
    run_migration_step(
        transaction,
        "create zones",
        "CREATE TABLE IF NOT EXISTS zones (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            code TEXT NOT NULL UNIQUE
        )",
    )?;
    run_migration_step(
        transaction,
        "create states",
        "CREATE TABLE IF NOT EXISTS states (
            id INTEGER PRIMARY KEY,
            zone_id INTEGER NOT NULL REFERENCES zones(id) ON DELETE CASCADE,
            name TEXT NOT NULL UNIQUE,
            code TEXT NOT NULL DEFAULT '',
            capital TEXT NOT NULL DEFAULT '',
            latitude REAL,
            longitude REAL
        )",
    )?;
    run_migration_step(
        transaction,
        "create lgas",
        "CREATE TABLE IF NOT EXISTS lgas (
            id INTEGER PRIMARY KEY,
            state_id INTEGER NOT NULL REFERENCES states(id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            UNIQUE (state_id, name)
        )",
    )?;
    run_migration_step(
        transaction,
        "create cities",
        "CREATE TABLE IF NOT EXISTS cities (
            id INTEGER PRIMARY KEY,
            lga_id INTEGER NOT NULL REFERENCES lgas(id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            is_capital INTEGER NOT NULL DEFAULT 0,
            population INTEGER,
            latitude REAL,
            longitude REAL,
            UNIQUE (lga_id, name)
        )",
    )?;
    run_migration_step(
        transaction,
        "create wards",
        "CREATE TABLE IF NOT EXISTS wards (
            id INTEGER PRIMARY KEY,
            lga_id INTEGER NOT NULL REFERENCES lgas(id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            UNIQUE (lga_id, name)
        )",
    )?;
    run_migration_step(
        transaction,
        "create postal_codes",
        "CREATE TABLE IF NOT EXISTS postal_codes (
            id INTEGER PRIMARY KEY,
            lga_id INTEGER NOT NULL REFERENCES lgas(id) ON DELETE CASCADE,
            city_id INTEGER REFERENCES cities(id) ON DELETE SET NULL,
            code TEXT NOT NULL,
            area TEXT NOT NULL DEFAULT '',
            UNIQUE (code, lga_id)
        )",
    )
}

fn create_indexes(transaction: &Transaction<'_>) -> Result<()> {
    run_migration_step(
        transaction,
        "index states by zone",
        "CREATE INDEX IF NOT EXISTS idx_states_zone ON states(zone_id)",
    )?;
    run_migration_step(
        transaction,
        "index cities by lga",
        "CREATE INDEX IF NOT EXISTS idx_cities_lga ON cities(lga_id)",
    )?;
    run_migration_step(
        transaction,
        "index wards by lga",
        "CREATE INDEX IF NOT EXISTS idx_wards_lga ON wards(lga_id)",
    )?;
    run_migration_step(
        transaction,
        "index postal codes by lga",
        "CREATE INDEX IF NOT EXISTS idx_postal_codes_lga ON postal_codes(lga_id)",
    )?;
    run_migration_step(
        transaction,
        "index postal codes by city",
        "CREATE INDEX IF NOT EXISTS idx_postal_codes_city ON postal_codes(city_id)",
    )
}

fn ensure_schema_version(transaction: &Transaction<'_>) -> Result<()> {
    run_migration_step(
        transaction,
        "create schema version table",
        "CREATE TABLE IF NOT EXISTS ngloc_schema_version (
            version INTEGER PRIMARY KEY CHECK (version > 0),
            applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'))
        )",
    )?;

    let existing_version: Option<i64> = transaction
        .query_row(
            "SELECT version FROM ngloc_schema_version LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()
        .op("read schema version")?;

    match existing_version {
        Some(version) if version == SCHEMA_VERSION => Ok(()),
        Some(found) => Err(NgLocError::SchemaVersion {
            expected: SCHEMA_VERSION,
            found,
        }),
        None => transaction
            .execute(
                "INSERT INTO ngloc_schema_version (version) VALUES (?1)",
                [SCHEMA_VERSION],
            )
            .map(|_| ())
            .op("record schema version"),
    }
}

fn run_migration_step(
    transaction: &Transaction<'_>,
    step: &'static str,
    sql: &str,
) -> Result<()> {
    transaction.execute(sql, []).map(|_| ()).op(step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialising_twice_is_a_no_op() {
        let mut conn = Connection::open_in_memory().unwrap();
        initialise_schema(&mut conn).unwrap();
        initialise_schema(&mut conn).unwrap();

        let versions: i64 = conn
            .query_row("SELECT COUNT(*) FROM ngloc_schema_version", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(versions, 1);
    }

    #[test]
    fn rejects_foreign_schema_version() {
        let mut conn = Connection::open_in_memory().unwrap();
        initialise_schema(&mut conn).unwrap();
        conn.execute("UPDATE ngloc_schema_version SET version = 99", [])
            .unwrap();

        let err = initialise_schema(&mut conn).unwrap_err();
        assert!(matches!(
            err,
            NgLocError::SchemaVersion {
                expected: SCHEMA_VERSION,
                found: 99
            }
        ));
    }

    #[test]
    fn creates_all_entity_tables() {
        let mut conn = Connection::open_in_memory().unwrap();
        initialise_schema(&mut conn).unwrap();

        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN (
                    'zones', 'states', 'lgas', 'cities', 'wards', 'postal_codes'
                )",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 6);
    }
}
