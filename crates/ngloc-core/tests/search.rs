//! Lookups over a store holding the bundled dataset plus the extended sample.

use ngloc_core::rusqlite::Connection;
use ngloc_core::store;
use ngloc_core::{dataset, load, LoadOptions, LocationSearch, NgLocError};
use rstest::{fixture, rstest};

#[fixture]
fn loaded() -> Connection {
    let mut connection = store::open_in_memory().expect("open in-memory store");
    let national = dataset::nigeria_nested().expect("bundled dataset");
    let sample = dataset::sample_extended().expect("bundled sample");
    load(&mut connection, &national, LoadOptions::default()).expect("load national data");
    load(&mut connection, &sample, LoadOptions::default()).expect("load sample");
    connection
}

fn names<T>(rows: Vec<T>, name: impl Fn(&T) -> &str) -> Vec<String> {
    rows.iter().map(|row| name(row).to_owned()).collect()
}

#[rstest]
#[case("lagos")]
#[case("Lagos")]
#[case("LAGOS")]
fn state_lookup_ignores_case(loaded: Connection, #[case] query: &str) -> Result<(), NgLocError> {
    let state = loaded.get_state_by_name(query)?.expect("lagos found");
    assert_eq!(state.name, "Lagos");
    assert_eq!(loaded.get_lgas_by_state(query)?.len(), 20);
    Ok(())
}

#[rstest]
fn zone_lookups(loaded: Connection) -> Result<(), NgLocError> {
    let zones = loaded.get_all_zones()?;
    assert_eq!(
        names(zones, |z| z.name.as_str()),
        ["North Central", "North East", "North West", "South East", "South South", "South West"]
    );

    let by_code = loaded.get_zone_by_code("SOUTH_EAST")?.expect("zone by code");
    assert_eq!(by_code.name, "South East");
    let north_central = loaded.get_zone_by_name("north central")?.expect("zone by name");
    assert_eq!(north_central.code, "north_central");
    assert!(loaded.get_zone_by_name("Central")?.is_none());
    Ok(())
}

#[rstest]
fn state_lookups(loaded: Connection) -> Result<(), NgLocError> {
    assert_eq!(loaded.get_all_states()?.len(), 37);
    assert_eq!(loaded.get_states_by_zone("north central")?.len(), 7);
    assert!(loaded.get_states_by_zone("Atlantis")?.is_empty());

    let fct = loaded.get_state_by_code("fc")?.expect("fct by code");
    assert_eq!(fct.name, "Federal Capital Territory");
    assert_eq!(fct.capital(), Some("Abuja"));
    Ok(())
}

#[rstest]
fn lga_lookups(loaded: Connection) -> Result<(), NgLocError> {
    assert_eq!(loaded.get_lgas_by_zone("South East")?.len(), 95);
    assert_eq!(loaded.get_lgas_by_zone("north west")?.len(), 186);
    assert!(loaded.get_lgas_by_state("Atlantis")?.is_empty());

    // Surulere is an LGA in both Lagos and Oyo.
    assert!(loaded.get_lga_by_name("Surulere", None)?.is_none());
    let oyo = loaded.get_state_by_name("Oyo")?.expect("oyo");
    let surulere = loaded
        .get_lga_by_name("surulere", Some("oyo"))?
        .expect("scoped lga");
    assert_eq!(surulere.state_id, oyo.id);

    assert!(loaded.get_lga_by_name("Eti-Osa", None)?.is_some());
    Ok(())
}

#[rstest]
fn city_lookups(loaded: Connection) -> Result<(), NgLocError> {
    let ikeja = loaded.get_cities_by_lga("ikeja", Some("lagos"))?;
    assert_eq!(ikeja.len(), 8);
    assert_eq!(loaded.get_cities_by_lga("Ikeja", None)?.len(), 8);
    assert_eq!(loaded.get_cities_by_state("Ogun")?.len(), 7);
    assert!(loaded.get_cities_by_state("Kano")?.is_empty());

    // Victoria Island is listed under two Lagos LGAs.
    assert!(loaded.get_city_by_name("Victoria Island", None)?.is_none());
    assert!(loaded.get_city_by_name("Victoria Island", Some("Lagos"))?.is_none());

    let capital = loaded
        .get_city_by_name("port harcourt", Some("rivers"))?
        .expect("port harcourt city");
    assert!(capital.is_capital);
    assert!(loaded.get_city_by_name("Port Harcourt", Some("Lagos"))?.is_none());
    Ok(())
}

#[rstest]
fn ward_lookups(loaded: Connection) -> Result<(), NgLocError> {
    assert_eq!(loaded.get_wards_by_state("Rivers")?.len(), 20);
    assert_eq!(loaded.get_wards_by_state("Lagos")?.len(), 81);

    let wards = loaded.get_wards_by_lga("Port Harcourt", Some("Rivers"))?;
    assert_eq!(wards.len(), 10);
    assert!(wards.iter().any(|w| w.name == "Diobu I" && w.code == "RI-PHC-01"));
    Ok(())
}

#[rstest]
fn postal_code_lookups(loaded: Connection) -> Result<(), NgLocError> {
    // 100001 is shared by three Lagos LGAs.
    assert!(loaded.get_postal_code("100001")?.is_none());
    assert_eq!(loaded.get_postal_codes_by_code("100001")?.len(), 3);

    let single = loaded.get_postal_code(" 100211 ")?.expect("unique code");
    let ikeja = loaded.get_lga_by_name("Ikeja", Some("Lagos"))?.expect("ikeja lga");
    assert_eq!(single.lga_id, ikeja.id);

    assert_eq!(loaded.get_postal_codes_by_lga("Ikeja", Some("Lagos"))?.len(), 5);
    assert_eq!(loaded.get_postal_codes_by_state("Ogun")?.len(), 4);
    assert!(loaded.get_postal_code("999999")?.is_none());

    let codes = names(loaded.get_postal_codes_by_state("Rivers")?, |p| p.code.as_str());
    let mut sorted = codes.clone();
    sorted.sort();
    assert_eq!(codes, sorted);
    Ok(())
}

#[rstest]
fn search_matches_substrings_across_kinds(loaded: Connection) -> Result<(), NgLocError> {
    let results = loaded.search_locations("IBADAN")?;
    assert_eq!(results.lgas.len(), 5);
    assert!(results.zones.is_empty() && results.states.is_empty());
    assert_eq!(results.total(), 5);

    let north = loaded.search_locations("north")?;
    assert_eq!(north.zones.len(), 3);

    let ikeja = loaded.search_locations("ikeja")?;
    assert_eq!(ikeja.lgas.len(), 1);
    assert!(!ikeja.cities.is_empty());
    assert!(!ikeja.wards.is_empty());
    Ok(())
}

#[rstest]
#[case("%")]
#[case("_")]
#[case("   ")]
fn search_without_matches_is_empty(loaded: Connection, #[case] query: &str) -> Result<(), NgLocError> {
    assert!(loaded.search_locations(query)?.is_empty());
    Ok(())
}

#[rstest]
#[case("", [6, 37, 774, 49, 121])]
#[case(" ", [6, 3, 203, 5, 52])]
fn search_query_is_used_untrimmed(
    loaded: Connection,
    #[case] query: &str,
    #[case] expected: [usize; 5],
) -> Result<(), NgLocError> {
    let results = loaded.search_locations(query)?;
    let counts = [
        results.zones.len(),
        results.states.len(),
        results.lgas.len(),
        results.cities.len(),
        results.wards.len(),
    ];
    assert_eq!(counts, expected);
    Ok(())
}

#[rstest]
fn empty_store_answers_with_nothing() -> Result<(), NgLocError> {
    let connection = store::open_in_memory()?;
    assert!(connection.stats()?.is_empty());
    assert!(connection.get_all_zones()?.is_empty());
    assert!(connection.get_state_by_name("Lagos")?.is_none());
    assert!(connection.search_locations("a")?.is_empty());
    Ok(())
}

#[rstest]
fn ambiguous_state_name_yields_none() -> Result<(), NgLocError> {
    // A states table without the uniqueness constraint, holding two rows that
    // differ only in case.
    let connection = Connection::open_in_memory().expect("open in-memory database");
    connection
        .execute_batch(
            "CREATE TABLE states (
                id INTEGER PRIMARY KEY,
                zone_id INTEGER NOT NULL,
                name TEXT NOT NULL,
                code TEXT NOT NULL,
                capital TEXT NOT NULL,
                latitude REAL,
                longitude REAL
            );
            INSERT INTO states (zone_id, name, code, capital) VALUES
                (1, 'Lagos', 'LA', 'Ikeja'),
                (2, 'LAGOS', 'LG', 'Ikeja');",
        )
        .expect("create states double");

    assert!(connection.get_state_by_name("lagos")?.is_none());
    assert_eq!(connection.get_all_states()?.len(), 2);
    assert_eq!(
        connection.get_state_by_code("LG")?.map(|s| s.zone_id),
        Some(2)
    );
    Ok(())
}
