//! Extended data example for ngloc-rs
//!
//! Builds on the national dataset with the bundled sample of cities, wards
//! and postal codes, then adds a few entries by hand before loading.

use ngloc_core::{dataset, load, store, CityEntry, LoadOptions, LocationSearch, Result};

fn main() -> Result<()> {
    println!("=== ngloc-rs Extended Sample Example ===\n");

    let mut conn = store::open_in_memory()?;
    load(&mut conn, &dataset::nigeria_nested()?, LoadOptions::default())?;

    let mut sample = dataset::sample_extended()?;
    sample.add_city(
        "South West",
        "Lagos",
        "Kosofe",
        CityEntry::Detailed {
            name: "Ogudu".into(),
            is_capital: false,
            population: None,
            latitude: Some(6.5795),
            longitude: Some(3.3921),
        },
    )?;
    sample.add_ward("South West", "Lagos", "Kosofe", "Ogudu Ward")?;
    sample.add_postal_code("South West", "Lagos", "Kosofe", "100242")?;

    let report = load(&mut conn, &sample, LoadOptions::default())?;
    println!("--- Created by the sample load ---");
    println!("Cities: {}", report.created.cities);
    println!("Wards: {}", report.created.wards);
    println!("Postal codes: {}", report.created.postal_codes);
    println!();

    println!("--- Cities in Ikeja LGA ---");
    for city in conn.get_cities_by_lga("Ikeja", Some("Lagos"))? {
        let marker = if city.is_capital { " (capital)" } else { "" };
        println!("- {}{marker}", city.name);
    }
    println!();

    println!("--- Postal code lookups ---");
    for code in ["100211", "100001"] {
        match conn.get_postal_code(code)? {
            Some(postal_code) => println!("{code}: {}", postal_code.area),
            None => {
                let all = conn.get_postal_codes_by_code(code)?;
                println!("{code}: shared by {} LGAs", all.len());
            }
        }
    }
    println!();

    println!("--- Wards in Rivers ---");
    let wards = conn.get_wards_by_state("Rivers")?;
    println!("{} wards", wards.len());
    for ward in wards.iter().take(3) {
        println!("- {} [{}]", ward.name, ward.code);
    }

    Ok(())
}
