//! Basic usage example for ngloc-rs
//!
//! This example demonstrates how to:
//! - Open an in-memory store and load the bundled dataset
//! - List zones, states and LGAs
//! - Look things up case-insensitively
//! - Search by substring

use ngloc_core::{dataset, load, store, LoadOptions, LocationSearch, Result};

fn main() -> Result<()> {
    println!("=== ngloc-rs Basic Usage Example ===\n");

    println!("Loading bundled dataset...");
    let mut conn = store::open_in_memory()?;
    let report = load(&mut conn, &dataset::nigeria_nested()?, LoadOptions::default())?;
    println!(
        "✓ Loaded {} zones, {} states, {} LGAs\n",
        report.totals.zones, report.totals.states, report.totals.lgas
    );

    // Example 1: Zones
    println!("--- Example 1: List all zones ---");
    for zone in conn.get_all_zones()? {
        let states = conn.get_states_by_zone(&zone.name)?;
        println!("{} ({}): {} states", zone.name, zone.code, states.len());
    }
    println!();

    // Example 2: A state, any casing
    println!("--- Example 2: Find state by name ---");
    if let Some(state) = conn.get_state_by_name("kaduna")? {
        println!("Found: {}", state.name);
        println!("Code: {}", state.code);
        println!("Capital: {}", state.capital().unwrap_or("-"));
    }
    println!();

    // Example 3: LGAs of a state
    println!("--- Example 3: List LGAs for a state ---");
    let lgas = conn.get_lgas_by_state("Lagos")?;
    println!("LGAs in Lagos: {}", lgas.len());
    for (i, lga) in lgas.iter().take(5).enumerate() {
        println!("{}. {}", i + 1, lga.name);
    }
    println!("... and {} more\n", lgas.len().saturating_sub(5));

    // Example 4: Names shared between states
    println!("--- Example 4: Ambiguous LGA names ---");
    match conn.get_lga_by_name("Obi", None)? {
        Some(lga) => println!("Unique: {}", lga.name),
        None => println!("'Obi' is ambiguous without a state"),
    }
    if let Some(lga) = conn.get_lga_by_name("Obi", Some("Benue"))? {
        println!("'Obi' in Benue has id {}", lga.id);
    }
    println!();

    // Example 5: Substring search
    println!("--- Example 5: Search ---");
    let results = conn.search_locations("north")?;
    println!(
        "'north' matches {} zones and {} LGAs",
        results.zones.len(),
        results.lgas.len()
    );

    Ok(())
}
