//! Error handling example for ngloc-rs
//!
//! This example demonstrates how failures surface and which lookups return
//! "nothing" instead of an error.

use ngloc_core::{load, store, FlatDataset, LoadOptions, LocationSearch, NestedDataset, NgLocError};

fn main() -> ngloc_core::Result<()> {
    println!("=== ngloc-rs Error Handling Example ===\n");

    // Example 1: Malformed input
    println!("--- Example 1: Flat dataset without a states key ---");
    match FlatDataset::from_json_str(r#"{"South West": {"code": "south_west"}}"#) {
        Ok(_) => println!("  unexpectedly parsed"),
        Err(NgLocError::Json(e)) => println!("  ✗ rejected: {e}"),
        Err(e) => return Err(e),
    }
    println!();

    // Example 2: Missing file
    println!("--- Example 2: Loading a missing file ---");
    if let Err(e) = NestedDataset::load_from_path("does/not/exist.json") {
        println!("  ✗ {e}");
    }
    println!();

    // Example 3: A failing load leaves the store untouched
    println!("--- Example 3: Rolled-back load ---");
    let mut conn = store::open_in_memory()?;
    let broken = NestedDataset::from_json_str(
        r#"{"South West": {"code": "south_west", "states": {"Lagos": {"lgas": {
            "Ikeja": {"postal_codes": [{"code": "100001", "area": "GRA", "city": "Atlantis"}]}
        }}}}}"#,
    )?;
    match load(&mut conn, &broken, LoadOptions::default()) {
        Ok(_) => println!("  unexpectedly loaded"),
        Err(e) => println!("  ✗ {e}"),
    }
    let stats = conn.stats()?;
    println!("  Zones after failure: {}", stats.zones);
    println!();

    // Example 4: Lookups never fail for absent data
    println!("--- Example 4: Absent lookups ---");
    for name in ["Ogun", "", "Atlantis"] {
        match conn.get_state_by_name(name)? {
            Some(state) => println!("  Found: {}", state.name),
            None => println!("  Not found: {name:?}"),
        }
    }
    println!("  Search for '%': {} results", conn.search_locations("%")?.total());

    Ok(())
}
