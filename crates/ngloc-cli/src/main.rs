//! ngloc: command-line interface for ngloc-core
//!
//! Loads Nigeria's administrative hierarchy into a SQLite database and
//! answers lookups against it.
//!
//! Usage examples
//! --------------
//!
//! - Load the bundled national dataset (zones, states, LGAs)
//!   $ ngloc load
//!
//! - Wipe the database and load the extended sample
//!   $ ngloc load --clear --sample
//!
//! - Load a custom dataset
//!   $ ngloc load --input my_data.json.gz --format nested
//!
//! - Convert a flat file to the nested form
//!   $ ngloc convert --input flat.json --output nested.json
//!
//! - Query
//!   $ ngloc stats
//!   $ ngloc states --zone "south west"
//!   $ ngloc lgas --state lagos
//!   $ ngloc state kano
//!   $ ngloc postal 100001
//!   $ ngloc search ikeja
//!
//! The database path defaults to `ng_locations.sqlite3` and can be set with
//! `--database` or `NGLOC_DATABASE`.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use ngloc_core::rusqlite::Connection;
use ngloc_core::store::{self, find_by_id};
use ngloc_core::{
    dataset, load, normalize, City, DbStats, FlatDataset, Lga, LoadOptions, LocationSearch,
    NestedDataset, State, Zone,
};
use std::path::Path;
use tracing::{error, info};

fn init_tracing(args: &CliArgs) {
    // --quiet: nothing. --verbose: RUST_LOG or info. Default: warnings only.
    let filter = if args.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if args.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(&args);

    match args.command {
        Commands::Convert { input, output } => convert(&input, output.as_deref()),
        command => {
            let mut conn = store::open(&args.database)
                .with_context(|| format!("opening {}", args.database.display()))?;
            run(&mut conn, command)
        }
    }
}

fn convert(input: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let nested = normalize(&FlatDataset::load_from_path(input)?);
    match output {
        Some(path) => {
            nested.save_as(path)?;
            let stats = nested.counts();
            println!(
                "Wrote {} zones, {} states, {} LGAs to {}",
                stats.zones,
                stats.states,
                stats.lgas,
                path.display()
            );
        }
        None => println!("{}", nested.to_json_string_pretty()?),
    }
    Ok(())
}

fn run(conn: &mut Connection, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Load {
            clear,
            input,
            format,
            sample,
        } => {
            let data = match (input, sample) {
                (Some(path), _) => {
                    info!(path = %path.display(), ?format, "reading dataset");
                    NestedDataset::load_from_path_as(&path, format.into())
                        .inspect_err(|e| error!(path = %path.display(), "unreadable dataset: {e}"))
                        .with_context(|| format!("reading {}", path.display()))?
                }
                (None, true) => {
                    info!("using bundled extended sample");
                    dataset::sample_extended()?
                }
                (None, false) => {
                    info!("using bundled national dataset");
                    dataset::nigeria_nested()?
                }
            };

            let report = load(conn, &data, LoadOptions { clear })
                .inspect_err(|e| error!(clear, "load failed: {e}"))?;
            info!(lgas = report.created.lgas, "load finished");
            println!("Load complete.");
            print_counts("Created", &report.created);
            if report.states_reassigned > 0 {
                println!("  States moved to a new zone: {}", report.states_reassigned);
            }
            print_counts("Totals", &report.totals);
        }

        Commands::Convert { input, output } => convert(&input, output.as_deref())?,

        Commands::Stats => print_counts("Database statistics", &conn.stats()?),

        Commands::Zones => {
            for zone in conn.get_all_zones()? {
                println!("{} ({})", zone.name, zone.code);
            }
        }

        Commands::States { zone } => {
            let states = match zone.as_deref() {
                Some(zone_name) => {
                    if conn.get_zone_by_name(zone_name)?.is_none() {
                        bail!("zone not found: {zone_name}");
                    }
                    conn.get_states_by_zone(zone_name)?
                }
                None => conn.get_all_states()?,
            };
            for state in states {
                println!("{} ({}) - capital: {}", state.name, state.code, state.capital);
            }
        }

        Commands::Lgas { state, zone } => {
            let lgas = match (state.as_deref(), zone.as_deref()) {
                (Some(state_name), _) => conn.get_lgas_by_state(state_name)?,
                (None, Some(zone_name)) => conn.get_lgas_by_zone(zone_name)?,
                (None, None) => bail!("pass --state or --zone"),
            };
            if lgas.is_empty() {
                println!("No LGAs found");
            }
            for lga in lgas {
                println!("- {}", lga.name);
            }
        }

        Commands::State { name } => match conn.get_state_by_name(&name)? {
            Some(state) => print_state(conn, &state)?,
            None => eprintln!("No state found for: {name}"),
        },

        Commands::Postal { code } => {
            let matches = conn.get_postal_codes_by_code(&code)?;
            if matches.is_empty() {
                eprintln!("No postal code found for: {code}");
            }
            for postal_code in matches {
                let lga = find_by_id::<Lga>(conn, postal_code.lga_id)?
                    .context("postal code without LGA")?;
                let state =
                    find_by_id::<State>(conn, lga.state_id)?.context("LGA without state")?;
                let city = match postal_code.city_id {
                    Some(id) => find_by_id::<City>(conn, id)?.map(|c| c.name),
                    None => None,
                };
                println!(
                    "{} - {}{}, {} LGA, {}",
                    postal_code.code,
                    postal_code.area,
                    city.map(|c| format!(" ({c})")).unwrap_or_default(),
                    lga.name,
                    state.name
                );
            }
        }

        Commands::Search { query } => {
            let results = conn.search_locations(&query)?;
            if results.is_empty() {
                println!("No locations found matching: {query}");
                return Ok(());
            }
            print_group("Zones", results.zones.iter().map(|z| z.name.as_str()));
            print_group("States", results.states.iter().map(|s| s.name.as_str()));
            print_group("LGAs", results.lgas.iter().map(|l| l.name.as_str()));
            print_group("Cities", results.cities.iter().map(|c| c.name.as_str()));
            print_group("Wards", results.wards.iter().map(|w| w.name.as_str()));
        }
    }

    Ok(())
}

fn print_counts(title: &str, stats: &DbStats) {
    println!("{title}:");
    println!("  Zones: {}", stats.zones);
    println!("  States: {}", stats.states);
    println!("  LGAs: {}", stats.lgas);
    println!("  Cities: {}", stats.cities);
    println!("  Wards: {}", stats.wards);
    println!("  Postal codes: {}", stats.postal_codes);
}

fn print_state(conn: &Connection, state: &State) -> anyhow::Result<()> {
    let zone = find_by_id::<Zone>(conn, state.zone_id)?.context("state without zone")?;
    let lgas = conn.get_lgas_by_state(&state.name)?;
    println!("State: {}", state.name);
    println!("Code: {}", state.code);
    println!("Capital: {}", state.capital().unwrap_or("-"));
    println!("Zone: {}", zone.name);
    println!("LGAs: {}", lgas.len());
    Ok(())
}

fn print_group<'a>(title: &str, names: impl ExactSizeIterator<Item = &'a str>) {
    if names.len() == 0 {
        return;
    }
    println!("{title} ({}):", names.len());
    for name in names {
        println!("  - {name}");
    }
}
