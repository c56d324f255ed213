use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use ngloc_core::SourceFormat;
use std::path::PathBuf;

/// CLI arguments for ngloc
#[derive(Debug, Parser)]
#[command(
    name = "ngloc",
    version,
    about = "Load and query Nigeria's zones, states, LGAs, cities, wards and postal codes"
)]
pub struct CliArgs {
    /// SQLite database file (created on first use)
    #[arg(
        short = 'd',
        long = "database",
        env = "NGLOC_DATABASE",
        default_value = "ng_locations.sqlite3",
        global = true
    )]
    pub database: PathBuf,

    /// Show library logs (honours RUST_LOG)
    #[arg(short = 'v', long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all logs
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Shape of the file passed to `load --input`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// States list their LGAs by name
    #[default]
    Flat,
    /// LGAs carry cities, wards and postal codes
    Nested,
}

impl From<InputFormat> for SourceFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Flat => SourceFormat::Flat,
            InputFormat::Nested => SourceFormat::Nested,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load a dataset into the database (bundled national data by default)
    Load {
        /// Delete all existing location rows first
        #[arg(long)]
        clear: bool,

        /// Dataset file (.json or .json.gz)
        #[arg(short = 'i', long, conflicts_with = "sample")]
        input: Option<PathBuf>,

        /// Format of --input
        #[arg(long, value_enum, default_value_t = InputFormat::Flat, requires = "input")]
        format: InputFormat,

        /// Load the bundled extended sample (cities, wards, postal codes)
        #[arg(long)]
        sample: bool,
    },

    /// Normalize a flat dataset file into the nested form
    Convert {
        /// Flat dataset file (.json or .json.gz)
        #[arg(short = 'i', long)]
        input: PathBuf,

        /// Output file; prints to stdout when omitted
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Show row counts per entity kind
    Stats,

    /// List all zones
    Zones,

    /// List states, optionally within one zone
    States {
        /// Zone name (case-insensitive)
        #[arg(short = 'z', long)]
        zone: Option<String>,
    },

    /// List LGAs of a state or a zone
    #[command(group(ArgGroup::new("parent").required(true).args(["state", "zone"])))]
    Lgas {
        /// State name (case-insensitive)
        #[arg(short = 's', long)]
        state: Option<String>,

        /// Zone name (case-insensitive)
        #[arg(short = 'z', long)]
        zone: Option<String>,
    },

    /// Show one state with its zone and LGA count
    State {
        /// State name (case-insensitive)
        name: String,
    },

    /// Look up a postal code
    Postal {
        /// Postal code, e.g. 100001
        code: String,
    },

    /// Search every entity kind for names containing a substring
    Search {
        /// Substring to search (case-insensitive)
        query: String,
    },
}
