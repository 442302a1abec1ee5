use clap::{ArgAction, Parser, Subcommand};

/// CLI arguments for bikemi-cli
#[derive(Debug, Parser)]
#[command(
    name = "bikemi",
    version,
    about = "Live BikeMi station availability: search, sort and nearest station"
)]
pub struct CliArgs {
    /// Saved station_information.json to use instead of the live feed
    #[arg(long = "basic-file", global = true, requires = "extra_file")]
    pub basic_file: Option<String>,

    /// Saved copy of the stations page to use instead of the live site
    #[arg(long = "extra-file", global = true, requires = "basic_file")]
    pub extra_file: Option<String>,

    /// URL of the GBFS station_information feed
    #[arg(long = "info-url", global = true, env = "BIKEMI_INFO_URL")]
    pub info_url: Option<String>,

    /// URL of the stations page carrying live availability
    #[arg(long = "stations-url", global = true, env = "BIKEMI_STATIONS_URL")]
    pub stations_url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long = "timeout", global = true, env = "BIKEMI_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Print stations as pretty JSON
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// More log output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show network-wide totals
    Stats,

    /// List all stations
    List {
        /// Field to sort by (e.g. bike, ebike, availableDocks, title)
        #[arg(short = 's', long = "sort")]
        sort: Option<String>,
    },

    /// Search stations by name or id
    Find {
        /// Name fragment or id (accents, spaces and case are ignored)
        query: String,
    },

    /// Find the station closest to a coordinate
    Nearest {
        /// Latitude in degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },

    /// Show every field of one station
    Show {
        /// Station id
        station_id: String,
    },
}
