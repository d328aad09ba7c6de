use crate::report::ReportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for attendo.
/// The subcommands mirror the messaging-bot command surface; `--from`
/// stands in for the inbound sender identity the transport would supply.
#[derive(Parser)]
#[command(
    name = "attendo",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance bot core: geofenced check-ins, roster and daily reports",
    long_about = None,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Override the data directory (useful for tests or custom setups)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and data directory
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// Greet a sender; students also get the location-sharing hint
    Start {
        #[arg(long = "from", value_name = "IDENTITY")]
        from: String,
    },

    /// List available commands, filtered by the sender's role
    Help {
        #[arg(long = "from", value_name = "IDENTITY")]
        from: String,
    },

    /// Register or overwrite a roster entry (leader-only after bootstrap)
    Add {
        #[arg(long = "from", value_name = "IDENTITY")]
        from: String,

        /// Identity key of the person to register
        identity: String,

        /// Display name
        name: String,

        /// Role: student or leader
        role: String,
    },

    /// Show the roster (leader-only)
    List {
        #[arg(long = "from", value_name = "IDENTITY")]
        from: String,
    },

    /// Record a manual attendance mark for today
    Mark {
        #[arg(long = "from", value_name = "IDENTITY")]
        from: String,

        /// Mark token: exactly '+' or '-'
        #[arg(allow_hyphen_values = true)]
        token: String,
    },

    /// Record an attendance mark for today from a reported location
    #[command(allow_negative_numbers = true)]
    Locate {
        #[arg(long = "from", value_name = "IDENTITY")]
        from: String,

        /// Latitude in degrees
        lat: f64,

        /// Longitude in degrees
        lon: f64,
    },

    /// Show the sender's own mark for today
    Status {
        #[arg(long = "from", value_name = "IDENTITY")]
        from: String,
    },

    /// Export one day's attendance report (leader-only)
    Report {
        #[arg(long = "from", value_name = "IDENTITY")]
        from: String,

        #[arg(
            long,
            value_name = "DATE",
            help = "Report date (YYYY-MM-DD), defaults to today"
        )]
        date: Option<String>,

        #[arg(long, value_enum, default_value = "pdf")]
        format: ReportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,
    },
}
