use clap::{Parser, Subcommand};

/// Command-line interface definition for rReserve
#[derive(Parser)]
#[command(
    name = "rreserve",
    version = env!("CARGO_PKG_VERSION"),
    about = "Cafe Fausse reservations: opening hours, time slots, availability checks and bookings",
    long_about = None
)]
pub struct Cli {
    /// Override audit-log database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the reservation backend base URL
    #[arg(global = true, long = "api", value_name = "URL")]
    pub api: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the audit-log database
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "operation", help = "Only rows for this operation (check, reserve, ...)")]
        operation: Option<String>,
    },

    /// List reservation start times for a date
    Slots {
        /// Date (YYYY-MM-DD); defaults to today
        date: Option<String>,

        #[arg(long = "json", help = "Print the slots as a JSON array")]
        json: bool,
    },

    /// Show opening hours for a date, or the whole week when no date is given
    Hours {
        /// Date (YYYY-MM-DD)
        date: Option<String>,
    },

    /// Compose a date and a time into the slot key used by the backend
    Compose {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        time: String,
    },

    /// Check table availability for a slot
    Check {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM); defaults to the first slot of the day
        time: Option<String>,

        #[arg(long = "guests", short = 'g', help = "Number of guests")]
        guests: Option<u32>,
    },

    /// Book a table
    Reserve {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        time: String,

        #[arg(long = "guests", short = 'g', help = "Number of guests")]
        guests: u32,

        #[arg(long = "name", help = "Name on the reservation")]
        name: String,

        #[arg(long = "email", help = "Contact email")]
        email: String,

        #[arg(long = "phone", help = "Contact phone (optional)")]
        phone: Option<String>,
    },

    /// Check that the reservation backend is reachable
    Ping,
}
