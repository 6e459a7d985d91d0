use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for chargelog
/// CLI logbook for EV charging sessions, stored in SQLite
#[derive(Parser)]
#[command(
    name = "chargelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "An EV charging logbook: record sessions, track range added, export to JSON/Excel",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information and totals")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a charging session
    Add {
        /// Date of the session (M/d or M/d/yyyy); defaults to today
        #[arg(long = "date")]
        date: Option<String>,

        /// Charging time, usually hours (free text)
        #[arg(long = "time")]
        time: String,

        /// Amount paid
        #[arg(long = "cost", allow_negative_numbers = true)]
        cost: f64,

        /// Total range / odometer reading after charging (km)
        #[arg(long = "total", allow_negative_numbers = true)]
        total: i64,

        #[arg(long = "notes", default_value = "")]
        notes: String,
    },

    /// Edit a charging session
    Edit {
        /// Record id or unique id prefix
        id: String,

        #[arg(long = "date")]
        date: Option<String>,

        #[arg(long = "time")]
        time: Option<String>,

        #[arg(long = "cost", allow_negative_numbers = true)]
        cost: Option<f64>,

        #[arg(long = "total", allow_negative_numbers = true)]
        total: Option<i64>,

        #[arg(long = "notes")]
        notes: Option<String>,

        /// Also recompute the range of later records
        #[arg(long = "cascade")]
        cascade: bool,
    },

    /// Delete a charging session
    Del {
        /// Record id or unique id prefix
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List charging sessions
    List {
        #[arg(long = "oldest-first", help = "Show the oldest record first")]
        oldest_first: bool,

        #[arg(long = "ids", help = "Show full record ids")]
        full_ids: bool,
    },

    /// Show the charging-efficiency chart
    Chart,

    /// Recompute the range added of every record
    Recalc,

    /// Export all records
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file; overrides --dir
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Output directory for the default file name (yyyy-MM-dd记录.<ext>)
        #[arg(long, value_name = "DIR")]
        dir: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Replace all records with the content of a JSON export
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
