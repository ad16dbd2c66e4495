use crate::config::BackendKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimebank
#[derive(Parser)]
#[command(
    name = "rtimebank",
    version = env!("CARGO_PKG_VERSION"),
    about = "Time bank CLI: daily balances, monthly projection and compensation plans",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the configured backend
    #[arg(global = true, long = "backend", value_enum)]
    pub backend: Option<BackendKind>,

    /// Override the REST API base URL (implies nothing about --backend)
    #[arg(global = true, long = "api")]
    pub api: Option<String>,

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

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Add missing fields to the configuration file")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Manage the local database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Record a punch in the local database
    Add {
        /// Date of the punch (YYYY-MM-DD)
        date: String,

        /// Time of the punch (HH:MM)
        time: String,

        #[arg(long, help = "User id (default: default_user from config)")]
        user: Option<i64>,

        #[arg(long, help = "Free-text description, e.g. 'entrada'")]
        label: Option<String>,

        #[arg(long, help = "Explicit role: entry, pause, return, exit")]
        role: Option<String>,
    },

    /// Delete a punch by id
    Del { id: i64 },

    /// Daily balances over a period
    Day {
        #[arg(long, short, help = "YYYY, YYYY-MM, YYYY-MM-DD or start:end (default: current month)")]
        period: Option<String>,

        #[arg(long)]
        user: Option<i64>,

        #[arg(long = "details", help = "Show extra punches and role mismatches")]
        details: bool,

        #[arg(long = "fill", help = "List business days without punches as no-record")]
        fill: bool,
    },

    /// Monthly balance and month-end outlook
    Month {
        /// Month (YYYY-MM, default: current month)
        month: Option<String>,

        #[arg(long)]
        user: Option<i64>,
    },

    /// Plan the compensation of a debit over the next business days
    Plan {
        #[arg(long, help = "Debit to compensate (HH:MM, default: current monthly debit)")]
        debt: Option<String>,

        #[arg(long = "per-day", help = "Minutes to compensate per business day")]
        per_day: Option<i64>,

        #[arg(long)]
        user: Option<i64>,

        #[arg(long, help = "Write the plan through the backend (journaled)")]
        confirm: bool,
    },

    /// Resume or inspect a confirmed compensation plan
    Compensate {
        #[arg(long, value_name = "PLAN", conflicts_with = "status")]
        resume: Option<i64>,

        #[arg(long, value_name = "PLAN")]
        status: Option<i64>,
    },

    /// Manager dashboard for today, refreshed periodically
    Dashboard {
        #[arg(long, help = "Render once and exit")]
        once: bool,

        #[arg(long, help = "Refresh interval in seconds (default: poll_interval_secs)")]
        interval: Option<u64>,

        #[arg(long, help = "Show another day instead of today (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
