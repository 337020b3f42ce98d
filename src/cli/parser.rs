use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorkhours
/// CLI application to track employee overtime with SQLite
#[derive(Parser)]
#[command(
    name = "rworkhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Register employees, log overtime intervals and print monthly overtime reports",
    long_about = "Register employees, log overtime intervals and print monthly overtime reports.\n\
                  Run without a subcommand to open the interactive menu."
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration in effect
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Register or list employees
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Record an overtime interval
    Add {
        #[arg(long, short = 'e', help = "Employee id")]
        employee: i64,

        #[arg(long, help = "Start, \"YYYY-MM-DD HH:MM\"")]
        start: String,

        /// An end earlier than the start is taken as the next day
        #[arg(long, help = "End, \"YYYY-MM-DD HH:MM\"")]
        end: String,

        #[arg(
            long = "break",
            default_value = "0",
            allow_hyphen_values = true,
            help = "Break duration in minutes"
        )]
        break_minutes: String,

        #[arg(long, default_value = "", help = "Free-text note")]
        note: String,
    },

    /// List the overtime of a month
    List {
        #[arg(long, short = 'm', help = "Month, YYYY-MM (default: current month)")]
        month: Option<String>,

        #[arg(long, short = 'e', help = "Only this employee")]
        employee: Option<i64>,
    },

    /// Generate the monthly PDF report of an employee
    Report {
        #[arg(long, short = 'e', help = "Employee id")]
        employee: i64,

        #[arg(long, short = 'm', help = "Month, YYYY-MM")]
        month: String,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output PDF (default: <report_dir>/overtime_report_<ID>_<YYYY-MM>.pdf)"
        )]
        file: Option<String>,

        #[arg(
            long,
            value_name = "PNG",
            help = "Logo image (default: logo_path from config)"
        )]
        logo: Option<String>,
    },

    /// Export a month of records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'm', help = "Month, YYYY-MM (default: current month)")]
        month: Option<String>,

        #[arg(long, short = 'e', help = "Only this employee")]
        employee: Option<i64>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Open the interactive menu
    Menu,
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Register a new employee
    Add {
        /// Display name
        name: String,
    },

    /// List registered employees
    List,
}
