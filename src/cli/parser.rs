use crate::export::ExportFormat;
use crate::models::{DateRange, Filters};
use crate::ui::messages::warning;
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rPayroll
/// CLI payroll report over a synthetic set of shift records
#[derive(Parser)]
#[command(
    name = "rpayroll",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple payroll report CLI: search, filter by date, group shifts by employee and export CSV",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests)
    #[arg(global = true, long = "config-file", value_name = "FILE")]
    pub config_file: Option<String>,

    /// Number of shift records to generate
    #[arg(global = true, long = "records", value_name = "N")]
    pub records: Option<usize>,

    /// Seed for a reproducible dataset
    #[arg(global = true, long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Search and date selections shared by `list`, `stats` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long, short, help = "Case-insensitive text matched against employee or property name")]
    pub search: Option<String>,

    #[arg(long, short, help = "Single date (MM-DD-YYYY or YYYY-MM-DD)")]
    pub date: Option<String>,

    #[arg(long, help = "Range start (MM-DD-YYYY or YYYY-MM-DD); needs --to")]
    pub from: Option<String>,

    #[arg(long, help = "Range end (MM-DD-YYYY or YYYY-MM-DD); needs --from")]
    pub to: Option<String>,
}

impl FilterArgs {
    /// Convert the raw flags into report filters.
    ///
    /// Dates that cannot be parsed leave their filter inactive.
    pub fn to_filters(&self) -> Filters {
        Filters {
            search: self.search.clone().unwrap_or_default(),
            single_date: lenient_date("--date", &self.date),
            date_range: DateRange {
                start: lenient_date("--from", &self.from),
                end: lenient_date("--to", &self.to),
            },
        }
    }
}

fn lenient_date(flag: &str, raw: &Option<String>) -> Option<NaiveDate> {
    let raw = raw.as_deref()?;
    let parsed = parse_date(raw);
    if parsed.is_none() {
        warning(format!("Ignoring {flag}: '{raw}' is not a valid date."));
    }
    parsed
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Show shifts grouped by employee with subtotals
    List {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, short, default_value_t = 1, help = "Page number (1-based)")]
        page: usize,

        #[arg(long = "page-size", help = "Rows per page: 10, 20 or 50")]
        page_size: Option<usize>,

        #[arg(long, help = "Show every row without pagination")]
        all: bool,
    },

    /// Show the most-hours and most-efficient employees
    Stats {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long = "most-hours", help = "Only the employee with the most minutes worked")]
        most_hours: bool,

        #[arg(
            long = "most-efficient",
            help = "Only the employee with the lowest average seconds per unit"
        )]
        most_efficient: bool,
    },

    /// Export the filtered shifts
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (default: payroll_data.csv)")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
