//! Command-line arguments

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use filter_core::policy::MAX_GENERATION_COUNT;
use filter_core::Order;
use serde::Deserialize;
use std::path::PathBuf;

const USAGE_GUIDE: &str = "\
This tool helps you remove old daily backups. For example:
  - Keep 7 daily backups (--backup-daily 7), and
  - Keep 3 weekly backups (--backup-weekly 3), and
  - Keep 5 monthly backups (--backup-monthly 5).
  There will be 15 backups to be kept in total.
  Other backups should be deleted.

To use this tool correctly, you should do these things in your backup scripts:
1. Do the ordinary backup procedures, normally uploading your files
2. Write the current date into a file, e.g. `date +%Y%m%d_%H%M%S >> backups.txt`
3. Invoke this tool, e.g. `TO_DELETE=$(cat backups.txt | backups-filter)`
4. Delete your old backups, and remove the date line from backups.txt respectively";

/// backups-filter - pick which dated backups to delete under a daily/weekly/monthly policy
#[derive(Parser, Debug)]
#[command(name = "backups-filter")]
#[command(author, version, about, long_about = None, after_help = USAGE_GUIDE)]
pub struct Cli {
    /// Layout of each line (chrono strftime syntax); only the date part is used
    /// [default: %Y%m%d_%H%M%S]
    #[arg(long, value_name = "FORMAT")]
    pub layout: Option<String>,

    /// Number of daily backups, at least 1 [default: 7]
    #[arg(long, value_name = "N", value_parser = generation_count())]
    pub backup_daily: Option<u32>,

    /// Number of weekly backups, 0 to disable [default: 3]
    #[arg(long, value_name = "N", value_parser = generation_count())]
    pub backup_weekly: Option<u32>,

    /// Number of monthly backups, 0 to disable [default: 5]
    #[arg(long, value_name = "N", value_parser = generation_count())]
    pub backup_monthly: Option<u32>,

    /// Sort order of input and output [default: ascending]
    #[arg(long, value_enum, conflicts_with = "descending")]
    pub order: Option<OrderArg>,

    /// Input and output are newest first (same as --order descending)
    #[arg(long)]
    pub descending: bool,

    /// Print the items which should be kept, instead of which should be deleted
    #[arg(long)]
    pub keep: bool,

    /// Print the items which should be deleted, overriding `keep` from a settings file
    #[arg(long, conflicts_with = "keep")]
    pub delete: bool,

    /// Reference day instead of today
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub now: Option<NaiveDate>,

    /// Settings file (TOML) providing defaults for the options above
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log every day-to-group assignment and cluster decision to stderr
    #[arg(long)]
    pub debug: bool,
}

/// Tier counts above [`MAX_GENERATION_COUNT`] are rejected while parsing.
fn generation_count() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(..=i64::from(MAX_GENERATION_COUNT))
}

/// Order as spelled on the command line and in settings files
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderArg {
    /// Oldest line first
    Ascending,
    /// Newest line first
    Descending,
}

impl From<OrderArg> for Order {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Ascending => Order::Ascending,
            OrderArg::Descending => Order::Descending,
        }
    }
}
