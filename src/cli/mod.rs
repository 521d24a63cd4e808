//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{Team, Year};

/// Common filtering arguments shared between commands
#[derive(Debug, Args)]
pub struct CommonFilters {
    /// Path to the workbook (or set `NFL_DASH_DATA_FILE` env var).
    #[clap(long, short = 'f')]
    pub data_file: Option<PathBuf>,

    /// Show results through this year (defaults to the latest year in the data).
    #[clap(long, short = 'y')]
    pub year: Option<Year>,

    /// Filter by franchise (repeatable): `-t Packers -t Bears`.
    #[clap(long = "team", short = 't')]
    pub teams: Option<Vec<Team>>,

    /// Filter by division (repeatable); narrows the franchise choices first.
    #[clap(long = "division")]
    pub divisions: Option<Vec<String>>,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Cumulative franchise achievements through the selected year.
    ///
    /// Sums wins, titles, and championships across every season up to and
    /// including the year, and merges in the rank held in that year.
    Snapshot {
        #[clap(flatten)]
        filters: CommonFilters,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Print the workbook path and row counts while loading.
        #[clap(long)]
        verbose: bool,
    },

    /// Franchise ranks stored for exactly the selected year.
    Ranks {
        #[clap(flatten)]
        filters: CommonFilters,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Print the workbook path and row counts while loading.
        #[clap(long)]
        verbose: bool,
    },

    /// Rank-over-year series per selected franchise, for plotting.
    ///
    /// Lower rank values indicate better performance. When `--year` is
    /// given, the series stop at that year.
    RankTrend {
        #[clap(flatten)]
        filters: CommonFilters,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Print the workbook path and row counts while loading.
        #[clap(long)]
        verbose: bool,
    },

    /// List franchises with their division and season coverage.
    Teams {
        /// Path to the workbook (or set `NFL_DASH_DATA_FILE` env var).
        #[clap(long, short = 'f')]
        data_file: Option<PathBuf>,

        /// Restrict to these divisions (repeatable).
        #[clap(long = "division")]
        divisions: Option<Vec<String>>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Print the workbook path and row counts while loading.
        #[clap(long)]
        verbose: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "franchise-dash", about = "NFL franchise rankings dashboard CLI")]
pub struct FranchiseDash {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Read views from the franchise workbook
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
