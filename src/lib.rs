//! NFL Franchise Rankings Dashboard CLI Library
//!
//! A Rust library and CLI for exploring NFL franchise history from a local
//! spreadsheet: cumulative achievements through a chosen year, externally
//! supplied franchise ranks, and rank-over-time series.
//!
//! ## Features
//!
//! - **Workbook Ingestion**: Load season records and ranks from the
//!   "Master Sheet" and "Ranks" tabs of an `.xlsx`/`.xlsm` file
//! - **Cumulative Snapshots**: Sum wins, titles, and championships across
//!   every season up to and including a selected year
//! - **Rank Lookup**: Ranks are read as stored, never recomputed
//! - **Team and Division Filters**: Narrow every view to a chosen set of
//!   franchises or divisions
//! - **Text or JSON Output**: Every command prints plain lines or pretty JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use franchise_dash::{
//!     aggregate::cumulative_snapshot,
//!     cli::types::{Team, TeamSelection, Year},
//!     models::SeasonRecord,
//! };
//!
//! let seasons = vec![SeasonRecord {
//!     year: Year::new(2019),
//!     team: Team::new("Packers"),
//!     division: Some("NFC North".to_string()),
//!     wins: 13,
//!     losses: 3,
//!     playoff_appearances: 1,
//!     division_titles: 1,
//!     conference_titles: 0,
//!     championships: 0,
//!     mvp_awards: 0,
//! }];
//!
//! let totals = cumulative_snapshot(&seasons, Year::new(2020), &TeamSelection::All);
//! assert_eq!(totals[0].wins, 13);
//! ```
//!
//! ## Environment Configuration
//!
//! Set the workbook path once to avoid passing it in every command:
//! ```bash
//! export NFL_DASH_DATA_FILE=data/nfl_data.xlsm
//! ```

pub mod aggregate;
pub mod cli;
pub mod commands;
pub mod error;
pub mod models;
pub mod workbook;

// Re-export commonly used types
pub use cli::types::{Team, TeamSelection, Year};
pub use error::{DashError, Result};
pub use models::{FranchiseData, RankRecord, SeasonRecord};

pub const DATA_FILE_ENV_VAR: &str = "NFL_DASH_DATA_FILE";
