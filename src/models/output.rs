//! Output models used for printing and JSON serialization.

use crate::cli::types::{Team, Year};
use serde::Serialize;

/// Cumulative totals for one franchise through the selected year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CumulativeTotals {
    pub team: Team,
    /// Division label from the earliest contributing season that has one.
    pub division: Option<String>,
    /// Number of seasons contributing to the totals.
    pub seasons: u32,
    pub wins: u32,
    pub losses: u32,
    pub playoff_appearances: u32,
    pub division_titles: u32,
    pub conference_titles: u32,
    pub championships: u32,
    pub mvp_awards: u32,
}

impl CumulativeTotals {
    pub(crate) fn new(team: Team) -> Self {
        Self {
            team,
            division: None,
            seasons: 0,
            wins: 0,
            losses: 0,
            playoff_appearances: 0,
            division_titles: 0,
            conference_titles: 0,
            championships: 0,
            mvp_awards: 0,
        }
    }
}

/// One snapshot table row: totals plus the rank held in the selected year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotRow {
    #[serde(flatten)]
    pub totals: CumulativeTotals,
    /// Rank in the selected year, if the Ranks sheet has one.
    pub rank: Option<u16>,
}

/// A single (year, rank) sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub year: Year,
    pub rank: u16,
}

/// Rank-over-time series for one franchise, ordered by year.
///
/// This structure is designed for easy JSON serialization and plotting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankTrend {
    pub team: Team,
    pub points: Vec<TrendPoint>,
}

/// Franchise summary line for the teams listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamInfo {
    pub team: Team,
    pub division: Option<String>,
    pub first_year: Year,
    pub last_year: Year,
    pub seasons: u32,
}
