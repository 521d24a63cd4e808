//! Source records read from the franchise workbook.

use crate::cli::types::{Team, Year};
use serde::{Deserialize, Serialize};

/// One franchise season, as read from the "Master Sheet" tab.
///
/// There is one record per (team, year) pair; records are immutable once
/// loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRecord {
    pub year: Year,
    pub team: Team,
    /// Division label, when the workbook carries a "Division" column.
    pub division: Option<String>,
    pub wins: u32,
    pub losses: u32,
    pub playoff_appearances: u32,
    pub division_titles: u32,
    pub conference_titles: u32,
    pub championships: u32,
    pub mvp_awards: u32,
}

/// One franchise's rank for one season, from the "Ranks" tab.
///
/// Ranks are externally supplied ordinals; they are looked up, never
/// computed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankRecord {
    pub year: Year,
    pub team: Team,
    pub rank: u16,
}
