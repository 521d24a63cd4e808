//! The loaded franchise tables and read-only convenience queries.

use super::records::{RankRecord, SeasonRecord};
use crate::cli::types::{Team, Year};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Both workbook tables, immutable for the life of a command.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FranchiseData {
    pub seasons: Vec<SeasonRecord>,
    pub ranks: Vec<RankRecord>,
}

impl FranchiseData {
    pub fn new(seasons: Vec<SeasonRecord>, ranks: Vec<RankRecord>) -> Self {
        Self { seasons, ranks }
    }

    /// Latest year with a rank, falling back to the latest season played.
    pub fn latest_year(&self) -> Option<Year> {
        self.ranks
            .iter()
            .map(|r| r.year)
            .max()
            .or_else(|| self.seasons.iter().map(|s| s.year).max())
    }

    /// Every franchise appearing in either table.
    pub fn teams(&self) -> BTreeSet<Team> {
        self.seasons
            .iter()
            .map(|s| s.team.clone())
            .chain(self.ranks.iter().map(|r| r.team.clone()))
            .collect()
    }

    /// Distinct division labels present in the season table.
    pub fn divisions(&self) -> BTreeSet<String> {
        self.seasons
            .iter()
            .filter_map(|s| s.division.clone())
            .collect()
    }

    /// Franchises whose season rows carry one of the given divisions.
    pub fn teams_in_divisions(&self, divisions: &[String]) -> BTreeSet<Team> {
        self.seasons
            .iter()
            .filter(|s| {
                s.division
                    .as_ref()
                    .map(|d| divisions.contains(d))
                    .unwrap_or(false)
            })
            .map(|s| s.team.clone())
            .collect()
    }
}
