//! Shared resolution and loading used by every command.

use std::path::PathBuf;

use crate::{
    cli::types::{Team, TeamSelection, Year},
    error::{DashError, Result},
    models::FranchiseData,
    workbook::load_workbook,
};

use super::resolve_data_path;

/// Context containing the loaded tables needed by most commands
pub struct CommandContext {
    pub path: PathBuf,
    pub data: FranchiseData,
}

impl CommandContext {
    /// Resolve the workbook path and load both sheets.
    pub fn new(data_file: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let path = resolve_data_path(data_file)?;
        if verbose {
            println!("Loading workbook from {}...", path.display());
        }
        let data = load_workbook(&path)?;
        if verbose {
            println!(
                "✓ {} season rows, {} rank rows loaded",
                data.seasons.len(),
                data.ranks.len()
            );
        }
        Ok(Self { path, data })
    }
}

/// Year to show: the explicit choice, else the latest year in the data.
pub fn resolve_year(data: &FranchiseData, year: Option<Year>) -> Result<Year> {
    year.or_else(|| data.latest_year()).ok_or(DashError::NoData)
}

/// Narrow the franchise selection.
///
/// Divisions restrict the candidate set first; an explicit team list then
/// narrows further, mirroring how the dashboard's division widget feeds
/// its team multi-select.
pub fn resolve_selection(
    data: &FranchiseData,
    divisions: Option<Vec<String>>,
    teams: Option<Vec<Team>>,
) -> TeamSelection {
    let division_teams = divisions
        .filter(|d| !d.is_empty())
        .map(|d| data.teams_in_divisions(&d));
    let teams = teams.filter(|t| !t.is_empty());

    match (division_teams, teams) {
        (None, None) => TeamSelection::All,
        (None, Some(teams)) => TeamSelection::Only(teams.into_iter().collect()),
        (Some(candidates), None) => TeamSelection::Only(candidates),
        (Some(candidates), Some(teams)) => TeamSelection::Only(
            teams
                .into_iter()
                .filter(|t| candidates.contains(t))
                .collect(),
        ),
    }
}
