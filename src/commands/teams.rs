//! Teams command: list franchises with division and season coverage.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::{
    cli::types::{Team, TeamSelection},
    error::Result,
    models::{FranchiseData, TeamInfo},
};

use super::common::{resolve_selection, CommandContext};

/// Handle the teams command
pub fn handle_teams(
    data_file: Option<PathBuf>,
    divisions: Option<Vec<String>>,
    as_json: bool,
    verbose: bool,
) -> Result<()> {
    let ctx = CommandContext::new(data_file, verbose)?;
    let selection = resolve_selection(&ctx.data, divisions, None);

    let infos = team_infos(&ctx.data, &selection);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    if infos.is_empty() {
        println!("No data available for the current selection.");
        return Ok(());
    }
    for info in &infos {
        let division = info.division.as_deref().unwrap_or("-");
        println!(
            "{:<25} {:<12} {}-{}  ({} seasons)",
            info.team, division, info.first_year, info.last_year, info.seasons
        );
    }

    Ok(())
}

/// Summarize season coverage per franchise, ordered by team.
pub fn team_infos(data: &FranchiseData, selection: &TeamSelection) -> Vec<TeamInfo> {
    let mut by_team: BTreeMap<&Team, TeamInfo> = BTreeMap::new();
    for rec in &data.seasons {
        if !selection.matches(&rec.team) {
            continue;
        }
        match by_team.entry(&rec.team) {
            Entry::Vacant(v) => {
                v.insert(TeamInfo {
                    team: rec.team.clone(),
                    division: rec.division.clone(),
                    first_year: rec.year,
                    last_year: rec.year,
                    seasons: 1,
                });
            }
            Entry::Occupied(mut o) => {
                let info = o.get_mut();
                info.seasons += 1;
                info.first_year = info.first_year.min(rec.year);
                info.last_year = info.last_year.max(rec.year);
                if info.division.is_none() {
                    info.division = rec.division.clone();
                }
            }
        }
    }
    by_team.into_values().collect()
}
