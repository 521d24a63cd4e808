//! Snapshot command: cumulative achievements through the selected year.

use crate::{
    aggregate::{cumulative_snapshot, rank_snapshot, snapshot_rows},
    cli::CommonFilters,
    error::Result,
};

use super::common::{resolve_selection, resolve_year, CommandContext};

/// Handle the snapshot command
pub fn handle_snapshot(filters: CommonFilters, as_json: bool, verbose: bool) -> Result<()> {
    let ctx = CommandContext::new(filters.data_file, verbose)?;
    let year = resolve_year(&ctx.data, filters.year)?;
    let selection = resolve_selection(&ctx.data, filters.divisions, filters.teams);

    let totals = cumulative_snapshot(&ctx.data.seasons, year, &selection);
    let year_ranks = rank_snapshot(&ctx.data.ranks, year, &selection);
    let rows = snapshot_rows(totals, &year_ranks);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("Cumulative franchise achievements through {}", year);
    if rows.is_empty() {
        println!("No data available for the current selection.");
        return Ok(());
    }
    for row in &rows {
        let rank = row
            .rank
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());
        let division = row.totals.division.as_deref().unwrap_or("-");
        println!(
            "{:>4}  {:<25} {:<12} {:>4}-{:<4} playoffs {:>3}  div {:>3}  conf {:>3}  champ {:>2}  mvp {:>2}",
            rank,
            row.totals.team,
            division,
            row.totals.wins,
            row.totals.losses,
            row.totals.playoff_appearances,
            row.totals.division_titles,
            row.totals.conference_titles,
            row.totals.championships,
            row.totals.mvp_awards,
        );
    }

    Ok(())
}
