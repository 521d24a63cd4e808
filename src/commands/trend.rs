//! Rank-trend command: rank-over-year series per franchise.

use crate::{aggregate::rank_trend, cli::CommonFilters, error::Result};

use super::common::{resolve_selection, CommandContext};

/// Handle the rank-trend command
pub fn handle_rank_trend(filters: CommonFilters, as_json: bool, verbose: bool) -> Result<()> {
    let ctx = CommandContext::new(filters.data_file, verbose)?;
    let selection = resolve_selection(&ctx.data, filters.divisions, filters.teams);

    let mut series = rank_trend(&ctx.data.ranks, &selection);

    // An explicit year caps the series, matching the dashboard's
    // "through year" slider.
    if let Some(through) = filters.year {
        for trend in &mut series {
            trend.points.retain(|p| p.year <= through);
        }
        series.retain(|t| !t.points.is_empty());
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&series)?);
        return Ok(());
    }

    if series.is_empty() {
        println!("No data available for the current selection.");
        return Ok(());
    }
    for trend in &series {
        println!("{}", trend.team);
        for point in &trend.points {
            println!("  {}  rank {:>3}", point.year, point.rank);
        }
    }

    Ok(())
}
