//! Ranks command: the stored rank table for exactly one year.

use crate::{aggregate::rank_snapshot, cli::CommonFilters, error::Result};

use super::common::{resolve_selection, resolve_year, CommandContext};

/// Handle the ranks command
pub fn handle_ranks(filters: CommonFilters, as_json: bool, verbose: bool) -> Result<()> {
    let ctx = CommandContext::new(filters.data_file, verbose)?;
    let year = resolve_year(&ctx.data, filters.year)?;
    let selection = resolve_selection(&ctx.data, filters.divisions, filters.teams);

    let rows = rank_snapshot(&ctx.data.ranks, year, &selection);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("Franchise rankings for {} (1 = best)", year);
    if rows.is_empty() {
        println!("No data available for the current selection.");
        return Ok(());
    }
    for row in &rows {
        println!("{:>4}  {}", row.rank, row.team);
    }

    Ok(())
}
