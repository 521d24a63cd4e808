//! Spreadsheet ingestion: open the workbook and read its two sheets.
//!
//! Malformed sheets or missing columns fail here, at load time, with an
//! error naming the sheet and column. There is no partial recovery.

pub mod parse;

#[cfg(test)]
mod tests;

use calamine::{open_workbook, DataType, Range, Reader, Xlsx};
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{DashError, Result};
use crate::models::FranchiseData;

/// Sheet carrying one row per (team, year) of franchise results.
pub const MASTER_SHEET: &str = "Master Sheet";
/// Sheet carrying one externally supplied rank per (team, year).
pub const RANKS_SHEET: &str = "Ranks";

/// Load both sheets from an `.xlsx`/`.xlsm` workbook.
pub fn load_workbook(path: &Path) -> Result<FranchiseData> {
    debug!("load_workbook: path: {:?}", path);
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let master = sheet_range(&mut workbook, MASTER_SHEET)?;
    let ranks = sheet_range(&mut workbook, RANKS_SHEET)?;

    let seasons = parse::parse_master(master.rows())?;
    let rank_records = parse::parse_ranks(ranks.rows())?;
    debug!(
        "load_workbook: {} season rows, {} rank rows",
        seasons.len(),
        rank_records.len()
    );

    Ok(FranchiseData::new(seasons, rank_records))
}

fn sheet_range(workbook: &mut Xlsx<BufReader<File>>, name: &str) -> Result<Range<DataType>> {
    workbook
        .worksheet_range(name)
        .ok_or_else(|| DashError::MissingSheet {
            sheet: name.to_string(),
        })?
        .map_err(DashError::from)
}
