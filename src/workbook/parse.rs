//! Header and row parsing for the two workbook sheets.
//!
//! Functions here take row slices rather than an open workbook, so the
//! parsing rules are testable without a file on disk.

use calamine::DataType;
use log::debug;
use std::collections::HashMap;

use crate::cli::types::{Team, Year};
use crate::error::{DashError, Result};
use crate::models::{RankRecord, SeasonRecord};

use super::{MASTER_SHEET, RANKS_SHEET};

// Master Sheet columns.
pub const COL_YEAR: &str = "Year";
pub const COL_TEAM: &str = "Team";
pub const COL_DIVISION: &str = "Division";
pub const COL_WINS: &str = "Wins";
pub const COL_LOSSES: &str = "Losses";
pub const COL_PLAYOFFS: &str = "Playoff Appearances";
pub const COL_DIVISION_TITLES: &str = "Division Titles";
pub const COL_CONFERENCE_TITLES: &str = "Conference Titles";
pub const COL_CHAMPIONSHIPS: &str = "Championships";
pub const COL_MVP: &str = "MVP";
// Ranks sheet column (Year and Team are shared).
pub const COL_RANK: &str = "Rank";

/// Column lookup built from the header row of a sheet.
struct Header {
    sheet: &'static str,
    by_name: HashMap<String, usize>,
}

impl Header {
    fn from_row(sheet: &'static str, row: &[DataType]) -> Self {
        let by_name = row
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| match cell {
                DataType::String(s) => Some((s.trim().to_string(), idx)),
                _ => None,
            })
            .collect();
        debug!("Header::from_row: sheet: {:?} columns: {:?}", sheet, row);
        Self { sheet, by_name }
    }

    fn require(&self, column: &str) -> Result<usize> {
        self.by_name
            .get(column)
            .copied()
            .ok_or_else(|| DashError::MissingColumn {
                sheet: self.sheet.to_string(),
                column: column.to_string(),
            })
    }

    fn optional(&self, column: &str) -> Option<usize> {
        self.by_name.get(column).copied()
    }
}

/// Parse "Master Sheet" rows (header first) into season records.
pub fn parse_master<'a, I>(mut rows: I) -> Result<Vec<SeasonRecord>>
where
    I: Iterator<Item = &'a [DataType]>,
{
    let header = Header::from_row(MASTER_SHEET, rows.next().unwrap_or(&[]));
    let year_idx = header.require(COL_YEAR)?;
    let team_idx = header.require(COL_TEAM)?;
    let wins_idx = header.require(COL_WINS)?;
    let losses_idx = header.require(COL_LOSSES)?;
    let playoffs_idx = header.require(COL_PLAYOFFS)?;
    let division_titles_idx = header.require(COL_DIVISION_TITLES)?;
    let conference_titles_idx = header.require(COL_CONFERENCE_TITLES)?;
    let championships_idx = header.require(COL_CHAMPIONSHIPS)?;
    let division_idx = header.optional(COL_DIVISION);
    let mvp_idx = header.optional(COL_MVP);

    let mut records = Vec::new();
    for (idx, row) in rows.enumerate() {
        // 1-based position in the sheet, counting the header.
        let row_no = idx + 2;
        if is_blank_row(row) {
            continue;
        }
        records.push(SeasonRecord {
            year: year_cell(MASTER_SHEET, row_no, row, year_idx)?,
            team: team_cell(MASTER_SHEET, row_no, row, team_idx)?,
            division: division_idx.and_then(|i| label_cell(row, i)),
            wins: counter_cell(MASTER_SHEET, row_no, row, wins_idx, COL_WINS)?,
            losses: counter_cell(MASTER_SHEET, row_no, row, losses_idx, COL_LOSSES)?,
            playoff_appearances: counter_cell(MASTER_SHEET, row_no, row, playoffs_idx, COL_PLAYOFFS)?,
            division_titles: counter_cell(
                MASTER_SHEET,
                row_no,
                row,
                division_titles_idx,
                COL_DIVISION_TITLES,
            )?,
            conference_titles: counter_cell(
                MASTER_SHEET,
                row_no,
                row,
                conference_titles_idx,
                COL_CONFERENCE_TITLES,
            )?,
            championships: counter_cell(
                MASTER_SHEET,
                row_no,
                row,
                championships_idx,
                COL_CHAMPIONSHIPS,
            )?,
            mvp_awards: match mvp_idx {
                Some(i) => counter_cell(MASTER_SHEET, row_no, row, i, COL_MVP)?,
                None => 0,
            },
        });
    }
    debug!("parse_master: {} records", records.len());
    Ok(records)
}

/// Parse "Ranks" rows (header first) into rank records.
pub fn parse_ranks<'a, I>(mut rows: I) -> Result<Vec<RankRecord>>
where
    I: Iterator<Item = &'a [DataType]>,
{
    let header = Header::from_row(RANKS_SHEET, rows.next().unwrap_or(&[]));
    let year_idx = header.require(COL_YEAR)?;
    let team_idx = header.require(COL_TEAM)?;
    let rank_idx = header.require(COL_RANK)?;

    let mut records = Vec::new();
    for (idx, row) in rows.enumerate() {
        let row_no = idx + 2;
        if is_blank_row(row) {
            continue;
        }
        // Franchises that did not exist in a given year carry no rank.
        if matches!(cell(row, rank_idx), DataType::Empty) {
            continue;
        }
        records.push(RankRecord {
            year: year_cell(RANKS_SHEET, row_no, row, year_idx)?,
            team: team_cell(RANKS_SHEET, row_no, row, team_idx)?,
            rank: rank_cell(RANKS_SHEET, row_no, row, rank_idx)?,
        });
    }
    debug!("parse_ranks: {} records", records.len());
    Ok(records)
}

fn is_blank_row(row: &[DataType]) -> bool {
    row.iter().all(|c| matches!(c, DataType::Empty))
}

fn cell(row: &[DataType], idx: usize) -> &DataType {
    row.get(idx).unwrap_or(&DataType::Empty)
}

/// Excel stores most numbers as floats, so accept either storage class.
fn numeric(cell: &DataType) -> Option<f64> {
    match cell {
        DataType::Int(i) => Some(*i as f64),
        DataType::Float(f) => Some(*f),
        _ => None,
    }
}

fn bad_cell(sheet: &str, row_no: usize, column: &str, message: String) -> DashError {
    DashError::Cell {
        sheet: sheet.to_string(),
        row: row_no,
        column: column.to_string(),
        message,
    }
}

fn year_cell(sheet: &str, row_no: usize, row: &[DataType], idx: usize) -> Result<Year> {
    let value = cell(row, idx);
    match numeric(value) {
        Some(v) if v >= 0.0 && v <= f64::from(u16::MAX) => Ok(Year::new(v as u16)),
        _ => Err(bad_cell(
            sheet,
            row_no,
            COL_YEAR,
            format!("expected a year, found {:?}", value),
        )),
    }
}

fn team_cell(sheet: &str, row_no: usize, row: &[DataType], idx: usize) -> Result<Team> {
    match cell(row, idx) {
        DataType::String(s) if !s.trim().is_empty() => Ok(Team::new(s.trim())),
        other => Err(bad_cell(
            sheet,
            row_no,
            COL_TEAM,
            format!("expected a team name, found {:?}", other),
        )),
    }
}

fn counter_cell(
    sheet: &str,
    row_no: usize,
    row: &[DataType],
    idx: usize,
    column: &str,
) -> Result<u32> {
    let value = cell(row, idx);
    // Blank counter cells read as zero, matching the source workbook.
    if matches!(value, DataType::Empty) {
        return Ok(0);
    }
    match numeric(value) {
        Some(v) if v >= 0.0 => Ok(v as u32),
        _ => Err(bad_cell(
            sheet,
            row_no,
            column,
            format!("expected a non-negative number, found {:?}", value),
        )),
    }
}

fn rank_cell(sheet: &str, row_no: usize, row: &[DataType], idx: usize) -> Result<u16> {
    let value = cell(row, idx);
    match numeric(value) {
        Some(v) if v >= 0.0 && v <= f64::from(u16::MAX) => Ok(v as u16),
        _ => Err(bad_cell(
            sheet,
            row_no,
            COL_RANK,
            format!("expected a number, found {:?}", value),
        )),
    }
}

fn label_cell(row: &[DataType], idx: usize) -> Option<String> {
    match cell(row, idx) {
        DataType::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}
