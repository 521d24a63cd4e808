//! Unit tests for sheet parsing, run against in-memory rows.

use super::parse::*;
use crate::cli::types::{Team, Year};
use crate::error::DashError;
use calamine::DataType;

fn s(v: &str) -> DataType {
    DataType::String(v.to_string())
}

fn f(v: f64) -> DataType {
    DataType::Float(v)
}

fn i(v: i64) -> DataType {
    DataType::Int(v)
}

fn master_header() -> Vec<DataType> {
    vec![
        s("Year"),
        s("Team"),
        s("Division"),
        s("Wins"),
        s("Losses"),
        s("Playoff Appearances"),
        s("Division Titles"),
        s("Conference Titles"),
        s("Championships"),
        s("MVP"),
    ]
}

fn rows_iter(rows: &[Vec<DataType>]) -> impl Iterator<Item = &[DataType]> {
    rows.iter().map(|r| r.as_slice())
}

#[test]
fn test_parse_master_happy_path() {
    let rows = vec![
        master_header(),
        vec![
            f(2020.0),
            s("Packers"),
            s("NFC North"),
            f(13.0),
            f(3.0),
            f(1.0),
            f(1.0),
            DataType::Empty,
            f(0.0),
            i(1),
        ],
    ];

    let records = parse_master(rows_iter(&rows)).unwrap();
    assert_eq!(records.len(), 1);
    let rec = &records[0];
    assert_eq!(rec.year, Year::new(2020));
    assert_eq!(rec.team, Team::new("Packers"));
    assert_eq!(rec.division.as_deref(), Some("NFC North"));
    assert_eq!(rec.wins, 13);
    assert_eq!(rec.losses, 3);
    assert_eq!(rec.playoff_appearances, 1);
    assert_eq!(rec.division_titles, 1);
    // Empty counter cells read as zero.
    assert_eq!(rec.conference_titles, 0);
    assert_eq!(rec.championships, 0);
    assert_eq!(rec.mvp_awards, 1);
}

#[test]
fn test_parse_master_missing_required_column() {
    let rows = vec![
        vec![s("Year"), s("Team"), s("Wins")],
        vec![f(2020.0), s("Packers"), f(13.0)],
    ];

    let err = parse_master(rows_iter(&rows)).unwrap_err();
    match err {
        DashError::MissingColumn { sheet, column } => {
            assert_eq!(sheet, "Master Sheet");
            assert_eq!(column, "Losses");
        }
        other => panic!("Expected MissingColumn error, got {:?}", other),
    }
}

#[test]
fn test_parse_master_empty_sheet_reports_missing_column() {
    let rows: Vec<Vec<DataType>> = vec![];
    let err = parse_master(rows_iter(&rows)).unwrap_err();
    assert!(matches!(err, DashError::MissingColumn { .. }));
}

#[test]
fn test_parse_master_optional_columns_absent() {
    let rows = vec![
        vec![
            s("Year"),
            s("Team"),
            s("Wins"),
            s("Losses"),
            s("Playoff Appearances"),
            s("Division Titles"),
            s("Conference Titles"),
            s("Championships"),
        ],
        vec![
            i(1985),
            s("Bears"),
            i(15),
            i(1),
            i(1),
            i(1),
            i(1),
            i(1),
        ],
    ];

    let records = parse_master(rows_iter(&rows)).unwrap();
    assert_eq!(records[0].division, None);
    assert_eq!(records[0].mvp_awards, 0);
}

#[test]
fn test_parse_master_bad_team_cell() {
    let rows = vec![
        master_header(),
        vec![
            f(2020.0),
            f(12.0),
            s("NFC North"),
            f(13.0),
            f(3.0),
            f(1.0),
            f(1.0),
            f(0.0),
            f(0.0),
            f(0.0),
        ],
    ];

    let err = parse_master(rows_iter(&rows)).unwrap_err();
    match err {
        DashError::Cell { sheet, row, column, .. } => {
            assert_eq!(sheet, "Master Sheet");
            assert_eq!(row, 2);
            assert_eq!(column, "Team");
        }
        other => panic!("Expected Cell error, got {:?}", other),
    }
}

#[test]
fn test_parse_master_bad_year_cell() {
    let rows = vec![
        master_header(),
        vec![
            s("twenty twenty"),
            s("Packers"),
            s("NFC North"),
            f(13.0),
            f(3.0),
            f(1.0),
            f(1.0),
            f(0.0),
            f(0.0),
            f(0.0),
        ],
    ];

    let err = parse_master(rows_iter(&rows)).unwrap_err();
    assert!(matches!(err, DashError::Cell { .. }));
}

#[test]
fn test_parse_master_skips_blank_rows() {
    let rows = vec![
        master_header(),
        vec![DataType::Empty; 10],
        vec![
            f(2020.0),
            s("Packers"),
            s("NFC North"),
            f(13.0),
            f(3.0),
            f(1.0),
            f(1.0),
            f(0.0),
            f(0.0),
            f(0.0),
        ],
    ];

    let records = parse_master(rows_iter(&rows)).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_parse_ranks_happy_path() {
    let rows = vec![
        vec![s("Year"), s("Team"), s("Rank")],
        vec![f(2020.0), s("A"), f(1.0)],
        vec![i(2020), s("B"), i(2)],
    ];

    let records = parse_ranks(rows_iter(&rows)).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].year, Year::new(2020));
    assert_eq!(records[0].team, Team::new("A"));
    assert_eq!(records[0].rank, 1);
    assert_eq!(records[1].rank, 2);
}

#[test]
fn test_parse_ranks_skips_empty_rank_cells() {
    // A franchise that did not exist yet has a row with no rank value.
    let rows = vec![
        vec![s("Year"), s("Team"), s("Rank")],
        vec![f(1966.0), s("Seahawks"), DataType::Empty],
        vec![f(1976.0), s("Seahawks"), f(28.0)],
    ];

    let records = parse_ranks(rows_iter(&rows)).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].year, Year::new(1976));
}

#[test]
fn test_parse_ranks_missing_rank_column() {
    let rows = vec![vec![s("Year"), s("Team")]];

    let err = parse_ranks(rows_iter(&rows)).unwrap_err();
    match err {
        DashError::MissingColumn { sheet, column } => {
            assert_eq!(sheet, "Ranks");
            assert_eq!(column, "Rank");
        }
        other => panic!("Expected MissingColumn error, got {:?}", other),
    }
}

#[test]
fn test_parse_ranks_bad_rank_cell() {
    let rows = vec![
        vec![s("Year"), s("Team"), s("Rank")],
        vec![f(2020.0), s("A"), s("first")],
    ];

    let err = parse_ranks(rows_iter(&rows)).unwrap_err();
    match err {
        DashError::Cell { row, column, .. } => {
            assert_eq!(row, 2);
            assert_eq!(column, "Rank");
        }
        other => panic!("Expected Cell error, got {:?}", other),
    }
}

#[test]
fn test_header_names_are_trimmed() {
    let rows = vec![
        vec![s(" Year "), s("Team"), s("Rank ")],
        vec![f(2020.0), s("A"), f(1.0)],
    ];

    let records = parse_ranks(rows_iter(&rows)).unwrap();
    assert_eq!(records.len(), 1);
}
