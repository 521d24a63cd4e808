//! Error types for the franchise dashboard CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashError>;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),

    #[error("workbook has no sheet named {sheet:?}")]
    MissingSheet { sheet: String },

    #[error("sheet {sheet:?} is missing required column {column:?}")]
    MissingColumn { sheet: String, column: String },

    #[error("sheet {sheet:?} row {row}, column {column:?}: {message}")]
    Cell {
        sheet: String,
        row: usize,
        column: String,
        message: String,
    },

    #[error("data file not provided and {env_var} environment variable not set")]
    MissingDataFile { env_var: String },

    #[error("failed to parse year: {0}")]
    InvalidYear(#[from] std::num::ParseIntError),

    #[error("workbook contains no seasons or ranks")]
    NoData,
}
