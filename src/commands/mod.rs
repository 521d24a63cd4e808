//! Command implementations for the franchise dashboard CLI

pub mod common;
pub mod ranks;
pub mod snapshot;
pub mod teams;
pub mod trend;


use crate::error::{DashError, Result};
use crate::DATA_FILE_ENV_VAR;
use std::path::PathBuf;

/// Resolve the workbook path from option or environment variable
pub fn resolve_data_path(data_file: Option<PathBuf>) -> Result<PathBuf> {
    data_file
        .or_else(|| std::env::var(DATA_FILE_ENV_VAR).ok().map(PathBuf::from))
        .ok_or_else(|| DashError::MissingDataFile {
            env_var: DATA_FILE_ENV_VAR.to_string(),
        })
}
