//! Integration tests for command resolution

use franchise_dash::{commands::resolve_data_path, DashError, DATA_FILE_ENV_VAR};
use std::path::PathBuf;

#[test]
fn test_resolve_data_path_from_option() {
    let result = resolve_data_path(Some(PathBuf::from("data/nfl_data.xlsm")));
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), PathBuf::from("data/nfl_data.xlsm"));
}

// Environment-variable cases share one test so they cannot race on the
// variable when the harness runs tests in parallel.
#[test]
fn test_resolve_data_path_env_behavior() {
    // Missing everywhere.
    std::env::remove_var(DATA_FILE_ENV_VAR);
    let result = resolve_data_path(None);
    assert!(result.is_err());
    match result.unwrap_err() {
        DashError::MissingDataFile { env_var } => {
            assert_eq!(env_var, DATA_FILE_ENV_VAR);
        }
        _ => panic!("Expected MissingDataFile error"),
    }

    // Picked up from the environment.
    std::env::set_var(DATA_FILE_ENV_VAR, "/tmp/nfl.xlsm");
    let result = resolve_data_path(None);
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), PathBuf::from("/tmp/nfl.xlsm"));

    // The explicit option takes precedence.
    let result = resolve_data_path(Some(PathBuf::from("explicit.xlsm")));
    assert_eq!(result.unwrap(), PathBuf::from("explicit.xlsm"));

    // Clean up
    std::env::remove_var(DATA_FILE_ENV_VAR);
}
