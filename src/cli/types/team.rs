//! Franchise name type.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for franchise names.
///
/// Keeps team names from being mixed up with other strings (divisions,
/// column labels) and gives the aggregation maps a stable ordering.
///
/// # Examples
///
/// ```rust
/// use franchise_dash::Team;
///
/// let team = Team::new("Packers");
/// assert_eq!(team.as_str(), "Packers");
/// assert_eq!(team.to_string(), "Packers");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Team(pub String);

impl Team {
    /// Create a new Team from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the underlying name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Team {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Infallible> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for Team {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
