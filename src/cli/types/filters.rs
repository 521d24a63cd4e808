//! Filter types narrowing which franchises appear in command output.

use super::team::Team;
use std::collections::BTreeSet;

/// Which franchises a command should include.
///
/// An empty CLI selection means every franchise. A non-empty selection that
/// matches nothing in the data yields empty output, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamSelection {
    /// No filter: include every franchise in the data.
    All,
    /// Include only the named franchises.
    Only(BTreeSet<Team>),
}

impl TeamSelection {
    /// Build a selection from CLI values; no values means `All`.
    pub fn from_teams<I>(teams: I) -> Self
    where
        I: IntoIterator<Item = Team>,
    {
        let set: BTreeSet<Team> = teams.into_iter().collect();
        if set.is_empty() {
            Self::All
        } else {
            Self::Only(set)
        }
    }

    /// Whether the given franchise passes the filter.
    pub fn matches(&self, team: &Team) -> bool {
        match self {
            Self::All => true,
            Self::Only(set) => set.contains(team),
        }
    }
}

impl Default for TeamSelection {
    fn default() -> Self {
        Self::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_means_all() {
        let selection = TeamSelection::from_teams(vec![]);
        assert_eq!(selection, TeamSelection::All);
        assert!(selection.matches(&Team::new("Anyone")));
    }

    #[test]
    fn test_only_matches_named_teams() {
        let selection = TeamSelection::from_teams(vec![Team::new("Bears"), Team::new("Packers")]);
        assert!(selection.matches(&Team::new("Bears")));
        assert!(!selection.matches(&Team::new("Lions")));
    }

    #[test]
    fn test_only_with_empty_set_matches_nothing() {
        let selection = TeamSelection::Only(BTreeSet::new());
        assert!(!selection.matches(&Team::new("Bears")));
    }
}
