//! Pure snapshot aggregation over the in-memory franchise tables.
//!
//! Every function here is a pure function of its arguments: the year and
//! team selection come in as parameters, never ambient state, so identical
//! inputs always produce identical output.

use std::collections::BTreeMap;

use crate::cli::types::{Team, TeamSelection, Year};
use crate::models::{CumulativeTotals, RankRecord, RankTrend, SeasonRecord, SnapshotRow, TrendPoint};


/// Sum every counter across seasons with `year <= through`, one row per
/// franchise, ordered by team.
///
/// Seasons after `through` never contribute. A `through` year before the
/// data begins yields an empty table, and franchises named in the
/// selection but absent from the data are simply not in the output.
pub fn cumulative_snapshot(
    seasons: &[SeasonRecord],
    through: Year,
    selection: &TeamSelection,
) -> Vec<CumulativeTotals> {
    let mut by_team: BTreeMap<&Team, CumulativeTotals> = BTreeMap::new();
    for rec in seasons {
        if rec.year > through || !selection.matches(&rec.team) {
            continue;
        }
        let totals = by_team
            .entry(&rec.team)
            .or_insert_with(|| CumulativeTotals::new(rec.team.clone()));
        totals.seasons += 1;
        totals.wins += rec.wins;
        totals.losses += rec.losses;
        totals.playoff_appearances += rec.playoff_appearances;
        totals.division_titles += rec.division_titles;
        totals.conference_titles += rec.conference_titles;
        totals.championships += rec.championships;
        totals.mvp_awards += rec.mvp_awards;
        if totals.division.is_none() {
            totals.division = rec.division.clone();
        }
    }
    by_team.into_values().collect()
}

/// Ranks stored for exactly `year`, ordered by rank then team.
///
/// Ranks are looked up, never derived. Duplicate rank values in the source
/// pass through untouched.
pub fn rank_snapshot(
    ranks: &[RankRecord],
    year: Year,
    selection: &TeamSelection,
) -> Vec<RankRecord> {
    let mut rows: Vec<RankRecord> = ranks
        .iter()
        .filter(|r| r.year == year && selection.matches(&r.team))
        .cloned()
        .collect();
    rows.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.team.cmp(&b.team)));
    rows
}

/// Rank-over-year series for the selected franchises.
///
/// Each series is ordered by year; the series themselves are ordered by
/// team.
pub fn rank_trend(ranks: &[RankRecord], selection: &TeamSelection) -> Vec<RankTrend> {
    let mut by_team: BTreeMap<&Team, Vec<TrendPoint>> = BTreeMap::new();
    for r in ranks {
        if !selection.matches(&r.team) {
            continue;
        }
        by_team.entry(&r.team).or_default().push(TrendPoint {
            year: r.year,
            rank: r.rank,
        });
    }
    by_team
        .into_iter()
        .map(|(team, mut points)| {
            points.sort_by_key(|p| p.year);
            RankTrend {
                team: team.clone(),
                points,
            }
        })
        .collect()
}

/// Join the selected year's ranks onto cumulative totals.
///
/// Rows come back ordered by rank with unranked franchises last, the way
/// the snapshot table is displayed.
pub fn snapshot_rows(totals: Vec<CumulativeTotals>, year_ranks: &[RankRecord]) -> Vec<SnapshotRow> {
    let rank_by_team: BTreeMap<Team, u16> = year_ranks
        .iter()
        .map(|r| (r.team.clone(), r.rank))
        .collect();

    let mut rows: Vec<SnapshotRow> = totals
        .into_iter()
        .map(|totals| {
            let rank = rank_by_team.get(&totals.team).copied();
            SnapshotRow { totals, rank }
        })
        .collect();
    rows.sort_by(|a, b| match (a.rank, b.rank) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.totals.team.cmp(&b.totals.team),
    });
    rows
}
