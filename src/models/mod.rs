//! Data model: source records, the loaded dataset, and output payloads.

pub mod dataset;
pub mod output;
pub mod records;

// Re-export the main types for easy access
pub use dataset::FranchiseData;
pub use output::{CumulativeTotals, RankTrend, SnapshotRow, TeamInfo, TrendPoint};
pub use records::{RankRecord, SeasonRecord};
