//! Turning a match sequence into per-player statistics.

pub mod metrics;
pub mod outcome;
pub mod shifts;

pub use metrics::{
    rank_by_winrate, ranking_stats, salary_stats, RankedPlayer, RankingStats, SalaryStats,
};
pub use outcome::{reduce_outcome, DayAttribution, PlayerOutcome};
