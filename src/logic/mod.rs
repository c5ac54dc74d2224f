//! Standings computation: validation, tallying, scoring, ranking, partitioning.

mod accumulate;
mod engine;
mod partition;
mod ranking;
mod scoring;
mod validate;

pub use accumulate::{accumulate, TallyBook};
pub use engine::{build_standings, compute_standings, BatchPolicy, StandingsReport};
pub use partition::partition;
pub use ranking::{rank, TieBreak, TieBreakOrder};
pub use scoring::{PatternPoints, ScoringTable, ScoringTableConfig, MAX_POINTS_PER_MATCH};
pub use validate::validate;
