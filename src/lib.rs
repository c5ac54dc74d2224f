//! Volleyball group standings: turn best-of-five match results into ranked group tables.

pub mod config;
pub mod error;
pub mod import;
pub mod logic;
pub mod models;

pub use config::{ConfigError, StandingsConfig};
pub use error::EngineError;
pub use logic::{
    accumulate, build_standings, compute_standings, partition, rank, validate, BatchPolicy,
    PatternPoints, ScoringTable, StandingsReport, MAX_POINTS_PER_MATCH, TallyBook, TieBreak, TieBreakOrder,
};
pub use models::{
    GroupData, GroupId, League, LeagueError, MatchId, MatchResult, RecordError, ScorePattern,
    Tally, Team, TeamId, TeamRegistry, TeamStanding, ValidatedMatch,
};
