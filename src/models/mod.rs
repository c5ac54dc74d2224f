//! Data structures for group standings: teams, match results, tallies, ranked rows.

mod league;
mod match_result;
mod standing;
mod team;

pub use league::{League, LeagueError, RecordError};
pub use match_result::{MatchId, MatchResult, ScorePattern, ValidatedMatch};
pub use standing::{GroupData, Tally, TeamStanding};
pub use team::{GroupId, Team, TeamId, TeamRegistry};
