//! Errors raised by the standings engine.

use crate::models::{GroupId, MatchId, TeamId};
use thiserror::Error;

/// Errors that can occur while validating, folding, or ranking match results.
///
/// All of these are caused by input or configuration. Broken tally invariants are
/// not represented here: they indicate a bug in the accumulator and panic.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum EngineError {
    /// Both sides of the match are the same team.
    #[error("Team {0} cannot play against itself")]
    SelfMatch(TeamId),
    /// A team id is not registered in the group the match was played in.
    #[error("Team {team} is not registered in group {group}")]
    UnknownTeam { team: TeamId, group: GroupId },
    /// Sets are not exactly 3 for one side and 0, 1 or 2 for the other.
    #[error("Invalid score {sets_won_a}-{sets_won_b}: one side must win 3 sets, the other 0 to 2")]
    InvalidScorePattern { sets_won_a: u8, sets_won_b: u8 },
    /// A team has match records but no group assignment.
    #[error("Team {0} has matches but no group assignment")]
    UnassignedTeam(TeamId),
    /// A scoring table override failed validation.
    #[error("Invalid scoring table: {0}")]
    InvalidScoringTable(String),
    /// A tie-break order override failed validation.
    #[error("Invalid tie-break order: {0}")]
    InvalidTieBreakOrder(String),
    /// The same match id was folded into a tally book twice.
    #[error("Match {0} was already counted")]
    DuplicateMatch(MatchId),
    /// Two registered teams share an id.
    #[error("Team id {0} is registered twice")]
    DuplicateTeam(TeamId),
    /// A team name is already taken in its group.
    #[error("A team named {name} already exists in group {group}")]
    DuplicateTeamName { name: String, group: GroupId },
    /// Every team id up to `TeamId::MAX` is already taken.
    #[error("No free team id left")]
    NoFreeTeamId,
    /// A team name is empty after trimming.
    #[error("Team {0} has an empty name")]
    InvalidTeamName(TeamId),
}
