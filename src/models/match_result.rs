//! MatchResult (input record), ScorePattern, and ValidatedMatch.

use crate::models::team::{GroupId, TeamId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a stored match.
pub type MatchId = Uuid;

/// A completed best-of-five match, as submitted by whoever enters results.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Assigned by the match log; None for records that were never stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MatchId>,
    pub group_id: GroupId,
    pub team_a_id: TeamId,
    pub team_b_id: TeamId,
    pub sets_won_a: u8,
    pub sets_won_b: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub played_on: Option<NaiveDate>,
}

impl MatchResult {
    pub fn new(group_id: GroupId, team_a_id: TeamId, team_b_id: TeamId, sets_won_a: u8, sets_won_b: u8) -> Self {
        Self {
            id: None,
            group_id,
            team_a_id,
            team_b_id,
            sets_won_a,
            sets_won_b,
            played_on: None,
        }
    }

    pub fn with_id(mut self, id: MatchId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn played_on(mut self, date: NaiveDate) -> Self {
        self.played_on = Some(date);
        self
    }
}

/// Final set score from the winner's side. The loser's view is the mirror (0-3, 1-3, 2-3).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum ScorePattern {
    #[serde(rename = "3-0")]
    ThreeZero,
    #[serde(rename = "3-1")]
    ThreeOne,
    #[serde(rename = "3-2")]
    ThreeTwo,
}

impl ScorePattern {
    pub const ALL: [ScorePattern; 3] = [ScorePattern::ThreeZero, ScorePattern::ThreeOne, ScorePattern::ThreeTwo];

    /// Pattern for a match the loser finished with `sets` sets (0, 1 or 2).
    pub fn from_loser_sets(sets: u8) -> Option<Self> {
        match sets {
            0 => Some(ScorePattern::ThreeZero),
            1 => Some(ScorePattern::ThreeOne),
            2 => Some(ScorePattern::ThreeTwo),
            _ => None,
        }
    }

    pub fn loser_sets(self) -> u8 {
        match self {
            ScorePattern::ThreeZero => 0,
            ScorePattern::ThreeOne => 1,
            ScorePattern::ThreeTwo => 2,
        }
    }
}

impl fmt::Display for ScorePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "3-{}", self.loser_sets())
    }
}

/// A match that passed validation. Only the validator can build one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ValidatedMatch {
    id: Option<MatchId>,
    group: GroupId,
    winner: TeamId,
    loser: TeamId,
    pattern: ScorePattern,
}

impl ValidatedMatch {
    pub(crate) fn new(
        id: Option<MatchId>,
        group: GroupId,
        winner: TeamId,
        loser: TeamId,
        pattern: ScorePattern,
    ) -> Self {
        Self {
            id,
            group,
            winner,
            loser,
            pattern,
        }
    }

    pub fn id(&self) -> Option<MatchId> {
        self.id
    }

    pub fn group(&self) -> GroupId {
        self.group
    }

    pub fn winner(&self) -> TeamId {
        self.winner
    }

    pub fn loser(&self) -> TeamId {
        self.loser
    }

    pub fn pattern(&self) -> ScorePattern {
        self.pattern
    }
}
