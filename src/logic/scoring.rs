//! Points scoring policy: how many points each score pattern awards.

use crate::error::EngineError;
use crate::models::ScorePattern;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Points awarded to each side of a match.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PatternPoints {
    pub winner: u32,
    pub loser: u32,
}

/// Largest number of points one side may receive for a single match.
pub const MAX_POINTS_PER_MATCH: i64 = 1000;

/// Raw, unvalidated form of a scoring table as written in configuration:
/// `{"3-0": [3, 0], "3-1": [3, 0], "3-2": [2, 1]}`.
pub type ScoringTableConfig = BTreeMap<ScorePattern, (i64, i64)>;

/// Validated mapping from score pattern to (winner, loser) points.
///
/// The default follows the common volleyball rule: a 3-0 or 3-1 win earns 3 points and
/// the loser nothing; a 3-2 win earns 2 and the loser 1. Treat it as a placeholder until
/// the tournament's own rules are configured.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScoringTableConfig", into = "ScoringTableConfig")]
pub struct ScoringTable {
    three_zero: PatternPoints,
    three_one: PatternPoints,
    three_two: PatternPoints,
}

impl Default for ScoringTable {
    fn default() -> Self {
        Self {
            three_zero: PatternPoints { winner: 3, loser: 0 },
            three_one: PatternPoints { winner: 3, loser: 0 },
            three_two: PatternPoints { winner: 2, loser: 1 },
        }
    }
}

impl ScoringTable {
    /// Build a table from raw values. Every pattern must be present, both values must be
    /// non-negative and at most `MAX_POINTS_PER_MATCH`, and the winner must never get fewer
    /// points than the loser.
    pub fn from_config(config: &ScoringTableConfig) -> Result<Self, EngineError> {
        let entry = |pattern: ScorePattern| -> Result<PatternPoints, EngineError> {
            let &(winner, loser) = config
                .get(&pattern)
                .ok_or_else(|| EngineError::InvalidScoringTable(format!("missing pattern {pattern}")))?;
            if winner < 0 || loser < 0 {
                return Err(EngineError::InvalidScoringTable(format!(
                    "{pattern}: points must be non-negative (got {winner}, {loser})"
                )));
            }
            if winner < loser {
                return Err(EngineError::InvalidScoringTable(format!(
                    "{pattern}: winner gets fewer points than loser ({winner} < {loser})"
                )));
            }
            if winner > MAX_POINTS_PER_MATCH {
                return Err(EngineError::InvalidScoringTable(format!(
                    "{pattern}: at most {MAX_POINTS_PER_MATCH} points per match (got {winner})"
                )));
            }
            // Both values are within 0..=MAX_POINTS_PER_MATCH here.
            Ok(PatternPoints {
                winner: winner as u32,
                loser: loser as u32,
            })
        };
        Ok(Self {
            three_zero: entry(ScorePattern::ThreeZero)?,
            three_one: entry(ScorePattern::ThreeOne)?,
            three_two: entry(ScorePattern::ThreeTwo)?,
        })
    }

    /// Points for (winner, loser) of a match that ended with `pattern`.
    pub fn score(&self, pattern: ScorePattern) -> PatternPoints {
        match pattern {
            ScorePattern::ThreeZero => self.three_zero,
            ScorePattern::ThreeOne => self.three_one,
            ScorePattern::ThreeTwo => self.three_two,
        }
    }
}

impl TryFrom<ScoringTableConfig> for ScoringTable {
    type Error = EngineError;

    fn try_from(config: ScoringTableConfig) -> Result<Self, Self::Error> {
        Self::from_config(&config)
    }
}

impl From<ScoringTable> for ScoringTableConfig {
    fn from(table: ScoringTable) -> Self {
        ScorePattern::ALL
            .iter()
            .map(|&p| {
                let points = table.score(p);
                (p, (i64::from(points.winner), i64::from(points.loser)))
            })
            .collect()
    }
}
