//! Match record validation: the only way to obtain a ValidatedMatch.

use crate::error::EngineError;
use crate::models::{MatchResult, ScorePattern, TeamRegistry, ValidatedMatch};

/// Check one match record against the group assignment.
///
/// Checks run in this order and the first failure is returned:
/// 1. the two sides are different teams (`SelfMatch`);
/// 2. both teams are registered in the record's group (`UnknownTeam`);
/// 3. one side won exactly 3 sets and the other 0, 1 or 2 (`InvalidScorePattern`).
pub fn validate(record: &MatchResult, registry: &TeamRegistry) -> Result<ValidatedMatch, EngineError> {
    if record.team_a_id == record.team_b_id {
        return Err(EngineError::SelfMatch(record.team_a_id));
    }
    for team in [record.team_a_id, record.team_b_id] {
        if !registry.is_in_group(team, record.group_id) {
            return Err(EngineError::UnknownTeam {
                team,
                group: record.group_id,
            });
        }
    }

    let invalid = || EngineError::InvalidScorePattern {
        sets_won_a: record.sets_won_a,
        sets_won_b: record.sets_won_b,
    };
    let (winner, loser, loser_sets) = match (record.sets_won_a, record.sets_won_b) {
        (3, b) if b < 3 => (record.team_a_id, record.team_b_id, b),
        (a, 3) if a < 3 => (record.team_b_id, record.team_a_id, a),
        _ => return Err(invalid()),
    };
    let pattern = ScorePattern::from_loser_sets(loser_sets).ok_or_else(invalid)?;

    Ok(ValidatedMatch::new(record.id, record.group_id, winner, loser, pattern))
}
