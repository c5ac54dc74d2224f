//! Tally accumulation: fold validated matches into per-team totals.

use crate::error::EngineError;
use crate::logic::scoring::ScoringTable;
use crate::models::{MatchId, Tally, TeamId, ValidatedMatch};
use std::collections::{BTreeMap, BTreeSet};

/// Per-team tallies plus the ids of every match already folded in.
///
/// Folding is commutative: the final tallies for a set of matches do not depend on the
/// order they were folded in. Folding the same stored match twice is an error; matches
/// without an id cannot be checked, so the caller must fold those exactly once.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TallyBook {
    tallies: BTreeMap<TeamId, Tally>,
    folded: BTreeSet<MatchId>,
}

impl TallyBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one validated match: winner and loser each gain a match, their result
    /// bucket, and the points `scoring` awards for the pattern.
    pub fn fold(&mut self, m: &ValidatedMatch, scoring: &ScoringTable) -> Result<(), EngineError> {
        if let Some(id) = m.id() {
            if !self.folded.insert(id) {
                return Err(EngineError::DuplicateMatch(id));
            }
        }
        let points = scoring.score(m.pattern());

        let winner = self.tallies.entry(m.winner()).or_default();
        winner.add_win(m.pattern(), points.winner);
        assert_consistent(m.winner(), winner);

        let loser = self.tallies.entry(m.loser()).or_default();
        loser.add_loss(m.pattern(), points.loser);
        assert_consistent(m.loser(), loser);

        Ok(())
    }

    pub fn tally(&self, team: TeamId) -> Option<&Tally> {
        self.tallies.get(&team)
    }

    /// Tallies in ascending team id order.
    pub fn iter(&self) -> impl Iterator<Item = (TeamId, &Tally)> {
        self.tallies.iter().map(|(&id, t)| (id, t))
    }

    /// Number of distinct stored matches folded so far (matches without id are not counted).
    pub fn folded_matches(&self) -> usize {
        self.folded.len()
    }
}

/// Fold `m` into `book` and return the updated book.
pub fn accumulate(mut book: TallyBook, m: &ValidatedMatch, scoring: &ScoringTable) -> Result<TallyBook, EngineError> {
    book.fold(m, scoring)?;
    Ok(book)
}

/// A broken tally is an accumulator bug, not bad input.
fn assert_consistent(team: TeamId, tally: &Tally) {
    assert!(
        tally.is_consistent(),
        "tally for team {team} is inconsistent: {tally:?}"
    );
}
