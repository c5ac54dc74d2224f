//! Ranking teams within a group.
//!
//! Teams are compared criterion by criterion in the configured tie-break order. Whatever the
//! order, team name (ascending) and then team id are appended as final keys, so the
//! result is a total order and identical input always ranks identically.

use crate::error::EngineError;
use crate::models::TeamStanding;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A ranking criterion. All criteria rank the better team first.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Most points.
    Points,
    /// Highest wins / total matches. Teams without matches come last.
    WinPercentage,
    /// Most wins.
    Wins,
    /// Highest sets won / sets lost. Teams without sets played come last.
    SetRatio,
}

type CmpFunc = fn(&TeamStanding, &TeamStanding) -> Ordering;

impl TieBreak {
    fn compare_fn(self) -> CmpFunc {
        match self {
            TieBreak::Points => compare_points,
            TieBreak::WinPercentage => compare_win_percentage,
            TieBreak::Wins => compare_wins,
            TieBreak::SetRatio => compare_set_ratio,
        }
    }
}

fn compare_points(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.tally.points.cmp(&a.tally.points)
}

fn compare_wins(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.tally.wins.cmp(&a.tally.wins)
}

fn compare_win_percentage(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    compare_ratio(
        (a.tally.wins, a.tally.total_matches),
        (b.tally.wins, b.tally.total_matches),
    )
}

fn compare_set_ratio(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    let (a_won, a_lost) = (a.tally.sets_won(), a.tally.sets_lost());
    let (b_won, b_lost) = (b.tally.sets_won(), b.tally.sets_lost());
    match (a_won + a_lost == 0, b_won + b_lost == 0) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }
    // Nothing lost beats any finite ratio.
    match (a_lost == 0, b_lost == 0) {
        (true, true) => b_won.cmp(&a_won),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => cross_cmp((a_won, a_lost), (b_won, b_lost)),
    }
}

/// Descending comparison of num/den fractions; a zero denominator sorts last.
fn compare_ratio(a: (u32, u32), b: (u32, u32)) -> Ordering {
    match (a.1 == 0, b.1 == 0) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => cross_cmp(a, b),
    }
}

/// Descending comparison of two fractions with non-zero denominators, without floats.
fn cross_cmp((a_num, a_den): (u32, u32), (b_num, b_den): (u32, u32)) -> Ordering {
    let lhs = u64::from(b_num) * u64::from(a_den);
    let rhs = u64::from(a_num) * u64::from(b_den);
    lhs.cmp(&rhs)
}

/// Ordered list of criteria applied before the final name/id keys. No duplicates.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TieBreak>", into = "Vec<TieBreak>")]
pub struct TieBreakOrder(Vec<TieBreak>);

impl Default for TieBreakOrder {
    /// Points, then win percentage, then wins.
    fn default() -> Self {
        Self(vec![TieBreak::Points, TieBreak::WinPercentage, TieBreak::Wins])
    }
}

impl TieBreakOrder {
    pub fn new(criteria: Vec<TieBreak>) -> Result<Self, EngineError> {
        for (i, c) in criteria.iter().enumerate() {
            if criteria[..i].contains(c) {
                return Err(EngineError::InvalidTieBreakOrder(format!("{c:?} listed more than once")));
            }
        }
        Ok(Self(criteria))
    }

    pub fn criteria(&self) -> &[TieBreak] {
        &self.0
    }

    /// Full comparison of two rows: configured criteria, then name, then id.
    pub fn compare(&self, a: &TeamStanding, b: &TeamStanding) -> Ordering {
        self.0
            .iter()
            .map(|c| c.compare_fn()(a, b))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.team_name.cmp(&b.team_name))
            .then_with(|| a.team_id.cmp(&b.team_id))
    }
}

impl TryFrom<Vec<TieBreak>> for TieBreakOrder {
    type Error = EngineError;

    fn try_from(criteria: Vec<TieBreak>) -> Result<Self, Self::Error> {
        Self::new(criteria)
    }
}

impl From<TieBreakOrder> for Vec<TieBreak> {
    fn from(order: TieBreakOrder) -> Self {
        order.0
    }
}

/// Sort standings rows into ranking order, best first.
pub fn rank(mut rows: Vec<TeamStanding>, order: &TieBreakOrder) -> Vec<TeamStanding> {
    rows.sort_by(|a, b| order.compare(a, b));
    rows
}
