//! Full standings computation: validate, fold, rank, partition.

use crate::config::StandingsConfig;
use crate::error::EngineError;
use crate::logic::accumulate::TallyBook;
use crate::logic::partition::partition;
use crate::logic::ranking::{rank, TieBreakOrder};
use crate::logic::validate::validate;
use crate::models::{GroupData, MatchResult, RecordError, TeamRegistry, TeamStanding};
use serde::{Deserialize, Serialize};

/// What to do with a match record that fails validation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchPolicy {
    /// The first invalid record fails the whole computation.
    #[default]
    RejectBatch,
    /// Invalid records are left out, logged, and listed in `StandingsReport::rejected`.
    SkipInvalid,
}

/// Result of a computation: the standings plus any records skipped under `SkipInvalid`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StandingsReport {
    pub standings: GroupData,
    pub rejected: Vec<RecordError>,
}

/// Compute ranked group standings from scratch for the complete match list.
///
/// Every registered team gets a row, including teams that have not played yet.
pub fn compute_standings(
    registry: &TeamRegistry,
    matches: &[MatchResult],
    config: &StandingsConfig,
    policy: BatchPolicy,
) -> Result<StandingsReport, EngineError> {
    let mut book = TallyBook::new();
    let mut rejected = Vec::new();

    for (index, record) in matches.iter().enumerate() {
        let folded = validate(record, registry).and_then(|m| book.fold(&m, &config.scoring_table));
        if let Err(error) = folded {
            match policy {
                BatchPolicy::RejectBatch => return Err(error),
                BatchPolicy::SkipInvalid => {
                    log::warn!("Skipping match record #{}: {}", index, error);
                    rejected.push(RecordError { index, error });
                }
            }
        }
    }

    let standings = build_standings(&book, registry, &config.tie_break_order)?;
    log::debug!(
        "Computed standings: {} match(es) counted, {} skipped, {} team(s) in A, {} in B",
        matches.len() - rejected.len(),
        rejected.len(),
        standings.group_a.len(),
        standings.group_b.len()
    );
    Ok(StandingsReport { standings, rejected })
}

/// Turn a tally book into ranked, grouped standings.
///
/// Used directly by callers that fold matches incrementally into their own book.
pub fn build_standings(
    book: &TallyBook,
    registry: &TeamRegistry,
    order: &TieBreakOrder,
) -> Result<GroupData, EngineError> {
    if let Some((id, _)) = book.iter().find(|(id, _)| registry.get(*id).is_none()) {
        return Err(EngineError::UnassignedTeam(id));
    }
    let rows: Vec<TeamStanding> = registry
        .teams()
        .map(|team| TeamStanding::new(team, book.tally(team.id).copied().unwrap_or_default()))
        .collect();
    partition(rank(rows, order), registry)
}
