//! League: the team registry plus the authoritative match log for one tournament.
//!
//! The engine itself is stateless. League is the collaborator that owns stored matches:
//! it assigns match ids, refuses duplicate ids, and rejects a submitted batch as a whole
//! when any record in it is invalid.

use crate::error::EngineError;
use crate::logic::validate;
use crate::models::match_result::{MatchId, MatchResult};
use crate::models::team::{GroupId, Team, TeamId, TeamRegistry};
use chrono::NaiveDate;
use std::collections::HashSet;
use thiserror::Error;
use uuid::Uuid;

/// A record in a submitted batch that failed validation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordError {
    /// Position of the record in the submitted batch.
    pub index: usize,
    pub error: EngineError,
}

/// Errors that can occur when editing the league.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LeagueError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// No stored match has this id.
    #[error("Match {0} not found")]
    MatchNotFound(MatchId),
    /// At least one record in the batch is invalid; nothing was stored.
    #[error("{} invalid match record(s); batch rejected", .0.len())]
    BatchRejected(Vec<RecordError>),
}

/// Teams with their group assignment and every stored match result.
#[derive(Clone, Debug, Default)]
pub struct League {
    pub registry: TeamRegistry,
    matches: Vec<MatchResult>,
}

impl League {
    pub fn new(registry: TeamRegistry) -> Self {
        Self {
            registry,
            matches: Vec::new(),
        }
    }

    /// Register a new team under the next free id and return that id.
    pub fn add_team(&mut self, name: impl Into<String>, group_id: GroupId) -> Result<TeamId, LeagueError> {
        let id = self.registry.next_id().ok_or(EngineError::NoFreeTeamId)?;
        self.registry.insert(Team::new(id, name, group_id))?;
        Ok(id)
    }

    /// All stored matches in submission order. Every record has an id.
    pub fn matches(&self) -> &[MatchResult] {
        &self.matches
    }

    /// Stored matches played on or before `date`. Matches without a date are always included.
    pub fn matches_as_of(&self, date: NaiveDate) -> Vec<MatchResult> {
        self.matches
            .iter()
            .filter(|m| m.played_on.map_or(true, |d| d <= date))
            .cloned()
            .collect()
    }

    /// Validate and store a batch of matches.
    ///
    /// Either every record is stored or none is. Records that already carry an id keep it
    /// (after checking it is not taken); the others get a fresh one. Returns the ids in
    /// batch order.
    pub fn add_matches(&mut self, batch: Vec<MatchResult>) -> Result<Vec<MatchId>, LeagueError> {
        let mut taken: HashSet<MatchId> = self.matches.iter().filter_map(|m| m.id).collect();
        let mut errors = Vec::new();
        for (index, record) in batch.iter().enumerate() {
            if let Err(error) = validate(record, &self.registry) {
                errors.push(RecordError { index, error });
                continue;
            }
            if let Some(id) = record.id {
                if !taken.insert(id) {
                    errors.push(RecordError {
                        index,
                        error: EngineError::DuplicateMatch(id),
                    });
                }
            }
        }
        if !errors.is_empty() {
            log::warn!("Rejected batch of {} match(es): {} invalid", batch.len(), errors.len());
            return Err(LeagueError::BatchRejected(errors));
        }

        let mut ids = Vec::with_capacity(batch.len());
        for mut record in batch {
            let id = *record.id.get_or_insert_with(Uuid::new_v4);
            ids.push(id);
            self.matches.push(record);
        }
        log::info!("Stored {} match(es); {} total", ids.len(), self.matches.len());
        Ok(ids)
    }

    /// Remove a stored match by id.
    pub fn remove_match(&mut self, id: MatchId) -> Result<MatchResult, LeagueError> {
        let idx = self
            .matches
            .iter()
            .position(|m| m.id == Some(id))
            .ok_or(LeagueError::MatchNotFound(id))?;
        Ok(self.matches.remove(idx))
    }
}
