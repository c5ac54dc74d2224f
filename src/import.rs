//! CSV import of teams and match results.
//!
//! Teams: `id,name,group_id` (group 1 = A, 2 = B).
//! Matches: `group_id,team_a_id,team_b_id,sets_won_a,sets_won_b` plus optional `id` (uuid)
//! and `played_on` (YYYY-MM-DD) columns; empty optional cells are read as absent.

use crate::error::EngineError;
use crate::models::{MatchResult, Team, TeamRegistry};
use std::fs::File;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to open {path}: {source}")]
    Open { path: String, source: io::Error },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Read the team registry from CSV. Duplicate ids or names fail the import.
pub fn read_teams<R: io::Read>(reader: R) -> Result<TeamRegistry, ImportError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let teams = rdr.deserialize::<Team>().collect::<Result<Vec<_>, _>>()?;
    Ok(TeamRegistry::from_teams(teams)?)
}

/// Read match results from CSV. Records are not validated here.
pub fn read_matches<R: io::Read>(reader: R) -> Result<Vec<MatchResult>, ImportError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let matches = rdr.deserialize::<MatchResult>().collect::<Result<Vec<_>, _>>()?;
    Ok(matches)
}

pub fn read_teams_from_path(path: impl AsRef<Path>) -> Result<TeamRegistry, ImportError> {
    let registry = read_teams(open(path.as_ref())?)?;
    log::info!("Imported {} team(s) from {}", registry.len(), path.as_ref().display());
    Ok(registry)
}

pub fn read_matches_from_path(path: impl AsRef<Path>) -> Result<Vec<MatchResult>, ImportError> {
    let matches = read_matches(open(path.as_ref())?)?;
    log::info!("Imported {} match(es) from {}", matches.len(), path.as_ref().display());
    Ok(matches)
}

fn open(path: &Path) -> Result<File, ImportError> {
    File::open(path).map_err(|source| ImportError::Open {
        path: path.display().to_string(),
        source,
    })
}
