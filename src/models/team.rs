//! Team, GroupId, and the TeamRegistry (group assignment).

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Unique identifier for a team (used in match records and lookups).
pub type TeamId = u32;

/// Which group a team plays in. Serialized as an integer: 1 = A, 2 = B.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GroupId {
    A,
    B,
}

impl GroupId {
    pub const ALL: [GroupId; 2] = [GroupId::A, GroupId::B];
}

impl From<GroupId> for u8 {
    fn from(group: GroupId) -> u8 {
        match group {
            GroupId::A => 1,
            GroupId::B => 2,
        }
    }
}

impl TryFrom<u8> for GroupId {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(GroupId::A),
            2 => Ok(GroupId::B),
            other => Err(format!("unknown group id {other} (expected 1 for A or 2 for B)")),
        }
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupId::A => write!(f, "A"),
            GroupId::B => write!(f, "B"),
        }
    }
}

/// A registered team and the group it belongs to.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub group_id: GroupId,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>, group_id: GroupId) -> Self {
        Self {
            id,
            name: name.into(),
            group_id,
        }
    }
}

/// The group assignment for one computation: every team resolves to exactly one group.
///
/// Ids are unique across the registry; names are unique within a group (compared
/// trimmed and lowercased, so "Ölfus" and "ölfus" collide).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Team>", into = "Vec<Team>")]
pub struct TeamRegistry {
    teams: BTreeMap<TeamId, Team>,
}

impl TeamRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a list of teams, rejecting duplicate ids and names.
    pub fn from_teams(teams: impl IntoIterator<Item = Team>) -> Result<Self, EngineError> {
        let mut registry = Self::new();
        for team in teams {
            registry.insert(team)?;
        }
        Ok(registry)
    }

    /// Register a team. The name is trimmed before it is stored.
    pub fn insert(&mut self, mut team: Team) -> Result<(), EngineError> {
        if self.teams.contains_key(&team.id) {
            return Err(EngineError::DuplicateTeam(team.id));
        }
        let name = team.name.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidTeamName(team.id));
        }
        let folded = name.to_lowercase();
        let is_duplicate = self
            .teams_in(team.group_id)
            .any(|t| t.name.to_lowercase() == folded);
        if is_duplicate {
            return Err(EngineError::DuplicateTeamName {
                name: name.to_string(),
                group: team.group_id,
            });
        }
        team.name = name.to_string();
        self.teams.insert(team.id, team);
        Ok(())
    }

    pub fn get(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(&id)
    }

    pub fn group_of(&self, id: TeamId) -> Option<GroupId> {
        self.teams.get(&id).map(|t| t.group_id)
    }

    /// True when `id` is registered and assigned to `group`.
    pub fn is_in_group(&self, id: TeamId, group: GroupId) -> bool {
        self.group_of(id) == Some(group)
    }

    /// All teams in ascending id order.
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.values()
    }

    pub fn teams_in(&self, group: GroupId) -> impl Iterator<Item = &Team> {
        self.teams.values().filter(move |t| t.group_id == group)
    }

    /// Smallest id greater than every registered id, or None once `TeamId::MAX` is taken.
    pub fn next_id(&self) -> Option<TeamId> {
        match self.teams.keys().next_back() {
            Some(id) => id.checked_add(1),
            None => Some(1),
        }
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

impl TryFrom<Vec<Team>> for TeamRegistry {
    type Error = EngineError;

    fn try_from(teams: Vec<Team>) -> Result<Self, Self::Error> {
        Self::from_teams(teams)
    }
}

impl From<TeamRegistry> for Vec<Team> {
    fn from(registry: TeamRegistry) -> Vec<Team> {
        registry.teams.into_values().collect()
    }
}
