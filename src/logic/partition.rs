//! Group partitioning: split ranked rows into group A and group B.

use crate::error::EngineError;
use crate::models::{GroupData, TeamRegistry, TeamStanding};

/// Route each row to its team's declared group, keeping the input (ranking) order.
///
/// A row whose team has no group assignment fails with `UnassignedTeam`. A group that
/// receives no rows is returned as an empty list.
pub fn partition(rows: Vec<TeamStanding>, registry: &TeamRegistry) -> Result<GroupData, EngineError> {
    let mut groups = GroupData::default();
    for mut row in rows {
        let group = registry
            .group_of(row.team_id)
            .ok_or(EngineError::UnassignedTeam(row.team_id))?;
        row.group_id = group;
        groups.group_mut(group).push(row);
    }
    Ok(groups)
}
