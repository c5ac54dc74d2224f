//! Tally, TeamStanding (output row), and GroupData.

use crate::models::match_result::ScorePattern;
use crate::models::team::{GroupId, Team, TeamId};
use serde::{Deserialize, Serialize};

/// Running per-team counts derived by folding match records.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
    pub total_matches: u32,
    pub points: u32,
    pub wins_3_0: u32,
    pub wins_3_1: u32,
    pub wins_3_2: u32,
    pub losses_0_3: u32,
    pub losses_1_3: u32,
    pub losses_2_3: u32,
}

impl Tally {
    /// Record a win with the given final score and the points it earned.
    pub fn add_win(&mut self, pattern: ScorePattern, points: u32) {
        self.wins += 1;
        self.total_matches += 1;
        self.points = self.points.saturating_add(points);
        match pattern {
            ScorePattern::ThreeZero => self.wins_3_0 += 1,
            ScorePattern::ThreeOne => self.wins_3_1 += 1,
            ScorePattern::ThreeTwo => self.wins_3_2 += 1,
        }
    }

    /// Record a loss with the given final score (winner's view) and the points it earned.
    pub fn add_loss(&mut self, pattern: ScorePattern, points: u32) {
        self.losses += 1;
        self.total_matches += 1;
        self.points = self.points.saturating_add(points);
        match pattern {
            ScorePattern::ThreeZero => self.losses_0_3 += 1,
            ScorePattern::ThreeOne => self.losses_1_3 += 1,
            ScorePattern::ThreeTwo => self.losses_2_3 += 1,
        }
    }

    /// The pattern buckets account for every win, loss, and match exactly once.
    pub fn is_consistent(&self) -> bool {
        self.wins_3_0 + self.wins_3_1 + self.wins_3_2 == self.wins
            && self.losses_0_3 + self.losses_1_3 + self.losses_2_3 == self.losses
            && self.wins + self.losses == self.total_matches
    }

    pub fn sets_won(&self) -> u32 {
        3 * self.wins + self.losses_1_3 + 2 * self.losses_2_3
    }

    pub fn sets_lost(&self) -> u32 {
        3 * self.losses + self.wins_3_1 + 2 * self.wins_3_2
    }
}

/// One team's complete record within its group, as shown in the standings table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team_id: TeamId,
    pub team_name: String,
    pub group_id: GroupId,
    #[serde(flatten)]
    pub tally: Tally,
}

impl TeamStanding {
    pub fn new(team: &Team, tally: Tally) -> Self {
        Self {
            team_id: team.id,
            team_name: team.name.clone(),
            group_id: team.group_id,
            tally,
        }
    }
}

/// Ranked standings for both groups. Order within each list is the ranking order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupData {
    #[serde(rename = "groupA")]
    pub group_a: Vec<TeamStanding>,
    #[serde(rename = "groupB")]
    pub group_b: Vec<TeamStanding>,
}

impl GroupData {
    pub fn group(&self, group: GroupId) -> &[TeamStanding] {
        match group {
            GroupId::A => &self.group_a,
            GroupId::B => &self.group_b,
        }
    }

    pub(crate) fn group_mut(&mut self, group: GroupId) -> &mut Vec<TeamStanding> {
        match group {
            GroupId::A => &mut self.group_a,
            GroupId::B => &mut self.group_b,
        }
    }

    /// 1-based rank of a team within its group, derived from output order.
    pub fn rank_of(&self, team: TeamId) -> Option<usize> {
        GroupId::ALL.iter().find_map(|&g| {
            self.group(g)
                .iter()
                .position(|s| s.team_id == team)
                .map(|i| i + 1)
        })
    }

    pub fn find(&self, team: TeamId) -> Option<&TeamStanding> {
        self.group_a
            .iter()
            .chain(self.group_b.iter())
            .find(|s| s.team_id == team)
    }
}
