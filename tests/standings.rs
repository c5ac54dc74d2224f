//! Integration tests for the full standings computation: tallies, ranking, and groups.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use volley_standings::{
    compute_standings, partition, BatchPolicy, EngineError, GroupData, GroupId, MatchResult,
    StandingsConfig, Tally, Team, TeamRegistry, TeamStanding, TieBreak, TieBreakOrder,
};

fn registry() -> TeamRegistry {
    TeamRegistry::from_teams(vec![
        Team::new(1, "Alpha", GroupId::A),
        Team::new(2, "Bravo", GroupId::A),
        Team::new(3, "Charlie", GroupId::A),
        Team::new(4, "Delta", GroupId::A),
        Team::new(10, "Kilo", GroupId::B),
        Team::new(11, "Lima", GroupId::B),
        Team::new(12, "Mike", GroupId::B),
    ])
    .unwrap()
}

fn a(team_a: u32, team_b: u32, sets_a: u8, sets_b: u8) -> MatchResult {
    MatchResult::new(GroupId::A, team_a, team_b, sets_a, sets_b)
}

fn b(team_a: u32, team_b: u32, sets_a: u8, sets_b: u8) -> MatchResult {
    MatchResult::new(GroupId::B, team_a, team_b, sets_a, sets_b)
}

fn season() -> Vec<MatchResult> {
    vec![
        a(1, 2, 3, 0),
        a(3, 4, 2, 3),
        a(1, 3, 3, 1),
        a(2, 4, 3, 2),
        a(4, 1, 3, 2),
        a(2, 3, 1, 3),
        b(10, 11, 3, 2),
        b(12, 10, 3, 0),
        b(11, 12, 3, 1),
    ]
}

fn compute(registry: &TeamRegistry, matches: &[MatchResult]) -> GroupData {
    compute_standings(registry, matches, &StandingsConfig::default(), BatchPolicy::RejectBatch)
        .unwrap()
        .standings
}

#[test]
fn single_matches_fill_the_right_buckets() {
    // Alpha beats Bravo 3-1; Charlie loses 2-3 to Delta.
    let groups = compute(&registry(), &[a(1, 2, 3, 1), a(3, 4, 2, 3)]);

    let alpha = &groups.find(1).unwrap().tally;
    assert_eq!(alpha.wins, 1);
    assert_eq!(alpha.wins_3_1, 1);
    assert_eq!(alpha.total_matches, 1);
    assert_eq!(alpha.points, 3);

    let charlie = &groups.find(3).unwrap().tally;
    assert_eq!(charlie.losses, 1);
    assert_eq!(charlie.losses_2_3, 1);
    assert_eq!(charlie.wins, 0);
    assert_eq!(charlie.points, 1);

    let delta = &groups.find(4).unwrap().tally;
    assert_eq!(delta.wins_3_2, 1);
    assert_eq!(delta.points, 2);
}

#[test]
fn buckets_account_for_every_match() {
    let groups = compute(&registry(), &season());
    for row in groups.group_a.iter().chain(groups.group_b.iter()) {
        let t = &row.tally;
        assert_eq!(t.wins_3_0 + t.wins_3_1 + t.wins_3_2, t.wins, "{}", row.team_name);
        assert_eq!(t.losses_0_3 + t.losses_1_3 + t.losses_2_3, t.losses, "{}", row.team_name);
        assert_eq!(t.wins + t.losses, t.total_matches, "{}", row.team_name);
    }
    let total: u32 = groups
        .group_a
        .iter()
        .chain(groups.group_b.iter())
        .map(|r| r.tally.total_matches)
        .sum();
    assert_eq!(total as usize, 2 * season().len());
}

#[test]
fn order_of_matches_does_not_change_standings() {
    let registry = registry();
    let expected = compute(&registry, &season());
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..25 {
        let mut shuffled = season();
        shuffled.shuffle(&mut rng);
        assert_eq!(compute(&registry, &shuffled), expected);
    }
}

#[test]
fn identical_input_gives_identical_output() {
    let registry = registry();
    let first = serde_json::to_string(&compute(&registry, &season())).unwrap();
    let second = serde_json::to_string(&compute(&registry, &season())).unwrap();
    assert_eq!(first, second);
}

#[test]
fn win_percentage_breaks_points_tie() {
    let registry = TeamRegistry::from_teams(vec![
        Team::new(1, "Zephyr", GroupId::A),
        Team::new(2, "Aurora", GroupId::A),
        Team::new(3, "Opp One", GroupId::A),
        Team::new(4, "Opp Two", GroupId::A),
    ])
    .unwrap();
    // Zephyr: three 3-2 wins = 6 points, 3/3.
    // Aurora: three 3-2 wins and a 0-3 loss = 6 points, 3/4.
    let matches = vec![
        a(1, 3, 3, 2),
        a(1, 4, 3, 2),
        a(1, 3, 3, 2),
        a(2, 3, 3, 2),
        a(2, 4, 3, 2),
        a(2, 3, 3, 2),
        a(4, 2, 3, 0),
    ];
    let groups = compute(&registry, &matches);
    let zephyr = groups.find(1).unwrap();
    let aurora = groups.find(2).unwrap();
    assert_eq!(zephyr.tally.points, 6);
    assert_eq!(aurora.tally.points, 6);
    assert!(groups.rank_of(1).unwrap() < groups.rank_of(2).unwrap());
}

#[test]
fn team_without_matches_ranks_last_in_its_points_tier() {
    // Bravo lost 0-3 (0 points, 0%); Charlie never played (0 points, no matches).
    let registry = TeamRegistry::from_teams(vec![
        Team::new(1, "Alpha", GroupId::A),
        Team::new(2, "Bravo", GroupId::A),
        Team::new(3, "Charlie", GroupId::A),
        Team::new(4, "Able", GroupId::A),
    ])
    .unwrap();
    let groups = compute(&registry, &[a(1, 2, 3, 0)]);
    let names: Vec<_> = groups.group_a.iter().map(|r| r.team_name.as_str()).collect();
    // Able also never played and sorts by name ahead of Charlie.
    assert_eq!(names, vec!["Alpha", "Bravo", "Able", "Charlie"]);
}

#[test]
fn full_ties_fall_back_to_team_name() {
    let groups = compute(&registry(), &[]);
    let names: Vec<_> = groups.group_a.iter().map(|r| r.team_name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Bravo", "Charlie", "Delta"]);
}

#[test]
fn ranking_is_a_strict_total_order() {
    let config = StandingsConfig::default();
    let groups = compute(&registry(), &season());
    for group in GroupId::ALL {
        for pair in groups.group(group).windows(2) {
            assert_eq!(
                config.tie_break_order.compare(&pair[0], &pair[1]),
                std::cmp::Ordering::Less
            );
        }
    }
}

#[test]
fn set_ratio_can_be_configured_ahead_of_name() {
    let registry = TeamRegistry::from_teams(vec![
        Team::new(1, "Zulu", GroupId::A),
        Team::new(2, "Alpha", GroupId::A),
        Team::new(3, "Bravo", GroupId::A),
        Team::new(4, "Charlie", GroupId::A),
    ])
    .unwrap();
    // Both winners take 3 points from one win; Zulu dropped no set.
    let matches = vec![a(1, 3, 3, 0), a(2, 4, 3, 1)];

    let default_order = compute(&registry, &matches);
    assert_eq!(default_order.group_a[0].team_name, "Alpha");

    let config = StandingsConfig {
        tie_break_order: TieBreakOrder::new(vec![TieBreak::Points, TieBreak::SetRatio]).unwrap(),
        ..StandingsConfig::default()
    };
    let by_sets = compute_standings(&registry, &matches, &config, BatchPolicy::RejectBatch)
        .unwrap()
        .standings;
    assert_eq!(by_sets.group_a[0].team_name, "Zulu");
    assert_eq!(by_sets.group_a[1].team_name, "Alpha");
}

#[test]
fn every_team_lands_in_exactly_one_group() {
    let registry = registry();
    let groups = compute(&registry, &season());
    for team in registry.teams() {
        let in_a = groups.group_a.iter().filter(|r| r.team_id == team.id).count();
        let in_b = groups.group_b.iter().filter(|r| r.team_id == team.id).count();
        assert_eq!(in_a + in_b, 1, "{}", team.name);
        assert_eq!(groups.find(team.id).unwrap().group_id, team.group_id);
    }
}

#[test]
fn empty_group_is_not_an_error() {
    let registry = TeamRegistry::from_teams(vec![
        Team::new(1, "Alpha", GroupId::A),
        Team::new(2, "Bravo", GroupId::A),
    ])
    .unwrap();
    let groups = compute(&registry, &[a(1, 2, 3, 2)]);
    assert_eq!(groups.group_a.len(), 2);
    assert!(groups.group_b.is_empty());

    let json = serde_json::to_value(&groups).unwrap();
    assert_eq!(json["groupB"], serde_json::json!([]));
}

#[test]
fn reject_batch_policy_fails_on_first_invalid_record() {
    let mut matches = season();
    matches.insert(2, a(1, 2, 3, 3));
    let result = compute_standings(&registry(), &matches, &StandingsConfig::default(), BatchPolicy::RejectBatch);
    assert_eq!(
        result,
        Err(EngineError::InvalidScorePattern {
            sets_won_a: 3,
            sets_won_b: 3
        })
    );
}

#[test]
fn skip_invalid_policy_reports_what_it_skipped() {
    let registry = registry();
    let mut matches = season();
    matches.push(a(1, 1, 3, 0));
    matches.push(a(1, 10, 3, 0));
    let report =
        compute_standings(&registry, &matches, &StandingsConfig::default(), BatchPolicy::SkipInvalid).unwrap();

    assert_eq!(report.rejected.len(), 2);
    assert_eq!(report.rejected[0].index, season().len());
    assert_eq!(report.rejected[0].error, EngineError::SelfMatch(1));
    assert_eq!(
        report.rejected[1].error,
        EngineError::UnknownTeam {
            team: 10,
            group: GroupId::A
        }
    );
    assert_eq!(report.standings, compute(&registry, &season()));
}

#[test]
fn same_stored_match_counted_twice_is_rejected() {
    let registry = registry();
    let stored = a(1, 2, 3, 0).with_id(uuid::Uuid::new_v4());
    let matches = vec![stored.clone(), stored.clone()];

    let result = compute_standings(&registry, &matches, &StandingsConfig::default(), BatchPolicy::RejectBatch);
    assert!(matches!(result, Err(EngineError::DuplicateMatch(id)) if Some(id) == stored.id));
}

#[test]
fn output_uses_standings_field_names() {
    let groups = compute(&registry(), &[a(1, 2, 3, 1)]);
    let json = serde_json::to_value(&groups).unwrap();
    let top = &json["groupA"][0];
    assert_eq!(top["team_name"], "Alpha");
    assert_eq!(top["group_id"], 1);
    for field in [
        "wins",
        "losses",
        "total_matches",
        "points",
        "wins_3_0",
        "wins_3_1",
        "wins_3_2",
        "losses_0_3",
        "losses_1_3",
        "losses_2_3",
    ] {
        assert!(top.get(field).is_some(), "missing {field}");
    }
    assert_eq!(top["wins_3_1"], 1);
}

#[test]
fn partition_refuses_rows_without_a_group() {
    let stray = Team::new(99, "Stray", GroupId::B);
    let rows = vec![
        TeamStanding::new(&Team::new(1, "Alpha", GroupId::A), Tally::default()),
        TeamStanding::new(&stray, Tally::default()),
    ];
    assert_eq!(partition(rows, &registry()), Err(EngineError::UnassignedTeam(99)));
}
