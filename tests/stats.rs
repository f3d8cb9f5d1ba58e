//! Integration tests for player leaderboards and the standings table.

mod common;

use common::{rows, RESULTS_CSV, SCHEDULE_CSV, TEAMS_CSV};
use sevens_tournament_web::logic::team_wins;
use sevens_tournament_web::models::FormResult;
use sevens_tournament_web::{
    combine_schedule_and_results, compute_standings, player_statistics, transform_results_data,
    transform_schedule_data, transform_teams_data, Fixture, MatchStatus, Pair, ResultRow,
};

fn names(stats: &[sevens_tournament_web::PlayerStat]) -> Vec<&str> {
    stats.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn wins_counted_from_result_column() {
    let wins = team_wins(&transform_results_data(&rows(RESULTS_CSV)));
    assert_eq!(wins.get("SYNERGY FC"), Some(&1));
    assert_eq!(wins.len(), 1);
}

#[test]
fn scorers_ranked_by_goals_then_team_wins() {
    let stats = player_statistics(&transform_results_data(&rows(RESULTS_CSV)));
    assert_eq!(
        names(&stats.top_scorers),
        vec!["Ravi", "Rahul", "Ajay", "Dev", "Vikram", "Joel"]
    );

    let ravi = &stats.top_scorers[0];
    assert_eq!((ravi.goals, ravi.matches), (2, 1));
    assert_eq!(ravi.team, "SYNERGY FC");
    assert!(ravi.is_top);
    assert!(stats.top_scorers[1..].iter().all(|p| !p.is_top));

    // Minutes are stripped before names are matched.
    let rahul = &stats.top_scorers[1];
    assert_eq!((rahul.goals, rahul.team.as_str()), (2, "MOODESH FC"));
}

#[test]
fn fewer_matches_breaks_goal_ties() {
    let results = vec![
        ResultRow {
            match_id: "M1".into(),
            team1: "A".into(),
            goal_scorers_team1: "Ann".into(),
            ..ResultRow::default()
        },
        ResultRow {
            match_id: "M2".into(),
            team1: "A".into(),
            goal_scorers_team1: "Ann, Bob, Bob".into(),
            ..ResultRow::default()
        },
    ];
    let stats = player_statistics(&results);
    assert_eq!(names(&stats.top_scorers), vec!["Bob", "Ann"]);
    assert_eq!(stats.top_scorers[0].matches, 1);
    assert_eq!(stats.top_scorers[1].matches, 2);
}

#[test]
fn disciplinary_record_in_first_seen_order() {
    let stats = player_statistics(&transform_results_data(&rows(RESULTS_CSV)));
    assert_eq!(names(&stats.disciplinary), vec!["Arjun", "Joel"]);
    let joel = &stats.disciplinary[1];
    assert_eq!((joel.yellow_cards, joel.red_cards), (1, 1));
    assert_eq!(joel.team, "SFC");
}

#[test]
fn keepers_ranked_by_saves() {
    let stats = player_statistics(&transform_results_data(&rows(RESULTS_CSV)));
    assert_eq!(names(&stats.top_saves), vec!["Sam", "Kiran", "Manu"]);
    assert_eq!(stats.top_saves[0].saves, 6);
    assert_eq!(stats.top_saves[0].matches, 1);
    assert!(stats.top_saves[0].is_top);
}

#[test]
fn huge_save_counts_saturate() {
    let results = vec![ResultRow {
        match_id: "M1".into(),
        team1: "SFC".into(),
        saves_team1: "Kiran*4000000000, Kiran*4000000000".into(),
        ..ResultRow::default()
    }];
    let stats = player_statistics(&results);
    assert_eq!(stats.top_saves[0].name, "Kiran");
    assert_eq!(stats.top_saves[0].saves, u32::MAX);
}

#[test]
fn empty_results_give_empty_leaderboards() {
    let stats = player_statistics(&[]);
    assert!(stats.top_scorers.is_empty());
    assert!(stats.disciplinary.is_empty());
    assert!(stats.top_saves.is_empty());
}

#[test]
fn standings_from_completed_fixtures() {
    let fixtures = combine_schedule_and_results(
        &transform_schedule_data(&rows(SCHEDULE_CSV)),
        &transform_results_data(&rows(RESULTS_CSV)),
    );
    let table = compute_standings(&fixtures, &transform_teams_data(&rows(TEAMS_CSV)));

    let order: Vec<&str> = table.iter().map(|s| s.team.as_str()).collect();
    assert_eq!(order, vec!["SYNERGY FC", "Moodesh FC", "SFC", "Falcons FC"]);
    assert_eq!(
        table.iter().map(|s| s.position).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );

    let top = &table[0];
    assert_eq!((top.played, top.won, top.points), (1, 1, 3));
    assert_eq!((top.goals_for, top.goals_against, top.goal_difference), (3, 1, 2));
    assert_eq!(top.form, vec![FormResult::W]);

    let falcons = &table[3];
    assert_eq!((falcons.lost, falcons.goal_difference), (1, -2));
    assert_eq!(table[1].drawn, 1);
}

fn played(id: &str, date: &str, home: &str, away: &str, score: (u32, u32)) -> Fixture {
    Fixture {
        id: id.to_string(),
        team1: home.to_string(),
        team2: away.to_string(),
        date: date.to_string(),
        status: MatchStatus::Completed,
        score: Some(Pair::new(score.0, score.1)),
        ..Fixture::default()
    }
}

#[test]
fn form_keeps_last_five_in_date_order() {
    let fixtures: Vec<Fixture> = [
        ("2025-10-07", (0, 1)),
        ("2025-10-01", (1, 0)),
        ("2025-10-02", (1, 1)),
        ("2025-10-03", (2, 0)),
        ("2025-10-04", (0, 3)),
        ("2025-10-05", (4, 0)),
    ]
    .iter()
    .enumerate()
    .map(|(i, (date, score))| played(&format!("M{i}"), date, "A", "B", *score))
    .collect();

    let table = compute_standings(&fixtures, &[]);
    let a = table.iter().find(|s| s.team == "A").unwrap();
    assert_eq!(a.played, 6);
    use FormResult::*;
    assert_eq!(a.form, vec![D, W, L, W, L]);
}

#[test]
fn huge_scores_saturate_instead_of_overflowing() {
    let fixtures = vec![
        played("M1", "2025-10-01", "A", "B", (4_000_000_000, 0)),
        played("M2", "2025-10-02", "A", "B", (4_000_000_000, 0)),
    ];
    let table = compute_standings(&fixtures, &[]);
    let a = &table[0];
    assert_eq!(a.team, "A");
    assert_eq!((a.played, a.won, a.points), (2, 2, 6));
    assert_eq!(a.goals_for, u32::MAX);
    assert_eq!(a.goal_difference, i32::MAX);
    assert_eq!(table[1].goal_difference, i32::MIN);
}

#[test]
fn unplayed_fixtures_do_not_count() {
    let mut upcoming = played("M1", "2025-10-01", "A", "B", (2, 0));
    upcoming.status = MatchStatus::Upcoming;
    let table = compute_standings(&[upcoming], &[]);
    let entries: Vec<(&str, u32, u32)> = table
        .iter()
        .map(|s| (s.team.as_str(), s.played, s.points))
        .collect();
    // Both teams are listed with an empty record.
    assert_eq!(entries, vec![("A", 0, 0), ("B", 0, 0)]);
}
