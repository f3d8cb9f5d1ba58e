//! League table derived from completed fixtures.

use crate::logic::schedule::kickoff;
use crate::models::{Fixture, MatchStatus, TeamEntry, TeamStanding};
use std::collections::HashMap;

/// Number of recent results kept in the form column.
pub const FORM_LENGTH: usize = 5;

/// Team names differ in case between tabs ("Synergy FC" / "SYNERGY FC").
fn team_key(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Compute the table. Registered teams always appear; teams that only show
/// up in fixtures, played or not, are appended. Only completed fixtures with
/// a score count towards the record.
///
/// Ordered by points, goal difference, goals scored, then name.
pub fn compute_standings(fixtures: &[Fixture], teams: &[TeamEntry]) -> Vec<TeamStanding> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut table: Vec<TeamStanding> = Vec::new();

    let mut slot = |name: &str, table: &mut Vec<TeamStanding>| -> Option<usize> {
        let key = team_key(name);
        if key.is_empty() {
            return None;
        }
        Some(*index.entry(key).or_insert_with(|| {
            table.push(TeamStanding::new(name.trim()));
            table.len() - 1
        }))
    };

    for team in teams {
        slot(&team.team_name, &mut table);
    }
    for fixture in fixtures {
        slot(&fixture.team1, &mut table);
        slot(&fixture.team2, &mut table);
    }

    let mut played: Vec<&Fixture> = fixtures
        .iter()
        .filter(|f| f.status == MatchStatus::Completed && f.score.is_some())
        .collect();
    // Stable: fixtures without a readable date keep schedule order, first.
    played.sort_by_key(|f| kickoff(&f.date, &f.time));

    for fixture in played {
        let Some(score) = &fixture.score else { continue };
        let (Some(home), Some(away)) = (
            slot(&fixture.team1, &mut table),
            slot(&fixture.team2, &mut table),
        ) else {
            log::debug!("Skipping fixture {} with a missing team", fixture.id);
            continue;
        };
        table[home].record(score.team1, score.team2);
        table[away].record(score.team2, score.team1);
    }

    for row in &mut table {
        if row.form.len() > FORM_LENGTH {
            row.form.drain(..row.form.len() - FORM_LENGTH);
        }
    }

    table.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.goal_difference.cmp(&a.goal_difference))
            .then_with(|| b.goals_for.cmp(&a.goals_for))
            .then_with(|| a.team.cmp(&b.team))
    });
    for (i, row) in table.iter_mut().enumerate() {
        row.position = i as u32 + 1;
    }
    table
}
