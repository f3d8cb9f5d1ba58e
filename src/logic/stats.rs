//! Player leaderboards: top scorers, disciplinary record, top keepers.

use crate::logic::events::{parse_cards, parse_goal_scorers, parse_saves};
use crate::logic::transform::PLACEHOLDER;
use crate::models::{CardKind, PlayerStat, PlayerStatistics, ResultRow};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Player stats keyed by name, kept in first-seen order.
#[derive(Default)]
struct StatTable {
    index: HashMap<String, usize>,
    rows: Vec<PlayerStat>,
}

impl StatTable {
    /// The player's row; created with `team` on first sight.
    fn entry(&mut self, name: &str, team: &str) -> &mut PlayerStat {
        let idx = match self.index.get(name) {
            Some(&idx) => idx,
            None => {
                self.rows.push(PlayerStat::new(name, team));
                self.index.insert(name.to_string(), self.rows.len() - 1);
                self.rows.len() - 1
            }
        };
        &mut self.rows[idx]
    }

    fn into_rows(self) -> Vec<PlayerStat> {
        self.rows
    }
}

/// Wins per team name, counted from the free-text result column.
pub fn team_wins(results: &[ResultRow]) -> HashMap<String, u32> {
    let mut wins = HashMap::new();
    for row in results {
        let winner = row.result.trim();
        if !winner.is_empty() && winner != PLACEHOLDER {
            *wins.entry(winner.to_string()).or_insert(0) += 1;
        }
    }
    wins
}

fn flag_top(rows: &mut [PlayerStat]) {
    if let Some(first) = rows.first_mut() {
        first.is_top = true;
    }
}

/// Build all three leaderboards from the results sheet.
///
/// Scorers rank by goals, then their team's wins, then fewer matches.
/// Keepers rank by saves, then team wins, then saves per match.
pub fn player_statistics(results: &[ResultRow]) -> PlayerStatistics {
    let wins = team_wins(results);
    let wins_of = |team: &str| wins.get(team).copied().unwrap_or(0);

    let mut scorers = StatTable::default();
    let mut bookings = StatTable::default();
    let mut keepers = StatTable::default();

    for row in results {
        for (cell, team) in [
            (&row.goal_scorers_team1, &row.team1),
            (&row.goal_scorers_team2, &row.team2),
        ] {
            let goals = parse_goal_scorers(cell, team);
            let mut scored_here = HashSet::new();
            for goal in &goals {
                scorers.entry(&goal.player, team).goals += 1;
                scored_here.insert(goal.player.as_str());
            }
            for name in scored_here {
                scorers.entry(name, team).matches += 1;
            }
        }

        for (cell, team) in [(&row.cards_team1, &row.team1), (&row.cards_team2, &row.team2)] {
            for card in parse_cards(cell) {
                let stat = bookings.entry(&card.player, team);
                match card.card {
                    CardKind::Yellow => stat.yellow_cards += 1,
                    CardKind::Red => stat.red_cards += 1,
                }
            }
        }

        for (cell, team) in [(&row.saves_team1, &row.team1), (&row.saves_team2, &row.team2)] {
            for entry in parse_saves(cell) {
                let stat = keepers.entry(&entry.player, team);
                stat.saves = stat.saves.saturating_add(entry.saves);
                stat.matches += 1;
            }
        }
    }

    let mut top_scorers = scorers.into_rows();
    top_scorers.sort_by(|a, b| {
        b.goals
            .cmp(&a.goals)
            .then_with(|| wins_of(&b.team).cmp(&wins_of(&a.team)))
            .then_with(|| a.matches.cmp(&b.matches))
    });
    flag_top(&mut top_scorers);

    let mut top_saves = keepers.into_rows();
    top_saves.sort_by(|a, b| {
        b.saves
            .cmp(&a.saves)
            .then_with(|| wins_of(&b.team).cmp(&wins_of(&a.team)))
            .then_with(|| {
                b.saves_per_match()
                    .partial_cmp(&a.saves_per_match())
                    .unwrap_or(Ordering::Equal)
            })
    });
    flag_top(&mut top_saves);

    PlayerStatistics {
        top_scorers,
        disciplinary: bookings.into_rows(),
        top_saves,
    }
}
