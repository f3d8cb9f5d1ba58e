//! Sixteen-team knockout bracket laid out from the fixture list.
//!
//! Fixtures map onto slots by position:
//! - round of 16: 0..8
//! - quarter-finals: 8..12
//! - semi-finals: 12..14
//! - final: 14
//!
//! Missing slots become `TBD` placeholders so the layout is always complete.

use crate::models::{Bracket, BracketMatch, BracketTeam, Fixture, MatchStatus};

fn bracket_match(fixture: &Fixture) -> BracketMatch {
    let (s1, s2) = match &fixture.score {
        Some(score) => (Some(score.team1), Some(score.team2)),
        None => (None, None),
    };
    let side = |name: &str, own: Option<u32>, other: Option<u32>| BracketTeam {
        name: name.to_string(),
        score: own,
        winner: own.zip(other).map(|(a, b)| a > b),
    };
    BracketMatch {
        id: fixture.id.clone(),
        team1: side(&fixture.team1, s1, s2),
        team2: side(&fixture.team2, s2, s1),
        completed: fixture.status == MatchStatus::Completed,
    }
}

fn round(fixtures: &[Fixture], start: usize, count: usize, label: &str) -> Vec<BracketMatch> {
    (0..count)
        .map(|i| match fixtures.get(start + i) {
            Some(f) => bracket_match(f),
            None => BracketMatch::placeholder(format!("tbd-{label}-{i}")),
        })
        .collect()
}

pub fn build_bracket(fixtures: &[Fixture]) -> Bracket {
    Bracket {
        round_of_16: round(fixtures, 0, 8, "r16"),
        quarter_finals: round(fixtures, 8, 4, "qf"),
        semi_finals: round(fixtures, 12, 2, "sf"),
        final_match: fixtures
            .get(14)
            .map(bracket_match)
            .unwrap_or_else(|| BracketMatch::placeholder("tbd-final-0")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pair;

    fn fixture(id: &str, score: Option<(u32, u32)>) -> Fixture {
        Fixture {
            id: id.to_string(),
            team1: format!("{id}-a"),
            team2: format!("{id}-b"),
            status: if score.is_some() {
                MatchStatus::Completed
            } else {
                MatchStatus::Upcoming
            },
            score: score.map(|(a, b)| Pair::new(a, b)),
            ..Fixture::default()
        }
    }

    #[test]
    fn empty_list_is_all_placeholders() {
        let bracket = build_bracket(&[]);
        assert_eq!(bracket.round_of_16.len(), 8);
        assert_eq!(bracket.quarter_finals.len(), 4);
        assert_eq!(bracket.semi_finals.len(), 2);
        assert!(bracket.final_match.is_placeholder());
        assert!(bracket.round_of_16.iter().all(|m| m.team1.name == BracketMatch::TBD));
    }

    #[test]
    fn winners_only_with_a_score() {
        let fixtures = vec![fixture("m1", Some((3, 1))), fixture("m2", None), fixture("m3", Some((2, 2)))];
        let bracket = build_bracket(&fixtures);
        let m1 = &bracket.round_of_16[0];
        assert_eq!(m1.team1.winner, Some(true));
        assert_eq!(m1.team2.winner, Some(false));
        assert!(m1.completed);
        assert_eq!(bracket.round_of_16[1].team1.winner, None);
        assert_eq!(bracket.round_of_16[2].team1.winner, Some(false));
        assert_eq!(bracket.round_of_16[2].team2.winner, Some(false));
        assert!(bracket.round_of_16[3].is_placeholder());
    }

    #[test]
    fn fifteenth_fixture_is_the_final() {
        let fixtures: Vec<Fixture> = (1..=15).map(|i| fixture(&format!("m{i}"), None)).collect();
        let bracket = build_bracket(&fixtures);
        assert_eq!(bracket.quarter_finals[0].id, "m9");
        assert_eq!(bracket.semi_finals[1].id, "m14");
        assert_eq!(bracket.final_match.id, "m15");
    }
}
