//! Sheet rows to typed records, and schedule/results reconciliation.

use crate::logic::events::{parse_cards, parse_goal_scorers, parse_saves, split_list};
use crate::models::{
    Fixture, MatchStatus, Pair, ResultRow, ResultSummary, ScheduleRow, SheetMatch, TeamEntry,
};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// The sheet's "no value" marker.
pub const PLACEHOLDER: &str = "—";

/// Header text to lookup key: lowercase, no whitespace, no parentheses.
pub fn normalize_header(header: &str) -> String {
    header
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '(' && *c != ')')
        .collect()
}

/// Lenient count parse: whole numbers, also written as `3.0`.
pub fn parse_count(text: &str) -> Option<u32> {
    let text = text.trim();
    if let Ok(n) = text.parse::<u32>() {
        return Some(n);
    }
    match text.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= f64::from(u32::MAX) => {
            Some(f as u32)
        }
        _ => None,
    }
}

/// Parse `3-1`, `3 – 1` or `3:1`. Sides that are not numbers count as 0.
/// Blank, placeholder, or separator-less text is no score.
pub fn parse_score(text: &str) -> Option<Pair<u32>> {
    let text = text.trim();
    if text.is_empty() || text == PLACEHOLDER {
        return None;
    }
    let parts: Vec<&str> = text.split(['-', '–', ':']).map(str::trim).collect();
    if parts.len() < 2 {
        return None;
    }
    Some(Pair::new(
        parse_count(parts[0]).unwrap_or(0),
        parse_count(parts[1]).unwrap_or(0),
    ))
}

fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

fn first_cell_blank(row: &[String]) -> bool {
    cell(row, 0).trim().is_empty()
}

/// Teams sheet: team, captain, department, year (positional).
pub fn transform_teams_data(rows: &[Vec<String>]) -> Vec<TeamEntry> {
    if rows.len() < 2 {
        return Vec::new();
    }
    rows[1..]
        .iter()
        .filter(|row| !first_cell_blank(row))
        .map(|row| TeamEntry::new(cell(row, 0), cell(row, 1), cell(row, 2), cell(row, 3)))
        .collect()
}

/// Schedule sheet: match, date, time, team 1, "vs", team 2 (positional).
pub fn transform_schedule_data(rows: &[Vec<String>]) -> Vec<ScheduleRow> {
    if rows.len() < 2 {
        return Vec::new();
    }
    rows[1..]
        .iter()
        .filter(|row| !first_cell_blank(row))
        .map(|row| ScheduleRow {
            match_id: cell(row, 0).to_string(),
            date: cell(row, 1).to_string(),
            time: cell(row, 2).to_string(),
            team1: cell(row, 3).to_string(),
            vs: cell(row, 4).to_string(),
            team2: cell(row, 5).to_string(),
        })
        .collect()
}

/// Column positions of the results sheet, found by header alias.
struct ResultColumns {
    match_id: Option<usize>,
    time: Option<usize>,
    team1: Option<usize>,
    score: Option<usize>,
    team2: Option<usize>,
    goal_scorers_team1: Option<usize>,
    goal_scorers_team2: Option<usize>,
    cards_team1: Option<usize>,
    cards_team2: Option<usize>,
    result: Option<usize>,
    penalties_team1: Option<usize>,
    penalties_team2: Option<usize>,
    saves_team1: Option<usize>,
    saves_team2: Option<usize>,
    status: Option<usize>,
}

impl ResultColumns {
    fn locate(header: &[String]) -> Self {
        let headers: Vec<String> = header.iter().map(|h| normalize_header(h)).collect();
        // First alias present wins, in the order given.
        let find = |aliases: &[&str]| {
            aliases
                .iter()
                .find_map(|alias| headers.iter().position(|h| h == alias))
        };
        Self {
            match_id: find(&["match", "matchid", "fixture", "game"]),
            time: find(&["time", "kickoff", "starttime"]),
            team1: find(&["team1", "home", "teama"]),
            score: find(&["score", "resultscore", "scoreline"]),
            team2: find(&["team2", "away", "teamb"]),
            goal_scorers_team1: find(&[
                "goalscorersteam1",
                "goalscorers1",
                "scorers1",
                "goalsscored1",
                "goalsteam1",
                "goals1",
            ]),
            goal_scorers_team2: find(&[
                "goalscorersteam2",
                "goalscorers2",
                "scorers2",
                "goalsscored2",
                "goalsteam2",
                "goals2",
            ]),
            cards_team1: find(&["cardsteam1", "cards1"]),
            cards_team2: find(&["cardsteam2", "cards2"]),
            result: find(&["result", "outcome", "final", "winner"]),
            penalties_team1: find(&["penaltiesteam1", "penalties1", "pens1"]),
            penalties_team2: find(&["penaltiesteam2", "penalties2", "pens2"]),
            saves_team1: find(&["savesteam1", "saves1"]),
            saves_team2: find(&["savesteam2", "saves2"]),
            status: find(&["status", "matchstatus", "state"]),
        }
    }
}

/// Trimmed cell text, `None` when the column is missing or the cell blank.
fn column<'a>(row: &'a [String], idx: Option<usize>) -> Option<&'a str> {
    idx.and_then(|i| row.get(i))
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn column_or<'a>(row: &'a [String], idx: Option<usize>, default: &'a str) -> String {
    column(row, idx).unwrap_or(default).to_string()
}

/// Results sheet, with columns found by header name rather than position.
pub fn transform_results_data(rows: &[Vec<String>]) -> Vec<ResultRow> {
    if rows.len() < 2 {
        return Vec::new();
    }
    let cols = ResultColumns::locate(&rows[0]);
    if cols.match_id.is_none() {
        log::debug!("Results sheet has no match column; using the first column");
    }

    rows[1..]
        .iter()
        .filter(|row| !first_cell_blank(row))
        .map(|row| ResultRow {
            match_id: column(row, cols.match_id)
                .unwrap_or_else(|| cell(row, 0).trim())
                .to_string(),
            time: column_or(row, cols.time, ""),
            team1: column_or(row, cols.team1, ""),
            score: column_or(row, cols.score, ""),
            team2: column_or(row, cols.team2, ""),
            goal_scorers_team1: column_or(row, cols.goal_scorers_team1, ""),
            goal_scorers_team2: column_or(row, cols.goal_scorers_team2, ""),
            cards_team1: column_or(row, cols.cards_team1, ""),
            cards_team2: column_or(row, cols.cards_team2, ""),
            result: column_or(row, cols.result, ""),
            penalties_team1: column_or(row, cols.penalties_team1, "0"),
            penalties_team2: column_or(row, cols.penalties_team2, "0"),
            saves_team1: column_or(row, cols.saves_team1, "0"),
            saves_team2: column_or(row, cols.saves_team2, "0"),
            status: column_or(row, cols.status, ""),
        })
        .collect()
}

/// Status of a result row: the explicit status cell when filled, otherwise
/// completed once a score is entered.
pub fn result_status(result: &ResultRow, score: Option<&Pair<u32>>) -> MatchStatus {
    if !result.status.trim().is_empty() {
        MatchStatus::from_sheet(&result.status)
    } else if score.is_some() {
        MatchStatus::Completed
    } else {
        MatchStatus::Upcoming
    }
}

/// A saves cell is either a plain team total or `Name*N` keeper entries.
fn saves_total(cell: &str) -> u32 {
    parse_count(cell).unwrap_or_else(|| {
        parse_saves(cell)
            .iter()
            .fold(0u32, |total, s| total.saturating_add(s.saves))
    })
}

/// One fixture per schedule row, enriched from the first result row with the same match id.
pub fn combine_schedule_and_results(
    schedule: &[ScheduleRow],
    results: &[ResultRow],
) -> Vec<Fixture> {
    schedule
        .iter()
        .map(|sched| {
            let mut fixture = Fixture {
                id: sched.match_id.clone(),
                team1: sched.team1.clone(),
                team2: sched.team2.clone(),
                date: sched.date.clone(),
                time: sched.time.clone(),
                ..Fixture::default()
            };
            let Some(result) = results.iter().find(|r| r.match_id == sched.match_id) else {
                return fixture;
            };

            let score = parse_score(&result.score);
            fixture.status = result_status(result, score.as_ref());
            fixture.score = score;
            fixture.goal_scorers = Some(Pair::new(
                split_list(&result.goal_scorers_team1),
                split_list(&result.goal_scorers_team2),
            ));
            fixture.cards = Some(Pair::new(
                split_list(&result.cards_team1),
                split_list(&result.cards_team2),
            ));
            fixture.penalties = Some(Pair::new(
                parse_count(&result.penalties_team1).unwrap_or(0),
                parse_count(&result.penalties_team2).unwrap_or(0),
            ));
            fixture.saves = Some(Pair::new(
                saves_total(&result.saves_team1),
                saves_total(&result.saves_team2),
            ));
            fixture.result =
                Some(result.result.clone()).filter(|r| !r.is_empty() && r != PLACEHOLDER);
            fixture
        })
        .collect()
}

/// Results rows with scorers and cards parsed, for the results listing.
pub fn summarize_results(results: &[ResultRow]) -> Vec<ResultSummary> {
    results
        .iter()
        .map(|r| {
            let score = parse_score(&r.score);
            ResultSummary {
                id: r.match_id.clone(),
                match_id: r.match_id.clone(),
                time: r.time.clone(),
                team1: r.team1.clone(),
                team2: r.team2.clone(),
                status: result_status(r, score.as_ref()),
                score,
                goal_scorers: Pair::new(
                    parse_goal_scorers(&r.goal_scorers_team1, &r.team1),
                    parse_goal_scorers(&r.goal_scorers_team2, &r.team2),
                ),
                cards: Pair::new(parse_cards(&r.cards_team1), parse_cards(&r.cards_team2)),
                result: r.result.clone(),
            }
        })
        .collect()
}

/// Generic header-keyed match rows (`Match ID`, `Team1 Score`, `Goal Scorers`, ...).
/// Every row is kept; missing ids become `m<n>`.
pub fn transform_csv_to_matches(rows: &[Vec<String>], now: DateTime<Utc>) -> Vec<SheetMatch> {
    if rows.len() < 2 {
        return Vec::new();
    }
    let keys: Vec<String> = rows[0].iter().map(|h| normalize_header(h)).collect();

    rows[1..]
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let fields: HashMap<&str, &str> = keys
                .iter()
                .enumerate()
                .map(|(i, key)| (key.as_str(), cell(row, i)))
                .collect();
            let text = |key: &str| {
                fields
                    .get(key)
                    .map(|v| v.trim())
                    .filter(|v| !v.is_empty())
            };
            let number = |key: &str| text(key).and_then(parse_count);

            SheetMatch {
                match_id: text("matchid")
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("m{}", index + 1)),
                team1: text("team1").unwrap_or("").to_string(),
                team2: text("team2").unwrap_or("").to_string(),
                date: text("date").unwrap_or("").to_string(),
                time: text("time").unwrap_or("").to_string(),
                venue: text("venue").unwrap_or("Main Field").to_string(),
                round: text("round").unwrap_or("Round 1").to_string(),
                status: text("status").map(MatchStatus::from_sheet).unwrap_or_default(),
                team1_score: number("team1score"),
                team2_score: number("team2score"),
                goal_scorers: text("goalscorers").unwrap_or("[]").to_string(),
                penalties: text("penalties").unwrap_or("[]").to_string(),
                saves_team1: number("savesteam1").or_else(|| number("saves1")),
                saves_team2: number("savesteam2").or_else(|| number("saves2")),
                last_updated: now,
            }
        })
        .collect()
}
