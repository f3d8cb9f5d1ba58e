//! Fixture records: raw sheet rows, match status, and the reconciled `Fixture`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a fixture as shown on the site.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Upcoming,
    Live,
    Completed,
    Postponed,
}

impl MatchStatus {
    /// Map a free-text status cell to a status. Unknown text is `Upcoming`.
    pub fn from_sheet(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "live" | "inprogress" | "in progress" => MatchStatus::Live,
            "postponed" => MatchStatus::Postponed,
            "completed" | "finished" | "done" => MatchStatus::Completed,
            _ => MatchStatus::Upcoming,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchStatus::Upcoming => "upcoming",
            MatchStatus::Live => "live",
            MatchStatus::Completed => "completed",
            MatchStatus::Postponed => "postponed",
        }
    }

    /// Position in the schedule listing: live first, completed last.
    pub fn display_rank(self) -> u8 {
        match self {
            MatchStatus::Live => 0,
            MatchStatus::Upcoming => 1,
            MatchStatus::Postponed => 2,
            MatchStatus::Completed => 3,
        }
    }
}

/// One value per side of a fixture.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pair<T> {
    pub team1: T,
    pub team2: T,
}

impl<T> Pair<T> {
    pub fn new(team1: T, team2: T) -> Self {
        Self { team1, team2 }
    }
}

/// A row of the Results sheet, located by header alias. All cells are kept as text.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    #[serde(rename = "match")]
    pub match_id: String,
    pub time: String,
    pub team1: String,
    pub score: String,
    pub team2: String,
    pub goal_scorers_team1: String,
    pub goal_scorers_team2: String,
    pub cards_team1: String,
    pub cards_team2: String,
    pub result: String,
    pub penalties_team1: String,
    pub penalties_team2: String,
    pub saves_team1: String,
    pub saves_team2: String,
    pub status: String,
}

/// A row of the Schedule sheet (positional columns).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRow {
    #[serde(rename = "match")]
    pub match_id: String,
    pub date: String,
    pub time: String,
    pub team1: String,
    pub vs: String,
    pub team2: String,
}

/// A scheduled fixture merged with its result row, if any.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub id: String,
    pub team1: String,
    pub team2: String,
    pub date: String,
    pub time: String,
    pub status: MatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Pair<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_scorers: Option<Pair<Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards: Option<Pair<Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalties: Option<Pair<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saves: Option<Pair<u32>>,
}

/// Header-keyed match row used by the live tracker. `goal_scorers` and
/// `penalties` hold JSON text as entered in the sheet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetMatch {
    pub match_id: String,
    pub team1: String,
    pub team2: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub round: String,
    pub status: MatchStatus,
    pub team1_score: Option<u32>,
    pub team2_score: Option<u32>,
    pub goal_scorers: String,
    pub penalties: String,
    pub saves_team1: Option<u32>,
    pub saves_team2: Option<u32>,
    pub last_updated: DateTime<Utc>,
}

/// A goal as parsed from a scorers cell or goal JSON.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalEvent {
    pub player: String,
    #[serde(default)]
    pub team: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute: Option<u32>,
    #[serde(default)]
    pub penalty: bool,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Yellow,
    Red,
}

/// A booking as parsed from a cards cell, e.g. `Arjun (Yellow)`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CardEvent {
    pub player: String,
    pub card: CardKind,
}

/// A keeper's saves in one fixture, parsed from `Name*N`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SaveEntry {
    pub player: String,
    pub saves: u32,
}

/// A results-sheet row with its free-text cells parsed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub id: String,
    #[serde(rename = "match")]
    pub match_id: String,
    pub time: String,
    pub team1: String,
    pub team2: String,
    pub score: Option<Pair<u32>>,
    pub goal_scorers: Pair<Vec<GoalEvent>>,
    pub cards: Pair<Vec<CardEvent>>,
    pub result: String,
    pub status: MatchStatus,
}

/// Shoot-out tally as entered in the penalties JSON cell.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PenaltyTally {
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub scored: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiveEventKind {
    Goal,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LiveEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: LiveEventKind,
    pub minute: Option<u32>,
    pub player: String,
    pub team: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

/// The match currently marked live, with elapsed minutes and its goal feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveMatch {
    #[serde(flatten)]
    pub sheet: SheetMatch,
    pub minute: u32,
    pub events: Vec<LiveEvent>,
    pub penalty_shootout: Vec<PenaltyTally>,
}
