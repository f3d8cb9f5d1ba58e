//! Team entries, the standings table and the knockout bracket.

use serde::{Deserialize, Serialize};

/// A registered team from the Teams sheet.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamEntry {
    pub team_name: String,
    pub captain_name: String,
    pub department: String,
    pub year_of_study: String,
    /// Static path of the team crest, derived from the name.
    pub logo: String,
}

impl TeamEntry {
    pub fn new(
        team_name: impl Into<String>,
        captain_name: impl Into<String>,
        department: impl Into<String>,
        year_of_study: impl Into<String>,
    ) -> Self {
        let team_name = team_name.into();
        let logo = logo_path(&team_name);
        Self {
            team_name,
            captain_name: captain_name.into(),
            department: department.into(),
            year_of_study: year_of_study.into(),
            logo,
        }
    }
}

/// `/team-logos/<name with whitespace runs as '-', lowercased>.jpg`
pub fn logo_path(team_name: &str) -> String {
    let slug = team_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    format!("/team-logos/{slug}.jpg")
}

/// Outcome letter used in the form column.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum FormResult {
    W,
    D,
    L,
}

/// One row of the league table.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub position: u32,
    pub team: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
    /// Most recent results, oldest first.
    pub form: Vec<FormResult>,
}

impl TeamStanding {
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            ..Self::default()
        }
    }

    /// Record one completed fixture from this team's point of view.
    pub fn record(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);
        let difference = i64::from(self.goals_for) - i64::from(self.goals_against);
        self.goal_difference = difference.clamp(i32::MIN.into(), i32::MAX.into()) as i32;
        let result = match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => {
                self.won += 1;
                self.points += 3;
                FormResult::W
            }
            std::cmp::Ordering::Equal => {
                self.drawn += 1;
                self.points += 1;
                FormResult::D
            }
            std::cmp::Ordering::Less => {
                self.lost += 1;
                FormResult::L
            }
        };
        self.form.push(result);
    }
}

/// One side of a bracket slot.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketTeam {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<bool>,
}

/// A bracket slot: a real fixture or a `TBD` placeholder.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketMatch {
    pub id: String,
    pub team1: BracketTeam,
    pub team2: BracketTeam,
    pub completed: bool,
}

impl BracketMatch {
    pub const TBD: &'static str = "TBD";

    pub fn placeholder(id: impl Into<String>) -> Self {
        let tbd = BracketTeam {
            name: Self::TBD.to_string(),
            ..BracketTeam::default()
        };
        Self {
            id: id.into(),
            team1: tbd.clone(),
            team2: tbd,
            completed: false,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.id.starts_with("tbd-")
    }
}

/// Sixteen-team knockout layout.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bracket {
    pub round_of_16: Vec<BracketMatch>,
    pub quarter_finals: Vec<BracketMatch>,
    pub semi_finals: Vec<BracketMatch>,
    #[serde(rename = "final")]
    pub final_match: BracketMatch,
}
