//! PlayerStat and the leaderboards built from result rows.

use serde::{Deserialize, Serialize};

/// Aggregated numbers for one player across all result rows.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStat {
    pub name: String,
    pub team: String,
    pub goals: u32,
    /// Fixtures the player appears in for the list this stat belongs to.
    pub matches: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub saves: u32,
    pub is_top: bool,
}

impl PlayerStat {
    pub fn new(name: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
            ..Self::default()
        }
    }

    /// Saves per fixture played; zero matches counts as one.
    pub fn saves_per_match(&self) -> f64 {
        f64::from(self.saves) / f64::from(self.matches.max(1))
    }
}

/// The three player leaderboards served together.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatistics {
    pub top_scorers: Vec<PlayerStat>,
    pub disciplinary: Vec<PlayerStat>,
    pub top_saves: Vec<PlayerStat>,
}
