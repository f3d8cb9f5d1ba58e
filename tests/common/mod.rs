//! Sample sheets shared by the integration tests.
#![allow(dead_code)]

use sevens_tournament_web::{SheetError, SheetKind, SheetSource};

pub const TEAMS_CSV: &str = "\
Team Name,Captain Name,Department,Year of Study
SYNERGY FC,Arjun,CSE,3
Moodesh FC,Rahul,ECE,2
SFC,Vikram,MECH,4
,,,
Falcons FC,Dev,CIVIL,1
";

pub const SCHEDULE_CSV: &str = "\
Match,Date,Time,Team 1,vs,Team 2
M1,2025-10-04,16:00,SYNERGY FC,vs,FALCONS FC
M2,2025-10-04,17:00,MOODESH FC,vs,SFC
M3,2025-10-05,16:00,SYNERGY FC,vs,SFC
M4,2025-10-06,16:00,FALCONS FC,vs,MOODESH FC
";

pub const RESULTS_CSV: &str = "\
Match,Time,Team 1,Score,Team 2,Goal Scorers (Team 1),Goal Scorers (Team 2),Cards (Team 1),Cards (Team 2),Result,Saves (Team 1),Saves (Team 2),Status
M1,16:00,SYNERGY FC,3-1,FALCONS FC,\"Ravi, Ravi, Ajay\",Dev,Arjun (Yellow),—,SYNERGY FC,Kiran*4,Sam*6,
M2,17:00,MOODESH FC,2–2,SFC,\"Rahul 12', Rahul 30'\",\"Vikram (P), Joel\",—,\"Joel (Red), Joel (Yellow)\",—,Manu*2,—,
M3,16:00,SYNERGY FC,—,SFC,,,,,,,,Live
";

pub fn rows(csv: &str) -> Vec<Vec<String>> {
    sevens_tournament_web::parse_csv_data(csv).expect("sample csv parses")
}

/// In-memory sheets.
pub struct StaticSheets {
    pub teams: String,
    pub results: String,
    pub schedule: String,
}

impl StaticSheets {
    pub fn sample() -> Self {
        Self {
            teams: TEAMS_CSV.to_string(),
            results: RESULTS_CSV.to_string(),
            schedule: SCHEDULE_CSV.to_string(),
        }
    }
}

impl SheetSource for StaticSheets {
    async fn fetch_csv(&self, kind: SheetKind) -> Result<String, SheetError> {
        Ok(match kind {
            SheetKind::Teams => self.teams.clone(),
            SheetKind::Results => self.results.clone(),
            SheetKind::Schedule => self.schedule.clone(),
        })
    }
}

/// A source whose every fetch fails.
pub struct OfflineSheets;

impl SheetSource for OfflineSheets {
    async fn fetch_csv(&self, kind: SheetKind) -> Result<String, SheetError> {
        Err(SheetError::unavailable(kind, "offline"))
    }
}
