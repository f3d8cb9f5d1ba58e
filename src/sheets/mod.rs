//! Sheet access: which tabs exist, how to download them, how to read their CSV.

mod csv_data;
mod source;

pub use csv_data::parse_csv_data;
pub use source::{fetch_sheet, HttpSheetSource, SheetSource};

use serde::{Deserialize, Serialize};

/// The published tabs of the tournament spreadsheet.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetKind {
    Teams,
    Results,
    Schedule,
}

impl SheetKind {
    pub fn tab_name(self) -> &'static str {
        match self {
            SheetKind::Teams => "Teams",
            SheetKind::Results => "Results",
            SheetKind::Schedule => "Schedule",
        }
    }

    /// Tab id inside the spreadsheet, required by the export endpoint.
    pub fn gid(self) -> u64 {
        match self {
            SheetKind::Teams => 0,
            SheetKind::Results => 1_476_600_777,
            SheetKind::Schedule => 1_206_998_445,
        }
    }
}

impl std::fmt::Display for SheetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetKind::Teams => write!(f, "teams"),
            SheetKind::Results => write!(f, "results"),
            SheetKind::Schedule => write!(f, "schedule"),
        }
    }
}
