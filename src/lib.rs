//! 7-a-side tournament site backend: reads the published Google Sheet and
//! serves fixtures, results, player stats, standings and the bracket as JSON.

pub mod api;
pub mod config;
pub mod error;
pub mod logic;
pub mod models;
pub mod sheets;

pub use config::{ServerConfig, SheetUrls};
pub use error::SheetError;
pub use logic::{
    build_bracket, combine_schedule_and_results, compute_standings, current_live_match,
    player_statistics, summarize_results, transform_csv_to_matches, transform_results_data,
    transform_schedule_data, transform_teams_data,
};
pub use models::{
    Bracket, Fixture, LiveMatch, MatchStatus, Pair, PlayerStat, PlayerStatistics, ResultRow,
    ScheduleRow, SheetMatch, TeamEntry, TeamStanding,
};
pub use sheets::{fetch_sheet, parse_csv_data, HttpSheetSource, SheetKind, SheetSource};
