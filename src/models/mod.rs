//! Data structures for the tournament site: teams, fixtures, player stats, standings.

mod game;
mod player;
mod tournament;

pub use game::{
    CardEvent, CardKind, Fixture, GoalEvent, LiveEvent, LiveEventKind, LiveMatch, MatchStatus,
    Pair, PenaltyTally, ResultRow, ResultSummary, SaveEntry, ScheduleRow, SheetMatch,
};
pub use player::{PlayerStat, PlayerStatistics};
pub use tournament::{
    logo_path, Bracket, BracketMatch, BracketTeam, FormResult, TeamEntry, TeamStanding,
};
