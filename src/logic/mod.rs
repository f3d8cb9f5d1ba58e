//! Sheet-to-site logic: transforms, cell parsing, and derived views.

mod bracket;
mod events;
mod live;
mod schedule;
mod standings;
mod stats;
mod transform;

pub use bracket::build_bracket;
pub use events::{
    goal_events_from_json, parse_cards, parse_goal_scorers, parse_saves, penalties_from_json,
    split_list,
};
pub use live::{current_live_match, elapsed_minute, MAX_MINUTE};
pub use schedule::{
    kickoff, matches_on, parse_match_date, parse_match_time, sort_for_display, MatchCounts,
};
pub use standings::{compute_standings, FORM_LENGTH};
pub use stats::{player_statistics, team_wins};
pub use transform::{
    combine_schedule_and_results, normalize_header, parse_count, parse_score, result_status,
    summarize_results, transform_csv_to_matches, transform_results_data,
    transform_schedule_data, transform_teams_data, PLACEHOLDER,
};
