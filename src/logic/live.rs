//! The live tracker: pick the match marked live and describe its progress.

use crate::logic::events::{goal_events_from_json, penalties_from_json};
use crate::logic::schedule::kickoff;
use crate::models::{LiveEvent, LiveEventKind, LiveMatch, MatchStatus, SheetMatch};
use chrono::NaiveDateTime;

/// Longest regulation time shown on the tracker.
pub const MAX_MINUTE: u32 = 90;

/// Minutes since kickoff, clamped to `0..=MAX_MINUTE`. Unknown kickoff is 0.
pub fn elapsed_minute(date: &str, time: &str, now: NaiveDateTime) -> u32 {
    match kickoff(date, time) {
        Some(start) => {
            let minutes = (now - start).num_minutes().clamp(0, i64::from(MAX_MINUTE));
            minutes as u32
        }
        None => 0,
    }
}

/// First match marked live, with its goal feed. `now` is local wall-clock time.
pub fn current_live_match(matches: &[SheetMatch], now: NaiveDateTime) -> Option<LiveMatch> {
    let sheet = matches.iter().find(|m| m.status == MatchStatus::Live)?.clone();

    let events = goal_events_from_json(&sheet.goal_scorers)
        .into_iter()
        .enumerate()
        .map(|(i, goal)| LiveEvent {
            id: format!("goal-{i}"),
            kind: LiveEventKind::Goal,
            minute: goal.minute,
            description: format!("{} scores for {}", goal.player, goal.team),
            player: goal.player,
            team: goal.team,
            timestamp: sheet.last_updated,
        })
        .collect();

    Some(LiveMatch {
        minute: elapsed_minute(&sheet.date, &sheet.time, now),
        penalty_shootout: penalties_from_json(&sheet.penalties),
        events,
        sheet,
    })
}
