//! Free-text cells: goal scorers, cards, keeper saves, and the JSON goal feed.

use crate::logic::transform::{parse_count, PLACEHOLDER};
use crate::models::{CardEvent, CardKind, GoalEvent, PenaltyTally, SaveEntry};
use once_cell::sync::Lazy;
use regex::Regex;

/// `(P)`, `(pen)` or `(penalty)`, anywhere in the entry.
static PENALTY_MARK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s*\(\s*(?:p|pen|penalty)\s*\)").expect("valid regex")
});

/// A bare `pen` or `penalty` word ending the entry.
static TRAILING_PEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+pen(?:alty)?\s*$").expect("valid regex"));

/// A trailing minute: `12'`, `12’`, `12min`, `(12)` or `(12')`.
static MINUTE_MARK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\(\s*(\d{1,3})\s*(?:'|’|min)?\s*\)|\b(\d{1,3})\s*(?:'|’|min))\s*$")
        .expect("valid regex")
});

/// Remove a trailing `pen` word, reporting whether one was there.
fn strip_trailing_pen(text: &str) -> Option<String> {
    TRAILING_PEN
        .is_match(text)
        .then(|| TRAILING_PEN.replace(text, "").into_owned())
}

fn is_blank_or_placeholder(text: &str) -> bool {
    let text = text.trim();
    text.is_empty() || text == PLACEHOLDER
}

/// Comma-separated cell to trimmed entries; blanks and placeholders dropped.
pub fn split_list(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|entry| !is_blank_or_placeholder(entry))
        .map(str::to_string)
        .collect()
}

/// One scorers entry, e.g. `Ravi 12' (P)` or `Sam 40' pen`.
fn parse_goal_entry(entry: &str, team: &str) -> Option<GoalEvent> {
    let mut penalty = PENALTY_MARK.is_match(entry);
    let mut without_penalty = PENALTY_MARK.replace_all(entry, "").into_owned();
    if let Some(stripped) = strip_trailing_pen(&without_penalty) {
        penalty = true;
        without_penalty = stripped;
    }

    let (name, minute) = match MINUTE_MARK.captures(&without_penalty) {
        Some(caps) => {
            let minute = caps
                .get(1)
                .or_else(|| caps.get(2))
                .and_then(|m| m.as_str().parse().ok());
            let start = caps.get(0).map_or(without_penalty.len(), |m| m.start());
            (without_penalty[..start].to_string(), minute)
        }
        None => (without_penalty.clone(), None),
    };
    // `Sam pen 40'`: the word sits before the minute.
    let name = match strip_trailing_pen(&name) {
        Some(stripped) => {
            penalty = true;
            stripped
        }
        None => name,
    };

    let player = name.trim().trim_end_matches(['(', '-']).trim().to_string();
    if player.is_empty() {
        log::debug!("Skipping scorer entry without a name: {entry:?}");
        return None;
    }
    Some(GoalEvent {
        player,
        team: team.to_string(),
        minute,
        penalty,
    })
}

/// Goals from a scorers cell. Every entry is one goal for `team`.
pub fn parse_goal_scorers(cell: &str, team: &str) -> Vec<GoalEvent> {
    split_list(cell)
        .iter()
        .filter_map(|entry| parse_goal_entry(entry, team))
        .collect()
}

/// Bookings from a cards cell such as `Arjun (Yellow), Dev (Red)`.
/// Anything not mentioning yellow is a red card.
pub fn parse_cards(cell: &str) -> Vec<CardEvent> {
    split_list(cell)
        .iter()
        .filter_map(|entry| {
            let player = entry.split('(').next().unwrap_or("").trim();
            if player.is_empty() {
                return None;
            }
            let card = if entry.to_lowercase().contains("yellow") {
                CardKind::Yellow
            } else {
                CardKind::Red
            };
            Some(CardEvent {
                player: player.to_string(),
                card,
            })
        })
        .collect()
}

/// Keeper saves from a cell such as `Vikram*4, Sam*2`. Entries without a
/// name or with no positive count are skipped.
pub fn parse_saves(cell: &str) -> Vec<SaveEntry> {
    split_list(cell)
        .iter()
        .filter_map(|entry| {
            let mut parts = entry.split('*');
            let player = parts.next().unwrap_or("").trim();
            let saves = parts.next().and_then(parse_count).unwrap_or(0);
            if player.is_empty() || saves == 0 {
                return None;
            }
            Some(SaveEntry {
                player: player.to_string(),
                saves,
            })
        })
        .collect()
}

/// Goals from the JSON goal feed cell (`[{"player": .., "team": .., "minute": ..}]`).
pub fn goal_events_from_json(text: &str) -> Vec<GoalEvent> {
    if is_blank_or_placeholder(text) {
        return Vec::new();
    }
    serde_json::from_str(text).unwrap_or_else(|e| {
        log::warn!("Ignoring malformed goal scorer JSON {text:?}: {e}");
        Vec::new()
    })
}

/// Shoot-out tallies from the penalties JSON cell (`[{"team": .., "scored": ..}]`).
pub fn penalties_from_json(text: &str) -> Vec<PenaltyTally> {
    if is_blank_or_placeholder(text) {
        return Vec::new();
    }
    serde_json::from_str(text).unwrap_or_else(|e| {
        log::warn!("Ignoring malformed penalties JSON {text:?}: {e}");
        Vec::new()
    })
}
