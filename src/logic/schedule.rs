//! Schedule views: date/time parsing, display ordering, per-day filtering, counts.

use crate::models::{Fixture, MatchStatus};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const DATE_FORMATS: &[&str] = &["%d %b %Y", "%d %B %Y", "%b %d, %Y", "%B %d, %Y"];
const TIME_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S", "%I:%M %p", "%I:%M%p"];

/// Parse a schedule date. Numeric dates split on `-` or `/` are read as
/// year-month-day, or day-month-year when the year comes last.
pub fn parse_match_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let parts: Vec<&str> = text.split(['-', '/']).map(str::trim).collect();
    if parts.len() == 3 {
        let nums: Option<Vec<u32>> = parts.iter().map(|p| p.parse().ok()).collect();
        if let Some(n) = nums {
            let (y, m, d) = if parts[2].len() == 4 && parts[0].len() <= 2 {
                (n[2], n[1], n[0])
            } else {
                (n[0], n[1], n[2])
            };
            return NaiveDate::from_ymd_opt(i32::try_from(y).ok()?, m, d);
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

/// Parse a kickoff time such as `16:30` or `4:30 PM`.
pub fn parse_match_time(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(text, fmt).ok())
}

/// Kickoff as local wall-clock time. A missing or unreadable time means midnight.
pub fn kickoff(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = parse_match_date(date)?;
    Some(date.and_time(parse_match_time(time).unwrap_or(NaiveTime::MIN)))
}

/// Live first, then upcoming, postponed, completed; most recent kickoff first
/// within each group. Undated fixtures go last in their group.
pub fn sort_for_display(fixtures: &mut [Fixture]) {
    fixtures.sort_by(|a, b| {
        a.status
            .display_rank()
            .cmp(&b.status.display_rank())
            .then_with(|| kickoff(&b.date, &b.time).cmp(&kickoff(&a.date, &a.time)))
    });
}

/// Fixtures scheduled on `day`.
pub fn matches_on(fixtures: &[Fixture], day: NaiveDate) -> Vec<Fixture> {
    fixtures
        .iter()
        .filter(|f| parse_match_date(&f.date) == Some(day))
        .cloned()
        .collect()
}

/// Per-status totals shown next to fixture lists.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MatchCounts {
    pub total: usize,
    pub upcoming: usize,
    pub live: usize,
    pub completed: usize,
    pub postponed: usize,
}

impl MatchCounts {
    pub fn of(fixtures: &[Fixture]) -> Self {
        let mut counts = Self {
            total: fixtures.len(),
            ..Self::default()
        };
        for f in fixtures {
            match f.status {
                MatchStatus::Upcoming => counts.upcoming += 1,
                MatchStatus::Live => counts.live += 1,
                MatchStatus::Completed => counts.completed += 1,
                MatchStatus::Postponed => counts.postponed += 1,
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn numeric_dates() {
        assert_eq!(parse_match_date("2025-10-04"), Some(ymd(2025, 10, 4)));
        assert_eq!(parse_match_date("2025/10/04"), Some(ymd(2025, 10, 4)));
        assert_eq!(parse_match_date("04/10/2025"), Some(ymd(2025, 10, 4)));
        assert_eq!(parse_match_date("2025-13-01"), None);
    }

    #[test]
    fn written_dates() {
        assert_eq!(parse_match_date("4 Oct 2025"), Some(ymd(2025, 10, 4)));
        assert_eq!(parse_match_date("October 4, 2025"), Some(ymd(2025, 10, 4)));
        assert_eq!(parse_match_date("soon"), None);
    }

    #[test]
    fn times() {
        assert_eq!(parse_match_time("16:30"), NaiveTime::from_hms_opt(16, 30, 0));
        assert_eq!(parse_match_time("4:30 PM"), NaiveTime::from_hms_opt(16, 30, 0));
        assert_eq!(parse_match_time("9:05am"), NaiveTime::from_hms_opt(9, 5, 0));
        assert_eq!(parse_match_time("TBD"), None);
    }

    #[test]
    fn kickoff_defaults_to_midnight() {
        assert_eq!(
            kickoff("2025-10-04", ""),
            Some(ymd(2025, 10, 4).and_hms_opt(0, 0, 0).unwrap())
        );
        assert_eq!(kickoff("", "16:00"), None);
    }
}
