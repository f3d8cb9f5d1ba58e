//! Runtime configuration, read from environment variables once at startup.
//!
//! | Variable | Default |
//! |---|---|
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `8080` |
//! | `SHEET_ID` | the tournament sheet |
//! | `TEAMS_CSV_URL`, `RESULTS_CSV_URL`, `SCHEDULE_CSV_URL` | derived from `SHEET_ID` |
//! | `SHEETS_TIMEOUT_SECS` | `10` |

use crate::sheets::SheetKind;
use std::time::Duration;

pub const DEFAULT_SHEET_ID: &str = "1ZNg1Y2dpb8Z1Tm4N31o-hN1oojQs1UZ89FgSohxktKY";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Export URLs of the three published tabs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SheetUrls {
    pub teams: String,
    pub results: String,
    pub schedule: String,
}

impl SheetUrls {
    /// CSV export URLs for each tab of the given spreadsheet.
    pub fn for_sheet_id(sheet_id: &str) -> Self {
        let export = |kind: SheetKind| {
            format!(
                "https://docs.google.com/spreadsheets/d/{sheet_id}/export?format=csv&sheet={}&gid={}",
                kind.tab_name(),
                kind.gid()
            )
        };
        Self {
            teams: export(SheetKind::Teams),
            results: export(SheetKind::Results),
            schedule: export(SheetKind::Schedule),
        }
    }

    pub fn url_for(&self, kind: SheetKind) -> &str {
        match kind {
            SheetKind::Teams => &self.teams,
            SheetKind::Results => &self.results,
            SheetKind::Schedule => &self.schedule,
        }
    }
}

impl Default for SheetUrls {
    fn default() -> Self {
        Self::for_sheet_id(DEFAULT_SHEET_ID)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub sheet_urls: SheetUrls,
    pub fetch_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            sheet_urls: SheetUrls::default(),
            fetch_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset; unparseable
    /// numbers fall back to the default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let host = get("HOST").unwrap_or(defaults.host);
        let port = match get("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid PORT {raw:?}, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };
        let fetch_timeout = match get("SHEETS_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    log::warn!(
                        "Ignoring invalid SHEETS_TIMEOUT_SECS {raw:?}, using {DEFAULT_TIMEOUT_SECS}"
                    );
                    defaults.fetch_timeout
                }
            },
            None => defaults.fetch_timeout,
        };

        let mut sheet_urls = match get("SHEET_ID") {
            Some(id) => SheetUrls::for_sheet_id(&id),
            None => defaults.sheet_urls,
        };
        if let Some(url) = get("TEAMS_CSV_URL") {
            sheet_urls.teams = url;
        }
        if let Some(url) = get("RESULTS_CSV_URL") {
            sheet_urls.results = url;
        }
        if let Some(url) = get("SCHEDULE_CSV_URL") {
            sheet_urls.schedule = url;
        }

        Self {
            host,
            port,
            sheet_urls,
            fetch_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_set() {
        assert_eq!(config_from(&[]), ServerConfig::default());
    }

    #[test]
    fn default_urls_point_at_each_tab() {
        let urls = SheetUrls::default();
        assert!(urls.teams.ends_with("sheet=Teams&gid=0"));
        assert!(urls.results.ends_with("sheet=Results&gid=1476600777"));
        assert!(urls.schedule.ends_with("sheet=Schedule&gid=1206998445"));
        assert!(urls.results.contains(DEFAULT_SHEET_ID));
    }

    #[test]
    fn sheet_id_and_url_overrides() {
        let config = config_from(&[
            ("SHEET_ID", "abc"),
            ("RESULTS_CSV_URL", "http://localhost/results.csv"),
        ]);
        assert!(config.sheet_urls.teams.contains("/d/abc/"));
        assert_eq!(config.sheet_urls.results, "http://localhost/results.csv");
    }

    #[test]
    fn invalid_numbers_fall_back() {
        let config = config_from(&[("PORT", "eighty"), ("SHEETS_TIMEOUT_SECS", "0")]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.fetch_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn blank_values_are_unset() {
        let config = config_from(&[("HOST", "  "), ("PORT", "9000")]);
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, 9000);
    }
}
