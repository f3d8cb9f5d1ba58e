//! JSON API polled by the site. Every route re-reads the sheet; nothing is stored.
//!
//! Responses share one envelope: `success`, `data`, `lastUpdated`, plus
//! per-route counters. Sheet failures answer 500 with `success: false`.

use crate::error::SheetError;
use crate::logic::{
    build_bracket, combine_schedule_and_results, compute_standings, current_live_match,
    matches_on, parse_match_date, player_statistics, sort_for_display, summarize_results,
    transform_csv_to_matches, transform_results_data, transform_schedule_data,
    transform_teams_data, MatchCounts,
};
use crate::models::Fixture;
use crate::sheets::{fetch_sheet, SheetKind, SheetSource};
use actix_web::{
    web::{self, Data, Query},
    HttpResponse,
};
use chrono::{Local, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const SERVICE_NAME: &str = "sevens-tournament-web";

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct ScheduleQuery {
    /// Only fixtures on this day (`YYYY-MM-DD`).
    date: Option<String>,
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// 500 envelope. `empty` is what `data` holds on failure (`[]` or `null`).
fn failure(message: &str, err: &SheetError, empty: Value) -> HttpResponse {
    log::error!("{message}: {err}");
    HttpResponse::InternalServerError().json(json!({
        "success": false,
        "error": message,
        "data": empty,
        "lastUpdated": timestamp(),
    }))
}

/// Schedule and results tabs fetched together and merged.
async fn load_fixtures<S: SheetSource>(source: &S) -> Result<Vec<Fixture>, SheetError> {
    let (schedule, results) = tokio::try_join!(
        fetch_sheet(source, SheetKind::Schedule),
        fetch_sheet(source, SheetKind::Results)
    )?;
    Ok(combine_schedule_and_results(
        &transform_schedule_data(&schedule),
        &transform_results_data(&results),
    ))
}

async fn api_health() -> HttpResponse {
    let health = HealthResponse {
        ok: true,
        service: SERVICE_NAME,
    };
    HttpResponse::Ok().json(json!({
        "success": true,
        "data": health,
        "lastUpdated": timestamp(),
    }))
}

/// Registered teams with their crest paths.
async fn api_teams<S: SheetSource + 'static>(source: Data<S>) -> HttpResponse {
    let rows = match fetch_sheet(source.get_ref(), SheetKind::Teams).await {
        Ok(rows) => rows,
        Err(e) => return failure("Failed to fetch teams data from Google Sheets", &e, json!([])),
    };
    let teams = transform_teams_data(&rows);
    HttpResponse::Ok().json(json!({
        "success": true,
        "data": teams,
        "lastUpdated": timestamp(),
        "totalTeams": teams.len(),
    }))
}

/// Every scheduled fixture merged with its result, in schedule order.
async fn api_matches<S: SheetSource + 'static>(source: Data<S>) -> HttpResponse {
    let fixtures = match load_fixtures(source.get_ref()).await {
        Ok(f) => f,
        Err(e) => return failure("Failed to fetch match data from Google Sheets", &e, json!([])),
    };
    let counts = MatchCounts::of(&fixtures);
    HttpResponse::Ok().json(json!({
        "success": true,
        "data": fixtures,
        "lastUpdated": timestamp(),
        "totalMatches": counts.total,
        "completedMatches": counts.completed,
        "upcomingMatches": counts.upcoming,
    }))
}

/// The match currently marked live, or `null`.
async fn api_live_match<S: SheetSource + 'static>(source: Data<S>) -> HttpResponse {
    let rows = match fetch_sheet(source.get_ref(), SheetKind::Results).await {
        Ok(rows) => rows,
        Err(e) => {
            log::error!("Failed to fetch live match data: {e}");
            return HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "Failed to fetch live match data",
                "data": null,
                "connectionStatus": "disconnected",
            }));
        }
    };
    let matches = transform_csv_to_matches(&rows, Utc::now());
    match current_live_match(&matches, Local::now().naive_local()) {
        Some(live) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": live,
            "lastUpdated": timestamp(),
            "connectionStatus": "connected",
        })),
        None => HttpResponse::Ok().json(json!({
            "success": true,
            "data": null,
            "message": "No live matches currently",
            "lastUpdated": timestamp(),
            "connectionStatus": "connected",
        })),
    }
}

/// Results rows with scorers and bookings parsed.
async fn api_results<S: SheetSource + 'static>(source: Data<S>) -> HttpResponse {
    let rows = match fetch_sheet(source.get_ref(), SheetKind::Results).await {
        Ok(rows) => rows,
        Err(e) => {
            return failure("Failed to fetch results data from Google Sheets", &e, json!([]))
        }
    };
    let results = summarize_results(&transform_results_data(&rows));
    HttpResponse::Ok().json(json!({
        "success": true,
        "data": results,
        "lastUpdated": timestamp(),
        "totalResults": results.len(),
    }))
}

/// Fixtures in display order, optionally for one day.
async fn api_schedule<S: SheetSource + 'static>(
    source: Data<S>,
    query: Query<ScheduleQuery>,
) -> HttpResponse {
    let day = match query.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        Some(raw) => match parse_match_date(raw) {
            Some(day) => Some(day),
            None => {
                return HttpResponse::BadRequest().json(json!({
                    "success": false,
                    "error": format!("Invalid date: {raw}"),
                    "data": [],
                }))
            }
        },
        None => None,
    };

    let fixtures = match load_fixtures(source.get_ref()).await {
        Ok(f) => f,
        Err(e) => return failure("Failed to fetch match data from Google Sheets", &e, json!([])),
    };
    let mut fixtures = match day {
        Some(day) => matches_on(&fixtures, day),
        None => fixtures,
    };
    sort_for_display(&mut fixtures);
    let counts = MatchCounts::of(&fixtures);
    HttpResponse::Ok().json(json!({
        "success": true,
        "data": fixtures,
        "lastUpdated": timestamp(),
        "totalMatches": counts.total,
        "liveMatches": counts.live,
        "completedMatches": counts.completed,
        "upcomingMatches": counts.upcoming,
    }))
}

/// Top scorers, disciplinary record and top keepers.
async fn api_player_stats<S: SheetSource + 'static>(source: Data<S>) -> HttpResponse {
    let rows = match fetch_sheet(source.get_ref(), SheetKind::Results).await {
        Ok(rows) => rows,
        Err(e) => return failure("Failed to fetch player statistics", &e, json!(null)),
    };
    let stats = player_statistics(&transform_results_data(&rows));
    HttpResponse::Ok().json(json!({
        "success": true,
        "data": stats,
        "lastUpdated": timestamp(),
    }))
}

/// League table from completed fixtures.
async fn api_standings<S: SheetSource + 'static>(source: Data<S>) -> HttpResponse {
    let source = source.get_ref();
    let loaded = tokio::try_join!(fetch_sheet(source, SheetKind::Teams), load_fixtures(source));
    let (teams, fixtures) = match loaded {
        Ok(v) => v,
        Err(e) => return failure("Failed to compute standings", &e, json!([])),
    };
    let standings = compute_standings(&fixtures, &transform_teams_data(&teams));
    HttpResponse::Ok().json(json!({
        "success": true,
        "data": standings,
        "lastUpdated": timestamp(),
    }))
}

/// Knockout bracket laid out from the schedule.
async fn api_bracket<S: SheetSource + 'static>(source: Data<S>) -> HttpResponse {
    let fixtures = match load_fixtures(source.get_ref()).await {
        Ok(f) => f,
        Err(e) => return failure("Failed to fetch match data from Google Sheets", &e, json!(null)),
    };
    HttpResponse::Ok().json(json!({
        "success": true,
        "data": build_bracket(&fixtures),
        "lastUpdated": timestamp(),
    }))
}

/// Register all routes, reading sheets through the `Data<S>` app data.
pub fn configure<S: SheetSource + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/health", web::get().to(api_health))
        .route("/api/teams", web::get().to(api_teams::<S>))
        .route("/api/matches", web::get().to(api_matches::<S>))
        .route("/api/matches/live", web::get().to(api_live_match::<S>))
        .route("/api/results", web::get().to(api_results::<S>))
        .route("/api/schedule", web::get().to(api_schedule::<S>))
        .route("/api/stats/players", web::get().to(api_player_stats::<S>))
        .route("/api/standings", web::get().to(api_standings::<S>))
        .route("/api/bracket", web::get().to(api_bracket::<S>));
}
