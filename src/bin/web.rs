//! Web server: JSON API over the tournament's published Google Sheet.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. See `config` for the environment
//! variables (HOST, PORT, SHEET_ID, ...).

use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use sevens_tournament_web::{api, HttpSheetSource, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let source = HttpSheetSource::new(config.sheet_urls.clone(), config.fetch_timeout)
        .map_err(std::io::Error::other)?;
    log::info!("Reading results from {}", source.urls().results);
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let source = Data::new(source);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(source.clone())
            .configure(api::configure::<HttpSheetSource>)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
