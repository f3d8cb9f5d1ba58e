//! Where sheet CSV comes from: the published export over HTTP, or anything
//! else implementing `SheetSource`.

use crate::config::SheetUrls;
use crate::error::SheetError;
use crate::sheets::{parse_csv_data, SheetKind};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

/// Yields the raw CSV text of one tab.
pub trait SheetSource {
    fn fetch_csv(&self, kind: SheetKind)
        -> impl Future<Output = Result<String, SheetError>> + Send;
}

/// Downloads the published CSV export. Nothing is cached; each call hits the sheet.
#[derive(Clone, Debug)]
pub struct HttpSheetSource {
    client: Client,
    urls: SheetUrls,
}

impl HttpSheetSource {
    pub fn new(urls: SheetUrls, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("sevens-tournament-web/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, urls })
    }

    pub fn urls(&self) -> &SheetUrls {
        &self.urls
    }
}

impl SheetSource for HttpSheetSource {
    async fn fetch_csv(&self, kind: SheetKind) -> Result<String, SheetError> {
        let url = self.urls.url_for(kind);
        log::info!("Fetching {kind} sheet from {url}");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|source| SheetError::Request { kind, source })?;

        let status = response.status();
        if !status.is_success() {
            log::error!("Fetching {kind} sheet failed with HTTP {status}");
            return Err(SheetError::Status {
                kind,
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| SheetError::Request { kind, source })
    }
}

/// Fetch one tab and split it into rows.
pub async fn fetch_sheet<S: SheetSource>(
    source: &S,
    kind: SheetKind,
) -> Result<Vec<Vec<String>>, SheetError> {
    let text = source.fetch_csv(kind).await?;
    let rows = parse_csv_data(&text)?;
    log::debug!("{kind} sheet: {} rows", rows.len());
    Ok(rows)
}
