use crate::sheets::SheetKind;
use thiserror::Error;

/// Failures while obtaining sheet data. Transformations never fail; only the
/// download and the CSV reader can.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("Failed to fetch {kind} sheet: {source}")]
    Request {
        kind: SheetKind,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to fetch {kind} sheet: HTTP {status}")]
    Status { kind: SheetKind, status: u16 },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Raised by non-HTTP sources (fixtures, local files).
    #[error("{kind} sheet unavailable: {message}")]
    Unavailable { kind: SheetKind, message: String },
}

impl SheetError {
    pub fn unavailable(kind: SheetKind, message: impl Into<String>) -> Self {
        SheetError::Unavailable {
            kind,
            message: message.into(),
        }
    }
}
