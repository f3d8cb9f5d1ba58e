//! CSV text to rows of trimmed cells.

use crate::error::SheetError;

/// Parse exported sheet CSV into rows of trimmed cells.
///
/// Quoted cells may contain commas and `""` escapes. Rows may be ragged.
/// Blank lines, including whitespace-only ones, are dropped.
pub fn parse_csv_data(text: &str) -> Result<Vec<Vec<String>>, SheetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}
