//! Upload adapters: CSV and JSON payloads into [`RawEntry`] rows.
//!
//! Parsing fails fast: a malformed source yields one error and nothing is
//! handed to the validator, so partially-parsed content is never partially
//! admitted. Per-word shape violations are not parse errors; those surface
//! later as rejection counts.

use crate::core::types::Commonality;
use crate::ingest::RawEntry;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("line {line}: frequency column is not a number")]
    BadFrequency { line: usize },
    #[error("entry {index}: expected a string or an object with a word field")]
    BadRow { index: usize },
    #[error("expected a JSON array of words or word objects")]
    UnsupportedShape,
}

/// Parse CSV content with column order `word,frequency,commonality`.
/// The frequency and commonality columns are optional per row; a header
/// row whose first cell is `word` is skipped.
pub fn parse_csv(content: &str) -> Result<Vec<RawEntry>, IngestError> {
    let mut entries = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut columns = line.split(',').map(str::trim);
        let word = columns.next().unwrap_or("");
        if line_no == 0 && word.eq_ignore_ascii_case("word") {
            continue;
        }

        let frequency = match columns.next().filter(|cell| !cell.is_empty()) {
            Some(cell) => Some(
                cell.parse::<u64>()
                    .map_err(|_| IngestError::BadFrequency { line: line_no + 1 })?,
            ),
            None => None,
        };
        // An unrecognized commonality cell falls back to derivation.
        let commonality = columns.next().and_then(Commonality::parse);

        entries.push(RawEntry {
            word: word.to_string(),
            frequency,
            commonality,
        });
    }
    Ok(entries)
}

/// Parse JSON content: either an array of strings or an array of objects
/// carrying a `word`/`text`/`term` key with optional `frequency`/`count`/
/// `freq` and `commonality` keys.
pub fn parse_json(content: &str) -> Result<Vec<RawEntry>, IngestError> {
    let value: Value = serde_json::from_str(content)?;
    let rows = match value {
        Value::Array(rows) => rows,
        _ => return Err(IngestError::UnsupportedShape),
    };

    let mut entries = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        match row {
            Value::String(word) => entries.push(RawEntry::new(word)),
            Value::Object(fields) => {
                let word = ["word", "text", "term"]
                    .iter()
                    .find_map(|key| fields.get(*key))
                    .and_then(Value::as_str)
                    .ok_or(IngestError::BadRow { index })?;
                let frequency = ["frequency", "count", "freq"]
                    .iter()
                    .find_map(|key| fields.get(*key))
                    .and_then(Value::as_u64);
                let commonality = fields
                    .get("commonality")
                    .and_then(Value::as_str)
                    .and_then(Commonality::parse);
                entries.push(RawEntry {
                    word: word.to_string(),
                    frequency,
                    commonality,
                });
            }
            _ => return Err(IngestError::BadRow { index }),
        }
    }
    Ok(entries)
}
