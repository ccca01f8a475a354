//! Counts files: whitespace separated lists of positive integers
//! (matrix sizes, thread counts).

use std::fs;
use std::path::Path;

use crate::error::{BenchError, Result};

/// Read a counts file. Missing, empty or malformed files are rejected
/// before any benchmark work starts.
pub fn read_counts(path: impl AsRef<Path>) -> Result<Vec<usize>> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|e| BenchError::InvalidInput {
        origin: origin.clone(),
        reason: format!("cannot read file: {e}"),
    })?;
    parse_counts(&text, &origin)
}

/// Parse every whitespace separated token of `text` as a positive integer.
pub fn parse_counts(text: &str, origin: &str) -> Result<Vec<usize>> {
    let invalid = |reason: String| BenchError::InvalidInput {
        origin: origin.to_string(),
        reason,
    };

    let mut counts = Vec::new();
    for (idx, token) in text.split_whitespace().enumerate() {
        let value: i64 = token
            .parse()
            .map_err(|_| invalid(format!("value #{} `{token}` is not an integer", idx + 1)))?;
        if value <= 0 {
            return Err(invalid(format!(
                "value #{} `{token}` must be positive",
                idx + 1
            )));
        }
        let value = usize::try_from(value)
            .map_err(|_| invalid(format!("value #{} `{token}` is too large", idx + 1)))?;
        counts.push(value);
    }

    if counts.is_empty() {
        return Err(invalid("no values found".to_string()));
    }
    log::debug!("read {} value(s) from {origin}", counts.len());
    Ok(counts)
}
