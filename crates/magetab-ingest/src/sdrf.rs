//! SDRF table reading.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use magetab_model::Spreadsheet;

use crate::error::{IngestError, Result};

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a tab-delimited SDRF file into a [`Spreadsheet`].
///
/// The first surviving row is the header. Rows that are entirely empty or
/// whose first cell is empty are dropped; SDRF exports pad with such rows.
/// Row lengths are kept as-is: short rows are reconciled later by the
/// protocol-block normalizer.
pub fn read_sdrf_table(path: &Path) -> Result<Spreadsheet> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_path(path)
        .map_err(|source| IngestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.first().is_none_or(|cell| cell.is_empty()) {
            continue;
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Ok(Spreadsheet::default());
    }
    let headers = rows.remove(0);
    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read SDRF"
    );
    Ok(Spreadsheet::new(headers, rows))
}
