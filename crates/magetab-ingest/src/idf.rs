//! IDF line reading.

use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, Result};

/// Reads an IDF file as an ordered sequence of text lines.
///
/// Line endings are stripped, a UTF-8 BOM on the first line is removed, and
/// blank lines are dropped. Classification downstream is best-effort, so no
/// structural validation happens here.
pub fn read_idf_lines(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let lines: Vec<String> = contents
        .lines()
        .map(|line| line.trim_start_matches('\u{feff}').trim_end().to_string())
        .filter(|line| !line.is_empty())
        .collect();
    debug!(path = %path.display(), lines = lines.len(), "read IDF");
    Ok(lines)
}
