//! Merging sample tables from independently processed SDRF files.

use std::collections::HashSet;

use tracing::debug;

use magetab_model::{SampleTable, Spreadsheet};

/// Column label whose values identify one record per row.
pub const IDENTITY_LABEL: &str = "Sample Name";

/// Folds tables left to right into one label-keyed table.
///
/// The merged key set is the union of all inputs: the first table's labels
/// in order, then labels newly introduced by later tables as they appear.
/// Values for a shared label concatenate in table order, so a shared
/// column's length is the sum of the contributing record counts.
pub fn merge_tables(tables: &[SampleTable]) -> SampleTable {
    let mut merged = tables.first().cloned().unwrap_or_default();
    for table in tables.iter().skip(1) {
        for (label, values) in table.iter() {
            merged.extend_values(label, values.iter().cloned());
        }
    }
    merged
}

/// Flattens a merged table into a sheet of unique records.
///
/// The record count comes from the identity column (falling back to the
/// longest column when it is absent); shorter columns pad with empty
/// cells. Exact duplicate rows collapse to their first occurrence, an
/// artifact-removal step for repeats introduced by naive concatenation.
pub fn flatten_table(table: &SampleTable, identity_label: &str) -> Spreadsheet {
    let record_count = table
        .values(identity_label)
        .map(<[String]>::len)
        .unwrap_or_else(|| {
            debug!(identity_label, "identity column missing, using longest column");
            table.iter().map(|(_, values)| values.len()).max().unwrap_or(0)
        });
    let headers: Vec<String> = table.labels().map(str::to_string).collect();
    let mut seen: HashSet<Vec<String>> = HashSet::new();
    let mut rows: Vec<Vec<String>> = Vec::new();
    for index in 0..record_count {
        let row: Vec<String> = table
            .iter()
            .map(|(_, values)| values.get(index).cloned().unwrap_or_default())
            .collect();
        if seen.insert(row.clone()) {
            rows.push(row);
        }
    }
    Spreadsheet::new(headers, rows)
}
