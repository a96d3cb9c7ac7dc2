//! Tabular types for SDRF-derived data.

/// A tab-delimited sheet. Row 0 of the source file becomes `headers`;
/// header labels may repeat (chained `Protocol REF` columns rely on this).
/// Data rows are positionally aligned to the header but may be shorter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spreadsheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Spreadsheet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

/// An ordered mapping from column label to the column's values, built from
/// one per-file sample sheet.
///
/// Insertion keeps first-seen label order. Re-inserting a label replaces its
/// values in place (duplicate header labels collapse to the last column);
/// extending a label appends values, which is what cross-file merging needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleTable {
    columns: Vec<(String, Vec<String>)>,
}

impl SampleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a label-keyed table from a sheet. Cells missing from short
    /// rows are skipped, matching per-column value counts to what the rows
    /// actually carry.
    pub fn from_spreadsheet(sheet: &Spreadsheet) -> Self {
        let mut table = Self::new();
        for (index, label) in sheet.headers.iter().enumerate() {
            let values: Vec<String> = sheet
                .rows
                .iter()
                .filter_map(|row| row.get(index).cloned())
                .collect();
            table.insert(label, values);
        }
        table
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|(l, _)| l == label)
    }

    /// Inserts or replaces a column, keeping its first-seen position.
    pub fn insert(&mut self, label: &str, values: Vec<String>) {
        match self.position(label) {
            Some(index) => self.columns[index].1 = values,
            None => self.columns.push((label.to_string(), values)),
        }
    }

    /// Appends values to a column, creating it at the end if absent.
    pub fn extend_values(&mut self, label: &str, values: impl IntoIterator<Item = String>) {
        match self.position(label) {
            Some(index) => self.columns[index].1.extend(values),
            None => self
                .columns
                .push((label.to_string(), values.into_iter().collect())),
        }
    }

    pub fn values(&self, label: &str) -> Option<&[String]> {
        self.position(label).map(|i| self.columns[i].1.as_slice())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(label, _)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.columns
            .iter()
            .map(|(label, values)| (label.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
