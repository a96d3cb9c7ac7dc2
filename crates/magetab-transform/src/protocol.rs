//! Protocol REF chain normalization.
//!
//! SDRF rows chain sequential protocol applications as repeated
//! "Protocol REF" columns. The declared width is the maximum across the
//! file and rows using fewer steps leave trailing cells blank, so each
//! block is rebuilt to the width the data actually needs: per row the
//! distinct non-empty values in first-seen order, padded with empty
//! strings to the widest chain found.

use tracing::debug;

use magetab_model::Spreadsheet;

pub const PROTOCOL_REF: &str = "Protocol REF";

/// A maximal run of >= 2 consecutive repeated-label header columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CandidateBlock {
    start: usize,
    width: usize,
}

fn select_candidates(headers: &[String]) -> Vec<CandidateBlock> {
    let mut candidates = Vec::new();
    let mut start: Option<usize> = None;
    let mut width = 0;
    for (index, header) in headers.iter().enumerate() {
        if header == PROTOCOL_REF {
            if start.is_none() {
                start = Some(index);
            }
            width += 1;
        } else {
            if let Some(start) = start
                && width > 1
            {
                candidates.push(CandidateBlock { start, width });
            }
            start = None;
            width = 0;
        }
    }
    if let Some(start) = start
        && width > 1
    {
        candidates.push(CandidateBlock { start, width });
    }
    candidates
}

/// A row's chain within one block: distinct non-empty values in their
/// original left-to-right order. Duplicates collapse; chains are sets of
/// protocol references, not positional slots.
fn chain_values(row: &[String], block: CandidateBlock) -> Vec<String> {
    let end = (block.start + block.width).min(row.len());
    let mut values: Vec<String> = Vec::new();
    for cell in &row[block.start..end] {
        if cell.trim().is_empty() {
            continue;
        }
        if !values.iter().any(|v| v == cell) {
            values.push(cell.clone());
        }
    }
    values
}

fn splice_block(sheet: &mut Spreadsheet, block: CandidateBlock) {
    // Rows shorter than the block's start carry no chain and stay untouched.
    let chains: Vec<Option<Vec<String>>> = sheet
        .rows
        .iter()
        .map(|row| (row.len() > block.start).then(|| chain_values(row, block)))
        .collect();
    // A block nobody populated still keeps one empty column.
    let required = chains
        .iter()
        .flatten()
        .map(Vec::len)
        .max()
        .unwrap_or(0)
        .max(1);
    debug!(
        start = block.start,
        declared = block.width,
        required,
        "normalizing protocol block"
    );
    sheet.headers.splice(
        block.start..block.start + block.width,
        std::iter::repeat_n(PROTOCOL_REF.to_string(), required),
    );
    for (row, chain) in sheet.rows.iter_mut().zip(chains) {
        let Some(mut values) = chain else { continue };
        values.resize(required, String::new());
        let end = (block.start + block.width).min(row.len());
        row.splice(block.start..end, values);
    }
}

/// Normalizes every repeated Protocol REF block in place.
///
/// Blocks are spliced in descending start order so replacing one never
/// shifts the column indexes of blocks still waiting.
pub fn normalize_protocol_blocks(sheet: &mut Spreadsheet) {
    let mut candidates = select_candidates(&sheet.headers);
    candidates.sort_by(|a, b| b.start.cmp(&a.start));
    for block in candidates {
        splice_block(sheet, block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(headers: &[&str], rows: &[&[&str]]) -> Spreadsheet {
        Spreadsheet::new(
            headers.iter().map(|h| (*h).to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|c| (*c).to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn shrinks_block_to_widest_populated_chain() {
        let mut s = sheet(
            &["Protocol REF", "Protocol REF", "Protocol REF", "Sample Name"],
            &[&["P1", "P2", "", "S1"], &["P3", "", "", "S2"]],
        );
        normalize_protocol_blocks(&mut s);
        assert_eq!(
            s.headers,
            vec!["Protocol REF", "Protocol REF", "Sample Name"]
        );
        assert_eq!(s.rows[0], vec!["P1", "P2", "S1"]);
        assert_eq!(s.rows[1], vec!["P3", "", "S2"]);
    }

    #[test]
    fn duplicate_values_in_one_chain_collapse() {
        let mut s = sheet(
            &["Sample Name", "Protocol REF", "Protocol REF"],
            &[&["S1", "P1", "P1"], &["S2", "P1", "P2"]],
        );
        normalize_protocol_blocks(&mut s);
        assert_eq!(s.rows[0], vec!["S1", "P1", ""]);
        assert_eq!(s.rows[1], vec!["S2", "P1", "P2"]);
    }

    #[test]
    fn unpopulated_block_keeps_one_empty_column() {
        let mut s = sheet(
            &["Sample Name", "Protocol REF", "Protocol REF", "Extract Name"],
            &[&["S1", "", "", "E1"]],
        );
        normalize_protocol_blocks(&mut s);
        assert_eq!(
            s.headers,
            vec!["Sample Name", "Protocol REF", "Extract Name"]
        );
        assert_eq!(s.rows[0], vec!["S1", "", "E1"]);
    }

    #[test]
    fn multiple_blocks_splice_independently() {
        let mut s = sheet(
            &[
                "Sample Name",
                "Protocol REF",
                "Protocol REF",
                "Extract Name",
                "Protocol REF",
                "Protocol REF",
                "Protocol REF",
            ],
            &[
                &["S1", "P1", "", "E1", "P2", "P3", ""],
                &["S2", "P1", "", "E2", "P4", "", ""],
            ],
        );
        normalize_protocol_blocks(&mut s);
        assert_eq!(
            s.headers,
            vec![
                "Sample Name",
                "Protocol REF",
                "Extract Name",
                "Protocol REF",
                "Protocol REF",
            ]
        );
        assert_eq!(s.rows[0], vec!["S1", "P1", "E1", "P2", "P3"]);
        assert_eq!(s.rows[1], vec!["S2", "P1", "E2", "P4", ""]);
    }

    #[test]
    fn rows_shorter_than_block_start_are_untouched() {
        let mut s = sheet(
            &["Sample Name", "Extract Name", "Protocol REF", "Protocol REF"],
            &[&["S1", "E1", "P1", "P2"], &["S2"]],
        );
        normalize_protocol_blocks(&mut s);
        assert_eq!(s.rows[0], vec!["S1", "E1", "P1", "P2"]);
        assert_eq!(s.rows[1], vec!["S2"]);
    }

    #[test]
    fn single_protocol_column_is_not_a_candidate() {
        let mut s = sheet(
            &["Sample Name", "Protocol REF", "Extract Name"],
            &[&["S1", "P1", "E1"]],
        );
        let before = s.clone();
        normalize_protocol_blocks(&mut s);
        assert_eq!(s, before);
    }

    #[test]
    fn normalization_is_idempotent() {
        let mut s = sheet(
            &["Protocol REF", "Protocol REF", "Protocol REF", "Sample Name"],
            &[&["P1", "P2", "", "S1"], &["P3", "", "", "S2"]],
        );
        normalize_protocol_blocks(&mut s);
        let once = s.clone();
        normalize_protocol_blocks(&mut s);
        assert_eq!(s, once);
    }
}
