//! Property tests for protocol-chain normalization.

use proptest::prelude::*;

use magetab_model::Spreadsheet;
use magetab_transform::normalize_protocol_blocks;

/// Header: Sample Name, `width` chained Protocol REF columns, Extract Name.
fn build_sheet(width: usize, chains: Vec<Vec<String>>) -> Spreadsheet {
    let mut headers = vec!["Sample Name".to_string()];
    headers.extend(std::iter::repeat_n("Protocol REF".to_string(), width));
    headers.push("Extract Name".to_string());
    let rows = chains
        .into_iter()
        .enumerate()
        .map(|(index, chain)| {
            let mut row = vec![format!("S{index}")];
            row.extend(chain);
            row.push(format!("E{index}"));
            row
        })
        .collect();
    Spreadsheet::new(headers, rows)
}

fn protocol_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => Just(String::new()),
        1 => Just("P1".to_string()),
        1 => Just("P2".to_string()),
        1 => Just("P3".to_string()),
        1 => Just("P4".to_string()),
    ]
}

fn sheet_strategy() -> impl Strategy<Value = (usize, Spreadsheet)> {
    (2usize..=5).prop_flat_map(|width| {
        prop::collection::vec(prop::collection::vec(protocol_cell(), width), 1..8)
            .prop_map(move |chains| (width, build_sheet(width, chains)))
    })
}

proptest! {
    /// No non-empty value is dropped and the block never grows past the
    /// declared width.
    #[test]
    fn normalization_is_sound((width, sheet) in sheet_strategy()) {
        let original = sheet.clone();
        let mut normalized = sheet;
        normalize_protocol_blocks(&mut normalized);

        let new_width = normalized.headers.len() - 2;
        prop_assert!(new_width >= 1);
        prop_assert!(new_width <= width);

        for (row, normalized_row) in original.rows.iter().zip(&normalized.rows) {
            prop_assert_eq!(&normalized_row[0], &row[0]);
            prop_assert_eq!(
                normalized_row.last().unwrap(),
                row.last().unwrap()
            );
            let kept: Vec<&String> = normalized_row[1..1 + new_width]
                .iter()
                .filter(|cell| !cell.is_empty())
                .collect();
            for cell in &row[1..1 + width] {
                if !cell.is_empty() {
                    prop_assert!(
                        kept.contains(&cell),
                        "value {} dropped from row", cell
                    );
                }
            }
            // Values are left-packed: padding only after the chain.
            let first_empty = normalized_row[1..1 + new_width]
                .iter()
                .position(|cell| cell.is_empty());
            if let Some(position) = first_empty {
                prop_assert!(
                    normalized_row[1 + position..1 + new_width]
                        .iter()
                        .all(|cell| cell.is_empty())
                );
            }
        }
    }

    /// Running the normalizer a second time changes nothing.
    #[test]
    fn normalization_is_idempotent((_width, sheet) in sheet_strategy()) {
        let mut once = sheet;
        normalize_protocol_blocks(&mut once);
        let mut twice = once.clone();
        normalize_protocol_blocks(&mut twice);
        prop_assert_eq!(once, twice);
    }
}
