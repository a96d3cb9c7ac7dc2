use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::ConvertResult;

pub fn print_summary(result: &ConvertResult) {
    println!("Accession: {}", result.accession);
    if let Some(path) = &result.investigation_path {
        println!("Investigation: {}", path.display());
    }
    if let Some(path) = &result.study_samples_path {
        println!(
            "Study samples: {} ({} rows, {} columns)",
            path.display(),
            result.sample_rows,
            result.sample_columns
        );
    }
    if result.sdrf_files.is_empty() {
        println!("No SDRF files declared.");
        return;
    }
    println!("SDRF files: {}", result.sdrf_files.join(", "));

    if result.assay_types.is_empty() {
        println!("No assay types inferred from the design declaration.");
        return;
    }
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Assay"),
        header_cell("Measurement"),
        header_cell("Technology"),
        header_cell("File Tag"),
    ]);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Left);
    }
    for assay_type in &result.assay_types {
        table.add_row(vec![
            Cell::new(&assay_type.short_label)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&assay_type.measurement),
            Cell::new(&assay_type.technology),
            match &assay_type.file_tag {
                Some(tag) => Cell::new(tag),
                None => Cell::new("-").fg(Color::DarkGrey),
            },
        ]);
    }
    println!("{table}");
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
