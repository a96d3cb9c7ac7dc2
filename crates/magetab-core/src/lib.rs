//! Conversion orchestration.
//!
//! Drives one MAGE-TAB submission through the transformation engines:
//! IDF lines -> classified sections, design line -> assay types, SDRFs ->
//! normalized sheets -> (merged) sample table. All inputs are read fully
//! before transformation; SDRFs are processed strictly in declaration
//! order. Nothing is shared between runs.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use magetab_ingest::{SdrfResolver, read_idf_lines};
use magetab_model::{AssayType, Investigation, SampleTable, Spreadsheet};
use magetab_transform::{
    IDENTITY_LABEL, SectionAssembler, disambiguate_file_tags, flatten_table, infer_assay_types,
    merge_tables, normalize_protocol_blocks,
};

/// The assembled output of one conversion run.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub accession: String,
    pub investigation: Investigation,
    /// One normalized sheet for a single SDRF, or the merged sheet when
    /// the IDF declares several.
    pub sample_sheet: Spreadsheet,
    pub sdrf_files: Vec<String>,
    pub assay_types: Vec<AssayType>,
}

/// Converts an in-memory IDF line sequence. SDRF contents come from the
/// resolver; a missing SDRF aborts the run with no partial table output.
pub fn convert_lines(
    lines: &[String],
    accession: &str,
    resolver: &dyn SdrfResolver,
) -> Result<Conversion> {
    let mut assembler = SectionAssembler::new();
    for line in lines {
        assembler.push_line(line);
    }

    let design_line = assembler.design_line().unwrap_or_default().to_string();
    let mut assay_types = infer_assay_types(&design_line);
    info!(
        accession,
        assays = assay_types.len(),
        "inferred assay types"
    );

    let sdrf_files = assembler.sdrf_files().to_vec();
    let tags = assembler.comment_tags().to_vec();
    if sdrf_files.len() > 1 {
        if tags.len() == sdrf_files.len() {
            disambiguate_file_tags(&mut assay_types, &tags);
        } else if !tags.is_empty() {
            // Cardinality mismatch: keep the generic triple list.
            warn!(
                sdrf_count = sdrf_files.len(),
                tag_count = tags.len(),
                "experiment-type tag count does not match SDRF count"
            );
        }
    }

    // Every declared SDRF must resolve before any table work starts.
    let mut sheets = Vec::with_capacity(sdrf_files.len());
    for file_name in &sdrf_files {
        let sheet = resolver
            .resolve(accession, file_name)
            .with_context(|| format!("resolve SDRF {file_name}"))?;
        sheets.push(sheet);
    }
    for (file_name, sheet) in sdrf_files.iter().zip(&mut sheets) {
        normalize_protocol_blocks(sheet);
        debug!(file_name = %file_name, rows = sheet.rows.len(), "normalized SDRF");
    }

    let sample_sheet = match sheets.len() {
        0 => Spreadsheet::default(),
        1 => sheets.remove(0),
        _ => {
            let tables: Vec<SampleTable> =
                sheets.iter().map(SampleTable::from_spreadsheet).collect();
            flatten_table(&merge_tables(&tables), IDENTITY_LABEL)
        }
    };

    let investigation = assembler.finish(accession, &assay_types);
    Ok(Conversion {
        accession: accession.to_string(),
        investigation,
        sample_sheet,
        sdrf_files,
        assay_types,
    })
}

/// Reads an IDF from disk and converts it.
pub fn convert_idf(
    idf_path: &Path,
    accession: &str,
    resolver: &dyn SdrfResolver,
) -> Result<Conversion> {
    let lines =
        read_idf_lines(idf_path).with_context(|| format!("read IDF {}", idf_path.display()))?;
    info!(accession, path = %idf_path.display(), "converting submission");
    convert_lines(&lines, accession, resolver)
}
