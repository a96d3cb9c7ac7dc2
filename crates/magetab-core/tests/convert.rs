//! End-to-end conversion tests with an in-memory SDRF resolver.

use std::collections::HashMap;
use std::path::PathBuf;

use magetab_core::{Conversion, convert_lines};
use magetab_ingest::{IngestError, SdrfResolver};
use magetab_model::Spreadsheet;

struct MapResolver {
    sheets: HashMap<String, Spreadsheet>,
}

impl MapResolver {
    fn new(entries: Vec<(&str, Spreadsheet)>) -> Self {
        Self {
            sheets: entries
                .into_iter()
                .map(|(name, sheet)| (name.to_string(), sheet))
                .collect(),
        }
    }
}

impl SdrfResolver for MapResolver {
    fn resolve(&self, _accession: &str, file_name: &str) -> magetab_ingest::Result<Spreadsheet> {
        self.sheets
            .get(file_name)
            .cloned()
            .ok_or_else(|| IngestError::SdrfNotFound {
                name: file_name.to_string(),
                dir: PathBuf::from("memory"),
            })
    }
}

fn sheet(headers: &[&str], rows: &[&[&str]]) -> Spreadsheet {
    Spreadsheet::new(
        headers.iter().map(|h| (*h).to_string()).collect(),
        rows.iter()
            .map(|row| row.iter().map(|c| (*c).to_string()).collect())
            .collect(),
    )
}

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|l| (*l).to_string()).collect()
}

fn convert(idf: &[&str], resolver: &MapResolver) -> Conversion {
    convert_lines(&lines(idf), "E-TEST-1", resolver).expect("conversion succeeds")
}

#[test]
fn single_sdrf_submission_converts_end_to_end() {
    let resolver = MapResolver::new(vec![(
        "a.sdrf.txt",
        sheet(
            &["Sample Name", "Protocol REF", "Protocol REF", "Extract Name"],
            &[&["S1", "P1", "P2", "E1"], &["S2", "P3", "", "E2"]],
        ),
    )]);
    let conversion = convert(
        &[
            "Investigation Title\tYeast growth study",
            "Experimental Design\ttranscription profiling by array",
            "Person Last Name\tSmith",
            "Public Release Date\t2011-03-02",
            "SDRF File\ta.sdrf.txt",
        ],
        &resolver,
    );

    assert_eq!(conversion.sdrf_files, vec!["a.sdrf.txt"]);
    assert_eq!(conversion.assay_types.len(), 1);
    assert_eq!(conversion.assay_types[0].short_label, "GeneChip");

    // The SDRF came back normalized, untouched by any merge.
    assert_eq!(
        conversion.sample_sheet.headers,
        vec!["Sample Name", "Protocol REF", "Protocol REF", "Extract Name"]
    );
    assert_eq!(conversion.sample_sheet.rows[1], vec!["S2", "P3", "", "E2"]);

    let assays = conversion
        .investigation
        .section("STUDY ASSAYS")
        .expect("assay section");
    assert_eq!(
        assays.lines[0],
        "Study Assay Measurement Type\ttranscription profiling"
    );
    assert_eq!(
        assays.lines[3],
        "Study Assay Technology Type\tDNA microarray"
    );
    assert_eq!(
        assays.lines[7],
        "Study Assay File Name\ta_E-TEST-1_GeneChip_assay.txt"
    );
}

#[test]
fn multi_sdrf_submission_merges_sample_tables() {
    let resolver = MapResolver::new(vec![
        (
            "one.sdrf.txt",
            sheet(
                &["Sample Name", "Age"],
                &[&["S1", "10"], &["S2", "20"]],
            ),
        ),
        (
            "two.sdrf.txt",
            sheet(&["Sample Name", "Extract Name"], &[&["S3", "E3"]]),
        ),
    ]);
    let conversion = convert(
        &[
            "Experimental Design\tChIP-seq and transcription profiling by array",
            "Comment[AEExperimentType]\tChIP-seq\ttranscription profiling by array",
            "SDRF File\tone.sdrf.txt\ttwo.sdrf.txt",
        ],
        &resolver,
    );

    assert_eq!(
        conversion.sample_sheet.headers,
        vec!["Sample Name", "Age", "Extract Name"]
    );
    assert_eq!(conversion.sample_sheet.rows.len(), 3);
    assert_eq!(conversion.sample_sheet.rows[0], vec!["S1", "10", "E3"]);
    assert_eq!(conversion.sample_sheet.rows[2], vec!["S3", "", ""]);

    // Per-file tags were bound to the matching modalities.
    let file_row = &conversion
        .investigation
        .section("STUDY ASSAYS")
        .expect("assay section")
        .lines[7];
    assert_eq!(
        file_row,
        "Study Assay File Name\ta_E-TEST-1_GeneChip_assay.txt\ta_E-TEST-1_ChIP-Seq_assay.txt"
    );
}

#[test]
fn tag_cardinality_mismatch_falls_back_to_generic_labels() {
    let resolver = MapResolver::new(vec![
        ("one.sdrf.txt", sheet(&["Sample Name"], &[&["S1"]])),
        ("two.sdrf.txt", sheet(&["Sample Name"], &[&["S2"]])),
    ]);
    let conversion = convert(
        &[
            "Experimental Design\tChIP-seq study",
            "Comment[AEExperimentType]\tChIP-seq",
            "SDRF File\tone.sdrf.txt\ttwo.sdrf.txt",
        ],
        &resolver,
    );
    assert!(conversion.assay_types.iter().all(|a| a.file_tag.is_none()));
}

#[test]
fn missing_sdrf_aborts_the_run() {
    let resolver = MapResolver::new(vec![]);
    let result = convert_lines(
        &lines(&["SDRF File\tabsent.sdrf.txt"]),
        "E-TEST-1",
        &resolver,
    );
    assert!(result.is_err());
}

#[test]
fn submission_without_sdrf_yields_empty_sample_sheet() {
    let resolver = MapResolver::new(vec![]);
    let conversion = convert(&["Investigation Title\tNo tables here"], &resolver);
    assert!(conversion.sample_sheet.is_empty());
    assert_eq!(conversion.investigation.sections.len(), 11);
}
