//! Assay type inference from free-text design declarations.
//!
//! A design line can declare several assay technologies at once
//! ("ChIP-Seq and transcription profiling by array"), so matching returns
//! every hit in vocabulary order.

use tracing::debug;

use magetab_model::AssayType;

struct VocabularyEntry {
    /// Case-insensitive substrings; any hit selects the entry.
    patterns: &'static [&'static str],
    measurement: &'static str,
    technology: &'static str,
    short_label: &'static str,
}

const VOCABULARY: &[VocabularyEntry] = &[
    VocabularyEntry {
        patterns: &["chip-chip"],
        measurement: "protein-DNA binding site identification",
        technology: "DNA microarray",
        short_label: "ChIP-Chip",
    },
    VocabularyEntry {
        patterns: &[
            "rna-seq",
            "transcription profiling by high throughput sequencing",
        ],
        measurement: "transcription profiling",
        technology: "nucleotide sequencing",
        short_label: "RNA-Seq",
    },
    VocabularyEntry {
        patterns: &["transcription profiling by array"],
        measurement: "transcription profiling",
        technology: "DNA microarray",
        short_label: "GeneChip",
    },
    VocabularyEntry {
        patterns: &["methylation profiling by array"],
        measurement: "DNA methylation profiling",
        technology: "DNA microarray",
        short_label: "Me-Chip",
    },
    VocabularyEntry {
        patterns: &["comparative genomic hybridization by array"],
        measurement: "comparative genomic hybridization",
        technology: "DNA microarray",
        short_label: "CGH-Chip",
    },
    VocabularyEntry {
        patterns: &["genotyping by array"],
        measurement: "SNP analysis",
        technology: "DNA microarray",
        short_label: "SNPChip",
    },
    VocabularyEntry {
        patterns: &["chip-seq"],
        measurement: "protein-DNA binding site identification",
        technology: "nucleotide sequencing",
        short_label: "ChIP-Seq",
    },
];

/// Derives assay modalities from a design-type declaration line. Every
/// matching vocabulary entry is returned, in table order.
pub fn infer_assay_types(line: &str) -> Vec<AssayType> {
    let lowered = line.to_lowercase();
    VOCABULARY
        .iter()
        .filter(|entry| entry.patterns.iter().any(|p| lowered.contains(p)))
        .map(|entry| AssayType::new(entry.measurement, entry.technology, entry.short_label))
        .collect()
}

/// Binds per-file experiment-type tags to inferred assay types.
///
/// Only meaningful when several SDRFs exist; the caller checks that the
/// tag count matches the SDRF count and falls back to the generic triple
/// list otherwise. A tag containing "chip-seq" binds to the sequencing
/// ChIP modality, a tag containing "transcription profiling by array" to
/// the array transcription modality; both are normalized to the short
/// labels used in assay file names. Other tags bind to nothing and the
/// affected modality keeps its short label.
pub fn disambiguate_file_tags(assay_types: &mut [AssayType], tags: &[String]) {
    for tag in tags {
        let lowered = tag.to_lowercase();
        if lowered.contains("chip-seq") {
            let normalized = tag.replace("ChIP-seq", "ChIP-Seq");
            bind_tag(
                assay_types,
                "protein-DNA binding site identification",
                "nucleotide sequencing",
                &normalized,
            );
        }
        if lowered.contains("transcription profiling by array") {
            let normalized = tag.replace("transcription profiling by array", "GeneChip");
            bind_tag(
                assay_types,
                "transcription profiling",
                "DNA microarray",
                &normalized,
            );
        }
    }
}

fn bind_tag(assay_types: &mut [AssayType], measurement: &str, technology: &str, tag: &str) {
    for assay_type in assay_types.iter_mut() {
        if assay_type.measurement.eq_ignore_ascii_case(measurement)
            && assay_type.technology.eq_ignore_ascii_case(technology)
        {
            debug!(short_label = %assay_type.short_label, tag, "bound file tag");
            assay_type.file_tag = Some(tag.to_string());
        }
    }
}

/// File tags for the assay file-name row, one per modality: the short
/// label in the single-SDRF case, the bound file tag (short label when
/// unbound) otherwise. Whitespace becomes `_` so tags survive as file
/// name segments.
pub fn assay_file_tags(assay_types: &[AssayType], sdrf_count: usize) -> Vec<String> {
    assay_types
        .iter()
        .map(|assay_type| {
            let tag = if sdrf_count > 1 {
                assay_type
                    .file_tag
                    .as_deref()
                    .unwrap_or(&assay_type.short_label)
            } else {
                &assay_type.short_label
            };
            tag.split_whitespace().collect::<Vec<_>>().join("_")
        })
        .collect()
}

pub fn assay_file_name(accession: &str, tag: &str) -> String {
    format!("a_{accession}_{tag}_assay.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_technology_line_yields_all_triples_in_order() {
        let types = infer_assay_types("ChIP-Seq and transcription profiling by array");
        assert_eq!(types.len(), 2);
        assert_eq!(types[0].measurement, "transcription profiling");
        assert_eq!(types[0].technology, "DNA microarray");
        assert_eq!(types[0].short_label, "GeneChip");
        assert_eq!(types[1].measurement, "protein-DNA binding site identification");
        assert_eq!(types[1].technology, "nucleotide sequencing");
        assert_eq!(types[1].short_label, "ChIP-Seq");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let types = infer_assay_types("Study Design Type\tRNA-SEQ of yeast");
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].short_label, "RNA-Seq");
    }

    #[test]
    fn chip_chip_does_not_trigger_chip_seq() {
        let types = infer_assay_types("ChIP-Chip of mouse");
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].short_label, "ChIP-Chip");
        assert_eq!(types[0].technology, "DNA microarray");
    }

    #[test]
    fn unmatched_line_yields_nothing() {
        assert!(infer_assay_types("Study Design Type").is_empty());
    }

    #[test]
    fn file_tags_bind_to_matching_modalities() {
        let mut types =
            infer_assay_types("ChIP-seq and transcription profiling by array study");
        let tags = vec![
            "ChIP-seq".to_string(),
            "transcription profiling by array".to_string(),
        ];
        disambiguate_file_tags(&mut types, &tags);
        assert_eq!(types[0].file_tag.as_deref(), Some("GeneChip"));
        assert_eq!(types[1].file_tag.as_deref(), Some("ChIP-Seq"));
    }

    #[test]
    fn file_tag_whitespace_becomes_underscores() {
        let mut types = infer_assay_types("transcription profiling by array");
        disambiguate_file_tags(
            &mut types,
            &["extra transcription profiling by array run".to_string()],
        );
        let tags = assay_file_tags(&types, 2);
        assert_eq!(tags, vec!["extra_GeneChip_run"]);
        assert_eq!(
            assay_file_name("E-TEST-1", &tags[0]),
            "a_E-TEST-1_extra_GeneChip_run_assay.txt"
        );
    }

    #[test]
    fn single_sdrf_uses_short_labels() {
        let mut types = infer_assay_types("ChIP-Seq");
        types[0].file_tag = Some("ignored".to_string());
        assert_eq!(assay_file_tags(&types, 1), vec!["ChIP-Seq"]);
    }
}
