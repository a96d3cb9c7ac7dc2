//! Assay modality descriptors.

use serde::{Deserialize, Serialize};

/// One assay modality inferred from a free-text design declaration.
///
/// `file_tag` is only set when several SDRF files exist and per-file
/// experiment-type comments were bound to this modality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssayType {
    pub measurement: String,
    pub technology: String,
    pub short_label: String,
    pub file_tag: Option<String>,
}

impl AssayType {
    pub fn new(measurement: &str, technology: &str, short_label: &str) -> Self {
        Self {
            measurement: measurement.to_string(),
            technology: technology.to_string(),
            short_label: short_label.to_string(),
            file_tag: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assay_type_serializes() {
        let assay = AssayType::new("transcription profiling", "DNA microarray", "GeneChip");
        let json = serde_json::to_string(&assay).expect("serialize assay type");
        let round: AssayType = serde_json::from_str(&json).expect("deserialize assay type");
        assert_eq!(round, assay);
    }
}
