//! Command implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use magetab_core::convert_idf;
use magetab_ingest::DirResolver;
use magetab_model::{AssayType, SectionKind};
use magetab_output::write_conversion;

use crate::cli::ConvertArgs;

/// What one `convert` invocation produced, for the summary printers.
#[derive(Debug, Serialize)]
pub struct ConvertResult {
    pub accession: String,
    pub sdrf_files: Vec<String>,
    pub assay_types: Vec<AssayType>,
    pub sample_rows: usize,
    pub sample_columns: usize,
    pub investigation_path: Option<PathBuf>,
    pub study_samples_path: Option<PathBuf>,
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let accession = match &args.accession {
        Some(accession) => accession.clone(),
        None => derive_accession(&args.idf)
            .context("cannot derive an accession from the IDF file name; pass --accession")?,
    };
    let idf_dir = args
        .idf
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let sdrf_dir = args.sdrf_dir.clone().unwrap_or_else(|| idf_dir.clone());
    let resolver = DirResolver::new(sdrf_dir);

    let conversion = convert_idf(&args.idf, &accession, &resolver)?;

    let (investigation_path, study_samples_path) = if args.dry_run {
        (None, None)
    } else {
        let output_dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| idf_dir.join("converted"));
        let paths = write_conversion(&output_dir, &conversion)?;
        (Some(paths.investigation), paths.study_samples)
    };

    Ok(ConvertResult {
        accession,
        sdrf_files: conversion.sdrf_files,
        assay_types: conversion.assay_types,
        sample_rows: conversion.sample_sheet.rows.len(),
        sample_columns: conversion.sample_sheet.headers.len(),
        investigation_path,
        study_samples_path,
    })
}

pub fn run_sections() {
    for kind in SectionKind::all() {
        let schema = kind.schema();
        println!("{}", schema.heading);
        for field in schema.fields {
            println!("  {field}");
        }
    }
}

/// Derives the accession from an IDF file name, e.g.
/// `E-GEOD-11172.idf.txt` -> `E-GEOD-11172`.
fn derive_accession(idf: &Path) -> Option<String> {
    let name = idf.file_name()?.to_str()?;
    let trimmed = name
        .trim_end_matches(".txt")
        .trim_end_matches(".idf");
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accession_strips_idf_suffixes() {
        assert_eq!(
            derive_accession(Path::new("data/E-GEOD-11172.idf.txt")),
            Some("E-GEOD-11172".to_string())
        );
        assert_eq!(
            derive_accession(Path::new("E-MEXP-31.idf")),
            Some("E-MEXP-31".to_string())
        );
        assert_eq!(
            derive_accession(Path::new("study.txt")),
            Some("study".to_string())
        );
    }
}
