//! ISA-TAB serialization.
//!
//! The conversion core hands over assembled sections and finished sheets;
//! this crate turns them into tab-delimited text and lays out the output
//! directory (`<dir>/<accession>/i_..._investigation.txt` and
//! `s_..._study_samples.txt`).

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use magetab_core::Conversion;
use magetab_model::{Investigation, Spreadsheet};

pub fn investigation_file_name(accession: &str) -> String {
    format!("i_{accession}_investigation.txt")
}

pub fn study_sample_file_name(accession: &str) -> String {
    format!("s_{accession}_study_samples.txt")
}

/// Writes the investigation as heading lines followed by field lines.
pub fn write_investigation<W: Write>(writer: &mut W, investigation: &Investigation) -> std::io::Result<()> {
    for section in &investigation.sections {
        writeln!(writer, "{}", section.heading)?;
        for line in &section.lines {
            writeln!(writer, "{line}")?;
        }
    }
    Ok(())
}

pub fn render_investigation(investigation: &Investigation) -> String {
    let mut buffer = Vec::new();
    write_investigation(&mut buffer, investigation).expect("write to Vec cannot fail");
    String::from_utf8(buffer).expect("investigation lines are UTF-8")
}

/// Writes a sheet as tab-joined header and rows.
pub fn write_spreadsheet<W: Write>(writer: &mut W, sheet: &Spreadsheet) -> std::io::Result<()> {
    writeln!(writer, "{}", sheet.headers.join("\t"))?;
    for row in &sheet.rows {
        writeln!(writer, "{}", row.join("\t"))?;
    }
    Ok(())
}

pub fn render_spreadsheet(sheet: &Spreadsheet) -> String {
    let mut buffer = Vec::new();
    write_spreadsheet(&mut buffer, sheet).expect("write to Vec cannot fail");
    String::from_utf8(buffer).expect("sheet cells are UTF-8")
}

/// Paths written for one conversion.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub directory: PathBuf,
    pub investigation: PathBuf,
    pub study_samples: Option<PathBuf>,
}

/// Writes a conversion under `<output_dir>/<accession>/`. The study-sample
/// file is skipped when the submission declared no SDRF.
pub fn write_conversion(output_dir: &Path, conversion: &Conversion) -> Result<OutputPaths> {
    let directory = output_dir.join(&conversion.accession);
    std::fs::create_dir_all(&directory)
        .with_context(|| format!("create output directory {}", directory.display()))?;

    let investigation = directory.join(investigation_file_name(&conversion.accession));
    let mut file = std::fs::File::create(&investigation)
        .with_context(|| format!("create {}", investigation.display()))?;
    write_investigation(&mut file, &conversion.investigation)
        .with_context(|| format!("write {}", investigation.display()))?;

    let study_samples = if conversion.sample_sheet.is_empty() {
        None
    } else {
        let path = directory.join(study_sample_file_name(&conversion.accession));
        let mut file = std::fs::File::create(&path)
            .with_context(|| format!("create {}", path.display()))?;
        write_spreadsheet(&mut file, &conversion.sample_sheet)
            .with_context(|| format!("write {}", path.display()))?;
        Some(path)
    };

    info!(directory = %directory.display(), "wrote conversion outputs");
    Ok(OutputPaths {
        directory,
        investigation,
        study_samples,
    })
}
