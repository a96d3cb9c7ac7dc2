//! Section assembly: classified IDF lines into canonical investigation
//! sections.
//!
//! Fixed-slot sections (factors, design, ontology sources) are written
//! directly as lines classify. Appendable sections (protocols, contacts,
//! publications) accumulate free lines and are resolved into canonical
//! slots in a second pass once the whole IDF has been consumed, keyed on
//! the label token; lines whose label matches no keyword are dropped.

use tracing::debug;

use magetab_model::{
    AssayType, Investigation, InvestigationSection, SectionKind, SlotBuffer,
};

use crate::assay;
use crate::classify::{LineClass, classify};

/// Field lines of the always-empty INVESTIGATION block; MAGE-TAB has no
/// investigation level, so these stay placeholders.
const INVESTIGATION_FIELDS: &[&str] = &[
    "Investigation Identifier",
    "Investigation Title",
    "Investigation Description",
    "Investigation Submission Date",
    "Investigation Public Release Date",
];

const INVESTIGATION_PUBLICATION_FIELDS: &[&str] = &[
    "Investigation PubMed ID",
    "Investigation Publication DOI",
    "Investigation Publication Author List",
    "Investigation Publication Title",
    "Investigation Publication Status",
    "Investigation Publication Status Term Accession Number",
    "Investigation Publication Status Term Source REF",
];

const INVESTIGATION_CONTACT_FIELDS: &[&str] = &[
    "Investigation Person Last Name",
    "Investigation Person First Name",
    "Investigation Person Mid Initials",
    "Investigation Person Email",
    "Investigation Person Phone",
    "Investigation Person Fax",
    "Investigation Person Address",
    "Investigation Person Affiliation",
    "Investigation Person Roles",
    "Investigation Person Roles Term Accession Number",
    "Investigation Person Roles Term Source REF",
];

/// Accumulates classified IDF lines and resolves them into an
/// [`Investigation`]. One assembler per conversion run; nothing is shared.
#[derive(Debug)]
pub struct SectionAssembler {
    protocol_lines: Vec<String>,
    contact_lines: Vec<String>,
    publication_lines: Vec<String>,
    description_lines: Vec<String>,
    study_lines: Vec<String>,
    date_lines: Vec<String>,
    factors: SlotBuffer,
    design: SlotBuffer,
    design_from_primary: bool,
    ontology: SlotBuffer,
    sdrf_files: Vec<String>,
    comment_tags: Vec<String>,
}

impl Default for SectionAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionAssembler {
    pub fn new() -> Self {
        Self {
            protocol_lines: Vec::new(),
            contact_lines: Vec::new(),
            publication_lines: Vec::new(),
            description_lines: Vec::new(),
            study_lines: Vec::new(),
            date_lines: Vec::new(),
            factors: SlotBuffer::new(SectionKind::Factors),
            design: SlotBuffer::new(SectionKind::Design),
            design_from_primary: false,
            ontology: SlotBuffer::new(SectionKind::OntologySources),
            sdrf_files: Vec::new(),
            comment_tags: Vec::new(),
        }
    }

    /// Feeds one raw IDF line through the classifier. Unrecognized lines
    /// leave the assembler untouched.
    pub fn push_line(&mut self, line: &str) {
        let Some(classified) = classify(line) else {
            debug!(line, "unclassified IDF line ignored");
            return;
        };
        match classified {
            LineClass::Protocol(line) => self.protocol_lines.push(line),
            LineClass::Description(line) => self.description_lines.push(line),
            LineClass::Contact(line) => self.contact_lines.push(line),
            LineClass::Publication(line) => self.publication_lines.push(line),
            LineClass::Factor { slot, line } => self.factors.assign(slot, line),
            LineClass::Design(line) => {
                self.design.assign(0, line);
                self.design_from_primary = true;
            }
            LineClass::DesignComment { line, tags } => {
                // Fallback only: a primary design declaration wins over the
                // experiment-type comment, whatever the line order.
                if !self.design_from_primary {
                    self.design.assign(0, line);
                }
                self.comment_tags = tags;
            }
            LineClass::SdrfFiles { line: _, files } => self.sdrf_files = files,
            LineClass::Study(line) => self.study_lines.push(line),
            LineClass::Date(line) => self.date_lines.push(line),
            LineClass::OntologySource { slot, line } => self.ontology.assign(slot, line),
        }
    }

    /// SDRF file names declared by the IDF, in declaration order.
    pub fn sdrf_files(&self) -> &[String] {
        &self.sdrf_files
    }

    /// The resolved design declaration (slot 0), if any line produced one.
    pub fn design_line(&self) -> Option<&str> {
        self.design.get(0)
    }

    /// Per-file experiment-type tags from `Comment[AEExperimentType]`.
    pub fn comment_tags(&self) -> &[String] {
        &self.comment_tags
    }

    /// Resolves all accumulated lines into investigation sections.
    pub fn finish(self, accession: &str, assay_types: &[AssayType]) -> Investigation {
        let mut sections = Vec::with_capacity(11);
        sections.push(InvestigationSection::new(
            "ONTOLOGY SOURCE REFERENCE",
            self.ontology.emit(),
        ));
        sections.push(InvestigationSection::new(
            "INVESTIGATION",
            to_lines(INVESTIGATION_FIELDS),
        ));
        sections.push(InvestigationSection::new(
            "INVESTIGATION PUBLICATIONS",
            to_lines(INVESTIGATION_PUBLICATION_FIELDS),
        ));
        sections.push(InvestigationSection::new(
            "INVESTIGATION CONTACTS",
            to_lines(INVESTIGATION_CONTACT_FIELDS),
        ));
        sections.push(InvestigationSection::new(
            "STUDY",
            self.study_block(accession),
        ));
        sections.push(InvestigationSection::new(
            "STUDY DESIGN DESCRIPTORS",
            self.design.emit(),
        ));
        sections.push(InvestigationSection::new(
            "STUDY PUBLICATIONS",
            resolve_publications(&self.publication_lines).emit(),
        ));
        sections.push(InvestigationSection::new(
            "STUDY FACTORS",
            self.factors.emit(),
        ));
        sections.push(build_assay_section(
            accession,
            assay_types,
            self.sdrf_files.len(),
        ));
        sections.push(InvestigationSection::new(
            "STUDY PROTOCOLS",
            resolve_protocols(&self.protocol_lines).emit(),
        ));
        sections.push(InvestigationSection::new(
            "STUDY CONTACTS",
            resolve_contacts(&self.contact_lines).emit(),
        ));
        Investigation { sections }
    }

    fn study_block(&self, accession: &str) -> Vec<String> {
        let mut lines = vec![format!("Study Identifier\t{accession}")];
        lines.extend(self.study_lines.iter().cloned());
        lines.push("Study Submission Date".to_string());
        lines.extend(self.date_lines.iter().cloned());
        lines.extend(self.description_lines.iter().cloned());
        lines.push(format!(
            "Study File Name\ts_{accession}_study_samples.txt"
        ));
        lines
    }
}

fn to_lines(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|field| (*field).to_string()).collect()
}

fn label_of(line: &str) -> &str {
    line.split('\t').next().unwrap_or(line)
}

/// Second pass over publication lines: slot by label keyword, most
/// specific keyword first.
fn resolve_publications(lines: &[String]) -> SlotBuffer {
    let mut buffer = SlotBuffer::new(SectionKind::Publications);
    for line in lines {
        let label = label_of(line);
        let slot = if label.contains("Status Term Accession") {
            Some(5)
        } else if label.contains("Status Term Source") {
            Some(6)
        } else if label.contains("Status") {
            Some(4)
        } else if label.contains("PubMed") {
            Some(0)
        } else if label.contains("DOI") {
            Some(1)
        } else if label.contains("List") {
            Some(2)
        } else if label.contains("Title") {
            Some(3)
        } else {
            None
        };
        match slot {
            Some(slot) => buffer.assign(slot, line.clone()),
            None => debug!(line = %line, "publication line matched no slot"),
        }
    }
    buffer
}

/// Second pass over protocol lines. MAGE-TAB protocol labels are flatter
/// than ISA's, so several slots also rewrite the label: accession and
/// source lines gain a "Type" qualifier, "Parameters" becomes "Parameters
/// Name", and Software/Hardware lines fold into "Components Name".
fn resolve_protocols(lines: &[String]) -> SlotBuffer {
    let mut buffer = SlotBuffer::new(SectionKind::Protocols);
    for line in lines {
        let label = label_of(line);
        if label.contains("Term Accession") {
            let line = if label.contains("Type Term Accession") {
                line.clone()
            } else {
                line.replacen("Term Accession", "Type Term Accession", 1)
            };
            buffer.assign(2, line);
        } else if label.contains("Term Source") {
            let line = if label.contains("Type Term Source") {
                line.clone()
            } else {
                line.replacen("Term Source", "Type Term Source", 1)
            };
            buffer.assign(3, line);
        } else if label.contains("Parameters") {
            let line = if label.contains("Parameters Name") {
                line.clone()
            } else {
                line.replacen("Parameters", "Parameters Name", 1)
            };
            buffer.assign(7, line);
        } else if label.contains("Software") || label.contains("Hardware") {
            let line = line
                .replacen("Software", "Components Name", 1)
                .replacen("Hardware", "Components Name", 1);
            buffer.assign(10, line);
        } else if label.contains("Description") {
            buffer.assign(4, line.clone());
        } else if label.contains("Name") {
            buffer.assign(0, line.clone());
        } else if label.contains("Type") {
            buffer.assign(1, line.clone());
        } else {
            debug!(line = %line, "protocol line matched no slot");
        }
    }
    buffer
}

/// Second pass over contact lines.
fn resolve_contacts(lines: &[String]) -> SlotBuffer {
    let mut buffer = SlotBuffer::new(SectionKind::Contacts);
    for line in lines {
        let label = label_of(line);
        let slot = if label.contains("Roles Term Accession") {
            Some(9)
        } else if label.contains("Roles Term Source") {
            Some(10)
        } else if label.contains("Roles") {
            Some(8)
        } else if label.contains("Last") {
            Some(0)
        } else if label.contains("First") {
            Some(1)
        } else if label.contains("Mid") {
            Some(2)
        } else if label.contains("Email") {
            Some(3)
        } else if label.contains("Phone") {
            Some(4)
        } else if label.contains("Fax") {
            Some(5)
        } else if label.contains("Address") {
            Some(6)
        } else if label.contains("Affiliation") {
            Some(7)
        } else {
            None
        };
        match slot {
            Some(slot) => buffer.assign(slot, line.clone()),
            None => debug!(line = %line, "contact line matched no slot"),
        }
    }
    buffer
}

/// Builds the STUDY ASSAYS section from inferred assay modalities. The
/// measurement and technology rows fan the triples out as tab-separated
/// values; the file-name row names one assay file per modality.
fn build_assay_section(
    accession: &str,
    assay_types: &[AssayType],
    sdrf_count: usize,
) -> InvestigationSection {
    let mut measurement = String::from("Study Assay Measurement Type");
    let mut technology = String::from("Study Assay Technology Type");
    for assay_type in assay_types {
        measurement.push('\t');
        measurement.push_str(&assay_type.measurement);
        technology.push('\t');
        technology.push_str(&assay_type.technology);
    }
    let mut file_row = String::from("Study Assay File Name");
    for tag in assay::assay_file_tags(assay_types, sdrf_count) {
        file_row.push('\t');
        file_row.push_str(&assay::assay_file_name(accession, &tag));
    }
    InvestigationSection::new(
        "STUDY ASSAYS",
        vec![
            measurement,
            "Study Assay Measurement Type Term Accession Number".to_string(),
            "Study Assay Measurement Type Term Source REF".to_string(),
            technology,
            "Study Assay Technology Type Term Accession Number".to_string(),
            "Study Assay Technology Type Term Source REF".to_string(),
            "Study Assay Technology Platform".to_string(),
            file_row,
        ],
    )
}
