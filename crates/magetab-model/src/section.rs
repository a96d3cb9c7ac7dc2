//! Canonical ISA-TAB investigation sections.
//!
//! Each section has a fixed field order defined by an immutable
//! [`SectionSchema`] (ordinal slot -> canonical field name). Per-run slot
//! state lives in [`SlotBuffer`], constructed fresh for every conversion so
//! nothing is shared across runs.

/// A canonical section with fixed slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    OntologySources,
    Design,
    Publications,
    Factors,
    Protocols,
    Contacts,
}

/// Immutable section schema: heading line plus field names in slot order.
#[derive(Debug, Clone, Copy)]
pub struct SectionSchema {
    pub heading: &'static str,
    pub fields: &'static [&'static str],
}

const ONTOLOGY_SOURCES: SectionSchema = SectionSchema {
    heading: "ONTOLOGY SOURCE REFERENCE",
    fields: &[
        "Term Source Name",
        "Term Source File",
        "Term Source Version",
        "Term Source Description",
    ],
};

const DESIGN: SectionSchema = SectionSchema {
    heading: "STUDY DESIGN DESCRIPTORS",
    fields: &[
        "Study Design Type",
        "Study Design Type Term Accession Number",
        "Study Design Type Term Source REF",
    ],
};

const PUBLICATIONS: SectionSchema = SectionSchema {
    heading: "STUDY PUBLICATIONS",
    fields: &[
        "Study PubMed ID",
        "Study Publication DOI",
        "Study Publication Author List",
        "Study Publication Title",
        "Study Publication Status",
        "Study Publication Status Term Accession Number",
        "Study Publication Status Term Source REF",
    ],
};

const FACTORS: SectionSchema = SectionSchema {
    heading: "STUDY FACTORS",
    fields: &[
        "Study Factor Name",
        "Study Factor Type",
        "Study Factor Type Term Accession Number",
        "Study Factor Type Term Source REF",
    ],
};

const PROTOCOLS: SectionSchema = SectionSchema {
    heading: "STUDY PROTOCOLS",
    fields: &[
        "Study Protocol Name",
        "Study Protocol Type",
        "Study Protocol Type Term Accession Number",
        "Study Protocol Type Term Source REF",
        "Study Protocol Description",
        "Study Protocol URI",
        "Study Protocol Version",
        "Study Protocol Parameters Name",
        "Study Protocol Parameters Name Term Accession Number",
        "Study Protocol Parameters Name Term Source REF",
        "Study Protocol Components Name",
        "Study Protocol Components Type",
        "Study Protocol Components Type Term Accession Number",
        "Study Protocol Components Type Term Source REF",
    ],
};

const CONTACTS: SectionSchema = SectionSchema {
    heading: "STUDY CONTACTS",
    fields: &[
        "Study Person Last Name",
        "Study Person First Name",
        "Study Person Mid Initials",
        "Study Person Email",
        "Study Person Phone",
        "Study Person Fax",
        "Study Person Address",
        "Study Person Affiliation",
        "Study Person Roles",
        "Study Person Roles Term Accession Number",
        "Study Person Roles Term Source REF",
    ],
};

impl SectionKind {
    pub fn schema(self) -> &'static SectionSchema {
        match self {
            SectionKind::OntologySources => &ONTOLOGY_SOURCES,
            SectionKind::Design => &DESIGN,
            SectionKind::Publications => &PUBLICATIONS,
            SectionKind::Factors => &FACTORS,
            SectionKind::Protocols => &PROTOCOLS,
            SectionKind::Contacts => &CONTACTS,
        }
    }

    /// All canonical sections in investigation-file order.
    pub fn all() -> &'static [SectionKind] {
        &[
            SectionKind::OntologySources,
            SectionKind::Design,
            SectionKind::Publications,
            SectionKind::Factors,
            SectionKind::Protocols,
            SectionKind::Contacts,
        ]
    }
}

/// Per-run slot state for one canonical section.
///
/// Assignment is last-write-wins; slots never filled emit the canonical
/// field name as an empty placeholder so the output schema keeps its fixed
/// width.
#[derive(Debug, Clone)]
pub struct SlotBuffer {
    kind: SectionKind,
    slots: Vec<Option<String>>,
}

impl SlotBuffer {
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            slots: vec![None; kind.schema().fields.len()],
        }
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn schema(&self) -> &'static SectionSchema {
        self.kind.schema()
    }

    /// Overwrites the line at `slot`. Later assignments win.
    pub fn assign(&mut self, slot: usize, line: String) {
        self.slots[slot] = Some(line);
    }

    pub fn get(&self, slot: usize) -> Option<&str> {
        self.slots.get(slot).and_then(|s| s.as_deref())
    }

    /// Emits every slot in canonical order, substituting the field name for
    /// slots that were never assigned.
    pub fn emit(&self) -> Vec<String> {
        self.schema()
            .fields
            .iter()
            .zip(&self.slots)
            .map(|(field, slot)| match slot {
                Some(line) => line.clone(),
                None => (*field).to_string(),
            })
            .collect()
    }
}
