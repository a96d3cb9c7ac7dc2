//! IDF line classification.
//!
//! Rules run in a fixed order and the first match wins. Some prefixes are
//! substrings of others ("Publication DOI" vs "Publication"), so the order
//! is load-bearing. Every rule rewrites the MAGE-TAB label to its ISA-TAB
//! counterpart and keeps the tab-separated values verbatim; rewritten
//! labels never match a source rule again, which makes reclassification a
//! no-op. Lines matching no rule are inert.

/// Where a classified line lands in the investigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Free-append into STUDY PROTOCOLS; slotted in a second pass.
    Protocol(String),
    /// Study description line, emitted inside the STUDY block.
    Description(String),
    /// Free-append into STUDY CONTACTS; slotted in a second pass.
    Contact(String),
    /// Free-append into STUDY PUBLICATIONS; slotted in a second pass.
    Publication(String),
    /// Fixed STUDY FACTORS slot (0..=3).
    Factor { slot: usize, line: String },
    /// Primary design declaration, slot 0 of STUDY DESIGN DESCRIPTORS.
    Design(String),
    /// Fallback design declaration from `Comment[AEExperimentType]`.
    /// `tags` carries the per-file experiment types for later assay
    /// disambiguation.
    DesignComment { line: String, tags: Vec<String> },
    /// SDRF declaration; `files` holds the declared SDRF file names, which
    /// must all be resolved before table processing starts.
    SdrfFiles { line: String, files: Vec<String> },
    /// Investigation-level line demoted to study level.
    Study(String),
    /// Public release date line.
    Date(String),
    /// Ontology source slot (0..=3), duplicate tab tokens removed.
    OntologySource { slot: usize, line: String },
}

/// Case-insensitive prefix strip; the remainder keeps its original casing.
fn strip_prefix_ci<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    line.get(..prefix.len())
        .filter(|head| head.eq_ignore_ascii_case(prefix))
        .map(|_| &line[prefix.len()..])
}

/// Removes duplicate tab-separated tokens, preserving first-seen order.
///
/// GEO-derived ontology lines repeat tokens; a plain unordered set would
/// scramble them, so membership is tracked against the output list itself.
pub fn dedup_tab_tokens(line: &str) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for token in line.split('\t') {
        if !seen.contains(&token) {
            seen.push(token);
        }
    }
    seen.join("\t")
}

fn tab_values(line: &str) -> Vec<String> {
    line.split('\t')
        .skip(1)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classifies one raw IDF line. Returns `None` for unrecognized lines;
/// classification is best-effort, not exhaustive.
pub fn classify(line: &str) -> Option<LineClass> {
    if let Some(rest) = line.strip_prefix("Protocol") {
        return Some(LineClass::Protocol(format!("Study Protocol{rest}")));
    }
    if line.starts_with("Experiment Desc") {
        return Some(LineClass::Description(line.replacen(
            "Experiment",
            "Study",
            1,
        )));
    }
    if let Some(rest) = line.strip_prefix("Person") {
        return Some(LineClass::Contact(format!("Study Person{rest}")));
    }
    if let Some(rest) = line.strip_prefix("PubMed") {
        return Some(LineClass::Publication(format!("Study PubMed{rest}")));
    }
    if line.starts_with("Publication DOI") {
        // GEO-to-MAGE exports propagate PubMed IDs into the DOI field; a
        // genuine DOI always carries a dot.
        if line.contains('.') {
            return Some(LineClass::Publication(format!("Study {line}")));
        }
        return None;
    }
    if line.starts_with("Publication") && !line.contains("DOI") {
        return Some(LineClass::Publication(format!("Study {line}")));
    }
    if line.starts_with("Experimental Factor") && line.contains("Term Accession") {
        return Some(LineClass::Factor {
            slot: 2,
            line: line.replacen("Experimental", "Study", 1),
        });
    }
    if line.starts_with("Experimental Factor") && line.contains("Term Source") {
        return Some(LineClass::Factor {
            slot: 3,
            line: line.replacen("Experimental", "Study", 1),
        });
    }
    if let Some(rest) = strip_prefix_ci(line, "Experimental Factor Name") {
        return Some(LineClass::Factor {
            slot: 0,
            line: format!("Study Factor Name{rest}"),
        });
    }
    if let Some(rest) = strip_prefix_ci(line, "Experimental Factor Type") {
        return Some(LineClass::Factor {
            slot: 1,
            line: format!("Study Factor Type{rest}"),
        });
    }
    if line.contains("Experimental Design") && !line.contains("Experimental Design Term") {
        return Some(LineClass::Design(line.replacen(
            "Experimental Design",
            "Study Design Type",
            1,
        )));
    }
    if line.starts_with("Comment[AEExperimentType") {
        let tags = tab_values(line);
        let rewritten = match line.split_once('\t') {
            Some((_, values)) => format!("Study Design Type\t{values}"),
            None => "Study Design Type".to_string(),
        };
        return Some(LineClass::DesignComment {
            line: rewritten,
            tags,
        });
    }
    if line.starts_with("SDRF File") {
        return Some(LineClass::SdrfFiles {
            line: line.replacen("SDRF File", "Study Assay File Name", 1),
            files: tab_values(line),
        });
    }
    if let Some(rest) = line.strip_prefix("Investigation") {
        return Some(LineClass::Study(format!("Study{rest}")));
    }
    if line.starts_with("Public R") {
        return Some(LineClass::Date(line.replacen("Public", "Study Public", 1)));
    }
    for (slot, label) in [
        (0, "Term Source Name"),
        (1, "Term Source File"),
        (2, "Term Source Version"),
        (3, "Term Source Description"),
    ] {
        if line.starts_with(label) {
            return Some(LineClass::OntologySource {
                slot,
                line: dedup_tab_tokens(line),
            });
        }
    }
    None
}
