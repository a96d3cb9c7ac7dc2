//! MAGE-TAB to ISA-TAB transformation engines.
//!
//! This crate holds the three places where inputs of unpredictable shape
//! are reconciled into a fixed output schema:
//!
//! - **classify** / **sections**: free-form IDF lines -> canonical
//!   fixed-slot investigation sections
//! - **assay**: free-text design declarations -> assay modality triples
//! - **protocol**: variable-length `Protocol REF` column chains -> uniform
//!   blocks
//! - **merge**: per-file sample tables -> one label-keyed table
//!
//! Everything here is pure and synchronous; file access lives in
//! `magetab-ingest`.

pub mod assay;
pub mod classify;
pub mod merge;
pub mod protocol;
pub mod sections;

pub use assay::{assay_file_name, disambiguate_file_tags, infer_assay_types};
pub use classify::{LineClass, classify, dedup_tab_tokens};
pub use merge::{IDENTITY_LABEL, flatten_table, merge_tables};
pub use protocol::normalize_protocol_blocks;
pub use sections::SectionAssembler;
