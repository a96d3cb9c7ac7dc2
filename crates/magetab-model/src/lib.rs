pub mod assay;
pub mod investigation;
pub mod section;
pub mod table;

pub use assay::AssayType;
pub use investigation::{Investigation, InvestigationSection};
pub use section::{SectionKind, SectionSchema, SlotBuffer};
pub use table::{SampleTable, Spreadsheet};
