//! SDRF resolution.
//!
//! The conversion core never touches the filesystem or network directly: it
//! asks a resolver for the contents of each SDRF the IDF declares. Fetching
//! and caching are the resolver's problem.

use std::path::PathBuf;

use tracing::debug;

use magetab_model::Spreadsheet;

use crate::error::{IngestError, Result};
use crate::sdrf::read_sdrf_table;

/// Supplies SDRF contents for a file name declared in the IDF.
pub trait SdrfResolver {
    /// Returns the named SDRF as tab-split rows. A missing file is fatal
    /// for the conversion run.
    fn resolve(&self, accession: &str, file_name: &str) -> Result<Spreadsheet>;
}

/// Resolves SDRF names against a local directory, checking
/// `<root>/<accession>/<name>` then `<root>/<name>`.
#[derive(Debug, Clone)]
pub struct DirResolver {
    root: PathBuf,
}

impl DirResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SdrfResolver for DirResolver {
    fn resolve(&self, accession: &str, file_name: &str) -> Result<Spreadsheet> {
        let candidates = [self.root.join(accession).join(file_name), self.root.join(file_name)];
        for candidate in &candidates {
            if candidate.is_file() {
                debug!(path = %candidate.display(), "resolved SDRF");
                return read_sdrf_table(candidate);
            }
        }
        Err(IngestError::SdrfNotFound {
            name: file_name.to_string(),
            dir: self.root.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_accession_subdirectory_first() {
        let dir = tempfile::TempDir::new().unwrap();
        let nested = dir.path().join("E-TEST-1");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("a.sdrf.txt"), "Sample Name\nS1\n").unwrap();
        std::fs::write(dir.path().join("a.sdrf.txt"), "Sample Name\nS2\n").unwrap();

        let resolver = DirResolver::new(dir.path());
        let sheet = resolver.resolve("E-TEST-1", "a.sdrf.txt").unwrap();
        assert_eq!(sheet.rows, vec![vec!["S1".to_string()]]);
    }

    #[test]
    fn missing_sdrf_is_fatal() {
        let dir = tempfile::TempDir::new().unwrap();
        let resolver = DirResolver::new(dir.path());
        let result = resolver.resolve("E-TEST-1", "absent.sdrf.txt");
        assert!(matches!(result, Err(IngestError::SdrfNotFound { .. })));
    }
}
