use crate::algorithm::vector::Vector;
use std::fmt;

/// Combinations that more than one draw collapsed into
///
/// Duplicates are an expected outcome of exact weighted cycling over features
/// with few values, so the report is a warning for the operator and never
/// an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DuplicateReport {
    total: usize,
    duplicates: Vec<Vector>,
}

impl DuplicateReport {
    /// Collect every vector whose count exceeds one
    pub fn from_vectors(vectors: &[Vector]) -> Self {
        let duplicates: Vec<Vector> = vectors
            .iter()
            .filter(|v| v.is_duplicate())
            .cloned()
            .collect();
        let total = duplicates.iter().map(Vector::count).sum();

        Self { total, duplicates }
    }

    /// Sum of counts over duplicated combinations
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Duplicated combinations in output order
    pub fn duplicates(&self) -> &[Vector] {
        &self.duplicates
    }

    /// Whether every combination is unique
    pub fn is_empty(&self) -> bool {
        self.duplicates.is_empty()
    }

    /// Emit the report through the logger, one line per duplicate
    pub fn log(&self, collection: &str) {
        if self.is_empty() {
            log::info!("Duplicates: {collection}: 0");
            return;
        }

        log::warn!("Duplicates: {collection}: {}", self.total);
        for vector in &self.duplicates {
            log::warn!("  {vector}");
        }
    }
}

impl fmt::Display for DuplicateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Duplicates: {}", self.total)?;
        for vector in &self.duplicates {
            writeln!(f, "{vector}")?;
        }
        write!(f, "End of duplicates")
    }
}
