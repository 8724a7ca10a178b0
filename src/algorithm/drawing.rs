use crate::algorithm::expander::expand_vectors;
use crate::algorithm::vector::Vector;
use crate::analysis::duplicates::DuplicateReport;
use crate::analysis::weights::WeightReport;
use crate::io::error::Result;
use crate::io::specification::Specification;

/// Outcome of one drawing run: the vectors and their diagnostics
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Drawing {
    /// Collection name from the specification
    pub name: String,
    /// Final vectors in expansion order
    pub vectors: Vec<Vector>,
    /// Combinations drawn more than once
    pub duplicates: DuplicateReport,
    /// Realized versus requested value frequencies
    pub weights: WeightReport,
}

impl Drawing {
    /// Expand the specification and compute both reports
    ///
    /// # Errors
    ///
    /// Returns an error if the count is negative or a feature has no
    /// positive weight
    pub fn from_specification(spec: &Specification) -> Result<Self> {
        let vectors = expand_vectors(&spec.catalog, spec.count)?;
        let duplicates = DuplicateReport::from_vectors(&vectors);
        let weights = WeightReport::verify(&spec.catalog, &vectors);

        Ok(Self {
            name: spec.name.clone(),
            vectors,
            duplicates,
            weights,
        })
    }

    /// Total number of draws, equal to the requested count
    pub fn draw_count(&self) -> usize {
        self.vectors.iter().map(Vector::count).sum()
    }

    /// Log the duplicate report followed by the weight verification
    pub fn log_reports(&self) {
        self.duplicates.log(&self.name);
        self.weights.log();
    }
}
