use crate::algorithm::vector::Vector;
use crate::catalog::Catalog;
use crate::io::configuration::PERCENT_PRECISION;
use std::fmt;

/// Realized versus requested frequency of one feature value
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueTally {
    /// Value name
    pub value: String,
    /// Draws that landed on this value
    pub actual: usize,
    /// Requested weight of this value
    pub expected: u32,
}

/// Per-value tallies of one feature
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureTally {
    /// Feature name
    pub feature: String,
    /// Total draws over all values of the feature
    pub actual_total: usize,
    /// Sum of all requested weights of the feature
    pub expected_total: u64,
    /// Tallies in catalog value order
    pub values: Vec<ValueTally>,
}

impl FeatureTally {
    /// Share of draws for `tally` as a percentage of all draws of the feature
    pub fn actual_percent(&self, tally: &ValueTally) -> f64 {
        percent(tally.actual as f64, self.actual_total as f64)
    }

    /// Requested share for `tally` as a percentage of the feature's weight total
    pub fn expected_percent(&self, tally: &ValueTally) -> f64 {
        percent(f64::from(tally.expected), self.expected_total as f64)
    }

    /// Largest gap between realized and requested share, in percentage points
    pub fn max_deviation(&self) -> f64 {
        self.values
            .iter()
            .map(|t| (self.actual_percent(t) - self.expected_percent(t)).abs())
            .fold(0.0, f64::max)
    }
}

/// Comparison of realized value frequencies against requested weights
///
/// Purely diagnostic: building the report never alters the vectors and
/// never fails.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeightReport {
    features: Vec<FeatureTally>,
}

impl WeightReport {
    /// Tally every feature of `catalog` over the final vectors
    ///
    /// A vector with count `n` contributes `n` to the value it holds for each
    /// feature. Values that were never drawn appear with an actual count of 0.
    pub fn verify(catalog: &Catalog, vectors: &[Vector]) -> Self {
        let features = catalog
            .features()
            .iter()
            .map(|feature| {
                let mut actual = vec![0usize; feature.values().len()];
                for vector in vectors {
                    let position = vector
                        .value_of(feature.name())
                        .and_then(|value| feature.position(value));
                    if let Some(slot) = position.and_then(|p| actual.get_mut(p)) {
                        *slot += vector.count();
                    }
                }

                let values = feature
                    .values()
                    .iter()
                    .zip(&actual)
                    .map(|(value, &count)| ValueTally {
                        value: value.value().to_string(),
                        actual: count,
                        expected: value.weight(),
                    })
                    .collect();

                FeatureTally {
                    feature: feature.name().to_string(),
                    actual_total: actual.iter().sum(),
                    expected_total: feature.total_weight(),
                    values,
                }
            })
            .collect();

        Self { features }
    }

    /// Tallies in catalog feature order
    pub fn features(&self) -> &[FeatureTally] {
        &self.features
    }

    /// Tally for a single feature
    pub fn feature(&self, name: &str) -> Option<&FeatureTally> {
        self.features.iter().find(|f| f.feature == name)
    }

    /// Emit the report through the logger
    pub fn log(&self) {
        for line in self.to_string().lines() {
            log::info!("{line}");
        }
    }
}

impl fmt::Display for WeightReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = PERCENT_PRECISION;
        for feature in &self.features {
            for tally in &feature.values {
                writeln!(f, "{}:{}", feature.feature, tally.value)?;
                writeln!(
                    f,
                    "  Actual: {}/{}: {:.precision$}",
                    tally.actual,
                    feature.actual_total,
                    feature.actual_percent(tally)
                )?;
                writeln!(
                    f,
                    "  Expected: {}/{}: {:.precision$}",
                    tally.expected,
                    feature.expected_total,
                    feature.expected_percent(tally)
                )?;
            }
        }
        Ok(())
    }
}

fn percent(part: f64, whole: f64) -> f64 {
    if whole > 0.0 { part * 100.0 / whole } else { 0.0 }
}
