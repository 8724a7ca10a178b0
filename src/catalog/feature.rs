/// A single value of a feature together with its cycling weight
///
/// The weight is the number of times the value is consumed during one full
/// cycling pass. A value with weight 0 is never drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureValue {
    value: String,
    weight: u32,
}

impl FeatureValue {
    /// Create a weighted value
    pub fn new(value: impl Into<String>, weight: u32) -> Self {
        Self {
            value: value.into(),
            weight,
        }
    }

    /// The value as it appears in tokens and layer paths
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Number of draws per cycling pass
    pub const fn weight(&self) -> u32 {
        self.weight
    }
}

/// Named trait category with an ordered list of weighted values
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feature {
    name: String,
    values: Vec<FeatureValue>,
}

impl Feature {
    /// Create a feature from its name and values in cycling order
    pub fn new(name: impl Into<String>, values: Vec<FeatureValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Feature name, unique within a catalog
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Values in cycling order
    pub fn values(&self) -> &[FeatureValue] {
        &self.values
    }

    /// Weights parallel to `values()`
    pub fn weights(&self) -> Vec<u32> {
        self.values.iter().map(FeatureValue::weight).collect()
    }

    /// Sum of all value weights
    pub fn total_weight(&self) -> u64 {
        self.values.iter().map(|v| u64::from(v.weight)).sum()
    }

    /// Position of `value` in cycling order
    pub fn position(&self, value: &str) -> Option<usize> {
        self.values.iter().position(|v| v.value == value)
    }
}
