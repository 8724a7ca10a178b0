use crate::catalog::{Feature, FeatureValue};
use crate::io::error::{Result, TraitError};

/// Deterministic weighted round-robin generator for one feature
///
/// Within every pass between resets, value `i` is emitted exactly
/// `weight[i]` times. Values are visited circularly from a cursor that sits
/// just past the last emitted value, so heavy values are interleaved with
/// light ones instead of being drained in a block.
#[derive(Clone, Debug)]
pub struct WeightedCycler<'a> {
    feature: &'a Feature,
    remaining: Vec<u32>,
    cursor: usize,
}

impl<'a> WeightedCycler<'a> {
    /// Create a cycler positioned at the first value with full weights
    ///
    /// # Errors
    ///
    /// Returns `InvalidFeatureWeights` if the feature has no value with a
    /// positive weight
    pub fn new(feature: &'a Feature) -> Result<Self> {
        let cycler = Self {
            feature,
            remaining: feature.weights(),
            cursor: 0,
        };

        if feature.total_weight() == 0 {
            return Err(cycler.exhausted());
        }

        Ok(cycler)
    }

    /// Draw the next value, starting a new pass once every weight is spent
    ///
    /// # Errors
    ///
    /// Returns `InvalidFeatureWeights` if nothing can be drawn even after a
    /// reset
    pub fn next_value(&mut self) -> Result<&'a FeatureValue> {
        let index = self.next_index()?;
        self.feature
            .values()
            .get(index)
            .ok_or_else(|| self.exhausted())
    }

    /// Same as [`Self::next_value`] but yields the position of the value
    ///
    /// # Errors
    ///
    /// Returns `InvalidFeatureWeights` if nothing can be drawn even after a
    /// reset
    pub fn next_index(&mut self) -> Result<usize> {
        if let Some(index) = self.take() {
            return Ok(index);
        }

        self.reset();
        self.take().ok_or_else(|| self.exhausted())
    }

    /// Restore the original weights and move the cursor back to the start
    pub fn reset(&mut self) {
        self.remaining.clear();
        self.remaining.extend(self.feature.values().iter().map(FeatureValue::weight));
        self.cursor = 0;
    }

    /// Index the next scan starts from
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Weights left in the current pass, parallel to the feature's values
    pub fn remaining(&self) -> &[u32] {
        &self.remaining
    }

    /// Feature this cycler draws from
    pub const fn feature(&self) -> &'a Feature {
        self.feature
    }

    fn exhausted(&self) -> TraitError {
        TraitError::InvalidFeatureWeights {
            feature: self.feature.name().to_string(),
        }
    }

    // Scans circularly from the cursor for the first value with weight left
    fn take(&mut self) -> Option<usize> {
        let len = self.remaining.len();

        for offset in 0..len {
            let index = (self.cursor + offset) % len;
            if let Some(weight) = self.remaining.get_mut(index) {
                if *weight > 0 {
                    *weight -= 1;
                    self.cursor = index + 1;
                    return Some(index);
                }
            }
        }

        None
    }
}
