//! Feature-by-feature expansion of pending draws into weighted combinations

use crate::algorithm::cycler::WeightedCycler;
use crate::algorithm::vector::Vector;
use crate::catalog::{Catalog, Feature};
use crate::io::error::{Result, TraitError};
use std::collections::HashMap;

/// Expand `count` draws over every feature of the catalog
///
/// Starts from a single empty vector carrying the whole count and folds the
/// features in catalog order. The output is deterministic for a given catalog
/// and count, and the counts of the returned vectors always sum to `count`.
///
/// # Errors
///
/// Returns an error if:
/// - `count` is negative
/// - A feature has no value with a positive weight
pub fn expand_vectors(catalog: &Catalog, count: i64) -> Result<Vec<Vector>> {
    let count =
        usize::try_from(count).map_err(|_negative| TraitError::InvalidCount { count })?;

    if count == 0 {
        return Ok(Vec::new());
    }

    let mut vectors = vec![Vector::empty(count)];
    for feature in catalog.features() {
        vectors = add_feature(&vectors, feature)?;
        log::debug!(
            "Expanded feature '{}': {} distinct combinations",
            feature.name(),
            vectors.len()
        );
    }

    Ok(vectors)
}

/// Append one feature to every vector, drawing once per collapsed draw
///
/// A single cycler is shared by all input vectors, so a vector with count
/// `n` consumes `n` consecutive values and may split into several groups.
/// Groups keep the order in which their value was first drawn.
///
/// # Errors
///
/// Returns `InvalidFeatureWeights` if the feature cannot produce a value
pub fn add_feature(vectors: &[Vector], feature: &Feature) -> Result<Vec<Vector>> {
    let mut cycler = WeightedCycler::new(feature)?;
    let mut expanded = Vec::with_capacity(vectors.len());

    // Draws from one input vector share its prefix, so the value index alone
    // identifies the full key within that group.
    let mut slots: HashMap<usize, usize> = HashMap::new();
    let mut groups: Vec<(usize, usize)> = Vec::new();

    for vector in vectors {
        slots.clear();
        groups.clear();

        for _ in 0..vector.count() {
            let index = cycler.next_index()?;
            match slots.get(&index).and_then(|&slot| groups.get_mut(slot)) {
                Some((_, tally)) => *tally += 1,
                None => {
                    slots.insert(index, groups.len());
                    groups.push((index, 1));
                }
            }
        }

        for &(index, tally) in &groups {
            if let Some(value) = feature.values().get(index) {
                expanded.push(vector.extended(feature.name(), value.value(), tally));
            }
        }
    }

    Ok(expanded)
}
