//! Feature catalog built from a drawing specification
//!
//! Features are named trait categories holding ordered, weighted values.
//! Both the feature order and the value order are significant: they fix the
//! cycling order and therefore the exact output of a drawing run.

/// Feature and weighted value types
pub mod feature;
/// Ordered collection of features and its construction from JSON
pub mod registry;

pub use feature::{Feature, FeatureValue};
pub use registry::{Catalog, FeatureTable};
