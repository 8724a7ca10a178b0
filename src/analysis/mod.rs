//! Diagnostics over the final vector list

/// Report of combinations drawn more than once
pub mod duplicates;
/// Realized versus requested weight verification
pub mod weights;
