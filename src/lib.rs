//! Weighted trait combination drawing for generative token collections
//!
//! Features are drawn with a deterministic weighted round-robin cycler and
//! expanded one at a time into combinations with occurrence counts. The
//! result is checked for duplicated combinations and for how closely the
//! realized value frequencies follow the requested weights, then serialized
//! as tokens that can be composited into layered images.

#![forbid(unsafe_code)]

/// Weighted cycling, vector expansion and drawing runs
pub mod algorithm;
/// Duplicate and weight distribution diagnostics
pub mod analysis;
/// Features, weighted values and the catalog built from a specification
pub mod catalog;
/// Input/output operations and error handling
pub mod io;

pub use io::error::{Result, TraitError};
