//! Input/output collaborators around the drawing core

/// Command-line interface and logging setup
pub mod cli;
/// Output layout constants and runtime defaults
pub mod configuration;
/// Error types and path context
pub mod error;
/// Layered PNG compositing with missing-layer policies
pub mod image;
/// Layer path templates and their loading
pub mod layers;
/// Progress display for compositing
pub mod progress;
/// Drawing specification loading
pub mod specification;
/// Token file reading and writing
pub mod tokens;
