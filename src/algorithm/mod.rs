/// Weighted round-robin value generation for a single feature
pub mod cycler;
/// Complete drawing run: expansion plus diagnostics
pub mod drawing;
/// Feature-by-feature vector expansion with duplicate grouping
pub mod expander;
/// Combination vectors and their token serialization
pub mod vector;
