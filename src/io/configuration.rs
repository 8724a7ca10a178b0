//! Output layout constants and runtime configuration defaults

// Token file settings
/// Default token file written by `draw`
pub const DEFAULT_TOKENS_FILE: &str = "tokens.json";

// Image output settings
/// Directory created under the base path for composited images
pub const OUTPUT_DIRECTORY: &str = "output";
/// Zero-padded width of the token index in output filenames
pub const OUTPUT_INDEX_WIDTH: usize = 5;
/// Extension of composited images
pub const OUTPUT_EXTENSION: &str = "png";

// Layer templating
/// Opening delimiter of a feature placeholder in layer templates
pub const PLACEHOLDER_OPEN: char = '{';
/// Closing delimiter of a feature placeholder in layer templates
pub const PLACEHOLDER_CLOSE: char = '}';

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Refresh rate for the compositing progress bar
pub const PROGRESS_TICK_MS: u64 = 100;

// Reporting
/// Decimal places used when printing realized and expected percentages
pub const PERCENT_PRECISION: usize = 2;
