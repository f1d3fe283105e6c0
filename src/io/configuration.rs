//! Analysis constants and runtime configuration defaults

// Classifier input geometry
/// Side length of the square image the classifier expects
pub const INPUT_RESOLUTION: u32 = 224;
/// Number of colour channels fed to the classifier
pub const INPUT_CHANNELS: usize = 3;

// Maps 0..=255 onto -1.0..=1.0
/// Offset and divisor applied to every channel value
pub const PIXEL_OFFSET: f32 = 127.5;

/// Maximum number of ranked predictions kept from one classification
pub const MAX_RANKED_PREDICTIONS: usize = 5;
/// Number of runner-up predictions shown in a report
pub const MAX_ALTERNATIVES: usize = 3;

// Output settings
/// Suffix added to report filenames
pub const OUTPUT_SUFFIX: &str = "_analysis";
/// Extension of report files
pub const OUTPUT_EXTENSION: &str = "txt";
/// Image file extensions picked up when scanning a directory
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Logging
/// Filter directive used when `RUST_LOG` is unset
pub const DEFAULT_LOG_DIRECTIVE: &str = "lesionlens=info";
/// Filter directive used in quiet mode
pub const QUIET_LOG_DIRECTIVE: &str = "lesionlens=warn";
