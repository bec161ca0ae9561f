//! Central Configuration Constants
//!
//! Single source of truth for all generation and injection defaults.
//! To tune corruption magnitudes, only edit this file.

/// Default number of rows in a generated dataset
pub const DEFAULT_ROW_COUNT: usize = 100;

/// Default fraction of rows to corrupt (library default)
pub const DEFAULT_FRACTION: f64 = 0.05;

/// Fraction used by the CLI run
pub const DEFAULT_RUN_FRACTION: f64 = 0.2;

/// Seed used by the CLI run
pub const DEFAULT_RUN_SEED: u64 = 0;

/// Default fields-per-row corruption range (inclusive)
pub const DEFAULT_CORRUPT_MIN: usize = 1;
pub const DEFAULT_CORRUPT_MAX: usize = 2;

/// Number of rows shown in the CLI preview
pub const PREVIEW_ROWS: usize = 5;

// ============================================
// Baseline field domains
// ============================================

/// Valid severity levels are 0..LEVEL_VALID_MAX (exclusive)
pub const LEVEL_VALID_MAX: i64 = 20;

/// Digits in a well-formed user id
pub const USER_ID_DIGITS: usize = 4;

/// Closed action vocabulary
pub const ACTION_VOCAB: [&str; 4] = ["push", "pull", "commit", "add"];

// ============================================
// Corruption magnitudes
// ============================================

/// Out-of-range severity levels (inclusive)
pub const LEVEL_OUT_OF_RANGE_MIN: i64 = 50;
pub const LEVEL_OUT_OF_RANGE_MAX: i64 = 100;

/// Negative severity levels: -(1..=LEVEL_NEGATIVE_MAX)
pub const LEVEL_NEGATIVE_MAX: i64 = 9;

/// Oversized numeric user ids (inclusive)
pub const USER_HUGE_MIN: u64 = 100_000;
pub const USER_HUGE_MAX: u64 = 999_999;

/// Named non-numeric user ids
pub const USER_NON_NUMERIC: [&str; 3] = ["guest", "unknown", "root"];

/// Out-of-vocabulary actions
pub const ACTION_OOV: [&str; 4] = ["drop_db", "hack", "format_disk", "sudo"];

/// Near-miss typos of valid actions
pub const ACTION_TYPOS: [&str; 4] = ["cmomit", "pulll", "psuh", "addd"];

/// Injection-style action payload
pub const ACTION_PAYLOAD: &str = "<script>alert(1)</script>";

/// Future timestamp offsets, in days (half-open)
pub const FUTURE_DAYS_MIN: i64 = 365;
pub const FUTURE_DAYS_MAX: i64 = 3650;

/// Past timestamp offsets, in days (half-open)
pub const PAST_DAYS_MIN: i64 = 3650;
pub const PAST_DAYS_MAX: i64 = 36500;

// ============================================
// Appended label columns
// ============================================

/// Ground-truth label column (0 or 1)
pub const LABEL_COLUMN: &str = "label";

/// Comma-separated corruption tags column
pub const ANOMALY_TYPES_COLUMN: &str = "anomaly_types";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "LogSynth";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get row count from environment or use default
pub fn get_row_count() -> usize {
    std::env::var("LOGSYNTH_ROWS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_ROW_COUNT)
}

/// Get corruption fraction from environment or use the CLI default
pub fn get_fraction() -> f64 {
    std::env::var("LOGSYNTH_FRACTION")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_RUN_FRACTION)
}

/// Get injection seed from environment or use the CLI default
pub fn get_seed() -> u64 {
    std::env::var("LOGSYNTH_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_RUN_SEED)
}

/// Get fields-per-row corruption range from environment or use defaults
pub fn get_corrupt_range() -> (usize, usize) {
    let min = std::env::var("LOGSYNTH_CORRUPT_MIN")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_CORRUPT_MIN);
    let max = std::env::var("LOGSYNTH_CORRUPT_MAX")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_CORRUPT_MAX);
    (min, max)
}
