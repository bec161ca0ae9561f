//! LogSynth Core
//!
//! Synthesizes labeled tabular event-log data for testing anomaly-detection
//! pipelines: builds a baseline of plausible log rows from an ordered field
//! generator registry, then corrupts a controlled fraction of rows with
//! field-specific corruption rules, stamping ground-truth `label` and
//! `anomaly_types` columns.

pub mod constants;
pub mod error;
pub mod logic;

// Re-export main types for convenience
pub use error::{SynthError, SynthResult};
pub use logic::dataset::{Dataset, Value};
pub use logic::generator::{build_dataset, FieldGenerator, GeneratorRegistry};
pub use logic::inject::{inject, CorruptionRule, InjectConfig, RuleSet};
