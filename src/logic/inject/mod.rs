//! Anomaly Injection
//!
//! Corrupts a controlled fraction of dataset rows using per-field corruption
//! rules, stamping ground-truth `label` and `anomaly_types` columns.
//!
//! ## Structure
//! - `config`: injection parameters + call-time validation
//! - `rules`: extensible per-field corruption strategies
//! - `engine`: row/field selection and label bookkeeping
//!
//! ## Usage
//! ```ignore
//! use logsynth_core::logic::inject::{inject, InjectConfig, RuleSet};
//!
//! let config = InjectConfig::seeded(0).with_fraction(0.2);
//! let labeled = inject(&data, &fields, &config, &RuleSet::with_defaults())?;
//! ```

pub mod config;
pub mod engine;
pub mod rules;

// Re-export main types for convenience
pub use config::InjectConfig;
pub use engine::inject;
pub use rules::{
    ActionRule,
    Corruption,
    CorruptionRule,
    LevelRule,
    NullifyRule,
    RuleSet,
    TimestampRule,
    UserRule,
};
