//! Injection Configuration
//!
//! Parameters for one injection run. Validation happens at call time,
//! before any mutation.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CORRUPT_MAX, DEFAULT_CORRUPT_MIN, DEFAULT_FRACTION};
use crate::error::{SynthError, SynthResult};

// ============================================================================
// INJECT CONFIG
// ============================================================================

/// Injection run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InjectConfig {
    /// Fraction of rows to corrupt, within [0, 1]
    pub fraction: f64,
    /// Seed for the injection random source; `None` means non-reproducible
    pub seed: Option<u64>,
    /// Inclusive (min, max) number of fields corrupted per selected row
    pub corrupt_range: (usize, usize),
}

impl Default for InjectConfig {
    fn default() -> Self {
        Self {
            fraction: DEFAULT_FRACTION,
            seed: None,
            corrupt_range: (DEFAULT_CORRUPT_MIN, DEFAULT_CORRUPT_MAX),
        }
    }
}

impl InjectConfig {
    /// Reproducible configuration with the given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn with_fraction(mut self, fraction: f64) -> Self {
        self.fraction = fraction;
        self
    }

    pub fn with_corrupt_range(mut self, min: usize, max: usize) -> Self {
        self.corrupt_range = (min, max);
        self
    }

    /// Check the configuration; rejects NaN and out-of-range fractions and
    /// degenerate corrupt ranges
    pub fn validate(&self) -> SynthResult<()> {
        if !(0.0..=1.0).contains(&self.fraction) {
            return Err(SynthError::InvalidFraction(self.fraction));
        }
        let (min, max) = self.corrupt_range;
        if min < 1 || min > max {
            return Err(SynthError::InvalidCorruptRange { min, max });
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = InjectConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fraction, DEFAULT_FRACTION);
        assert_eq!(config.corrupt_range, (1, 2));
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_seeded_config() {
        let config = InjectConfig::seeded(7).with_fraction(0.5).with_corrupt_range(1, 3);
        assert!(config.validate().is_ok());
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.fraction, 0.5);
        assert_eq!(config.corrupt_range, (1, 3));
    }

    #[test]
    fn test_fraction_bounds_rejected() {
        let negative = InjectConfig::default().with_fraction(-0.1);
        assert!(matches!(negative.validate(), Err(SynthError::InvalidFraction(_))));

        let too_big = InjectConfig::default().with_fraction(1.5);
        assert!(matches!(too_big.validate(), Err(SynthError::InvalidFraction(_))));

        let nan = InjectConfig::default().with_fraction(f64::NAN);
        assert!(matches!(nan.validate(), Err(SynthError::InvalidFraction(_))));
    }

    #[test]
    fn test_corrupt_range_rejected() {
        let zero_min = InjectConfig::default().with_corrupt_range(0, 2);
        assert!(matches!(
            zero_min.validate(),
            Err(SynthError::InvalidCorruptRange { min: 0, max: 2 })
        ));

        let inverted = InjectConfig::default().with_corrupt_range(3, 2);
        assert!(matches!(
            inverted.validate(),
            Err(SynthError::InvalidCorruptRange { min: 3, max: 2 })
        ));

        let single = InjectConfig::default().with_corrupt_range(1, 1);
        assert!(single.validate().is_ok(), "min == max is a valid range");
    }
}
