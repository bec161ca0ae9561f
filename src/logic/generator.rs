//! Field Generators
//!
//! Ordered registry of per-column value producers plus the dataset builder
//! that drives them. Generators draw all randomness from the caller's
//! random source; no other state survives between calls.
//!
//! The engine never inspects generator internals - anything implementing
//! `FieldGenerator` (including plain closures) can be registered.

use chrono::Utc;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::constants::{ACTION_VOCAB, LEVEL_VALID_MAX, USER_ID_DIGITS};
use crate::error::{SynthError, SynthResult};
use crate::logic::dataset::{Dataset, Value};

// ============================================================================
// FIELD GENERATOR TRAIT
// ============================================================================

/// Produces one value of a column's semantic type
pub trait FieldGenerator: Send + Sync {
    fn generate(&self, rng: &mut dyn RngCore) -> SynthResult<Value>;
}

/// Plain closures work as generators
impl<F> FieldGenerator for F
where
    F: Fn(&mut dyn RngCore) -> SynthResult<Value> + Send + Sync,
{
    fn generate(&self, rng: &mut dyn RngCore) -> SynthResult<Value> {
        self(rng)
    }
}

// ============================================================================
// GENERATOR REGISTRY
// ============================================================================

/// Ordered mapping from field name to generator
///
/// Registration order defines column order. Re-registering a name replaces
/// the generator in place, keeping its column position.
pub struct GeneratorRegistry {
    entries: Vec<(String, Box<dyn FieldGenerator>)>,
}

impl GeneratorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registry with the default four-field log schema
    pub fn with_defaults() -> Self {
        Self::new()
            .register("ts", TimestampGenerator)
            .register("level", LevelGenerator::default())
            .register("user", UserIdGenerator::default())
            .register("action", ActionGenerator::default())
    }

    /// Register a generator for a field (builder-style)
    pub fn register(mut self, name: &str, generator: impl FieldGenerator + 'static) -> Self {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = Box::new(generator);
        } else {
            self.entries.push((name.to_string(), Box::new(generator)));
        }
        self
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn FieldGenerator)> {
        self.entries
            .iter()
            .map(|(name, generator)| (name.as_str(), generator.as_ref()))
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ============================================================================
// DEFAULT GENERATORS
// ============================================================================

/// Current-time event timestamp
pub struct TimestampGenerator;

impl FieldGenerator for TimestampGenerator {
    fn generate(&self, _rng: &mut dyn RngCore) -> SynthResult<Value> {
        Ok(Value::Timestamp(Utc::now()))
    }
}

/// Severity level drawn uniformly from `0..max`
pub struct LevelGenerator {
    pub max: i64,
}

impl Default for LevelGenerator {
    fn default() -> Self {
        Self {
            max: LEVEL_VALID_MAX,
        }
    }
}

impl FieldGenerator for LevelGenerator {
    fn generate(&self, rng: &mut dyn RngCore) -> SynthResult<Value> {
        Ok(Value::Int(rng.gen_range(0..self.max)))
    }
}

/// Fixed-width numeric user id rendered as a string
pub struct UserIdGenerator {
    pub digits: usize,
}

impl Default for UserIdGenerator {
    fn default() -> Self {
        Self {
            digits: USER_ID_DIGITS,
        }
    }
}

impl FieldGenerator for UserIdGenerator {
    fn generate(&self, rng: &mut dyn RngCore) -> SynthResult<Value> {
        let mut id = String::with_capacity(self.digits);
        for _ in 0..self.digits {
            id.push(char::from(b'0' + rng.gen_range(0..10u8)));
        }
        Ok(Value::Text(id))
    }
}

/// Uniform draw from a closed action vocabulary
pub struct ActionGenerator {
    pub vocabulary: Vec<String>,
}

impl Default for ActionGenerator {
    fn default() -> Self {
        Self {
            vocabulary: ACTION_VOCAB.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FieldGenerator for ActionGenerator {
    fn generate(&self, rng: &mut dyn RngCore) -> SynthResult<Value> {
        self.vocabulary
            .choose(rng)
            .cloned()
            .map(Value::Text)
            .ok_or_else(|| SynthError::GeneratorFailed {
                field: "action".to_string(),
                message: "empty vocabulary".to_string(),
            })
    }
}

// ============================================================================
// DATASET BUILDER
// ============================================================================

/// Assemble a baseline dataset by invoking every generator once per row
///
/// Column order matches registry declaration order. `row_count == 0` yields
/// the declared columns and zero rows. Generator errors propagate unmodified.
pub fn build_dataset(
    registry: &GeneratorRegistry,
    row_count: usize,
    rng: &mut dyn RngCore,
) -> SynthResult<Dataset> {
    let mut data = Dataset::new(registry.field_names());
    for _ in 0..row_count {
        let mut row = Vec::with_capacity(registry.len());
        for (_, generator) in registry.iter() {
            row.push(generator.generate(rng)?);
        }
        data.push_row(row)?;
    }
    Ok(data)
}

// ============================================================================
// TESTS
// ============================================================================
