//! Anomaly Injection Engine
//!
//! Selects rows and fields to corrupt, applies the per-field corruption
//! rules, and stamps ground-truth labels. One seeded random source drives
//! every draw (row selection, field count, field selection, variant choice,
//! corrupted values), so a fixed seed replays byte-identically.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use super::config::InjectConfig;
use super::rules::RuleSet;
use crate::constants::{ANOMALY_TYPES_COLUMN, LABEL_COLUMN};
use crate::error::{SynthError, SynthResult};
use crate::logic::dataset::{Dataset, Value};

// ============================================================================
// MAIN INJECTION FUNCTION
// ============================================================================

/// Corrupt a controlled fraction of rows, returning a labeled copy
///
/// The input dataset is never modified. Appends a `label` column (1 for
/// corrupted rows, 0 otherwise) and an `anomaly_types` column holding the
/// comma-separated corruption tags: `label == 1` exactly when
/// `anomaly_types` is non-empty.
///
/// Non-empty input always gets at least one corrupted row, even at
/// `fraction == 0` - a deliberate floor. Per selected row, the number of
/// corrupted fields is drawn from `corrupt_range`, clamped to the number of
/// available fields.
pub fn inject(
    data: &Dataset,
    field_names: &[String],
    config: &InjectConfig,
    rules: &RuleSet,
) -> SynthResult<Dataset> {
    config.validate()?;
    if field_names.is_empty() {
        return Err(SynthError::NoFields);
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Owned copy from the start; the caller's table is never aliased.
    let mut out = data.clone();
    out.add_column(LABEL_COLUMN, Value::Int(0));
    out.add_column(ANOMALY_TYPES_COLUMN, Value::Text(String::new()));

    let row_count = out.row_count();
    if row_count == 0 {
        return Ok(out);
    }

    let rows_to_corrupt = ((config.fraction * row_count as f64).ceil() as usize)
        .max(1)
        .min(row_count);

    log::debug!(
        "corrupting {} of {} rows (fraction {}, seed {:?})",
        rows_to_corrupt,
        row_count,
        config.fraction,
        config.seed
    );

    let (min_k, max_k) = config.corrupt_range;
    let mut records: Vec<Vec<String>> = vec![Vec::new(); row_count];

    for row_idx in index::sample(&mut rng, row_count, rows_to_corrupt) {
        let k = rng.gen_range(min_k..=max_k).min(field_names.len());
        for field_idx in index::sample(&mut rng, field_names.len(), k) {
            let field = &field_names[field_idx];
            let corruption = rules.rule_for(field).corrupt(field, &mut rng)?;
            out.set(row_idx, field, corruption.value)?;
            records[row_idx].push(corruption.tag);
        }
        out.set(row_idx, LABEL_COLUMN, Value::Int(1))?;
    }

    for (row_idx, tags) in records.iter().enumerate() {
        if !tags.is_empty() {
            out.set(row_idx, ANOMALY_TYPES_COLUMN, Value::Text(tags.join(", ")))?;
        }
    }

    Ok(out)
}

// ============================================================================
// TESTS
// ============================================================================
