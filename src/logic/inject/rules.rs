//! Corruption Rules (Extensible)
//!
//! Per-field corruption strategies. Each rule replaces a cell with a value
//! that violates the field's normal domain and returns a
//! `"<field>:<variant>"` tag identifying what was done. New field types are
//! supported by registering a rule - the engine is never edited.
//!
//! Fields with no registered rule fall back to [`NullifyRule`].

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use rand::{Rng, RngCore};

use crate::constants::{
    ACTION_OOV, ACTION_PAYLOAD, ACTION_TYPOS, FUTURE_DAYS_MAX, FUTURE_DAYS_MIN,
    LEVEL_NEGATIVE_MAX, LEVEL_OUT_OF_RANGE_MAX, LEVEL_OUT_OF_RANGE_MIN, PAST_DAYS_MAX,
    PAST_DAYS_MIN, USER_HUGE_MAX, USER_HUGE_MIN, USER_NON_NUMERIC,
};
use crate::error::SynthResult;
use crate::logic::dataset::Value;

// ============================================================================
// CORRUPTION RULE TRAIT
// ============================================================================

/// Replacement value plus the tag recorded in `anomaly_types`
#[derive(Debug, Clone, PartialEq)]
pub struct Corruption {
    pub value: Value,
    pub tag: String,
}

/// Per-field corruption strategy
///
/// All randomness (variant choice and corrupted values) must come from the
/// caller's random source so a seeded run replays identically.
pub trait CorruptionRule: Send + Sync {
    fn corrupt(&self, field: &str, rng: &mut dyn RngCore) -> SynthResult<Corruption>;
}

fn tagged(field: &str, variant: &str, value: Value) -> Corruption {
    Corruption {
        value,
        tag: format!("{}:{}", field, variant),
    }
}

// ============================================================================
// BUILT-IN RULES
// ============================================================================

/// Severity level escapes its valid domain or loses its integer type
pub struct LevelRule;

impl CorruptionRule for LevelRule {
    fn corrupt(&self, field: &str, rng: &mut dyn RngCore) -> SynthResult<Corruption> {
        let corruption = match rng.gen_range(0..3) {
            0 => tagged(
                field,
                "out_of_range",
                Value::Int(rng.gen_range(LEVEL_OUT_OF_RANGE_MIN..=LEVEL_OUT_OF_RANGE_MAX)),
            ),
            1 => tagged(
                field,
                "negative",
                Value::Int(-rng.gen_range(1..=LEVEL_NEGATIVE_MAX)),
            ),
            _ => tagged(field, "string", Value::Null),
        };
        Ok(corruption)
    }
}

/// User id violates the fixed-width numeric format
pub struct UserRule;

impl CorruptionRule for UserRule {
    fn corrupt(&self, field: &str, rng: &mut dyn RngCore) -> SynthResult<Corruption> {
        let corruption = match rng.gen_range(0..2) {
            0 => tagged(
                field,
                "huge",
                Value::Text(rng.gen_range(USER_HUGE_MIN..=USER_HUGE_MAX).to_string()),
            ),
            _ => {
                let name = USER_NON_NUMERIC[rng.gen_range(0..USER_NON_NUMERIC.len())];
                tagged(field, "non_numeric", Value::from(name))
            }
        };
        Ok(corruption)
    }
}

/// Action leaves the closed vocabulary: out-of-vocabulary command, near-miss
/// typo, or injection-style payload
pub struct ActionRule;

impl CorruptionRule for ActionRule {
    fn corrupt(&self, field: &str, rng: &mut dyn RngCore) -> SynthResult<Corruption> {
        let corruption = match rng.gen_range(0..3) {
            0 => {
                let action = ACTION_OOV[rng.gen_range(0..ACTION_OOV.len())];
                tagged(field, "oov", Value::from(action))
            }
            1 => {
                let action = ACTION_TYPOS[rng.gen_range(0..ACTION_TYPOS.len())];
                tagged(field, "typo", Value::from(action))
            }
            _ => tagged(field, "payload", Value::from(ACTION_PAYLOAD)),
        };
        Ok(corruption)
    }
}

/// Timestamp pushed implausibly far from a fixed reference instant
///
/// The reference is captured at construction, not per call, so two seeded
/// runs sharing one rule set produce identical output.
pub struct TimestampRule {
    pub reference: DateTime<Utc>,
    /// Future offsets in days, half-open
    pub future_days: (i64, i64),
    /// Past offsets in days, half-open
    pub past_days: (i64, i64),
}

impl Default for TimestampRule {
    fn default() -> Self {
        Self {
            reference: Utc::now(),
            future_days: (FUTURE_DAYS_MIN, FUTURE_DAYS_MAX),
            past_days: (PAST_DAYS_MIN, PAST_DAYS_MAX),
        }
    }
}

impl TimestampRule {
    /// Rule anchored at a specific reference instant
    pub fn anchored(reference: DateTime<Utc>) -> Self {
        Self {
            reference,
            ..Default::default()
        }
    }
}

impl CorruptionRule for TimestampRule {
    fn corrupt(&self, field: &str, rng: &mut dyn RngCore) -> SynthResult<Corruption> {
        let corruption = if rng.gen_range(0..2) == 0 {
            let days = rng.gen_range(self.future_days.0..self.future_days.1);
            tagged(
                field,
                "future",
                Value::Timestamp(self.reference + Duration::days(days)),
            )
        } else {
            let days = rng.gen_range(self.past_days.0..self.past_days.1);
            tagged(
                field,
                "past",
                Value::Timestamp(self.reference - Duration::days(days)),
            )
        };
        Ok(corruption)
    }
}

/// Generic fallback for unrecognized fields: blank the cell
pub struct NullifyRule;

impl CorruptionRule for NullifyRule {
    fn corrupt(&self, field: &str, _rng: &mut dyn RngCore) -> SynthResult<Corruption> {
        Ok(tagged(field, "nan", Value::Null))
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// Strategy map from field name to corruption rule
pub struct RuleSet {
    rules: HashMap<String, Box<dyn CorruptionRule>>,
    fallback: Box<dyn CorruptionRule>,
}

impl RuleSet {
    /// Empty rule set; every field falls back to nullify
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
            fallback: Box::new(NullifyRule),
        }
    }

    /// Rules for the default log schema
    pub fn with_defaults() -> Self {
        let mut set = Self::new();
        set.register("ts", TimestampRule::default());
        set.register("level", LevelRule);
        set.register("user", UserRule);
        set.register("action", ActionRule);
        set
    }

    /// Register (or replace) the rule for a field
    pub fn register(&mut self, field: &str, rule: impl CorruptionRule + 'static) {
        self.rules.insert(field.to_string(), Box::new(rule));
    }

    /// Rule for a field, falling back to the generic nullify rule
    pub fn rule_for(&self, field: &str) -> &dyn CorruptionRule {
        self.rules
            .get(field)
            .map(|rule| rule.as_ref())
            .unwrap_or(self.fallback.as_ref())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn variant_of<'a>(corruption: &'a Corruption, field: &str) -> &'a str {
        corruption
            .tag
            .strip_prefix(&format!("{}:", field))
            .expect("tag must be prefixed with the field name")
    }

    #[test]
    fn test_level_rule_variants_escape_domain() {
        let rule = LevelRule;
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = HashSet::new();

        for _ in 0..300 {
            let corruption = rule.corrupt("level", &mut rng).unwrap();
            let variant = variant_of(&corruption, "level").to_string();
            match variant.as_str() {
                "out_of_range" => {
                    let level = corruption.value.as_int().unwrap();
                    assert!(level >= LEVEL_OUT_OF_RANGE_MIN, "not out of range: {}", level);
                }
                "negative" => {
                    let level = corruption.value.as_int().unwrap();
                    assert!(level < 0, "not negative: {}", level);
                }
                "string" => assert!(corruption.value.is_null()),
                other => panic!("unexpected level variant: {}", other),
            }
            seen.insert(variant);
        }
        assert_eq!(seen.len(), 3, "all level variants must be reachable");
    }

    #[test]
    fn test_user_rule_breaks_id_format() {
        let rule = UserRule;
        let mut rng = StdRng::seed_from_u64(12);
        let mut seen = HashSet::new();

        for _ in 0..200 {
            let corruption = rule.corrupt("user", &mut rng).unwrap();
            let variant = variant_of(&corruption, "user").to_string();
            let id = corruption.value.as_text().unwrap();
            match variant.as_str() {
                "huge" => {
                    let numeric: u64 = id.parse().expect("huge id is still numeric");
                    assert!((USER_HUGE_MIN..=USER_HUGE_MAX).contains(&numeric));
                }
                "non_numeric" => {
                    assert!(USER_NON_NUMERIC.contains(&id), "unexpected id: {}", id);
                }
                other => panic!("unexpected user variant: {}", other),
            }
            seen.insert(variant);
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_action_rule_leaves_vocabulary() {
        let rule = ActionRule;
        let mut rng = StdRng::seed_from_u64(13);
        let mut seen = HashSet::new();

        for _ in 0..200 {
            let corruption = rule.corrupt("action", &mut rng).unwrap();
            let variant = variant_of(&corruption, "action").to_string();
            let action = corruption.value.as_text().unwrap();
            match variant.as_str() {
                "oov" => assert!(ACTION_OOV.contains(&action)),
                "typo" => assert!(ACTION_TYPOS.contains(&action)),
                "payload" => assert_eq!(action, ACTION_PAYLOAD),
                other => panic!("unexpected action variant: {}", other),
            }
            seen.insert(variant);
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_timestamp_rule_violates_plausibility() {
        let reference = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let rule = TimestampRule::anchored(reference);
        let mut rng = StdRng::seed_from_u64(14);
        let mut seen = HashSet::new();

        for _ in 0..200 {
            let corruption = rule.corrupt("ts", &mut rng).unwrap();
            let variant = variant_of(&corruption, "ts").to_string();
            let ts = corruption.value.as_timestamp().unwrap();
            match variant.as_str() {
                "future" => {
                    assert!(ts >= reference + Duration::days(FUTURE_DAYS_MIN));
                    assert!(ts < reference + Duration::days(FUTURE_DAYS_MAX));
                }
                "past" => {
                    assert!(ts <= reference - Duration::days(PAST_DAYS_MIN));
                    assert!(ts > reference - Duration::days(PAST_DAYS_MAX));
                }
                other => panic!("unexpected ts variant: {}", other),
            }
            seen.insert(variant);
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_nullify_rule_tags_with_field_name() {
        let rule = NullifyRule;
        let mut rng = StdRng::seed_from_u64(15);
        let corruption = rule.corrupt("host", &mut rng).unwrap();

        assert_eq!(corruption.tag, "host:nan");
        assert!(corruption.value.is_null());
    }

    #[test]
    fn test_rule_set_falls_back_for_unknown_field() {
        let set = RuleSet::with_defaults();
        let mut rng = StdRng::seed_from_u64(16);

        let corruption = set.rule_for("host").corrupt("host", &mut rng).unwrap();
        assert_eq!(corruption.tag, "host:nan");
        assert!(corruption.value.is_null());
    }

    #[test]
    fn test_rule_set_register_overrides() {
        let mut set = RuleSet::with_defaults();
        set.register("level", NullifyRule);
        let mut rng = StdRng::seed_from_u64(17);

        let corruption = set.rule_for("level").corrupt("level", &mut rng).unwrap();
        assert_eq!(corruption.tag, "level:nan", "registered rule must win");
    }
}
