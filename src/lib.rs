pub mod errors;
pub mod operators;
pub mod value;
mod comparison;
mod matching;
mod path;

use errors::Result;
use tracing::{debug, trace};

pub use errors::EvalError;
pub use operators::{Operator, Registry};
pub use path::resolve_path;
pub use value::Datum;

/// The eligibility evaluator. Stateless aside from its operator registry,
/// which is built once at construction; `&Evaluator` is freely shareable
/// across threads.
pub struct Evaluator {
    ops: Registry,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            ops: Registry::with_builtins(),
        }
    }

    /// True iff every `(path, condition)` entry of `criteria` holds for the
    /// value resolved from `record` at that path. Empty criteria is
    /// vacuously true. Both arguments must be mappings at the top level.
    pub fn is_eligible(&self, record: &Datum, criteria: &Datum) -> Result<bool> {
        if !record.is_map() {
            return Err(EvalError::InvalidCriteria(
                "record must be a mapping at the top level".into(),
            ));
        }
        let rules = match criteria {
            Datum::Map(rules) => rules,
            _ => {
                return Err(EvalError::InvalidCriteria(
                    "criteria must be a mapping at the top level".into(),
                ))
            }
        };
        for (path, condition) in rules {
            trace!(path = %path, "checking criteria entry");
            let resolved = path::resolve_path(record, path);
            if !matching::match_condition(&self.ops, &resolved, condition)? {
                debug!(path = %path, "criteria entry not satisfied");
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience: evaluate with a default evaluator.
pub fn is_eligible(record: &Datum, criteria: &Datum) -> Result<bool> {
    Evaluator::new().is_eligible(record, criteria)
}

/// Convenience: parse both documents from JSON text and evaluate. Dates are
/// not promoted here; use [`Datum::from_json_with_dates`] and
/// [`is_eligible`] when the record carries RFC 3339 timestamps.
pub fn is_eligible_json(record_json: &str, criteria_json: &str) -> Result<bool> {
    let record: serde_json::Value = serde_json::from_str(record_json)
        .map_err(|e| EvalError::InvalidCriteria(format!("record is not valid JSON: {e}")))?;
    let criteria: serde_json::Value = serde_json::from_str(criteria_json)
        .map_err(|e| EvalError::InvalidCriteria(format!("criteria is not valid JSON: {e}")))?;
    is_eligible(&Datum::from(&record), &Datum::from(&criteria))
}
