use thiserror::Error;

/// Failures an evaluation can surface. Both are caller mistakes, not false
/// verdicts, and neither is retried internally.
#[derive(Debug, Error)]
pub enum EvalError {
    /// Malformed input: a non-mapping record or criteria at the top level,
    /// a logical operator whose operand is not a mapping of clauses, or an
    /// unparseable document handed to a JSON entry point.
    #[error("invalid criteria: {0}")]
    InvalidCriteria(String),

    /// A leaf condition referenced an operator name that is not registered.
    #[error("unsupported operation `{0}`")]
    UnsupportedOperation(String),
}

pub type Result<T> = std::result::Result<T, EvalError>;
