use std::cmp::Ordering;
use std::collections::HashMap;

use crate::comparison::cmp_values;
use crate::errors::{EvalError, Result};
use crate::value::Datum;

/// The closed operator set. Leaf conditions name one of these; anything
/// else fails evaluation at lookup time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Gt,
    Lt,
    Gte,
    Lte,
    In,
    And,
    Or,
}

/// Name → operator table, built once per evaluator and never mutated.
#[derive(Clone)]
pub struct Registry {
    inner: HashMap<&'static str, Operator>,
}

impl Registry {
    pub fn with_builtins() -> Self {
        let mut map = HashMap::new();
        map.insert("gt", Operator::Gt);
        map.insert("lt", Operator::Lt);
        map.insert("gte", Operator::Gte);
        map.insert("lte", Operator::Lte);
        map.insert("in", Operator::In);
        map.insert("and", Operator::And);
        map.insert("or", Operator::Or);
        Self { inner: map }
    }

    pub fn get(&self, name: &str) -> Option<Operator> {
        self.inner.get(name).copied()
    }

    /// Evaluate one `{operator: operand}` clause against a resolved value.
    pub fn evaluate(&self, name: &str, value: &Datum, operand: &Datum) -> Result<bool> {
        let op = self
            .get(name)
            .ok_or_else(|| EvalError::UnsupportedOperation(name.to_string()))?;
        match op {
            Operator::Gt => Ok(cmp_values(value, operand, |o| o == Ordering::Greater)),
            Operator::Lt => Ok(cmp_values(value, operand, |o| o == Ordering::Less)),
            Operator::Gte => Ok(cmp_values(value, operand, |o| o != Ordering::Less)),
            Operator::Lte => Ok(cmp_values(value, operand, |o| o != Ordering::Greater)),
            // Membership by strict equality. A non-sequence operand never
            // matches; it is not an error.
            Operator::In => match operand {
                Datum::Seq(choices) => Ok(choices.iter().any(|choice| choice == value)),
                _ => Ok(false),
            },
            Operator::And => self.all_clauses_hold(name, value, operand),
            Operator::Or => self.any_clause_holds(name, value, operand),
        }
    }

    fn all_clauses_hold(&self, name: &str, value: &Datum, operand: &Datum) -> Result<bool> {
        let clauses = logical_operand(name, operand)?;
        for (op, rhs) in clauses {
            if !self.evaluate(op, value, rhs)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn any_clause_holds(&self, name: &str, value: &Datum, operand: &Datum) -> Result<bool> {
        let clauses = logical_operand(name, operand)?;
        for (op, rhs) in clauses {
            if self.evaluate(op, value, rhs)? {
                return Ok(true);
            }
        }
        // vacuous existential: no clause can hold
        Ok(false)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

fn logical_operand<'a>(
    name: &str,
    operand: &'a Datum,
) -> Result<&'a std::collections::BTreeMap<String, Datum>> {
    match operand {
        Datum::Map(clauses) => Ok(clauses),
        _ => Err(EvalError::InvalidCriteria(format!(
            "`{name}` operand must be a mapping of operator clauses"
        ))),
    }
}
