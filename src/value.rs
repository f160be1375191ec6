use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// The structured-value domain records and criteria are built from.
///
/// An explicit tagged union instead of `serde_json::Value` so that the date
/// variant exists and every branch in matching is an exhaustive match.
#[derive(Debug, Clone)]
pub enum Datum {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Date(DateTime<Utc>),
    Seq(Vec<Datum>),
    Map(BTreeMap<String, Datum>),
}

impl Datum {
    /// True for the composite kinds (mapping or sequence), false for
    /// primitives, dates and null.
    pub fn is_composite(&self) -> bool {
        matches!(self, Datum::Seq(_) | Datum::Map(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Datum::Map(_))
    }

    /// Structural conversion from JSON, except strings that parse as
    /// RFC 3339 timestamps become `Date`. Records serialized with their
    /// timestamps as strings go through here; plain conversion (`From`)
    /// leaves every string a string.
    pub fn from_json_with_dates(value: &Value) -> Datum {
        match value {
            Value::String(s) => match DateTime::parse_from_rfc3339(s) {
                Ok(dt) => Datum::Date(dt.with_timezone(&Utc)),
                Err(_) => Datum::String(s.clone()),
            },
            Value::Array(items) => {
                Datum::Seq(items.iter().map(Datum::from_json_with_dates).collect())
            }
            Value::Object(fields) => Datum::Map(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), Datum::from_json_with_dates(v)))
                    .collect(),
            ),
            other => other.into(),
        }
    }
}

/// Strict same-variant equality. Numbers live in a single f64 domain, so
/// `5 == 5.0`; dates compare by epoch milliseconds regardless of how they
/// were constructed. No cross-type coercion.
impl PartialEq for Datum {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Datum::Null, Datum::Null) => true,
            (Datum::Bool(a), Datum::Bool(b)) => a == b,
            (Datum::Number(a), Datum::Number(b)) => a == b,
            (Datum::String(a), Datum::String(b)) => a == b,
            (Datum::Date(a), Datum::Date(b)) => {
                a.timestamp_millis() == b.timestamp_millis()
            }
            (Datum::Seq(a), Datum::Seq(b)) => a == b,
            (Datum::Map(a), Datum::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl From<&Value> for Datum {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Datum::Null,
            Value::Bool(b) => Datum::Bool(*b),
            Value::Number(n) => Datum::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => Datum::String(s.clone()),
            Value::Array(items) => Datum::Seq(items.iter().map(Datum::from).collect()),
            Value::Object(fields) => Datum::Map(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), Datum::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for Datum {
    fn from(value: Value) -> Self {
        Datum::from(&value)
    }
}

impl From<&Datum> for Value {
    fn from(datum: &Datum) -> Self {
        match datum {
            Datum::Null => Value::Null,
            Datum::Bool(b) => Value::Bool(*b),
            Datum::Number(n) => Value::from(*n),
            Datum::String(s) => Value::String(s.clone()),
            Datum::Date(dt) => {
                Value::String(dt.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Datum::Seq(items) => Value::Array(items.iter().map(Value::from).collect()),
            Datum::Map(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::from(v)))
                    .collect(),
            ),
        }
    }
}
