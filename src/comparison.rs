use std::cmp::Ordering;

use crate::value::Datum;

/// Apply `pred_on_ord` to the ordering of `a` and `b`; false when the pair
/// has no ordering (mixed or non-orderable types).
pub fn cmp_values<F>(a: &Datum, b: &Datum, pred_on_ord: F) -> bool
where
    F: Fn(Ordering) -> bool,
{
    match ordering(a, b) {
        Some(ord) => pred_on_ord(ord),
        None => false,
    }
}

/// Same-type ordering only: numbers by f64, dates by epoch milliseconds,
/// strings and bools by native ordering. Everything else is unordered.
fn ordering(a: &Datum, b: &Datum) -> Option<Ordering> {
    match (a, b) {
        (Datum::Number(x), Datum::Number(y)) => x.partial_cmp(y),
        (Datum::Date(x), Datum::Date(y)) => {
            Some(x.timestamp_millis().cmp(&y.timestamp_millis()))
        }
        (Datum::String(x), Datum::String(y)) => Some(x.cmp(y)),
        (Datum::Bool(x), Datum::Bool(y)) => Some(x.cmp(y)),
        _ => None,
    }
}
