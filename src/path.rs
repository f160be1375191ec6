use crate::value::Datum;

/// Resolve a dotted path against a record.
///
/// Segments fold left to right. A sequence along the way broadcasts the
/// remaining path over each element and flattens one level, so
/// `products.quantity` over an array of products yields the flat sequence
/// of quantities. A missing key, or a primitive hit before the path is
/// exhausted, short-circuits to `Null`.
pub fn resolve_path(record: &Datum, path: &str) -> Datum {
    let segments: Vec<&str> = path.split('.').collect();
    resolve(record, &segments)
}

fn resolve(current: &Datum, segments: &[&str]) -> Datum {
    let (head, rest) = match segments.split_first() {
        Some(parts) => parts,
        None => return current.clone(),
    };
    match current {
        Datum::Seq(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match resolve(item, segments) {
                    Datum::Seq(found) => out.extend(found),
                    single => out.push(single),
                }
            }
            Datum::Seq(out)
        }
        Datum::Map(fields) => match fields.get(*head) {
            Some(next) => resolve(next, rest),
            None => Datum::Null,
        },
        _ => Datum::Null,
    }
}
