use crate::errors::Result;
use crate::operators::Registry;
use crate::value::Datum;

/// Does a resolved value satisfy a condition node?
///
/// Cases are mutually exclusive and checked in precedence order:
/// a sequence value matches if any element does (existential over broadcast
/// results); a mapping value is matched structurally key by key; a primitive
/// value is matched against an operator leaf, a set of alternatives, or by
/// plain equality.
static NULL: Datum = Datum::Null;

pub(crate) fn match_condition(ops: &Registry, resolved: &Datum, condition: &Datum) -> Result<bool> {
    match resolved {
        Datum::Seq(items) => {
            for item in items {
                if match_condition(ops, item, condition)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        Datum::Map(fields) => match condition {
            Datum::Map(entries) => {
                for (key, sub) in entries {
                    let field = fields.get(key).unwrap_or(&NULL);
                    let hit = match sub {
                        // sequence-valued sub-condition: at least one
                        // alternative must match the field
                        Datum::Seq(alternatives) => any_alternative(ops, field, alternatives)?,
                        _ => match_condition(ops, field, sub)?,
                    };
                    if !hit {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Datum::Seq(alternatives) => any_alternative(ops, resolved, alternatives),
            // a structured value never equals a primitive
            _ => Ok(false),
        },
        _ => match condition {
            Datum::Map(clauses) => {
                for (name, operand) in clauses {
                    if !ops.evaluate(name, resolved, operand)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Datum::Seq(alternatives) => any_alternative(ops, resolved, alternatives),
            other => Ok(resolved == other),
        },
    }
}

fn any_alternative(ops: &Registry, value: &Datum, alternatives: &[Datum]) -> Result<bool> {
    for alternative in alternatives {
        if match_condition(ops, value, alternative)? {
            return Ok(true);
        }
    }
    Ok(false)
}
