use cart_eligibility::value::Datum;
use cart_eligibility::{is_eligible, is_eligible_json, Evaluator};
use serde_json::json;

fn datum(v: serde_json::Value) -> Datum {
    Datum::from(&v)
}

fn eligible(record: serde_json::Value, criteria: serde_json::Value) -> bool {
    is_eligible(&datum(record), &datum(criteria)).unwrap()
}

#[test]
fn empty_criteria_is_vacuously_true() {
    assert!(eligible(json!({"anything": [1, 2, {"x": null}]}), json!({})));
    assert!(eligible(json!({}), json!({})));
}

#[test]
fn flat_equality() {
    assert!(eligible(json!({"color": "red"}), json!({"color": "red"})));
    assert!(!eligible(json!({"color": "red"}), json!({"color": "blue"})));
    assert!(eligible(json!({"qty": 3}), json!({"qty": 3})));
    assert!(eligible(json!({"qty": 3}), json!({"qty": 3.0})));
}

#[test]
fn equality_is_strict_across_types() {
    assert!(!eligible(json!({"qty": 5}), json!({"qty": "5"})));
    assert!(!eligible(json!({"flag": false}), json!({"flag": 0})));
}

#[test]
fn path_broadcast_is_existential() {
    let record = json!({"items": [{"qty": 1}, {"qty": 5}]});
    assert!(eligible(record.clone(), json!({"items.qty": {"gte": 3}})));
    assert!(!eligible(record, json!({"items.qty": {"gte": 10}})));
}

#[test]
fn deep_broadcast_through_nested_arrays() {
    let record = json!({
        "orders": [
            {"products": [{"quantity": 1}, {"quantity": 2}]},
            {"products": [{"quantity": 9}]}
        ]
    });
    assert!(eligible(
        record.clone(),
        json!({"orders.products.quantity": {"gt": 8}})
    ));
    assert!(!eligible(record, json!({"orders.products.quantity": {"gt": 9}})));
}

#[test]
fn nested_structural_match() {
    let record = json!({"user": {"age": 25}});
    assert!(eligible(record.clone(), json!({"user": {"age": {"gte": 18}}})));
    assert!(!eligible(record, json!({"user": {"age": {"gte": 30}}})));
}

#[test]
fn or_over_array_condition() {
    let record = json!({"color": "red"});
    assert!(eligible(record.clone(), json!({"color": ["red", "blue"]})));
    assert!(!eligible(record, json!({"color": ["green", "blue"]})));
}

#[test]
fn array_valued_sub_condition_in_structural_match() {
    let record = json!({"user": {"plan": "pro"}});
    assert!(eligible(
        record.clone(),
        json!({"user": {"plan": ["pro", "enterprise"]}})
    ));
    assert!(!eligible(record, json!({"user": {"plan": ["free", "trial"]}})));
}

#[test]
fn logical_composition() {
    assert!(eligible(
        json!({"age": 40}),
        json!({"age": {"and": {"gte": 18, "lte": 65}}})
    ));
    assert!(!eligible(
        json!({"age": 70}),
        json!({"age": {"and": {"gte": 18, "lte": 65}}})
    ));
    assert!(eligible(
        json!({"age": 70}),
        json!({"age": {"or": {"lt": 18, "gt": 65}}})
    ));
    assert!(!eligible(
        json!({"age": 40}),
        json!({"age": {"or": {"lt": 18, "gt": 65}}})
    ));
}

#[test]
fn all_criteria_entries_must_hold() {
    let record = json!({"color": "red", "qty": 2});
    assert!(eligible(
        record.clone(),
        json!({"color": "red", "qty": {"lte": 5}})
    ));
    assert!(!eligible(record, json!({"color": "red", "qty": {"gte": 5}})));
}

#[test]
fn missing_path_is_false_under_comparison() {
    let record = json!({"a": 1});
    assert!(!eligible(record.clone(), json!({"b": {"gte": 0}})));
    assert!(!eligible(record.clone(), json!({"b": "anything"})));
    // an explicit null condition does match an absent key
    assert!(eligible(record, json!({"b": null})));
}

#[test]
fn repeated_calls_agree() {
    let ev = Evaluator::new();
    let record = datum(json!({"items": [{"qty": 1}, {"qty": 5}], "color": "red"}));
    let criteria = datum(json!({"items.qty": {"gte": 3}, "color": ["red", "blue"]}));
    let first = ev.is_eligible(&record, &criteria).unwrap();
    for _ in 0..10 {
        assert_eq!(ev.is_eligible(&record, &criteria).unwrap(), first);
    }
}

#[test]
fn json_entry_point() {
    assert!(is_eligible_json(
        r#"{"total": 120, "country": "FR"}"#,
        r#"{"total": {"gt": 100}, "country": {"in": ["FR", "BE"]}}"#,
    )
    .unwrap());
    assert!(!is_eligible_json(r#"{"total": 80}"#, r#"{"total": {"gt": 100}}"#).unwrap());
}
