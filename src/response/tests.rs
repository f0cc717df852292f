//! Tests for the response wrapper

use super::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

fn repos() -> ApiResponse {
    ApiResponse::new(json!([
        {"name": "api", "owner": {"login": "acme"}, "private": false},
        {"name": "web", "owner": {"login": "acme"}, "private": true},
        "not-an-object",
        {"name": "cli", "owner": null}
    ]))
}

// ============================================================================
// get_fields
// ============================================================================

#[test]
fn test_get_fields_nested_object() {
    let response = ApiResponse::new(json!({"a": {"b": 5}}));
    assert_eq!(response.get_fields(["a.b"]).into_value(), json!({"a.b": 5}));
}

#[test]
fn test_get_fields_null_intermediate() {
    let response = ApiResponse::new(json!({"a": null}));
    assert_eq!(response.get_fields(["a.b"]).into_value(), json!({"a.b": null}));
}

#[test_case(json!({"a": 3}), "a.b" ; "scalar intermediate")]
#[test_case(json!({"a": [1, 2]}), "a.b" ; "list intermediate")]
#[test_case(json!({}), "a" ; "missing top level")]
#[test_case(json!({"a": {"c": 1}}), "a.b" ; "missing leaf")]
fn test_get_fields_unresolvable_path_is_null(data: Value, path: &str) {
    let response = ApiResponse::new(data);
    let fields = response.get_fields([path]);
    assert_eq!(fields.value()[path], Value::Null);
}

#[test]
fn test_get_fields_over_list_skips_non_objects() {
    let fields = repos().get_fields(["name", "owner.login"]);
    assert_eq!(
        fields.into_value(),
        json!([
            {"name": "api", "owner.login": "acme"},
            {"name": "web", "owner.login": "acme"},
            {"name": "cli", "owner.login": null}
        ])
    );
}

#[test]
fn test_get_fields_preserves_requested_order() {
    let response = ApiResponse::new(json!({"z": 1, "a": 2}));
    let fields = response.get_fields(["a", "z"]);
    let keys: Vec<&String> = fields.value().as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["a", "z"]);
}

#[test]
fn test_get_fields_on_scalar_is_null() {
    assert!(ApiResponse::new(json!(42)).get_fields(["a"]).is_null());
    assert!(ApiResponse::null().get_fields(["a"]).is_null());
}

// ============================================================================
// pluck
// ============================================================================

#[test]
fn test_pluck() {
    assert_eq!(
        repos().pluck("name").into_value(),
        json!(["api", "web", "cli"])
    );
}

#[test]
fn test_pluck_missing_field_yields_null_slot() {
    assert_eq!(
        repos().pluck("private").into_value(),
        json!([false, true, null])
    );
}

#[test]
fn test_pluck_on_object_is_null() {
    assert!(ApiResponse::new(json!({"name": "api"})).pluck("name").is_null());
}

// ============================================================================
// Positional selection
// ============================================================================

#[test]
fn test_head_and_last() {
    let response = repos();
    assert_eq!(response.head().value()["name"], "api");
    assert_eq!(response.last().value()["name"], "cli");
}

#[test]
fn test_head_and_last_on_empty_list() {
    let empty = ApiResponse::new(json!([]));
    assert!(empty.head().is_null());
    assert!(empty.last().is_null());
}

#[test_case(0, json!("a") ; "first")]
#[test_case(2, json!("c") ; "last index")]
#[test_case(3, Value::Null ; "out of range")]
#[test_case(usize::MAX, Value::Null ; "far out of range")]
fn test_take(n: usize, expected: Value) {
    let response = ApiResponse::new(json!(["a", "b", "c"]));
    assert_eq!(response.take(n).into_value(), expected);
}

#[test]
fn test_take_on_object_is_null() {
    assert!(ApiResponse::new(json!({"a": 1})).take(0).is_null());
}

#[test]
fn test_limit() {
    let response = ApiResponse::new(json!([1, 2, 3]));
    assert_eq!(response.limit(2).into_value(), json!([1, 2]));
    assert_eq!(response.limit(10).into_value(), json!([1, 2, 3]));
    assert_eq!(response.limit(0).into_value(), json!([]));
    assert!(ApiResponse::null().limit(1).is_null());
}

#[test]
fn test_len() {
    assert_eq!(repos().len(), 4);
    assert!(ApiResponse::new(json!({"a": 1})).is_empty());
}

// ============================================================================
// Purity and rendering
// ============================================================================

#[test]
fn test_projections_do_not_mutate() {
    let original = repos();
    let snapshot = original.clone();

    let _ = original.get_fields(["name"]).head().pluck("x");
    let _ = original.pluck("owner.login");
    let _ = original.last();
    let _ = original.limit(1);

    assert_eq!(original, snapshot);
}

#[test]
fn test_chained_projections() {
    let second = repos().limit(2).get_fields(["name", "owner.login"]).last();
    assert_eq!(
        second.into_value(),
        json!({"name": "web", "owner.login": "acme"})
    );
}

#[test]
fn test_pretty_print_indentation() {
    let response = ApiResponse::new(json!({"a": [1]}));
    assert_eq!(response.pretty_print(), "{\n  \"a\": [\n    1\n  ]\n}");
    assert_eq!(response.to_string(), response.pretty_print());
}

#[test]
fn test_pretty_print_parses_back() {
    let original = repos();
    let parsed: Value = serde_json::from_str(&original.pretty_print()).unwrap();
    assert_eq!(parsed, original.into_value());
}

#[test]
fn test_pretty_print_null() {
    assert_eq!(ApiResponse::null().pretty_print(), "null");
}

#[test]
fn test_parse_as() {
    #[derive(serde::Deserialize)]
    struct Repo {
        name: String,
    }

    let repo: Repo = repos().head().parse_as().unwrap();
    assert_eq!(repo.name, "api");
    assert!(ApiResponse::null().parse_as::<Repo>().is_err());
}

#[test]
fn test_lookup_path() {
    let value = json!({"a": {"b": {"c": 1}}});
    assert_eq!(lookup_path(&value, "a.b.c"), Some(&json!(1)));
    assert_eq!(lookup_path(&value, "a.x"), None);
    assert_eq!(lookup_path(&json!([1]), "a"), None);
}
