//! Behavioural tests for the nested-key accessor and recursive reshape.

use dotarr::access::{except, forget, get, get_or, has, only, pull, set};
use dotarr::reshape::filter_recursive;
use dotarr::{DotError, Key, Value};
use serde_json::json;

fn doc(json: serde_json::Value) -> Value {
    Value::from(json)
}

fn sample() -> Value {
    doc(json!({
        "user": {
            "name": "ada",
            "roles": ["admin", "dev"],
            "address": {"city": "London", "zip": null}
        },
        "count": 3,
        "flag.enabled": true
    }))
}

#[test]
fn missing_paths_yield_the_default() {
    let m = sample();
    let default = Value::from("fallback");
    for path in ["nope", "user.nope", "user.name.first", "user.roles.5", "count.x", "flag"] {
        assert_eq!(get_or(&m, path, default.clone()), default, "path {path}");
        assert_eq!(get(&m, path), None, "path {path}");
    }
}

#[test]
fn write_then_read_round_trips() {
    let mut m = sample();
    let cases = [
        ("user.name", Value::from("grace")),
        ("user.address.geo.lat", Value::Float(51.5)),
        ("brand.new.path", doc(json!({"x": [1]}))),
        ("count.nested", Value::Int(9)),
        ("user.roles.2", Value::from("ops")),
    ];
    for (path, value) in cases {
        set(&mut m, path, value.clone());
        assert_eq!(get(&m, path), Some(&value), "path {path}");
    }
}

#[test]
fn set_overwrites_scalar_intermediates() {
    let mut m = doc(json!({"a": 1}));
    set(&mut m, "a.b.c", Value::Int(2));
    assert_eq!(m, doc(json!({"a": {"b": {"c": 2}}})));
}

#[test]
fn has_is_a_conjunction() {
    let m = sample();
    let paths = ["user.name", "count", "user.address.zip", "nope", "user.roles.1", "flag.enabled"];
    for p1 in paths {
        for p2 in paths {
            assert_eq!(
                has(&m, [p1, p2]),
                has(&m, [p1]) && has(&m, [p2]),
                "paths {p1} and {p2}"
            );
        }
    }
}

#[test]
fn pull_returns_what_get_would_and_removes_it() {
    let mut m = sample();
    let expected = get_or(&m, "user.address.city", Value::Nil);
    let pulled = pull(&mut m, "user.address.city", Value::Nil);
    assert_eq!(pulled, expected);
    assert!(!has(&m, ["user.address.city"]));
    assert!(has(&m, ["user.address.zip"]));
}

#[test]
fn pull_of_missing_path_returns_default_and_keeps_document() {
    let mut m = sample();
    let before = m.clone();
    assert_eq!(pull(&mut m, "user.nope", Value::Int(-1)), Value::Int(-1));
    assert_eq!(m, before);
}

// The exact-match-then-traverse lookup is ambiguous when a literal dotted key
// shadows a nested path. These tests pin the current behaviour.

#[test]
fn exact_top_level_key_wins_over_traversal() {
    let m = doc(json!({"a.b": 1, "a": {"b": 2}}));
    assert_eq!(get(&m, "a.b"), Some(&Value::Int(1)));
}

#[test]
fn pull_of_shadowing_key_leaves_the_nested_path_visible() {
    let mut m = doc(json!({"a.b": 1, "a": {"b": 2}}));
    assert_eq!(pull(&mut m, "a.b", Value::Nil), Value::Int(1));
    assert!(has(&m, ["a.b"]));
    assert_eq!(get(&m, "a.b"), Some(&Value::Int(2)));

    assert_eq!(pull(&mut m, "a.b", Value::Nil), Value::Int(2));
    assert!(!has(&m, ["a.b"]));
}

#[test]
fn forget_removes_paths_independently() {
    let mut m = doc(json!({"a": {"b": 1, "keep": 2}, "c": 3, "d": 4}));
    forget(&mut m, ["a.b", "c"]);
    assert_eq!(m, doc(json!({"a": {"keep": 2}, "d": 4})));

    forget(&mut m, ["x.y.z", "a.b", "nope"]);
    assert_eq!(m, doc(json!({"a": {"keep": 2}, "d": 4})));
}

#[test]
fn only_and_except_are_complementary_at_top_level() {
    let m = doc(json!({"a": 1, "b": 2, "c": 3}));
    assert_eq!(only(&m, ["a", "c"]), doc(json!({"a": 1, "c": 3})));
    assert_eq!(except(&m, ["a", "c"]), doc(json!({"b": 2})));
}

#[test]
fn filter_recursive_mixes_defaults_and_positional_keys() {
    let shaped = filter_recursive(&doc(json!({"x": 1, "y": 2})), &doc(json!({"x": 0, "0": "y"}))).unwrap();
    assert_eq!(shaped, doc(json!({"x": 1, "y": 2})));
}

#[test]
fn filter_recursive_reports_the_missing_key() {
    let err = filter_recursive(&doc(json!({"x": 1})), &doc(json!({"0": "z"}))).unwrap_err();
    match err {
        DotError::MissingKey { key } => assert_eq!(key, Key::from("z")),
        other => panic!("expected a missing key error, got {other:?}"),
    }
}
