//! Select (keep-only) projection tests

use jsonsift_engine::select_fields;
use serde_json::{Value, json};

const NO_PATHS: [&str; 0] = [];

fn parts_catalog() -> Value {
    json!([
        {"id": 123, "weight": 100, "parts": [{"id": 1, "color": "red"}, {"id": 2, "color": "green"}]},
        {"id": 456, "weight": 500, "parts": [{"id": 3, "color": "green"}, {"id": 4, "color": "blue"}]}
    ])
}

#[test]
fn test_single_attribute() {
    let selected = select_fields(["parts/color"], &parts_catalog());
    assert_eq!(
        selected,
        json!([
            {"parts": [{"color": "red"}, {"color": "green"}]},
            {"parts": [{"color": "green"}, {"color": "blue"}]}
        ])
    );
}

#[test]
fn test_two_attributes() {
    let selected = select_fields(["parts/color", "parts/id"], &parts_catalog());
    assert_eq!(
        selected,
        json!([
            {"parts": [{"id": 1, "color": "red"}, {"id": 2, "color": "green"}]},
            {"parts": [{"id": 3, "color": "green"}, {"id": 4, "color": "blue"}]}
        ])
    );
}

#[test]
fn test_without_nested_lists() {
    let data = json!([
        {"id": 123, "weight": 100, "parts": {"id": 1, "color": "red"}},
        {"id": 456, "weight": 500, "parts": {"id": 3, "color": "green"}}
    ]);
    assert_eq!(
        select_fields(["parts/color"], &data),
        json!([{"parts": {"color": "red"}}, {"parts": {"color": "green"}}])
    );
}

#[test]
fn test_list_of_different_shapes() {
    let data = json!([
        {"id": 123, "weight": 100, "parts": [{"id": 1, "color": "red"}, {"id": 2, "color": "green"}]},
        {"id": 456, "weight": 500, "parts": {"id": 3, "color": "green"}}
    ]);
    assert_eq!(
        select_fields(["parts/color", "parts/id"], &data),
        json!([
            {"parts": [{"id": 1, "color": "red"}, {"id": 2, "color": "green"}]},
            {"parts": {"id": 3, "color": "green"}}
        ])
    );
}

#[test]
fn test_single_object() {
    let data = json!({"id": 123, "weight": 100, "parts": [{"id": 1, "color": "red"}, {"id": 2, "color": "green"}]});
    assert_eq!(
        select_fields(["parts/color"], &data),
        json!({"parts": [{"color": "red"}, {"color": "green"}]})
    );
}

#[test]
fn test_shallow_attribute_takes_whole_field() {
    assert_eq!(
        select_fields(["parts"], &parts_catalog()),
        json!([
            {"parts": [{"id": 1, "color": "red"}, {"id": 2, "color": "green"}]},
            {"parts": [{"id": 3, "color": "green"}, {"id": 4, "color": "blue"}]}
        ])
    );
}

#[test]
fn test_non_existing_attribute_is_null() {
    assert_eq!(select_fields(["cores"], &parts_catalog()), Value::Null);
}

#[test]
fn test_partially_matching_attribute_is_null() {
    assert_eq!(select_fields(["parts/cores"], &parts_catalog()), Value::Null);
}

#[test]
fn test_existing_and_non_existing_attributes() {
    assert_eq!(
        select_fields(["cores", "parts/id"], &parts_catalog()),
        json!([
            {"parts": [{"id": 1}, {"id": 2}]},
            {"parts": [{"id": 3}, {"id": 4}]}
        ])
    );
}

#[test]
fn test_null_input() {
    assert_eq!(select_fields(["cores", "parts/id"], &Value::Null), Value::Null);
}

#[test]
fn test_empty_containers_collapse_to_null() {
    assert_eq!(select_fields(["cores", "parts/id"], &json!({})), Value::Null);
    assert_eq!(select_fields(["cores", "parts/id"], &json!([])), Value::Null);
}

#[test]
fn test_scalar_inputs_collapse_to_null() {
    assert_eq!(select_fields(["cores", "parts/id"], &json!(1)), Value::Null);
    assert_eq!(select_fields(["cores", "parts/id"], &json!("hello world")), Value::Null);
    assert_eq!(select_fields(["cores"], &json!(true)), Value::Null);
}

#[test]
fn test_nested_lists_are_transparent() {
    let data = json!([[[{"id": 1, "color": "red"}, {"id": 2, "color": "green"}]]]);
    assert_eq!(select_fields(["id"], &data), json!([[[{"id": 1}, {"id": 2}]]]));
}

#[test]
fn test_empty_path_list_is_identity() {
    let data = parts_catalog();
    assert_eq!(select_fields(NO_PATHS, &data), data);
    assert_eq!(select_fields(NO_PATHS, &Value::Null), Value::Null);
    assert_eq!(select_fields(NO_PATHS, &json!(7)), json!(7));
}

#[test]
fn test_input_is_not_mutated() {
    let data = parts_catalog();
    let before = data.clone();
    let _ = select_fields(["parts/color"], &data);
    assert_eq!(data, before);
}

#[test]
fn test_heterogeneous_elements_are_independent() {
    let data = json!([
        {"name": "a", "tags": ["x"]},
        {"size": 3},
        "loose",
        null,
        {"name": "b"}
    ]);
    assert_eq!(
        select_fields(["name"], &data),
        json!([{"name": "a"}, {"name": "b"}])
    );
}

#[test]
fn test_overlapping_paths_merge_by_insertion() {
    // `parts` gains a `color` child, so it stops being a leaf and only the
    // colors survive.
    let data = json!({"parts": [{"id": 1, "color": "red"}], "id": 9});
    let expected = json!({"parts": [{"color": "red"}]});
    assert_eq!(select_fields(["parts", "parts/color"], &data), expected);
    assert_eq!(select_fields(["parts/color", "parts"], &data), expected);
}

#[test]
fn test_null_valued_field_is_not_emitted() {
    let data = json!({"a": null, "b": {"c": null, "d": 1}});
    assert_eq!(select_fields(["a", "b/c", "b/d"], &data), json!({"b": {"d": 1}}));
    assert_eq!(select_fields(["a"], &data), Value::Null);
}
