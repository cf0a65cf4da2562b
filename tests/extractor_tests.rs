use recipe_genie::extractor::extract_json;
use recipe_genie::normalizer::{worked_example, MEAL_PLAN_EXAMPLE, SINGLE_RECIPE_EXAMPLE};
use recipe_genie::request::Mode;
use serde_json::{json, Value};

#[test]
fn extracts_fenced_json_block() {
    let text = "Here is your recipe:\n```json\n{\"a\":1}\n```";
    assert_eq!(extract_json(text), json!({"a": 1}));
}

#[test]
fn extracts_fenced_block_surrounded_by_prose() {
    let text = "Sure! Let me explain first.\n```json\n{\"recipe_name\": \"Toast\"}\n```\nEnjoy!";
    assert_eq!(extract_json(text), json!({"recipe_name": "Toast"}));
}

#[test]
fn extracts_first_object_embedded_in_prose() {
    let text = "The result is {\"recipe_name\": \"Toast\", \"ingredients\": [\"bread\"]} as requested.";
    assert_eq!(
        extract_json(text),
        json!({"recipe_name": "Toast", "ingredients": ["bread"]})
    );
}

#[test]
fn handles_nested_objects_in_prose() {
    let text = "Output: {\"outer\": {\"inner\": 1}, \"b\": 2} done.";
    assert_eq!(extract_json(text), json!({"outer": {"inner": 1}, "b": 2}));
}

#[test]
fn braces_inside_strings_do_not_confuse_the_scan() {
    let text = "{\"note\": \"use {braces} carefully\", \"n\": 1}";
    assert_eq!(
        extract_json(text),
        json!({"note": "use {braces} carefully", "n": 1})
    );
}

#[test]
fn parses_bare_json_input() {
    assert_eq!(extract_json("  [1, 2, 3] "), json!([1, 2, 3]));
}

#[test]
fn unparseable_input_degrades_to_sentinel() {
    let text = "not json at all";
    assert_eq!(extract_json(text), json!({"raw_output": "not json at all"}));
}

#[test]
fn empty_input_degrades_to_sentinel() {
    assert_eq!(extract_json(""), json!({"raw_output": ""}));
}

#[test]
fn truncated_object_degrades_to_sentinel() {
    let text = "{\"recipe_name\": \"Toast\"";
    assert_eq!(extract_json(text), json!({"raw_output": text}));
}

#[test]
fn single_recipe_example_round_trips_through_extractor() {
    let expected: Value = serde_json::from_str(SINGLE_RECIPE_EXAMPLE).unwrap();
    assert_eq!(extract_json(SINGLE_RECIPE_EXAMPLE), expected);
}

#[test]
fn meal_plan_example_round_trips_through_extractor() {
    let expected: Value = serde_json::from_str(MEAL_PLAN_EXAMPLE).unwrap();
    assert_eq!(extract_json(MEAL_PLAN_EXAMPLE), expected);
}

#[test]
fn single_recipe_example_carries_the_full_field_set() {
    let value = extract_json(worked_example(Mode::Recipe));
    let map = value.as_object().unwrap();
    for field in [
        "recipe_name",
        "ingredients",
        "missing_ingredients",
        "instructions",
        "nutritious_values",
    ] {
        assert!(map.contains_key(field), "missing field {}", field);
    }
    assert!(map["instructions"].is_array());
    assert!(map["nutritious_values"].is_object());
}

#[test]
fn meal_plan_example_carries_the_full_field_set() {
    let value = extract_json(worked_example(Mode::MealPlan));
    let map = value.as_object().unwrap();
    for field in [
        "plan_name",
        "meal_plan",
        "shopping_list",
        "nutritious_values",
        "missing_ingredients",
    ] {
        assert!(map.contains_key(field), "missing field {}", field);
    }

    let days = map["meal_plan"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    for (index, day) in days.iter().enumerate() {
        assert_eq!(day["day"], json!(index as u64 + 1));
        assert!(day["recipe_name"].is_string());
        assert!(day["instructions"].is_string());
    }
}
