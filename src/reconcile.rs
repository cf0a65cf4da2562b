use serde_json::Value;
use std::collections::HashSet;

/// Recipe ingredients whose normalized form (trimmed, lowercased) is absent
/// from the user's list. Recipe order and original text are preserved.
pub fn missing_ingredients(recipe_ingredients: &[String], user_ingredients: &[String]) -> Vec<String> {
    let user_set: HashSet<String> = user_ingredients
        .iter()
        .map(|item| item.trim().to_lowercase())
        .collect();

    recipe_ingredients
        .iter()
        .filter(|item| !user_set.contains(&item.trim().to_lowercase()))
        .cloned()
        .collect()
}

/// Ingredient names from a generated recipe's `ingredients` value, which is
/// either a name→quantity map or a plain list of names.
pub fn ingredient_names(value: &Value) -> Vec<String> {
    match value {
        Value::Object(map) => map.keys().cloned().collect(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
