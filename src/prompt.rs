use crate::request::{GenerationRequest, Mode};

/// Render a request into the natural-language instruction sent to the
/// generation model. Pure string construction: every optional clause is
/// skipped entirely when its field is blank, and clause order is fixed.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push("You are an expert chef and nutrition assistant.".to_string());
    parts.push(format!(
        "Create a recipe using ONLY these ingredients: {}.",
        request.ingredients.items().join(", ")
    ));

    if !request.preferences.trim().is_empty() {
        parts.push(format!(
            "Tailor the recipe to these dietary preferences: {}.",
            request.preferences
        ));
    }
    // Allergies are a hard constraint, not a preference.
    if !request.allergies.trim().is_empty() {
        parts.push(format!(
            "STRICTLY avoid any allergens: {}, and substitute/omit related ingredients.",
            request.allergies
        ));
    }
    if !request.budget.trim().is_empty() {
        parts.push(format!(
            "Ensure the recipe fits within a budget of {}.",
            request.budget
        ));
    }
    if !request.leftovers.trim().is_empty() {
        parts.push(format!(
            "If possible, creatively use these leftovers: {}.",
            request.leftovers
        ));
    }

    match request.mode {
        Mode::MealPlan => {
            parts.push(
                "Generate a 7-day meal plan, using the constraints above. Output each day as \
                 a recipe name and brief instructions in a JSON object as described below."
                    .to_string(),
            );
            parts.push(
                "Your output must be valid JSON in this format: {\"plan_name\": str, \
                 \"meal_plan\": [{\"day\": int, \"recipe_name\": str, \"instructions\": str}], \
                 \"shopping_list\": [...], \"nutritious_values\": {...}, \
                 \"missing_ingredients\": [...]}."
                    .to_string(),
            );
        }
        Mode::Recipe => {
            parts.push(
                "Output a SINGLE recipe in JSON format with: recipe_name, ingredients, \
                 instructions, nutritious_values."
                    .to_string(),
            );
            parts.push(
                "If any required ingredients are missing from the original list, add them in \
                 a field 'missing_ingredients' in the same JSON."
                    .to_string(),
            );
        }
    }

    parts.join(" ")
}
