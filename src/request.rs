use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output shape requested by the caller: a single recipe or a 7-day meal plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lower")]
pub enum Mode {
    #[default]
    Recipe,
    MealPlan,
}

/// Ingredients arrive either as a JSON list or as one comma-separated string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IngredientInput {
    List(Vec<String>),
    Text(String),
}

impl Default for IngredientInput {
    fn default() -> Self {
        IngredientInput::List(Vec::new())
    }
}

impl IngredientInput {
    /// Trimmed, non-blank ingredient entries in their original order.
    pub fn items(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            IngredientInput::List(list) => list.iter().map(String::as_str).collect(),
            IngredientInput::Text(text) => text.split(',').collect(),
        };
        raw.into_iter()
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub ingredients: IngredientInput,
    #[serde(default)]
    pub allergies: String,
    #[serde(default)]
    pub preferences: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub leftovers: String,
    #[serde(default)]
    pub mode: Mode,
}

/// Structured validation failure, returned to the caller as-is instead of
/// being raised as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub error: String,
    pub message: String,
}

impl ValidationError {
    pub fn missing_ingredients() -> Self {
        Self {
            error: "Ingredients are required".to_string(),
            message: "Please provide at least one ingredient".to_string(),
        }
    }
}

impl GenerationRequest {
    /// Requests without at least one non-blank ingredient are rejected
    /// before any model call happens.
    pub fn validate(&self) -> Result<Vec<String>, ValidationError> {
        let items = self.ingredients.items();
        if items.is_empty() {
            return Err(ValidationError::missing_ingredients());
        }
        Ok(items)
    }
}
