use serde_json::Value;

use crate::api_connection::connection::ApiConnectionError;
use crate::config::AppConfig;
use crate::extractor::extract_json;
use crate::generation::{GenerationClient, GenerationOptions};
use crate::normalizer::ResponseNormalizer;
use crate::prompt::build_prompt;
use crate::reconcile::{ingredient_names, missing_ingredients};
use crate::request::{GenerationRequest, Mode};

/// Runs the full pipeline: prompt → generation (with provider fallback) →
/// normalization → JSON extraction → missing-ingredient reconciliation.
/// Stages exchange opaque strings and JSON values only.
pub struct Orchestrator {
    client: GenerationClient,
    normalizer: ResponseNormalizer,
}

impl Orchestrator {
    pub fn new(client: GenerationClient, normalizer: ResponseNormalizer) -> Self {
        Self { client, normalizer }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            GenerationClient::from_config(config),
            ResponseNormalizer::from_config(config),
        )
    }

    /// The only hard failure here is an unrecovered normalization call;
    /// generation self-heals down to the mock response and extraction
    /// degrades to the raw-output sentinel.
    pub async fn run(&self, request: &GenerationRequest) -> Result<Value, ApiConnectionError> {
        let prompt = build_prompt(request);
        tracing::debug!(prompt = %prompt, "built generation prompt");

        let raw = self
            .client
            .generate(&prompt, &GenerationOptions::default())
            .await;

        let cleaned = self.normalizer.normalize(&raw, request.mode).await?;
        let mut result = extract_json(&cleaned);

        if request.mode == Mode::Recipe {
            reconcile_recipe(&mut result, &request.ingredients.items());
        }

        Ok(result)
    }
}

/// Fill in `missing_ingredients` when the model omitted it. The model's own
/// list, when present, is trusted as-is.
fn reconcile_recipe(result: &mut Value, user_ingredients: &[String]) {
    let Some(map) = result.as_object_mut() else {
        return;
    };
    if map.contains_key("missing_ingredients") {
        return;
    }
    let Some(recipe_value) = map.get("ingredients") else {
        return;
    };

    let recipe = ingredient_names(recipe_value);
    let missing = missing_ingredients(&recipe, user_ingredients);
    if !missing.is_empty() {
        map.insert(
            "missing_ingredients".to_string(),
            Value::Array(missing.into_iter().map(Value::String).collect()),
        );
    }
}
