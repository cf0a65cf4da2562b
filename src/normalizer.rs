use crate::api_connection::connection::{
    first_choice_content, post_chat_completion, ApiConnectionError,
};
use crate::api_connection::endpoints::{ChatCompletionRequest, ChatMessage};
use crate::config::AppConfig;
use crate::generation::cerebras::{CEREBRAS_ENDPOINT, CEREBRAS_MODEL};
use crate::request::Mode;

const NORMALIZER_TEMPERATURE: f32 = 0.1;
const NORMALIZER_MAX_TOKENS: u32 = 1500;

/// Worked example of a correct single-recipe output, shown to the
/// normalizer model verbatim.
pub const SINGLE_RECIPE_EXAMPLE: &str = r#"{
  "recipe_name": "Tomato Egg Toast",
  "ingredients": {
    "eggs": 1,
    "bread": 2,
    "butter": 0,
    "tomato": 1,
    "onion": "1/4"
  },
  "missing_ingredients": ["salt (optional, for taste)"],
  "instructions": [
    "Toast the bread until it's lightly browned.",
    "Wash and slice the tomato into thin pieces.",
    "Chop the onion finely.",
    "Use a non-stick pan (to avoid oily food) and add a small amount of water (about 1 tablespoon).",
    "Crack the egg into the pan and cook until the whites are set and the yolks are cooked to your liking.",
    "Assemble the dish by placing the toasted bread on a plate, topping it with a slice of tomato, a sprinkle of chopped onion, and finally the fried egg.",
    "If using, sprinkle a pinch of salt for taste."
  ],
  "nutritious_values": {
    "calories": "approx 220",
    "protein": "14g",
    "fat": "4g",
    "carbohydrates": "35g",
    "fiber": "3g",
    "sugar": "5g"
  }
}"#;

/// Worked example of a correct 7-day meal plan output.
pub const MEAL_PLAN_EXAMPLE: &str = r#"{
  "plan_name": "Low Carb Week Plan",
  "meal_plan": [
    {"day": 1, "recipe_name": "Egg Veggie Toast", "instructions": "Toast bread, scramble eggs with veggies, assemble."},
    {"day": 2, "recipe_name": "Capsicum Omelette", "instructions": "Make omelette using eggs and capsicum."},
    {"day": 3, "recipe_name": "Potato Frittata", "instructions": "Shred potato, mix with eggs, cook frittata."},
    {"day": 4, "recipe_name": "Milk Curd Smoothie", "instructions": "Blend milk and curd with cinnamon."},
    {"day": 5, "recipe_name": "Bread Upma", "instructions": "Toast bread cubes, sauté with eggs and veggies."},
    {"day": 6, "recipe_name": "Onion Paratha", "instructions": "Knead dough, mix onions, pan fry."},
    {"day": 7, "recipe_name": "Baked Potato and Eggs", "instructions": "Bake potatoes and eggs together."}
  ],
  "shopping_list": [
    "eggs", "onion", "butter", "capsicum", "bread", "potato", "milk", "curd"
  ],
  "nutritious_values": {
    "weekly_calories": "approx 2200",
    "protein": "60g",
    "fat": "25g",
    "carbohydrates": "300g",
    "fiber": "15g"
  },
  "missing_ingredients": []
}"#;

pub fn worked_example(mode: Mode) -> &'static str {
    match mode {
        Mode::Recipe => SINGLE_RECIPE_EXAMPLE,
        Mode::MealPlan => MEAL_PLAN_EXAMPLE,
    }
}

fn schema_fields(mode: Mode) -> &'static str {
    match mode {
        Mode::Recipe => {
            r#"Output EXACTLY one top-level JSON with the following fields:
{
  "recipe_name": string,
  "ingredients": dict or list,
  "missing_ingredients": list,
  "instructions": list,
  "nutritious_values": dict
}"#
        }
        Mode::MealPlan => {
            r#"Output EXACTLY one top-level JSON with the following fields:
{
  "plan_name": string,
  "meal_plan": list,
  "shopping_list": list,
  "nutritious_values": dict,
  "missing_ingredients": list
}"#
        }
    }
}

pub fn normalizer_instructions(mode: Mode) -> String {
    format!(
        "You are an API that strictly outputs JSON for recipe generation.\n\
         \n\
         TASK:\n\
         - Input: A raw text block with a recipe/mealplan, which may include markdown, \
         explanations, embedded JSON, and notes.\n\
         - Output: Extract and clean ONLY displayable JSON for the section requested, strip \
         markdown, extra text, explanations.\n\
         - {}\n\
         - Ignore notes, budget, explanations. If a field is missing, fill it with a blank \
         value of the right type.\n\
         - Example Input: (actual messy response block here)\n\
         '''RAW MESSY BLOCK HERE'''\n\
         - Example Output (desired format, strictly JSON!):\n\
         {}\n\
         \n\
         Strictly return only JSON, no markdown, no extra explanation.",
        schema_fields(mode),
        worked_example(mode)
    )
}

/// Second-pass model call that reshapes a messy generation response into
/// strict JSON. Sampling is pinned low so the model extracts rather than
/// rewrites.
pub struct ResponseNormalizer {
    api_key: Option<String>,
}

impl ResponseNormalizer {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.cerebras_api_key.clone())
    }

    /// Returns the model's text unmodified; it may still fail to parse and
    /// must go through the extractor. A failed call propagates. With no
    /// credential configured the raw text passes through untouched, which
    /// keeps the credential-less mock path alive end to end.
    pub async fn normalize(&self, raw: &str, mode: Mode) -> Result<String, ApiConnectionError> {
        let Some(api_key) = &self.api_key else {
            tracing::info!("no normalizer credential configured, passing raw output through");
            return Ok(raw.to_string());
        };

        let request = ChatCompletionRequest {
            model: CEREBRAS_MODEL.to_string(),
            messages: vec![
                ChatMessage::system(normalizer_instructions(mode)),
                ChatMessage::user(raw),
            ],
            temperature: Some(NORMALIZER_TEMPERATURE),
            max_tokens: Some(NORMALIZER_MAX_TOKENS),
        };

        let response = post_chat_completion(CEREBRAS_ENDPOINT, api_key, &request).await?;
        first_choice_content(response)
    }
}
