use dotenv::dotenv;
use std::env;

pub const CEREBRAS_API_KEY_ENV_VAR: &str = "CEREBRAS_API_KEY";
pub const GROQ_API_KEY_ENV_VAR: &str = "GROQ_API_KEY";

/// Provider credentials, read once at startup and passed to the clients
/// that need them. A blank value counts as unset.
#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub cerebras_api_key: Option<String>,
    pub groq_api_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenv().ok();
        Self {
            cerebras_api_key: read_key(CEREBRAS_API_KEY_ENV_VAR),
            groq_api_key: read_key(GROQ_API_KEY_ENV_VAR),
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.cerebras_api_key.is_some() || self.groq_api_key.is_some()
    }
}

fn read_key(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
