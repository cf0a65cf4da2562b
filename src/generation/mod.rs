pub mod cerebras;
pub mod groq;

use async_trait::async_trait;

use crate::api_connection::connection::ApiConnectionError;
use crate::config::AppConfig;

pub use cerebras::CerebrasBackend;
pub use groq::GroqBackend;

/// System message sent with every generation call.
pub const CHEF_SYSTEM_MESSAGE: &str = "You are a professional chef and nutritionist AI \
assistant. Provide detailed, accurate, and helpful recipe suggestions with clear instructions \
and time required at each step, ingredient lists, and nutritional information.";

/// Canned completion used when no provider is configured or every provider
/// failed. Downstream parsing must keep working on this string alone.
pub const MOCK_RESPONSE: &str = r#"{"recipe_name": "Mock Recipe", "ingredients": ["ingredient1","ingredient2"], "instructions": ["Step 1: Do something","Step 2: Done."], "metadata": {"prepTime":"15m", "cookTime":"25m"}}"#;

#[derive(Debug, Clone, Copy)]
pub struct GenerationOptions {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_tokens: 2000,
            temperature: 0.7,
        }
    }
}

/// One LLM completion provider. Backends only map a prompt onto their HTTP
/// API; ordering and fallback live in [`GenerationClient`].
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, ApiConnectionError>;
}

/// Ordered provider chain with a mock-response floor: generation always
/// yields some text, even with zero credentials or a total outage.
pub struct GenerationClient {
    backends: Vec<Box<dyn GenerationBackend>>,
}

impl GenerationClient {
    pub fn new(backends: Vec<Box<dyn GenerationBackend>>) -> Self {
        Self { backends }
    }

    /// Cerebras first, Groq as fallback, per available credentials.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut backends: Vec<Box<dyn GenerationBackend>> = Vec::new();
        if let Some(key) = &config.cerebras_api_key {
            backends.push(Box::new(CerebrasBackend::new(key.clone())));
        }
        if let Some(key) = &config.groq_api_key {
            backends.push(Box::new(GroqBackend::new(key.clone())));
        }
        Self::new(backends)
    }

    pub fn has_backends(&self) -> bool {
        !self.backends.is_empty()
    }

    pub async fn generate(&self, prompt: &str, options: &GenerationOptions) -> String {
        if self.backends.is_empty() {
            tracing::info!("no provider credentials configured, using mock response");
            return MOCK_RESPONSE.to_string();
        }

        for backend in &self.backends {
            match backend.generate(prompt, options).await {
                Ok(text) => {
                    tracing::debug!(backend = backend.name(), "generation succeeded");
                    return text;
                }
                Err(err) => {
                    tracing::warn!(
                        backend = backend.name(),
                        error = %err,
                        "generation call failed, trying next provider"
                    );
                }
            }
        }

        tracing::warn!("all providers failed, using mock response");
        MOCK_RESPONSE.to_string()
    }
}
