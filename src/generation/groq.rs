use async_trait::async_trait;

use super::{GenerationBackend, GenerationOptions, CHEF_SYSTEM_MESSAGE};
use crate::api_connection::connection::{
    first_choice_content, post_chat_completion, ApiConnectionError,
};
use crate::api_connection::endpoints::{ChatCompletionRequest, ChatMessage};

pub const GROQ_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const GROQ_MODEL: &str = "llama-3.1-70b-versatile";

pub struct GroqBackend {
    api_key: String,
}

impl GroqBackend {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }
}

#[async_trait]
impl GenerationBackend for GroqBackend {
    fn name(&self) -> &'static str {
        "groq"
    }

    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, ApiConnectionError> {
        let request = ChatCompletionRequest {
            model: GROQ_MODEL.to_string(),
            messages: vec![
                ChatMessage::system(CHEF_SYSTEM_MESSAGE),
                ChatMessage::user(prompt),
            ],
            temperature: Some(options.temperature),
            max_tokens: Some(options.max_tokens),
        };

        let response = post_chat_completion(GROQ_ENDPOINT, &self.api_key, &request).await?;
        first_choice_content(response)
    }
}
