use async_trait::async_trait;

use super::{GenerationBackend, GenerationOptions, CHEF_SYSTEM_MESSAGE};
use crate::api_connection::connection::{
    first_choice_content, post_chat_completion, ApiConnectionError,
};
use crate::api_connection::endpoints::{ChatCompletionRequest, ChatMessage};

pub const CEREBRAS_ENDPOINT: &str = "https://api.cerebras.ai/v1/chat/completions";
pub const CEREBRAS_MODEL: &str = "llama-4-scout-17b-16e-instruct";

pub struct CerebrasBackend {
    api_key: String,
}

impl CerebrasBackend {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }
}

#[async_trait]
impl GenerationBackend for CerebrasBackend {
    fn name(&self) -> &'static str {
        "cerebras"
    }

    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, ApiConnectionError> {
        let request = ChatCompletionRequest {
            model: CEREBRAS_MODEL.to_string(),
            messages: vec![
                ChatMessage::system(CHEF_SYSTEM_MESSAGE),
                ChatMessage::user(prompt),
            ],
            temperature: Some(options.temperature),
            max_tokens: Some(options.max_tokens),
        };

        let response = post_chat_completion(CEREBRAS_ENDPOINT, &self.api_key, &request).await?;
        first_choice_content(response)
    }
}
