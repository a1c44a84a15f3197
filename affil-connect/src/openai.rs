use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use affil_core::adapter::ScriptGenerator;
use affil_core::generation::{new_video_id, GenerationResult, GenerationStatus};
use affil_core::{CoreError, CoreResult};

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// Live adapter for the chat-completion text-generation API.
pub struct OpenAiGenerator {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiGenerator {
    pub fn new(api_url: &str, api_key: &str, model: &str) -> CoreResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| CoreError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }

    fn build_prompt(product: &Value, template: Option<&str>) -> String {
        let product_json =
            serde_json::to_string_pretty(product).unwrap_or_else(|_| product.to_string());

        let mut prompt = format!(
            "Write a short promotional video script for the following affiliate product:\n\n\
             {product_json}\n\n\
             Keep it under 30 seconds when read aloud and end with a clear call to action."
        );
        if let Some(template) = template {
            prompt.push_str("\n\nFollow this template:\n");
            prompt.push_str(template);
        }
        prompt
    }
}

#[async_trait]
impl ScriptGenerator for OpenAiGenerator {
    async fn generate_script(
        &self,
        product: &Value,
        template: Option<&str>,
    ) -> CoreResult<GenerationResult> {
        let request = json!({
            "model": self.model,
            "messages": [{"role": "user", "content": Self::build_prompt(product, template)}],
        });

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| CoreError::Generation(format!("Generation request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::Generation(format!(
                "Generation API returned {status}"
            )));
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CoreError::Generation(format!("Invalid generation response: {e}")))?;

        let script = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                CoreError::Generation("Generation response contained no choices".to_string())
            })?;

        Ok(GenerationResult {
            script: Some(script),
            video_id: new_video_id("vid"),
            status: GenerationStatus::Ready,
        })
    }
}

/// Mock generator: no outbound call, no script. Mirrors the behavior of the
/// mock-only deployment, which only acknowledges the request.
pub struct SimulatedScriptGenerator;

#[async_trait]
impl ScriptGenerator for SimulatedScriptGenerator {
    async fn generate_script(
        &self,
        _product: &Value,
        _template: Option<&str>,
    ) -> CoreResult<GenerationResult> {
        Ok(GenerationResult {
            script: None,
            video_id: new_video_id("sim"),
            status: GenerationStatus::Processing,
        })
    }
}
