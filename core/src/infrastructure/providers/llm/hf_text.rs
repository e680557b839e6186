use futures::future::BoxFuture;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::domain::{
    chat::{entities::ChatCompletionRequest, ports::ChatCompletionProvider},
    common::entities::app_errors::CoreError,
};

const MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/microsoft/DialoGPT-large";

const PROMPT_PREFIX: &str = "Agricultural Assistant: ";

/// Hosted text-generation tier; request/response only.
#[derive(Debug, Clone)]
pub struct HuggingFaceTextProvider {
    token: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    #[serde(default)]
    generated_text: String,
}

impl HuggingFaceTextProvider {
    pub fn new(token: String) -> Self {
        Self {
            token,
            client: crate::infrastructure::providers::http_client(),
        }
    }
}

impl ChatCompletionProvider for HuggingFaceTextProvider {
    fn name(&self) -> &'static str {
        "huggingface"
    }

    fn complete<'a>(
        &'a self,
        request: ChatCompletionRequest,
    ) -> BoxFuture<'a, Result<String, CoreError>> {
        Box::pin(async move {
            let prompt = format!("{PROMPT_PREFIX}{}", request.last_user_content());

            let response = self
                .client
                .post(MODEL_URL)
                .bearer_auth(&self.token)
                .json(&json!({
                    "inputs": prompt,
                    "parameters": { "max_length": 200, "temperature": 0.7 },
                }))
                .send()
                .await
                .map_err(|e| CoreError::Provider {
                    provider: "huggingface",
                    detail: e.to_string(),
                })?;

            if !response.status().is_success() {
                let error_text = response.text().await.unwrap_or_default();
                return Err(CoreError::Provider {
                    provider: "huggingface",
                    detail: error_text,
                });
            }

            let generated: Vec<GeneratedText> =
                response.json().await.map_err(|e| CoreError::Provider {
                    provider: "huggingface",
                    detail: format!("invalid response: {e}"),
                })?;

            let reply = generated
                .first()
                .map(|g| g.generated_text.replace(&prompt, "").trim().to_string())
                .unwrap_or_default();

            Ok(reply)
        })
    }
}
