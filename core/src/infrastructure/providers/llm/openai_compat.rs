use futures::{TryStreamExt, future::BoxFuture, StreamExt};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    chat::{
        entities::{ChatCompletionRequest, ChatMessage, ChatRole},
        ports::ChatCompletionProvider,
        stream::SseByteStream,
    },
    common::entities::app_errors::CoreError,
};

const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

const COMPLETION_TEMPERATURE: f32 = 0.4;
const COMPLETION_MAX_TOKENS: u32 = 300;
const STREAM_TEMPERATURE: f32 = 0.3;
const STREAM_MAX_TOKENS: u32 = 250;

/// Chat-completions client for OpenAI-compatible providers; one instance
/// per fallback tier.
#[derive(Debug, Clone)]
pub struct OpenAiCompatProvider {
    name: &'static str,
    base_url: &'static str,
    api_key: String,
    model: &'static str,
    client: Client,
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct CompletionRequest {
    model: &'static str,
    messages: Vec<WireMessage>,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: String,
}

fn wire_messages(request: &ChatCompletionRequest) -> Vec<WireMessage> {
    let mut messages = vec![WireMessage {
        role: ChatRole::System.as_str(),
        content: request.system.clone(),
    }];
    messages.extend(request.messages.iter().map(|m: &ChatMessage| WireMessage {
        role: m.role.as_str(),
        content: m.content.clone(),
    }));
    messages
}

impl OpenAiCompatProvider {
    /// The fast tier.
    pub fn groq(api_key: String) -> Self {
        Self {
            name: "groq",
            base_url: GROQ_BASE_URL,
            api_key,
            model: "llama-3.1-8b-instant",
            client: crate::infrastructure::providers::http_client(),
        }
    }

    /// The general tier.
    pub fn openai(api_key: String) -> Self {
        Self {
            name: "openai",
            base_url: OPENAI_BASE_URL,
            api_key,
            model: "gpt-4o-mini",
            client: crate::infrastructure::providers::http_client(),
        }
    }

    async fn send(
        &self,
        body: CompletionRequest,
    ) -> Result<reqwest::Response, CoreError> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CoreError::Provider {
                provider: self.name,
                detail: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("{} error: {} - {}", self.name, status, error_text);
            return Err(CoreError::Provider {
                provider: self.name,
                detail: format!("{status} - {error_text}"),
            });
        }

        Ok(response)
    }
}

impl ChatCompletionProvider for OpenAiCompatProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn supports_streaming(&self) -> bool {
        true
    }

    fn complete<'a>(
        &'a self,
        request: ChatCompletionRequest,
    ) -> BoxFuture<'a, Result<String, CoreError>> {
        Box::pin(async move {
            let body = CompletionRequest {
                model: self.model,
                messages: wire_messages(&request),
                temperature: COMPLETION_TEMPERATURE,
                max_tokens: COMPLETION_MAX_TOKENS,
                stream: false,
            };

            let parsed: CompletionResponse =
                self.send(body).await?.json().await.map_err(|e| {
                    CoreError::Provider {
                        provider: self.name,
                        detail: format!("invalid response: {e}"),
                    }
                })?;

            parsed
                .choices
                .into_iter()
                .next()
                .map(|c| c.message.content)
                .ok_or(CoreError::Provider {
                    provider: self.name,
                    detail: "no choices in response".to_string(),
                })
        })
    }

    fn open_stream<'a>(
        &'a self,
        request: ChatCompletionRequest,
    ) -> BoxFuture<'a, Result<SseByteStream, CoreError>> {
        Box::pin(async move {
            let body = CompletionRequest {
                model: self.model,
                messages: wire_messages(&request),
                temperature: STREAM_TEMPERATURE,
                max_tokens: STREAM_MAX_TOKENS,
                stream: true,
            };

            let name = self.name;
            let response = self.send(body).await?;

            // SSE bytes pass through untouched; the relay appends the
            // terminal sentinel.
            Ok(response
                .bytes_stream()
                .map_err(move |e| CoreError::Provider {
                    provider: name,
                    detail: e.to_string(),
                })
                .boxed())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_message_leads_the_wire_payload() {
        let request = ChatCompletionRequest::new(
            "be helpful".into(),
            vec![ChatMessage {
                role: ChatRole::User,
                content: "hi".into(),
            }],
        );
        let messages = wire_messages(&request);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
    }

    #[test]
    fn stream_flag_is_omitted_when_false() {
        let body = CompletionRequest {
            model: "m",
            messages: Vec::new(),
            temperature: 0.4,
            max_tokens: 300,
            stream: false,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("stream").is_none());

        let body = CompletionRequest { stream: true, ..body };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json.get("stream"), Some(&serde_json::Value::Bool(true)));
    }
}
