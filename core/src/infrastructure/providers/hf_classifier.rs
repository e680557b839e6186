use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::domain::{
    common::entities::app_errors::CoreError,
    identification::{ports::ZeroShotClassifierProvider, value_objects::LabelScore},
};

const INFERENCE_BASE: &str = "https://api-inference.huggingface.co/models";

/// Zero-shot image classification over arbitrary candidate labels.
const ZERO_SHOT_MODEL: &str = "openai/clip-vit-base-patch32";

/// Generic image classification over fixed labels.
const FALLBACK_MODEL: &str = "google/vit-base-patch16-224";

#[derive(Debug, Clone)]
pub struct HuggingFaceClassifier {
    token: Option<String>,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ScoredLabel {
    #[serde(default)]
    label: String,
    #[serde(default)]
    score: f64,
}

impl HuggingFaceClassifier {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token,
            client: super::http_client(),
        }
    }

    fn token(&self) -> Result<&str, CoreError> {
        self.token
            .as_deref()
            .ok_or(CoreError::MissingCredential("HUGGING_FACE_TOKEN"))
    }

    async fn read_scores(response: reqwest::Response) -> Result<Vec<LabelScore>, CoreError> {
        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Hugging Face inference error: {}", error_text);
            return Err(CoreError::Provider {
                provider: "huggingface",
                detail: error_text,
            });
        }

        let scored: Vec<ScoredLabel> = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Hugging Face response: {}", e);
            CoreError::Provider {
                provider: "huggingface",
                detail: format!("invalid response: {e}"),
            }
        })?;

        Ok(scored
            .into_iter()
            .map(|s| LabelScore {
                label: s.label,
                score: s.score,
            })
            .collect())
    }
}

impl ZeroShotClassifierProvider for HuggingFaceClassifier {
    async fn classify_with_labels(
        &self,
        image_data_url: String,
        candidate_labels: Vec<String>,
    ) -> Result<Vec<LabelScore>, CoreError> {
        let token = self.token()?;

        let response = self
            .client
            .post(format!("{INFERENCE_BASE}/{ZERO_SHOT_MODEL}"))
            .bearer_auth(token)
            .header("X-Use-Cache", "false")
            .header("x-wait-for-model", "true")
            .json(&json!({
                "inputs": image_data_url,
                "parameters": { "candidate_labels": candidate_labels },
            }))
            .send()
            .await
            .map_err(|e| CoreError::Provider {
                provider: "huggingface",
                detail: e.to_string(),
            })?;

        Self::read_scores(response).await
    }

    async fn classify_generic(&self, image_bytes: Vec<u8>) -> Result<Vec<LabelScore>, CoreError> {
        let token = self.token()?;

        let response = self
            .client
            .post(format!("{INFERENCE_BASE}/{FALLBACK_MODEL}"))
            .bearer_auth(token)
            .header("Content-Type", "application/octet-stream")
            .header("X-Use-Cache", "false")
            .header("x-wait-for-model", "true")
            .body(image_bytes)
            .send()
            .await
            .map_err(|e| CoreError::Provider {
                provider: "huggingface",
                detail: e.to_string(),
            })?;

        Self::read_scores(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_token_is_surfaced() {
        let classifier = HuggingFaceClassifier::new(None);
        let err = classifier
            .classify_with_labels("data:,".into(), vec!["plant".into()])
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::MissingCredential("HUGGING_FACE_TOKEN"));
    }
}
