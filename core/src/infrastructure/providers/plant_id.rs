use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::{Coordinates, app_errors::CoreError},
    identification::{
        entities::{Disease, IdentificationReport, SpeciesSuggestion},
        ports::PlantIdentificationProvider,
    },
};

const PLANT_ID_URL: &str = "https://api.plant.id/v3/identification";

/// Plant.id v3 client: species identification with health assessment.
#[derive(Debug, Clone)]
pub struct PlantIdHttpProvider {
    api_key: Option<String>,
    client: Client,
}

#[derive(Debug, Serialize)]
struct IdentificationRequest {
    images: Vec<String>,
    health: &'static str,
    similar_images: bool,
    symptoms: bool,
    classification_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    longitude: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
struct IdentificationResponse {
    #[serde(default)]
    result: Option<IdentificationResult>,
}

#[derive(Debug, Deserialize, Default)]
struct IdentificationResult {
    #[serde(default)]
    classification: Option<Classification>,
    #[serde(default)]
    is_plant: Option<Probability>,
    #[serde(default)]
    is_plant_probability: Option<f64>,
    #[serde(default)]
    health_assessment: Option<HealthAssessmentRaw>,
}

#[derive(Debug, Deserialize, Default)]
struct Classification {
    #[serde(default)]
    suggestions: Vec<SuggestionRaw>,
}

#[derive(Debug, Deserialize, Default)]
struct SuggestionRaw {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    plant_name: Option<String>,
    #[serde(default)]
    probability: Option<f64>,
    #[serde(default)]
    score: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
struct Probability {
    #[serde(default)]
    probability: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
struct HealthAssessmentRaw {
    #[serde(default)]
    is_healthy: Option<Probability>,
    #[serde(default)]
    is_healthy_probability: Option<f64>,
    #[serde(default)]
    diseases: Vec<DiseaseRaw>,
}

#[derive(Debug, Deserialize, Default)]
struct DiseaseRaw {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    common_name: Option<String>,
    #[serde(default)]
    probability: Option<f64>,
    #[serde(default)]
    score: Option<f64>,
    #[serde(default)]
    treatment: Option<serde_json::Value>,
    #[serde(default)]
    disease_details: Option<DiseaseDetails>,
}

#[derive(Debug, Deserialize, Default)]
struct DiseaseDetails {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    treatment: Option<serde_json::Value>,
}

impl PlantIdHttpProvider {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            client: super::http_client(),
        }
    }
}

fn as_treatment_text(value: Option<&serde_json::Value>) -> Option<String> {
    value.and_then(|v| v.as_str()).map(str::to_string)
}

fn into_report(response: IdentificationResponse) -> IdentificationReport {
    let Some(result) = response.result else {
        return IdentificationReport::default();
    };

    let suggestions = result
        .classification
        .map(|c| c.suggestions)
        .unwrap_or_default()
        .into_iter()
        .map(|s| SpeciesSuggestion {
            name: s.name.or(s.plant_name).unwrap_or_default(),
            probability: s.probability.or(s.score).unwrap_or(0.0),
        })
        .collect();

    let is_plant_probability = result
        .is_plant_probability
        .or_else(|| result.is_plant.as_ref().and_then(|p| p.probability));

    let (is_healthy_probability, diseases) = match result.health_assessment {
        Some(assessment) => {
            let probability = assessment
                .is_healthy
                .as_ref()
                .and_then(|p| p.probability)
                .or(assessment.is_healthy_probability)
                .unwrap_or(0.0);
            let diseases = assessment
                .diseases
                .into_iter()
                .filter_map(|d| {
                    let name = d
                        .name
                        .clone()
                        .or_else(|| {
                            d.disease_details.as_ref().and_then(|det| det.name.clone())
                        })
                        .or(d.common_name.clone())
                        .unwrap_or_default();
                    if name.is_empty() {
                        return None;
                    }
                    let treatment = as_treatment_text(d.treatment.as_ref()).or_else(|| {
                        as_treatment_text(
                            d.disease_details.as_ref().and_then(|det| det.treatment.as_ref()),
                        )
                    });
                    Some(Disease {
                        name,
                        probability: d.probability.or(d.score),
                        treatment,
                    })
                })
                .collect();
            (Some(probability), diseases)
        }
        None => (None, Vec::new()),
    };

    IdentificationReport {
        suggestions,
        is_plant_probability,
        is_healthy_probability,
        diseases,
    }
}

impl PlantIdentificationProvider for PlantIdHttpProvider {
    async fn identify(
        &self,
        image_base64: String,
        coordinates: Option<Coordinates>,
    ) -> Result<IdentificationReport, CoreError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(CoreError::MissingCredential("PLANT_ID_API_KEY"))?;

        let request = IdentificationRequest {
            images: vec![image_base64],
            health: "all",
            similar_images: true,
            symptoms: true,
            classification_level: "species",
            latitude: coordinates.map(|c| c.latitude),
            longitude: coordinates.map(|c| c.longitude),
        };

        let response = self
            .client
            .post(PLANT_ID_URL)
            .header("Api-Key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Plant.id request failed: {}", e);
                CoreError::Provider {
                    provider: "plant.id",
                    detail: e.to_string(),
                }
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Plant.id error: {}", error_text);
            return Err(CoreError::Provider {
                provider: "plant.id",
                detail: error_text,
            });
        }

        let parsed: IdentificationResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Plant.id response: {}", e);
            CoreError::Provider {
                provider: "plant.id",
                detail: format!("invalid response: {e}"),
            }
        })?;

        Ok(into_report(parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_the_v3_response_shape() {
        let raw = serde_json::json!({
            "result": {
                "is_plant": { "probability": 0.96 },
                "classification": {
                    "suggestions": [
                        { "name": "wheat", "probability": 0.82 },
                        { "name": "barley", "probability": 0.1 }
                    ]
                },
                "health_assessment": {
                    "is_healthy": { "probability": 0.55 },
                    "diseases": [
                        {
                            "name": "Leaf spot",
                            "probability": 0.35,
                            "disease_details": { "treatment": "apply fungicide" }
                        },
                        { "name": "", "probability": 0.2 }
                    ]
                }
            }
        });
        let parsed: IdentificationResponse = serde_json::from_value(raw).unwrap();
        let report = into_report(parsed);

        assert_eq!(report.suggestions.len(), 2);
        assert_eq!(report.suggestions[0].name, "wheat");
        assert_eq!(report.is_plant_probability, Some(0.96));
        assert_eq!(report.is_healthy_probability, Some(0.55));
        // Nameless diseases are dropped.
        assert_eq!(report.diseases.len(), 1);
        assert_eq!(
            report.diseases[0].treatment.as_deref(),
            Some("apply fungicide")
        );
    }

    #[test]
    fn missing_health_assessment_yields_no_health_data() {
        let parsed: IdentificationResponse =
            serde_json::from_value(serde_json::json!({ "result": {} })).unwrap();
        let report = into_report(parsed);
        assert!(report.is_healthy_probability.is_none());
        assert!(report.diseases.is_empty());
    }

    #[test]
    fn non_string_treatment_is_ignored() {
        let raw = serde_json::json!({
            "result": {
                "health_assessment": {
                    "is_healthy_probability": 0.4,
                    "diseases": [
                        { "name": "Rust", "treatment": { "chemical": ["spray"] } }
                    ]
                }
            }
        });
        let parsed: IdentificationResponse = serde_json::from_value(raw).unwrap();
        let report = into_report(parsed);
        assert!(report.diseases[0].treatment.is_none());
    }

    #[tokio::test]
    async fn missing_credential_is_surfaced() {
        let provider = PlantIdHttpProvider::new(None);
        let err = provider.identify("abcd".into(), None).await.unwrap_err();
        assert_eq!(err, CoreError::MissingCredential("PLANT_ID_API_KEY"));
    }
}
