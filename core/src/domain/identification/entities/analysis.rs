use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

use super::health::HealthAssessment;

/// Normalized per-request analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CropAnalysis {
    /// Whether the image was classified as a plant at all; `None` when the
    /// provider gave no plant-probability signal.
    pub is_plant: Option<bool>,
    pub crop_label: Option<String>,
    /// Top-1 classification probability; 0 when absent.
    pub confidence: f64,
    pub health: Option<HealthAssessment>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Raw, provider-shaped identification data before normalization.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IdentificationReport {
    pub suggestions: Vec<SpeciesSuggestion>,
    pub is_plant_probability: Option<f64>,
    pub is_healthy_probability: Option<f64>,
    pub diseases: Vec<super::Disease>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesSuggestion {
    pub name: String,
    pub probability: f64,
}

/// Durable analysis record. Created once at the end of a successful
/// analysis, never mutated, never deleted by the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Analysis {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub image_url: Option<String>,
    pub crop_label: Option<String>,
    pub confidence: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub health_status: Option<String>,
    pub health_probability: Option<f64>,
    /// Disease list serialized as JSON, mirroring the wire shape.
    pub diseases: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Analysis {
    pub fn from_crop_analysis(
        user_id: Option<Uuid>,
        image_url: Option<String>,
        analysis: &CropAnalysis,
    ) -> Self {
        let (_, timestamp) = generate_timestamp();
        let now = Utc::now();

        let health = analysis.health.as_ref();
        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            image_url,
            crop_label: analysis.crop_label.clone(),
            confidence: Some(analysis.confidence),
            latitude: analysis.latitude,
            longitude: analysis.longitude,
            health_status: health.map(|h| h.verdict.as_str().to_string()),
            health_probability: health.map(|h| h.is_healthy_probability),
            diseases: health
                .filter(|h| !h.diseases.is_empty())
                .and_then(|h| serde_json::to_string(&h.diseases).ok()),
            created_at: now,
        }
    }

    /// Minimal anonymized row written by the classifier path.
    pub fn anonymized(
        user_id: Option<Uuid>,
        crop_label: Option<String>,
        confidence: f64,
    ) -> Self {
        let (_, timestamp) = generate_timestamp();
        let now = Utc::now();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            image_url: None,
            crop_label,
            confidence: Some(confidence),
            latitude: None,
            longitude: None,
            health_status: None,
            health_probability: None,
            diseases: None,
            created_at: now,
        }
    }
}
