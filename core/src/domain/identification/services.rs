use std::time::Duration;

use tracing::warn;

use crate::domain::{
    common::{
        entities::{Coordinates, app_errors::CoreError},
        services::Service,
    },
    farmer::ports::FarmerRepository,
    health::ports::HealthCheckRepository,
    identification::{
        entities::{Analysis, CropAnalysis, HealthAssessment, IdentificationReport},
        imaging, labels,
        ports::{
            AnalysisRepository, IdentificationService, PlantIdentificationProvider,
            ZeroShotClassifierProvider,
        },
        value_objects::{AnalyzeCropInput, GetAnalysisHistoryInput, GetAnalysisInput},
    },
    storage::ports::ObjectStoragePort,
    weather::ports::{AirQualityProvider, ForecastProvider, GeocodingProvider},
};

/// Backoff before the single retry against the primary provider.
const RETRY_BACKOFF: Duration = Duration::from_millis(600);

/// Plant-probability threshold for the primary provider's plant check.
const IS_PLANT_THRESHOLD: f64 = 0.3;

/// Zero-shot plant-check confidence threshold.
const ZERO_SHOT_PLANT_THRESHOLD: f64 = 0.7;

/// Normalize a raw provider report into the canonical analysis shape.
pub fn normalize_report(
    report: &IdentificationReport,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> CropAnalysis {
    let mut crop_label = None;
    let mut confidence = 0.0;

    if let Some(top) = report.suggestions.first() {
        if !top.name.is_empty() {
            crop_label = Some(labels::title_case(&top.name));
        }
        confidence = top.probability;
    }

    let is_plant = report
        .is_plant_probability
        .map(|p| p >= IS_PLANT_THRESHOLD);

    let health = report
        .is_healthy_probability
        .map(|p| HealthAssessment::new(p, report.diseases.clone()));

    CropAnalysis {
        is_plant,
        crop_label,
        confidence,
        health,
        latitude,
        longitude,
    }
}

impl<PI, ZC, AR, FR, OS, HC, FP, AQ, GC> IdentificationService
    for Service<PI, ZC, AR, FR, OS, HC, FP, AQ, GC>
where
    PI: PlantIdentificationProvider,
    ZC: ZeroShotClassifierProvider,
    AR: AnalysisRepository,
    FR: FarmerRepository,
    OS: ObjectStoragePort,
    HC: HealthCheckRepository,
    FP: ForecastProvider,
    AQ: AirQualityProvider,
    GC: GeocodingProvider,
{
    async fn identify_crop(&self, input: AnalyzeCropInput) -> Result<CropAnalysis, CoreError> {
        let image = preprocess(input.image_data_url.clone()).await;
        let payload = imaging::strip_data_url_prefix(&image).to_string();

        let coordinates = match (input.latitude, input.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            _ => None,
        };

        // Exactly one retry after a short backoff; the second failure
        // surfaces with the raw provider text.
        let report = match self
            .plant_id_provider
            .identify(payload.clone(), coordinates)
            .await
        {
            Ok(report) => report,
            Err(err) => {
                warn!("identification attempt failed, retrying once: {err}");
                tokio::time::sleep(RETRY_BACKOFF).await;
                self.plant_id_provider.identify(payload, coordinates).await?
            }
        };

        Ok(normalize_report(&report, input.latitude, input.longitude))
    }

    async fn classify_crop(&self, input: AnalyzeCropInput) -> Result<CropAnalysis, CoreError> {
        let image = preprocess(input.image_data_url.clone()).await;

        let mut is_plant = false;
        let mut crop_label: Option<String> = None;
        let mut confidence = 0.0;

        // First attempt: zero-shot plant check, then crop labeling.
        match self
            .classifier_provider
            .classify_with_labels(
                image.clone(),
                labels::PLANT_CHECK_LABELS.map(String::from).to_vec(),
            )
            .await
        {
            Ok(scores) => {
                if let Some(top) = scores.first() {
                    is_plant = top.label.to_lowercase().contains("plant")
                        && top.score >= ZERO_SHOT_PLANT_THRESHOLD;
                }

                if is_plant {
                    match self
                        .classifier_provider
                        .classify_with_labels(
                            image.clone(),
                            labels::CROP_LABELS.map(String::from).to_vec(),
                        )
                        .await
                    {
                        Ok(crop_scores) => {
                            if let Some(best) = crop_scores.first() {
                                crop_label = Some(labels::normalize_crop_label(&best.label));
                                confidence = best.score;
                            }
                        }
                        Err(err) => warn!("zero-shot crop labeling failed: {err}"),
                    }
                }
            }
            Err(err) => warn!("zero-shot plant check failed: {err}"),
        }

        // Fallback: generic classification, inferring plant-ness and crop
        // label from label keywords.
        if !is_plant || crop_label.is_none() {
            if let Some((_, bytes)) = imaging::parse_data_url(&image) {
                match self.classifier_provider.classify_generic(bytes).await {
                    Ok(scores) => {
                        let lowered: Vec<String> =
                            scores.iter().map(|s| s.label.to_lowercase()).collect();
                        is_plant = lowered
                            .iter()
                            .any(|l| labels::PLANT_HINTS.iter().any(|h| l.contains(h)));
                        if crop_label.is_none() {
                            crop_label = labels::CROP_LABELS
                                .iter()
                                .find(|c| lowered.iter().any(|l| l.contains(*c)))
                                .map(|c| labels::title_case(c));
                        }
                        if let Some(top) = scores.first() {
                            confidence = top.score;
                        }
                    }
                    Err(err) => warn!("generic classification failed: {err}"),
                }
            }
        }

        // Best-effort anonymized record; failures never reach the caller.
        let row = Analysis::anonymized(input.user_id, crop_label.clone(), confidence);
        if let Err(err) = self.analysis_repository.create(row).await {
            warn!("failed to persist anonymized analysis: {err}");
        }

        Ok(CropAnalysis {
            is_plant: Some(is_plant),
            crop_label,
            confidence,
            health: None,
            latitude: input.latitude,
            longitude: input.longitude,
        })
    }

    async fn get_analysis_history(
        &self,
        input: GetAnalysisHistoryInput,
    ) -> Result<Vec<Analysis>, CoreError> {
        self.analysis_repository
            .get_by_user(input.user_id, input.filter)
            .await
    }

    async fn get_analysis(&self, input: GetAnalysisInput) -> Result<Analysis, CoreError> {
        self.analysis_repository
            .get_by_id(input.analysis_id)
            .await?
            .ok_or(CoreError::NotFound)
    }
}

/// Resize on a blocking thread; a failed resize (or a failed spawn) falls
/// back to the original image. Idempotent: already-small images pass
/// through byte-identical.
pub async fn preprocess(image_data_url: String) -> String {
    let original = image_data_url.clone();
    match tokio::task::spawn_blocking(move || imaging::resize_if_needed(&image_data_url)).await {
        Ok(resized) => resized,
        Err(err) => {
            warn!("image preprocessing task failed: {err}");
            original
        }
    }
}
