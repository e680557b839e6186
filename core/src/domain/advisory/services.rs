use bytes::Bytes;
use tracing::warn;

use crate::domain::{
    advisory::{
        entities::{AdvisoryOutcome, Composition},
        ports::AdvisoryService,
        tips,
    },
    chat::entities::{ChatCompletionRequest, ChatMessage, ChatRole},
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service},
    farmer::ports::FarmerRepository,
    health::ports::HealthCheckRepository,
    identification::{
        entities::{Analysis, CropAnalysis, HealthVerdict},
        imaging,
        ports::{
            AnalysisRepository, IdentificationService, PlantIdentificationProvider,
            ZeroShotClassifierProvider,
        },
        services::preprocess,
        value_objects::AnalyzeCropInput,
    },
    locale::{Locale, MessageId, catalog},
    storage::ports::ObjectStoragePort,
    weather::ports::{AirQualityProvider, ForecastProvider, GeocodingProvider},
};

/// Minimum confidence before any advice is offered.
const CONFIDENCE_FLOOR: f64 = 0.3;

/// How many diseases the advisory lists at most.
const MAX_LISTED_DISEASES: usize = 3;

const SUMMARY_INSTRUCTION: &str =
    "Summarize for a farmer in one short paragraph and keep actionable next steps.";

fn round_percent(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

// A moderately-healthy verdict still displays as Healthy; only
// needs-attention verdicts warn.
fn status_message(verdict: HealthVerdict) -> MessageId {
    match verdict {
        HealthVerdict::Healthy | HealthVerdict::ModeratelyHealthy => MessageId::StatusHealthy,
        HealthVerdict::NeedsAttention => MessageId::StatusNeedsAttention,
        HealthVerdict::RequiresImmediateAttention => MessageId::StatusImmediateCare,
        HealthVerdict::Unhealthy => MessageId::StatusUnhealthy,
    }
}

/// Compose the advisory skeleton. Pure; summarization happens later.
pub fn compose(analysis: &CropAnalysis, locale: Locale) -> Composition {
    if analysis.is_plant == Some(false) {
        return Composition::NotACrop;
    }

    let Some(label) = analysis.crop_label.as_deref() else {
        return Composition::NeedClearerPhoto;
    };
    if analysis.confidence < CONFIDENCE_FLOOR {
        return Composition::NeedClearerPhoto;
    }

    let header = format!(
        "{}: {} ({}%)",
        catalog::text(locale, MessageId::AdviceLabel),
        label,
        round_percent(analysis.confidence)
    );

    let tips: Vec<String> = tips::tip_for(label).map(str::to_string).into_iter().collect();

    let mut health_lines = Vec::new();
    if let Some(health) = &analysis.health {
        health_lines.push(format!(
            "{}: {} ({}%)",
            catalog::text(locale, MessageId::HealthLabel),
            catalog::text(locale, status_message(health.verdict)),
            round_percent(health.is_healthy_probability)
        ));

        if !health.diseases.is_empty() {
            health_lines.push(catalog::text(locale, MessageId::PossibleIssuesLabel).to_string());
            for disease in health.diseases.iter().take(MAX_LISTED_DISEASES) {
                let probability = disease
                    .probability
                    .map(|p| format!(" {}%", round_percent(p)))
                    .unwrap_or_default();
                let treatment = disease
                    .treatment
                    .as_deref()
                    .map(|t| {
                        format!(
                            " | {}: {}",
                            catalog::text(locale, MessageId::TreatmentLabel),
                            t
                        )
                    })
                    .unwrap_or_default();
                health_lines.push(format!("- {}{}{}", disease.name, probability, treatment));
            }
        }
    }

    Composition::Report {
        header,
        tips,
        health_lines,
    }
}

impl<PI, ZC, AR, FR, OS, HC, FP, AQ, GC> AdvisoryService
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
    async fn synthesize_advisory(&self, analysis: CropAnalysis, locale: Locale) -> String {
        let (header, tip_list, health_lines) = match compose(&analysis, locale) {
            Composition::NotACrop => {
                return catalog::text(locale, MessageId::NotCropDetected).to_string();
            }
            Composition::NeedClearerPhoto => {
                return catalog::text(locale, MessageId::NeedClearerPhoto).to_string();
            }
            Composition::Report {
                header,
                tips,
                health_lines,
            } => (header, tips, health_lines),
        };

        // Ask the provider chain for a short summary; degrade to the
        // templated list verbatim when every tier fails.
        let mut summary_input = vec![header.clone()];
        summary_input.extend(tip_list.iter().map(|t| format!("- {t}")));
        summary_input.extend(health_lines.iter().cloned());

        let request = ChatCompletionRequest::new(
            format!(
                "You are Krishi-Seer's agricultural AI assistant. Reply in language: {}.",
                locale.as_str()
            ),
            vec![ChatMessage {
                role: ChatRole::User,
                content: format!("{}\n\n{}", SUMMARY_INSTRUCTION, summary_input.join("\n")),
            }],
        );

        for provider in &self.chat_providers {
            match provider.complete(request.clone()).await {
                Ok(summary) if !summary.is_empty() => return summary,
                Ok(_) => warn!("{} returned an empty summary", provider.name()),
                Err(err) => warn!("{} summary failed: {err}", provider.name()),
            }
        }

        let mut lines = vec![header];
        lines.extend(tip_list);
        lines.extend(health_lines);
        lines.join("\n- ")
    }

    async fn analyze_and_advise(
        &self,
        input: AnalyzeCropInput,
        locale: Locale,
    ) -> Result<AdvisoryOutcome, CoreError> {
        // Resize once up front; identification sees the same bytes the
        // sink stores.
        let mut input = input;
        input.image_data_url = preprocess(input.image_data_url).await;

        let analysis = self.identify_crop(input.clone()).await?;
        let advisory = self.synthesize_advisory(analysis.clone(), locale).await;

        // Best-effort sink: image upload for authenticated callers, then
        // the durable record. Neither failure reaches the caller.
        let mut image_url = None;
        if input.user_id.is_some() {
            if let Some((mime, bytes)) = imaging::parse_data_url(&input.image_data_url) {
                let object_key = format!("advisory-{}.jpg", generate_uuid_v7());
                let bucket = self.buckets.analyses.clone();
                match self
                    .object_storage
                    .put_object(&bucket, &object_key, Bytes::from(bytes), &mime)
                    .await
                {
                    Ok(()) => image_url = Some(self.object_storage.public_url(&bucket, &object_key)),
                    Err(err) => warn!("analysis image upload failed: {err}"),
                }
            }
        }

        let record = Analysis::from_crop_analysis(input.user_id, image_url, &analysis);
        if let Err(err) = self.analysis_repository.create(record).await {
            warn!("failed to persist analysis: {err}");
        }

        Ok(AdvisoryOutcome { analysis, advisory })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use futures::future::BoxFuture;
    use mockall::predicate::eq;
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        chat::ports::ChatCompletionProvider,
        common::services::Buckets,
        farmer::ports::MockFarmerRepository,
        health::ports::MockHealthCheckRepository,
        identification::{
            entities::{Disease, HealthAssessment, IdentificationReport, SpeciesSuggestion},
            ports::{
                MockAnalysisRepository, MockPlantIdentificationProvider,
                MockZeroShotClassifierProvider,
            },
        },
        storage::ports::MockObjectStoragePort,
        weather::ports::{
            MockAirQualityProvider, MockForecastProvider, MockGeocodingProvider,
        },
    };

    struct FailingProvider;

    impl ChatCompletionProvider for FailingProvider {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn complete<'a>(
            &'a self,
            _request: ChatCompletionRequest,
        ) -> BoxFuture<'a, Result<String, CoreError>> {
            Box::pin(async {
                Err(CoreError::Provider {
                    provider: "failing",
                    detail: "down".to_string(),
                })
            })
        }
    }

    fn healthy_wheat() -> CropAnalysis {
        CropAnalysis {
            is_plant: Some(true),
            crop_label: Some("Wheat".into()),
            confidence: 0.82,
            health: Some(HealthAssessment::new(0.85, Vec::new())),
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn low_confidence_yields_exactly_the_clearer_photo_message() {
        let mut analysis = healthy_wheat();
        analysis.confidence = 0.29;
        assert_eq!(compose(&analysis, Locale::En), Composition::NeedClearerPhoto);
    }

    #[test]
    fn missing_label_yields_clearer_photo_even_with_health_data() {
        let mut analysis = healthy_wheat();
        analysis.crop_label = None;
        assert_eq!(compose(&analysis, Locale::En), Composition::NeedClearerPhoto);
    }

    #[test]
    fn non_plant_yields_not_a_crop() {
        let mut analysis = healthy_wheat();
        analysis.is_plant = Some(false);
        assert_eq!(compose(&analysis, Locale::En), Composition::NotACrop);
    }

    #[test]
    fn wheat_report_includes_crown_root_tip_and_header() {
        let Composition::Report {
            header,
            tips,
            health_lines,
        } = compose(&healthy_wheat(), Locale::En)
        else {
            panic!("expected a report");
        };
        assert_eq!(header, "AI Advice: Wheat (82%)");
        assert_eq!(
            tips,
            vec!["Ensure adequate irrigation at crown root initiation; monitor rust.".to_string()]
        );
        assert_eq!(health_lines, vec!["Health: Healthy (85%)".to_string()]);
    }

    #[test]
    fn disease_lines_are_capped_and_formatted() {
        let diseases: Vec<Disease> = (0..5)
            .map(|i| Disease {
                name: format!("Disease {i}"),
                probability: Some(0.4),
                treatment: (i == 0).then(|| "apply fungicide".to_string()),
            })
            .collect();
        let mut analysis = healthy_wheat();
        analysis.health = Some(HealthAssessment::new(0.5, diseases));

        let Composition::Report { health_lines, .. } = compose(&analysis, Locale::En) else {
            panic!("expected a report");
        };
        // Status line + issues label + three diseases.
        assert_eq!(health_lines.len(), 5);
        assert_eq!(health_lines[1], "Possible issues:");
        assert_eq!(
            health_lines[2],
            "- Disease 0 40% | Treatment: apply fungicide"
        );
        assert_eq!(health_lines[3], "- Disease 1 40%");
    }

    #[test]
    fn hindi_health_lines_use_hindi_labels() {
        let Composition::Report { health_lines, .. } = compose(&healthy_wheat(), Locale::Hi)
        else {
            panic!("expected a report");
        };
        assert_eq!(health_lines[0], "स्वास्थ्य: स्वस्थ (85%)");
    }

    fn base_service(
        plant_id: MockPlantIdentificationProvider,
        analyses: MockAnalysisRepository,
        storage: MockObjectStoragePort,
        providers: Vec<Arc<dyn ChatCompletionProvider>>,
    ) -> Service<
        MockPlantIdentificationProvider,
        MockZeroShotClassifierProvider,
        MockAnalysisRepository,
        MockFarmerRepository,
        MockObjectStoragePort,
        MockHealthCheckRepository,
        MockForecastProvider,
        MockAirQualityProvider,
        MockGeocodingProvider,
    > {
        Service::new(
            plant_id,
            MockZeroShotClassifierProvider::new(),
            analyses,
            MockFarmerRepository::new(),
            storage,
            MockHealthCheckRepository::new(),
            MockForecastProvider::new(),
            MockAirQualityProvider::new(),
            MockGeocodingProvider::new(),
            providers,
            Buckets {
                avatars: "avatars".into(),
                analyses: "analyses".into(),
            },
        )
    }

    #[tokio::test]
    async fn summarization_failure_degrades_to_bullet_list() {
        let svc = base_service(
            MockPlantIdentificationProvider::new(),
            MockAnalysisRepository::new(),
            MockObjectStoragePort::new(),
            vec![Arc::new(FailingProvider)],
        );

        let text = svc.synthesize_advisory(healthy_wheat(), Locale::En).await;
        assert_eq!(
            text,
            "AI Advice: Wheat (82%)\n- Ensure adequate irrigation at crown root initiation; \
             monitor rust.\n- Health: Healthy (85%)"
        );
    }

    #[tokio::test]
    async fn pipeline_persists_and_swallows_sink_failures() {
        let mut plant_id = MockPlantIdentificationProvider::new();
        plant_id.expect_identify().returning(|_, _| {
            Box::pin(async {
                Ok(IdentificationReport {
                    suggestions: vec![SpeciesSuggestion {
                        name: "wheat".into(),
                        probability: 0.82,
                    }],
                    is_plant_probability: Some(0.95),
                    is_healthy_probability: Some(0.85),
                    diseases: Vec::new(),
                })
            })
        });

        let mut analyses = MockAnalysisRepository::new();
        analyses
            .expect_create()
            .times(1)
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));

        let svc = base_service(
            plant_id,
            analyses,
            MockObjectStoragePort::new(),
            Vec::new(),
        );

        let outcome = svc
            .analyze_and_advise(
                AnalyzeCropInput {
                    image_data_url: "data:image/jpeg;base64,aGVsbG8=".into(),
                    latitude: None,
                    longitude: None,
                    user_id: None,
                },
                Locale::En,
            )
            .await
            .unwrap();

        assert_eq!(outcome.analysis.crop_label.as_deref(), Some("Wheat"));
        assert!(outcome.advisory.starts_with("AI Advice: Wheat (82%)"));
    }

    #[tokio::test]
    async fn authenticated_pipeline_uploads_the_image() {
        let mut plant_id = MockPlantIdentificationProvider::new();
        plant_id.expect_identify().returning(|_, _| {
            Box::pin(async {
                Ok(IdentificationReport {
                    suggestions: vec![SpeciesSuggestion {
                        name: "rice".into(),
                        probability: 0.9,
                    }],
                    is_plant_probability: Some(0.9),
                    is_healthy_probability: None,
                    diseases: Vec::new(),
                })
            })
        });

        let mut storage = MockObjectStoragePort::new();
        storage
            .expect_put_object()
            .times(1)
            .returning(|_, _, _, _| Box::pin(async { Ok(()) }));
        storage
            .expect_public_url()
            .with(eq("analyses"), mockall::predicate::always())
            .returning(|bucket, key| format!("http://storage/{bucket}/{key}"));

        let mut analyses = MockAnalysisRepository::new();
        analyses.expect_create().times(1).returning(|analysis| {
            Box::pin(async move {
                assert!(analysis.image_url.as_deref().unwrap().starts_with("http://storage/analyses/"));
                Ok(analysis)
            })
        });

        let svc = base_service(plant_id, analyses, storage, Vec::new());

        svc.analyze_and_advise(
            AnalyzeCropInput {
                image_data_url: "data:image/jpeg;base64,aGVsbG8=".into(),
                latitude: None,
                longitude: None,
                user_id: Some(Uuid::nil()),
            },
            Locale::En,
        )
        .await
        .unwrap();
    }
}
