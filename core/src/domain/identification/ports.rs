use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::{Coordinates, app_errors::CoreError},
    identification::{
        entities::{Analysis, CropAnalysis, IdentificationReport},
        value_objects::{
            AnalyzeCropInput, GetAnalysesFilter, GetAnalysisHistoryInput, GetAnalysisInput,
            LabelScore,
        },
    },
};

/// Primary identification provider (species + health assessment).
#[cfg_attr(test, mockall::automock)]
pub trait PlantIdentificationProvider: Send + Sync {
    fn identify(
        &self,
        image_base64: String,
        coordinates: Option<Coordinates>,
    ) -> impl Future<Output = Result<IdentificationReport, CoreError>> + Send;
}

/// Secondary classifier: zero-shot over candidate labels plus a generic
/// byte-level classification call.
#[cfg_attr(test, mockall::automock)]
pub trait ZeroShotClassifierProvider: Send + Sync {
    fn classify_with_labels(
        &self,
        image_data_url: String,
        candidate_labels: Vec<String>,
    ) -> impl Future<Output = Result<Vec<LabelScore>, CoreError>> + Send;

    fn classify_generic(
        &self,
        image_bytes: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<LabelScore>, CoreError>> + Send;
}

/// Repository for durable analysis records.
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisRepository: Send + Sync {
    fn create(
        &self,
        analysis: Analysis,
    ) -> impl Future<Output = Result<Analysis, CoreError>> + Send;

    fn get_by_id(
        &self,
        analysis_id: Uuid,
    ) -> impl Future<Output = Result<Option<Analysis>, CoreError>> + Send;

    fn get_by_user(
        &self,
        user_id: Uuid,
        filter: GetAnalysesFilter,
    ) -> impl Future<Output = Result<Vec<Analysis>, CoreError>> + Send;
}

/// Service trait for the identification flows.
#[cfg_attr(test, mockall::automock)]
pub trait IdentificationService: Send + Sync {
    /// Primary path: preprocess, identify with health assessment (one
    /// retry on failure), normalize.
    fn identify_crop(
        &self,
        input: AnalyzeCropInput,
    ) -> impl Future<Output = Result<CropAnalysis, CoreError>> + Send;

    /// Secondary path: zero-shot plant check and crop labeling with a
    /// generic-classifier fallback; persists an anonymized row
    /// best-effort.
    fn classify_crop(
        &self,
        input: AnalyzeCropInput,
    ) -> impl Future<Output = Result<CropAnalysis, CoreError>> + Send;

    fn get_analysis_history(
        &self,
        input: GetAnalysisHistoryInput,
    ) -> impl Future<Output = Result<Vec<Analysis>, CoreError>> + Send;

    fn get_analysis(
        &self,
        input: GetAnalysisInput,
    ) -> impl Future<Output = Result<Analysis, CoreError>> + Send;
}
