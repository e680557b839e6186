use std::future::Future;

use crate::domain::{
    advisory::entities::AdvisoryOutcome,
    common::entities::app_errors::CoreError,
    identification::{entities::CropAnalysis, value_objects::AnalyzeCropInput},
    locale::Locale,
};

/// Service trait for turning identification results into farmer-facing
/// guidance.
#[cfg_attr(test, mockall::automock)]
pub trait AdvisoryService: Send + Sync {
    /// Localized advisory text for an analysis. Never fails: provider
    /// outages degrade to the templated bullet list.
    fn synthesize_advisory(
        &self,
        analysis: CropAnalysis,
        locale: Locale,
    ) -> impl Future<Output = String> + Send;

    /// The full pipeline: identify, synthesize, then best-effort
    /// persistence of the analysis (with image upload for authenticated
    /// callers).
    fn analyze_and_advise(
        &self,
        input: AnalyzeCropInput,
        locale: Locale,
    ) -> impl Future<Output = Result<AdvisoryOutcome, CoreError>> + Send;
}
