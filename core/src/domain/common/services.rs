use std::sync::Arc;

use crate::domain::chat::ports::ChatCompletionProvider;

/// The application service: one generic struct carrying every port, with
/// each domain's service trait implemented for it in that domain's
/// `services.rs`.
#[derive(Clone)]
pub struct Service<PI, ZC, AR, FR, OS, HC, FP, AQ, GC> {
    pub plant_id_provider: PI,
    pub classifier_provider: ZC,
    pub analysis_repository: AR,
    pub farmer_repository: FR,
    pub object_storage: OS,
    pub health_check_repository: HC,
    pub forecast_provider: FP,
    pub air_quality_provider: AQ,
    pub geocoding_provider: GC,
    /// Chat tiers in priority order; one attempt per tier.
    pub chat_providers: Vec<Arc<dyn ChatCompletionProvider>>,
    pub buckets: Buckets,
}

/// Bucket names used by the best-effort upload sinks.
#[derive(Clone, Debug)]
pub struct Buckets {
    pub avatars: String,
    pub analyses: String,
}

#[allow(clippy::too_many_arguments)]
impl<PI, ZC, AR, FR, OS, HC, FP, AQ, GC> Service<PI, ZC, AR, FR, OS, HC, FP, AQ, GC> {
    pub fn new(
        plant_id_provider: PI,
        classifier_provider: ZC,
        analysis_repository: AR,
        farmer_repository: FR,
        object_storage: OS,
        health_check_repository: HC,
        forecast_provider: FP,
        air_quality_provider: AQ,
        geocoding_provider: GC,
        chat_providers: Vec<Arc<dyn ChatCompletionProvider>>,
        buckets: Buckets,
    ) -> Self {
        Self {
            plant_id_provider,
            classifier_provider,
            analysis_repository,
            farmer_repository,
            object_storage,
            health_check_repository,
            forecast_provider,
            air_quality_provider,
            geocoding_provider,
            chat_providers,
            buckets,
        }
    }
}
