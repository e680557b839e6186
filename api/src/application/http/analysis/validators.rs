use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeCropRequest {
    /// Data-URL-encoded image.
    #[validate(length(min = 1, message = "image_base64 is required"))]
    pub image_base64: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Overrides the Accept-Language header when present.
    pub language: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GetAnalysisHistoryParams {
    #[schema(example = 0)]
    pub offset: Option<u32>,
    #[schema(example = 20)]
    pub limit: Option<u32>,
}
