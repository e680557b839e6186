use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::OptionalIdentity,
    http::{
        analysis::validators::AnalyzeCropRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};
use krishiseer_core::domain::identification::{
    entities::CropAnalysis, ports::IdentificationService, value_objects::AnalyzeCropInput,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClassifyCropResponse {
    pub data: CropAnalysis,
}

#[utoipa::path(
    post,
    path = "/analyses/classify",
    tag = "analysis",
    summary = "Classify a crop image",
    description = "Secondary classifier path: zero-shot plant check with a generic-classifier fallback",
    responses(
        (status = 200, body = ClassifyCropResponse)
    ),
    request_body = AnalyzeCropRequest
)]
pub async fn classify_crop(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    ValidateJson(payload): ValidateJson<AnalyzeCropRequest>,
) -> Result<Response<ClassifyCropResponse>, ApiError> {
    let analysis = state
        .service
        .classify_crop(AnalyzeCropInput {
            image_data_url: payload.image_base64,
            latitude: payload.latitude,
            longitude: payload.longitude,
            user_id: identity.map(|i| i.user_id),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ClassifyCropResponse { data: analysis }))
}
