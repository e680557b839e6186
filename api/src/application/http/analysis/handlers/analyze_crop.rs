use axum::{extract::State, http::HeaderMap};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::OptionalIdentity,
    http::{
        accept_language::locale_for,
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
use krishiseer_core::domain::{
    advisory::{entities::AdvisoryOutcome, ports::AdvisoryService},
    common::entities::app_errors::CoreError,
    identification::value_objects::AnalyzeCropInput,
    locale::{MessageId, catalog},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeCropResponse {
    pub data: AdvisoryOutcome,
}

#[utoipa::path(
    post,
    path = "/analyses",
    tag = "analysis",
    summary = "Analyze a crop image",
    description = "Identifies the crop and its health from an image and returns a localized advisory",
    responses(
        (status = 200, body = AnalyzeCropResponse)
    ),
    request_body = AnalyzeCropRequest
)]
pub async fn analyze_crop(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    headers: HeaderMap,
    ValidateJson(payload): ValidateJson<AnalyzeCropRequest>,
) -> Result<Response<AnalyzeCropResponse>, ApiError> {
    let locale = locale_for(&headers, payload.language.as_deref());

    let outcome = state
        .service
        .analyze_and_advise(
            AnalyzeCropInput {
                image_data_url: payload.image_base64,
                latitude: payload.latitude,
                longitude: payload.longitude,
                user_id: identity.map(|i| i.user_id),
            },
            locale,
        )
        .await
        .map_err(|err| match err {
            // Provider exhaustion without response text gets the generic
            // localized failure message instead of an empty error.
            CoreError::Provider { detail, .. } if detail.trim().is_empty() => {
                ApiError::BadGateway(
                    catalog::text(locale, MessageId::AnalysisFailed).to_string(),
                )
            }
            other => ApiError::from(other),
        })?;

    Ok(Response::OK(AnalyzeCropResponse { data: outcome }))
}
