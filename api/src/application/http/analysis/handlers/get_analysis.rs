use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use krishiseer_core::domain::identification::{
    entities::Analysis, ports::IdentificationService, value_objects::GetAnalysisInput,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResponse {
    pub data: Analysis,
}

#[utoipa::path(
    get,
    path = "/analyses/{analysis_id}",
    tag = "analysis",
    summary = "Get a single analysis",
    params(
        ("analysis_id" = Uuid, Path, description = "Analysis ID"),
    ),
    responses(
        (status = 200, body = AnalysisResponse),
        (status = 404, description = "Analysis not found")
    )
)]
pub async fn get_analysis(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Path(analysis_id): Path<Uuid>,
) -> Result<Response<AnalysisResponse>, ApiError> {
    let analysis = state
        .service
        .get_analysis(GetAnalysisInput { analysis_id })
        .await
        .map_err(ApiError::from)?;

    // Records are per-farmer; anonymous rows stay reachable to their
    // creator only through history.
    if analysis.user_id.is_some() && analysis.user_id != Some(identity.user_id) {
        return Err(ApiError::NotFound("resource not found".to_string()));
    }

    Ok(Response::OK(AnalysisResponse { data: analysis }))
}
