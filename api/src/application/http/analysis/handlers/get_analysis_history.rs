use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        analysis::validators::GetAnalysisHistoryParams,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};
use krishiseer_core::domain::identification::{
    entities::Analysis,
    ports::IdentificationService,
    value_objects::{GetAnalysesFilter, GetAnalysisHistoryInput},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalysisHistoryResponse {
    pub data: Vec<Analysis>,
}

#[utoipa::path(
    get,
    path = "/analyses",
    tag = "analysis",
    summary = "Get analysis history",
    description = "Past analyses for the signed-in farmer, newest first",
    params(GetAnalysisHistoryParams),
    responses(
        (status = 200, body = AnalysisHistoryResponse)
    )
)]
pub async fn get_analysis_history(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Query(params): Query<GetAnalysisHistoryParams>,
) -> Result<Response<AnalysisHistoryResponse>, ApiError> {
    let analyses = state
        .service
        .get_analysis_history(GetAnalysisHistoryInput {
            user_id: identity.user_id,
            filter: GetAnalysesFilter {
                offset: params.offset,
                limit: params.limit,
            },
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalysisHistoryResponse { data: analyses }))
}
