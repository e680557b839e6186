use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use krishiseer_core::domain::{common::entities::Coordinates, weather::ports::WeatherService};

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct LocateParams {
    /// City name to geocode; omit to locate by caller IP.
    pub city: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LocateResponse {
    pub data: Coordinates,
}

#[utoipa::path(
    get,
    path = "/weather/locate",
    tag = "weather",
    summary = "Resolve a location",
    params(LocateParams),
    responses(
        (status = 200, body = LocateResponse),
        (status = 404, description = "Location could not be resolved")
    )
)]
pub async fn locate(
    State(state): State<AppState>,
    Query(params): Query<LocateParams>,
) -> Result<Response<LocateResponse>, ApiError> {
    let coordinates = state
        .service
        .locate(params.city)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LocateResponse { data: coordinates }))
}
