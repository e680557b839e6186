use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use krishiseer_core::domain::{
    common::entities::Coordinates,
    weather::{entities::WeatherBulletin, ports::WeatherService},
};

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct CurrentWeatherParams {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WeatherBulletinResponse {
    pub data: WeatherBulletin,
}

#[utoipa::path(
    get,
    path = "/weather/current",
    tag = "weather",
    summary = "Current weather and air quality",
    description = "Both fetches run concurrently; either half may be absent",
    params(CurrentWeatherParams),
    responses(
        (status = 200, body = WeatherBulletinResponse)
    )
)]
pub async fn get_current(
    State(state): State<AppState>,
    Query(params): Query<CurrentWeatherParams>,
) -> Result<Response<WeatherBulletinResponse>, ApiError> {
    let bulletin = state
        .service
        .current_conditions(Coordinates {
            latitude: params.latitude,
            longitude: params.longitude,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(WeatherBulletinResponse { data: bulletin }))
}
