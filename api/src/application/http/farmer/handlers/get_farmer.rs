use axum::extract::{Path, State};

use super::register_farmer::FarmerResponse;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use krishiseer_core::domain::farmer::{ports::FarmerService, value_objects::GetFarmerInput};

#[utoipa::path(
    get,
    path = "/farmers/{username}",
    tag = "farmer",
    summary = "Get a farmer profile",
    params(
        ("username" = String, Path, description = "Farmer username"),
    ),
    responses(
        (status = 200, body = FarmerResponse),
        (status = 404, description = "Farmer not found")
    )
)]
pub async fn get_farmer(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Response<FarmerResponse>, ApiError> {
    let farmer = state
        .service
        .get_farmer(GetFarmerInput { username })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(FarmerResponse { data: farmer }))
}
