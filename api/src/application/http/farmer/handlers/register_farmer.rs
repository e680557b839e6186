use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    farmer::validators::RegisterFarmerRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use krishiseer_core::domain::farmer::{
    entities::Farmer, ports::FarmerService, value_objects::RegisterFarmerInput,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FarmerResponse {
    pub data: Farmer,
}

#[utoipa::path(
    post,
    path = "/farmers",
    tag = "farmer",
    summary = "Register a farmer profile",
    responses(
        (status = 201, body = FarmerResponse),
        (status = 400, description = "Missing or invalid fields")
    ),
    request_body = RegisterFarmerRequest
)]
pub async fn register_farmer(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterFarmerRequest>,
) -> Result<Response<FarmerResponse>, ApiError> {
    let farmer = state
        .service
        .register_farmer(RegisterFarmerInput {
            name: payload.name,
            age: payload.age,
            location: payload.location,
            username: payload.username,
            email: payload.email,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(FarmerResponse { data: farmer }))
}
