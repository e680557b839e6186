use axum::extract::{Multipart, Path, State};

use super::register_farmer::FarmerResponse;
use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use krishiseer_core::domain::farmer::{ports::FarmerService, value_objects::UpdateAvatarInput};

const MAX_AVATAR_SIZE: usize = 5 * 1024 * 1024; // 5MB

#[utoipa::path(
    post,
    path = "/farmers/{username}/avatar",
    tag = "farmer",
    summary = "Upload a farmer avatar",
    description = "Multipart upload; the avatar is stored and the profile's avatar URL updated",
    params(
        ("username" = String, Path, description = "Farmer username"),
    ),
    responses(
        (status = 200, body = FarmerResponse),
        (status = 400, description = "Missing avatar field"),
        (status = 404, description = "Farmer not found")
    )
)]
pub async fn upload_avatar(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    Path(username): Path<String>,
    mut multipart: Multipart,
) -> Result<Response<FarmerResponse>, ApiError> {
    if let Some(caller) = &identity.username
        && caller != &username
    {
        return Err(ApiError::Unauthorized(
            "cannot modify another farmer's profile".to_string(),
        ));
    }

    let mut avatar = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some("avatar") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("avatar.jpg").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read avatar: {}", e)))?;

        if data.len() > MAX_AVATAR_SIZE {
            return Err(ApiError::BadRequest(format!(
                "Avatar too large. Max size is {} bytes",
                MAX_AVATAR_SIZE
            )));
        }

        avatar = Some((file_name, content_type, data));
    }

    let (file_name, content_type, data) =
        avatar.ok_or_else(|| ApiError::BadRequest("Missing avatar field".to_string()))?;

    let farmer = state
        .service
        .update_avatar(UpdateAvatarInput {
            username,
            image: data,
            content_type,
            file_name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(FarmerResponse { data: farmer }))
}
