use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    chat::validators::ChatRequestBody,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use krishiseer_core::domain::chat::{ports::ChatService, services::ChatInput};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponseBody {
    pub reply: String,
}

#[utoipa::path(
    post,
    path = "/chat",
    tag = "chat",
    summary = "Chat with the assistant",
    description = "Single-turn chat; falls through the provider tiers to a rule-based responder",
    responses(
        (status = 200, body = ChatResponseBody)
    ),
    request_body = ChatRequestBody
)]
pub async fn chat(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ChatRequestBody>,
) -> Result<Response<ChatResponseBody>, ApiError> {
    let reply = state
        .service
        .chat(ChatInput {
            text: payload.text,
            language: payload.language,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ChatResponseBody { reply: reply.reply }))
}
