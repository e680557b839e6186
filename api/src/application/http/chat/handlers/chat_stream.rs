use axum::{
    body::Body,
    extract::State,
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::Response as AxumResponse,
};

use crate::application::http::{
    chat::validators::{ChatMessageDto, ChatStreamRequestBody},
    server::{
        api_entities::api_error::{ApiError, ValidateJson},
        app_state::AppState,
    },
};
use krishiseer_core::domain::chat::{
    entities::{ChatMessage, ChatRole},
    ports::ChatService,
    services::ChatStreamInput,
};

fn into_message(dto: ChatMessageDto) -> ChatMessage {
    let role = match dto.role.as_str() {
        "assistant" => ChatRole::Assistant,
        "system" => ChatRole::System,
        _ => ChatRole::User,
    };
    ChatMessage {
        role,
        content: dto.content,
    }
}

#[utoipa::path(
    post,
    path = "/chat/stream",
    tag = "chat",
    summary = "Stream a chat reply",
    description = "Server-sent events: upstream token deltas or a fabricated word stream, \
                   terminated by a [DONE] sentinel. Aborting the request cancels the stream.",
    responses(
        (status = 200, description = "text/event-stream of delta fragments")
    ),
    request_body = ChatStreamRequestBody
)]
pub async fn chat_stream(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ChatStreamRequestBody>,
) -> Result<AxumResponse, ApiError> {
    let stream = state
        .service
        .chat_stream(ChatStreamInput {
            messages: payload.messages.into_iter().map(into_message).collect(),
            language: payload.language,
        })
        .await
        .map_err(ApiError::from)?;

    // Dropping the body (client abort) drops the stream and releases any
    // upstream connection.
    AxumResponse::builder()
        .header(CONTENT_TYPE, "text/event-stream")
        .header(CACHE_CONTROL, "no-store")
        .body(Body::from_stream(stream))
        .map_err(|e| ApiError::InternalServerError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_roles_default_to_user() {
        let message = into_message(ChatMessageDto {
            role: "bot".into(),
            content: "hi".into(),
        });
        assert_eq!(message.role, ChatRole::User);

        let message = into_message(ChatMessageDto {
            role: "assistant".into(),
            content: "hi".into(),
        });
        assert_eq!(message.role, ChatRole::Assistant);
    }
}
