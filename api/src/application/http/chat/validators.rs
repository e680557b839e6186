use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ChatRequestBody {
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
    pub language: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatMessageDto {
    /// "user" or "assistant".
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ChatStreamRequestBody {
    #[validate(length(min = 1, message = "messages must not be empty"))]
    pub messages: Vec<ChatMessageDto>,
    pub language: Option<String>,
}
