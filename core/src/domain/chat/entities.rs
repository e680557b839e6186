use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Messages older than this are dropped before dispatch to keep provider
/// payloads bounded.
pub const HISTORY_WINDOW: usize = 8;

/// Single-message chat inputs are truncated to this length.
pub const MAX_TEXT_LEN: usize = 4000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
            ChatRole::System => "system",
        }
    }
}

/// What a provider tier receives: a system instruction plus the bounded
/// recent history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatCompletionRequest {
    pub system: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatCompletionRequest {
    /// Build a request, capping the history to the recent window.
    pub fn new(system: String, messages: Vec<ChatMessage>) -> Self {
        let start = messages.len().saturating_sub(HISTORY_WINDOW);
        Self {
            system,
            messages: messages[start..].to_vec(),
        }
    }

    pub fn last_user_content(&self) -> &str {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == ChatRole::User)
            .map(|m| m.content.as_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatReply {
    pub reply: String,
    /// Which tier produced the reply (provider name or "rules").
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(role: ChatRole, content: &str) -> ChatMessage {
        ChatMessage {
            role,
            content: content.to_string(),
        }
    }

    #[test]
    fn history_is_capped_to_recent_window() {
        let messages: Vec<ChatMessage> = (0..20)
            .map(|i| msg(ChatRole::User, &format!("m{i}")))
            .collect();
        let request = ChatCompletionRequest::new("sys".into(), messages);
        assert_eq!(request.messages.len(), HISTORY_WINDOW);
        assert_eq!(request.messages[0].content, "m12");
        assert_eq!(request.messages.last().unwrap().content, "m19");
    }

    #[test]
    fn short_history_is_kept_whole() {
        let messages = vec![msg(ChatRole::User, "hello")];
        let request = ChatCompletionRequest::new("sys".into(), messages);
        assert_eq!(request.messages.len(), 1);
    }

    #[test]
    fn last_user_content_skips_assistant_turns() {
        let request = ChatCompletionRequest::new(
            "sys".into(),
            vec![
                msg(ChatRole::User, "first"),
                msg(ChatRole::Assistant, "reply"),
            ],
        );
        assert_eq!(request.last_user_content(), "first");
    }
}
