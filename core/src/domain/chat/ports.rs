use std::future::Future;

use futures::future::BoxFuture;

use crate::domain::{
    chat::{
        entities::{ChatCompletionRequest, ChatReply},
        stream::SseByteStream,
    },
    common::entities::app_errors::CoreError,
};

use super::services::{ChatInput, ChatStreamInput};

/// One ranked tier in the provider fallback chain. Object-safe so the
/// orchestrator can hold an ordered list of heterogeneous strategies;
/// each strategy encapsulates its own model, limits, and timeout policy.
pub trait ChatCompletionProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether `open_stream` can deliver upstream token streaming.
    fn supports_streaming(&self) -> bool {
        false
    }

    /// Single request/response completion.
    fn complete<'a>(
        &'a self,
        request: ChatCompletionRequest,
    ) -> BoxFuture<'a, Result<String, CoreError>>;

    /// Open an upstream token stream. Providers without streaming support
    /// return an error and the relay falls back to fabrication.
    fn open_stream<'a>(
        &'a self,
        request: ChatCompletionRequest,
    ) -> BoxFuture<'a, Result<SseByteStream, CoreError>> {
        let _ = request;
        Box::pin(async move {
            Err(CoreError::Provider {
                provider: self.name(),
                detail: "streaming not supported".to_string(),
            })
        })
    }
}

/// Service trait for the chat relay.
#[cfg_attr(test, mockall::automock)]
pub trait ChatService: Send + Sync {
    fn chat(
        &self,
        input: ChatInput,
    ) -> impl Future<Output = Result<ChatReply, CoreError>> + Send;

    fn chat_stream(
        &self,
        input: ChatStreamInput,
    ) -> impl Future<Output = Result<SseByteStream, CoreError>> + Send;
}
