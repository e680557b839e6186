use super::handlers::{
    chat::{__path_chat, chat},
    chat_stream::{__path_chat_stream, chat_stream},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(chat, chat_stream))]
pub struct ChatApiDoc;

pub fn chat_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/chat", state.args.server.root_path), post(chat))
        .route(
            &format!("{}/chat/stream", state.args.server.root_path),
            post(chat_stream),
        )
}
