use super::handlers::{
    get_farmer::{__path_get_farmer, get_farmer},
    register_farmer::{__path_register_farmer, register_farmer},
    upload_avatar::{__path_upload_avatar, upload_avatar},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(register_farmer, get_farmer, upload_avatar))]
pub struct FarmerApiDoc;

pub fn farmer_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/farmers", state.args.server.root_path),
            post(register_farmer),
        )
        .route(
            &format!("{}/farmers/{{username}}", state.args.server.root_path),
            get(get_farmer),
        )
        .route(
            &format!(
                "{}/farmers/{{username}}/avatar",
                state.args.server.root_path
            ),
            post(upload_avatar),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
