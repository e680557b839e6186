use super::handlers::{
    analyze_crop::{__path_analyze_crop, analyze_crop},
    classify_crop::{__path_classify_crop, classify_crop},
    get_analysis::{__path_get_analysis, get_analysis},
    get_analysis_history::{__path_get_analysis_history, get_analysis_history},
};
use crate::application::{auth::auth, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_crop, classify_crop, get_analysis_history, get_analysis))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/analyses", state.args.server.root_path),
            post(analyze_crop).get(get_analysis_history),
        )
        .route(
            &format!("{}/analyses/classify", state.args.server.root_path),
            post(classify_crop),
        )
        .route(
            &format!("{}/analyses/{{analysis_id}}", state.args.server.root_path),
            get(get_analysis),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
