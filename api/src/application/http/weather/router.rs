use super::handlers::{
    get_current::{__path_get_current, get_current},
    locate::{__path_locate, locate},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_current, locate))]
pub struct WeatherApiDoc;

pub fn weather_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/weather/current", state.args.server.root_path),
            get(get_current),
        )
        .route(
            &format!("{}/weather/locate", state.args.server.root_path),
            get(locate),
        )
}
