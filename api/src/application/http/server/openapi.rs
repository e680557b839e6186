use utoipa::OpenApi;

use crate::application::http::{
    analysis::router::AnalysisApiDoc, chat::router::ChatApiDoc, farmer::router::FarmerApiDoc,
    weather::router::WeatherApiDoc,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Krishi-Seer API",
    description = "Crop advisory, chat, and weather services for farmers",
))]
struct BaseApiDoc;

pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = BaseApiDoc::openapi();
        doc.merge(AnalysisApiDoc::openapi());
        doc.merge(ChatApiDoc::openapi());
        doc.merge(FarmerApiDoc::openapi());
        doc.merge(WeatherApiDoc::openapi());
        doc
    }
}
