use std::sync::Arc;

use crate::{
    domain::{
        chat::ports::ChatCompletionProvider,
        common::{
            KrishiConfig,
            services::{Buckets, Service},
        },
    },
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        farmer::repositories::PostgresFarmerRepository,
        health::PostgresHealthCheckRepository,
        identification::repositories::PostgresAnalysisRepository,
        object_storage::minio::MinioObjectStorage,
        providers::{
            hf_classifier::HuggingFaceClassifier,
            llm::{HuggingFaceTextProvider, OpenAiCompatProvider},
            plant_id::PlantIdHttpProvider,
        },
        weather::open_meteo::OpenMeteoClient,
    },
};

pub type KrishiSeerService = Service<
    PlantIdHttpProvider,
    HuggingFaceClassifier,
    PostgresAnalysisRepository,
    PostgresFarmerRepository,
    MinioObjectStorage,
    PostgresHealthCheckRepository,
    OpenMeteoClient,
    OpenMeteoClient,
    OpenMeteoClient,
>;

/// Wire the concrete adapters into the application service.
pub async fn create_service(config: KrishiConfig) -> Result<KrishiSeerService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );
    let postgres = Postgres::new(PostgresConfig { database_url }).await?;
    let db = postgres.get_db();

    let object_storage = MinioObjectStorage::new(config.object_storage.clone()).await;
    let open_meteo = OpenMeteoClient::new();

    // Chat tiers in priority order; tiers without credentials are skipped.
    let mut chat_providers: Vec<Arc<dyn ChatCompletionProvider>> = Vec::new();
    if let Some(key) = config.providers.groq_api_key.clone() {
        chat_providers.push(Arc::new(OpenAiCompatProvider::groq(key)));
    }
    if let Some(key) = config.providers.openai_api_key.clone() {
        chat_providers.push(Arc::new(OpenAiCompatProvider::openai(key)));
    }
    if let Some(token) = config.providers.hugging_face_token.clone() {
        chat_providers.push(Arc::new(HuggingFaceTextProvider::new(token)));
    }

    Ok(Service::new(
        PlantIdHttpProvider::new(config.providers.plant_id_api_key.clone()),
        HuggingFaceClassifier::new(config.providers.hugging_face_token.clone()),
        PostgresAnalysisRepository::new(db.clone()),
        PostgresFarmerRepository::new(db.clone()),
        object_storage,
        PostgresHealthCheckRepository::new(db),
        open_meteo.clone(),
        open_meteo.clone(),
        open_meteo,
        chat_providers,
        Buckets {
            avatars: config.object_storage.avatars_bucket.clone(),
            analyses: config.object_storage.analyses_bucket.clone(),
        },
    ))
}
