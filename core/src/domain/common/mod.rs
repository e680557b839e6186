use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct KrishiConfig {
    pub database: DatabaseConfig,
    pub object_storage: ObjectStorageConfig,
    pub providers: ProviderConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct ObjectStorageConfig {
    pub endpoint: String,
    pub region: String,
    pub access_key: String,
    pub secret_key: String,
    pub avatars_bucket: String,
    pub analyses_bucket: String,
    pub use_ssl: bool,
}

/// Credentials for the external providers. Every key is optional: a chat
/// tier without a key is simply skipped, while the identification and
/// classifier providers surface a missing-credential error because no
/// fallback exists for them.
#[derive(Clone, Debug, Default)]
pub struct ProviderConfig {
    pub plant_id_api_key: Option<String>,
    pub hugging_face_token: Option<String>,
    pub groq_api_key: Option<String>,
    pub openai_api_key: Option<String>,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
