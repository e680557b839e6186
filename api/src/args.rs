use clap::Parser;
use krishiseer_core::domain::common::{
    DatabaseConfig, KrishiConfig, ObjectStorageConfig, ProviderConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "krishiseer-api", about = "Krishi-Seer backend API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub providers: ProviderArgs,

    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Path prefix for every route (e.g. "/api").
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "SERVER_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long, env = "DATABASE_HOST", default_value = "localhost")]
    pub database_host: String,

    #[arg(long, env = "DATABASE_PORT", default_value_t = 5432)]
    pub database_port: u16,

    #[arg(long, env = "DATABASE_USER", default_value = "postgres")]
    pub database_user: String,

    #[arg(long, env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub database_password: String,

    #[arg(long, env = "DATABASE_NAME", default_value = "krishiseer")]
    pub database_name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StorageArgs {
    #[arg(long, env = "STORAGE_ENDPOINT", default_value = "http://localhost:9000")]
    pub storage_endpoint: String,

    #[arg(long, env = "STORAGE_REGION", default_value = "us-east-1")]
    pub storage_region: String,

    #[arg(long, env = "STORAGE_ACCESS_KEY", default_value = "minioadmin")]
    pub storage_access_key: String,

    #[arg(long, env = "STORAGE_SECRET_KEY", default_value = "minioadmin")]
    pub storage_secret_key: String,

    #[arg(long, env = "STORAGE_AVATARS_BUCKET", default_value = "avatars")]
    pub avatars_bucket: String,

    #[arg(long, env = "STORAGE_ANALYSES_BUCKET", default_value = "analyses")]
    pub analyses_bucket: String,

    #[arg(long, env = "STORAGE_USE_SSL", default_value_t = false)]
    pub storage_use_ssl: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ProviderArgs {
    #[arg(long, env = "PLANT_ID_API_KEY")]
    pub plant_id_api_key: Option<String>,

    #[arg(long, env = "HUGGING_FACE_TOKEN")]
    pub hugging_face_token: Option<String>,

    #[arg(long, env = "GROQ_API_KEY")]
    pub groq_api_key: Option<String>,

    #[arg(long, env = "OPENAI_API_KEY")]
    pub openai_api_key: Option<String>,
}

impl From<Args> for KrishiConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.database.database_host,
                port: args.database.database_port,
                username: args.database.database_user,
                password: args.database.database_password,
                name: args.database.database_name,
            },
            object_storage: ObjectStorageConfig {
                endpoint: args.storage.storage_endpoint,
                region: args.storage.storage_region,
                access_key: args.storage.storage_access_key,
                secret_key: args.storage.storage_secret_key,
                avatars_bucket: args.storage.avatars_bucket,
                analyses_bucket: args.storage.analyses_bucket,
                use_ssl: args.storage.storage_use_ssl,
            },
            providers: ProviderConfig {
                plant_id_api_key: args.providers.plant_id_api_key,
                hugging_face_token: args.providers.hugging_face_token,
                groq_api_key: args.providers.groq_api_key,
                openai_api_key: args.providers.openai_api_key,
            },
        }
    }
}
