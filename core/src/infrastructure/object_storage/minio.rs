use aws_sdk_s3::{
    Client,
    config::{BehaviorVersion, Credentials, Region},
    primitives::ByteStream,
};
use bytes::Bytes;
use tracing::instrument;

use crate::domain::{
    common::{ObjectStorageConfig, entities::app_errors::CoreError},
    storage::ports::ObjectStoragePort,
};

#[derive(Clone)]
pub struct MinioObjectStorage {
    client: Client,
    endpoint: String,
}

impl MinioObjectStorage {
    pub async fn new(config: ObjectStorageConfig) -> Self {
        let credentials = Credentials::new(
            &config.access_key,
            &config.secret_key,
            None,
            None,
            "krishi-seer",
        );

        // Endpoint URL must not carry a trailing slash.
        let endpoint = config.endpoint.trim_end_matches('/').to_string();

        tracing::info!(
            endpoint = %endpoint,
            region = %config.region,
            use_ssl = config.use_ssl,
            "Initializing MinIO client"
        );

        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .endpoint_url(&endpoint)
            .force_path_style(true)
            .build();

        let client = Client::from_conf(s3_config);

        Self { client, endpoint }
    }
}

impl ObjectStoragePort for MinioObjectStorage {
    #[instrument(skip(self, payload))]
    async fn put_object(
        &self,
        bucket: &str,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> Result<(), CoreError> {
        let payload_size = payload.len();

        tracing::info!(
            bucket = %bucket,
            object_key = %object_key,
            size = payload_size,
            content_type = %content_type,
            "Uploading object to storage"
        );

        let byte_stream = ByteStream::from(payload);

        self.client
            .put_object()
            .bucket(bucket)
            .key(object_key)
            .content_type(content_type)
            .body(byte_stream)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %bucket,
                    object_key = %object_key,
                    payload_size = payload_size,
                    "Failed to upload object"
                );
                CoreError::ObjectStorage(format!("Failed to upload object: {}", e))
            })?;

        tracing::info!(
            bucket = %bucket,
            object_key = %object_key,
            "Object uploaded successfully"
        );

        Ok(())
    }

    fn public_url(&self, bucket: &str, object_key: &str) -> String {
        // Path-style addressing matches the force_path_style client setup.
        format!("{}/{}/{}", self.endpoint, bucket, object_key)
    }

    #[instrument(skip(self))]
    async fn delete_object(&self, bucket: &str, object_key: &str) -> Result<(), CoreError> {
        tracing::info!(
            bucket = %bucket,
            object_key = %object_key,
            "Deleting object from storage"
        );

        self.client
            .delete_object()
            .bucket(bucket)
            .key(object_key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %bucket,
                    object_key = %object_key,
                    "Failed to delete object"
                );
                CoreError::ObjectStorage(format!("Failed to delete object: {}", e))
            })?;

        Ok(())
    }
}
