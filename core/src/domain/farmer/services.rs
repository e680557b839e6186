use tracing::warn;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    farmer::{
        entities::Farmer,
        ports::{FarmerRepository, FarmerService},
        value_objects::{GetFarmerInput, RegisterFarmerInput, UpdateAvatarInput},
    },
    health::ports::HealthCheckRepository,
    identification::ports::{
        AnalysisRepository, PlantIdentificationProvider, ZeroShotClassifierProvider,
    },
    storage::ports::ObjectStoragePort,
    weather::ports::{AirQualityProvider, ForecastProvider, GeocodingProvider},
};

/// Username fallback: the email local-part.
pub fn username_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

impl<PI, ZC, AR, FR, OS, HC, FP, AQ, GC> FarmerService
    for Service<PI, ZC, AR, FR, OS, HC, FP, AQ, GC>
where
    PI: PlantIdentificationProvider,
    ZC: ZeroShotClassifierProvider,
    AR: AnalysisRepository,
    FR: FarmerRepository,
    OS: ObjectStoragePort,
    HC: HealthCheckRepository,
    FP: ForecastProvider,
    AQ: AirQualityProvider,
    GC: GeocodingProvider,
{
    async fn register_farmer(&self, input: RegisterFarmerInput) -> Result<Farmer, CoreError> {
        if input.name.trim().is_empty() || input.email.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "name and email are required".to_string(),
            ));
        }

        let username = input
            .username
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| username_from_email(&input.email));

        if self
            .farmer_repository
            .get_by_username(username.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::InvalidInput(format!(
                "username '{username}' is already taken"
            )));
        }

        let farmer = Farmer::new(input.name, input.age, input.location, username, input.email);
        self.farmer_repository.create(farmer).await
    }

    async fn get_farmer(&self, input: GetFarmerInput) -> Result<Farmer, CoreError> {
        self.farmer_repository
            .get_by_username(input.username)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn update_avatar(&self, input: UpdateAvatarInput) -> Result<Farmer, CoreError> {
        let farmer = self
            .farmer_repository
            .get_by_username(input.username.clone())
            .await?
            .ok_or(CoreError::NotFound)?;

        let object_key = format!("{}-{}", farmer.id, input.file_name);
        let bucket = self.buckets.avatars.clone();
        self.object_storage
            .put_object(&bucket, &object_key, input.image, &input.content_type)
            .await
            .map_err(|err| {
                warn!("avatar upload failed for {}: {err}", input.username);
                err
            })?;

        let avatar_url = self.object_storage.public_url(&bucket, &object_key);
        self.farmer_repository
            .update_avatar_url(input.username, avatar_url)
            .await
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::domain::{
        common::services::Buckets,
        farmer::ports::MockFarmerRepository,
        health::ports::MockHealthCheckRepository,
        identification::ports::{
            MockAnalysisRepository, MockPlantIdentificationProvider,
            MockZeroShotClassifierProvider,
        },
        storage::ports::MockObjectStoragePort,
        weather::ports::{
            MockAirQualityProvider, MockForecastProvider, MockGeocodingProvider,
        },
    };

    fn service(
        farmers: MockFarmerRepository,
        storage: MockObjectStoragePort,
    ) -> Service<
        MockPlantIdentificationProvider,
        MockZeroShotClassifierProvider,
        MockAnalysisRepository,
        MockFarmerRepository,
        MockObjectStoragePort,
        MockHealthCheckRepository,
        MockForecastProvider,
        MockAirQualityProvider,
        MockGeocodingProvider,
    > {
        Service::new(
            MockPlantIdentificationProvider::new(),
            MockZeroShotClassifierProvider::new(),
            MockAnalysisRepository::new(),
            farmers,
            storage,
            MockHealthCheckRepository::new(),
            MockForecastProvider::new(),
            MockAirQualityProvider::new(),
            MockGeocodingProvider::new(),
            Vec::new(),
            Buckets {
                avatars: "avatars".into(),
                analyses: "analyses".into(),
            },
        )
    }

    #[test]
    fn username_defaults_to_email_local_part() {
        assert_eq!(username_from_email("ravi@example.com"), "ravi");
        assert_eq!(username_from_email("no-at-sign"), "no-at-sign");
    }

    #[tokio::test]
    async fn register_derives_username_when_absent() {
        let mut farmers = MockFarmerRepository::new();
        farmers
            .expect_get_by_username()
            .returning(|_| Box::pin(async { Ok(None) }));
        farmers.expect_create().returning(|farmer| {
            Box::pin(async move {
                assert_eq!(farmer.username, "ravi");
                Ok(farmer)
            })
        });

        let svc = service(farmers, MockObjectStoragePort::new());
        let farmer = svc
            .register_farmer(RegisterFarmerInput {
                name: "Ravi Kumar".into(),
                age: 42,
                location: "Cuttack".into(),
                username: None,
                email: "ravi@example.com".into(),
            })
            .await
            .unwrap();
        assert_eq!(farmer.username, "ravi");
    }

    #[tokio::test]
    async fn register_rejects_missing_required_fields() {
        let svc = service(MockFarmerRepository::new(), MockObjectStoragePort::new());
        let err = svc
            .register_farmer(RegisterFarmerInput {
                name: "".into(),
                age: 30,
                location: "Puri".into(),
                username: None,
                email: "x@y.z".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn register_rejects_duplicate_username() {
        let mut farmers = MockFarmerRepository::new();
        farmers.expect_get_by_username().returning(|username| {
            Box::pin(async move {
                Ok(Some(Farmer::new(
                    "Existing".into(),
                    50,
                    "Puri".into(),
                    username,
                    "existing@example.com".into(),
                )))
            })
        });

        let svc = service(farmers, MockObjectStoragePort::new());
        let err = svc
            .register_farmer(RegisterFarmerInput {
                name: "Ravi".into(),
                age: 42,
                location: "Cuttack".into(),
                username: Some("ravi".into()),
                email: "ravi@example.com".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn avatar_upload_writes_public_url_back() {
        let mut farmers = MockFarmerRepository::new();
        farmers.expect_get_by_username().returning(|username| {
            Box::pin(async move {
                Ok(Some(Farmer::new(
                    "Ravi".into(),
                    42,
                    "Cuttack".into(),
                    username,
                    "ravi@example.com".into(),
                )))
            })
        });
        farmers
            .expect_update_avatar_url()
            .returning(|username, avatar_url| {
                Box::pin(async move {
                    assert!(avatar_url.starts_with("http://storage/avatars/"));
                    let mut farmer = Farmer::new(
                        "Ravi".into(),
                        42,
                        "Cuttack".into(),
                        username,
                        "ravi@example.com".into(),
                    );
                    farmer.avatar_url = Some(avatar_url);
                    Ok(farmer)
                })
            });

        let mut storage = MockObjectStoragePort::new();
        storage
            .expect_put_object()
            .times(1)
            .returning(|_, _, _, _| Box::pin(async { Ok(()) }));
        storage
            .expect_public_url()
            .returning(|bucket, key| format!("http://storage/{bucket}/{key}"));

        let svc = service(farmers, storage);
        let farmer = svc
            .update_avatar(UpdateAvatarInput {
                username: "ravi".into(),
                image: Bytes::from_static(b"img"),
                content_type: "image/png".into(),
                file_name: "avatar.png".into(),
            })
            .await
            .unwrap();
        assert!(farmer.avatar_url.is_some());
    }
}
