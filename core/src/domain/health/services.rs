use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    farmer::ports::FarmerRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    identification::ports::{
        AnalysisRepository, PlantIdentificationProvider, ZeroShotClassifierProvider,
    },
    storage::ports::ObjectStoragePort,
    weather::ports::{AirQualityProvider, ForecastProvider, GeocodingProvider},
};

impl<PI, ZC, AR, FR, OS, HC, FP, AQ, GC> HealthCheckService
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
    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }
}
