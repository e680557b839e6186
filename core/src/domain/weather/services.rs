use tracing::warn;

use crate::domain::{
    common::{
        entities::{Coordinates, app_errors::CoreError},
        services::Service,
    },
    farmer::ports::FarmerRepository,
    health::ports::HealthCheckRepository,
    identification::ports::{
        AnalysisRepository, PlantIdentificationProvider, ZeroShotClassifierProvider,
    },
    storage::ports::ObjectStoragePort,
    weather::{
        entities::WeatherBulletin,
        ports::{AirQualityProvider, ForecastProvider, GeocodingProvider, WeatherService},
    },
};

impl<PI, ZC, AR, FR, OS, HC, FP, AQ, GC> WeatherService
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
    async fn current_conditions(
        &self,
        coordinates: Coordinates,
    ) -> Result<WeatherBulletin, CoreError> {
        // Two outstanding requests, joined before rendering; either side
        // may fail without failing the bulletin.
        let (weather, air_quality) = tokio::join!(
            self.forecast_provider.current(coordinates),
            self.air_quality_provider.current(coordinates),
        );

        let weather = weather
            .map_err(|err| warn!("weather fetch failed: {err}"))
            .ok();
        let air_quality = air_quality
            .map_err(|err| warn!("air quality fetch failed: {err}"))
            .ok();

        Ok(WeatherBulletin {
            weather,
            air_quality,
        })
    }

    async fn locate(&self, city: Option<String>) -> Result<Coordinates, CoreError> {
        match city {
            Some(city) if !city.trim().is_empty() => self
                .geocoding_provider
                .geocode_city(city.trim().to_string())
                .await?
                .ok_or(CoreError::NotFound),
            _ => self
                .geocoding_provider
                .locate_by_ip()
                .await?
                .ok_or(CoreError::NotFound),
        }
    }
}
