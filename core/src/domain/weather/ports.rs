use std::future::Future;

use crate::domain::{
    common::entities::{Coordinates, app_errors::CoreError},
    weather::entities::{AirQuality, CurrentWeather, WeatherBulletin},
};

#[cfg_attr(test, mockall::automock)]
pub trait ForecastProvider: Send + Sync {
    fn current(
        &self,
        coordinates: Coordinates,
    ) -> impl Future<Output = Result<CurrentWeather, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait AirQualityProvider: Send + Sync {
    fn current(
        &self,
        coordinates: Coordinates,
    ) -> impl Future<Output = Result<AirQuality, CoreError>> + Send;
}

/// City geocoding plus IP-based fallback location.
#[cfg_attr(test, mockall::automock)]
pub trait GeocodingProvider: Send + Sync {
    fn geocode_city(
        &self,
        city: String,
    ) -> impl Future<Output = Result<Option<Coordinates>, CoreError>> + Send;

    fn locate_by_ip(
        &self,
    ) -> impl Future<Output = Result<Option<Coordinates>, CoreError>> + Send;
}

/// Service trait for the weather views.
#[cfg_attr(test, mockall::automock)]
pub trait WeatherService: Send + Sync {
    /// Weather and air quality fetched concurrently and joined.
    fn current_conditions(
        &self,
        coordinates: Coordinates,
    ) -> impl Future<Output = Result<WeatherBulletin, CoreError>> + Send;

    /// Resolve a location: by city when given, else by caller IP.
    fn locate(
        &self,
        city: Option<String>,
    ) -> impl Future<Output = Result<Coordinates, CoreError>> + Send;
}
