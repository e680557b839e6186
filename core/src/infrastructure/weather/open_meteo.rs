use reqwest::Client;
use serde::Deserialize;

use crate::domain::{
    common::entities::{Coordinates, app_errors::CoreError},
    weather::{
        entities::{AirQuality, CurrentWeather, weather_code_text, wind_kph},
        ports::{AirQualityProvider, ForecastProvider, GeocodingProvider},
    },
};

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const AIR_QUALITY_URL: &str = "https://air-quality-api.open-meteo.com/v1/air-quality";
const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const IP_LOOKUP_URL: &str = "https://ipapi.co/json/";

/// Unauthenticated Open-Meteo client; also resolves locations by city
/// name and by caller IP.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize, Default)]
struct ForecastResponse {
    #[serde(default)]
    current: Option<CurrentBlock>,
    #[serde(default)]
    hourly: Option<HourlyBlock>,
}

#[derive(Debug, Deserialize, Default)]
struct CurrentBlock {
    #[serde(default)]
    temperature_2m: Option<f64>,
    #[serde(default)]
    relative_humidity_2m: Option<f64>,
    #[serde(default)]
    wind_speed_10m: Option<f64>,
    #[serde(default)]
    weather_code: Option<i64>,
}

#[derive(Debug, Deserialize, Default)]
struct HourlyBlock {
    #[serde(default)]
    precipitation_probability: Vec<f64>,
    #[serde(default)]
    pm10: Vec<f64>,
    #[serde(default)]
    pm2_5: Vec<f64>,
}

#[derive(Debug, Deserialize, Default)]
struct GeocodingResponse {
    #[serde(default)]
    results: Vec<GeocodingResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize, Default)]
struct IpLookupResponse {
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
}

impl OpenMeteoClient {
    pub fn new() -> Self {
        Self {
            client: crate::infrastructure::providers::http_client(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
    ) -> Result<T, CoreError> {
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CoreError::Provider {
                provider: "open-meteo",
                detail: e.to_string(),
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(CoreError::Provider {
                provider: "open-meteo",
                detail: error_text,
            });
        }

        response.json().await.map_err(|e| CoreError::Provider {
            provider: "open-meteo",
            detail: format!("invalid response: {e}"),
        })
    }
}

impl ForecastProvider for OpenMeteoClient {
    async fn current(&self, coordinates: Coordinates) -> Result<CurrentWeather, CoreError> {
        let url = format!(
            "{FORECAST_URL}?latitude={}&longitude={}&current=temperature_2m,relative_humidity_2m,wind_speed_10m,weather_code&hourly=precipitation_probability&timezone=auto",
            coordinates.latitude, coordinates.longitude
        );
        let data: ForecastResponse = self.get_json(url).await?;

        let current = data.current.unwrap_or_default();
        let precipitation_chance = data
            .hourly
            .and_then(|h| h.precipitation_probability.first().copied());

        Ok(CurrentWeather {
            temperature_c: current.temperature_2m,
            humidity: current.relative_humidity_2m,
            wind_kph: current.wind_speed_10m.map(wind_kph),
            precipitation_chance,
            summary: current
                .weather_code
                .map(|code| weather_code_text(code).to_string()),
        })
    }
}

impl AirQualityProvider for OpenMeteoClient {
    async fn current(&self, coordinates: Coordinates) -> Result<AirQuality, CoreError> {
        let url = format!(
            "{AIR_QUALITY_URL}?latitude={}&longitude={}&hourly=pm10,pm2_5&timezone=auto",
            coordinates.latitude, coordinates.longitude
        );
        let data: ForecastResponse = self.get_json(url).await?;

        let hourly = data.hourly.unwrap_or_default();
        Ok(AirQuality {
            pm10: hourly.pm10.first().copied(),
            pm2_5: hourly.pm2_5.first().copied(),
        })
    }
}

impl GeocodingProvider for OpenMeteoClient {
    async fn geocode_city(&self, city: String) -> Result<Option<Coordinates>, CoreError> {
        let url = format!(
            "{GEOCODING_URL}?name={}&count=1",
            urlencoding::encode(&city)
        );
        let data: GeocodingResponse = self.get_json(url).await?;

        Ok(data.results.first().map(|r| Coordinates {
            latitude: r.latitude,
            longitude: r.longitude,
        }))
    }

    async fn locate_by_ip(&self) -> Result<Option<Coordinates>, CoreError> {
        let data: IpLookupResponse = self.get_json(IP_LOOKUP_URL.to_string()).await?;

        Ok(match (data.latitude, data.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_response_parses_partial_payloads() {
        let data: ForecastResponse = serde_json::from_value(serde_json::json!({
            "current": { "temperature_2m": 31.4, "weather_code": 2 },
            "hourly": { "precipitation_probability": [40.0, 10.0] }
        }))
        .unwrap();
        assert_eq!(data.current.as_ref().unwrap().temperature_2m, Some(31.4));
        assert!(data.current.as_ref().unwrap().wind_speed_10m.is_none());
        assert_eq!(
            data.hourly.unwrap().precipitation_probability.first(),
            Some(&40.0)
        );
    }
}
