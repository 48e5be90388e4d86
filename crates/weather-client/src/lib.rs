//! Weather lookup client for the current-conditions HTTP API.
//!
//! This crate provides the single piece of network I/O in the system:
//! given a city name it asks the weather provider for current conditions.
//! It handles:
//! - Building the request (`q`, `appid`, `units=metric`)
//! - Decoding the provider payload into a `WeatherObservation`
//! - Degrading every failure to "no observation"
//!
//! Callers never see a weather error. `WeatherProvider::current_weather`
//! returns `None` and logs the cause, so recommendations always proceed.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Current-weather endpoint used when no override is configured
pub const DEFAULT_WEATHER_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Errors that can occur when talking to the weather provider
#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("No weather API key configured")]
    MissingApiKey,

    #[error("Weather request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Weather provider returned status {status}: {body}")]
    BadStatus { status: u16, body: String },

    #[error("Invalid response from weather provider: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, WeatherError>;

/// Current conditions for one city.
///
/// Condition and temperature are optional on their own: a payload missing
/// either still yields an observation, and the suitability mapping treats
/// the missing part as "no signal".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub city_name: String,
    /// Primary condition label, e.g. "Rain" or "Clear"
    pub condition: Option<String>,
    pub temperature_celsius: Option<f64>,
}

impl WeatherObservation {
    pub fn new(
        city_name: impl Into<String>,
        condition: Option<&str>,
        temperature_celsius: Option<f64>,
    ) -> Self {
        Self {
            city_name: city_name.into(),
            condition: condition.map(str::to_string),
            temperature_celsius,
        }
    }
}

/// Connection settings for the weather provider
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// API key; `None` means every lookup fails
    pub api_key: Option<String>,
    pub base_url: String,
}

impl WeatherConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: DEFAULT_WEATHER_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint (default: OpenWeatherMap)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Anything that can report current weather for a city.
///
/// Implementations must swallow their own failures and return `None`.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current_weather(&self, city: &str) -> Option<WeatherObservation>;
}

/// Provider for runs without weather: always reports nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWeather;

#[async_trait]
impl WeatherProvider for NoWeather {
    async fn current_weather(&self, _city: &str) -> Option<WeatherObservation> {
        None
    }
}

// Provider payload, reduced to the fields we read
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    weather: Vec<ApiCondition>,
    #[serde(default)]
    main: Option<ApiMain>,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    #[serde(default)]
    main: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiMain {
    #[serde(default)]
    temp: Option<f64>,
}

/// HTTP client for the current-weather API.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    config: WeatherConfig,
}

impl WeatherClient {
    pub fn new(config: WeatherConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Fetch current conditions for `city`, surfacing the failure cause.
    pub async fn fetch(&self, city: &str) -> Result<WeatherObservation> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(WeatherError::MissingApiKey)?;

        debug!("Requesting weather for {} from {}", city, self.config.base_url);

        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[("q", city), ("appid", api_key), ("units", "metric")])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(WeatherError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        let payload: ApiResponse = serde_json::from_str(&body)
            .map_err(|e| WeatherError::InvalidResponse(e.to_string()))?;

        Ok(WeatherObservation {
            city_name: payload.name.unwrap_or_else(|| city.to_string()),
            condition: payload.weather.into_iter().next().and_then(|w| w.main),
            temperature_celsius: payload.main.and_then(|m| m.temp),
        })
    }

    /// Get the endpoint this client talks to.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[async_trait]
impl WeatherProvider for WeatherClient {
    async fn current_weather(&self, city: &str) -> Option<WeatherObservation> {
        match self.fetch(city).await {
            Ok(observation) => Some(observation),
            Err(e) => {
                warn!("Error fetching weather data for {}: {}", city, e);
                None
            }
        }
    }
}
