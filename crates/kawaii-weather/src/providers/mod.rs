use reqwest::blocking::Client;
use thiserror::Error;

use crate::config::RuntimeConfig;
use crate::theme::Language;

pub mod open_meteo;

/// First geocoding candidate for a place name.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlace {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Daily series as returned by the forecast collaborator: parallel arrays
/// indexed by day offset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub weather_code: Vec<i32>,
    pub temperature_max: Vec<f64>,
    pub temperature_min: Vec<f64>,
}

pub trait ForecastApi {
    fn geocode(&self, name: &str) -> Result<ResolvedPlace, FetchError>;
    fn daily_forecast(&self, latitude: f64, longitude: f64) -> Result<DailySeries, FetchError>;
}

#[derive(Debug, Clone)]
pub struct HttpProviders {
    client: Client,
    geocode_endpoint: String,
    forecast_endpoint: String,
    language: Language,
}

impl HttpProviders {
    pub fn new(config: &RuntimeConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("kawaii-weather/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|error| FetchError::Transport(error.to_string()))?;

        Ok(Self {
            client,
            geocode_endpoint: config.geocode_endpoint.clone(),
            forecast_endpoint: config.forecast_endpoint.clone(),
            language: config.language,
        })
    }

    /// Geocoding language hint; the place name comes back in this language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

impl ForecastApi for HttpProviders {
    fn geocode(&self, name: &str) -> Result<ResolvedPlace, FetchError> {
        open_meteo::fetch_geocode(&self.client, &self.geocode_endpoint, name, self.language)
    }

    fn daily_forecast(&self, latitude: f64, longitude: f64) -> Result<DailySeries, FetchError> {
        open_meteo::fetch_daily(&self.client, &self.forecast_endpoint, latitude, longitude)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("place not found: {0}")]
    PlaceNotFound(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
