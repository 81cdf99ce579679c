use reqwest::blocking::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::theme::Language;

use super::{DailySeries, FetchError, ResolvedPlace};

const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min";

#[derive(Debug, Serialize)]
struct GeocodeQuery<'a> {
    name: &'a str,
    count: u8,
    language: &'a str,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    name: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Serialize)]
struct ForecastQuery<'a> {
    latitude: f64,
    longitude: f64,
    timezone: &'a str,
    daily: &'a str,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: Option<ForecastDaily>,
}

#[derive(Debug, Deserialize)]
struct ForecastDaily {
    time: Vec<String>,
    #[serde(alias = "weathercode")]
    weather_code: Vec<i32>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
}

pub fn fetch_geocode(
    client: &Client,
    endpoint: &str,
    name: &str,
    language: Language,
) -> Result<ResolvedPlace, FetchError> {
    let query = GeocodeQuery {
        name,
        count: 1,
        language: language.as_str(),
        format: "json",
    };

    tracing::debug!(endpoint, name, language = language.as_str(), "geocoding place");
    let body = execute_request(client.get(endpoint).query(&query))?;
    parse_geocode_response(&body, name)
}

pub fn fetch_daily(
    client: &Client,
    endpoint: &str,
    latitude: f64,
    longitude: f64,
) -> Result<DailySeries, FetchError> {
    let query = ForecastQuery {
        latitude,
        longitude,
        timezone: "auto",
        daily: DAILY_FIELDS,
    };

    tracing::debug!(endpoint, latitude, longitude, "requesting daily forecast");
    let body = execute_request(client.get(endpoint).query(&query))?;
    parse_forecast_response(&body)
}

fn execute_request(request: RequestBuilder) -> Result<String, FetchError> {
    let response = request
        .send()
        .map_err(|error| FetchError::Transport(error.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .map_err(|error| FetchError::Transport(error.to_string()))?;

    if status.is_success() {
        return Ok(body);
    }

    let message = extract_error_message(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    });

    Err(FetchError::Transport(format!(
        "http {}: {message}",
        status.as_u16()
    )))
}

fn parse_geocode_response(body: &str, name: &str) -> Result<ResolvedPlace, FetchError> {
    let payload: GeocodeResponse = serde_json::from_str(body)
        .map_err(|error| FetchError::MalformedResponse(format!("geocode payload: {error}")))?;

    let Some(result) = payload.results.into_iter().next() else {
        return Err(FetchError::PlaceNotFound(name.to_string()));
    };

    let display_name = result.name.trim();
    if display_name.is_empty() {
        return Err(FetchError::MalformedResponse(
            "geocode payload: empty place name".to_string(),
        ));
    }

    Ok(ResolvedPlace {
        name: display_name.to_string(),
        latitude: result.latitude,
        longitude: result.longitude,
    })
}

fn parse_forecast_response(body: &str) -> Result<DailySeries, FetchError> {
    let payload: ForecastResponse = serde_json::from_str(body)
        .map_err(|error| FetchError::MalformedResponse(format!("forecast payload: {error}")))?;

    let daily = payload.daily.ok_or_else(|| {
        FetchError::MalformedResponse("forecast payload: missing daily".to_string())
    })?;

    Ok(DailySeries {
        time: daily.time,
        weather_code: daily.weather_code,
        temperature_max: daily.temperature_2m_max,
        temperature_min: daily.temperature_2m_min,
    })
}

fn extract_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    let from_json = serde_json::from_str::<Value>(trimmed).ok().and_then(|json| {
        ["reason", "message", "error"].into_iter().find_map(|key| {
            json.get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|message| !message.is_empty())
                .map(str::to_string)
        })
    });

    from_json.or_else(|| Some(trimmed.to_string()))
}
