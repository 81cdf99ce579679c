use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::weather_code::WeatherCategory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayForecast {
    pub date: String,
    #[serde(rename = "type")]
    pub category: WeatherCategory,
    pub high_c: i32,
    pub low_c: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastData {
    pub city: String,
    pub days: Vec<DayForecast>,
}

impl ForecastData {
    pub fn today(&self) -> Option<&DayForecast> {
        self.days.first()
    }
}

pub fn normalize_city(raw: &str) -> Result<String, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyCity);
    }
    Ok(value.to_string())
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("city must not be empty")]
    EmptyCity,
    #[error("unknown unit '{0}': use c or f")]
    UnknownUnit(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_normalize_city_trims_input() {
        assert_eq!(normalize_city("  Osaka  "), Ok("Osaka".to_string()));
    }

    #[test]
    fn model_rejects_blank_city() {
        assert_eq!(normalize_city(" \t "), Err(ValidationError::EmptyCity));
    }

    #[test]
    fn model_day_serializes_category_under_type_key() {
        let day = DayForecast {
            date: "2026-10-16".to_string(),
            category: WeatherCategory::Rain,
            high_c: 21,
            low_c: 18,
        };

        let value = serde_json::to_value(&day).expect("json");
        assert_eq!(value["type"], "rain");
        assert_eq!(value["high_c"], 21);
        assert!(value.get("category").is_none());
    }

    #[test]
    fn model_today_is_first_day() {
        let data = ForecastData {
            city: "Kyoto".to_string(),
            days: vec![
                DayForecast {
                    date: "2026-10-16".to_string(),
                    category: WeatherCategory::Sunny,
                    high_c: 24,
                    low_c: 15,
                },
                DayForecast {
                    date: "2026-10-17".to_string(),
                    category: WeatherCategory::Cloudy,
                    high_c: 22,
                    low_c: 14,
                },
            ],
        };

        assert_eq!(data.today().map(|day| day.date.as_str()), Some("2026-10-16"));
        assert_eq!(
            ForecastData {
                city: "Nowhere".to_string(),
                days: Vec::new()
            }
            .today(),
            None
        );
    }
}
