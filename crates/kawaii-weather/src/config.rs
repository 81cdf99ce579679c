use std::collections::HashMap;

use crate::theme::Language;

pub const DEFAULT_GEOCODE_ENDPOINT: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_FORECAST_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_CITY: &str = "Tokyo";

pub const GEOCODE_URL_ENV: &str = "KAWAII_WEATHER_GEOCODE_URL";
pub const FORECAST_URL_ENV: &str = "KAWAII_WEATHER_FORECAST_URL";
pub const LANG_ENV: &str = "KAWAII_WEATHER_LANG";
pub const DEFAULT_CITY_ENV: &str = "KAWAII_WEATHER_DEFAULT_CITY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub geocode_endpoint: String,
    pub forecast_endpoint: String,
    pub language: Language,
    pub default_city: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            geocode_endpoint: DEFAULT_GEOCODE_ENDPOINT.to_string(),
            forecast_endpoint: DEFAULT_FORECAST_ENDPOINT.to_string(),
            language: Language::default(),
            default_city: DEFAULT_CITY.to_string(),
        }
    }
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self::from_pairs(std::env::vars())
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map: HashMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let defaults = Self::default();

        Self {
            geocode_endpoint: non_blank(&map, GEOCODE_URL_ENV)
                .map(|value| value.trim_end_matches('/').to_string())
                .unwrap_or(defaults.geocode_endpoint),
            forecast_endpoint: non_blank(&map, FORECAST_URL_ENV)
                .map(|value| value.trim_end_matches('/').to_string())
                .unwrap_or(defaults.forecast_endpoint),
            language: non_blank(&map, LANG_ENV)
                .and_then(Language::parse)
                .unwrap_or(defaults.language),
            default_city: non_blank(&map, DEFAULT_CITY_ENV)
                .map(str::to_string)
                .unwrap_or(defaults.default_city),
        }
    }
}

fn non_blank<'a>(env_map: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    env_map
        .get(key)
        .map(String::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_point_at_open_meteo() {
        let config = RuntimeConfig::from_pairs(Vec::<(String, String)>::new());
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.language, Language::Ja);
        assert_eq!(config.default_city, "Tokyo");
    }

    #[test]
    fn config_accepts_endpoint_overrides() {
        let config = RuntimeConfig::from_pairs(vec![
            (GEOCODE_URL_ENV, "http://127.0.0.1:8080/search/"),
            (FORECAST_URL_ENV, " http://127.0.0.1:8080/forecast "),
        ]);

        assert_eq!(config.geocode_endpoint, "http://127.0.0.1:8080/search");
        assert_eq!(config.forecast_endpoint, "http://127.0.0.1:8080/forecast");
    }

    #[test]
    fn config_reads_language_and_default_city() {
        let config = RuntimeConfig::from_pairs(vec![
            (LANG_ENV, "en"),
            (DEFAULT_CITY_ENV, "  Sapporo "),
        ]);

        assert_eq!(config.language, Language::En);
        assert_eq!(config.default_city, "Sapporo");
    }

    #[test]
    fn config_falls_back_when_values_blank_or_invalid() {
        let config = RuntimeConfig::from_pairs(vec![
            (LANG_ENV, "klingon"),
            (DEFAULT_CITY_ENV, "   "),
            (GEOCODE_URL_ENV, ""),
        ]);

        assert_eq!(config, RuntimeConfig::default());
    }
}
