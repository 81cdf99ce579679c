use chrono::{Days, NaiveDate};

use crate::model::{DayForecast, ForecastData};
use crate::mood::{self, MascotMood};
use crate::providers::{FetchError, ForecastApi};
use crate::service;
use crate::theme::{self, Language, Palette};
use crate::units::DisplayUnit;
use crate::weather_code::WeatherCategory;

/// Six-day Tokyo forecast shown before the first fetch.
pub fn demo_forecast(today: NaiveDate) -> ForecastData {
    let template = [
        (WeatherCategory::Partly, 27, 22),
        (WeatherCategory::Sunny, 30, 24),
        (WeatherCategory::Cloudy, 23, 19),
        (WeatherCategory::Rain, 21, 18),
        (WeatherCategory::Storm, 20, 17),
        (WeatherCategory::Sunny, 28, 23),
    ];

    let days = template
        .into_iter()
        .zip(0u64..)
        .map(|((category, high_c, low_c), offset)| DayForecast {
            date: today
                .checked_add_days(Days::new(offset))
                .unwrap_or(today)
                .format("%Y-%m-%d")
                .to_string(),
            category,
            high_c,
            low_c,
        })
        .collect();

    ForecastData {
        city: "Tokyo".to_string(),
        days,
    }
}

/// State owned by a front end: selected unit and language, the last city
/// typed, and the forecast currently on screen.
///
/// The forecast is only ever swapped as a whole. A failed refresh leaves the
/// previous one in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastView {
    unit: DisplayUnit,
    language: Language,
    city_input: String,
    data: ForecastData,
}

impl ForecastView {
    pub fn new(data: ForecastData, unit: DisplayUnit, language: Language) -> Self {
        Self {
            unit,
            language,
            city_input: data.city.clone(),
            data,
        }
    }

    pub fn unit(&self) -> DisplayUnit {
        self.unit
    }

    pub fn set_unit(&mut self, unit: DisplayUnit) {
        self.unit = unit;
    }

    pub fn toggle_unit(&mut self) -> DisplayUnit {
        self.unit = self.unit.toggle();
        self.unit
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn city_input(&self) -> &str {
        &self.city_input
    }

    pub fn data(&self) -> &ForecastData {
        &self.data
    }

    pub fn today(&self) -> Option<&DayForecast> {
        self.data.today()
    }

    /// Mood for today's high. `None` until a forecast with days is loaded.
    pub fn today_mood(&self) -> Option<MascotMood> {
        self.today()
            .map(|day| mood::resolve_mood(day.category, f64::from(day.high_c)))
    }

    pub fn background(&self) -> Option<Palette> {
        self.today().map(|day| theme::palette(day.category))
    }

    /// Replaces the forecast wholesale.
    pub fn replace(&mut self, data: ForecastData) {
        tracing::info!(city = %data.city, days = data.days.len(), "forecast applied");
        self.data = data;
    }

    /// Fetches `city` and swaps it in on success. On failure the current
    /// forecast stays on screen and the error is handed back for display.
    pub fn refresh<P>(&mut self, providers: &P, city: &str) -> Result<&ForecastData, FetchError>
    where
        P: ForecastApi + ?Sized,
    {
        self.city_input = city.to_string();
        let data = service::fetch_forecast(providers, city)?;
        self.replace(data);
        Ok(&self.data)
    }
}
