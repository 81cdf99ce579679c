use crate::model::{DayForecast, ForecastData};
use crate::providers::{DailySeries, FetchError, ForecastApi};
use crate::units;
use crate::weather_code;

/// Geocodes `city`, then fetches its daily forecast. One attempt per call;
/// any failure aborts the whole fetch.
pub fn fetch_forecast<P>(providers: &P, city: &str) -> Result<ForecastData, FetchError>
where
    P: ForecastApi + ?Sized,
{
    let place = providers.geocode(city)?;
    let series = providers.daily_forecast(place.latitude, place.longitude)?;
    let days = build_days(series)?;

    Ok(ForecastData {
        city: place.name,
        days,
    })
}

fn build_days(series: DailySeries) -> Result<Vec<DayForecast>, FetchError> {
    let DailySeries {
        time,
        weather_code: codes,
        temperature_max,
        temperature_min,
    } = series;
    let length = time.len();

    if codes.len() != length || temperature_max.len() != length || temperature_min.len() != length
    {
        return Err(FetchError::MalformedResponse(format!(
            "daily arrays length mismatch (time={length}, weather_code={}, max={}, min={})",
            codes.len(),
            temperature_max.len(),
            temperature_min.len()
        )));
    }

    time.into_iter()
        .zip(codes)
        .zip(temperature_max.into_iter().zip(temperature_min))
        .map(|((date, code), (max, min))| {
            let date = date.trim().to_string();
            if date.is_empty() {
                return Err(FetchError::MalformedResponse(
                    "empty date in daily.time".to_string(),
                ));
            }

            Ok(DayForecast {
                date,
                category: weather_code::classify(code),
                high_c: round_celsius(max)?,
                low_c: round_celsius(min)?,
            })
        })
        .collect()
}

fn round_celsius(value: f64) -> Result<i32, FetchError> {
    if !value.is_finite() {
        return Err(FetchError::MalformedResponse(format!(
            "non-finite temperature: {value}"
        )));
    }
    Ok(units::round_half_up(value) as i32)
}
