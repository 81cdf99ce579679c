use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCategory {
    Sunny,
    Cloudy,
    Rain,
    Storm,
    Snow,
    Partly,
}

impl WeatherCategory {
    pub const ALL: [WeatherCategory; 6] = [
        Self::Sunny,
        Self::Cloudy,
        Self::Rain,
        Self::Storm,
        Self::Snow,
        Self::Partly,
    ];
}

/// Buckets a WMO weather code. Fog, drizzle, freezing rain and anything
/// unknown all land in `Partly`.
pub fn classify(code: i32) -> WeatherCategory {
    match code {
        0 | 1 => WeatherCategory::Sunny,
        2 | 3 => WeatherCategory::Cloudy,
        61 | 63 | 65 | 80 | 81 | 82 => WeatherCategory::Rain,
        95 | 96 | 99 => WeatherCategory::Storm,
        71 | 73 | 75 | 85 | 86 => WeatherCategory::Snow,
        _ => WeatherCategory::Partly,
    }
}
