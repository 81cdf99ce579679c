use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl DisplayUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Celsius,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "c" | "celsius" | "℃" => Some(Self::Celsius),
            "f" | "fahrenheit" | "℉" => Some(Self::Fahrenheit),
            _ => None,
        }
    }
}

/// Rounds to the nearest integer with ties toward positive infinity, so
/// `-2.5` becomes `-2` and `2.5` becomes `3`. Never returns `-0.0`.
pub fn round_half_up(value: f64) -> f64 {
    // `+ 0.0` folds -0.0 into 0.0.
    (value + 0.5).floor() + 0.0
}

/// Converts a Celsius reading into the value shown for `unit`.
///
/// Fahrenheit is rounded to one decimal place with [`round_half_up`].
pub fn to_display(temp_c: f64, unit: DisplayUnit) -> f64 {
    match unit {
        DisplayUnit::Celsius => temp_c,
        DisplayUnit::Fahrenheit => {
            round_half_up((temp_c * 9.0 / 5.0 + 32.0) * 10.0) / 10.0 + 0.0
        }
    }
}

/// `27°C`, `80.6°F`. Whole values print without a decimal point.
pub fn format_temperature(temp_c: f64, unit: DisplayUnit) -> String {
    format!("{}°{}", to_display(temp_c, unit), unit.symbol())
}
