use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::mood::MascotMood;
use crate::weather_code::WeatherCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Ja,
    En,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::En => "en",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "ja" | "jp" | "japanese" => Some(Self::Ja),
            "en" | "english" => Some(Self::En),
            _ => None,
        }
    }
}

pub fn label(category: WeatherCategory, language: Language) -> &'static str {
    match language {
        Language::Ja => match category {
            WeatherCategory::Sunny => "晴れ",
            WeatherCategory::Partly => "晴れ時々くもり",
            WeatherCategory::Cloudy => "くもり",
            WeatherCategory::Rain => "雨",
            WeatherCategory::Storm => "雷雨",
            WeatherCategory::Snow => "雪",
        },
        Language::En => match category {
            WeatherCategory::Sunny => "Sunny",
            WeatherCategory::Partly => "Partly cloudy",
            WeatherCategory::Cloudy => "Cloudy",
            WeatherCategory::Rain => "Rain",
            WeatherCategory::Storm => "Storm",
            WeatherCategory::Snow => "Snow",
        },
    }
}

pub fn icon(category: WeatherCategory) -> &'static str {
    match category {
        WeatherCategory::Sunny => "☀",
        WeatherCategory::Partly => "⛅",
        WeatherCategory::Cloudy => "☁",
        WeatherCategory::Rain => "☂",
        WeatherCategory::Storm => "⚡",
        WeatherCategory::Snow => "❄",
    }
}

/// Two-stop pastel gradient used as the page background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub from: &'static str,
    pub to: &'static str,
}

pub fn palette(category: WeatherCategory) -> Palette {
    let (from, to) = match category {
        WeatherCategory::Sunny => ("#FFF7D1", "#FFE4E1"),
        WeatherCategory::Partly => ("#E0F2FE", "#FFF7D1"),
        WeatherCategory::Cloudy => ("#ECEFF4", "#F5F7FA"),
        WeatherCategory::Rain => ("#E0F2FE", "#EDE9FE"),
        WeatherCategory::Storm => ("#EDE9FE", "#FCE7F3"),
        WeatherCategory::Snow => ("#ECFEFF", "#F1F5F9"),
    };
    Palette { from, to }
}

/// Short card heading for an ISO date: `10/16(金)` or `Fri 10/16`.
/// Dates that do not parse are shown as-is.
pub fn day_label(iso_date: &str, language: Language) -> String {
    let Ok(date) = NaiveDate::parse_from_str(iso_date.trim(), "%Y-%m-%d") else {
        return iso_date.to_string();
    };

    match language {
        Language::Ja => format!(
            "{}/{}({})",
            date.month(),
            date.day(),
            weekday_ja(date.weekday())
        ),
        Language::En => format!("{} {}/{}", date.weekday(), date.month(), date.day()),
    }
}

fn weekday_ja(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "月",
        Weekday::Tue => "火",
        Weekday::Wed => "水",
        Weekday::Thu => "木",
        Weekday::Fri => "金",
        Weekday::Sat => "土",
        Weekday::Sun => "日",
    }
}

pub fn mood_caption(mood: MascotMood, language: Language) -> &'static str {
    match language {
        Language::Ja => match mood {
            MascotMood::Panting => "暑い",
            MascotMood::Comfortable => "快適",
            MascotMood::Cool => "少し寒い",
            MascotMood::Cold => "寒い",
            MascotMood::Worried => "こわい",
        },
        Language::En => match mood {
            MascotMood::Panting => "Hot",
            MascotMood::Comfortable => "Comfy",
            MascotMood::Cool => "A bit chilly",
            MascotMood::Cold => "Cold",
            MascotMood::Worried => "Scared",
        },
    }
}

pub fn today_heading(city: &str, language: Language) -> String {
    match language {
        Language::Ja => format!("{city} のきょう"),
        Language::En => format!("Today in {city}"),
    }
}

pub fn outlook_heading(days: usize, language: Language) -> String {
    match language {
        Language::Ja => format!("{days}日予報"),
        Language::En => format!("{days}-day outlook"),
    }
}
