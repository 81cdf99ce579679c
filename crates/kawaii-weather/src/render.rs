use serde::Serialize;

use crate::model::DayForecast;
use crate::mood::{self, FaceHints, MascotMood, Motion};
use crate::theme::{self, Language, Palette};
use crate::units::{self, DisplayUnit};
use crate::view::ForecastView;
use crate::weather_code::WeatherCategory;

pub const APP_TITLE: &str = "Kawaii Weather";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastReport {
    pub city: String,
    pub unit: DisplayUnit,
    pub language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Palette>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today: Option<TodayReport>,
    pub days: Vec<DayReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayReport {
    pub date: String,
    pub day_label: String,
    #[serde(rename = "type")]
    pub category: WeatherCategory,
    pub label: &'static str,
    pub icon: &'static str,
    pub high_c: i32,
    pub low_c: i32,
    pub high: f64,
    pub low: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodayReport {
    #[serde(flatten)]
    pub day: DayReport,
    pub mascot: MascotReport,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MascotReport {
    pub mood: MascotMood,
    pub caption: &'static str,
    pub face: FaceHints,
    pub ear_rotation: [i16; 2],
    pub motion: Motion,
}

impl ForecastReport {
    pub fn from_view(view: &ForecastView) -> Self {
        let unit = view.unit();
        let language = view.language();
        let data = view.data();

        let today = view.today().zip(view.today_mood()).map(|(day, mood)| {
            let face = mood.face();
            let (left, right) = face.ear_rotation();
            TodayReport {
                day: day_report(day, unit, language),
                mascot: MascotReport {
                    mood,
                    caption: theme::mood_caption(mood, language),
                    face,
                    ear_rotation: [left, right],
                    motion: mood::motion_for(mood),
                },
            }
        });

        Self {
            city: data.city.clone(),
            unit,
            language,
            background: view.background(),
            today,
            days: data
                .days
                .iter()
                .map(|day| day_report(day, unit, language))
                .collect(),
        }
    }
}

fn day_report(day: &DayForecast, unit: DisplayUnit, language: Language) -> DayReport {
    DayReport {
        date: day.date.clone(),
        day_label: theme::day_label(&day.date, language),
        category: day.category,
        label: theme::label(day.category, language),
        icon: theme::icon(day.category),
        high_c: day.high_c,
        low_c: day.low_c,
        high: units::to_display(f64::from(day.high_c), unit),
        low: units::to_display(f64::from(day.low_c), unit),
    }
}

/// Terminal rendering of the whole view: header, today panel with the
/// mascot, then one card line per day.
pub fn render_text(view: &ForecastView) -> String {
    let unit = view.unit();
    let language = view.language();
    let data = view.data();

    let mut lines = vec![match language {
        Language::Ja => format!("{APP_TITLE} / かわいい天気  [°{}]", unit.symbol()),
        Language::En => format!("{APP_TITLE}  [°{}]", unit.symbol()),
    }];

    if let (Some(today), Some(mood)) = (view.today(), view.today_mood()) {
        lines.push(String::new());
        lines.push(theme::today_heading(&data.city, language));
        lines.push(format!(
            "  {} / {}  {} {}",
            units::format_temperature(f64::from(today.high_c), unit),
            units::format_temperature(f64::from(today.low_c), unit),
            theme::icon(today.category),
            theme::label(today.category, language)
        ));
        lines.push(String::new());
        lines.extend(mascot_lines(today.category, mood, language));
    } else {
        lines.push(String::new());
        lines.push(match language {
            Language::Ja => format!("{} の予報データがありません", data.city),
            Language::En => format!("No forecast days for {}", data.city),
        });
        return lines.join("\n");
    }

    lines.push(String::new());
    lines.push(theme::outlook_heading(data.days.len(), language));
    lines.extend(data.days.iter().map(|day| card_line(day, unit, language)));

    lines.join("\n")
}

pub fn card_line(day: &DayForecast, unit: DisplayUnit, language: Language) -> String {
    format!(
        "  {:<10} {}  {} / {}  {}",
        theme::day_label(&day.date, language),
        theme::icon(day.category),
        units::format_temperature(f64::from(day.high_c), unit),
        units::format_temperature(f64::from(day.low_c), unit),
        theme::label(day.category, language)
    )
}

/// Text-art bichon. Ear glyphs follow the rotation, the weather icon sits
/// top-right as a badge.
pub fn mascot_lines(category: WeatherCategory, mood: MascotMood, language: Language) -> Vec<String> {
    let face: FaceHints = mood.face();
    let (left, right) = face.ear_rotation();

    let mut lines = vec![
        format!("          {}", theme::icon(category)),
        format!(
            "   {}(  {}   {}  ){}",
            ear_glyph(left, true),
            face.eye,
            face.eye,
            ear_glyph(right, false)
        ),
        "        ▾".to_string(),
        format!("        {}", face.mouth),
    ];
    if face.tongue {
        lines.push("        U".to_string());
    }
    lines.push(format!(
        "   [{}] {}",
        mood.as_str(),
        theme::mood_caption(mood, language)
    ));
    lines
}

/// Rotations are mirrored between ears: negative on the left and positive on
/// the right both sweep the ear outward.
fn ear_glyph(rotation: i16, left: bool) -> &'static str {
    let outward = if left { -rotation } else { rotation };
    match (outward.signum(), left) {
        (0, true) => "(",
        (0, false) => ")",
        (1, true) => "<",
        (1, false) => ">",
        _ => "^",
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::ForecastData;
    use crate::view::demo_forecast;

    fn demo_view(unit: DisplayUnit, language: Language) -> ForecastView {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).expect("date");
        ForecastView::new(demo_forecast(today), unit, language)
    }

    #[test]
    fn text_render_shows_today_and_cards_in_celsius() {
        let text = render_text(&demo_view(DisplayUnit::Celsius, Language::Ja));

        assert!(text.contains("Tokyo のきょう"));
        assert!(text.contains("27°C / 22°C"));
        assert!(text.contains("晴れ時々くもり"));
        assert!(text.contains("6日予報"));
        assert!(text.contains("10/16(金)"));
        assert!(text.contains("[panting] 暑い"));
    }

    #[test]
    fn text_render_converts_at_render_time() {
        let mut view = demo_view(DisplayUnit::Celsius, Language::En);
        view.toggle_unit();
        let text = render_text(&view);

        assert!(text.contains("80.6°F / 71.6°F"));
        assert!(text.contains("Today in Tokyo"));
        assert!(!text.contains("°C /"));
        assert_eq!(view.data().days[0].high_c, 27);
    }

    #[test]
    fn text_render_handles_empty_forecast() {
        let view = ForecastView::new(
            ForecastData {
                city: "Nowhere".to_string(),
                days: Vec::new(),
            },
            DisplayUnit::Celsius,
            Language::En,
        );

        let text = render_text(&view);
        assert!(text.contains("No forecast days for Nowhere"));
    }

    #[test]
    fn mascot_shows_tongue_only_when_panting() {
        let panting = mascot_lines(WeatherCategory::Sunny, MascotMood::Panting, Language::En);
        assert!(panting.iter().any(|line| line.trim() == "U"));
        assert!(panting[1].contains('◠'));
        assert!(panting[1].starts_with("   <("));

        let comfy = mascot_lines(WeatherCategory::Cloudy, MascotMood::Comfortable, Language::En);
        assert!(!comfy.iter().any(|line| line.trim() == "U"));
        assert!(comfy[1].starts_with("   (("));
    }

    #[test]
    fn mascot_ears_mirror_between_sides() {
        let cold = mascot_lines(WeatherCategory::Snow, MascotMood::Cold, Language::En);
        assert!(cold[1].starts_with("   <("));
        assert!(cold[1].ends_with(")>"));

        let cool = mascot_lines(WeatherCategory::Cloudy, MascotMood::Cool, Language::En);
        assert_eq!(cool[1], "   ^(  ◉   ◉  )^");
    }

    #[test]
    fn card_line_uses_day_label_icon_and_unit() {
        let day = DayForecast {
            date: "2026-10-19".to_string(),
            category: WeatherCategory::Rain,
            high_c: 21,
            low_c: 18,
        };

        assert_eq!(
            card_line(&day, DisplayUnit::Fahrenheit, Language::En),
            "  Mon 10/19  ☂  69.8°F / 64.4°F  Rain"
        );
    }

    #[test]
    fn report_carries_today_mascot_and_display_values() {
        let report =
            ForecastReport::from_view(&demo_view(DisplayUnit::Fahrenheit, Language::Ja));
        let value = serde_json::to_value(&report).expect("json");

        assert_eq!(value["city"], "Tokyo");
        assert_eq!(value["unit"], "fahrenheit");
        assert_eq!(value["background"]["from"], "#E0F2FE");
        assert_eq!(value["today"]["type"], "partly");
        assert_eq!(value["today"]["high"], 80.6);
        assert_eq!(value["today"]["high_c"], 27);
        assert_eq!(value["today"]["mascot"]["mood"], "panting");
        assert_eq!(value["today"]["mascot"]["face"]["tongue"], true);
        assert_eq!(value["today"]["mascot"]["motion"]["kind"], "bob");
        assert_eq!(value["today"]["mascot"]["ear_rotation"][0], -25);
        assert_eq!(value["days"].as_array().map(Vec::len), Some(6));
        assert_eq!(value["days"][4]["type"], "storm");
        assert_eq!(value["days"][4]["label"], "雷雨");
    }

    #[test]
    fn report_omits_today_for_empty_forecast() {
        let view = ForecastView::new(
            ForecastData {
                city: "Nowhere".to_string(),
                days: Vec::new(),
            },
            DisplayUnit::Celsius,
            Language::En,
        );

        let value = serde_json::to_value(ForecastReport::from_view(&view)).expect("json");
        assert!(value.get("today").is_none());
        assert!(value.get("background").is_none());
        assert_eq!(value["days"], serde_json::json!([]));
    }
}
