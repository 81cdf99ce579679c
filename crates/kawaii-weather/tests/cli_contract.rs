use std::process::{Command, Output};

use kawaii_weather::model::{DayForecast, ForecastData};
use kawaii_weather::render::ForecastReport;
use kawaii_weather::theme::Language;
use kawaii_weather::units::DisplayUnit;
use kawaii_weather::view::ForecastView;
use kawaii_weather::weather_code::WeatherCategory;
use serde_json::Value;

fn run_cli(args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_kawaii-weather"));
    cmd.args(args)
        .env_remove("KAWAII_WEATHER_LANG")
        .env_remove("KAWAII_WEATHER_DEFAULT_CITY");
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output().expect("run kawaii-weather")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be json")
}

#[test]
fn cli_contract_report_contains_required_fields() {
    let view = ForecastView::new(
        ForecastData {
            city: "札幌市".to_string(),
            days: vec![DayForecast {
                date: "2026-10-16".to_string(),
                category: WeatherCategory::Snow,
                high_c: 4,
                low_c: -2,
            }],
        },
        DisplayUnit::Celsius,
        Language::Ja,
    );

    let value = serde_json::to_value(ForecastReport::from_view(&view)).expect("json");

    for field in ["city", "unit", "language", "background", "today", "days"] {
        assert!(value.get(field).is_some(), "missing field: {field}");
    }
    assert_eq!(
        value.pointer("/today/mascot/mood").and_then(Value::as_str),
        Some("cold")
    );
    assert_eq!(
        value.pointer("/today/mascot/motion/kind").and_then(Value::as_str),
        Some("shiver")
    );
}

#[test]
fn demo_json_envelope_has_required_keys() {
    let output = run_cli(&["demo", "--json"], &[]);
    assert_eq!(output.status.code(), Some(0));

    let json = stdout_json(&output);
    assert_eq!(json.get("schema_version").and_then(Value::as_str), Some("v1"));
    assert_eq!(json.get("command").and_then(Value::as_str), Some("weather.demo"));
    assert_eq!(json.get("ok").and_then(Value::as_bool), Some(true));
    assert_eq!(
        json.pointer("/result/days")
            .and_then(Value::as_array)
            .map(Vec::len),
        Some(6)
    );
    assert_eq!(
        json.pointer("/result/today/mascot/mood")
            .and_then(Value::as_str),
        Some("panting")
    );
    assert_eq!(
        json.pointer("/result/language").and_then(Value::as_str),
        Some("ja")
    );
}

#[test]
fn demo_human_output_follows_language_setting() {
    let output = run_cli(&["demo"], &[("KAWAII_WEATHER_LANG", "en")]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Today in Tokyo"), "stdout: {stdout}");
    assert!(stdout.contains("27°C / 22°C"));

    let output = run_cli(&["demo", "--lang", "ja", "--unit", "f"], &[("KAWAII_WEATHER_LANG", "en")]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Tokyo のきょう"), "stdout: {stdout}");
    assert!(stdout.contains("80.6°F / 71.6°F"));
}

#[test]
fn forecast_blank_city_is_user_error_envelope() {
    let output = run_cli(&["forecast", "--city", "   ", "--json"], &[]);
    assert_eq!(output.status.code(), Some(2));

    let json = stdout_json(&output);
    assert_eq!(
        json.get("command").and_then(Value::as_str),
        Some("weather.forecast")
    );
    assert_eq!(json.get("ok").and_then(Value::as_bool), Some(false));
    assert_eq!(
        json.pointer("/error/code").and_then(Value::as_str),
        Some("user.invalid_input")
    );
    assert_eq!(
        json.pointer("/error/details/kind").and_then(Value::as_str),
        Some("user")
    );
    assert_eq!(
        json.pointer("/error/details/exit_code").and_then(Value::as_i64),
        Some(2)
    );
}

#[test]
fn conflicting_output_flags_are_rejected() {
    let output = run_cli(&["demo", "--json", "--output", "human"], &[]);
    assert_eq!(output.status.code(), Some(2));

    let json = stdout_json(&output);
    assert_eq!(
        json.pointer("/error/code").and_then(Value::as_str),
        Some("user.output_mode_conflict")
    );
}

#[test]
fn human_errors_go_to_stderr() {
    let output = run_cli(&["forecast", "--city", ""], &[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error[user.invalid_input]: city must not be empty"),
        "stderr: {stderr}"
    );
}

#[test]
fn unreachable_geocoder_is_runtime_fetch_failure() {
    let output = run_cli(
        &["forecast", "--city", "Tokyo", "--json"],
        &[("KAWAII_WEATHER_GEOCODE_URL", "http://127.0.0.1:9/v1/search")],
    );
    assert_eq!(output.status.code(), Some(1));

    let json = stdout_json(&output);
    assert_eq!(
        json.pointer("/error/code").and_then(Value::as_str),
        Some("runtime.fetch_failed")
    );
    assert_eq!(
        json.pointer("/error/details/kind").and_then(Value::as_str),
        Some("runtime")
    );
}
