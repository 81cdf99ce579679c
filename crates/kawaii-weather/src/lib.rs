//! Forecast-to-presentation mapping engine behind the `kawaii-weather` CLI.
//!
//! - `units`: Celsius to display-unit conversion and temperature labels.
//! - `weather_code`: WMO weather code classification.
//! - `mood`: mascot mood resolution and face hints.
//! - `theme`: per-category labels, icons and pastel palettes.
//! - `providers` + `service`: geocode-then-forecast fetch pipeline.
//! - `view`: the state container a front end owns.
//! - `session`: interactive line-oriented front end.
//! - `render`: terminal text and JSON report rendering.

pub mod config;
pub mod error;
pub mod model;
pub mod mood;
pub mod providers;
pub mod render;
pub mod service;
pub mod session;
pub mod theme;
pub mod units;
pub mod view;
pub mod weather_code;
