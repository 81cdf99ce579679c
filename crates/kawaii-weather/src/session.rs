//! Line-oriented front end over [`ForecastView`].
//!
//! Each input line is one action: fetch a city, switch units, redraw, or quit.
//! A bare line that is not a keyword is taken as a city name.

use std::io::{self, BufRead, Write};

use crate::model::{ValidationError, normalize_city};
use crate::providers::{FetchError, ForecastApi};
use crate::render;
use crate::theme::Language;
use crate::units::DisplayUnit;
use crate::view::ForecastView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    City(String),
    Unit(DisplayUnit),
    Toggle,
    Show,
    Help,
    Quit,
    Empty,
}

impl SessionCommand {
    pub fn parse(line: &str) -> Result<Self, ValidationError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Self::Empty);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        match keyword.to_ascii_lowercase().as_str() {
            "quit" | "exit" | "q" if rest.is_empty() => Ok(Self::Quit),
            "help" | "?" if rest.is_empty() => Ok(Self::Help),
            "show" if rest.is_empty() => Ok(Self::Show),
            "toggle" | "t" if rest.is_empty() => Ok(Self::Toggle),
            "unit" => DisplayUnit::parse(rest)
                .map(Self::Unit)
                .ok_or_else(|| ValidationError::UnknownUnit(rest.to_string())),
            "city" => normalize_city(rest).map(Self::City),
            _ => normalize_city(line).map(Self::City),
        }
    }
}

/// Alert text for a failed fetch, in the view's language.
pub fn alert_message(error: &FetchError, language: Language) -> String {
    match (error, language) {
        (FetchError::PlaceNotFound(name), Language::Ja) => {
            format!("場所が見つかりません: {name}")
        }
        (FetchError::Transport(_) | FetchError::MalformedResponse(_), Language::Ja) => {
            format!("予報を取得できませんでした ({error})")
        }
        (_, Language::En) => error.to_string(),
    }
}

fn invalid_input_message(language: Language) -> &'static str {
    match language {
        Language::Ja => "入力を読み取れませんでした (UTF-8 ではありません)",
        Language::En => "input line is not valid UTF-8",
    }
}

pub fn help_text(language: Language) -> &'static str {
    match language {
        Language::Ja => {
            "コマンド: <都市名> | city <都市名> | unit c|f | toggle | show | help | quit"
        }
        Language::En => "commands: <city> | city <name> | unit c|f | toggle | show | help | quit",
    }
}

/// Drives the view from `input` until EOF or `quit`. Fetch failures and lines
/// that are not UTF-8 are shown as alerts and never end the session.
pub fn run<P, R, W>(
    view: &mut ForecastView,
    providers: &P,
    input: &mut R,
    out: &mut W,
) -> io::Result<()>
where
    P: ForecastApi + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", render::render_text(view))?;
    writeln!(out, "{}", help_text(view.language()))?;

    let mut buf = Vec::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let Ok(line) = std::str::from_utf8(&buf) else {
            writeln!(out, "! {}", invalid_input_message(view.language()))?;
            continue;
        };

        let command = match SessionCommand::parse(line) {
            Ok(command) => command,
            Err(error) => {
                writeln!(out, "! {error}")?;
                continue;
            }
        };

        match command {
            SessionCommand::Quit => break,
            SessionCommand::Empty => {}
            SessionCommand::Help => writeln!(out, "{}", help_text(view.language()))?,
            SessionCommand::Show => writeln!(out, "{}", render::render_text(view))?,
            SessionCommand::Unit(unit) => {
                view.set_unit(unit);
                writeln!(out, "{}", render::render_text(view))?;
            }
            SessionCommand::Toggle => {
                view.toggle_unit();
                writeln!(out, "{}", render::render_text(view))?;
            }
            SessionCommand::City(city) => {
                let refreshed = view.refresh(providers, &city).map(|_| ());
                match refreshed {
                    Ok(()) => writeln!(out, "{}", render::render_text(view))?,
                    Err(error) => writeln!(out, "! {}", alert_message(&error, view.language()))?,
                }
            }
        }
    }

    Ok(())
}
