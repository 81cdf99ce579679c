use std::io::{self, BufRead, Write};

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use cli_common::{OutputMode, error_envelope, redact_sensitive, select_output_mode, success_envelope};

use kawaii_weather::{
    config::RuntimeConfig,
    error::{
        AppError, CODE_RUNTIME_CLIENT_INIT, CODE_RUNTIME_IO, CODE_RUNTIME_SERIALIZE,
        CODE_USER_OUTPUT_MODE_CONFLICT,
    },
    model::normalize_city,
    providers::{ForecastApi, HttpProviders},
    render::{self, ForecastReport},
    service, session,
    theme::Language,
    units::DisplayUnit,
    view::{ForecastView, demo_forecast},
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Kawaii weather forecast CLI (Open-Meteo, no token)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Multi-day forecast for a city.
    Forecast {
        /// City to look up; defaults to KAWAII_WEATHER_DEFAULT_CITY or Tokyo.
        #[arg(long)]
        city: Option<String>,
        #[command(flatten)]
        display: DisplayArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Built-in demo forecast, no network access.
    Demo {
        #[command(flatten)]
        display: DisplayArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Interactive session: type a city to fetch it, `unit c|f`, `toggle`, `quit`.
    Session {
        #[command(flatten)]
        display: DisplayArgs,
    },
}

#[derive(Debug, Clone, Copy, Args)]
struct DisplayArgs {
    #[arg(long, value_enum)]
    unit: Option<UnitArg>,
    #[arg(long, value_enum)]
    lang: Option<LanguageArg>,
}

#[derive(Debug, Clone, Copy, Args)]
struct OutputArgs {
    #[arg(long, value_enum)]
    output: Option<OutputModeArg>,
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum UnitArg {
    #[value(alias = "celsius")]
    C,
    #[value(alias = "fahrenheit")]
    F,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LanguageArg {
    Ja,
    En,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputModeArg {
    Human,
    Json,
}

const COMMAND_FORECAST: &str = "weather.forecast";
const COMMAND_DEMO: &str = "weather.demo";
const COMMAND_SESSION: &str = "weather.session";

impl From<UnitArg> for DisplayUnit {
    fn from(value: UnitArg) -> Self {
        match value {
            UnitArg::C => DisplayUnit::Celsius,
            UnitArg::F => DisplayUnit::Fahrenheit,
        }
    }
}

impl From<LanguageArg> for Language {
    fn from(value: LanguageArg) -> Self {
        match value {
            LanguageArg::Ja => Language::Ja,
            LanguageArg::En => Language::En,
        }
    }
}

impl From<OutputModeArg> for OutputMode {
    fn from(value: OutputModeArg) -> Self {
        match value {
            OutputModeArg::Human => OutputMode::Human,
            OutputModeArg::Json => OutputMode::Json,
        }
    }
}

impl DisplayArgs {
    fn unit(self) -> DisplayUnit {
        self.unit.map(Into::into).unwrap_or_default()
    }

    fn language(self, config: &RuntimeConfig) -> Language {
        self.lang.map(Into::into).unwrap_or(config.language)
    }
}

impl OutputArgs {
    fn resolve(self) -> Result<OutputMode, AppError> {
        select_output_mode(self.output.map(Into::into), self.json, OutputMode::Human)
            .map_err(|error| AppError::user(CODE_USER_OUTPUT_MODE_CONFLICT, error.to_string()))
    }
}

impl Cli {
    fn command_name(&self) -> &'static str {
        match &self.command {
            Commands::Forecast { .. } => COMMAND_FORECAST,
            Commands::Demo { .. } => COMMAND_DEMO,
            Commands::Session { .. } => COMMAND_SESSION,
        }
    }

    fn display(&self) -> DisplayArgs {
        match &self.command {
            Commands::Forecast { display, .. }
            | Commands::Demo { display, .. }
            | Commands::Session { display } => *display,
        }
    }

    /// Best-effort mode for error reporting, even when the flags conflict.
    fn output_mode_hint(&self) -> OutputMode {
        match &self.command {
            Commands::Forecast { output, .. } | Commands::Demo { output, .. } => {
                if output.json {
                    OutputMode::Json
                } else {
                    output.output.map(Into::into).unwrap_or(OutputMode::Human)
                }
            }
            Commands::Session { .. } => OutputMode::Human,
        }
    }
}

fn main() {
    cli_common::logging::init();

    let cli = Cli::parse();
    let command = cli.command_name();
    let output_mode = cli.output_mode_hint();
    match run(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Err(error) => {
            emit_error(command, output_mode, &error);
            std::process::exit(error.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<String, AppError> {
    let config = RuntimeConfig::from_env();
    let language = cli.display().language(&config);
    let providers = HttpProviders::new(&config)
        .map_err(|error| AppError::runtime(CODE_RUNTIME_CLIENT_INIT, error.to_string()))?
        .with_language(language);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(
        cli,
        &config,
        &providers,
        Local::now().date_naive(),
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}

fn run_with<P, R, W>(
    cli: Cli,
    config: &RuntimeConfig,
    providers: &P,
    today: NaiveDate,
    input: &mut R,
    out: &mut W,
) -> Result<String, AppError>
where
    P: ForecastApi,
    R: BufRead,
    W: Write,
{
    match cli.command {
        Commands::Forecast {
            city,
            display,
            output,
        } => {
            let mode = output.resolve()?;
            let city = normalize_city(city.as_deref().unwrap_or(&config.default_city))?;
            let data = service::fetch_forecast(providers, &city)?;
            let view = ForecastView::new(data, display.unit(), display.language(config));
            render_view(COMMAND_FORECAST, &view, mode)
        }
        Commands::Demo { display, output } => {
            let mode = output.resolve()?;
            let view = ForecastView::new(
                demo_forecast(today),
                display.unit(),
                display.language(config),
            );
            render_view(COMMAND_DEMO, &view, mode)
        }
        Commands::Session { display } => {
            let mut view = ForecastView::new(
                demo_forecast(today),
                display.unit(),
                display.language(config),
            );
            session::run(&mut view, providers, input, out)
                .map_err(|error| AppError::runtime(CODE_RUNTIME_IO, error.to_string()))?;
            Ok(String::new())
        }
    }
}

fn render_view(command: &str, view: &ForecastView, mode: OutputMode) -> Result<String, AppError> {
    match mode {
        OutputMode::Human => Ok(render::render_text(view)),
        OutputMode::Json => {
            let result = serde_json::to_value(ForecastReport::from_view(view)).map_err(|error| {
                AppError::runtime(
                    CODE_RUNTIME_SERIALIZE,
                    format!("failed to serialize output: {error}"),
                )
            })?;
            Ok(success_envelope(command, result).to_string())
        }
    }
}

fn emit_error(command: &str, output_mode: OutputMode, error: &AppError) {
    match output_mode {
        OutputMode::Json => {
            let payload = error_envelope(
                command,
                error.code,
                &error.message,
                error.kind.as_str(),
                error.exit_code(),
            );
            println!("{payload}");
        }
        OutputMode::Human => {
            eprintln!(
                "error[{}]: {}",
                error.code,
                redact_sensitive(&error.message)
            );
        }
    }
}
