use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, OpenTriviaConfig, OpenTriviaService, QuestionSource};
use ui::{App, UiApp, build_app_context};
use ui::vm::RestartMode;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
    InvalidRestartMode { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
            ArgsError::InvalidRestartMode { raw } => {
                write!(f, "invalid --restart value: {raw} (expected reuse or refetch)")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--restart <reuse|refetch>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url https://opentdb.com/api.php");
    eprintln!("  --restart reuse");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRIVIA_API_URL, TRIVIA_RESTART");
}

struct Args {
    api_url: String,
    restart_mode: RestartMode,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api_url = std::env::var("TRIVIA_API_URL")
            .ok()
            .unwrap_or_else(|| services::DEFAULT_API_URL.into());
        let mut restart_mode = std::env::var("TRIVIA_RESTART")
            .ok()
            .and_then(|value| RestartMode::from_arg(&value))
            .unwrap_or_default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    if value.trim().is_empty() || !value.starts_with("http") {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    api_url = value;
                }
                "--restart" => {
                    let value = require_value(args, "--restart")?;
                    restart_mode = RestartMode::from_arg(&value)
                        .ok_or(ArgsError::InvalidRestartMode { raw: value })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            api_url,
            restart_mode,
        })
    }
}

struct DesktopApp {
    question_source: Arc<dyn QuestionSource>,
    restart_mode: RestartMode,
}

impl UiApp for DesktopApp {
    fn question_source(&self) -> Arc<dyn QuestionSource> {
        Arc::clone(&self.question_source)
    }

    fn restart_mode(&self) -> RestartMode {
        self.restart_mode
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let clock = Clock::default_clock();
    let source = Arc::new(OpenTriviaService::new(
        clock,
        OpenTriviaConfig {
            base_url: parsed.api_url,
        },
    ));

    let app = DesktopApp {
        question_source: source,
        restart_mode: parsed.restart_mode,
    };
    let context = build_app_context(&(Arc::new(app) as Arc<dyn UiApp>));

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Trivia Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
