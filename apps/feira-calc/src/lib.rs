//! # feira-calc Library
//!
//! JSON command adapter over `feira-core`. The dashboard's API spawns it
//! (or links the library) to run money calculations.
//!
//! ## Module Organization
//! ```text
//! feira_calc/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── CalcConfig: TOML + FEIRA_* env
//! ├── state.rs        ◄─── CalcState: configured core components
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command envelope, MoneyInput, dispatch
//! │   ├── money.rs    ◄─── parse_money, format_money
//! │   ├── contract.rs ◄─── compute_discount, build_installments
//! │   └── profitability.rs ◄─── stand_metrics, analyze_fair
//! └── error.rs        ◄─── ApiError for command failures
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use config::{CalcConfig, ConfigError};
use state::CalcState;

/// Failures before a command can run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read request: {0}")]
    Input(#[from] std::io::Error),
}

/// Runs one JSON command against the Feira calculation core
#[derive(Parser, Debug)]
#[command(name = "feira-calc", version)]
pub struct Cli {
    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Request file (JSON); stdin when absent or "-"
    pub request: Option<PathBuf>,
}

impl Cli {
    /// The request file to read, `None` for stdin.
    pub fn request_file(&self) -> Option<&Path> {
        self.request
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }
}

/// Runs one request from the command line.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Parse Arguments ─────► clap; usage errors exit with status 2        │
/// │  2. Initialize Logging ──► stderr, EnvFilter (RUST_LOG)                 │
/// │  3. Load Config ─────────► defaults → feira.toml → FEIRA_* env          │
/// │  4. Build CalcState ─────► codec, calculator, analyzer                  │
/// │  5. Read Request ────────► file argument or stdin                       │
/// │  6. Dispatch ────────────► JSON response or { code, message } on stdout │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let (state, request) = match prepare(&cli) {
        Ok(prepared) => prepared,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(2);
        }
    };

    let (body, code) = match commands::handle_request(&state, &request) {
        Ok(response) => (response, ExitCode::SUCCESS),
        Err(api_error) => {
            info!(code = ?api_error.code, message = %api_error.message, "Command rejected");
            match serde_json::to_value(&api_error) {
                Ok(body) => (body, ExitCode::from(1)),
                Err(e) => {
                    error!("Failed to encode error: {}", e);
                    return ExitCode::from(1);
                }
            }
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", body) {
        error!("Failed to write response: {}", e);
        return ExitCode::from(1);
    }
    code
}

/// Loads configuration and reads the request document.
fn prepare(cli: &Cli) -> Result<(CalcState, String), RunError> {
    let config = CalcConfig::load(cli.config.clone())?;
    let state = CalcState::from_config(&config)?;
    debug!(?config, "Calculator configured");

    let request = match cli.request_file() {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    Ok((state, request))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=feira_core=trace` - Show trace for the core only
/// - Default: INFO, DEBUG for feira crates
///
/// Logs go to stderr; stdout carries only the JSON response.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,feira_core=debug,feira_calc=debug"));

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("feira-calc").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_defaults_to_stdin() {
        let parsed = cli(&[]).unwrap();
        assert_eq!(parsed.config, None);
        assert_eq!(parsed.request_file(), None);

        assert_eq!(cli(&["-"]).unwrap().request_file(), None);
    }

    #[test]
    fn test_cli_config_and_request() {
        let parsed = cli(&["--config", "feira.toml", "request.json"]).unwrap();
        assert_eq!(parsed.config, Some(PathBuf::from("feira.toml")));
        assert_eq!(parsed.request_file(), Some(Path::new("request.json")));

        let short = cli(&["-c", "other.toml"]).unwrap();
        assert_eq!(short.config, Some(PathBuf::from("other.toml")));
    }

    #[test]
    fn test_cli_errors() {
        assert!(cli(&["--config"]).is_err());
        assert!(cli(&["--verbose"]).is_err());
        assert!(cli(&["a.json", "b.json"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
