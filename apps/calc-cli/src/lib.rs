//! # calc-cli
//!
//! Terminal front end for the calculators in `calc-core`.
//!
//! ## Module Organization
//! ```text
//! calc_cli/
//! ├── lib.rs          ◄─── You are here (logging, config, dispatch)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── config.rs       ◄─── calc.toml + environment overrides
//! ├── state/
//! │   ├── gst.rs      ◄─── GST form (fields, mode, presets, view)
//! │   └── percentage.rs ◄─ Percentage form
//! ├── commands/
//! │   ├── gst.rs      ◄─── One-shot GST calculation
//! │   ├── percentage.rs ◄─ One-shot percentage calculation
//! │   ├── presets.rs  ◄─── List GST presets
//! │   └── session.rs  ◄─── Line-by-line live session
//! └── error.rs        ◄─── AppError and exit codes
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use clap::Parser;
use std::io;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::gst::RateInput;
use commands::Output;
use config::CalcConfig;
use error::AppResult;

/// Parses arguments, loads config and runs the chosen command.
///
/// ## Startup Sequence
/// 1. Initialize tracing (stderr, so stdout carries only results)
/// 2. Load configuration (defaults → file → env → flags)
/// 3. Dispatch the subcommand
pub fn run() -> AppResult<()> {
    init_tracing();

    let cli = Cli::parse();
    debug!(?cli, "Arguments parsed");

    let mut config = CalcConfig::load(cli.config.clone())?;
    if let Some(symbol) = cli.currency {
        config.display.currency_symbol = symbol;
        config.validate()?;
    }
    info!(
        currency = %config.display.currency_symbol,
        mode = %config.gst.default_mode,
        "Configuration loaded"
    );

    let output = Output { json: cli.json };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Gst {
            amount,
            rate,
            preset,
            mode,
        } => {
            let rate = match (rate, preset) {
                (_, Some(preset)) => RateInput::Preset(preset),
                (Some(text), None) => RateInput::Text(text),
                (None, None) => RateInput::Text(String::new()),
            };
            commands::gst::run(&config, output, &mut out, &amount, rate, mode)
        }
        Commands::Percent { base, percentage } => {
            commands::percentage::run(output, &mut out, &base, &percentage)
        }
        Commands::Presets => commands::presets::run(&config, output, &mut out),
        Commands::Session { calculator } => {
            let stdin = io::stdin();
            commands::session::run(calculator, &config, output, stdin.lock(), &mut out)
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every field edit and calculation
/// - Default: warnings, plus INFO for this crate
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,calc_cli=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
