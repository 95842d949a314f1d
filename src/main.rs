//! fusediag — entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 Adapters (outer ring)                    │
//! │                                                          │
//! │  FileStatusSource  ConsoleIndicator  ReactorDelay        │
//! │  (StatusSource)    (Indicator)       (Delay)             │
//! │  LogEventSink (EventSink)                                │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ──────────────      │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │  DiagnosticService ──▶ code table ──▶ BlinkRenderer │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! `--codes` / `-c` prints the code listing; anything else diagnoses.
//! A detected fault is reported by the blink code, so the exit status is 0
//! whether or not a fuse is faulted.

use std::ffi::OsString;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use clap::error::ErrorKind;
use edge_executor::LocalExecutor;
use log::{debug, info};

use fusediag::adapters::console::ConsoleIndicator;
use fusediag::adapters::fs_source::FileStatusSource;
use fusediag::adapters::log_sink::LogEventSink;
use fusediag::adapters::time::ReactorDelay;
use fusediag::app::service::DiagnosticService;
use fusediag::codes;
use fusediag::config::DiagConfig;
use fusediag::drivers::blink::BlinkRenderer;

#[derive(Debug, Parser)]
#[command(name = "fusediag", version)]
#[command(about = "Diagnose the two fuses and blink the first fault's error code")]
#[command(args_override_self = true)]
struct Cli {
    /// List every error code with its description instead of diagnosing
    #[arg(short = 'c', long = "codes", action = ArgAction::SetTrue)]
    codes: bool,

    /// Ignored
    #[arg(hide = true, num_args = 0..)]
    extra: Vec<OsString>,
}

/// A present `-c`/`--codes` always selects enumeration; any other argument
/// set that clap rejects selects diagnostic mode instead of failing.
fn parse_cli<I>(args: I) -> Cli
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let codes = args.iter().skip(1).any(|a| a == "-c" || a == "--codes");
            debug!("arguments not recognised ({}), codes={}", e.kind(), codes);
            Cli {
                codes,
                extra: Vec::new(),
            }
        }
    }
}

fn main() -> Result<()> {
    // ── 1. Logging ────────────────────────────────────────────
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = parse_cli(std::env::args_os());
    if !cli.extra.is_empty() {
        debug!("ignoring {} extra arguments", cli.extra.len());
    }

    // ── 2. Enumeration mode: no hardware, no timing ───────────
    if cli.codes {
        codes::write_listing(&mut std::io::stdout().lock()).context("writing code listing")?;
        return Ok(());
    }

    // ── 3. Config ─────────────────────────────────────────────
    let config = DiagConfig::default();
    config.validate()?;

    // ── 4. Adapters + service ─────────────────────────────────
    let mut service = DiagnosticService::new(FileStatusSource::new(&config), LogEventSink::new());
    let mut renderer = BlinkRenderer::new(
        ConsoleIndicator::new(std::io::stdout(), config.marker.clone()),
        ReactorDelay::new(),
        config.timing,
    );

    // ── 5. Run on the cooperative executor ────────────────────
    let executor: LocalExecutor<'_, 8> = LocalExecutor::new();
    let report = futures_lite::future::block_on(executor.run(service.run(&mut renderer)))
        .context("diagnostic run failed")?;

    match report.fault {
        Some(fault) => info!("Diagnosis: {} ({})", fault, codes::code_for(fault)),
        None => info!("Diagnosis: both fuses operational"),
    }
    Ok(())
}
