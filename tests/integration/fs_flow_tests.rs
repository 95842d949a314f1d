//! Integration tests: real adapters (status files, reactor timer) end to end.

use std::time::{Duration, Instant};

use edge_executor::LocalExecutor;
use futures_lite::future::block_on;

use fusediag::adapters::console::ConsoleIndicator;
use fusediag::adapters::fs_source::FileStatusSource;
use fusediag::adapters::log_sink::LogEventSink;
use fusediag::adapters::time::ReactorDelay;
use fusediag::app::service::DiagnosticService;
use fusediag::config::{DiagConfig, PulseTiming};
use fusediag::drivers::blink::{BlinkRenderer, RenderOutcome};
use fusediag::error::{Error, SourceError};
use fusediag::fuse::{Fault, FuseIndex};

use crate::mock_hw::{FAILED_RECORD, OK_RECORD};

fn fast_config(dir: &std::path::Path) -> DiagConfig {
    DiagConfig {
        timing: PulseTiming {
            long_ms: 6,
            short_ms: 2,
            gap_ms: 2,
        },
        ..DiagConfig::with_status_dir(dir)
    }
}

#[test]
fn files_on_disk_drive_console_blink() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("fuse0.json"), OK_RECORD).unwrap();
    std::fs::write(dir.path().join("fuse1.json"), FAILED_RECORD).unwrap();
    let config = fast_config(dir.path());
    config.validate().unwrap();

    let mut svc = DiagnosticService::new(FileStatusSource::new(&config), LogEventSink::new());
    let mut renderer = BlinkRenderer::new(
        ConsoleIndicator::new(Vec::new(), config.marker.clone()),
        ReactorDelay::new(),
        config.timing,
    );

    let executor: LocalExecutor<'_, 8> = LocalExecutor::new();
    let start = Instant::now();
    let report = block_on(executor.run(svc.run(&mut renderer))).unwrap();
    let elapsed = start.elapsed();

    let fault = Fault::Broken(FuseIndex::Fuse1);
    assert_eq!(report.fault, Some(fault));
    assert_eq!(report.outcome, Some(RenderOutcome::Completed { emitted: 4 }));

    let expected_ms = fusediag::codes::code_for(fault).duration_ms(&config.timing);
    assert!(elapsed >= Duration::from_millis(expected_ms));

    let (console, delay) = renderer.into_parts();
    assert_eq!(delay.held_ms(), expected_ms);
    let written = console.into_inner();
    assert_eq!(written, b"*\x1b[2K\r".repeat(4));
}

#[test]
fn empty_directory_reports_missing_fuse0() {
    let dir = tempfile::tempdir().unwrap();
    let config = fast_config(dir.path());
    let mut svc = DiagnosticService::new(FileStatusSource::new(&config), LogEventSink::new());
    assert_eq!(svc.scan().unwrap(), Some(Fault::Missing(FuseIndex::Fuse0)));
}

#[test]
fn unreadable_record_is_a_fatal_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("fuse0.json")).unwrap();
    let config = fast_config(dir.path());
    let mut svc = DiagnosticService::new(FileStatusSource::new(&config), LogEventSink::new());
    assert!(matches!(svc.scan(), Err(Error::Source(SourceError::Io(_)))));
}
