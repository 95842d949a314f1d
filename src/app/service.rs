//! Diagnostic orchestrator — the hexagonal core.
//!
//! [`DiagnosticService`] scans the fuses in order, stops at the first
//! fault, maps it through the code table, and drives the blink renderer.
//!
//! ```text
//!  Idle ──▶ ReadingFuse0 ──ok──▶ ReadingFuse1 ──ok──▶ Done
//!                │                    │                 ▲
//!              fault                fault               │
//!                └────▶ Rendering ◀───┘ ──── blink ─────┘
//! ```
//!
//! Fuse 1 is never read once fuse 0 has faulted. A diagnosis is reported
//! through the indicator and events only, never as an error.

use log::warn;

use crate::codes::code_for;
use crate::drivers::blink::{BlinkRenderer, CancelSignal, RenderOutcome};
use crate::error::Result;
use crate::fuse::{Fault, FuseIndex, classify};

use super::events::DiagEvent;
use super::ports::{Delay, EventSink, Indicator, StatusSource};

/// Orchestrator states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagState {
    Idle,
    ReadingFuse0,
    ReadingFuse1,
    Rendering(Fault),
    Done,
}

/// Result of one diagnostic run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagReport {
    /// First fault found, `None` if both fuses are operational.
    pub fault: Option<Fault>,
    /// How the blink code ended; `None` when nothing was rendered.
    pub outcome: Option<RenderOutcome>,
}

/// The orchestrator owns the status source and event sink; the renderer
/// is lent to each run.
pub struct DiagnosticService<S, E> {
    source: S,
    sink: E,
    state: DiagState,
}

impl<S: StatusSource, E: EventSink> DiagnosticService<S, E> {
    pub fn new(source: S, sink: E) -> Self {
        Self {
            source,
            sink,
            state: DiagState::Idle,
        }
    }

    pub fn state(&self) -> DiagState {
        self.state
    }

    pub fn into_parts(self) -> (S, E) {
        (self.source, self.sink)
    }

    // ── Classification phase ──────────────────────────────────

    /// Scan both fuses from `Idle`, stopping at the first fault.
    ///
    /// Leaves the service in `Rendering(fault)` or `Done`. No display or
    /// timing is involved.
    pub fn scan(&mut self) -> Result<Option<Fault>> {
        self.state = DiagState::Idle;
        self.sink.emit(&DiagEvent::Started);

        loop {
            match self.state {
                DiagState::Rendering(fault) => return Ok(Some(fault)),
                DiagState::Done => return Ok(None),
                _ => {
                    let next = self.step()?;
                    self.transition(next);
                }
            }
        }
    }

    fn step(&mut self) -> Result<DiagState> {
        let next = match self.state {
            DiagState::Idle => DiagState::ReadingFuse0,
            DiagState::ReadingFuse0 => self.read_fuse(FuseIndex::Fuse0, DiagState::ReadingFuse1)?,
            DiagState::ReadingFuse1 => self.read_fuse(FuseIndex::Fuse1, DiagState::Done)?,
            terminal @ (DiagState::Rendering(_) | DiagState::Done) => terminal,
        };
        Ok(next)
    }

    fn read_fuse(&mut self, fuse: FuseIndex, on_ok: DiagState) -> Result<DiagState> {
        let result = classify(&self.source, fuse).inspect_err(|e| {
            warn!("fuse {}: {}", fuse, e);
        })?;
        self.sink.emit(&DiagEvent::FuseClassified { fuse, result });
        Ok(match result {
            Ok(_) => on_ok,
            Err(fault) => DiagState::Rendering(fault),
        })
    }

    fn transition(&mut self, to: DiagState) {
        let from = self.state;
        self.state = to;
        self.sink.emit(&DiagEvent::StateChanged { from, to });
    }

    // ── Full run ──────────────────────────────────────────────

    /// Scan, then blink the first fault's code to completion.
    pub async fn run<I: Indicator, D: Delay>(
        &mut self,
        renderer: &mut BlinkRenderer<I, D>,
    ) -> Result<DiagReport> {
        self.drive(renderer, None).await
    }

    /// As [`run`](Self::run), but the blink stops between pulses once
    /// `cancel` is signalled.
    pub async fn run_cancellable<I: Indicator, D: Delay>(
        &mut self,
        renderer: &mut BlinkRenderer<I, D>,
        cancel: &CancelSignal,
    ) -> Result<DiagReport> {
        self.drive(renderer, Some(cancel)).await
    }

    async fn drive<I: Indicator, D: Delay>(
        &mut self,
        renderer: &mut BlinkRenderer<I, D>,
        cancel: Option<&CancelSignal>,
    ) -> Result<DiagReport> {
        let fault = self.scan()?;

        let outcome = match fault {
            Some(fault) => {
                let code = code_for(fault);
                self.sink.emit(&DiagEvent::BlinkStarted { fault, code });
                let outcome = match cancel {
                    Some(signal) => renderer.render_cancellable(code.pulses(), signal).await,
                    None => renderer.render(code.pulses()).await,
                };
                self.sink.emit(&DiagEvent::BlinkFinished { fault, outcome });
                self.transition(DiagState::Done);
                Some(outcome)
            }
            None => None,
        };

        self.sink.emit(&DiagEvent::Finished(fault));
        Ok(DiagReport { fault, outcome })
    }
}
