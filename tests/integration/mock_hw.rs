//! Mock adapters for integration tests.
//!
//! The indicator and delay share one [`Bench`] so tests can assert on the
//! full display timeline against a virtual clock, without real waiting.

use core::future::Future;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use fusediag::app::events::DiagEvent;
use fusediag::app::ports::{Delay, EventSink, Indicator, StatusSource};
use fusediag::error::SourceError;
use fusediag::fuse::FuseIndex;

pub const OK_RECORD: &str = r#"{"status": true}"#;
pub const FAILED_RECORD: &str = r#"{"status": false}"#;

// ── Status source ─────────────────────────────────────────────

pub struct MockSource {
    bodies: [Option<String>; 2],
    reads: [Cell<u32>; 2],
}

#[allow(dead_code)]
impl MockSource {
    pub fn new(fuse0: Option<&str>, fuse1: Option<&str>) -> Self {
        Self {
            bodies: [fuse0.map(str::to_owned), fuse1.map(str::to_owned)],
            reads: Default::default(),
        }
    }

    pub fn reads(&self, fuse: FuseIndex) -> u32 {
        self.reads[fuse.index()].get()
    }
}

impl StatusSource for MockSource {
    fn read(&self, fuse: FuseIndex) -> Result<Vec<u8>, SourceError> {
        let slot = &self.reads[fuse.index()];
        slot.set(slot.get() + 1);
        self.bodies[fuse.index()]
            .as_ref()
            .map(|b| b.as_bytes().to_vec())
            .ok_or(SourceError::NotFound)
    }
}

// ── Display timeline ──────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayOp {
    On,
    Off,
    Reset,
}

/// Shared virtual clock plus the display ops stamped with it.
#[derive(Default)]
pub struct Bench {
    now_ms: Cell<u64>,
    ops: RefCell<Vec<(u64, DisplayOp)>>,
    /// Raised at the start of every hold. Helper tasks wait on it instead
    /// of spinning, so the executor always gets back to the render.
    pub holding: Signal<CriticalSectionRawMutex, ()>,
}

#[allow(dead_code)]
impl Bench {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    pub fn ops(&self) -> Vec<(u64, DisplayOp)> {
        self.ops.borrow().clone()
    }

    /// Lit intervals as `(start, length)`; the code as seen by an observer.
    pub fn lit_intervals(&self) -> Vec<(u64, u64)> {
        let mut out = Vec::new();
        let mut lit_at = None;
        for &(t, op) in self.ops.borrow().iter() {
            match op {
                DisplayOp::On => lit_at = Some(t),
                DisplayOp::Off => {
                    if let Some(start) = lit_at.take() {
                        out.push((start, t - start));
                    }
                }
                DisplayOp::Reset => {}
            }
        }
        out
    }

    fn record(&self, op: DisplayOp) {
        self.ops.borrow_mut().push((self.now_ms.get(), op));
    }
}

pub struct MockIndicator(pub Rc<Bench>);

impl Indicator for MockIndicator {
    fn on(&mut self) {
        self.0.record(DisplayOp::On);
    }
    fn off(&mut self) {
        self.0.record(DisplayOp::Off);
    }
    fn reset(&mut self) {
        self.0.record(DisplayOp::Reset);
    }
}

/// Announces the hold on [`Bench::holding`], yields once so other tasks
/// on the executor get a turn, then advances the virtual clock.
pub struct MockDelay(pub Rc<Bench>);

impl Delay for MockDelay {
    fn hold(&mut self, ms: u32) -> impl Future<Output = ()> {
        let bench = self.0.clone();
        async move {
            bench.holding.signal(());
            futures_lite::future::yield_now().await;
            bench.now_ms.set(bench.now_ms.get() + u64::from(ms));
        }
    }
}

// ── Event sink ────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<DiagEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &DiagEvent) {
        self.events.push(event.clone());
    }
}
