//! Port traits — the hexagonal boundary between diagnostic logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ DiagnosticService / BlinkRenderer
//! ```
//!
//! Driven adapters (status records, indicator, timer, event sink) implement
//! these traits. The domain consumes them via generics, so it never
//! touches files, terminals, or GPIO directly.

use core::future::Future;

use crate::error::SourceError;
use crate::fuse::FuseIndex;

// ───────────────────────────────────────────────────────────────
// Status source port (driven adapter: storage → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port for fuse status records.
pub trait StatusSource {
    /// Read the raw status record for `fuse`.
    ///
    /// Must return [`SourceError::NotFound`] when the record does not
    /// exist; every other failure is reported as [`SourceError::Io`].
    fn read(&self, fuse: FuseIndex) -> Result<Vec<u8>, SourceError>;
}

// ───────────────────────────────────────────────────────────────
// Indicator port (driven adapter: domain → display)
// ───────────────────────────────────────────────────────────────

/// Display primitive driven by the blink renderer.
///
/// Exactly one writer exists for the duration of a render call.
pub trait Indicator {
    /// Light the indicator (write the fixed marker).
    fn on(&mut self);

    /// Blank the indicator.
    fn off(&mut self);

    /// Return the display position to the start of the line.
    fn reset(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Delay port (driven adapter: domain → timer)
// ───────────────────────────────────────────────────────────────

/// Timed hold. The only suspension point in the diagnostic flow.
pub trait Delay {
    /// Suspend for `ms` milliseconds, yielding to the executor.
    fn hold(&mut self, ms: u32) -> impl Future<Output = ()>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The orchestrator emits structured [`DiagEvent`](super::events::DiagEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::DiagEvent);
}

impl<T: StatusSource + ?Sized> StatusSource for &T {
    fn read(&self, fuse: FuseIndex) -> Result<Vec<u8>, SourceError> {
        (**self).read(fuse)
    }
}

impl<T: Indicator + ?Sized> Indicator for &mut T {
    fn on(&mut self) {
        (**self).on();
    }

    fn off(&mut self) {
        (**self).off();
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}

impl<T: Delay> Delay for &mut T {
    fn hold(&mut self, ms: u32) -> impl Future<Output = ()> {
        (**self).hold(ms)
    }
}

impl<T: EventSink + ?Sized> EventSink for &mut T {
    fn emit(&mut self, event: &super::events::DiagEvent) {
        (**self).emit(event);
    }
}
