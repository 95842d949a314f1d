//! Outbound diagnostic events.
//!
//! The [`DiagnosticService`](super::service::DiagnosticService) emits these
//! through the [`EventSink`](super::ports::EventSink) port. Adapters on the
//! other side decide what to do with them.

use crate::codes::ErrorCode;
use crate::drivers::blink::RenderOutcome;
use crate::fuse::{Classification, Fault, FuseIndex};

use super::service::DiagState;

/// Structured events emitted by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagEvent {
    /// A diagnostic run has started.
    Started,

    /// The orchestrator moved between states.
    StateChanged { from: DiagState, to: DiagState },

    /// One fuse was read and classified.
    FuseClassified {
        fuse: FuseIndex,
        result: Classification,
    },

    /// A fault was mapped to its code and rendering is about to begin.
    BlinkStarted { fault: Fault, code: ErrorCode },

    /// Rendering ended, either completed or cancelled between pulses.
    BlinkFinished { fault: Fault, outcome: RenderOutcome },

    /// The run reached `Done`. `None` means both fuses are operational.
    Finished(Option<Fault>),
}
