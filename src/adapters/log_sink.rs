//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing diagnostic events to the `log`
//! facade (stderr via `env_logger` in the binary).

use log::{debug, info};

use crate::app::events::DiagEvent;
use crate::app::ports::EventSink;
use crate::codes::describe;

/// Adapter that logs every [`DiagEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &DiagEvent) {
        match event {
            DiagEvent::Started => info!("START | scanning fuses"),
            DiagEvent::StateChanged { from, to } => {
                debug!("STATE | {:?} -> {:?}", from, to);
            }
            DiagEvent::FuseClassified { fuse, result } => match result {
                Ok(_) => info!("FUSE | {} operational", fuse),
                Err(fault) => info!("FUSE | {} faulted: {}", fuse, describe(*fault)),
            },
            DiagEvent::BlinkStarted { fault, code } => {
                info!("BLINK | {} for '{}'", code, describe(*fault));
            }
            DiagEvent::BlinkFinished { fault, outcome } => {
                info!("BLINK | '{}' {:?}", describe(*fault), outcome);
            }
            DiagEvent::Finished(None) => info!("DONE | no fault"),
            DiagEvent::Finished(Some(fault)) => info!("DONE | {}", describe(*fault)),
        }
    }
}
