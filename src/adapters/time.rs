//! Reactor-backed delay adapter.
//!
//! Implements [`Delay`] with `async-io-mini` timers: a hold parks the task
//! until the reactor fires the timer, leaving the executor free to poll
//! other futures. Never sleeps the thread.

use core::future::Future;
use core::time::Duration;

use crate::app::ports::Delay;

// async-io-mini timers call into the embassy-time driver, which only gets
// linked if something references the crate.
use embassy_time as _;

#[derive(Debug, Default)]
pub struct ReactorDelay {
    held_ms: u64,
}

impl ReactorDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total requested hold time since construction.
    pub fn held_ms(&self) -> u64 {
        self.held_ms
    }
}

impl Delay for ReactorDelay {
    fn hold(&mut self, ms: u32) -> impl Future<Output = ()> {
        self.held_ms += u64::from(ms);
        let period = Duration::from_millis(u64::from(ms));
        async move {
            async_io_mini::Timer::after(period).await;
        }
    }
}
