//! Blink renderer: plays a pulse sequence on the indicator.
//!
//! Each pulse is one on/off cycle followed by a fixed blank gap:
//!
//! ```text
//!   on ──hold(L|S)──▶ off + reset ──hold(gap)──▶ next pulse
//! ```
//!
//! | Pulse | On-time  | Gap    |
//! |-------|----------|--------|
//! | Long  | 1500 ms  | 500 ms |
//! | Short | 500 ms   | 500 ms |
//!
//! The only suspension points are the two holds per pulse. A sequence of
//! `n` pulses takes `sum(on-time) + n * gap` end to end; the renderer
//! returns only after the last pulse's gap has elapsed.
//!
//! The indicator is borrowed exclusively for the whole render. A guard
//! blanks it on every exit path, including cancellation and the render
//! future being dropped mid-hold.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use log::{debug, info};

use crate::app::ports::{Delay, Indicator};
use crate::codes::Pulse;
use crate::config::PulseTiming;

/// Cancellation request, checked between pulses.
pub type CancelSignal = Signal<CriticalSectionRawMutex, ()>;

/// How a render call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Every pulse and its trailing gap were emitted.
    Completed { emitted: usize },
    /// Cancelled before pulse `emitted` began.
    Cancelled { emitted: usize },
}

impl RenderOutcome {
    pub const fn emitted(self) -> usize {
        match self {
            Self::Completed { emitted } | Self::Cancelled { emitted } => emitted,
        }
    }

    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// Blanks the indicator on drop if it was left lit.
struct DisplayGuard<'a, I: Indicator> {
    indicator: &'a mut I,
    lit: bool,
}

impl<'a, I: Indicator> DisplayGuard<'a, I> {
    fn new(indicator: &'a mut I) -> Self {
        Self {
            indicator,
            lit: false,
        }
    }

    fn light(&mut self) {
        self.indicator.on();
        self.lit = true;
    }

    fn blank(&mut self) {
        self.indicator.off();
        self.indicator.reset();
        self.lit = false;
    }
}

impl<I: Indicator> Drop for DisplayGuard<'_, I> {
    fn drop(&mut self) {
        if self.lit {
            self.blank();
        }
    }
}

/// Sequential pulse renderer. Reusable: every call starts from the first pulse.
pub struct BlinkRenderer<I, D> {
    indicator: I,
    delay: D,
    timing: PulseTiming,
}

impl<I: Indicator, D: Delay> BlinkRenderer<I, D> {
    pub fn new(indicator: I, delay: D, timing: PulseTiming) -> Self {
        Self {
            indicator,
            delay,
            timing,
        }
    }

    /// Give back the indicator and delay.
    pub fn into_parts(self) -> (I, D) {
        (self.indicator, self.delay)
    }

    /// Render `pulses` to completion.
    pub async fn render(&mut self, pulses: &[Pulse]) -> RenderOutcome {
        self.play(pulses, None).await
    }

    /// Render `pulses`, stopping before the next pulse once `cancel` is
    /// signalled. A pulse already started always finishes with its gap.
    ///
    /// The signal is consumed whichever way the render ends, so a request
    /// raised during the last pulse never leaks into the next render.
    pub async fn render_cancellable(
        &mut self,
        pulses: &[Pulse],
        cancel: &CancelSignal,
    ) -> RenderOutcome {
        self.play(pulses, Some(cancel)).await
    }

    async fn play(&mut self, pulses: &[Pulse], cancel: Option<&CancelSignal>) -> RenderOutcome {
        let Self {
            indicator,
            delay,
            timing,
        } = self;
        let mut display = DisplayGuard::new(indicator);

        info!(
            "BLINK | {} pulses, {} ms",
            pulses.len(),
            timing.sequence_ms(pulses)
        );

        for (emitted, pulse) in pulses.iter().enumerate() {
            if let Some(signal) = cancel.filter(|s| s.signaled()) {
                signal.reset();
                info!("BLINK | cancelled after {} pulses", emitted);
                return RenderOutcome::Cancelled { emitted };
            }

            debug!("BLINK | pulse {} {:?}", emitted, pulse);
            display.light();
            delay.hold(pulse.on_ms(timing)).await;
            display.blank();
            delay.hold(timing.gap_ms).await;
        }

        if let Some(signal) = cancel.filter(|s| s.signaled()) {
            signal.reset();
            debug!("BLINK | late cancel discarded, sequence already complete");
        }

        RenderOutcome::Completed {
            emitted: pulses.len(),
        }
    }
}
