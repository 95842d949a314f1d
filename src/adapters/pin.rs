//! GPIO indicator adapter.
//!
//! Drives a single LED through an `embedded-hal` [`OutputPin`]. An LED has
//! no cursor, so `reset` is a no-op. Pin errors are logged, not raised.

use embedded_hal::digital::OutputPin;
use log::warn;

use crate::app::ports::Indicator;

pub struct PinIndicator<P> {
    pin: P,
}

impl<P: OutputPin> PinIndicator<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> Indicator for PinIndicator<P> {
    fn on(&mut self) {
        if let Err(e) = self.pin.set_high() {
            warn!("indicator pin: set_high failed: {:?}", e);
        }
    }

    fn off(&mut self) {
        if let Err(e) = self.pin.set_low() {
            warn!("indicator pin: set_low failed: {:?}", e);
        }
    }

    fn reset(&mut self) {}
}
