//! Console indicator adapter.
//!
//! Renders the indicator on a terminal line: the marker while lit, an
//! erased line while blank, and a carriage return to reset the cursor.
//! Write failures are logged and otherwise ignored, so a closed terminal
//! never aborts a diagnosis.

use std::io::Write;

use log::warn;

use crate::app::ports::Indicator;

/// ANSI "erase entire line".
const ERASE_LINE: &[u8] = b"\x1b[2K";

pub struct ConsoleIndicator<W: Write> {
    out: W,
    marker: String,
}

impl<W: Write> ConsoleIndicator<W> {
    pub fn new(out: W, marker: impl Into<String>) -> Self {
        Self {
            out,
            marker: marker.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

}

fn emit<W: Write>(out: &mut W, bytes: &[u8]) {
    if let Err(e) = out.write_all(bytes).and_then(|()| out.flush()) {
        warn!("console indicator: write failed: {}", e);
    }
}

impl<W: Write> Indicator for ConsoleIndicator<W> {
    fn on(&mut self) {
        emit(&mut self.out, self.marker.as_bytes());
    }

    fn off(&mut self) {
        emit(&mut self.out, ERASE_LINE);
    }

    fn reset(&mut self) {
        emit(&mut self.out, b"\r");
    }
}
