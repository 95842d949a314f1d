//! Blink error-code table.
//!
//! Every fault maps to a fixed four-pulse code that opens with a long
//! "start" pulse, read first-pulse-first:
//!
//! | Fault   | Fuse 0  | Fuse 1  |
//! |---------|---------|---------|
//! | Missing | L S S S | L S S L |
//! | Broken  | L L S S | L L S L |
//!
//! The code is positional: order must be reproduced exactly.

use core::fmt;
use std::io::Write;

use crate::config::PulseTiming;
use crate::fuse::{Fault, FuseIndex};

/// Number of pulses in every error code.
pub const CODE_LEN: usize = 4;

/// Atomic unit of a blink code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pulse {
    Long,
    Short,
}

impl Pulse {
    pub const fn symbol(self) -> char {
        match self {
            Self::Long => 'L',
            Self::Short => 'S',
        }
    }

    /// How long the indicator stays lit for this pulse.
    pub const fn on_ms(self, timing: &PulseTiming) -> u32 {
        match self {
            Self::Long => timing.long_ms,
            Self::Short => timing.short_ms,
        }
    }
}

/// Ordered, fixed-length pulse sequence identifying one fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode([Pulse; CODE_LEN]);

impl ErrorCode {
    pub const fn pulses(&self) -> &[Pulse; CODE_LEN] {
        &self.0
    }

    /// Compact `L`/`S` rendering, e.g. `"LSSL"`.
    pub fn render(&self) -> heapless::String<CODE_LEN> {
        // One ASCII byte per pulse, so the capacity is exact.
        self.0.into_iter().map(Pulse::symbol).collect()
    }

    /// End-to-end render time, including the gap after the last pulse.
    pub fn duration_ms(&self, timing: &PulseTiming) -> u64 {
        timing.sequence_ms(&self.0)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// ---------------------------------------------------------------------------
// Code table
// ---------------------------------------------------------------------------

use Pulse::{Long as L, Short as S};

/// Map a fault to its blink code.
pub const fn code_for(fault: Fault) -> ErrorCode {
    match fault {
        Fault::Missing(FuseIndex::Fuse0) => ErrorCode([L, S, S, S]),
        Fault::Missing(FuseIndex::Fuse1) => ErrorCode([L, S, S, L]),
        Fault::Broken(FuseIndex::Fuse0) => ErrorCode([L, L, S, S]),
        Fault::Broken(FuseIndex::Fuse1) => ErrorCode([L, L, S, L]),
    }
}

/// Human-readable one-line description, e.g. `"Fuse 1 is missing"`.
pub fn describe(fault: Fault) -> String {
    fault.to_string()
}

/// Every known fault, in listing order.
pub const ALL_FAULTS: [Fault; 4] = [
    Fault::Missing(FuseIndex::Fuse1),
    Fault::Missing(FuseIndex::Fuse0),
    Fault::Broken(FuseIndex::Fuse1),
    Fault::Broken(FuseIndex::Fuse0),
];

/// Iterate `(code, fault)` pairs in listing order.
pub fn enumerate() -> impl Iterator<Item = (ErrorCode, Fault)> {
    ALL_FAULTS.into_iter().map(|fault| (code_for(fault), fault))
}

/// One listing line: `<code> : <description>`.
pub fn listing_line(fault: Fault) -> String {
    format!("{} : {}", code_for(fault), describe(fault))
}

/// Print the full code listing, one fault per line. No hardware access.
pub fn write_listing<W: Write + ?Sized>(out: &mut W) -> std::io::Result<()> {
    for (_, fault) in enumerate() {
        writeln!(out, "{}", listing_line(fault))?;
    }
    out.flush()
}
