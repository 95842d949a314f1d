//! Diagnostic configuration parameters
//!
//! Compiled-in defaults only. Tests build non-default values (temporary
//! status directories, millisecond pulse timings).

use std::path::PathBuf;

use crate::codes::Pulse;
use crate::error::{Error, Result};
use crate::fuse::FuseIndex;

/// Blink timing, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseTiming {
    /// Indicator on-time for a long pulse
    pub long_ms: u32,
    /// Indicator on-time for a short pulse
    pub short_ms: u32,
    /// Blank hold after every pulse, including the last
    pub gap_ms: u32,
}

impl Default for PulseTiming {
    fn default() -> Self {
        Self {
            long_ms: 1500,
            short_ms: 500,
            gap_ms: 500,
        }
    }
}

impl PulseTiming {
    /// Total time to render `pulses`: every on-time plus one gap per pulse.
    pub fn sequence_ms(&self, pulses: &[Pulse]) -> u64 {
        pulses
            .iter()
            .map(|p| u64::from(p.on_ms(self)) + u64::from(self.gap_ms))
            .sum()
    }
}

/// Core diagnostic configuration
#[derive(Debug, Clone)]
pub struct DiagConfig {
    /// Directory holding the fuse status records
    pub status_dir: PathBuf,
    /// Record file name per fuse, indexed by `FuseIndex`
    pub status_files: [String; 2],
    /// Blink timing
    pub timing: PulseTiming,
    /// Marker written to the console while the indicator is lit
    pub marker: String,
}

impl Default for DiagConfig {
    fn default() -> Self {
        Self {
            status_dir: PathBuf::from("."),
            status_files: ["fuse0.json".into(), "fuse1.json".into()],
            timing: PulseTiming::default(),
            marker: "*".into(),
        }
    }
}

impl DiagConfig {
    /// Defaults, reading status records from `dir`.
    pub fn with_status_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            status_dir: dir.into(),
            ..Self::default()
        }
    }

    /// Path of `fuse`'s status record.
    pub fn status_path(&self, fuse: FuseIndex) -> PathBuf {
        self.status_dir.join(&self.status_files[fuse.index()])
    }

    /// Reject configurations that would make codes unreadable or
    /// alias the two fuses.
    pub fn validate(&self) -> Result<()> {
        let t = &self.timing;
        if t.long_ms == 0 || t.short_ms == 0 || t.gap_ms == 0 {
            return Err(Error::Config("pulse durations must be non-zero"));
        }
        if t.long_ms <= t.short_ms {
            return Err(Error::Config("long pulse must outlast short pulse"));
        }
        if self.marker.is_empty() {
            return Err(Error::Config("marker is empty"));
        }
        let [a, b] = &self.status_files;
        if a.is_empty() || b.is_empty() {
            return Err(Error::Config("status file name is empty"));
        }
        if a == b {
            return Err(Error::Config("both fuses share one status file"));
        }
        Ok(())
    }
}
