//! Fuse identity, fault taxonomy, and the fault classifier.
//!
//! A fuse is classified from a single read of its status record:
//!
//! | Record                              | Classification |
//! |-------------------------------------|----------------|
//! | absent                              | `Missing`      |
//! | present, unparsable / wrong schema  | `Broken`       |
//! | present, `"status": false`          | `Broken`       |
//! | present, `"status": true`           | `Operational`  |
//!
//! Nothing is cached: every call reads the source again.

use core::fmt;

use log::debug;
use serde::Deserialize;

use crate::app::ports::StatusSource;
use crate::error::{Result, SourceError};

// ---------------------------------------------------------------------------
// Fuse identity
// ---------------------------------------------------------------------------

/// One of the two monitored fuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FuseIndex {
    Fuse0 = 0,
    Fuse1 = 1,
}

impl FuseIndex {
    /// Scan order used by the orchestrator.
    pub const ALL: [FuseIndex; 2] = [FuseIndex::Fuse0, FuseIndex::Fuse1];

    /// Boolean fuse selector: `true` selects fuse 1.
    pub const fn from_flag(flag: bool) -> Self {
        if flag { Self::Fuse1 } else { Self::Fuse0 }
    }

    pub const fn flag(self) -> bool {
        matches!(self, Self::Fuse1)
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FuseIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

// ---------------------------------------------------------------------------
// Fault taxonomy
// ---------------------------------------------------------------------------

/// The kind of fault, without the fuse it applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    Missing,
    Broken,
}

impl FaultKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Broken => "broken",
        }
    }
}

/// A detected fault on a specific fuse.
///
/// Exactly four inhabitants; the code table and the enumeration routine
/// match on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fault {
    /// The status record does not exist.
    Missing(FuseIndex),
    /// The status record exists but is unparsable or reports failure.
    Broken(FuseIndex),
}

impl Fault {
    pub const fn new(kind: FaultKind, fuse: FuseIndex) -> Self {
        match kind {
            FaultKind::Missing => Self::Missing(fuse),
            FaultKind::Broken => Self::Broken(fuse),
        }
    }

    pub const fn kind(self) -> FaultKind {
        match self {
            Self::Missing(_) => FaultKind::Missing,
            Self::Broken(_) => FaultKind::Broken,
        }
    }

    pub const fn fuse(self) -> FuseIndex {
        match self {
            Self::Missing(fuse) | Self::Broken(fuse) => fuse,
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fuse {} is {}", self.fuse(), self.kind().as_str())
    }
}

/// Non-fault outcome of a fuse read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operational;

/// Outcome of classifying one fuse: operational, or the fault found.
pub type Classification = core::result::Result<Operational, Fault>;

// ---------------------------------------------------------------------------
// Status record
// ---------------------------------------------------------------------------

/// On-disk status record. Only `status` is consulted; other fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StatusRecord {
    pub status: bool,
}

impl StatusRecord {
    /// Parse a raw record body. `None` for anything that is not a JSON
    /// object with a boolean `status` field.
    pub fn parse(raw: &[u8]) -> Option<Self> {
        serde_json::from_slice(raw).ok()
    }
}

/// Classify a raw record body that is known to exist.
pub fn classify_record(fuse: FuseIndex, raw: &[u8]) -> Classification {
    match StatusRecord::parse(raw) {
        Some(StatusRecord { status: true }) => Ok(Operational),
        Some(StatusRecord { status: false }) => Err(Fault::Broken(fuse)),
        None => {
            debug!("fuse {}: status record unparsable ({} bytes)", fuse, raw.len());
            Err(Fault::Broken(fuse))
        }
    }
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// Read `fuse`'s status record once and classify it.
///
/// Absence is a fault (`Missing`); any other source error is not modelled
/// and propagates to the caller.
pub fn classify<S: StatusSource + ?Sized>(source: &S, fuse: FuseIndex) -> Result<Classification> {
    match source.read(fuse) {
        Ok(raw) => Ok(classify_record(fuse, &raw)),
        Err(SourceError::NotFound) => Ok(Err(Fault::Missing(fuse))),
        Err(e) => Err(e.into()),
    }
}
