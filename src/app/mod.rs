//! Application core — diagnostic logic, zero direct I/O.
//!
//! The orchestrator in [`service`] scans the fuses and drives the blink
//! renderer. All interaction with storage, displays, and timers happens
//! through the **port traits** in [`ports`], keeping this layer testable
//! without real files or indicators.

pub mod events;
pub mod ports;
pub mod service;
