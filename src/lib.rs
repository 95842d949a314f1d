//! Fuse interlock diagnostics.
//!
//! Reads the status record of two fuses, classifies each as operational,
//! missing, or broken, and blinks the first fault as a four-pulse
//! appliance-style error code.
//!
//! Exposes the pure-logic modules for integration testing; the binary in
//! `main.rs` wires them to the filesystem, the console, and a timer reactor.

pub mod adapters;
pub mod app;
pub mod codes;
pub mod config;
pub mod drivers;
pub mod error;
pub mod fuse;
