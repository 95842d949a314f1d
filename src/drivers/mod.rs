//! Indicator drivers.

pub mod blink;
