//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against mock adapters. All tests run on the host with no real display
//! or status files required (except `fs_flow_tests`, which uses a temp dir).

mod blink_timing_tests;
mod fs_flow_tests;
mod mock_hw;
