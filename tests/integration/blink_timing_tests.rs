//! Integration tests: BlinkRenderer timing on a virtual clock.

use futures_lite::future::block_on;

use fusediag::codes::{Pulse, enumerate};
use fusediag::config::PulseTiming;
use fusediag::drivers::blink::{BlinkRenderer, RenderOutcome};

use crate::mock_hw::{Bench, DisplayOp, MockDelay, MockIndicator};

#[test]
fn every_code_takes_on_time_plus_one_gap_per_pulse() {
    let timing = PulseTiming::default();
    for (code, fault) in enumerate() {
        let bench = Bench::new();
        let mut renderer =
            BlinkRenderer::new(MockIndicator(bench.clone()), MockDelay(bench.clone()), timing);
        let outcome = block_on(renderer.render(code.pulses()));

        assert_eq!(outcome, RenderOutcome::Completed { emitted: 4 });
        let on_time: u64 = code
            .pulses()
            .iter()
            .map(|p| if *p == Pulse::Long { 1500 } else { 500 })
            .sum();
        assert_eq!(bench.now_ms(), on_time + 4 * 500, "{fault:?}");
        assert_eq!(bench.now_ms(), code.duration_ms(&timing));
    }
}

#[test]
fn pulses_are_separated_by_exact_gap() {
    let bench = Bench::new();
    let mut renderer = BlinkRenderer::new(
        MockIndicator(bench.clone()),
        MockDelay(bench.clone()),
        PulseTiming::default(),
    );
    block_on(renderer.render(&[Pulse::Long, Pulse::Short, Pulse::Short, Pulse::Long]));

    assert_eq!(
        bench.lit_intervals(),
        [(0, 1500), (2000, 500), (3000, 500), (4000, 1500)]
    );
    // Trailing gap after the last pulse is still observed.
    assert_eq!(bench.now_ms(), 6000);
}

#[test]
fn display_is_blanked_and_reset_after_each_pulse() {
    let bench = Bench::new();
    let mut renderer = BlinkRenderer::new(
        MockIndicator(bench.clone()),
        MockDelay(bench.clone()),
        PulseTiming::default(),
    );
    block_on(renderer.render(&[Pulse::Short, Pulse::Short]));

    let ops: Vec<DisplayOp> = bench.ops().into_iter().map(|(_, op)| op).collect();
    assert_eq!(
        ops,
        [
            DisplayOp::On,
            DisplayOp::Off,
            DisplayOp::Reset,
            DisplayOp::On,
            DisplayOp::Off,
            DisplayOp::Reset,
        ]
    );
}

#[test]
fn custom_timing_is_honoured() {
    let timing = PulseTiming {
        long_ms: 30,
        short_ms: 10,
        gap_ms: 5,
    };
    let bench = Bench::new();
    let mut renderer =
        BlinkRenderer::new(MockIndicator(bench.clone()), MockDelay(bench.clone()), timing);
    block_on(renderer.render(&[Pulse::Long, Pulse::Short]));
    assert_eq!(bench.lit_intervals(), [(0, 30), (35, 10)]);
    assert_eq!(bench.now_ms(), 50);
}

#[test]
fn renderer_restarts_from_first_pulse() {
    let bench = Bench::new();
    let mut renderer = BlinkRenderer::new(
        MockIndicator(bench.clone()),
        MockDelay(bench.clone()),
        PulseTiming::default(),
    );
    block_on(renderer.render(&[Pulse::Long]));
    block_on(renderer.render(&[Pulse::Short]));
    assert_eq!(bench.lit_intervals(), [(0, 1500), (2000, 500)]);
}
