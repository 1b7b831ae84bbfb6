//! Timing behaviour of the fixed-rate scheduler.

use exosense_errors::ConfigResult;
use exosense_hal::mock::MockClock;
use exosense_hal::{MonotonicClock, StdClock};
use exosense_scheduler::{FixedRateScheduler, SamplingRate, WaitStrategy};

/// Run `work_us.len()` ticks where tick `i` takes `work_us[i]` of simulated work.
/// Returns the simulated span from the first tick start to the last deadline wait.
fn run_simulated(hz: u32, work_us: &[u64]) -> ConfigResult<u64> {
    let clock = MockClock::with_step(1);
    let work_clock = clock.clone();
    let mut scheduler = FixedRateScheduler::new(clock.clone(), SamplingRate::new(hz)?);

    let start = clock.peek_us();
    for &work in work_us {
        scheduler.run_tick(|_tick| work_clock.advance(work));
    }
    Ok(clock.peek_us() - start)
}

#[test]
fn test_span_matches_period_when_work_fits() -> ConfigResult<()> {
    let period = SamplingRate::new(100)?.period_us();
    let work: Vec<u64> = (0..200).map(|i| (i * 37) % (period - 10)).collect();
    let k = work.len() as u64;

    let span = run_simulated(100, &work)?;
    let ideal = k * period;
    assert!(
        span.abs_diff(ideal) <= period,
        "span {span}us deviates from {ideal}us by more than one period"
    );
    Ok(())
}

#[test]
fn test_overruns_are_not_caught_up() -> ConfigResult<()> {
    let period = SamplingRate::new(1_000)?.period_us();
    let mut work = vec![100u64; 50];
    for slot in [3usize, 10, 11, 30] {
        if let Some(w) = work.get_mut(slot) {
            *w = period * 3;
        }
    }
    let overrun: u64 = work.iter().map(|w| w.saturating_sub(period)).sum();
    let k = work.len() as u64;

    let span = run_simulated(1_000, &work)?;
    assert!(
        span >= k * period + overrun,
        "span {span}us shorter than {k} periods plus {overrun}us of overrun"
    );
    Ok(())
}

#[test]
fn test_overrun_tick_does_not_wait() -> ConfigResult<()> {
    let clock = MockClock::with_step(1);
    let work_clock = clock.clone();
    let mut scheduler = FixedRateScheduler::new(clock.clone(), SamplingRate::new(1_000)?);

    let tick = scheduler.run_tick(|tick| {
        work_clock.advance(5_000);
        tick
    });
    // Only the post-work clock read happens after the deadline has passed.
    assert_eq!(clock.peek_us(), tick.started_us + 1 + 5_000 + 1);
    Ok(())
}

#[test]
fn test_real_clock_lower_bound() -> ConfigResult<()> {
    let clock = StdClock::new();
    let mut scheduler = FixedRateScheduler::new(clock, SamplingRate::new(1_000)?);
    let ticks = 20u64;

    let start = clock.elapsed_us();
    for _ in 0..ticks {
        scheduler.run_tick(|_| ());
    }
    let span = clock.elapsed_us() - start;

    assert!(span >= ticks * 1_000, "span {span}us shorter than {ticks} periods");
    // Generous ceiling for loaded CI machines
    assert!(span < ticks * 1_000 + 100_000, "span {span}us far exceeds schedule");
    Ok(())
}

#[test]
fn test_sleep_then_spin_keeps_lower_bound() -> ConfigResult<()> {
    let clock = StdClock::new();
    let mut scheduler = FixedRateScheduler::new(clock, SamplingRate::new(500)?)
        .with_wait_strategy(WaitStrategy::SleepThenSpin {
            spin_margin_us: 300,
        });

    let start = clock.elapsed_us();
    for _ in 0..10 {
        scheduler.run_tick(|_| ());
    }
    assert!(clock.elapsed_us() - start >= 10 * 2_000);
    Ok(())
}
