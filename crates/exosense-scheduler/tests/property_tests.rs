//! Property-based tests for the scheduler.

use exosense_hal::mock::MockClock;
use exosense_scheduler::{FixedRateScheduler, SamplingRate, SessionPhase};
use proptest::prelude::*;
use quickcheck_macros::quickcheck;

#[quickcheck]
fn period_times_frequency_never_exceeds_one_second(hz: u32) -> bool {
    match SamplingRate::new(hz) {
        Ok(rate) => rate.period_us() * u64::from(rate.hz()) <= 1_000_000 && rate.period_us() > 0,
        Err(_) => hz == 0 || hz > 1_000_000,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_tick_lasts_at_least_one_period(
        hz in 100u32..5_000,
        work in prop::collection::vec(0u64..20_000, 1..40),
    ) {
        let rate = SamplingRate::new(hz).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let clock = MockClock::with_step(3);
        let work_clock = clock.clone();
        let mut scheduler = FixedRateScheduler::new(clock.clone(), rate);

        for &w in &work {
            let tick = scheduler.run_tick(|tick| {
                work_clock.advance(w);
                tick
            });
            prop_assert!(clock.peek_us() >= tick.deadline_us);
            prop_assert!(clock.peek_us() >= tick.started_us + w);
        }
        prop_assert_eq!(scheduler.tick_count(), work.len() as u64);
    }

    #[test]
    fn only_forward_transitions_succeed(steps in prop::collection::vec(0u8..3, 0..8)) {
        let rate = SamplingRate::new(100).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let mut scheduler = FixedRateScheduler::new(MockClock::new(), rate);
        for step in steps {
            let next = match step {
                0 => SessionPhase::Idle,
                1 => SessionPhase::Calibrating,
                _ => SessionPhase::Streaming,
            };
            let before = scheduler.phase();
            let result = scheduler.enter(next);
            prop_assert_eq!(result.is_ok(), before.can_transition_to(next));
            if result.is_err() {
                prop_assert_eq!(scheduler.phase(), before);
            }
        }
    }
}
