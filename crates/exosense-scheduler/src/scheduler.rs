//! The fixed-rate tick loop.

use exosense_errors::ConfigResult;
use exosense_hal::MonotonicClock;

use crate::phase::{ScheduleState, SessionPhase};
use crate::rate::SamplingRate;
use crate::wait::WaitStrategy;

/// One scheduled tick, handed to the tick's work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Zero-based tick index within the current phase.
    pub index: u64,
    /// Clock reading when the tick started.
    pub started_us: u64,
    /// Clock reading the tick waits for.
    pub deadline_us: u64,
}

/// Fixed-period scheduler.
///
/// Owns the clock for its whole lifetime. Each [`run_tick`] call:
///
/// 1. reads the clock and sets `deadline = now + period`
/// 2. runs the tick's work
/// 3. blocks until the clock reaches the deadline
///
/// Overruns are silent: no detection, no catch-up, no dropped-sample count.
///
/// [`run_tick`]: FixedRateScheduler::run_tick
#[derive(Debug)]
pub struct FixedRateScheduler<C> {
    clock: C,
    rate: SamplingRate,
    wait: WaitStrategy,
    state: ScheduleState,
}

impl<C: MonotonicClock> FixedRateScheduler<C> {
    /// Create a busy-spinning scheduler in the `Idle` phase.
    pub fn new(clock: C, rate: SamplingRate) -> Self {
        Self {
            clock,
            rate,
            wait: WaitStrategy::default(),
            state: ScheduleState::default(),
        }
    }

    /// Use a different blocking strategy.
    pub fn with_wait_strategy(mut self, wait: WaitStrategy) -> Self {
        self.wait = wait;
        self
    }

    /// Run one tick of `work` and block until its deadline.
    #[inline]
    pub fn run_tick<R>(&mut self, work: impl FnOnce(Tick) -> R) -> R {
        let started_us = self.clock.elapsed_us();
        let deadline_us = started_us.saturating_add(self.rate.period_us());
        self.state.next_deadline_us = deadline_us;

        let result = work(Tick {
            index: self.state.tick_count,
            started_us,
            deadline_us,
        });

        self.wait.wait_until(&self.clock, deadline_us);
        self.state.tick_count = self.state.tick_count.saturating_add(1);
        result
    }

    /// Block for `duration_us` on the scheduler's clock.
    ///
    /// Used for operator countdowns; does not count as a tick.
    pub fn wait_us(&mut self, duration_us: u64) {
        let deadline_us = self.clock.elapsed_us().saturating_add(duration_us);
        self.wait.wait_until(&self.clock, deadline_us);
    }

    /// Move to the next session phase.
    ///
    /// # Errors
    ///
    /// Returns [`exosense_errors::ConfigError::InvalidTransition`] when the
    /// phase order is violated.
    pub fn enter(&mut self, phase: SessionPhase) -> ConfigResult<()> {
        let from = self.state.phase;
        self.state.transition(phase)?;
        tracing::debug!(%from, to = %phase, "session phase changed");
        Ok(())
    }

    /// Current clock reading.
    #[inline]
    pub fn elapsed_us(&self) -> u64 {
        self.clock.elapsed_us()
    }

    /// Ticks completed in the current phase.
    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.state.tick_count
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    /// Snapshot of the scheduler state.
    #[inline]
    pub fn state(&self) -> ScheduleState {
        self.state
    }

    /// Sampling rate.
    #[inline]
    pub fn rate(&self) -> SamplingRate {
        self.rate
    }

    /// Period in microseconds.
    #[inline]
    pub fn period_us(&self) -> u64 {
        self.rate.period_us()
    }

    /// Borrow the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
