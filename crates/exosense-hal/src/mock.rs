//! Scripted test doubles.
//!
//! [`MockClock`] is a shared simulated clock: clones observe the same time,
//! so a board can advance it to model per-tick work while the scheduler
//! spins on it. Each [`MonotonicClock::elapsed_us`] call advances it by a
//! fixed step, which bounds every busy-wait.
//!
//! [`MockBoard`] replays scripted readings. When a script runs out, its last
//! entry repeats.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{AnalogChannel, HalError, HalResult, MonotonicClock, RawAxes, SensorBoard};

/// Simulated monotonic clock shared between clones.
#[derive(Debug, Clone)]
pub struct MockClock {
    now_us: Arc<AtomicU64>,
    step_us: u64,
}

impl MockClock {
    /// Clock starting at zero that advances 1 us per read.
    pub fn new() -> Self {
        Self::with_step(1)
    }

    /// Clock starting at zero that advances `step_us` per read.
    pub fn with_step(step_us: u64) -> Self {
        Self {
            now_us: Arc::new(AtomicU64::new(0)),
            step_us,
        }
    }

    /// Current time without advancing.
    pub fn peek_us(&self) -> u64 {
        self.now_us.load(Ordering::Relaxed)
    }

    /// Advance the clock by `us`.
    pub fn advance(&self, us: u64) {
        self.now_us.fetch_add(us, Ordering::Relaxed);
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for MockClock {
    fn elapsed_us(&self) -> u64 {
        self.now_us.fetch_add(self.step_us, Ordering::Relaxed)
    }
}

/// Replays a sequence of values, then repeats the last one forever.
#[derive(Debug, Clone)]
pub struct Script<T> {
    queue: VecDeque<T>,
    last: T,
}

impl<T: Clone> Script<T> {
    /// Script that always yields `value`.
    pub fn constant(value: T) -> Self {
        Self {
            queue: VecDeque::new(),
            last: value,
        }
    }

    /// Script that yields `values` in order, then `fallback` (or the last
    /// value of `values` if any) forever.
    pub fn sequence(values: Vec<T>, fallback: T) -> Self {
        let last = values.last().cloned().unwrap_or(fallback);
        Self {
            queue: values.into(),
            last,
        }
    }

    /// Next scripted value.
    pub fn next_value(&mut self) -> T {
        match self.queue.pop_front() {
            Some(value) => value,
            None => self.last.clone(),
        }
    }
}

/// Scripted [`SensorBoard`].
#[derive(Debug, Clone)]
pub struct MockBoard {
    gyro: Script<HalResult<RawAxes>>,
    accel: Script<HalResult<RawAxes>>,
    pot_right: Script<HalResult<u16>>,
    pot_left: Script<HalResult<u16>>,
    touch: Script<HalResult<u16>>,
    ready_after_polls: u64,
    ready_polls: u64,
    indicator: bool,
    indicator_changes: u64,
    gyro_reads: u64,
    clock: Option<MockClock>,
    work_us: Script<u64>,
}

impl MockBoard {
    /// Board reading zero everywhere, ready on the first poll.
    pub fn new() -> Self {
        Self {
            gyro: Script::constant(Ok([0; 3])),
            accel: Script::constant(Ok([0; 3])),
            pot_right: Script::constant(Ok(0)),
            pot_left: Script::constant(Ok(0)),
            touch: Script::constant(Ok(0)),
            ready_after_polls: 0,
            ready_polls: 0,
            indicator: false,
            indicator_changes: 0,
            gyro_reads: 0,
            clock: None,
            work_us: Script::constant(0),
        }
    }

    /// Gyroscope always reads `axes`.
    pub fn with_constant_gyro(mut self, axes: RawAxes) -> Self {
        self.gyro = Script::constant(Ok(axes));
        self
    }

    /// Gyroscope replays `readings`.
    pub fn with_gyro_script(mut self, readings: Vec<HalResult<RawAxes>>) -> Self {
        self.gyro = Script::sequence(readings, Ok([0; 3]));
        self
    }

    /// Accelerometer always reads `axes`.
    pub fn with_constant_accel(mut self, axes: RawAxes) -> Self {
        self.accel = Script::constant(Ok(axes));
        self
    }

    /// Analog channel always reads `code`.
    pub fn with_constant_analog(mut self, channel: AnalogChannel, code: u16) -> Self {
        *self.analog_script(channel) = Script::constant(Ok(code));
        self
    }

    /// Analog channel replays `readings`.
    pub fn with_analog_script(
        mut self,
        channel: AnalogChannel,
        readings: Vec<HalResult<u16>>,
    ) -> Self {
        *self.analog_script(channel) = Script::sequence(readings, Ok(0));
        self
    }

    /// Analog channel fails on every read.
    pub fn with_disconnected_analog(mut self, channel: AnalogChannel) -> Self {
        *self.analog_script(channel) = Script::constant(Err(HalError::NotConnected));
        self
    }

    /// Operator-ready asserts on poll number `polls` (zero-based).
    pub fn ready_after(mut self, polls: u64) -> Self {
        self.ready_after_polls = polls;
        self
    }

    /// Advance `clock` by the scripted amount on every gyroscope read,
    /// modelling the time one tick's work takes.
    pub fn with_work(mut self, clock: MockClock, work_us: Vec<u64>) -> Self {
        self.clock = Some(clock);
        self.work_us = Script::sequence(work_us, 0);
        self
    }

    /// Number of gyroscope reads performed.
    pub fn gyro_reads(&self) -> u64 {
        self.gyro_reads
    }

    /// Number of operator-ready polls performed.
    pub fn ready_polls(&self) -> u64 {
        self.ready_polls
    }

    /// Number of indicator state changes.
    pub fn indicator_changes(&self) -> u64 {
        self.indicator_changes
    }

    fn analog_script(&mut self, channel: AnalogChannel) -> &mut Script<HalResult<u16>> {
        match channel {
            AnalogChannel::PotentiometerRight => &mut self.pot_right,
            AnalogChannel::PotentiometerLeft => &mut self.pot_left,
            AnalogChannel::Touch => &mut self.touch,
        }
    }
}

impl Default for MockBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorBoard for MockBoard {
    fn gyro_axes(&mut self) -> HalResult<RawAxes> {
        self.gyro_reads = self.gyro_reads.saturating_add(1);
        if let Some(clock) = &self.clock {
            clock.advance(self.work_us.next_value());
        }
        self.gyro.next_value()
    }

    fn accel_axes(&mut self) -> HalResult<RawAxes> {
        self.accel.next_value()
    }

    fn analog_code(&mut self, channel: AnalogChannel) -> HalResult<u16> {
        self.analog_script(channel).next_value()
    }

    fn operator_ready(&mut self) -> bool {
        let ready = self.ready_polls >= self.ready_after_polls;
        self.ready_polls = self.ready_polls.saturating_add(1);
        ready
    }

    fn set_indicator(&mut self, on: bool) {
        if self.indicator != on {
            self.indicator_changes = self.indicator_changes.saturating_add(1);
        }
        self.indicator = on;
    }

    fn indicator(&self) -> bool {
        self.indicator
    }
}
