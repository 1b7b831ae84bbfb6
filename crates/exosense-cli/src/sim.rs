//! Simulated sensor board for hosted runs.

use std::f64::consts::TAU;

use exosense_hal::{AnalogChannel, HalResult, RawAxes, SensorBoard};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Gyroscope reads per simulated gait cycle.
const READS_PER_STRIDE: f64 = 100.0;

/// Board that replays a noisy walking gait.
///
/// Knee potentiometers swing in anti-phase around mid travel, the touch pad
/// is pressed during the stance half of each stride and the gyroscope
/// carries a constant bias the calibration should remove. The gait advances
/// on every gyroscope read.
#[derive(Debug)]
pub struct SimulatedBoard {
    rng: StdRng,
    phase: f64,
    gyro_bias: RawAxes,
    ready_after: u64,
    polls: u64,
    indicator: bool,
}

impl SimulatedBoard {
    /// Board with a reproducible noise sequence.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            phase: 0.0,
            gyro_bias: [1_200, -800, 350],
            ready_after: 0,
            polls: 0,
            indicator: false,
        }
    }

    /// Operator presses the start button after `polls` polls.
    pub fn ready_after(mut self, polls: u64) -> Self {
        self.ready_after = polls;
        self
    }

    fn noise(&mut self, amplitude: i32) -> i32 {
        self.rng.random_range(-amplitude..=amplitude)
    }

    fn knee_code(&mut self, phase: f64) -> u16 {
        let noise = f64::from(self.noise(30));
        to_code(20_000.0 + 12_000.0 * phase.sin() + noise)
    }
}

impl SensorBoard for SimulatedBoard {
    fn gyro_axes(&mut self) -> HalResult<RawAxes> {
        self.phase = (self.phase + TAU / READS_PER_STRIDE) % TAU;
        let swing = to_axis(40_000.0 * self.phase.cos());
        let [bx, by, bz] = self.gyro_bias;
        Ok([
            bx.saturating_add(swing).saturating_add(self.noise(200)),
            by.saturating_add(self.noise(200)),
            bz.saturating_add(self.noise(200)),
        ])
    }

    fn accel_axes(&mut self) -> HalResult<RawAxes> {
        Ok([self.noise(15), self.noise(15), 1_000 + self.noise(15)])
    }

    fn analog_code(&mut self, channel: AnalogChannel) -> HalResult<u16> {
        let phase = self.phase;
        Ok(match channel {
            AnalogChannel::PotentiometerRight => self.knee_code(phase),
            AnalogChannel::PotentiometerLeft => self.knee_code(phase + TAU / 2.0),
            AnalogChannel::Touch => {
                let base = if phase.sin() > 0.0 { 45_000.0 } else { 3_000.0 };
                let noise = f64::from(self.noise(500));
                to_code(base + noise)
            }
        })
    }

    fn operator_ready(&mut self) -> bool {
        let ready = self.polls >= self.ready_after;
        self.polls = self.polls.saturating_add(1);
        ready
    }

    fn set_indicator(&mut self, on: bool) {
        if on != self.indicator {
            tracing::trace!(on, "indicator");
        }
        self.indicator = on;
    }

    fn indicator(&self) -> bool {
        self.indicator
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "clamped to the u16 range first"
)]
fn to_code(value: f64) -> u16 {
    value.clamp(0.0, f64::from(u16::MAX)) as u16
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "clamped to the i32 range first"
)]
fn to_axis(value: f64) -> i32 {
    value.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}
