//! The session state machine: wait for the operator, calibrate, stream.

use std::io::Write;

use exosense_calibration::{CalibrationOffsets, OffsetCalibrator};
use exosense_errors::{ConfigError, ConfigResult, Result};
use exosense_hal::{MonotonicClock, SensorBoard};
use exosense_scheduler::{FixedRateScheduler, MICROS_PER_SECOND, SessionPhase, Tick};
use exosense_telemetry::{SampleFrame, TelemetryWriter};
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::frame::FrameBuilder;

/// Operator prompt printed while idle.
pub const READY_PROMPT: &str = "------------- click on the button to start the program -------------";

/// One exoskeleton session.
///
/// Owns the scheduler (and through it the clock), the board, the output
/// sink and the calibration offsets. Phases run strictly in order:
/// [`run_until_ready`], [`calibrate`], [`stream`]. Calibration refuses to
/// start until the operator has signalled readiness.
///
/// [`run_until_ready`]: Session::run_until_ready
/// [`calibrate`]: Session::calibrate
/// [`stream`]: Session::stream
#[derive(Debug)]
pub struct Session<C, B, W> {
    config: SessionConfig,
    scheduler: FixedRateScheduler<C>,
    board: B,
    writer: TelemetryWriter<W>,
    calibrator: OffsetCalibrator,
    frames: FrameBuilder,
    offsets: CalibrationOffsets,
    operator_ready: bool,
}

impl<C, B, W> Session<C, B, W>
where
    C: MonotonicClock,
    B: SensorBoard,
    W: Write,
{
    /// Validate `config` and assemble an idle session.
    ///
    /// # Errors
    ///
    /// Returns the first failing configuration check.
    pub fn new(config: SessionConfig, clock: C, board: B, out: W) -> ConfigResult<Self> {
        config.validate()?;
        let scheduler =
            FixedRateScheduler::new(clock, config.sampling_rate()?).with_wait_strategy(config.wait);
        let calibrator =
            OffsetCalibrator::new(config.calibration.samples, config.calibration.warmup)?;
        let writer = TelemetryWriter::new(out, config.telemetry_format());
        let frames = FrameBuilder::new(&config);

        debug!(
            hz = config.sampling_frequency_hz,
            layout = %config.telemetry.layout,
            pot_reading = %config.pot_reading,
            torque = ?config.torque,
            "session configured"
        );

        Ok(Self {
            config,
            scheduler,
            board,
            writer,
            calibrator,
            frames,
            offsets: CalibrationOffsets::zero(),
            operator_ready: false,
        })
    }

    /// Print the operator prompt and poll the ready signal until it asserts.
    ///
    /// Returns the number of polls.
    ///
    /// # Errors
    ///
    /// Fails outside the idle phase, or when the prompt cannot be written.
    pub fn run_until_ready(&mut self) -> Result<u64> {
        let phase = self.scheduler.phase();
        if phase != SessionPhase::Idle {
            return Err(ConfigError::InvalidTransition {
                from: phase.name(),
                to: SessionPhase::Calibrating.name(),
            }
            .into());
        }

        self.writer.write_line(format_args!("{READY_PROMPT}"))?;
        self.writer.flush()?;

        let mut polls = 0u64;
        loop {
            polls = polls.saturating_add(1);
            if self.board.operator_ready() {
                break;
            }
            std::hint::spin_loop();
        }
        self.operator_ready = true;
        info!(polls, "operator ready");
        Ok(polls)
    }

    /// Count down, then sample for the configured warm-up plus averaging
    /// window and store the resulting offsets.
    ///
    /// # Errors
    ///
    /// Fails before the operator signalled readiness, when called twice or
    /// after streaming started, or when the output sink fails.
    pub fn calibrate(&mut self) -> Result<CalibrationOffsets> {
        if !self.operator_ready {
            return Err(ConfigError::InvalidTransition {
                from: self.scheduler.phase().name(),
                to: SessionPhase::Calibrating.name(),
            }
            .into());
        }
        self.scheduler.enter(SessionPhase::Calibrating)?;
        self.countdown()?;

        let seconds = self
            .calibrator
            .approximate_seconds(self.scheduler.rate());
        self.writer.write_line(format_args!(
            "Calibration Started. This will take approximately {seconds} seconds."
        ))?;

        let Self {
            config,
            scheduler,
            board,
            writer,
            calibrator,
            ..
        } = self;
        let echo = config.calibration.echo;
        let touch = config.touch;
        let mut echo_error = None;
        let offsets = calibrator.run(scheduler, board, |sample| {
            if !echo || echo_error.is_some() {
                return;
            }
            if let Err(e) = writer.write_calibration_row(
                sample.gyro,
                sample.pot_right,
                sample.pot_left,
                touch.is_touched(sample.touch),
            ) {
                echo_error = Some(e);
            }
        })?;
        if let Some(e) = echo_error {
            return Err(e.into());
        }

        self.offsets = offsets;
        self.write_summary()?;
        self.scheduler
            .wait_us(self.config.calibration.settle_ms.saturating_mul(1_000));
        Ok(offsets)
    }

    /// Emit one telemetry row per tick, `max_ticks` times or forever.
    ///
    /// Returns the number of rows written.
    ///
    /// # Errors
    ///
    /// Fails before calibration, or when the output sink fails. Sensor read
    /// failures never stop the stream.
    pub fn stream(&mut self, max_ticks: Option<u64>) -> Result<u64> {
        self.scheduler.enter(SessionPhase::Streaming)?;
        self.scheduler
            .wait_us(self.config.stream_delay_ms.saturating_mul(1_000));
        info!(
            columns = %self.writer.format().header(),
            "streaming telemetry"
        );

        let Self {
            scheduler,
            board,
            writer,
            frames,
            offsets,
            ..
        } = self;
        let mut rows = 0u64;
        while max_ticks.is_none_or(|max| rows < max) {
            scheduler.run_tick(|tick| {
                let frame = frames.build(&mut *board, offsets, tick);
                writer.write_frame(&frame)
            })?;
            rows = rows.saturating_add(1);
        }

        writer.flush()?;
        debug!(rows, "streaming stopped");
        Ok(rows)
    }

    /// Idle, calibrate, then stream.
    ///
    /// # Errors
    ///
    /// Propagates the first phase error.
    pub fn run(&mut self, max_ticks: Option<u64>) -> Result<u64> {
        self.run_until_ready()?;
        self.calibrate()?;
        self.stream(max_ticks)
    }

    /// Read and convert one frame now, outside the tick loop.
    ///
    /// Nothing is written and the scheduler does not wait.
    pub fn sample_once(&mut self) -> SampleFrame {
        let started_us = self.scheduler.elapsed_us();
        let tick = Tick {
            index: self.scheduler.tick_count(),
            started_us,
            deadline_us: started_us.saturating_add(self.scheduler.period_us()),
        };
        self.frames.build(&mut self.board, &self.offsets, tick)
    }

    /// Calibrated offsets; all zero before calibration.
    pub fn offsets(&self) -> &CalibrationOffsets {
        &self.offsets
    }

    /// Whether [`Session::run_until_ready`] saw the operator signal.
    pub fn operator_ready(&self) -> bool {
        self.operator_ready
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        self.scheduler.phase()
    }

    /// Session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Borrow the scheduler.
    pub fn scheduler(&self) -> &FixedRateScheduler<C> {
        &self.scheduler
    }

    /// Borrow the board.
    pub fn board(&self) -> &B {
        &self.board
    }

    /// Borrow the output sink.
    pub fn output(&self) -> &W {
        self.writer.get_ref()
    }

    /// Recover the output sink.
    pub fn into_output(self) -> W {
        self.writer.into_inner()
    }

    fn countdown(&mut self) -> Result<()> {
        let total = self.config.calibration.countdown_seconds;
        for remaining in (1..=total).rev() {
            self.board.set_indicator((total - remaining) % 2 == 0);
            if remaining == total {
                self.writer.write_line(format_args!(
                    "Calibration starting in {remaining} seconds, please keep the IMU horizontal and fully still."
                ))?;
            } else {
                self.writer
                    .write_line(format_args!("Calibration starting in {remaining} seconds."))?;
            }
            self.writer.flush()?;
            self.scheduler.wait_us(MICROS_PER_SECOND);
        }
        self.board.set_indicator(false);
        Ok(())
    }

    fn write_summary(&mut self) -> Result<()> {
        let prec = self.writer.format().precision;
        let [x, y, z] = self.offsets.gyro();
        let (right, left) = (self.offsets.pot_right(), self.offsets.pot_left());

        self.writer
            .write_line(format_args!("Calibration Finished, Gyro offsets:"))?;
        self.writer
            .write_line(format_args!("{x:.prec$}\t{y:.prec$}\t{z:.prec$}"))?;
        self.writer
            .write_line(format_args!("The offset right angle value is {right:.prec$}"))?;
        self.writer
            .write_line(format_args!("The offset left angle value is {left:.prec$}"))?;
        self.writer.flush()?;
        Ok(())
    }
}
