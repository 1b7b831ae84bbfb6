//! Tab-delimited stream writer.

use std::io::{self, Write};

use crate::format::TelemetryFormat;
use crate::frame::SampleFrame;

/// Writes frames as tab-separated lines into any [`Write`] sink.
///
/// Numbers are formatted straight into the sink; a row never allocates.
/// Wrap unbuffered sinks (such as stdout) in a [`io::BufWriter`] or
/// [`io::LineWriter`].
#[derive(Debug)]
pub struct TelemetryWriter<W> {
    out: W,
    format: TelemetryFormat,
    rows: u64,
}

impl<W: Write> TelemetryWriter<W> {
    /// Writer emitting rows in `format`.
    pub fn new(out: W, format: TelemetryFormat) -> Self {
        Self {
            out,
            format,
            rows: 0,
        }
    }

    /// Row format.
    pub fn format(&self) -> &TelemetryFormat {
        &self.format
    }

    /// Frames written so far.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Write the tab-separated column names as one line.
    ///
    /// # Errors
    ///
    /// Propagates sink errors.
    pub fn write_header(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", self.format.header())
    }

    /// Write one frame as one line.
    ///
    /// Columns the frame lacks (accelerometer in the `imu` layout, torque
    /// when torque columns are on) are written as zero so every row keeps
    /// the same shape.
    ///
    /// # Errors
    ///
    /// Propagates sink errors.
    pub fn write_frame(&mut self, frame: &SampleFrame) -> io::Result<()> {
        let mut row = Row::new(&mut self.out, self.format.precision);

        if self.format.timestamps {
            row.int(frame.tick)?;
            row.int(frame.elapsed_us)?;
        }
        if self.format.layout.has_accel() {
            for axis in frame.accel.unwrap_or_default() {
                row.float(axis)?;
            }
        }
        for axis in frame.gyro {
            row.float(axis)?;
        }
        row.int(u64::from(frame.touch))?;
        row.float(frame.pot_right)?;
        row.float(frame.pot_left)?;
        if self.format.torque_columns {
            for torque in frame.torque.unwrap_or_default() {
                row.float(torque)?;
            }
        }
        row.end()?;

        self.rows = self.rows.saturating_add(1);
        Ok(())
    }

    /// Write one raw calibration sample: `gyroX gyroY gyroZ potRight potLeft touch`.
    ///
    /// Raw codes are printed as floats in the stream precision; `touch` is
    /// `0` or `1`.
    ///
    /// # Errors
    ///
    /// Propagates sink errors.
    pub fn write_calibration_row(
        &mut self,
        gyro: [i32; 3],
        pot_right: u16,
        pot_left: u16,
        touch: bool,
    ) -> io::Result<()> {
        let mut row = Row::new(&mut self.out, self.format.precision);
        for axis in gyro {
            row.float(f64::from(axis))?;
        }
        row.float(f64::from(pot_right))?;
        row.float(f64::from(pot_left))?;
        row.int(u64::from(touch))?;
        row.end()
    }

    /// Write a free-form progress line.
    ///
    /// # Errors
    ///
    /// Propagates sink errors.
    pub fn write_line(&mut self, line: std::fmt::Arguments<'_>) -> io::Result<()> {
        self.out.write_fmt(line)?;
        self.out.write_all(b"\n")
    }

    /// Flush the sink.
    ///
    /// # Errors
    ///
    /// Propagates sink errors.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Borrow the sink.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Recover the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Tab-joining cursor over one line.
struct Row<'a, W> {
    out: &'a mut W,
    precision: usize,
    first: bool,
}

impl<'a, W: Write> Row<'a, W> {
    fn new(out: &'a mut W, precision: usize) -> Self {
        Self {
            out,
            precision,
            first: true,
        }
    }

    fn separate(&mut self) -> io::Result<()> {
        if !self.first {
            self.out.write_all(b"\t")?;
        }
        self.first = false;
        Ok(())
    }

    fn float(&mut self, value: f64) -> io::Result<()> {
        self.separate()?;
        write!(self.out, "{value:.prec$}", prec = self.precision)
    }

    fn int(&mut self, value: u64) -> io::Result<()> {
        self.separate()?;
        write!(self.out, "{value}")
    }

    fn end(self) -> io::Result<()> {
        self.out.write_all(b"\n")
    }
}
