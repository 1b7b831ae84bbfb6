//! Monotonic time sources.

use std::time::Instant;

/// Monotonic elapsed-time source with microsecond resolution.
///
/// The value never decreases. The origin is arbitrary (typically the moment
/// the clock was created).
pub trait MonotonicClock {
    /// Microseconds elapsed since the clock origin.
    fn elapsed_us(&self) -> u64;
}

impl<C: MonotonicClock + ?Sized> MonotonicClock for &C {
    #[inline]
    fn elapsed_us(&self) -> u64 {
        (**self).elapsed_us()
    }
}

/// Clock backed by [`std::time::Instant`].
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    origin: Instant,
}

impl StdClock {
    /// Start a new clock at zero.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for StdClock {
    #[inline]
    fn elapsed_us(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_micros()).unwrap_or(u64::MAX)
    }
}
