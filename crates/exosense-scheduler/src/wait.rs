//! How the scheduler blocks until a deadline.

use exosense_hal::MonotonicClock;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Blocking strategy between the end of a tick's work and its deadline.
///
/// `BusySpin` keeps latency deterministic and never yields. `SleepThenSpin`
/// lets the OS sleep for the bulk of the wait and spins only for the final
/// `spin_margin_us`; it frees the core on hosted targets at the cost of
/// scheduler-dependent wake-up jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case", deny_unknown_fields)]
pub enum WaitStrategy {
    /// Spin on the clock until the deadline.
    #[default]
    BusySpin,
    /// OS sleep until `spin_margin_us` before the deadline, then spin.
    SleepThenSpin {
        /// Final stretch, in microseconds, covered by spinning.
        spin_margin_us: u64,
    },
}

impl WaitStrategy {
    /// Block until `clock` reads at least `deadline_us`.
    ///
    /// Returns immediately when the deadline has already passed.
    #[inline]
    pub fn wait_until<C: MonotonicClock>(&self, clock: &C, deadline_us: u64) {
        if let WaitStrategy::SleepThenSpin { spin_margin_us } = *self {
            let now = clock.elapsed_us();
            let remaining = deadline_us.saturating_sub(now);
            if remaining > spin_margin_us {
                std::thread::sleep(Duration::from_micros(remaining - spin_margin_us));
            }
        }

        while clock.elapsed_us() < deadline_us {
            std::hint::spin_loop();
        }
    }
}
