//! Session phases and the scheduler's mutable state.

use core::fmt;

use exosense_errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Lifecycle of a sampling session.
///
/// `Idle -> Calibrating -> Streaming`. Streaming is terminal: there is no
/// shutdown phase, power removal is the only exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for the operator-ready signal.
    #[default]
    Idle,
    /// Running offset calibration.
    Calibrating,
    /// Emitting telemetry every tick.
    Streaming,
}

impl SessionPhase {
    /// Phase name.
    pub const fn name(self) -> &'static str {
        match self {
            SessionPhase::Idle => "Idle",
            SessionPhase::Calibrating => "Calibrating",
            SessionPhase::Streaming => "Streaming",
        }
    }

    /// Whether `next` is a legal successor of this phase.
    pub const fn can_transition_to(self, next: SessionPhase) -> bool {
        matches!(
            (self, next),
            (SessionPhase::Idle, SessionPhase::Calibrating)
                | (SessionPhase::Calibrating, SessionPhase::Streaming)
        )
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mutable scheduler state. Only the scheduler writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScheduleState {
    /// Deadline of the current (or last) tick, in clock microseconds.
    pub next_deadline_us: u64,
    /// Ticks completed in the current phase.
    pub tick_count: u64,
    /// Set once calibration has finished.
    pub calibrated: bool,
    /// Current session phase.
    pub phase: SessionPhase,
}

impl ScheduleState {
    /// Move to `next`, enforcing the phase order.
    ///
    /// The tick counter restarts at zero in the new phase. Entering
    /// `Streaming` marks calibration complete.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTransition`] for any other order.
    pub fn transition(&mut self, next: SessionPhase) -> ConfigResult<()> {
        if !self.phase.can_transition_to(next) {
            return Err(ConfigError::InvalidTransition {
                from: self.phase.name(),
                to: next.name(),
            });
        }
        if next == SessionPhase::Streaming {
            self.calibrated = true;
        }
        self.phase = next;
        self.tick_count = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() -> ConfigResult<()> {
        let mut state = ScheduleState::default();
        assert_eq!(state.phase, SessionPhase::Idle);
        state.transition(SessionPhase::Calibrating)?;
        assert!(!state.calibrated);
        state.transition(SessionPhase::Streaming)?;
        assert!(state.calibrated);
        Ok(())
    }

    #[test]
    fn test_cannot_skip_calibration() {
        let mut state = ScheduleState::default();
        assert_eq!(
            state.transition(SessionPhase::Streaming),
            Err(ConfigError::InvalidTransition {
                from: "Idle",
                to: "Streaming"
            })
        );
        assert_eq!(state.phase, SessionPhase::Idle);
    }

    #[test]
    fn test_streaming_is_terminal() -> ConfigResult<()> {
        let mut state = ScheduleState::default();
        state.transition(SessionPhase::Calibrating)?;
        state.transition(SessionPhase::Streaming)?;
        for next in [
            SessionPhase::Idle,
            SessionPhase::Calibrating,
            SessionPhase::Streaming,
        ] {
            assert!(state.transition(next).is_err());
        }
        Ok(())
    }

    #[test]
    fn test_transition_resets_tick_count() -> ConfigResult<()> {
        let mut state = ScheduleState {
            tick_count: 42,
            ..ScheduleState::default()
        };
        state.transition(SessionPhase::Calibrating)?;
        assert_eq!(state.tick_count, 0);
        Ok(())
    }
}
