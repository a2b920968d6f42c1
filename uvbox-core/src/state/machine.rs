//! Mode definition
//!
//! The device is always in exactly one mode. The first four variants are
//! the digit editing modes and double as digit position indices
//! (thousands to units).

use super::events::Event;
use crate::config::LAST_DIGIT;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Mode {
    /// Editing the thousands digit
    SetDigit1 = 0,
    /// Editing the hundreds digit
    SetDigit2 = 1,
    /// Editing the tens digit
    SetDigit3 = 2,
    /// Editing the units digit (rest state)
    #[default]
    SetDigit4 = 3,
    /// Counting down, UV output on
    Running = 4,
    /// Countdown suspended, UV output off
    Paused = 5,
    /// Countdown expired, waiting for acknowledgement
    Finished = 6,
}

impl Mode {
    /// Check if this is one of the digit editing modes
    pub fn is_set(&self) -> bool {
        matches!(
            self,
            Mode::SetDigit1 | Mode::SetDigit2 | Mode::SetDigit3 | Mode::SetDigit4
        )
    }

    /// Check if this state drives the UV output
    pub fn uv_allowed(&self) -> bool {
        matches!(self, Mode::Running)
    }

    /// Digit position edited in this mode (0 = thousands, 3 = units)
    pub fn digit_position(&self) -> Option<usize> {
        if self.is_set() {
            Some(*self as usize)
        } else {
            None
        }
    }

    /// Set mode editing the given digit position
    pub fn from_digit_position(position: usize) -> Option<Self> {
        match position {
            0 => Some(Mode::SetDigit1),
            1 => Some(Mode::SetDigit2),
            2 => Some(Mode::SetDigit3),
            3 => Some(Mode::SetDigit4),
            _ => None,
        }
    }

    /// Next Set mode in switch order: units, tens, hundreds, thousands, units
    pub fn next_set_mode(self) -> Self {
        match self {
            Mode::SetDigit4 => Mode::SetDigit3,
            Mode::SetDigit3 => Mode::SetDigit2,
            Mode::SetDigit2 => Mode::SetDigit1,
            Mode::SetDigit1 => Mode::SetDigit4,
            other => other,
        }
    }

    /// Set mode one digit less significant, saturating at the units digit
    pub fn deeper_digit(self) -> Self {
        match self.digit_position() {
            Some(position) if position < LAST_DIGIT => {
                Mode::from_digit_position(position + 1).unwrap_or(self)
            }
            _ => self,
        }
    }

    /// Process an event and return the next mode
    ///
    /// Transitions fire only from the listed source modes; anything else
    /// leaves the mode unchanged.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Mode::*;

        match (self, event) {
            // Start button
            (m, StartPressed) if m.is_set() => Running,
            (Running, StartPressed) => Paused,
            (Paused, StartPressed) => Running,
            (Finished, StartPressed) => SetDigit4,

            // Stop button
            (Running, StopPressed) => Finished,
            (Paused | Finished, StopPressed) => SetDigit4,

            // Encoder switch
            (m, SwitchPushed) if m.is_set() => m.next_set_mode(),
            (Running, SwitchPushed) => Paused,
            (Paused, SwitchPushed) => Running,
            (Finished, SwitchPushed) => SetDigit4,

            // Turning the knob acknowledges a finished run
            (Finished, EncoderTurned) => SetDigit4,

            (Running, CountdownExpired) => Finished,

            // Default: stay in current mode
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SET_MODES: [Mode; 4] = [
        Mode::SetDigit1,
        Mode::SetDigit2,
        Mode::SetDigit3,
        Mode::SetDigit4,
    ];

    #[test]
    fn test_default_is_units_digit() {
        assert_eq!(Mode::default(), Mode::SetDigit4);
    }

    #[test]
    fn test_start_from_any_set_mode() {
        for mode in SET_MODES {
            assert_eq!(mode.transition(Event::StartPressed), Mode::Running);
        }
    }

    #[test]
    fn test_start_toggles_pause() {
        let paused = Mode::Running.transition(Event::StartPressed);
        assert_eq!(paused, Mode::Paused);
        assert_eq!(paused.transition(Event::StartPressed), Mode::Running);
    }

    #[test]
    fn test_stop_flow() {
        assert_eq!(Mode::Running.transition(Event::StopPressed), Mode::Finished);
        assert_eq!(Mode::Paused.transition(Event::StopPressed), Mode::SetDigit4);
        assert_eq!(Mode::Finished.transition(Event::StopPressed), Mode::SetDigit4);
    }

    #[test]
    fn test_stop_ignored_while_editing() {
        for mode in SET_MODES {
            assert_eq!(mode.transition(Event::StopPressed), mode);
        }
    }

    #[test]
    fn test_switch_cycles_set_modes() {
        let mut mode = Mode::SetDigit4;
        let mut seen = [mode; 4];
        for slot in seen.iter_mut().skip(1) {
            mode = mode.transition(Event::SwitchPushed);
            *slot = mode;
        }
        assert_eq!(
            seen,
            [Mode::SetDigit4, Mode::SetDigit3, Mode::SetDigit2, Mode::SetDigit1]
        );
        assert_eq!(mode.transition(Event::SwitchPushed), Mode::SetDigit4);
    }

    #[test]
    fn test_switch_mirrors_start_outside_set_modes() {
        assert_eq!(Mode::Running.transition(Event::SwitchPushed), Mode::Paused);
        assert_eq!(Mode::Paused.transition(Event::SwitchPushed), Mode::Running);
        assert_eq!(Mode::Finished.transition(Event::SwitchPushed), Mode::SetDigit4);
    }

    #[test]
    fn test_expiry_only_while_running() {
        assert_eq!(
            Mode::Running.transition(Event::CountdownExpired),
            Mode::Finished
        );
        assert_eq!(Mode::Paused.transition(Event::CountdownExpired), Mode::Paused);
        assert_eq!(
            Mode::SetDigit2.transition(Event::CountdownExpired),
            Mode::SetDigit2
        );
    }

    #[test]
    fn test_encoder_only_leaves_finished() {
        assert_eq!(Mode::Finished.transition(Event::EncoderTurned), Mode::SetDigit4);
        assert_eq!(Mode::Running.transition(Event::EncoderTurned), Mode::Running);
        assert_eq!(Mode::Paused.transition(Event::EncoderTurned), Mode::Paused);
    }

    #[test]
    fn test_digit_positions() {
        for (position, mode) in SET_MODES.iter().enumerate() {
            assert_eq!(mode.digit_position(), Some(position));
            assert_eq!(Mode::from_digit_position(position), Some(*mode));
        }
        assert_eq!(Mode::Running.digit_position(), None);
        assert_eq!(Mode::from_digit_position(4), None);
    }

    #[test]
    fn test_deeper_digit_saturates() {
        assert_eq!(Mode::SetDigit1.deeper_digit(), Mode::SetDigit2);
        assert_eq!(Mode::SetDigit3.deeper_digit(), Mode::SetDigit4);
        assert_eq!(Mode::SetDigit4.deeper_digit(), Mode::SetDigit4);
        assert_eq!(Mode::Paused.deeper_digit(), Mode::Paused);
    }

    #[test]
    fn test_uv_allowed() {
        assert!(Mode::Running.uv_allowed());
        assert!(!Mode::Paused.uv_allowed());
        assert!(!Mode::Finished.uv_allowed());
        assert!(!Mode::SetDigit4.uv_allowed());
    }
}
