//! Digit editor
//!
//! Turns encoder detents into changes of the countdown value. The user
//! edits one decimal position at a time; a detent adds or subtracts that
//! position's place value, carrying into the more significant digits.
//!
//! Two rules keep the value in range:
//! - a result below [`MIN_SECONDS`] is clamped up to it
//! - a result above [`MAX_SECONDS`] is rejected and the old value kept
//!
//! Turning down on a leading zero does not borrow. It moves the edit
//! position one digit to the right instead, so a user who selected a
//! digit deeper than the value reaches can back out of it.

use crate::config::{LAST_DIGIT, MAX_SECONDS, MIN_SECONDS};
use crate::digits::DigitBuffer;

/// Result of applying one encoder step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditResult {
    /// New countdown value (may equal the old one after clamping or rejection)
    Value(i16),
    /// Move the edit position one digit less significant; value unchanged
    MoveDeeper,
    /// Nothing to do
    NoChange,
}

/// Place value of a digit position (1000, 100, 10, 1)
pub fn place_value(position: usize) -> i32 {
    let exponent = LAST_DIGIT.saturating_sub(position) as u32;
    10i32.pow(exponent)
}

/// Check if every digit before `position` is zero
pub fn has_leading_zeros(rendered: &DigitBuffer, position: usize) -> bool {
    rendered.digits().iter().take(position).all(|digit| *digit == 0)
}

/// Apply `steps` detents at `position` to `value`
///
/// `rendered` is the Set-mode rendering of `value` with the edited digit
/// visible; it is where the leading-zero check reads its digits from.
pub fn apply_step(value: i16, position: usize, rendered: &DigitBuffer, steps: i16) -> EditResult {
    let digits = rendered.digits();
    let digit = digits.get(position).copied().unwrap_or(0);

    if steps <= 0 && digit == 0 && has_leading_zeros(rendered, position) {
        if steps != 0 && position < LAST_DIGIT {
            return EditResult::MoveDeeper;
        }
        return EditResult::NoChange;
    }

    let delta = i32::from(steps).saturating_mul(place_value(position));
    let candidate = i32::from(value).saturating_add(delta);

    if candidate < i32::from(MIN_SECONDS) {
        EditResult::Value(MIN_SECONDS)
    } else if candidate > i32::from(MAX_SECONDS) {
        EditResult::Value(value)
    } else {
        EditResult::Value(i16::try_from(candidate).unwrap_or(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(value: i16, position: usize, steps: i16) -> EditResult {
        apply_step(value, position, &DigitBuffer::for_edit(value, position), steps)
    }

    #[test]
    fn test_place_values() {
        assert_eq!(place_value(0), 1000);
        assert_eq!(place_value(1), 100);
        assert_eq!(place_value(2), 10);
        assert_eq!(place_value(3), 1);
    }

    #[test]
    fn test_increment_each_position() {
        assert_eq!(edit(120, 3, 1), EditResult::Value(121));
        assert_eq!(edit(120, 2, 2), EditResult::Value(140));
        assert_eq!(edit(120, 1, 1), EditResult::Value(220));
        assert_eq!(edit(120, 0, 3), EditResult::Value(3120));
    }

    #[test]
    fn test_carry_into_next_digit() {
        assert_eq!(edit(95, 3, 7), EditResult::Value(102));
        assert_eq!(edit(990, 2, 1), EditResult::Value(1000));
    }

    #[test]
    fn test_borrow_from_nonzero_leading_digit() {
        // Tens digit is zero but the hundreds digit is not
        assert_eq!(edit(305, 2, -1), EditResult::Value(295));
    }

    #[test]
    fn test_overflow_is_rejected() {
        assert_eq!(edit(9999, 3, 1), EditResult::Value(9999));
        assert_eq!(edit(9500, 1, 6), EditResult::Value(9500));
        assert_eq!(edit(9000, 0, 1), EditResult::Value(9000));
    }

    #[test]
    fn test_underflow_clamps_to_minimum() {
        assert_eq!(edit(1, 3, -1), EditResult::Value(1));
        assert_eq!(edit(30, 3, -50), EditResult::Value(1));
        assert_eq!(edit(1500, 0, -1), EditResult::Value(500));
        assert_eq!(edit(1000, 0, -1), EditResult::Value(1));
    }

    #[test]
    fn test_leading_zero_backout() {
        // 42 edited at the thousands digit renders "0042"
        assert_eq!(edit(42, 0, -1), EditResult::MoveDeeper);
        assert_eq!(edit(42, 1, -3), EditResult::MoveDeeper);
        // Tens digit is 4, so this is a real decrement
        assert_eq!(edit(42, 2, -1), EditResult::Value(32));
    }

    #[test]
    fn test_leading_zero_zero_step_is_noop() {
        assert_eq!(edit(42, 0, 0), EditResult::NoChange);
        assert_eq!(edit(42, 1, 0), EditResult::NoChange);
    }

    #[test]
    fn test_zero_step_elsewhere_keeps_value() {
        assert_eq!(edit(42, 3, 0), EditResult::Value(42));
    }

    #[test]
    fn test_backout_stops_at_units() {
        // Units digit 0 with all leading zeros cannot occur for valid
        // values, but a rendered "0000" must still not move past units
        let rendered = DigitBuffer::for_edit(0, 3);
        assert_eq!(apply_step(0, 3, &rendered, -1), EditResult::NoChange);
    }

    #[test]
    fn test_increment_on_leading_zero_is_allowed() {
        assert_eq!(edit(42, 0, 1), EditResult::Value(1042));
    }

    #[test]
    fn test_large_steps_do_not_wrap() {
        assert_eq!(edit(5000, 0, i16::MAX), EditResult::Value(5000));
        assert_eq!(edit(5000, 0, i16::MIN), EditResult::Value(1));
    }
}
