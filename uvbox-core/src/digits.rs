//! Four-character display buffer
//!
//! What the seven-segment display shows, as ASCII: `'0'..='9'`, blank
//! (`' '`) or `'-'`. Buffers compare by value so the engine can skip
//! redundant display writes.

use core::fmt;

use crate::config::{DIGIT_COUNT, MAX_SECONDS};

/// Blank display position
pub const BLANK: u8 = b' ';

/// Dash display position
pub const DASH: u8 = b'-';

/// Fixed-width display text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitBuffer([u8; DIGIT_COUNT]);

impl DigitBuffer {
    /// All positions blank
    pub const fn blank() -> Self {
        Self([BLANK; DIGIT_COUNT])
    }

    /// `----`
    pub const fn dashes() -> Self {
        Self([DASH; DIGIT_COUNT])
    }

    /// Right-aligned decimal with blank leading positions
    ///
    /// Negative values get a leading `-`; values that do not fit are
    /// clamped to `-999..=9999`.
    pub fn from_value(value: i16) -> Self {
        let mut buffer = [BLANK; DIGIT_COUNT];
        let negative = value < 0;
        let mut rest = value.clamp(-999, MAX_SECONDS).unsigned_abs();

        let mut position = DIGIT_COUNT;
        while position > 0 {
            position -= 1;
            buffer[position] = b'0' + (rest % 10) as u8;
            rest /= 10;
            if rest == 0 {
                break;
            }
        }
        if negative && position > 0 {
            buffer[position - 1] = DASH;
        }

        Self(buffer)
    }

    /// Set-mode rendering of a countdown value
    ///
    /// Blank leading positions at or after `position` (the digit being
    /// edited and everything less significant) become `'0'`, so the
    /// edited digit is always visible; more significant blanks stay
    /// blank. `5` edited at the hundreds digit renders as `" 005"`.
    pub fn for_edit(value: i16, position: usize) -> Self {
        let mut buffer = Self::from_value(value);
        buffer.zero_pad_from(position);
        buffer
    }

    /// Replace blanks with `'0'` from `position` to the units digit
    pub fn zero_pad_from(&mut self, position: usize) {
        for byte in self.0.iter_mut().skip(position) {
            if *byte == BLANK {
                *byte = b'0';
            }
        }
    }

    /// Blank one position (blink off phase)
    pub fn blank_at(&mut self, position: usize) {
        if let Some(byte) = self.0.get_mut(position) {
            *byte = BLANK;
        }
    }

    /// Numeric value of each position; blank and `-` count as zero
    pub fn digits(&self) -> [u8; DIGIT_COUNT] {
        let mut digits = [0; DIGIT_COUNT];
        for (digit, byte) in digits.iter_mut().zip(self.0.iter()) {
            if byte.is_ascii_digit() {
                *digit = byte - b'0';
            }
        }
        digits
    }

    /// Decimal value composed from [`digits`](Self::digits)
    pub fn value(&self) -> i16 {
        self.digits()
            .iter()
            .fold(0i16, |acc, digit| acc * 10 + i16::from(*digit))
    }

    /// Raw characters, most significant first
    pub fn as_bytes(&self) -> &[u8; DIGIT_COUNT] {
        &self.0
    }
}

impl Default for DigitBuffer {
    fn default() -> Self {
        Self::blank()
    }
}

impl fmt::Display for DigitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{}", char::from(byte))?;
        }
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DigitBuffer {
    fn format(&self, f: defmt::Formatter) {
        let [a, b, c, d] = self.0;
        defmt::write!(
            f,
            "{=char}{=char}{=char}{=char}",
            char::from(a),
            char::from(b),
            char::from(c),
            char::from(d)
        );
    }
}
