//! Input device traits
//!
//! Drivers are polled once per loop iteration and report what happened
//! since the previous poll. There are no callbacks.

/// Encoder movement since the last poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncoderStep {
    /// Counter-clockwise by this many detents
    Left(u8),
    /// Clockwise by this many detents
    Right(u8),
}

impl EncoderStep {
    /// Signed step count (left is negative)
    pub fn delta(&self) -> i16 {
        match *self {
            EncoderStep::Left(steps) => -i16::from(steps),
            EncoderStep::Right(steps) => i16::from(steps),
        }
    }
}

/// Trait for a rotary encoder
pub trait RotaryEncoder {
    /// Sample the encoder and return accumulated movement, if any
    fn update(&mut self) -> Option<EncoderStep>;
}

/// Trait for a debounced push-button
pub trait PushButton {
    /// Sample the button
    ///
    /// Returns true exactly once per press, on the debounced press edge.
    fn update(&mut self, now_ms: u32) -> bool;
}

/// Trait for a raw switch level (the encoder's push switch)
pub trait SwitchInput {
    /// Check if the switch is currently held down
    fn is_pressed(&mut self) -> bool;
}
