//! Events that trigger mode transitions

/// Events that can trigger mode transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Front panel
    /// Start push-button pressed
    StartPressed,
    /// Stop push-button pressed
    StopPressed,

    // Encoder
    /// Encoder switch pressed and released
    SwitchPushed,
    /// Encoder turned (only meaningful outside the Set modes)
    EncoderTurned,

    // Countdown
    /// Remaining seconds reached zero
    CountdownExpired,
}
