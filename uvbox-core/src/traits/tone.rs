//! Tone generator trait

/// Trait for the piezo/speaker tone output
pub trait ToneGenerator {
    /// Start a continuous tone at the given frequency
    fn start(&mut self, frequency_hz: u16);

    /// Silence the output
    fn stop(&mut self);
}
