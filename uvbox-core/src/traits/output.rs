//! Power output trait

/// Trait for the UV LED power switch (MOSFET gate)
pub trait PowerOutput {
    /// Switch the UV LEDs on or off
    fn set_on(&mut self, on: bool);

    /// Check if the UV LEDs are currently on
    fn is_on(&self) -> bool;
}
