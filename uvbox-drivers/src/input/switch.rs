//! Encoder push switch
//!
//! Raw level read only. Press/release timing (decoupling window, hold
//! tracking) lives in the core input poller.

use embedded_hal::digital::InputPin;
use uvbox_core::traits::SwitchInput;

/// Active-low switch with the MCU pull-up enabled
pub struct GpioSwitch<P> {
    pin: P,
}

impl<P: InputPin> GpioSwitch<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: InputPin> SwitchInput for GpioSwitch<P> {
    fn is_pressed(&mut self) -> bool {
        // A failed read counts as released
        self.pin.is_low().unwrap_or(false)
    }
}
