//! GPIO power output
//!
//! Switches the UV LED strip through a MOSFET or relay on one GPIO pin.

use embedded_hal::digital::OutputPin;
use uvbox_core::traits::PowerOutput;

/// UV LED power line
///
/// The pin can be active-high (MOSFET gate, the usual wiring) or active-low
/// (relay boards that pull the coil in on a low level).
pub struct GpioPower<P> {
    pin: P,
    /// If true, power ON = pin LOW
    inverted: bool,
    /// Current logical state (true = LEDs on)
    on: bool,
}

impl<P: OutputPin> GpioPower<P> {
    /// Create a new power output, switched off
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut power = Self {
            pin,
            inverted,
            on: false,
        };
        power.set_on(false);
        power
    }

    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Release the pin
    pub fn free(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> PowerOutput for GpioPower<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;

        // GPIO writes cannot fail on the supported targets
        let _ = if on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
