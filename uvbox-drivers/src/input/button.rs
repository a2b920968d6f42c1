//! Debounced push button
//!
//! Reports one press per physical push. A level change is only accepted
//! once the previous accepted change is at least `debounce_ms` old, so
//! contact bounce on either edge never produces a second press.

use embedded_hal::digital::InputPin;
use uvbox_core::traits::PushButton;

/// Default lockout after an accepted edge
pub const BUTTON_DEBOUNCE_MS: u32 = 20;

/// Edge-detected, debounced push button
pub struct DebouncedButton<P> {
    pin: P,
    /// If true, pressed = pin LOW (pull-up wiring)
    active_low: bool,
    debounce_ms: u32,
    /// Accepted (debounced) state
    pressed: bool,
    /// Time of the last accepted edge
    changed_at: Option<u32>,
}

impl<P: InputPin> DebouncedButton<P> {
    pub fn new(pin: P, active_low: bool, debounce_ms: u32) -> Self {
        Self {
            pin,
            active_low,
            debounce_ms,
            pressed: false,
            changed_at: None,
        }
    }

    /// Button to ground with a pull-up
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true, BUTTON_DEBOUNCE_MS)
    }

    /// Button to VCC with a pull-down
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false, BUTTON_DEBOUNCE_MS)
    }

    /// Debounced state
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn read(&mut self) -> bool {
        // A failed read counts as released
        match self.pin.is_high() {
            Ok(high) => high != self.active_low,
            Err(_) => false,
        }
    }
}

impl<P: InputPin> PushButton for DebouncedButton<P> {
    fn update(&mut self, now_ms: u32) -> bool {
        let level = self.read();
        if level == self.pressed {
            return false;
        }

        let settled = self
            .changed_at
            .map_or(true, |at| now_ms.wrapping_sub(at) >= self.debounce_ms);
        if !settled {
            return false;
        }

        self.pressed = level;
        self.changed_at = Some(now_ms);
        level
    }
}
