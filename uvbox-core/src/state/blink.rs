//! Blink phase tracking
//!
//! Each blinking element owns one of these instead of hiding its timer in
//! the tick function.

/// Visible/hidden phase with the time it was entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Blink {
    visible: bool,
    /// `None` means the next poll toggles immediately
    since: Option<u32>,
}

impl Blink {
    /// Phase that toggles on the first poll
    pub const fn new(visible: bool) -> Self {
        Self {
            visible,
            since: None,
        }
    }

    /// Phase entered at `now_ms`
    pub const fn started(visible: bool, now_ms: u32) -> Self {
        Self {
            visible,
            since: Some(now_ms),
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Force a phase and restart its timer
    pub fn restart(&mut self, visible: bool, now_ms: u32) {
        self.visible = visible;
        self.since = Some(now_ms);
    }

    /// Toggle once `interval_ms` has elapsed in the current phase
    ///
    /// Returns true if the phase changed.
    pub fn poll(&mut self, now_ms: u32, interval_ms: u32) -> bool {
        let due = self
            .since
            .map_or(true, |since| now_ms.wrapping_sub(since) >= interval_ms);
        if due {
            self.visible = !self.visible;
            self.since = Some(now_ms);
        }
        due
    }
}
