//! Timing constants
//!
//! Every interval is in milliseconds and is compared against a wrapping
//! `u32` delta (`now.wrapping_sub(reference) >= interval`), so the
//! millisecond counter may roll over freely.

/// Set-mode blink half-period for the digit being edited
pub const SET_BLINK_INTERVAL_MS: u32 = 499;

/// One countdown second
pub const COUNTDOWN_TICK_MS: u32 = 1000;

// Paused mode shows the time briefly and stays dark longer. The first
// firmware had these two swapped (visible 1199 ms, dark 499 ms); keep this order.

/// Paused mode: how long the remaining time stays visible
pub const PAUSED_SHOWN_MS: u32 = 500;

/// Paused mode: how long the display stays blank
pub const PAUSED_HIDDEN_MS: u32 = 1200;

/// Finished mode: `----` blink half-period
pub const FINISHED_BLINK_MS: u32 = 500;

/// Finished mode: the finished tone is re-issued this often
pub const FINISHED_BEEP_INTERVAL_MS: u32 = 7000;

/// Encoder switch presses this soon after a release are ignored
pub const SWITCH_DECOUPLING_MS: u32 = 50;

/// Hold time after which the encoder switch reports a long hold
pub const SWITCH_LONG_HOLD_MS: u32 = 2000;

/// Quiet time after the last edit before the value is persisted
pub const PERSIST_IDLE_MS: u32 = 5 * 1000;
