//! Device constants
//!
//! Countdown range, storage layout, display and tone parameters.

/// Smallest countdown value in seconds
pub const MIN_SECONDS: i16 = 1;

/// Largest countdown value in seconds (four display digits)
pub const MAX_SECONDS: i16 = 9999;

/// Number of digits on the seven-segment display
pub const DIGIT_COUNT: usize = 4;

/// Index of the least significant (units) digit
pub const LAST_DIGIT: usize = DIGIT_COUNT - 1;

/// Byte offset of the persisted countdown value in non-volatile storage
pub const STORAGE_OFFSET: u16 = 0;

/// Display brightness level (0-7, 7 = brightest)
pub const DISPLAY_BRIGHTNESS: u8 = 7;

/// Short beep pitch (Hz)
pub const BEEP_FREQUENCY_HZ: u16 = 5000;

/// Short beep length (ms)
pub const BEEP_DURATION_MS: u32 = 100;

/// Finished tone pitch (Hz)
pub const FINISHED_TONE_FREQUENCY_HZ: u16 = 3500;

/// Finished tone pulse length (ms)
pub const FINISHED_TONE_DURATION_MS: u32 = 500;

/// Finished tone pulse count
pub const FINISHED_TONE_PULSES: u8 = 2;

/// Silence between finished tone pulses (ms)
pub const FINISHED_TONE_GAP_MS: u32 = 500;
