//! Seven-segment display trait

use crate::digits::DigitBuffer;

/// Trait for the four-digit seven-segment display
///
/// Rendering is fire-and-forget; implementations swallow bus errors.
pub trait SegmentDisplay {
    /// Show four display characters (digits, blank or `-`)
    fn show_text(&mut self, text: &DigitBuffer);

    /// Show a number right-aligned without leading zeros
    fn show_number(&mut self, value: i16);

    /// Set brightness (0-7), applied on the next write
    fn set_brightness(&mut self, level: u8);
}
