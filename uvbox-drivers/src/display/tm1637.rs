//! TM1637 Display Driver
//!
//! Driver for 4-digit seven-segment modules built on the TM1637 LED
//! controller. The chip speaks a two-wire protocol that looks like I2C
//! without addresses (LSB first), so it is bit-banged on two GPIOs.
//!
//! DIO must be configured open-drain with a pull-up; the driver releases
//! it during the ACK clock but never samples it.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use uvbox_core::config::DIGIT_COUNT;
use uvbox_core::traits::SegmentDisplay;
use uvbox_core::DigitBuffer;

/// Half clock period
const BIT_DELAY_US: u32 = 100;

/// Highest brightness level
pub const MAX_BRIGHTNESS: u8 = 7;

/// TM1637 commands
mod cmd {
    /// Data command: write to display registers, auto-increment address
    pub const DATA_AUTO_INCREMENT: u8 = 0x40;
    /// Address command, first digit
    pub const ADDRESS_DIGIT0: u8 = 0xC0;
    /// Display control: display on, brightness in the low 3 bits
    pub const DISPLAY_ON: u8 = 0x88;
}

/// Segment patterns for 0-9 (bit 0 = segment A ... bit 6 = segment G)
const DIGIT_SEGMENTS: [u8; 10] = [0x3f, 0x06, 0x5b, 0x4f, 0x66, 0x6d, 0x7d, 0x07, 0x7f, 0x6f];

/// Segment G only
const SEGMENT_MINUS: u8 = 0x40;

/// Encode one display character into segments
///
/// Digits and `-` are drawn; anything else is blank.
pub fn encode(ch: u8) -> u8 {
    match ch {
        b'0'..=b'9' => DIGIT_SEGMENTS[usize::from(ch - b'0')],
        b'-' => SEGMENT_MINUS,
        _ => 0,
    }
}

/// TM1637 driver
pub struct Tm1637<CLK, DIO, D> {
    clk: CLK,
    dio: DIO,
    delay: D,
    brightness: u8,
}

impl<CLK, DIO, D> Tm1637<CLK, DIO, D>
where
    CLK: OutputPin,
    DIO: OutputPin,
    D: DelayNs,
{
    /// Create a new driver with both lines idling high
    pub fn new(clk: CLK, dio: DIO, delay: D) -> Self {
        let mut display = Self {
            clk,
            dio,
            delay,
            brightness: MAX_BRIGHTNESS,
        };
        display.clk_high();
        display.dio_high();
        display
    }

    /// Current brightness level (0-7)
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Write raw segment patterns, leftmost digit first
    pub fn write_segments(&mut self, segments: &[u8; DIGIT_COUNT]) {
        self.command(&[cmd::DATA_AUTO_INCREMENT]);

        let mut frame = [0u8; DIGIT_COUNT + 1];
        frame[0] = cmd::ADDRESS_DIGIT0;
        frame[1..].copy_from_slice(segments);
        self.command(&frame);

        self.command(&[cmd::DISPLAY_ON | self.brightness]);
    }

    /// Release the pins and delay
    pub fn free(self) -> (CLK, DIO, D) {
        (self.clk, self.dio, self.delay)
    }

    fn command(&mut self, bytes: &[u8]) {
        self.start();
        for &byte in bytes {
            self.write_byte(byte);
        }
        self.stop();
    }

    /// DIO falls while CLK is high
    fn start(&mut self) {
        self.dio_high();
        self.clk_high();
        self.bit_delay();
        self.dio_low();
        self.bit_delay();
    }

    /// DIO rises while CLK is high
    fn stop(&mut self) {
        self.clk_low();
        self.bit_delay();
        self.dio_low();
        self.bit_delay();
        self.clk_high();
        self.bit_delay();
        self.dio_high();
        self.bit_delay();
    }

    fn write_byte(&mut self, byte: u8) {
        for bit in 0..8 {
            self.clk_low();
            if byte & (1 << bit) != 0 {
                self.dio_high();
            } else {
                self.dio_low();
            }
            self.bit_delay();
            self.clk_high();
            self.bit_delay();
        }

        // ACK clock: release DIO and let the chip pull it low
        self.clk_low();
        self.dio_high();
        self.bit_delay();
        self.clk_high();
        self.bit_delay();
        self.clk_low();
        self.bit_delay();
    }

    fn bit_delay(&mut self) {
        self.delay.delay_us(BIT_DELAY_US);
    }

    // GPIO writes cannot fail on the supported targets
    fn clk_high(&mut self) {
        let _ = self.clk.set_high();
    }

    fn clk_low(&mut self) {
        let _ = self.clk.set_low();
    }

    fn dio_high(&mut self) {
        let _ = self.dio.set_high();
    }

    fn dio_low(&mut self) {
        let _ = self.dio.set_low();
    }
}

impl<CLK, DIO, D> SegmentDisplay for Tm1637<CLK, DIO, D>
where
    CLK: OutputPin,
    DIO: OutputPin,
    D: DelayNs,
{
    fn show_text(&mut self, text: &DigitBuffer) {
        let mut segments = [0u8; DIGIT_COUNT];
        for (segment, &ch) in segments.iter_mut().zip(text.as_bytes().iter()) {
            *segment = encode(ch);
        }
        self.write_segments(&segments);
    }

    fn show_number(&mut self, value: i16) {
        self.show_text(&DigitBuffer::from_value(value));
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level.min(MAX_BRIGHTNESS);
        self.command(&[cmd::DISPLAY_ON | self.brightness]);

        #[cfg(feature = "defmt")]
        defmt::debug!("TM1637 brightness {}", self.brightness);
    }
}
