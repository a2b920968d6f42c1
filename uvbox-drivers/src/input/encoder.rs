//! Rotary encoder handler
//!
//! Decodes quadrature encoder signals into detent steps.
//! Uses a state machine for reliable decoding with noise rejection.

use embedded_hal::digital::InputPin;
use uvbox_core::traits::{EncoderStep, RotaryEncoder};

/// Encoder state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    CwStep1,
    CwStep2,
    CcwStep1,
    CcwStep2,
}

/// Rotation direction of one completed detent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Cw,
    Ccw,
}

/// Quadrature encoder on two pulled-up input pins
///
/// Clockwise rotation is reported as [`EncoderStep::Right`].
pub struct QuadratureEncoder<A, B> {
    a: A,
    b: B,
    state: State,
    last_a: bool,
    last_b: bool,
}

impl<A: InputPin, B: InputPin> QuadratureEncoder<A, B> {
    /// Create a new encoder handler
    pub fn new(mut a: A, mut b: B) -> Self {
        let last_a = a.is_high().unwrap_or(true);
        let last_b = b.is_high().unwrap_or(true);

        Self {
            a,
            b,
            state: State::Idle,
            last_a,
            last_b,
        }
    }

    /// Decode encoder state using state machine
    ///
    /// Quadrature encoding:
    /// CW:  A leads B (A changes first when rotating clockwise)
    /// CCW: B leads A (B changes first when rotating counter-clockwise)
    ///
    /// CW:  Idle (1,1) -> CwStep1 (0,1) -> CwStep2 (0,0) -> step -> Idle
    /// CCW: Idle (1,1) -> CcwStep1 (1,0) -> CcwStep2 (0,0) -> step -> Idle
    fn decode(&mut self, a: bool, b: bool) -> Option<Direction> {
        match self.state {
            State::Idle => {
                if !a && b {
                    self.state = State::CwStep1;
                } else if a && !b {
                    self.state = State::CcwStep1;
                }
                None
            }
            State::CwStep1 => {
                if !a && !b {
                    self.state = State::CwStep2;
                } else if a && b {
                    // Bounce back to rest
                    self.state = State::Idle;
                }
                None
            }
            State::CwStep2 => {
                if a || b {
                    self.state = State::Idle;
                    return Some(Direction::Cw);
                }
                None
            }
            State::CcwStep1 => {
                if !a && !b {
                    self.state = State::CcwStep2;
                } else if a && b {
                    self.state = State::Idle;
                }
                None
            }
            State::CcwStep2 => {
                if a || b {
                    self.state = State::Idle;
                    return Some(Direction::Ccw);
                }
                None
            }
        }
    }
}

impl<A: InputPin, B: InputPin> RotaryEncoder for QuadratureEncoder<A, B> {
    /// Sample both pins; call every 1-5 ms
    fn update(&mut self) -> Option<EncoderStep> {
        let (Ok(a), Ok(b)) = (self.a.is_high(), self.b.is_high()) else {
            return None;
        };

        if a == self.last_a && b == self.last_b {
            return None;
        }

        let direction = self.decode(a, b);
        self.last_a = a;
        self.last_b = b;

        match direction? {
            Direction::Cw => Some(EncoderStep::Right(1)),
            Direction::Ccw => Some(EncoderStep::Left(1)),
        }
    }
}
