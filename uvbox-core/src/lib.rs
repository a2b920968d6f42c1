//! Board-agnostic control logic for the UV exposure box timer
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (display, encoder, buttons, tone, storage)
//! - Mode state machine and the engine that drives it
//! - Digit editor for setting the countdown with the encoder
//! - Non-blocking tone sequencer
//! - Input polling with encoder switch debounce
//! - Deferred persistence of the countdown value
//!
//! Everything is single-threaded and polled: the firmware's main loop
//! calls [`Engine::tick`] with the current millisecond counter.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod digits;
pub mod editor;
pub mod engine;
pub mod input;
pub mod persist;
pub mod state;
pub mod tone;
pub mod traits;

pub use digits::DigitBuffer;
pub use engine::Engine;
pub use input::{InputEvent, InputPoller};
pub use state::{Event, Mode};
pub use tone::{ToneRequest, ToneSequencer};
