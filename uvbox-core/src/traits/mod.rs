//! Hardware abstraction traits
//!
//! These traits define the interface between the timer engine and the
//! board's drivers.

pub mod display;
pub mod input;
pub mod output;
pub mod storage;
pub mod tone;

pub use display::SegmentDisplay;
pub use input::{EncoderStep, PushButton, RotaryEncoder, SwitchInput};
pub use output::PowerOutput;
pub use storage::{NvStorage, StorageError};
pub use tone::ToneGenerator;
