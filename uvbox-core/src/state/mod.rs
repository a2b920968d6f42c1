//! Mode state machine
//!
//! Defines which mode follows which event. Side effects of a transition
//! (UV output, tones, display) are applied by the engine.

pub mod blink;
pub mod events;
pub mod machine;

pub use blink::Blink;
pub use events::Event;
pub use machine::Mode;
