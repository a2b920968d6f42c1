//! Input polling
//!
//! Samples the encoder, the two push-buttons and the encoder switch once
//! per loop iteration and queues what happened as [`InputEvent`]s for
//! the engine.
//!
//! The push-buttons debounce themselves. The encoder switch is read raw
//! and handled here:
//! - presses within [`SWITCH_DECOUPLING_MS`] of the last release are ignored
//! - a press is reported once, when the switch is released
//! - holding it for [`SWITCH_LONG_HOLD_MS`] reports a long hold, once per press
//!
//! Holding the switch never blocks the loop.

use heapless::Deque;

use crate::config::{SWITCH_DECOUPLING_MS, SWITCH_LONG_HOLD_MS};
use crate::traits::{PushButton, RotaryEncoder, SwitchInput};

/// Maximum events queued between two engine ticks
pub const EVENT_QUEUE_LEN: usize = 8;

/// Input events delivered to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Start button pressed
    StartPressed,
    /// Stop button pressed
    StopPressed,
    /// Encoder turned; negative = left
    EncoderStep(i16),
    /// Encoder switch pressed and released
    SwitchPushed,
    /// Encoder switch held past the long-hold interval
    SwitchLongHold,
}

/// Encoder switch tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SwitchState {
    /// Not pressed; holds the time of the previous release
    Released { since: Option<u32> },
    /// Pressed since the given time
    Held { since: u32, long_hold_reported: bool },
}

/// Polls the input drivers and queues events
pub struct InputPoller<E, B, S> {
    encoder: E,
    start: B,
    stop: B,
    switch: S,
    switch_state: SwitchState,
    events: Deque<InputEvent, EVENT_QUEUE_LEN>,
}

impl<E, B, S> InputPoller<E, B, S>
where
    E: RotaryEncoder,
    B: PushButton,
    S: SwitchInput,
{
    /// Create a poller over the board's input drivers
    pub fn new(encoder: E, start: B, stop: B, switch: S) -> Self {
        Self {
            encoder,
            start,
            stop,
            switch,
            switch_state: SwitchState::Released { since: None },
            events: Deque::new(),
        }
    }

    /// Sample every input once
    pub fn poll(&mut self, now_ms: u32) {
        if let Some(step) = self.encoder.update() {
            let delta = step.delta();
            if delta != 0 {
                self.push(InputEvent::EncoderStep(delta));
            }
        }

        if self.start.update(now_ms) {
            self.push(InputEvent::StartPressed);
        }
        if self.stop.update(now_ms) {
            self.push(InputEvent::StopPressed);
        }

        self.poll_switch(now_ms);
    }

    /// Take the oldest queued event
    pub fn next_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }

    fn poll_switch(&mut self, now_ms: u32) {
        match self.switch_state {
            SwitchState::Released { since } => {
                let decoupling = since
                    .is_some_and(|released| now_ms.wrapping_sub(released) < SWITCH_DECOUPLING_MS);
                if !decoupling && self.switch.is_pressed() {
                    self.switch_state = SwitchState::Held {
                        since: now_ms,
                        long_hold_reported: false,
                    };
                }
            }
            SwitchState::Held {
                since,
                long_hold_reported,
            } => {
                if self.switch.is_pressed() {
                    if !long_hold_reported && now_ms.wrapping_sub(since) >= SWITCH_LONG_HOLD_MS {
                        self.push(InputEvent::SwitchLongHold);
                        self.switch_state = SwitchState::Held {
                            since,
                            long_hold_reported: true,
                        };
                    }
                } else {
                    self.push(InputEvent::SwitchPushed);
                    self.switch_state = SwitchState::Released {
                        since: Some(now_ms),
                    };
                }
            }
        }
    }

    fn push(&mut self, event: InputEvent) {
        if self.events.push_back(event).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Input queue full, dropping {}", event);
        }
    }
}
