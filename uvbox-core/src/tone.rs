//! Non-blocking tone sequencer
//!
//! Plays a request of N pulses separated by gaps by switching the tone
//! generator on and off from the main loop. Nothing here waits; the
//! sequencer only compares elapsed time against its phase start.

use crate::config::{
    BEEP_DURATION_MS, BEEP_FREQUENCY_HZ, FINISHED_TONE_DURATION_MS, FINISHED_TONE_FREQUENCY_HZ,
    FINISHED_TONE_GAP_MS, FINISHED_TONE_PULSES,
};
use crate::traits::ToneGenerator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One beep pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ToneRequest {
    /// Tone pitch in Hz
    pub frequency_hz: u16,
    /// Length of each pulse (ms)
    pub pulse_ms: u32,
    /// Number of pulses
    pub repeats: u8,
    /// Silence between pulses (ms); 0 means "same as `pulse_ms`"
    pub gap_ms: u32,
}

impl ToneRequest {
    /// Single pulse with the default gap
    pub const fn new(frequency_hz: u16, pulse_ms: u32) -> Self {
        Self {
            frequency_hz,
            pulse_ms,
            repeats: 1,
            gap_ms: 0,
        }
    }

    /// Same request with a different pulse count
    pub const fn repeated(mut self, repeats: u8) -> Self {
        self.repeats = repeats;
        self
    }

    /// Same request with an explicit gap
    pub const fn with_gap(mut self, gap_ms: u32) -> Self {
        self.gap_ms = gap_ms;
        self
    }

    /// Short single beep (key click)
    pub const fn beep() -> Self {
        Self::new(BEEP_FREQUENCY_HZ, BEEP_DURATION_MS)
    }

    /// Two short beeps
    pub const fn double_beep() -> Self {
        Self::beep().repeated(2)
    }

    /// Two long, lower beeps signalling the end of an exposure
    pub const fn finished() -> Self {
        Self::new(FINISHED_TONE_FREQUENCY_HZ, FINISHED_TONE_DURATION_MS)
            .repeated(FINISHED_TONE_PULSES)
            .with_gap(FINISHED_TONE_GAP_MS)
    }

    /// Gap actually used between pulses
    pub const fn effective_gap_ms(&self) -> u32 {
        if self.gap_ms == 0 {
            self.pulse_ms
        } else {
            self.gap_ms
        }
    }
}

/// Tone sequencer state
///
/// At most one request is active; arming a new one replaces it.
#[derive(Debug, Clone)]
pub struct ToneSequencer {
    frequency_hz: u16,
    pulse_ms: u32,
    gap_ms: u32,
    /// Pulses still to play; 0 = dormant
    remaining: u8,
    /// Generator currently sounding
    pulse_active: bool,
    /// Start of the current pulse or gap
    phase_start_ms: u32,
}

impl Default for ToneSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl ToneSequencer {
    /// Create a dormant sequencer
    pub const fn new() -> Self {
        Self {
            frequency_hz: 0,
            pulse_ms: 0,
            gap_ms: 0,
            remaining: 0,
            pulse_active: false,
            phase_start_ms: 0,
        }
    }

    /// Arm a request
    ///
    /// The gap is back-dated so the first pulse starts on the next
    /// [`service`](Self::service) call.
    pub fn play(&mut self, request: ToneRequest, now_ms: u32) {
        self.frequency_hz = request.frequency_hz;
        self.pulse_ms = request.pulse_ms;
        self.gap_ms = request.effective_gap_ms();
        self.remaining = request.repeats;
        self.pulse_active = false;
        self.phase_start_ms = now_ms.wrapping_sub(self.gap_ms);
    }

    /// Advance the pulse/gap cycle
    ///
    /// Call once per loop iteration regardless of mode.
    pub fn service<T: ToneGenerator>(&mut self, tone: &mut T, now_ms: u32) {
        if self.remaining == 0 {
            return;
        }

        let elapsed = now_ms.wrapping_sub(self.phase_start_ms);

        if !self.pulse_active {
            if elapsed >= self.gap_ms {
                tone.start(self.frequency_hz);
                self.pulse_active = true;
                self.phase_start_ms = now_ms;
            }
        } else if elapsed >= self.pulse_ms {
            tone.stop();
            self.pulse_active = false;
            self.phase_start_ms = now_ms;
            self.remaining -= 1;
        }
    }

    /// Silence immediately and drop the rest of the request
    pub fn stop<T: ToneGenerator>(&mut self, tone: &mut T) {
        self.remaining = 0;
        self.pulse_active = false;
        tone.stop();
    }

    /// Check if no request is in progress
    pub fn is_idle(&self) -> bool {
        self.remaining == 0
    }
}
