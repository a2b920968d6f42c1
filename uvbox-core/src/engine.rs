//! Timer engine
//!
//! Owns the mode, the countdown value and every timer, and drives the
//! display, tone generator, UV output and storage. The main loop calls
//! [`Engine::tick`] as often as it can:
//!
//! 1. queued input events are dispatched
//! 2. the current mode's periodic behavior runs
//! 3. the tone sequencer advances (in every mode)
//!
//! Mode changes go through [`Mode::transition`]; this module only applies
//! their side effects.

use crate::config::{
    COUNTDOWN_TICK_MS, DISPLAY_BRIGHTNESS, FINISHED_BEEP_INTERVAL_MS, FINISHED_BLINK_MS, LAST_DIGIT,
    PAUSED_HIDDEN_MS, PAUSED_SHOWN_MS, SET_BLINK_INTERVAL_MS,
};
use crate::digits::DigitBuffer;
use crate::editor::{self, EditResult};
use crate::input::{InputEvent, InputPoller};
use crate::persist::{self, PersistenceGate};
use crate::state::{Blink, Event, Mode};
use crate::tone::{ToneRequest, ToneSequencer};
use crate::traits::{
    NvStorage, PowerOutput, PushButton, RotaryEncoder, SegmentDisplay, SwitchInput, ToneGenerator,
};

/// Finished-mode timers, reset on every entry to [`Mode::Finished`]
#[derive(Debug, Clone, Copy)]
struct FinishedState {
    blink: Blink,
    /// Last time the finished tone was issued
    beeped_at: Option<u32>,
}

impl FinishedState {
    const fn new() -> Self {
        Self {
            blink: Blink::new(false),
            beeped_at: None,
        }
    }
}

/// The timer engine
pub struct Engine<D, T, P, N> {
    display: D,
    tone: T,
    power: P,
    storage: N,

    mode: Mode,
    /// Configured duration in seconds
    countdown: i16,
    /// Seconds left while running or paused
    remaining: i16,
    /// Last countdown decrement (or start/resume)
    countdown_at: u32,

    /// Set-mode text currently on the display; `None` after any other render
    shown: Option<DigitBuffer>,
    set_blink: Blink,
    paused_blink: Blink,
    finished: FinishedState,

    tones: ToneSequencer,
    gate: PersistenceGate,
}

impl<D, T, P, N> Engine<D, T, P, N>
where
    D: SegmentDisplay,
    T: ToneGenerator,
    P: PowerOutput,
    N: NvStorage,
{
    /// Boot the engine
    ///
    /// Loads the persisted countdown value, lights the display and makes
    /// sure the UV output is off. Starts in [`Mode::SetDigit4`].
    pub fn new(display: D, tone: T, power: P, storage: N, now_ms: u32) -> Self {
        let mut engine = Self {
            display,
            tone,
            power,
            storage,
            mode: Mode::default(),
            countdown: 0,
            remaining: 0,
            countdown_at: now_ms,
            shown: None,
            set_blink: Blink::started(true, now_ms),
            paused_blink: Blink::new(false),
            finished: FinishedState::new(),
            tones: ToneSequencer::new(),
            gate: PersistenceGate::new(),
        };

        engine.countdown = persist::load_countdown(&mut engine.storage);
        engine.apply_power();
        engine.display.set_brightness(DISPLAY_BRIGHTNESS);
        engine.show_number(engine.countdown);

        #[cfg(feature = "defmt")]
        defmt::info!("Timer ready, countdown {}s", engine.countdown);

        engine
    }

    /// Run one loop iteration
    pub fn tick<E, B, S>(&mut self, input: &mut InputPoller<E, B, S>, now_ms: u32)
    where
        E: RotaryEncoder,
        B: PushButton,
        S: SwitchInput,
    {
        input.poll(now_ms);
        while let Some(event) = input.next_event() {
            self.handle_input(event, now_ms);
        }
        self.update(now_ms);
    }

    /// Run the current mode's periodic behavior, then advance tones
    pub fn update(&mut self, now_ms: u32) {
        match self.mode {
            Mode::SetDigit1 | Mode::SetDigit2 | Mode::SetDigit3 | Mode::SetDigit4 => {
                self.run_set(now_ms)
            }
            Mode::Running => self.run_running(now_ms),
            Mode::Paused => self.run_paused(now_ms, false),
            Mode::Finished => self.run_finished(now_ms),
        }
        self.tones.service(&mut self.tone, now_ms);
    }

    /// Dispatch one input event
    pub fn handle_input(&mut self, event: InputEvent, now_ms: u32) {
        match event {
            InputEvent::StartPressed => self.dispatch(Event::StartPressed, now_ms),
            InputEvent::StopPressed => self.dispatch(Event::StopPressed, now_ms),
            InputEvent::SwitchPushed => self.dispatch(Event::SwitchPushed, now_ms),
            InputEvent::SwitchLongHold => self.on_switch_long_hold(),
            InputEvent::EncoderStep(steps) => self.on_encoder_step(steps, now_ms),
        }
    }

    /// Apply an event to the mode and perform the transition's side effects
    pub fn dispatch(&mut self, event: Event, now_ms: u32) {
        let from = self.mode;
        let to = from.transition(event);
        if to == from {
            return;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("{} -> {} on {}", from, to, event);

        match (from, to) {
            (Mode::Finished, Mode::SetDigit4) if event == Event::EncoderTurned => {
                self.mode = Mode::SetDigit4;
            }
            (Mode::Paused | Mode::Finished, Mode::SetDigit4) => self.return_to_set(now_ms),
            (Mode::Running, Mode::Paused) => self.pause(),
            (Mode::Paused, Mode::Running) => self.resume(now_ms),
            (Mode::Running, Mode::Finished) => self.finish(),
            (_, Mode::Running) => self.begin_countdown(now_ms),
            (_, next) => {
                // Switch cycling between digits
                self.mode = next;
                self.tones.play(ToneRequest::beep(), now_ms);
            }
        }
        self.apply_power();
    }

    /// Drive the UV output from the current mode
    fn apply_power(&mut self) {
        self.power.set_on(self.mode.uv_allowed());
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    fn begin_countdown(&mut self, now_ms: u32) {
        self.tones.stop(&mut self.tone);
        self.set_blink.restart(true, now_ms);
        self.mode = Mode::SetDigit4;
        self.render_set(now_ms, true);

        self.mode = Mode::Running;
        self.remaining = self.countdown;
        self.countdown_at = now_ms;

        #[cfg(feature = "defmt")]
        defmt::info!("Exposure started: {}s", self.remaining);
    }

    fn pause(&mut self) {
        self.mode = Mode::Paused;
    }

    fn resume(&mut self, now_ms: u32) {
        // Show the time right away instead of waiting out a blank phase
        self.run_paused(now_ms, true);
        self.mode = Mode::Running;
        self.countdown_at = now_ms;
    }

    fn finish(&mut self) {
        self.mode = Mode::Finished;
        self.finished = FinishedState::new();

        #[cfg(feature = "defmt")]
        defmt::info!("Exposure finished, {}s left", self.remaining);
    }

    fn return_to_set(&mut self, now_ms: u32) {
        self.tones.stop(&mut self.tone);
        self.mode = Mode::SetDigit4;
        self.render_set(now_ms, true);
    }

    /// Long hold on the encoder switch. Reserved; does nothing yet.
    fn on_switch_long_hold(&mut self) {}

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    fn on_encoder_step(&mut self, steps: i16, now_ms: u32) {
        match self.mode {
            Mode::Running | Mode::Paused => {}
            Mode::Finished => self.dispatch(Event::EncoderTurned, now_ms),
            _ => self.edit(steps, now_ms),
        }
    }

    fn edit(&mut self, steps: i16, now_ms: u32) {
        let Some(position) = self.mode.digit_position() else {
            return;
        };

        self.set_blink.restart(true, now_ms);
        self.gate.mark_edit(now_ms);
        let rendered = self.render_set(now_ms, false);

        match editor::apply_step(self.countdown, position, &rendered, steps) {
            EditResult::Value(value) => self.countdown = value,
            EditResult::MoveDeeper => self.mode = self.mode.deeper_digit(),
            EditResult::NoChange => {}
        }
    }

    // ------------------------------------------------------------------
    // Per-mode behavior
    // ------------------------------------------------------------------

    fn run_set(&mut self, now_ms: u32) {
        self.render_set(now_ms, false);

        match self.gate.poll(&mut self.storage, self.countdown, now_ms) {
            Some(Ok(())) => {
                #[cfg(feature = "defmt")]
                defmt::info!("Countdown {}s saved", self.countdown);
            }
            Some(Err(_e)) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Countdown save failed: {}", _e);
            }
            None => {}
        }
    }

    /// Render the countdown for editing and return what was rendered
    ///
    /// The display is only written when the text changed or `force` is set.
    fn render_set(&mut self, now_ms: u32, force: bool) -> DigitBuffer {
        let position = self.mode.digit_position().unwrap_or(LAST_DIGIT);
        let mut text = DigitBuffer::for_edit(self.countdown, position);

        self.set_blink.poll(now_ms, SET_BLINK_INTERVAL_MS);
        if self.mode != Mode::SetDigit4 && !self.set_blink.visible() {
            text.blank_at(position);
        }

        if force || self.shown != Some(text) {
            self.display.show_text(&text);
            self.shown = Some(text);
        }
        text
    }

    fn run_running(&mut self, now_ms: u32) {
        if now_ms.wrapping_sub(self.countdown_at) < COUNTDOWN_TICK_MS {
            return;
        }

        self.remaining = self.remaining.saturating_sub(1);
        self.countdown_at = now_ms;

        if self.remaining <= 0 {
            self.dispatch(Event::CountdownExpired, now_ms);
        } else {
            self.show_number(self.remaining);
        }
    }

    /// Paused blink; `force_on` shows the remaining time immediately
    fn run_paused(&mut self, now_ms: u32, force_on: bool) {
        if force_on {
            self.paused_blink.restart(true, now_ms);
        } else {
            let interval = if self.paused_blink.visible() {
                PAUSED_SHOWN_MS
            } else {
                PAUSED_HIDDEN_MS
            };
            if !self.paused_blink.poll(now_ms, interval) {
                return;
            }
        }

        if self.paused_blink.visible() {
            self.show_number(self.remaining);
        } else {
            self.show_text(DigitBuffer::blank());
        }
    }

    fn run_finished(&mut self, now_ms: u32) {
        if self.finished.blink.poll(now_ms, FINISHED_BLINK_MS) {
            if self.finished.blink.visible() {
                self.show_text(DigitBuffer::dashes());
            } else {
                self.show_text(DigitBuffer::blank());
            }
        }

        let due = self
            .finished
            .beeped_at
            .map_or(true, |at| now_ms.wrapping_sub(at) >= FINISHED_BEEP_INTERVAL_MS);
        if due {
            self.tones.play(ToneRequest::finished(), now_ms);
            self.finished.beeped_at = Some(now_ms);
        }
    }

    // ------------------------------------------------------------------
    // Display helpers
    // ------------------------------------------------------------------

    fn show_number(&mut self, value: i16) {
        self.display.show_number(value);
        self.shown = None;
    }

    fn show_text(&mut self, text: DigitBuffer) {
        self.display.show_text(&text);
        self.shown = None;
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Configured countdown in seconds
    pub fn countdown(&self) -> i16 {
        self.countdown
    }

    /// Seconds left in the current (or last) exposure
    pub fn remaining(&self) -> i16 {
        self.remaining
    }

    /// Check if the UV LEDs are on
    pub fn uv_on(&self) -> bool {
        self.power.is_on()
    }

    /// Check if an edit is waiting to be persisted
    pub fn is_edit_pending(&self) -> bool {
        self.gate.is_pending()
    }

    /// Tone sequencer state
    pub fn tones(&self) -> &ToneSequencer {
        &self.tones
    }

    /// Display driver
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Tone generator driver
    pub fn tone_generator(&self) -> &T {
        &self.tone
    }

    /// UV power output driver
    pub fn power(&self) -> &P {
        &self.power
    }

    /// Non-volatile storage driver
    pub fn storage(&self) -> &N {
        &self.storage
    }

    /// Give the drivers back
    pub fn into_parts(self) -> (D, T, P, N) {
        (self.display, self.tone, self.power, self.storage)
    }
}
