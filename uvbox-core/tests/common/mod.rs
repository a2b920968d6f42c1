//! Recording mock drivers shared by the integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use uvbox_core::traits::{
    EncoderStep, NvStorage, PowerOutput, PushButton, RotaryEncoder, SegmentDisplay, StorageError,
    SwitchInput, ToneGenerator,
};
use uvbox_core::{DigitBuffer, Engine, InputPoller};

/// One display write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shown {
    Text([u8; 4]),
    Number(i16),
}

#[derive(Debug, Default)]
pub struct MockDisplay {
    pub history: Vec<Shown>,
    pub brightness: Option<u8>,
}

impl MockDisplay {
    pub fn last(&self) -> Option<Shown> {
        self.history.last().copied()
    }

    pub fn writes(&self) -> usize {
        self.history.len()
    }
}

impl SegmentDisplay for MockDisplay {
    fn show_text(&mut self, text: &DigitBuffer) {
        self.history.push(Shown::Text(*text.as_bytes()));
    }

    fn show_number(&mut self, value: i16) {
        self.history.push(Shown::Number(value));
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = Some(level);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneCall {
    Start(u16),
    Stop,
}

#[derive(Debug, Default)]
pub struct MockTone {
    pub calls: Vec<ToneCall>,
}

impl MockTone {
    pub fn starts(&self, frequency_hz: u16) -> usize {
        self.calls
            .iter()
            .filter(|call| **call == ToneCall::Start(frequency_hz))
            .count()
    }

    pub fn stops(&self) -> usize {
        self.calls.iter().filter(|call| **call == ToneCall::Stop).count()
    }
}

impl ToneGenerator for MockTone {
    fn start(&mut self, frequency_hz: u16) {
        self.calls.push(ToneCall::Start(frequency_hz));
    }

    fn stop(&mut self) {
        self.calls.push(ToneCall::Stop);
    }
}

#[derive(Debug, Default)]
pub struct MockPower {
    pub on: bool,
}

impl PowerOutput for MockPower {
    fn set_on(&mut self, on: bool) {
        self.on = on;
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

#[derive(Debug, Default)]
pub struct MockStorage {
    pub value: i16,
    pub writes: Vec<i16>,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl MockStorage {
    pub fn holding(value: i16) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }
}

impl NvStorage for MockStorage {
    fn read_i16(&mut self, offset: u16) -> Result<i16, StorageError> {
        assert_eq!(offset, 0);
        if self.fail_reads {
            return Err(StorageError::ReadFailed);
        }
        Ok(self.value)
    }

    fn write_i16(&mut self, offset: u16, value: i16) -> Result<(), StorageError> {
        assert_eq!(offset, 0);
        if self.fail_writes {
            return Err(StorageError::WriteFailed);
        }
        self.value = value;
        self.writes.push(value);
        Ok(())
    }
}

pub type TestEngine = Engine<MockDisplay, MockTone, MockPower, MockStorage>;

/// Boot an engine at t=0 with `stored` in EEPROM
pub fn boot(stored: i16) -> TestEngine {
    boot_with(MockStorage::holding(stored))
}

pub fn boot_with(storage: MockStorage) -> TestEngine {
    Engine::new(
        MockDisplay::default(),
        MockTone::default(),
        MockPower::default(),
        storage,
        0,
    )
}

/// Call `update` every `step` ms over `from..=to`
pub fn run(engine: &mut TestEngine, from: u32, to: u32, step: usize) {
    for now in (from..=to).step_by(step) {
        engine.update(now);
    }
}

/// Front panel state shared between the test and the mock input drivers
#[derive(Debug, Default)]
pub struct Panel {
    pub step: Option<EncoderStep>,
    pub start: bool,
    pub stop: bool,
    pub switch_down: bool,
}

pub type SharedPanel = Rc<RefCell<Panel>>;

pub struct PanelEncoder(SharedPanel);

impl RotaryEncoder for PanelEncoder {
    fn update(&mut self) -> Option<EncoderStep> {
        self.0.borrow_mut().step.take()
    }
}

pub enum Which {
    Start,
    Stop,
}

pub struct PanelButton(SharedPanel, Which);

impl PushButton for PanelButton {
    fn update(&mut self, _now_ms: u32) -> bool {
        let mut panel = self.0.borrow_mut();
        match self.1 {
            Which::Start => std::mem::take(&mut panel.start),
            Which::Stop => std::mem::take(&mut panel.stop),
        }
    }
}

pub struct PanelSwitch(SharedPanel);

impl SwitchInput for PanelSwitch {
    fn is_pressed(&mut self) -> bool {
        self.0.borrow().switch_down
    }
}

pub type PanelPoller = InputPoller<PanelEncoder, PanelButton, PanelSwitch>;

pub fn panel() -> (SharedPanel, PanelPoller) {
    let shared = SharedPanel::default();
    let poller = InputPoller::new(
        PanelEncoder(shared.clone()),
        PanelButton(shared.clone(), Which::Start),
        PanelButton(shared.clone(), Which::Stop),
        PanelSwitch(shared.clone()),
    );
    (shared, poller)
}
