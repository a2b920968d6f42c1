//! Deferred persistence of the countdown value
//!
//! Writing on every encoder detent would wear out the EEPROM. The gate
//! waits until editing has been idle for [`PERSIST_IDLE_MS`] and then
//! writes exactly once.

use crate::config::{MAX_SECONDS, MIN_SECONDS, PERSIST_IDLE_MS, STORAGE_OFFSET};
use crate::traits::{NvStorage, StorageError};

/// Clamp a raw stored value into the countdown range
pub fn clamp_countdown(raw: i16) -> i16 {
    raw.clamp(MIN_SECONDS, MAX_SECONDS)
}

/// Read the persisted countdown value
///
/// A failed read yields the minimum value.
pub fn load_countdown<N: NvStorage>(storage: &mut N) -> i16 {
    match storage.read_i16(STORAGE_OFFSET) {
        Ok(raw) => clamp_countdown(raw),
        Err(_e) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("Countdown read failed: {}", _e);
            MIN_SECONDS
        }
    }
}

/// Idle-triggered write gate
#[derive(Debug, Clone, Default)]
pub struct PersistenceGate {
    /// Time of the last edit; `Some` only while a write is pending
    idle_since: Option<u32>,
}

impl PersistenceGate {
    /// Create a gate with nothing pending
    pub const fn new() -> Self {
        Self { idle_since: None }
    }

    /// Record an edit; the write is deferred until editing goes quiet again
    pub fn mark_edit(&mut self, now_ms: u32) {
        self.idle_since = Some(now_ms);
    }

    /// Check if an edit is waiting to be written
    pub fn is_pending(&self) -> bool {
        self.idle_since.is_some()
    }

    /// Write `value` if the idle threshold has passed
    ///
    /// Returns `None` if nothing was due, otherwise the write result. The
    /// pending edit is cleared either way.
    pub fn poll<N: NvStorage>(
        &mut self,
        storage: &mut N,
        value: i16,
        now_ms: u32,
    ) -> Option<Result<(), StorageError>> {
        let since = self.idle_since?;
        if now_ms.wrapping_sub(since) < PERSIST_IDLE_MS {
            return None;
        }

        self.idle_since = None;
        Some(storage.write_i16(STORAGE_OFFSET, value))
    }
}
