//! Non-volatile storage trait

/// Errors that can occur with non-volatile storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Reading the cell failed
    ReadFailed,
    /// Writing the cell failed
    WriteFailed,
}

/// Trait for EEPROM-like storage of 16-bit values at byte offsets
///
/// Values are stored little-endian, two bytes at `offset`.
pub trait NvStorage {
    /// Read the signed 16-bit value at `offset`
    fn read_i16(&mut self, offset: u16) -> Result<i16, StorageError>;

    /// Write a signed 16-bit value at `offset`
    fn write_i16(&mut self, offset: u16, value: i16) -> Result<(), StorageError>;
}
