//! Output drivers

pub mod gpio;

pub use gpio::GpioPower;
