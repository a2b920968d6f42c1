//! Hardware driver implementations
//!
//! Concrete implementations of the traits defined in uvbox-core, written
//! against `embedded-hal` 1.0 pins so they run on any MCU HAL:
//!
//! - Front panel inputs (debounced buttons, quadrature encoder, encoder switch)
//! - UV LED power output
//! - TM1637 four digit seven-segment display

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod input;
pub mod output;
