//! Front panel input drivers

pub mod button;
pub mod encoder;
pub mod switch;

pub use button::DebouncedButton;
pub use encoder::QuadratureEncoder;
pub use switch::GpioSwitch;
