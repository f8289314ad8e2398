//! RP2350 platform implementation (Pico 2 W)

mod gpio;

pub use gpio::Rp2350Gpio;
