//! RP2350 GPIO implementation
//!
//! This module provides the LED output pin for RP2350 using `embassy-rp`.

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
    Result,
};
use embassy_rp::gpio::Output;

/// RP2350 output pin
///
/// Wraps an `embassy_rp` push-pull output to implement the `GpioInterface` trait.
pub struct Rp2350Gpio {
    pin: Output<'static>,
}

impl Rp2350Gpio {
    /// Create a new RP2350 GPIO instance from a configured output pin
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl GpioInterface for Rp2350Gpio {
    fn set_high(&mut self) -> Result<()> {
        self.pin.set_high();
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        self.pin.set_low();
        Ok(())
    }

    fn read(&self) -> bool {
        self.pin.is_set_high()
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        // Runtime reconfiguration would need a Flex pin; only push-pull is supported
        match mode {
            GpioMode::OutputPushPull => Ok(()),
            _ => Err(PlatformError::Gpio(GpioError::InvalidMode)),
        }
    }

    fn mode(&self) -> GpioMode {
        GpioMode::OutputPushPull
    }
}
