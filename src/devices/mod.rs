//! Device drivers
//!
//! This module contains device drivers that use platform abstraction traits.
//!
//! ## Modules
//!
//! - `led`: Blinking LED component and GPIO output adapter

pub mod led;

pub use led::{GpioOutput, LedComponent};
