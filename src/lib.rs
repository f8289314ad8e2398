#![cfg_attr(not(test), no_std)]

//! pico_blink - Parameter-driven LED blink driver for Raspberry Pi Pico 2 W
//!
//! This library wires the platform-agnostic blink controller from
//! `pico_blink_core` to GPIO, the parameter store, command dispatch and the
//! event log.

// Platform abstraction layer (GPIO)
pub mod platform;

// Core infrastructure (logging, event log, build-time configuration)
pub mod core;

// Device drivers using platform abstraction
pub mod devices;

// Command dispatch and telemetry channels
pub mod communication;

// Embassy runtime tasks
#[cfg(any(test, feature = "embassy"))]
pub mod tasks;
