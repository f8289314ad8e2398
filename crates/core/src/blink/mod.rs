//! Blink state machine
//!
//! Periodic toggling of a single logical output line, driven by externally
//! delivered ticks and configured by a tick-count interval.
//!
//! # Contents
//!
//! - [`BlinkState`]: the controller's owned state
//! - [`handlers`]: pure tick, mode-change and parameter-change handlers
//! - [`BlinkController`]: state + optional output sink
//! - [`ConfigurationFault`]: fatal wiring/configuration errors

mod controller;
mod error;
pub mod handlers;
mod state;

pub use controller::{BlinkController, NoOutput};
pub use error::ConfigurationFault;
pub use state::{BlinkMode, BlinkState, Logic, OnOff};
