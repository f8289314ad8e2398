//! Core driver infrastructure
//!
//! Logging macros, the activity event log and build-time configuration shared
//! by the LED component and its tasks.

pub mod config;
pub mod event_log;
pub mod logging;
