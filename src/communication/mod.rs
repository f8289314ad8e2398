//! Communication layer
//!
//! Command dispatch into the LED component and the telemetry channels it
//! reports through.

pub mod command;
pub mod telemetry;

pub use command::CommandHandler;
pub use telemetry::TelemetryChannels;
