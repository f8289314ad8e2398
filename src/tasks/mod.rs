//! Embassy runtime tasks
//!
//! Async glue that feeds ticks and requests into the LED component. Built
//! with the `embassy` feature (and for host tests).

pub mod blink;

pub use blink::{run, BlinkRequest, BlinkRequestChannel, BlinkRunner, BLINK_REQUESTS};
