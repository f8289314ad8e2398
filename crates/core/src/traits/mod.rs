//! Collaborator traits for the blink controller.
//!
//! This module provides trait abstractions that decouple the blink state
//! machine from parameter storage, GPIO drivers and telemetry transport.
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Platform implementations (GPIO, event log) live in the firmware crate

pub mod output;
pub mod params;
pub mod telemetry;

pub use output::{MockOutput, OutputSink};
pub use params::{MockParams, ParamValid, ParameterProvider};
pub use telemetry::{RecordingTelemetry, TelemetryEvent, TelemetrySink};
