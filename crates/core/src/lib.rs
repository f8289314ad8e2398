//! pico_blink_core - Pure no_std blink controller logic
//!
//! This crate contains the platform-agnostic blink state machine and the
//! collaborator traits it calls through. Everything here can be tested on
//! host without feature flags or embassy dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Output line, parameters and telemetry injected via traits
//!
//! # Modules
//!
//! - [`blink`]: Blink state, handlers and controller
//! - [`traits`]: Collaborator traits (ParameterProvider, OutputSink, TelemetrySink) and mocks
//! - [`parameters`]: Parameter store and blink parameter definitions
//! - [`command`]: Command opcodes, requests and acknowledgements

#![no_std]

pub mod blink;
pub mod command;
pub mod parameters;
pub mod traits;
