//! Blink controller
//!
//! Bundles a [`BlinkState`] with an optional output sink. The sink is absent
//! by construction (`None`) when no physical line is wired; use
//! [`NoOutput`] as the type parameter in that case.

use super::error::ConfigurationFault;
use super::handlers;
use super::state::BlinkState;
use crate::command::CommandResponse;
use crate::traits::{OutputSink, ParameterProvider, TelemetrySink};

/// Output sink type for controllers with no line attached
///
/// Uninhabited, so `Option<NoOutput>` can only ever be `None`.
#[derive(Debug)]
pub enum NoOutput {}

impl OutputSink for NoOutput {
    fn set_level(&mut self, _level: super::Logic) {
        match *self {}
    }
}

/// Blink controller owning its state and optional output sink
///
/// # Example
///
/// ```
/// use pico_blink_core::blink::{BlinkController, OnOff};
/// use pico_blink_core::traits::{MockOutput, MockParams, RecordingTelemetry};
///
/// let mut led = BlinkController::new(Some(MockOutput::new()));
/// let params = MockParams::new(2);
/// let mut telemetry = RecordingTelemetry::new();
///
/// led.set_blinking(true, &mut telemetry);
/// led.tick(&params, &mut telemetry).unwrap();
/// assert_eq!(led.state().output(), OnOff::On);
/// ```
#[derive(Debug)]
pub struct BlinkController<O> {
    state: BlinkState,
    output: Option<O>,
}

impl<O: OutputSink> BlinkController<O> {
    /// Create a controller in the initial (disabled, OFF) state
    pub const fn new(output: Option<O>) -> Self {
        Self {
            state: BlinkState::new(),
            output,
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> &BlinkState {
        &self.state
    }

    /// Attached output sink, if any
    pub fn output(&self) -> Option<&O> {
        self.output.as_ref()
    }

    /// Mutable access to the output line, if one is attached
    pub fn output_mut(&mut self) -> Option<&mut O> {
        self.output.as_mut()
    }

    /// Attach an output sink, returning the previously attached one
    pub fn attach_output(&mut self, output: O) -> Option<O> {
        self.output.replace(output)
    }

    /// Detach and return the output sink
    pub fn detach_output(&mut self) -> Option<O> {
        self.output.take()
    }

    /// Process one timing tick
    pub fn tick<P, T>(&mut self, params: &P, telemetry: &mut T) -> Result<(), ConfigurationFault>
    where
        P: ParameterProvider + ?Sized,
        T: TelemetrySink + ?Sized,
    {
        handlers::on_tick(&mut self.state, params, self.output.as_mut(), telemetry)
    }

    /// Enable or disable blinking
    pub fn set_blinking<T>(&mut self, enabled: bool, telemetry: &mut T) -> CommandResponse
    where
        T: TelemetrySink + ?Sized,
    {
        handlers::set_blinking(&mut self.state, enabled, telemetry)
    }

    /// React to a parameter-change notification from the provider
    pub fn parameter_updated<P, T>(
        &mut self,
        params: &P,
        id: &str,
        telemetry: &mut T,
    ) -> Result<u32, ConfigurationFault>
    where
        P: ParameterProvider + ?Sized,
        T: TelemetrySink + ?Sized,
    {
        handlers::on_parameter_changed(params, id, telemetry)
    }
}

impl<O: OutputSink> Default for BlinkController<O> {
    fn default() -> Self {
        Self::new(None)
    }
}
