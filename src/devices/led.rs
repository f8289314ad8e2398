//! LED Component
//!
//! Wires the blink controller to its collaborators:
//! - Parameter store holding `BLINK_INTERVAL`
//! - Optional GPIO output line (via [`GpioOutput`])
//! - Telemetry channels and event log
//!
//! # Fault Policy
//!
//! The controller reports configuration faults as values. This component
//! treats every one of them as a fatal assertion: an interval that cannot be
//! read once ticks are flowing means parameters were not initialized before
//! start-up, and there is nothing sensible to do but stop.

use crate::communication::telemetry::TelemetryChannels;
use crate::platform::GpioInterface;
use pico_blink_core::blink::{BlinkController, BlinkState, ConfigurationFault, Logic, OnOff};
use pico_blink_core::command::CommandResponse;
use pico_blink_core::parameters::{BlinkParams, ParameterError, ParameterStore};
use pico_blink_core::traits::OutputSink;

/// `OutputSink` over a GPIO pin
///
/// A failed write is logged and dropped. The controller's logical state stays
/// authoritative and the next toggle writes again.
pub struct GpioOutput<G> {
    gpio: G,
    failed_writes: u32,
}

impl<G: GpioInterface> GpioOutput<G> {
    pub fn new(gpio: G) -> Self {
        Self {
            gpio,
            failed_writes: 0,
        }
    }

    /// Writes rejected by the GPIO driver since start-up
    pub fn failed_writes(&self) -> u32 {
        self.failed_writes
    }

    pub fn gpio(&self) -> &G {
        &self.gpio
    }

    pub fn gpio_mut(&mut self) -> &mut G {
        &mut self.gpio
    }

    pub fn into_inner(self) -> G {
        self.gpio
    }
}

impl<G: GpioInterface> OutputSink for GpioOutput<G> {
    fn set_level(&mut self, level: Logic) {
        if let Err(e) = self.gpio.write(level == Logic::High) {
            self.failed_writes = self.failed_writes.saturating_add(1);
            crate::log_warn!("LED write failed: {}", e.as_str());
        }
    }
}

/// LED component: controller, parameters and telemetry
pub struct LedComponent<O> {
    controller: BlinkController<O>,
    params: ParameterStore,
    telemetry: TelemetryChannels,
}

impl<O: OutputSink> LedComponent<O> {
    /// Create a component with default blink parameters registered
    pub fn new(output: Option<O>) -> Result<Self, ParameterError> {
        let mut params = ParameterStore::new();
        BlinkParams::register_defaults(&mut params)?;
        Ok(Self::with_params(output, params))
    }

    /// Create a component over an existing parameter store
    ///
    /// The store must provide a valid `BLINK_INTERVAL` before the first tick.
    pub fn with_params(output: Option<O>, params: ParameterStore) -> Self {
        Self {
            controller: BlinkController::new(output),
            params,
            telemetry: TelemetryChannels::new(),
        }
    }

    /// Process one timing tick
    ///
    /// # Panics
    ///
    /// Panics if the blink interval is invalid or uninitialized.
    pub fn tick(&mut self) {
        if let Err(fault) = self.controller.tick(&self.params, &mut self.telemetry) {
            fatal(fault);
        }
    }

    /// Enable or disable blinking
    pub fn set_blinking(&mut self, state: OnOff) -> CommandResponse {
        self.controller
            .set_blinking(state == OnOff::On, &mut self.telemetry)
    }

    /// Validate and store a parameter, then notify the controller
    ///
    /// # Errors
    ///
    /// Returns the store's error if the value is rejected; the controller is
    /// not notified in that case.
    pub fn set_parameter(&mut self, name: &str, value: u32) -> Result<(), ParameterError> {
        self.params.set(name, value)?;
        self.parameter_updated(name);
        Ok(())
    }

    /// Parameter-change notification
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a parameter of this component or its value is
    /// not valid.
    pub fn parameter_updated(&mut self, id: &str) {
        if let Err(fault) = self
            .controller
            .parameter_updated(&self.params, id, &mut self.telemetry)
        {
            crate::log_error!("Parameter update for {} rejected", id);
            fatal(fault);
        }
    }

    pub fn state(&self) -> &BlinkState {
        self.controller.state()
    }

    pub fn params(&self) -> &ParameterStore {
        &self.params
    }

    /// Direct store access (e.g. restoring persisted values before start-up)
    pub fn params_mut(&mut self) -> &mut ParameterStore {
        &mut self.params
    }

    pub fn telemetry(&self) -> &TelemetryChannels {
        &self.telemetry
    }

    pub fn telemetry_mut(&mut self) -> &mut TelemetryChannels {
        &mut self.telemetry
    }

    pub fn output(&self) -> Option<&O> {
        self.controller.output()
    }
}

fn fatal(fault: ConfigurationFault) -> ! {
    crate::log_error!("LED configuration fault: {}", fault.as_str());
    panic!("LED configuration fault: {}", fault);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event_log::EventKind;
    use crate::platform::mock::MockGpio;
    use pico_blink_core::blink::NoOutput;
    use pico_blink_core::parameters::BLINK_INTERVAL;

    fn gpio_component(interval: u32) -> LedComponent<GpioOutput<MockGpio>> {
        let mut led = LedComponent::new(Some(GpioOutput::new(MockGpio::new_output()))).unwrap();
        led.set_parameter(BLINK_INTERVAL, interval).unwrap();
        led.telemetry_mut().events_mut().clear();
        led
    }

    fn gpio(led: &LedComponent<GpioOutput<MockGpio>>) -> &MockGpio {
        led.output().unwrap().gpio()
    }

    #[test]
    fn test_blinks_gpio_pin() {
        let mut led = gpio_component(2);
        led.set_blinking(OnOff::On);

        led.tick();
        assert!(gpio(&led).read());

        led.tick();
        assert!(gpio(&led).read());

        led.tick();
        assert!(!gpio(&led).read());
        assert_eq!(gpio(&led).write_count(), 2);
        assert_eq!(led.telemetry().led_transitions(), Some(2));
    }

    #[test]
    fn test_disable_drives_pin_low_once() {
        let mut led = gpio_component(3);
        led.set_blinking(OnOff::On);
        led.tick();
        assert!(gpio(&led).read());

        led.set_blinking(OnOff::Off);
        led.tick();
        led.tick();

        assert!(!gpio(&led).read());
        assert_eq!(gpio(&led).write_count(), 2);
        assert_eq!(led.telemetry().blinking_state(), Some(OnOff::Off));
    }

    #[test]
    fn test_gpio_fault_is_not_retried() {
        let mut led = gpio_component(1);
        led.set_blinking(OnOff::On);

        if let Some(output) = led.controller.output_mut() {
            output.gpio_mut().inject_fault(true);
        }
        led.tick();

        // Logical state advanced even though the pin write failed
        assert_eq!(led.state().output(), OnOff::On);
        assert_eq!(led.output().unwrap().failed_writes(), 1);
        assert!(!gpio(&led).read());

        if let Some(output) = led.controller.output_mut() {
            output.gpio_mut().inject_fault(false);
        }
        led.tick();
        assert_eq!(led.state().output(), OnOff::Off);
        assert_eq!(led.output().unwrap().failed_writes(), 1);
        assert_eq!(gpio(&led).write_count(), 1);
    }

    #[test]
    fn test_unwired_component_runs() {
        let mut led = LedComponent::<NoOutput>::new(None).unwrap();
        led.set_blinking(OnOff::On);

        for _ in 0..10 {
            led.tick();
        }

        assert_eq!(led.state().transitions(), 2);
        assert!(led.output().is_none());
    }

    #[test]
    fn test_set_parameter_emits_interval_event() {
        let mut led = LedComponent::<NoOutput>::new(None).unwrap();

        led.set_parameter(BLINK_INTERVAL, 7).unwrap();

        assert_eq!(
            led.telemetry().events().last().map(|e| e.kind),
            Some(EventKind::BlinkIntervalSet(7))
        );
    }

    #[test]
    fn test_rejected_parameter_not_notified() {
        let mut led = LedComponent::<NoOutput>::new(None).unwrap();

        let result = led.set_parameter(BLINK_INTERVAL, 1_000_000);

        assert_eq!(result, Err(ParameterError::OutOfRange));
        assert!(led.telemetry().events().is_empty());
    }

    #[test]
    #[should_panic(expected = "LED configuration fault")]
    fn test_uninitialized_interval_is_fatal() {
        let mut led = LedComponent::<NoOutput>::with_params(None, ParameterStore::new());
        led.tick();
    }

    #[test]
    #[should_panic(expected = "LED configuration fault")]
    fn test_invalid_loaded_interval_is_fatal() {
        let mut led = LedComponent::<NoOutput>::new(None).unwrap();
        led.params_mut().load(BLINK_INTERVAL, u32::MAX).unwrap();
        led.tick();
    }

    #[test]
    #[should_panic(expected = "unknown parameter id")]
    fn test_unknown_parameter_notification_is_fatal() {
        let mut led = LedComponent::<NoOutput>::new(None).unwrap();
        led.parameter_updated("LOIT_RADIUS");
    }
}
