//! Telemetry Channels
//!
//! `TelemetrySink` implementation for the LED component. Keeps the latest
//! value of each telemetry channel and forwards activity notices to the event
//! log and the log macros.
//!
//! # Channels
//!
//! - `LedTransitions`: total ON/OFF transitions
//! - `BlinkingState`: ON while blinking is enabled
//!
//! # Events
//!
//! - `LedState` (ACTIVITY_LO): output changed state
//! - `SetBlinkingState` (ACTIVITY_HI): blinking enabled/disabled
//! - `BlinkIntervalSet` (ACTIVITY_HI): interval parameter changed

use crate::core::event_log::{Event, EventKind, EventLog};
use pico_blink_core::blink::OnOff;
use pico_blink_core::traits::TelemetrySink;

/// Telemetry channel values and event log for one LED component
#[derive(Default)]
pub struct TelemetryChannels {
    led_transitions: Option<u32>,
    blinking_state: Option<OnOff>,
    events: EventLog,
}

impl TelemetryChannels {
    pub const fn new() -> Self {
        Self {
            led_transitions: None,
            blinking_state: None,
            events: EventLog::new(),
        }
    }

    /// Last value written to `LedTransitions`, `None` before the first toggle
    pub fn led_transitions(&self) -> Option<u32> {
        self.led_transitions
    }

    /// Last value written to `BlinkingState`, `None` before the first command
    pub fn blinking_state(&self) -> Option<OnOff> {
        self.blinking_state
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EventLog {
        &mut self.events
    }

    /// Record an event and mirror it to the log output
    pub fn emit(&mut self, kind: EventKind) {
        let event = Event::new(kind);
        match kind {
            EventKind::LedState(state) => {
                crate::log_debug!("LED is {}", state.as_str());
            }
            EventKind::SetBlinkingState(state) => {
                crate::log_info!("Set blinking state to {}", state.as_str());
            }
            EventKind::BlinkIntervalSet(interval) => {
                crate::log_info!("LED blink interval set to {}", interval);
            }
            EventKind::InvalidOpcode(opcode) => {
                crate::log_warn!("Invalid opcode {}", opcode);
            }
        }
        self.events.push(event);
    }
}

impl TelemetrySink for TelemetryChannels {
    fn record_transition_count(&mut self, count: u32) {
        self.led_transitions = Some(count);
    }

    fn record_blinking_mode(&mut self, enabled: bool) {
        self.blinking_state = Some(OnOff::from(enabled));
    }

    fn notify_state_changed(&mut self, state: OnOff) {
        self.emit(EventKind::LedState(state));
    }

    fn notify_mode_changed(&mut self, enabled: bool) {
        self.emit(EventKind::SetBlinkingState(OnOff::from(enabled)));
    }

    fn notify_interval_changed(&mut self, interval: u32) {
        self.emit(EventKind::BlinkIntervalSet(interval));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event_log::Severity;

    #[test]
    fn test_channels_start_empty() {
        let telemetry = TelemetryChannels::new();
        assert_eq!(telemetry.led_transitions(), None);
        assert_eq!(telemetry.blinking_state(), None);
        assert!(telemetry.events().is_empty());
    }

    #[test]
    fn test_channels_keep_latest_value() {
        let mut telemetry = TelemetryChannels::new();

        telemetry.record_transition_count(1);
        telemetry.record_transition_count(2);
        telemetry.record_blinking_mode(true);

        assert_eq!(telemetry.led_transitions(), Some(2));
        assert_eq!(telemetry.blinking_state(), Some(OnOff::On));
        // Channels are not events
        assert!(telemetry.events().is_empty());
    }

    #[test]
    fn test_notices_become_events() {
        let mut telemetry = TelemetryChannels::new();

        telemetry.notify_mode_changed(true);
        telemetry.notify_state_changed(OnOff::On);
        telemetry.notify_interval_changed(8);

        let events: Vec<Event> = telemetry.events().iter().copied().collect();
        assert_eq!(
            events,
            [
                Event::new(EventKind::SetBlinkingState(OnOff::On)),
                Event::new(EventKind::LedState(OnOff::On)),
                Event::new(EventKind::BlinkIntervalSet(8)),
            ]
        );
        assert_eq!(events[1].severity, Severity::ActivityLo);
    }
}
