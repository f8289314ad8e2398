//! Telemetry and event sink abstraction
//!
//! Channels (`record_*`) carry the latest value of an observation; events
//! (`notify_*`) are human-readable activity notices. All calls are
//! fire-and-forget.

use heapless::Vec;

use crate::blink::OnOff;

/// Consumer of controller telemetry and activity notices
pub trait TelemetrySink {
    /// Total transitions after a toggle
    fn record_transition_count(&mut self, count: u32);

    /// Blinking mode after an enable/disable command
    fn record_blinking_mode(&mut self, enabled: bool);

    /// Output state changed (toggle or forced OFF)
    fn notify_state_changed(&mut self, state: OnOff);

    /// Enable/disable command accepted
    fn notify_mode_changed(&mut self, enabled: bool);

    /// Blink interval parameter changed
    fn notify_interval_changed(&mut self, interval: u32);
}

impl<T: TelemetrySink + ?Sized> TelemetrySink for &mut T {
    fn record_transition_count(&mut self, count: u32) {
        (**self).record_transition_count(count);
    }

    fn record_blinking_mode(&mut self, enabled: bool) {
        (**self).record_blinking_mode(enabled);
    }

    fn notify_state_changed(&mut self, state: OnOff) {
        (**self).notify_state_changed(state);
    }

    fn notify_mode_changed(&mut self, enabled: bool) {
        (**self).notify_mode_changed(enabled);
    }

    fn notify_interval_changed(&mut self, interval: u32) {
        (**self).notify_interval_changed(interval);
    }
}

/// One call made on a [`TelemetrySink`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelemetryEvent {
    TransitionCount(u32),
    BlinkingMode(bool),
    StateChanged(OnOff),
    ModeChanged(bool),
    IntervalChanged(u32),
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Maximum number of calls kept by [`RecordingTelemetry`]
pub const RECORDING_CAPACITY: usize = 64;

/// Telemetry sink that records every call in order
///
/// Calls beyond [`RECORDING_CAPACITY`] are counted in `dropped()` but not
/// stored.
#[derive(Debug, Clone, Default)]
pub struct RecordingTelemetry {
    events: Vec<TelemetryEvent, RECORDING_CAPACITY>,
    dropped: u32,
}

impl RecordingTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls, oldest first
    pub fn events(&self) -> &[TelemetryEvent] {
        &self.events
    }

    /// Number of `notify_state_changed` calls recorded
    pub fn state_changes(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, TelemetryEvent::StateChanged(_)))
            .count()
    }

    /// Last value reported on the transition-count channel
    pub fn last_transition_count(&self) -> Option<u32> {
        self.events.iter().rev().find_map(|e| match e {
            TelemetryEvent::TransitionCount(n) => Some(*n),
            _ => None,
        })
    }

    /// Calls lost because the recording was full
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.dropped = 0;
    }

    fn record(&mut self, event: TelemetryEvent) {
        if self.events.push(event).is_err() {
            self.dropped = self.dropped.saturating_add(1);
        }
    }
}

impl TelemetrySink for RecordingTelemetry {
    fn record_transition_count(&mut self, count: u32) {
        self.record(TelemetryEvent::TransitionCount(count));
    }

    fn record_blinking_mode(&mut self, enabled: bool) {
        self.record(TelemetryEvent::BlinkingMode(enabled));
    }

    fn notify_state_changed(&mut self, state: OnOff) {
        self.record(TelemetryEvent::StateChanged(state));
    }

    fn notify_mode_changed(&mut self, enabled: bool) {
        self.record(TelemetryEvent::ModeChanged(enabled));
    }

    fn notify_interval_changed(&mut self, interval: u32) {
        self.record(TelemetryEvent::IntervalChanged(interval));
    }
}
