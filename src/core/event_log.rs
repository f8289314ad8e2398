//! Activity Event Log
//!
//! Fixed-capacity ring buffer of LED activity events.
//! Uses heapless HistoryBuf for no-allocation storage.
//!
//! ## Features
//!
//! - Fixed capacity of 32 events
//! - Automatic oldest event eviction when full
//! - Overflow tracking for diagnostics
//! - Oldest-first iteration order

use core::fmt;

use heapless::{HistoryBuf, Vec};
use pico_blink_core::blink::OnOff;

/// Buffer capacity in number of events
pub const EVENT_LOG_SIZE: usize = 32;

/// Event severity, ordered ActivityLo < ActivityHi < WarningHi
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Severity {
    /// Frequent, low-interest activity (every toggle)
    ActivityLo = 0,
    /// Operator-initiated activity (commands, parameter changes)
    ActivityHi = 1,
    /// Rejected request or failed write
    WarningHi = 2,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::ActivityLo => "ACTIVITY_LO",
            Severity::ActivityHi => "ACTIVITY_HI",
            Severity::WarningHi => "WARNING_HI",
        }
    }
}

/// What happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Output changed state
    LedState(OnOff),
    /// Blinking enabled or disabled
    SetBlinkingState(OnOff),
    /// Blink interval parameter changed
    BlinkIntervalSet(u32),
    /// Command with an unknown opcode was rejected
    InvalidOpcode(u32),
}

impl EventKind {
    /// Default severity for this kind of event
    pub fn severity(&self) -> Severity {
        match self {
            EventKind::LedState(_) => Severity::ActivityLo,
            EventKind::SetBlinkingState(_) | EventKind::BlinkIntervalSet(_) => {
                Severity::ActivityHi
            }
            EventKind::InvalidOpcode(_) => Severity::WarningHi,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::LedState(state) => write!(f, "LED is {}", state),
            EventKind::SetBlinkingState(state) => write!(f, "Set blinking state to {}", state),
            EventKind::BlinkIntervalSet(interval) => {
                write!(f, "LED blink interval set to {}", interval)
            }
            EventKind::InvalidOpcode(opcode) => write!(f, "Invalid opcode {:#06x}", opcode),
        }
    }
}

/// Logged event with its severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub severity: Severity,
    pub kind: EventKind,
}

impl Event {
    /// Create an event with the kind's default severity
    pub fn new(kind: EventKind) -> Self {
        Self {
            severity: kind.severity(),
            kind,
        }
    }
}

/// Ring buffer of activity events
///
/// Stores up to EVENT_LOG_SIZE events. When full, the oldest event is
/// evicted and overflow_count is incremented.
pub struct EventLog {
    buffer: HistoryBuf<Event, EVENT_LOG_SIZE>,
    overflow_count: u32,
}

impl EventLog {
    /// Create a new empty event log
    pub const fn new() -> Self {
        Self {
            buffer: HistoryBuf::new(),
            overflow_count: 0,
        }
    }

    /// Push an event to the buffer
    pub fn push(&mut self, event: Event) {
        if self.buffer.len() == EVENT_LOG_SIZE {
            self.overflow_count = self.overflow_count.saturating_add(1);
        }
        self.buffer.write(event);
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    /// Return the number of events lost due to buffer overflow
    pub fn overflow_count(&self) -> u32 {
        self.overflow_count
    }

    /// Most recent event
    pub fn last(&self) -> Option<&Event> {
        self.buffer.recent()
    }

    /// Iterate over events in oldest-first order
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.buffer.oldest_ordered()
    }

    /// Drain all events, returning them in oldest-first order
    pub fn drain(&mut self) -> Vec<Event, EVENT_LOG_SIZE> {
        let mut result = Vec::new();
        for event in self.buffer.oldest_ordered() {
            let _ = result.push(*event);
        }
        self.buffer.clear();
        result
    }

    /// Clear all events
    ///
    /// Does not reset overflow_count.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}
