//! Blink state types
//!
//! The controller's entire mutable state lives in [`BlinkState`]. It is owned
//! by whoever drives the controller and handed by `&mut` to the handlers in
//! [`super::handlers`].

/// Logical on/off value of the output line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnOff {
    /// Line driven active
    On,
    /// Line released
    #[default]
    Off,
}

impl OnOff {
    /// Return the opposite state
    pub fn toggled(self) -> Self {
        match self {
            OnOff::On => OnOff::Off,
            OnOff::Off => OnOff::On,
        }
    }

    /// Short name for logs and event text
    pub fn as_str(self) -> &'static str {
        match self {
            OnOff::On => "ON",
            OnOff::Off => "OFF",
        }
    }
}

impl From<bool> for OnOff {
    fn from(on: bool) -> Self {
        if on {
            OnOff::On
        } else {
            OnOff::Off
        }
    }
}

impl From<OnOff> for bool {
    fn from(state: OnOff) -> Self {
        state == OnOff::On
    }
}

impl core::fmt::Display for OnOff {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Electrical level written to an output sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Logic {
    /// Logic level 1
    High,
    /// Logic level 0
    Low,
}

impl From<OnOff> for Logic {
    fn from(state: OnOff) -> Self {
        match state {
            OnOff::On => Logic::High,
            OnOff::Off => Logic::Low,
        }
    }
}

/// Controller mode derived from the `blinking` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkMode {
    /// Output held OFF
    Disabled,
    /// Output toggles every `interval` ticks
    Blinking,
}

/// Blink controller state
///
/// Created once at component start-up and mutated only by the tick and
/// mode-change handlers.
///
/// # Invariants
///
/// - `toggle_counter < interval` after every tick with a non-zero interval
/// - `transitions` never decreases, except by wrapping at `u32::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlinkState {
    pub(crate) blinking: bool,
    pub(crate) output: OnOff,
    pub(crate) toggle_counter: u32,
    pub(crate) transitions: u32,
}

impl BlinkState {
    /// Initial state: disabled, output OFF, counters at zero
    pub const fn new() -> Self {
        Self {
            blinking: false,
            output: OnOff::Off,
            toggle_counter: 0,
            transitions: 0,
        }
    }

    /// Whether periodic toggling is enabled
    pub fn is_blinking(&self) -> bool {
        self.blinking
    }

    /// Blink mode derived from the enable flag
    pub fn mode(&self) -> BlinkMode {
        if self.blinking {
            BlinkMode::Blinking
        } else {
            BlinkMode::Disabled
        }
    }

    /// Current logical output value
    pub fn output(&self) -> OnOff {
        self.output
    }

    /// Ticks elapsed since the last toggle (modulo the interval)
    pub fn toggle_counter(&self) -> u32 {
        self.toggle_counter
    }

    /// Total ON/OFF transitions since start
    pub fn transitions(&self) -> u32 {
        self.transitions
    }
}
