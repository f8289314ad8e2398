//! Blink state machine handlers
//!
//! Pure functions over an explicitly owned [`BlinkState`]. Each handler runs
//! to completion and calls its collaborators synchronously. Callers are
//! responsible for serialising tick, command and parameter-change requests.
//!
//! # Toggle cadence
//!
//! The interval is measured in ticks, not wall time. A toggle happens when
//! `toggle_counter == 0`, then the counter advances modulo the interval, so
//! the first tick after enabling always toggles.

use super::error::ConfigurationFault;
use super::state::{BlinkState, Logic, OnOff};
use crate::command::CommandResponse;
use crate::parameters::blink::BLINK_INTERVAL;
use crate::traits::{OutputSink, ParamValid, ParameterProvider, TelemetrySink};

/// Handle one timing tick
///
/// # Errors
///
/// Returns [`ConfigurationFault::InvalidInterval`] if the provider reports the
/// interval as invalid or uninitialized. State is left untouched in that case.
pub fn on_tick<P, O, T>(
    state: &mut BlinkState,
    params: &P,
    output: Option<&mut O>,
    telemetry: &mut T,
) -> Result<(), ConfigurationFault>
where
    P: ParameterProvider + ?Sized,
    O: OutputSink + ?Sized,
    T: TelemetrySink + ?Sized,
{
    let (interval, validity) = params.blink_interval();
    if validity != ParamValid::Valid {
        return Err(ConfigurationFault::InvalidInterval(validity));
    }

    // A zero interval means "not blinking" for toggle purposes
    if state.blinking && interval != 0 {
        if state.toggle_counter == 0 {
            state.output = state.output.toggled();
            state.transitions = state.transitions.wrapping_add(1);
            telemetry.record_transition_count(state.transitions);

            if let Some(sink) = output {
                sink.set_level(state.output.into());
            }

            telemetry.notify_state_changed(state.output);
        }

        // toggle_counter < previous interval <= u32::MAX, so +1 cannot overflow
        state.toggle_counter = (state.toggle_counter + 1) % interval;
    } else if state.output == OnOff::On {
        if let Some(sink) = output {
            sink.set_level(Logic::Low);
        }

        state.output = OnOff::Off;
        telemetry.notify_state_changed(state.output);
    }

    Ok(())
}

/// Handle an enable/disable request
///
/// Always resets the toggle counter so the next enable starts a fresh
/// half-period. The output itself is not touched here; a disabled controller
/// forces the line OFF on its next tick.
pub fn set_blinking<T>(state: &mut BlinkState, enabled: bool, telemetry: &mut T) -> CommandResponse
where
    T: TelemetrySink + ?Sized,
{
    state.toggle_counter = 0;
    state.blinking = enabled;

    telemetry.notify_mode_changed(enabled);
    telemetry.record_blinking_mode(enabled);

    CommandResponse::Ok
}

/// Handle a parameter-change notification
///
/// Only reports the new interval. The toggle counter is deliberately left as
/// is: the new interval applies through the modulo on the next tick.
///
/// # Errors
///
/// - [`ConfigurationFault::UnknownParameter`] if `id` is not the blink interval
/// - [`ConfigurationFault::InvalidInterval`] if the provider broke its promise
///   to notify only with validated values
pub fn on_parameter_changed<P, T>(
    params: &P,
    id: &str,
    telemetry: &mut T,
) -> Result<u32, ConfigurationFault>
where
    P: ParameterProvider + ?Sized,
    T: TelemetrySink + ?Sized,
{
    if id != BLINK_INTERVAL {
        return Err(ConfigurationFault::UnknownParameter);
    }

    let (interval, validity) = params.blink_interval();
    if validity != ParamValid::Valid {
        return Err(ConfigurationFault::InvalidInterval(validity));
    }

    telemetry.notify_interval_changed(interval);
    Ok(interval)
}
