//! Command Handler
//!
//! Routes command requests to the LED component.
//!
//! # Supported Commands
//!
//! - **BLINKING_ON_OFF** (`0x0100`): arg != 0 enables blinking, arg == 0 disables
//!
//! # Command Flow
//!
//! 1. Command source delivers a `CommandRequest` (opcode, seq, arg)
//! 2. CommandHandler decodes the opcode
//! 3. Handler executes the command on the component
//! 4. Handler returns a `CommandAck` echoing opcode and seq
//!
//! Unknown opcodes are answered with `INVALID_OPCODE` and logged as a
//! warning event. Blink commands themselves have no failure path.

use crate::core::event_log::EventKind;
use crate::devices::led::LedComponent;
use pico_blink_core::command::{BlinkCommand, CommandAck, CommandRequest};
use pico_blink_core::traits::OutputSink;

/// Command handler for LED commands
#[derive(Default)]
pub struct CommandHandler {
    handled: u32,
    rejected: u32,
}

impl CommandHandler {
    /// Create a new command handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one command request
    pub fn handle_command<O: OutputSink>(
        &mut self,
        component: &mut LedComponent<O>,
        request: &CommandRequest,
    ) -> CommandAck {
        crate::log_debug!(
            "Received command: opcode={} seq={}",
            request.opcode,
            request.seq
        );

        let response = match BlinkCommand::decode(request) {
            Ok(BlinkCommand::BlinkingOnOff(state)) => component.set_blinking(state),
            Err(response) => {
                self.rejected = self.rejected.saturating_add(1);
                component
                    .telemetry_mut()
                    .emit(EventKind::InvalidOpcode(request.opcode));
                response
            }
        };

        self.handled = self.handled.saturating_add(1);
        CommandAck::for_request(request, response)
    }

    /// Requests seen, including rejected ones
    pub fn handled(&self) -> u32 {
        self.handled
    }

    /// Requests rejected for an unknown opcode
    pub fn rejected(&self) -> u32 {
        self.rejected
    }
}
