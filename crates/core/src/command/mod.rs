//! Command types
//!
//! A command arrives as an opcode, a sequence number and a single argument
//! word. The sequence number is echoed back in the [`CommandAck`] so the
//! sender can match responses to requests.

use crate::blink::OnOff;

/// Command opcode
pub type Opcode = u32;

/// Known command opcodes
pub mod opcodes {
    use super::Opcode;

    /// Enable (arg != 0) or disable (arg == 0) blinking
    pub const BLINKING_ON_OFF: Opcode = 0x0100;
}

/// Outcome reported back to the command source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResponse {
    /// Command executed
    Ok,
    /// Opcode not handled by this component
    InvalidOpcode,
}

impl CommandResponse {
    pub fn as_str(self) -> &'static str {
        match self {
            CommandResponse::Ok => "OK",
            CommandResponse::InvalidOpcode => "INVALID_OPCODE",
        }
    }
}

/// Raw command as delivered by the command source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandRequest {
    pub opcode: Opcode,
    pub seq: u32,
    pub arg: u32,
}

impl CommandRequest {
    pub const fn new(opcode: Opcode, seq: u32, arg: u32) -> Self {
        Self { opcode, seq, arg }
    }
}

/// Acknowledgement for a [`CommandRequest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandAck {
    pub opcode: Opcode,
    pub seq: u32,
    pub response: CommandResponse,
}

impl CommandAck {
    /// Build the acknowledgement for `request`
    pub fn for_request(request: &CommandRequest, response: CommandResponse) -> Self {
        Self {
            opcode: request.opcode,
            seq: request.seq,
            response,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.response == CommandResponse::Ok
    }
}

/// Decoded blink command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkCommand {
    /// Turn blinking on or off
    BlinkingOnOff(OnOff),
}

impl BlinkCommand {
    /// Decode a raw request
    ///
    /// The enable/disable payload is a plain boolean, so any argument value
    /// decodes (non-zero means ON). Only the opcode can be rejected.
    pub fn decode(request: &CommandRequest) -> Result<Self, CommandResponse> {
        match request.opcode {
            opcodes::BLINKING_ON_OFF => Ok(BlinkCommand::BlinkingOnOff(OnOff::from(
                request.arg != 0,
            ))),
            _ => Err(CommandResponse::InvalidOpcode),
        }
    }

    pub fn opcode(&self) -> Opcode {
        match self {
            BlinkCommand::BlinkingOnOff(_) => opcodes::BLINKING_ON_OFF,
        }
    }
}
