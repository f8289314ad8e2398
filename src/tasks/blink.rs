//! LED blink task (Embassy version)
//!
//! Drives `LedComponent::tick` from a fixed-rate ticker and services
//! commands and parameter writes from a request channel. Ticks and requests
//! are handled one at a time in this single loop, so the component never
//! sees concurrent entry.

use crate::communication::command::CommandHandler;
use crate::devices::led::LedComponent;
use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver};
use embassy_time::{Duration, Ticker};
use pico_blink_core::command::{CommandAck, CommandRequest};
use pico_blink_core::traits::OutputSink;

/// Request queue depth
pub const REQUEST_QUEUE_DEPTH: usize = 4;

/// Request delivered to the blink task
#[derive(Debug, Clone, Copy)]
pub enum BlinkRequest {
    /// Command from the command source
    Command(CommandRequest),
    /// Parameter write; validated by the store before the controller is notified
    SetParameter { name: &'static str, value: u32 },
}

/// Channel type carrying [`BlinkRequest`]s
pub type BlinkRequestChannel = Channel<CriticalSectionRawMutex, BlinkRequest, REQUEST_QUEUE_DEPTH>;

/// Receiving end of a [`BlinkRequestChannel`]
pub type BlinkRequestReceiver<'a> =
    Receiver<'a, CriticalSectionRawMutex, BlinkRequest, REQUEST_QUEUE_DEPTH>;

/// Global request channel for the LED task
pub static BLINK_REQUESTS: BlinkRequestChannel = Channel::new();

/// Owns the component for the lifetime of the task
pub struct BlinkRunner<O> {
    component: LedComponent<O>,
    commands: CommandHandler,
}

impl<O: OutputSink> BlinkRunner<O> {
    pub fn new(component: LedComponent<O>) -> Self {
        Self {
            component,
            commands: CommandHandler::new(),
        }
    }

    pub fn component(&self) -> &LedComponent<O> {
        &self.component
    }

    pub fn commands(&self) -> &CommandHandler {
        &self.commands
    }

    /// Forward one timing tick to the component
    pub fn on_tick(&mut self) {
        self.component.tick();
    }

    /// Apply one request
    ///
    /// Returns the acknowledgement for commands. Rejected parameter writes are
    /// logged and leave the stored value untouched.
    pub fn on_request(&mut self, request: BlinkRequest) -> Option<CommandAck> {
        match request {
            BlinkRequest::Command(request) => {
                let ack = self.commands.handle_command(&mut self.component, &request);
                crate::log_debug!("Command seq={} -> {}", ack.seq, ack.response.as_str());
                Some(ack)
            }
            BlinkRequest::SetParameter { name, value } => {
                if let Err(e) = self.component.set_parameter(name, value) {
                    crate::log_warn!("Rejected {} = {}: {}", name, value, e.as_str());
                }
                None
            }
        }
    }

    /// Serve ticks and requests forever
    pub async fn run(&mut self, period: Duration, requests: BlinkRequestReceiver<'_>) {
        let mut ticker = Ticker::every(period);

        crate::log_info!("LED task started, tick {} ms", period.as_millis());

        loop {
            match select(ticker.next(), requests.receive()).await {
                Either::First(()) => self.on_tick(),
                Either::Second(request) => {
                    self.on_request(request);
                }
            }
        }
    }
}

/// Run the blink loop forever
///
/// # Arguments
///
/// * `component` - LED component with parameters already initialized
/// * `period` - Tick period
/// * `requests` - Command/parameter request receiver
pub async fn run<O: OutputSink>(
    component: LedComponent<O>,
    period: Duration,
    requests: BlinkRequestReceiver<'_>,
) {
    BlinkRunner::new(component).run(period, requests).await;
}

/// LED task for the Pico 2 W
///
/// Ticks every `LED_TICK_MS` milliseconds (build-time, default 100).
#[cfg(feature = "pico2_w")]
#[embassy_executor::task]
pub async fn led_task(
    component: LedComponent<crate::devices::led::GpioOutput<crate::platform::rp2350::Rp2350Gpio>>,
) {
    let period = Duration::from_millis(crate::core::config::tick_period_ms());
    run(component, period, BLINK_REQUESTS.receiver()).await;
}
