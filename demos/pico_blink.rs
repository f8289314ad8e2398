//! Pico 2 W LED blink firmware
//!
//! Drives the onboard LED through the parameter-driven blink component.
//! Blinking is enabled at start-up with the default `BLINK_INTERVAL`; the
//! main task then alternates between a fast and a slow interval so both the
//! command and parameter paths are exercised on hardware.
//!
//! # Hardware
//!
//! Raspberry Pi Pico 2 W - LED on GPIO25
//!
//! # Usage
//!
//! ```bash
//! # Tick period defaults to 100 ms
//! LED_TICK_MS=50 cargo build --release --features pico2_w --example pico_blink \
//!     --target thumbv8m.main-none-eabihf
//! probe-rs run --chip RP2350 target/thumbv8m.main-none-eabihf/release/examples/pico_blink
//! ```

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_time::Timer;
use pico_blink::devices::{GpioOutput, LedComponent};
use pico_blink::platform::rp2350::Rp2350Gpio;
use pico_blink::tasks::blink::{led_task, BlinkRequest, BLINK_REQUESTS};
use pico_blink_core::command::{opcodes, CommandRequest};
use pico_blink_core::parameters::BLINK_INTERVAL;
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // GPIO25 is the onboard LED on Pico 2 W
    let led = Output::new(p.PIN_25, Level::Low);
    let output = GpioOutput::new(Rp2350Gpio::new(led));

    let component = match LedComponent::new(Some(output)) {
        Ok(component) => component,
        Err(e) => {
            defmt::error!("Parameter registration failed: {}", e.as_str());
            return;
        }
    };

    spawner.spawn(led_task(component).unwrap());

    let requests = BLINK_REQUESTS.sender();
    requests
        .send(BlinkRequest::Command(CommandRequest::new(
            opcodes::BLINKING_ON_OFF,
            1,
            1,
        )))
        .await;

    loop {
        Timer::after_secs(10).await;
        requests
            .send(BlinkRequest::SetParameter {
                name: BLINK_INTERVAL,
                value: 2,
            })
            .await;

        Timer::after_secs(10).await;
        requests
            .send(BlinkRequest::SetParameter {
                name: BLINK_INTERVAL,
                value: 10,
            })
            .await;
    }
}
