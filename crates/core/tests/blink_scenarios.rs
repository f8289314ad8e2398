use pico_blink_core::blink::{handlers, BlinkController, BlinkState, Logic, OnOff};
use pico_blink_core::parameters::{BlinkParams, ParameterStore, BLINK_INTERVAL};
use pico_blink_core::traits::{
    MockOutput, MockParams, ParamValid, RecordingTelemetry, TelemetryEvent,
};

fn blinking_controller() -> (BlinkController<MockOutput>, RecordingTelemetry) {
    let mut led = BlinkController::new(Some(MockOutput::new()));
    let mut telemetry = RecordingTelemetry::new();
    led.set_blinking(true, &mut telemetry);
    telemetry.clear();
    (led, telemetry)
}

#[test]
fn one_transition_per_interval() {
    for k in 1..=40u32 {
        let (mut led, mut telemetry) = blinking_controller();
        let params = MockParams::new(k);

        for _ in 0..k {
            led.tick(&params, &mut telemetry).unwrap();
        }

        assert_eq!(led.state().transitions(), 1, "interval {}", k);
        assert_eq!(led.state().toggle_counter(), 0, "interval {}", k);
        assert_eq!(led.output().unwrap().write_count(), 1, "interval {}", k);
    }
}

#[test]
fn waveform_has_equal_half_periods() {
    let (mut led, mut telemetry) = blinking_controller();
    let params = MockParams::new(4);
    let mut levels = Vec::new();

    for _ in 0..16 {
        led.tick(&params, &mut telemetry).unwrap();
        levels.push(led.state().output());
    }

    let expected: Vec<OnOff> = [OnOff::On, OnOff::Off, OnOff::On, OnOff::Off]
        .iter()
        .flat_map(|s| [*s; 4])
        .collect();
    assert_eq!(levels, expected);
    assert_eq!(led.state().transitions(), 4);
}

#[test]
fn counter_stays_below_interval() {
    let (mut led, mut telemetry) = blinking_controller();
    let params = MockParams::new(7);

    for _ in 0..100 {
        led.tick(&params, &mut telemetry).unwrap();
        assert!(led.state().toggle_counter() < 7);
    }
}

#[test]
fn transitions_monotonic_across_commands() {
    let (mut led, mut telemetry) = blinking_controller();
    let mut params = MockParams::new(2);
    let mut last = 0;

    for step in 0..200u32 {
        match step % 23 {
            5 => {
                led.set_blinking(false, &mut telemetry);
            }
            11 => {
                led.set_blinking(true, &mut telemetry);
            }
            17 => params.set_interval(step % 4),
            _ => {}
        }

        led.tick(&params, &mut telemetry).unwrap();
        assert!(led.state().transitions() >= last);
        last = led.state().transitions();
    }
}

#[test]
fn enable_disable_enable_resets_counter() {
    let (mut led, mut telemetry) = blinking_controller();
    let params = MockParams::new(10);

    for _ in 0..6 {
        led.tick(&params, &mut telemetry).unwrap();
    }
    assert_eq!(led.state().toggle_counter(), 6);

    led.set_blinking(false, &mut telemetry);
    assert_eq!(led.state().toggle_counter(), 0);

    led.tick(&params, &mut telemetry).unwrap();
    led.set_blinking(true, &mut telemetry);
    assert_eq!(led.state().toggle_counter(), 0);

    // Fresh half-period: the first tick toggles straight away
    let before = led.state().transitions();
    led.tick(&params, &mut telemetry).unwrap();
    assert_eq!(led.state().transitions(), before + 1);
}

#[test]
fn re_enable_while_on_toggles_off_immediately() {
    let (mut led, mut telemetry) = blinking_controller();
    let params = MockParams::new(10);

    led.tick(&params, &mut telemetry).unwrap();
    assert_eq!(led.state().output(), OnOff::On);

    // Re-enable without an intervening disabled tick
    led.set_blinking(false, &mut telemetry);
    led.set_blinking(true, &mut telemetry);
    led.tick(&params, &mut telemetry).unwrap();

    assert_eq!(led.state().output(), OnOff::Off);
    assert_eq!(led.state().transitions(), 2);
}

#[test]
fn disable_while_on_produces_one_notice() {
    let (mut led, mut telemetry) = blinking_controller();
    let params = MockParams::new(3);

    led.tick(&params, &mut telemetry).unwrap();
    led.set_blinking(false, &mut telemetry);
    telemetry.clear();

    for _ in 0..5 {
        led.tick(&params, &mut telemetry).unwrap();
    }

    assert_eq!(
        telemetry.events(),
        &[TelemetryEvent::StateChanged(OnOff::Off)]
    );
    let output = led.output().unwrap();
    assert_eq!(output.low_writes(), 1);
    assert_eq!(output.level(), Some(Logic::Low));
}

#[test]
fn zero_interval_never_toggles() {
    let (mut led, mut telemetry) = blinking_controller();
    let params = MockParams::new(0);

    for _ in 0..20 {
        led.tick(&params, &mut telemetry).unwrap();
    }

    assert_eq!(led.state().transitions(), 0);
    assert_eq!(led.state().output(), OnOff::Off);
    assert!(telemetry.events().is_empty());
    assert_eq!(led.output().unwrap().write_count(), 0);
}

#[test]
fn store_backed_controller_follows_parameter_changes() {
    let mut store = ParameterStore::new();
    BlinkParams::register_defaults(&mut store).unwrap();
    store.set(BLINK_INTERVAL, 2).unwrap();

    let (mut led, mut telemetry) = blinking_controller();

    for _ in 0..4 {
        led.tick(&store, &mut telemetry).unwrap();
    }
    assert_eq!(led.state().transitions(), 2);

    store.set(BLINK_INTERVAL, 1).unwrap();
    assert_eq!(
        led.parameter_updated(&store, BLINK_INTERVAL, &mut telemetry),
        Ok(1)
    );

    for _ in 0..4 {
        led.tick(&store, &mut telemetry).unwrap();
    }
    assert_eq!(led.state().transitions(), 6);
    assert_eq!(telemetry.last_transition_count(), Some(6));
}

#[test]
fn raw_loaded_interval_faults_on_tick() {
    let mut store = ParameterStore::new();
    BlinkParams::register_defaults(&mut store).unwrap();
    store.load(BLINK_INTERVAL, u32::MAX).unwrap();

    let mut state = BlinkState::new();
    let mut telemetry = RecordingTelemetry::new();
    let result = handlers::on_tick::<_, MockOutput, _>(&mut state, &store, None, &mut telemetry);

    assert!(matches!(
        result,
        Err(pico_blink_core::blink::ConfigurationFault::InvalidInterval(
            ParamValid::Invalid
        ))
    ));
}
