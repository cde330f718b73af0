//! Integration tests: occupancy-gated light hysteresis.

use intelligent_office::error::{ActuatorError, Error};
use intelligent_office::{OfficeConfig, RoomController, RoomState, pins};

use crate::mock_hw::MockOffice;

fn light(on: bool) -> RoomState {
    RoomState {
        light_on: on,
        ..RoomState::default()
    }
}

fn occupied(lux: f32) -> MockOffice {
    let mut hw = MockOffice::new();
    hw.set_input(pins::INFRARED_Q1_PIN, true);
    hw.lux = lux;
    hw
}

fn run(hw: &mut MockOffice, state: RoomState) -> RoomState {
    let mut ctl = RoomController::with_state(hw, OfficeConfig::default(), state);
    ctl.manage_light_level().unwrap();
    ctl.state()
}

#[test]
fn dark_occupied_room_turns_light_on() {
    let mut hw = occupied(499.0);
    assert!(run(&mut hw, light(false)).light_on);
    assert_eq!(hw.writes_to(pins::LED_PIN), vec![true]);
}

#[test]
fn bright_occupied_room_turns_light_off() {
    let mut hw = occupied(551.0);
    assert!(!run(&mut hw, light(true)).light_on);
    assert_eq!(hw.writes_to(pins::LED_PIN), vec![false]);
}

#[test]
fn bright_room_with_light_off_does_nothing() {
    let mut hw = occupied(551.0);
    assert!(!run(&mut hw, light(false)).light_on);
    assert!(hw.calls.is_empty());
}

#[test]
fn dark_room_with_light_on_does_nothing() {
    let mut hw = occupied(499.0);
    assert!(run(&mut hw, light(true)).light_on);
    assert!(hw.calls.is_empty());
}

#[test]
fn inside_band_holds_either_state() {
    for lux in [500.0, 520.0, 550.0] {
        for on in [true, false] {
            let mut hw = occupied(lux);
            assert_eq!(run(&mut hw, light(on)).light_on, on, "lux={lux} on={on}");
            assert!(hw.calls.is_empty());
        }
    }
}

#[test]
fn empty_room_forces_light_off_regardless_of_lux() {
    let mut hw = MockOffice::new();
    hw.lux = 10.0;
    assert!(!run(&mut hw, light(true)).light_on);
    assert_eq!(hw.writes_to(pins::LED_PIN), vec![false]);
    assert_eq!(hw.lux_reads, 0);
}

#[test]
fn empty_room_with_light_off_does_nothing() {
    let mut hw = MockOffice::new();
    assert!(!run(&mut hw, light(false)).light_on);
    assert!(hw.calls.is_empty());
    assert_eq!(hw.lux_reads, 0);
}

#[test]
fn any_single_quadrant_counts_as_occupied() {
    for pin in [
        pins::INFRARED_Q1_PIN,
        pins::INFRARED_Q2_PIN,
        pins::INFRARED_Q3_PIN,
        pins::INFRARED_Q4_PIN,
    ] {
        let mut hw = MockOffice::new();
        hw.set_input(pin, true);
        hw.lux = 100.0;
        assert!(run(&mut hw, light(false)).light_on, "pin {pin}");
    }
}

#[test]
fn repeated_calls_command_led_once() {
    let mut hw = occupied(200.0);
    let mut ctl = RoomController::with_defaults(&mut hw);
    ctl.manage_light_level().unwrap();
    ctl.manage_light_level().unwrap();
    assert!(ctl.light_on());
    drop(ctl);
    assert_eq!(hw.writes_to(pins::LED_PIN), vec![true]);
}

#[test]
fn leaving_the_room_overrides_band() {
    let mut hw = occupied(520.0);
    let mut ctl = RoomController::with_state(&mut hw, OfficeConfig::default(), light(true));
    ctl.manage_light_level().unwrap();
    assert!(ctl.light_on());
    ctl.hw_mut().set_input(pins::INFRARED_Q1_PIN, false);
    ctl.manage_light_level().unwrap();
    assert!(!ctl.light_on());
}

#[test]
fn led_failure_keeps_light_state() {
    let mut hw = occupied(100.0);
    hw.fail_writes = true;
    let mut ctl = RoomController::with_defaults(&mut hw);
    assert_eq!(
        ctl.manage_light_level(),
        Err(Error::Actuator(ActuatorError::GpioWriteFailed))
    );
    assert!(!ctl.light_on());
}

#[test]
fn configured_lux_band_is_used() {
    let config = OfficeConfig {
        light_on_below_lux: 300.0,
        light_off_above_lux: 400.0,
        ..OfficeConfig::default()
    };
    config.validate().unwrap();
    let mut ctl = RoomController::new(occupied(350.0), config);
    assert_eq!(ctl.config().light_on_below_lux, 300.0);

    // 350 lx sits inside the configured band, though below the default 500.
    ctl.manage_light_level().unwrap();
    assert!(!ctl.light_on());

    ctl.hw_mut().lux = 299.0;
    ctl.manage_light_level().unwrap();
    assert!(ctl.light_on());

    ctl.hw_mut().lux = 401.0;
    ctl.manage_light_level().unwrap();
    assert!(!ctl.light_on());

    let hw = ctl.into_inner();
    assert_eq!(hw.writes_to(pins::LED_PIN), vec![true, false]);
}
