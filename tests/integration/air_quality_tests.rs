//! Integration tests: gas alarm and the full control cycle.

use intelligent_office::error::{ActuatorError, Error, SensorError};
use intelligent_office::{OfficeConfig, RoomController, RoomState, pins};

use crate::mock_hw::{HwCall, MockOffice, weekday_at};

#[test]
fn gas_detected_sounds_buzzer() {
    let mut hw = MockOffice::new();
    hw.set_input(pins::GAS_PIN, false);
    let mut ctl = RoomController::with_defaults(&mut hw);
    ctl.monitor_air_quality().unwrap();
    assert!(ctl.buzzer_on());
    drop(ctl);
    assert_eq!(hw.writes_to(pins::BUZZER_PIN), vec![true]);
}

#[test]
fn clean_air_silences_buzzer() {
    let mut hw = MockOffice::new();
    let state = RoomState {
        buzzer_on: true,
        ..RoomState::default()
    };
    let mut ctl = RoomController::with_state(&mut hw, OfficeConfig::default(), state);
    ctl.monitor_air_quality().unwrap();
    assert!(!ctl.buzzer_on());
    drop(ctl);
    assert_eq!(hw.writes_to(pins::BUZZER_PIN), vec![false]);
}

#[test]
fn buzzer_written_every_cycle() {
    let mut hw = MockOffice::new();
    hw.set_input(pins::GAS_PIN, false);
    let mut ctl = RoomController::with_defaults(&mut hw);
    for _ in 0..3 {
        ctl.monitor_air_quality().unwrap();
    }
    ctl.hw_mut().set_input(pins::GAS_PIN, true);
    ctl.monitor_air_quality().unwrap();
    drop(ctl);
    assert_eq!(hw.writes_to(pins::BUZZER_PIN), vec![true, true, true, false]);
}

#[test]
fn tick_runs_every_routine_in_order() {
    let mut hw = MockOffice::new();
    hw.now = weekday_at(9);
    hw.set_input(pins::INFRARED_Q3_PIN, true);
    hw.lux = 120.0;
    let mut ctl = RoomController::with_defaults(&mut hw);
    ctl.tick().unwrap();
    assert_eq!(
        ctl.state(),
        RoomState {
            blinds_open: true,
            light_on: true,
            buzzer_on: false,
        }
    );
    drop(ctl);
    assert_eq!(
        hw.calls,
        vec![
            HwCall::Write {
                pin: pins::BUZZER_PIN,
                high: false
            },
            HwCall::SetAngle(12),
            HwCall::Write {
                pin: pins::LED_PIN,
                high: true
            },
        ]
    );
}

#[test]
fn second_tick_only_rewrites_buzzer() {
    let mut hw = MockOffice::new();
    hw.now = weekday_at(9);
    hw.set_input(pins::INFRARED_Q1_PIN, true);
    hw.lux = 120.0;
    let mut ctl = RoomController::with_defaults(&mut hw);
    ctl.tick().unwrap();
    ctl.tick().unwrap();
    drop(ctl);
    assert_eq!(hw.calls.len(), 4);
    assert_eq!(hw.writes_to(pins::BUZZER_PIN), vec![false, false]);
}

#[test]
fn clock_fault_does_not_starve_lighting() {
    let mut hw = MockOffice::new();
    hw.fail_clock = true;
    hw.set_input(pins::INFRARED_Q2_PIN, true);
    hw.lux = 10.0;
    let mut ctl = RoomController::with_defaults(&mut hw);
    for _ in 0..3 {
        assert_eq!(
            ctl.tick(),
            Err(Error::Sensor(SensorError::ClockNotSet))
        );
        assert!(ctl.light_on());
    }
    drop(ctl);
    assert_eq!(hw.writes_to(pins::LED_PIN), vec![true]);
    assert_eq!(hw.writes_to(pins::BUZZER_PIN), vec![false, false, false]);
    assert!(hw.servo_calls().is_empty());
}

#[test]
fn tick_reports_first_error_after_running_everything() {
    let mut hw = MockOffice::new();
    hw.fail_clock = true;
    hw.fail_writes = true;
    hw.set_input(pins::INFRARED_Q1_PIN, true);
    hw.lux = 10.0;
    let mut ctl = RoomController::with_defaults(&mut hw);
    assert_eq!(
        ctl.tick(),
        Err(Error::Actuator(ActuatorError::GpioWriteFailed))
    );
    drop(ctl);
    assert_eq!(hw.lux_reads, 1);
}
