//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the rules for the office: occupancy-driven
//! lighting, the weekday blind schedule, and the gas alarm.  All
//! interaction with hardware happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod controller;
pub mod model;
pub mod ports;
