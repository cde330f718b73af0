//! Intelligent office controller library.
//!
//! Decision logic for a four-quadrant room: occupancy-driven lighting
//! with a lux hysteresis band, a weekday blind schedule, and a gas alarm.
//! Hardware is reached only through the port traits in [`app::ports`];
//! [`adapters`] wires those ports to `embedded-hal` peripherals.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;
pub mod error;
pub mod pins;

pub use app::controller::RoomController;
pub use app::model::{Quadrant, RoomState};
pub use config::OfficeConfig;
pub use error::{Error, Result};
