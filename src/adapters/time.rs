//! Host wall-clock adapter.
//!
//! Implements [`ClockPort`] from the operating system's local time, for
//! controllers running on a Linux board without a separate RTC, and for
//! simulation.  Boards with a DS3231 supply their own adapter.

use chrono::{Datelike, Local, NaiveDateTime};

use crate::app::ports::ClockPort;
use crate::error::{Result, SensorError};

/// Timestamps before 2020-01-01 mean the clock was never set (no NTP yet).
const EARLIEST_PLAUSIBLE_YEAR: i32 = 2020;

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for SystemClock {
    fn now(&mut self) -> Result<NaiveDateTime> {
        let now = Local::now().naive_local();
        if now.year() < EARLIEST_PLAUSIBLE_YEAR {
            return Err(SensorError::ClockNotSet.into());
        }
        Ok(now)
    }
}
