//! Weekday blind schedule.
//!
//! Maps a local date-time to the blind position the office wants, or to
//! "no opinion".  Weekends have no opinion at any hour, so blinds left
//! open on Friday evening stay open until Monday.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// Blind position as commanded to the servo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlindPosition {
    Open,
    Closed,
}

/// Opening window on weekdays: `[open_hour, close_hour)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlindSchedule {
    pub open_hour: u8,
    pub close_hour: u8,
}

impl BlindSchedule {
    pub fn new(open_hour: u8, close_hour: u8) -> Self {
        Self {
            open_hour,
            close_hour,
        }
    }

    /// Desired blind position at `now`, or `None` when the schedule does
    /// not drive the blinds (weekends, and weekday hours before opening).
    pub fn target(&self, now: &NaiveDateTime) -> Option<BlindPosition> {
        if is_weekend(now.weekday()) {
            return None;
        }
        let hour = now.hour() as u8;
        if hour >= self.close_hour {
            Some(BlindPosition::Closed)
        } else if hour >= self.open_hour {
            Some(BlindPosition::Open)
        } else {
            None
        }
    }
}

fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}
