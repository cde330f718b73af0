//! Domain types shared by the controller and its callers.

use crate::error::Error;

/// One of the four fixed zones of the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Self::Q1, Self::Q2, Self::Q3, Self::Q4];

    /// Zero-based index into [`PinAssignment::infrared`](crate::config::PinAssignment).
    pub const fn index(self) -> usize {
        match self {
            Self::Q1 => 0,
            Self::Q2 => 1,
            Self::Q3 => 2,
            Self::Q4 => 3,
        }
    }

    /// One-based channel number as printed on the installation plan.
    pub const fn channel(self) -> u8 {
        self.index() as u8 + 1
    }
}

impl TryFrom<u8> for Quadrant {
    type Error = Error;

    fn try_from(channel: u8) -> Result<Self, Self::Error> {
        match channel {
            1 => Ok(Self::Q1),
            2 => Ok(Self::Q2),
            3 => Ok(Self::Q3),
            4 => Ok(Self::Q4),
            other => Err(Error::InvalidChannel(other)),
        }
    }
}

/// Last commanded actuator state.
///
/// Nothing here is read back from hardware: each flag changes only after
/// the matching actuator write succeeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoomState {
    pub blinds_open: bool,
    pub light_on: bool,
    pub buzzer_on: bool,
}
