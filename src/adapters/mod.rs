//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements          | Connects to                     |
//! |------------|---------------------|---------------------------------|
//! | `gpio`     | DigitalIoPort       | embedded-hal Input/OutputPin    |
//! | `servo`    | ServoPort           | embedded-hal SetDutyCycle       |
//! | `time`     | ClockPort           | Host local wall clock           |
//! | `hardware` | all four ports      | Composition of the above        |

pub mod gpio;
pub mod hardware;
pub mod servo;
pub mod time;
