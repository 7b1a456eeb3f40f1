pub mod bringup;
pub mod runtime;

pub use bringup::{BringupError, CAPTURE_CLOCK_MIN_HZ, ClockWait};
pub use runtime::{Firmware, PollReport};
