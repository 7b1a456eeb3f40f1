pub mod core;
pub mod display;
pub mod firmware;
pub mod input;

pub mod prelude {
    pub use crate::core::{DisplayPort, SocPort, StreamChannel, StreamConfig, VideoStatus};
    pub use crate::display::{DisplayMode, DisplayModeController, FramerGeometry};
    pub use crate::firmware::{BringupError, ClockWait, Firmware, PollReport};
    pub use crate::input::{ButtonEvent, InputDebouncer};
}
