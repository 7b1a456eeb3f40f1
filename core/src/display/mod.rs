pub mod controller;
pub mod mode;

pub use controller::DisplayModeController;
pub use mode::{DisplayMode, FramerGeometry, ParseDisplayModeError};
