pub mod board;
pub mod registry;
pub mod script;
pub mod simulated;

pub use board::BoardProfile;
pub use script::{ButtonLevel, ButtonScript, ScriptSegment};
pub use simulated::{RegisterWrite, SimulatedSoc, StreamField, StreamRegisters};
