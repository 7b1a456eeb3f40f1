pub mod debouncer;

pub use debouncer::{ButtonEvent, InputDebouncer};
