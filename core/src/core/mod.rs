pub mod port;

pub use port::{DisplayPort, SocPort, StreamChannel, StreamConfig, VideoStatus};
