//! Boot-time setup that runs before the control loop: wait for the camera
//! clock, then start both frame-buffer DMA engines.

use crate::core::{SocPort, StreamChannel, StreamConfig};

/// Lowest camera pixel clock accepted as "camera present" (26.5 MHz).
pub const CAPTURE_CLOCK_MIN_HZ: u32 = 26_500_000;

/// How long [`wait_for_capture_clock`] may poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockWait {
    /// Poll until the clock appears. This is what the target does.
    Forever,
    /// Give up after this many polls.
    Polls(u32),
}

/// Errors that can stop bring-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BringupError {
    /// The camera clock stayed at or below [`CAPTURE_CLOCK_MIN_HZ`] for the
    /// whole poll budget.
    CaptureClockTimeout { polls: u32, last_hz: u32 },
}

impl std::fmt::Display for BringupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CaptureClockTimeout { polls, last_hz } => write!(
                f,
                "no camera clock after {polls} polls (last reading {last_hz} Hz, need > {CAPTURE_CLOCK_MIN_HZ} Hz)"
            ),
        }
    }
}

impl std::error::Error for BringupError {}

/// Wait for the camera's pixel clock. Returns the accepted frequency.
///
/// Only a first reading of exactly 0 starts the wait. Any nonzero first
/// reading is accepted as-is, even below the threshold; the wait loop then
/// requires a reading strictly above [`CAPTURE_CLOCK_MIN_HZ`].
pub fn wait_for_capture_clock<P: SocPort + ?Sized>(
    port: &mut P,
    budget: ClockWait,
) -> Result<u32, BringupError> {
    let first = port.read_capture_frequency();
    if first != 0 {
        return Ok(first);
    }

    log::info!("waiting for clock from camera");
    let mut polls: u32 = 0;
    let mut last_hz = first;
    loop {
        if let ClockWait::Polls(max) = budget
            && polls >= max
        {
            return Err(BringupError::CaptureClockTimeout { polls, last_hz });
        }

        last_hz = port.read_capture_frequency();
        polls = polls.saturating_add(1);
        log::debug!("detected frequency: {last_hz} Hz");

        if last_hz > CAPTURE_CLOCK_MIN_HZ {
            log::info!("camera clock detected at {last_hz} Hz after {polls} polls");
            return Ok(last_hz);
        }
    }
}

/// Start both DMA engines on the shared frame buffer, reader first.
pub fn configure_frame_streams<P: SocPort + ?Sized>(port: &mut P) {
    for channel in [StreamChannel::Reader, StreamChannel::Writer] {
        log::debug!("configuring {channel:?} stream: {:?}", StreamConfig::FRAME_BUFFER);
        port.configure_stream(channel, StreamConfig::FRAME_BUFFER);
    }
}
