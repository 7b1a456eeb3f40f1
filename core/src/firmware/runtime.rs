use crate::core::{SocPort, VideoStatus};
use crate::display::{DisplayMode, DisplayModeController};
use crate::firmware::bringup::{self, BringupError, ClockWait};
use crate::input::{ButtonEvent, InputDebouncer};

/// Result of one [`Firmware::poll`] iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollReport {
    /// Loop counter before this iteration (starts at 0, wraps).
    pub iteration: u32,
    pub status: VideoStatus,
    pub event: Option<ButtonEvent>,
    /// Display mode after the event was handled.
    pub mode: DisplayMode,
}

/// The firmware's control loop state.
///
/// Owns the display controller and the button debouncer; the SoC is passed
/// in on every call. Every operation takes `&mut self`, so there is never
/// more than one tick or mode change in flight.
#[derive(Debug, Clone, Default)]
pub struct Firmware {
    display: DisplayModeController,
    debouncer: InputDebouncer,
    iteration: u32,
}

impl Firmware {
    /// Firmware starting in the default (scaled) mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Firmware starting in `mode` instead of the default.
    pub fn with_mode(mode: DisplayMode) -> Self {
        Self {
            display: DisplayModeController::with_mode(mode),
            ..Self::default()
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.display.mode()
    }

    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    pub fn debouncer(&self) -> &InputDebouncer {
        &self.debouncer
    }

    /// Bring the video pipeline up: wait for the camera clock, start the
    /// frame-buffer streams and program the initial display mode.
    pub fn boot<P: SocPort + ?Sized>(
        &mut self,
        port: &mut P,
        clock_wait: ClockWait,
    ) -> Result<(), BringupError> {
        let hz = bringup::wait_for_capture_clock(port, clock_wait)?;
        log::info!("camera clock: {hz} Hz");

        bringup::configure_frame_streams(port);

        self.display.apply_current(port);
        log::info!("display mode: {}", self.display.mode());
        Ok(())
    }

    /// Run one loop iteration.
    pub fn poll<P: SocPort + ?Sized>(&mut self, port: &mut P) -> PollReport {
        let iteration = self.iteration;
        self.iteration = self.iteration.wrapping_add(1);

        let status = port.latch_video_status();
        log::debug!("counter {iteration}: {status}");

        let event = self.debouncer.sample(port.read_button_raw());
        match event {
            Some(ButtonEvent::CameraModeSwitch) => {
                log::info!("short press: switching camera mode");
                port.signal_camera_mode_switch();
            }
            Some(ButtonEvent::ToggleDisplay) => {
                let mode = self.display.toggle(port);
                log::info!("long press: display mode {mode}");
            }
            None => {}
        }

        PollReport {
            iteration,
            status,
            event,
            mode: self.display.mode(),
        }
    }
}
