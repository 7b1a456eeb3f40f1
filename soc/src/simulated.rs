//! Host-side model of the DiVA SoC's control/status registers.
//!
//! Only the registers the firmware touches are modelled: framer geometry,
//! scaler enable, the button GPIO, the camera mode line, both frame-buffer
//! DMA engines, the camera clock counter and the video debug block. Every
//! write is also appended to a log so tests can check write ordering.

use std::collections::VecDeque;

use diva_core::core::{DisplayPort, SocPort, StreamChannel, StreamConfig, VideoStatus};
use diva_core::display::FramerGeometry;

use crate::board::BoardProfile;

/// Button GPIO bits. Both lines are pulled up; a held button reads 0.
const BTN_A: u32 = 0x1;
const BTN_B: u32 = 0x2;
const BTN_IDLE: u32 = BTN_A | BTN_B;

/// One register access made through the port, in the order it happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterWrite {
    FramerGeometry(FramerGeometry),
    ScalerEnable(bool),
    CameraModePulse,
    Stream(StreamChannel, StreamField),
    VideoLatch,
}

/// Individual DMA engine register writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamField {
    Reset,
    StartAddress(u32),
    TransferSize(u32),
    BurstSize(u32),
    Enable(bool),
}

/// Storage registers of one DMA engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamRegisters {
    pub start_address: u32,
    pub transfer_size: u32,
    pub burst_size: u32,
    pub enabled: bool,
    /// Number of reset strobes seen.
    pub resets: u32,
}

impl StreamRegisters {
    fn apply(&mut self, field: StreamField) {
        match field {
            StreamField::Reset => {
                self.enabled = false;
                self.resets += 1;
            }
            StreamField::StartAddress(v) => self.start_address = v,
            StreamField::TransferSize(v) => self.transfer_size = v,
            StreamField::BurstSize(v) => self.burst_size = v,
            StreamField::Enable(v) => self.enabled = v,
        }
    }

    /// Programmed configuration, regardless of enable state.
    pub fn config(&self) -> StreamConfig {
        StreamConfig {
            start_address: self.start_address,
            transfer_size: self.transfer_size,
            burst_size: self.burst_size,
        }
    }
}

/// Simulated SoC register file.
pub struct SimulatedSoc {
    framer: FramerGeometry,
    scaler_enable: bool,
    btn_in: u32,
    camera_mode_pulses: u32,
    reader: StreamRegisters,
    writer: StreamRegisters,

    // Camera clock: queued readings are consumed one per read, the last one
    // sticks.
    clock_readings: VecDeque<u32>,
    clock_hz: u32,

    // Video debug block
    timing: VideoStatus,
    latched: VideoStatus,
    latches: u32,

    writes: Vec<RegisterWrite>,
}

impl SimulatedSoc {
    /// Power-on register state: everything zero, both buttons released,
    /// no camera clock.
    pub fn new() -> Self {
        Self {
            framer: FramerGeometry {
                width: 0,
                height: 0,
                x_start: 0,
                y_start: 0,
            },
            scaler_enable: false,
            btn_in: BTN_IDLE,
            camera_mode_pulses: 0,
            reader: StreamRegisters::default(),
            writer: StreamRegisters::default(),
            clock_readings: VecDeque::new(),
            clock_hz: 0,
            timing: VideoStatus::default(),
            latched: VideoStatus::default(),
            latches: 0,
            writes: Vec::new(),
        }
    }

    /// A SoC wired to the camera described by `profile`.
    pub fn from_profile(profile: &BoardProfile) -> Self {
        let mut soc = Self::new();
        soc.queue_clock_readings(profile.clock_readings.iter().copied());
        soc.set_video_timing(profile.timing);
        soc
    }

    // -----------------------------------------------------------------------
    // Inputs (board side)
    // -----------------------------------------------------------------------

    /// Drive button A (reset button on the real board).
    pub fn set_button_a(&mut self, held: bool) {
        set_active_low(&mut self.btn_in, BTN_A, held);
    }

    /// Drive button B (the mode button).
    pub fn set_button_b(&mut self, held: bool) {
        set_active_low(&mut self.btn_in, BTN_B, held);
    }

    /// Fix the camera clock reading, dropping any queued readings.
    pub fn set_capture_frequency(&mut self, hz: u32) {
        self.clock_readings.clear();
        self.clock_hz = hz;
    }

    /// Queue camera clock readings, returned one per read.
    pub fn queue_clock_readings(&mut self, readings: impl IntoIterator<Item = u32>) {
        self.clock_readings.extend(readings);
    }

    /// Set the counters the video debug block will report on the next latch.
    /// `frequency_hz` is ignored; the current camera clock is reported instead.
    pub fn set_video_timing(&mut self, timing: VideoStatus) {
        self.timing = timing;
    }

    // -----------------------------------------------------------------------
    // Register state (CPU side)
    // -----------------------------------------------------------------------

    pub fn framer(&self) -> FramerGeometry {
        self.framer
    }

    pub fn scaler_enabled(&self) -> bool {
        self.scaler_enable
    }

    /// Framer geometry and scaler enable together, for comparing display
    /// register state.
    pub fn display_state(&self) -> (FramerGeometry, bool) {
        (self.framer, self.scaler_enable)
    }

    pub fn button_register(&self) -> u32 {
        self.btn_in
    }

    pub fn camera_mode_pulses(&self) -> u32 {
        self.camera_mode_pulses
    }

    pub fn stream(&self, channel: StreamChannel) -> &StreamRegisters {
        match channel {
            StreamChannel::Reader => &self.reader,
            StreamChannel::Writer => &self.writer,
        }
    }

    pub fn latch_count(&self) -> u32 {
        self.latches
    }

    pub fn writes(&self) -> &[RegisterWrite] {
        &self.writes
    }

    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }

    fn stream_write(&mut self, channel: StreamChannel, field: StreamField) {
        match channel {
            StreamChannel::Reader => self.reader.apply(field),
            StreamChannel::Writer => self.writer.apply(field),
        }
        self.writes.push(RegisterWrite::Stream(channel, field));
    }
}

impl Default for SimulatedSoc {
    fn default() -> Self {
        Self::new()
    }
}

/// Active-low bit manipulation: clear bit on press, set on release.
fn set_active_low(reg: &mut u32, mask: u32, held: bool) {
    if held {
        *reg &= !mask;
    } else {
        *reg |= mask;
    }
}

impl DisplayPort for SimulatedSoc {
    fn write_framer_geometry(&mut self, geometry: FramerGeometry) {
        self.framer = geometry;
        self.writes.push(RegisterWrite::FramerGeometry(geometry));
    }

    fn write_scaler_enable(&mut self, enable: bool) {
        self.scaler_enable = enable;
        self.writes.push(RegisterWrite::ScalerEnable(enable));
    }
}

impl SocPort for SimulatedSoc {
    fn read_button_raw(&mut self) -> u32 {
        self.btn_in
    }

    fn signal_camera_mode_switch(&mut self) {
        self.camera_mode_pulses += 1;
        self.writes.push(RegisterWrite::CameraModePulse);
    }

    fn read_capture_frequency(&mut self) -> u32 {
        if let Some(hz) = self.clock_readings.pop_front() {
            self.clock_hz = hz;
        }
        self.clock_hz
    }

    fn configure_stream(&mut self, channel: StreamChannel, config: StreamConfig) {
        self.stream_write(channel, StreamField::Reset);
        self.stream_write(channel, StreamField::StartAddress(config.start_address));
        self.stream_write(channel, StreamField::TransferSize(config.transfer_size));
        self.stream_write(channel, StreamField::BurstSize(config.burst_size));
        self.stream_write(channel, StreamField::Enable(true));
    }

    fn latch_video_status(&mut self) -> VideoStatus {
        self.latched = VideoStatus {
            frequency_hz: self.clock_hz,
            ..self.timing
        };
        self.latches += 1;
        self.writes.push(RegisterWrite::VideoLatch);
        self.latched
    }
}
