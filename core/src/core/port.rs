use crate::display::FramerGeometry;

/// Register-level access to the framer and scaler.
///
/// This is the only capability the display mode controller needs. Writes are
/// synchronous and cannot fail; the hardware gives software no way to observe
/// a failed CSR write.
pub trait DisplayPort {
    /// Write all four framer geometry registers (width, height, x/y start).
    fn write_framer_geometry(&mut self, geometry: FramerGeometry);

    /// Route the capture stream through (true) or around (false) the scaler.
    fn write_scaler_enable(&mut self, enable: bool);
}

/// Full set of SoC peripherals the firmware loop touches.
///
/// Implemented by the real CSR bank on target and by simulated register
/// files on a host.
pub trait SocPort: DisplayPort {
    /// Raw button input register. Bit 0 is button A, bit 1 is button B.
    /// Both are active-low: a 0 bit means the button is held.
    fn read_button_raw(&mut self) -> u32;

    /// Pulse the camera's "next mode" line.
    fn signal_camera_mode_switch(&mut self);

    /// Measured pixel clock coming from the camera, in Hz. Reads 0 while no
    /// camera clock is present.
    fn read_capture_frequency(&mut self) -> u32;

    /// Reset and program one of the frame-buffer DMA engines, then enable it.
    ///
    /// Implementations must apply the fields in order: reset, start address,
    /// transfer size, burst size, enable.
    fn configure_stream(&mut self, channel: StreamChannel, config: StreamConfig);

    /// Latch the video debug counters and return the latched snapshot.
    fn latch_video_status(&mut self) -> VideoStatus;
}

/// Frame-buffer DMA engines between the video pipeline and HyperRAM.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamChannel {
    /// HyperRAM -> scaler/framer.
    Reader,
    /// Camera capture -> HyperRAM.
    Writer,
}

/// DMA transfer parameters, in 32-bit words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamConfig {
    pub start_address: u32,
    pub transfer_size: u32,
    pub burst_size: u32,
}

impl StreamConfig {
    /// One full 640x512 camera frame at the start of HyperRAM.
    pub const FRAME_BUFFER: Self = Self {
        start_address: 0,
        transfer_size: 640 * 512,
        burst_size: 512,
    };
}

/// Snapshot of the video debug block, taken at the last latch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VideoStatus {
    pub frequency_hz: u32,
    pub vsync_low: u32,
    pub vsync_high: u32,
    pub hsync_low: u32,
    pub hsync_high: u32,
    pub lines: u32,
}

impl std::fmt::Display for VideoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "freq {} Hz, vsync low {} high {}, hsync low {} high {}, lines {}",
            self.frequency_hz,
            self.vsync_low,
            self.vsync_high,
            self.hsync_low,
            self.hsync_high,
            self.lines
        )
    }
}
