//! Camera/board presets for the simulated SoC.
//!
//! Each preset describes what the firmware would see from the camera side:
//! the sequence of pixel clock readings after power-up and the video debug
//! counters once the camera is streaming.

use diva_core::core::VideoStatus;

/// Describes one simulated board + camera combination.
pub struct BoardProfile {
    /// CLI name used to select this profile (e.g., "boson640").
    pub name: &'static str,
    pub description: &'static str,
    /// Camera clock readings returned by successive reads; the last one
    /// repeats forever.
    pub clock_readings: &'static [u32],
    /// Video debug counters reported on each latch.
    pub timing: VideoStatus,
}

impl BoardProfile {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        clock_readings: &'static [u32],
        timing: VideoStatus,
    ) -> Self {
        Self {
            name,
            description,
            clock_readings,
            timing,
        }
    }
}

inventory::collect!(BoardProfile);

/// Boson 640 streaming 640x512 at 60 Hz. Sync widths are in pixel clocks
/// (hsync) and lines (vsync).
const BOSON_640_TIMING: VideoStatus = VideoStatus {
    frequency_hz: 27_000_000,
    vsync_low: 2,
    vsync_high: 523,
    hsync_low: 10,
    hsync_high: 850,
    lines: 512,
};

inventory::submit! {
    BoardProfile::new(
        "boson640",
        "Boson 640 attached and streaming at power-on",
        &[27_000_000],
        BOSON_640_TIMING,
    )
}

inventory::submit! {
    BoardProfile::new(
        "boson640-cold",
        "Boson 640 that starts its pixel clock after the SoC boots",
        &[0, 0, 0, 4_000_000, 18_000_000, 27_000_000],
        BOSON_640_TIMING,
    )
}

inventory::submit! {
    BoardProfile::new(
        "no-camera",
        "No camera attached; the pixel clock never starts",
        &[0],
        VideoStatus {
            frequency_hz: 0,
            vsync_low: 0,
            vsync_high: 0,
            hsync_low: 0,
            hsync_high: 0,
            lines: 0,
        },
    )
}
