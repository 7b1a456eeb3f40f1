use crate::core::DisplayPort;
use crate::display::mode::DisplayMode;

/// Owns the active display mode and pushes it to the framer and scaler.
///
/// The controller does not hold the port; callers pass it in for each
/// operation, the same way the loop passes the SoC to every component.
#[derive(Debug, Clone)]
pub struct DisplayModeController {
    mode: DisplayMode,
}

impl DisplayModeController {
    /// Create a controller in the power-on mode (scaled overlay).
    /// Nothing is written until [`apply`](Self::apply) or
    /// [`apply_current`](Self::apply_current) is called.
    pub fn new() -> Self {
        Self::with_mode(DisplayMode::Scaled)
    }

    pub fn with_mode(mode: DisplayMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Program the framer and scaler for `mode` and make it current.
    ///
    /// All geometry goes out before the scaler enable so the scaler never
    /// runs against the previous mode's window.
    pub fn apply<P: DisplayPort + ?Sized>(&mut self, port: &mut P, mode: DisplayMode) {
        port.write_framer_geometry(mode.geometry());
        port.write_scaler_enable(mode.scaler_enabled());
        self.mode = mode;
    }

    /// Re-send the current mode to the hardware.
    pub fn apply_current<P: DisplayPort + ?Sized>(&mut self, port: &mut P) {
        self.apply(port, self.mode);
    }

    /// Switch to the other mode and apply it. Returns the new mode.
    pub fn toggle<P: DisplayPort + ?Sized>(&mut self, port: &mut P) -> DisplayMode {
        let next = self.mode.toggled();
        self.apply(port, next);
        next
    }
}

impl Default for DisplayModeController {
    fn default() -> Self {
        Self::new()
    }
}
