// ---------------------------------------------------------------------------
// Output frame constants
// ---------------------------------------------------------------------------

/// Width of the active 800x600 output frame.
pub const OUTER_WIDTH: u16 = 800;

/// Height of the active 800x600 output frame.
pub const OUTER_HEIGHT: u16 = 600;

/// First visible pixel of the output frame, counted from the hsync edge.
pub const OUTER_X_START: u16 = 213;

/// First visible line of the output frame, counted from the vsync edge.
pub const OUTER_Y_START: u16 = 27;

/// Camera frame size, as stored in HyperRAM.
pub const CAPTURE_WIDTH: u16 = 640;
pub const CAPTURE_HEIGHT: u16 = 512;

/// Values for the four framer storage registers.
///
/// The framer latches these on the falling edge of vsync and shows pixels in
/// `x_start..x_stop` × `y_start..y_stop`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FramerGeometry {
    pub width: u16,
    pub height: u16,
    pub x_start: u16,
    pub y_start: u16,
}

impl FramerGeometry {
    /// Geometry of a `width` × `height` window centered in the output frame.
    pub const fn centered(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            x_start: OUTER_X_START + (OUTER_WIDTH - width) / 2,
            y_start: OUTER_Y_START + (OUTER_HEIGHT - height) / 2,
        }
    }

    /// One past the last visible pixel.
    pub const fn x_stop(&self) -> u16 {
        self.x_start + self.width
    }

    /// One past the last visible line.
    pub const fn y_stop(&self) -> u16 {
        self.y_start + self.height
    }
}

/// Output display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// Full 800x600 frame; the scaler is bypassed.
    Native,
    /// Camera image shown at 640x512, centered, through the scaler.
    #[default]
    Scaled,
}

impl DisplayMode {
    pub const fn width(self) -> u16 {
        match self {
            Self::Native => OUTER_WIDTH,
            Self::Scaled => CAPTURE_WIDTH,
        }
    }

    pub const fn height(self) -> u16 {
        match self {
            Self::Native => OUTER_HEIGHT,
            Self::Scaled => CAPTURE_HEIGHT,
        }
    }

    pub const fn x_offset(self) -> u16 {
        self.geometry().x_start
    }

    pub const fn y_offset(self) -> u16 {
        self.geometry().y_start
    }

    pub const fn scaler_enabled(self) -> bool {
        matches!(self, Self::Scaled)
    }

    pub const fn geometry(self) -> FramerGeometry {
        FramerGeometry::centered(self.width(), self.height())
    }

    /// The other mode.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Native => Self::Scaled,
            Self::Scaled => Self::Native,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Scaled => "scaled",
        }
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no display mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDisplayModeError(pub String);

impl std::fmt::Display for ParseDisplayModeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown display mode: {} (expected native or scaled)", self.0)
    }
}

impl std::error::Error for ParseDisplayModeError {}

impl std::str::FromStr for DisplayMode {
    type Err = ParseDisplayModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("native") {
            Ok(Self::Native)
        } else if s.eq_ignore_ascii_case("scaled") {
            Ok(Self::Scaled)
        } else {
            Err(ParseDisplayModeError(s.to_string()))
        }
    }
}
