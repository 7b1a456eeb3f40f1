//! PNG snapshot of the output raster layout: blanking, the 800x600 active
//! frame and the framer window, drawn from the current framer registers.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use diva_core::display::FramerGeometry;
use diva_core::display::mode::{OUTER_HEIGHT, OUTER_WIDTH, OUTER_X_START, OUTER_Y_START};

/// Full 800x600@60 raster including blanking, in pixel clocks and lines.
pub const RASTER_WIDTH: u32 = 1056;
pub const RASTER_HEIGHT: u32 = 628;

const BLANKING: [u8; 3] = [0x28, 0x28, 0x28];
const BORDER: [u8; 3] = [0x00, 0x00, 0x00];
/// What the framer emits inside its window when no pixel data is valid.
const WINDOW_FILL: [u8; 3] = [0xFF, 0x77, 0xFF];
const OUTLINE: [u8; 3] = [0xFF, 0xFF, 0xFF];

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}

fn fill(buffer: &mut [u8], x0: u32, y0: u32, x1: u32, y1: u32, color: [u8; 3]) {
    let x1 = x1.min(RASTER_WIDTH);
    let y1 = y1.min(RASTER_HEIGHT);
    for y in y0..y1 {
        for x in x0..x1 {
            let offset = ((y * RASTER_WIDTH + x) * 3) as usize;
            buffer[offset..offset + 3].copy_from_slice(&color);
        }
    }
}

fn outline(buffer: &mut [u8], x0: u32, y0: u32, x1: u32, y1: u32, color: [u8; 3]) {
    if x1 <= x0 || y1 <= y0 {
        return;
    }
    fill(buffer, x0, y0, x1, y0 + 1, color);
    fill(buffer, x0, y1 - 1, x1, y1, color);
    fill(buffer, x0, y0, x0 + 1, y1, color);
    fill(buffer, x1 - 1, y0, x1, y1, color);
}

/// Render the raster layout for `geometry` as RGB24.
pub fn render_layout(geometry: FramerGeometry) -> Vec<u8> {
    let mut buffer = vec![0u8; (RASTER_WIDTH * RASTER_HEIGHT * 3) as usize];
    fill(&mut buffer, 0, 0, RASTER_WIDTH, RASTER_HEIGHT, BLANKING);

    let (ox0, oy0) = (u32::from(OUTER_X_START), u32::from(OUTER_Y_START));
    let (ox1, oy1) = (ox0 + u32::from(OUTER_WIDTH), oy0 + u32::from(OUTER_HEIGHT));
    fill(&mut buffer, ox0, oy0, ox1, oy1, BORDER);

    let (wx0, wy0) = (u32::from(geometry.x_start), u32::from(geometry.y_start));
    let (wx1, wy1) = (
        wx0 + u32::from(geometry.width),
        wy0 + u32::from(geometry.height),
    );
    fill(&mut buffer, wx0, wy0, wx1, wy1, WINDOW_FILL);
    outline(&mut buffer, wx0, wy0, wx1, wy1, OUTLINE);

    buffer
}

/// Render the layout for `geometry` and write it to `path` as a PNG.
pub fn save_png(path: &Path, geometry: FramerGeometry) -> Result<(), SnapshotError> {
    let buffer = render_layout(geometry);

    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), RASTER_WIDTH, RASTER_HEIGHT);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&buffer)?;
    writer.finish()?;
    Ok(())
}
