use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::Result;
use crate::frame::Frame;

/// Save a frame as 8-bit RGBA PNG.
pub fn save_png(frame: &Frame, path: &Path) -> Result<()> {
    let img = RgbaImage::from_raw(frame.width() as u32, frame.height() as u32, frame.rgba_bytes())
        .expect("buffer size matches dimensions");
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a frame, choosing the format from the file extension.
pub fn save_frame(frame: &Frame, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") | None => save_png(frame, path),
        _ => {
            let img = RgbaImage::from_raw(
                frame.width() as u32,
                frame.height() as u32,
                frame.rgba_bytes(),
            )
            .expect("buffer size matches dimensions");
            img.save(path)?;
            Ok(())
        }
    }
}
