//! Encoding and saving the current image.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError, ImageFormat};

use crate::raster::{ChannelLayout, Image};
use crate::EditError;

/// Quality used when the chosen extension selects JPEG.
pub const JPEG_QUALITY: u8 = 95;

/// Encode an image into the given container format.
///
/// JPEG output uses [`JPEG_QUALITY`]; every other format uses the `image`
/// crate's defaults.
pub fn encode_image(image: &Image, format: ImageFormat) -> Result<Vec<u8>, ImageError> {
    let color_type = match image.layout {
        ChannelLayout::Rgb => ExtendedColorType::Rgb8,
        ChannelLayout::Gray => ExtendedColorType::L8,
    };

    let mut buffer = Cursor::new(Vec::new());
    if format == ImageFormat::Jpeg {
        JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY).write_image(
            &image.pixels,
            image.width,
            image.height,
            color_type,
        )?;
    } else {
        image::write_buffer_with_format(
            &mut buffer,
            &image.pixels,
            image.width,
            image.height,
            color_type,
            format,
        )?;
    }
    Ok(buffer.into_inner())
}

/// Save an image to `path`, inferring the encoding from its extension.
///
/// # Errors
///
/// Returns `EditError::SaveFailure` for an empty image, an unknown
/// extension, an encoder error, or a write error.
pub fn save_image(image: &Image, path: &Path) -> Result<(), EditError> {
    let save_failure = |reason: String| EditError::SaveFailure {
        path: path.to_path_buf(),
        reason,
    };

    if image.is_empty() {
        return Err(save_failure("no processed image to save".to_string()));
    }

    let format = ImageFormat::from_path(path).map_err(|e| save_failure(e.to_string()))?;
    let bytes = encode_image(image, format).map_err(|e| save_failure(e.to_string()))?;
    std::fs::write(path, bytes).map_err(|e| save_failure(e.to_string()))?;

    tracing::info!(path = %path.display(), ?format, "saved image");
    Ok(())
}

/// Default output name for a given time: `YYYYMMDD-HHMMSS.png`.
pub fn default_file_name(now: DateTime<Local>) -> String {
    format!("{}.png", now.format("%Y%m%d-%H%M%S"))
}

/// Default output path: a timestamped PNG in the user's home directory.
///
/// Falls back to the working directory when no home directory is known.
pub fn default_save_path() -> PathBuf {
    let dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    dir.join(default_file_name(Local::now()))
}
