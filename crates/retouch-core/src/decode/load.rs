//! Decoding image files into RGB buffers.

use std::io::Cursor;
use std::path::Path;

use image::{ImageError, ImageReader};

use super::orientation::get_orientation;
use crate::raster::Image;
use crate::EditError;

/// Decode encoded image bytes, applying EXIF orientation correction.
///
/// The format is guessed from the content, not from a file name. The result
/// is always 3-channel RGB.
pub fn decode_image(bytes: &[u8]) -> Result<Image, ImageError> {
    let orientation = get_orientation(bytes);

    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .decode()?;

    let rgb_img = orientation.correct(img).into_rgb8();
    Ok(Image::from_rgb_image(rgb_img))
}

/// Read and decode the image at `path`.
///
/// # Errors
///
/// Returns `EditError::LoadFailure` if the file is missing, unreadable, or
/// not a supported image.
pub fn load_image(path: &Path) -> Result<Image, EditError> {
    let load_failure = |reason: String| EditError::LoadFailure {
        path: path.to_path_buf(),
        reason,
    };

    let bytes = std::fs::read(path).map_err(|e| load_failure(e.to_string()))?;
    let image = decode_image(&bytes).map_err(|e| load_failure(e.to_string()))?;

    if image.is_empty() {
        return Err(load_failure("image has no pixels".to_string()));
    }

    tracing::info!(
        path = %path.display(),
        width = image.width,
        height = image.height,
        "loaded image"
    );
    Ok(image)
}
