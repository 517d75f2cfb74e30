//! Vertical gradient fade.
//!
//! Darkens the image progressively from top to bottom. The top row is left
//! untouched; each following row is scaled by
//!
//! `alpha(y) = clamp(1 - y / height * strength / 100, 0, 1)`
//!
//! so a strength of 100 fades almost to black at the bottom edge and a
//! strength of 0 leaves the image unchanged.

use crate::raster::Image;

/// Row multiplier for row `y` of an image `height` rows tall.
///
/// Strength ranges from 0 to 100.
#[inline]
pub fn gradient_alpha(y: u32, height: u32, strength: i32) -> f64 {
    if height == 0 {
        return 1.0;
    }
    let alpha = 1.0 - y as f64 / height as f64 * (strength as f64 / 100.0);
    alpha.clamp(0.0, 1.0)
}

/// Apply the vertical fade. Channel values are truncated after scaling.
pub fn gradient_fade(image: &Image, strength: i32) -> Image {
    let mut output = image.clone();
    let stride = image.stride();
    if stride == 0 {
        return output;
    }

    for (y, row) in output.pixels.chunks_exact_mut(stride).enumerate() {
        let alpha = gradient_alpha(y as u32, image.height, strength);
        for px in row.iter_mut() {
            *px = (*px as f64 * alpha) as u8;
        }
    }
    output
}
