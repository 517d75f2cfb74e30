//! Per-pixel color adjustments.
//!
//! Applies grayscale, hue, saturation and brightness to 8-bit pixel data.
//!
//! ## Color Model
//! - Grayscale uses BT.601 luma and writes it back to all three channels
//! - Hue and saturation round-trip each pixel through 8-bit HSV
//! - Brightness adds a constant offset to every channel, saturating at 0/255
//!
//! Gray input to the HSV-based adjustments is expanded to RGB first.

use crate::color::{hsv_to_rgb, rgb_to_hsv, wrap_hue, Hsv};
use crate::luminance::luma_u8;
use crate::raster::Image;

/// Convert to gray and back to three identical channels.
pub fn grayscale(image: &Image) -> Image {
    let mut output = image.to_rgb();
    for chunk in output.pixels.chunks_exact_mut(3) {
        let y = luma_u8(chunk[0], chunk[1], chunk[2]);
        chunk.fill(y);
    }
    output
}

/// Rotate the hue of every pixel by `shift` half degrees.
///
/// Shift ranges from -180 to +180. The shifted hue wraps back into 0..=180,
/// e.g. a hue of 170 shifted by 20 becomes 10.
pub fn shift_hue(image: &Image, shift: i32) -> Image {
    map_hsv(image, |mut hsv| {
        hsv.h = wrap_hue(hsv.h, shift);
        hsv
    })
}

/// Scale the saturation of every pixel by `percent / 100`.
///
/// Percent ranges from 0 to 200.
/// - 0 = fully desaturated
/// - 100 = unchanged
/// - 200 = double saturation (clipped at 255)
pub fn adjust_saturation(image: &Image, percent: i32) -> Image {
    let factor = percent as f32 / 100.0;
    map_hsv(image, |mut hsv| {
        hsv.s = (hsv.s as f32 * factor).round().clamp(0.0, 255.0) as u8;
        hsv
    })
}

/// Add `offset` to every channel, saturating at 0 and 255.
///
/// Offset ranges from -100 to +100. Works for both channel layouts.
pub fn adjust_brightness(image: &Image, offset: i32) -> Image {
    let mut output = image.clone();
    if offset == 0 {
        return output;
    }
    for px in output.pixels.iter_mut() {
        *px = (*px as i32 + offset).clamp(0, 255) as u8;
    }
    output
}

fn map_hsv(image: &Image, f: impl Fn(Hsv) -> Hsv) -> Image {
    let mut output = image.to_rgb();
    for chunk in output.pixels.chunks_exact_mut(3) {
        let hsv = f(rgb_to_hsv(chunk[0], chunk[1], chunk[2]));
        let (r, g, b) = hsv_to_rgb(hsv);
        chunk[0] = r;
        chunk[1] = g;
        chunk[2] = b;
    }
    output
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn rgb_image_strategy() -> impl Strategy<Value = Image> {
        (1u32..=8, 1u32..=8).prop_flat_map(|(w, h)| {
            proptest::collection::vec(any::<u8>(), (w * h * 3) as usize)
                .prop_map(move |pixels| Image::new(w, h, pixels))
        })
    }

    proptest! {
        /// Property: Brightness is monotonic per channel.
        #[test]
        fn prop_brightness_monotonic(img in rgb_image_strategy(), offset in 0i32..=100) {
            let result = adjust_brightness(&img, offset);
            for (after, before) in result.pixels.iter().zip(&img.pixels) {
                prop_assert!(after >= before);
            }
        }

        /// Property: Grayscale is idempotent.
        #[test]
        fn prop_grayscale_idempotent(img in rgb_image_strategy()) {
            let once = grayscale(&img);
            prop_assert_eq!(grayscale(&once), once);
        }

        /// Property: Adjustments never change dimensions.
        #[test]
        fn prop_dimensions_preserved(img in rgb_image_strategy(), shift in -180i32..=180) {
            let result = shift_hue(&img, shift);
            prop_assert_eq!((result.width, result.height), (img.width, img.height));
            prop_assert_eq!(result.pixels.len(), img.pixels.len());
        }
    }
}
