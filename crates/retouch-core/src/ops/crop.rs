//! Centered cropping to an exact pixel size.
//!
//! The crop region is always centered on the source image. For a `W x H`
//! source and a `w x h` request, the region origin is
//! `((W - w) / 2, (H - h) / 2)` using integer division, so an odd leftover
//! pixel ends up on the right/bottom edge.
//!
//! # Example
//!
//! ```ignore
//! // Keep the middle 50x50 pixels of a 100x100 image
//! let cropped = center_crop(&image, 50, 50)?;
//! ```

use crate::raster::Image;
use crate::EditError;

/// Top-left corner of a centered `width x height` region.
///
/// Returns `None` when the region does not fit inside the image.
#[inline]
pub fn crop_origin(image: &Image, width: u32, height: u32) -> Option<(u32, u32)> {
    let left = image.width.checked_sub(width)? / 2;
    let top = image.height.checked_sub(height)? / 2;
    Some((left, top))
}

/// Extract the centered `width x height` region of `image`.
///
/// # Errors
///
/// * `EditError::InvalidDimensions` if either dimension is zero or negative
/// * `EditError::DimensionsExceedBounds` if the region is larger than the image
pub fn center_crop(image: &Image, width: i32, height: i32) -> Result<Image, EditError> {
    if width <= 0 || height <= 0 {
        return Err(EditError::InvalidDimensions(format!(
            "dimensions must be positive values, got {}x{}",
            width, height
        )));
    }
    let (width, height) = (width as u32, height as u32);

    let Some((left, top)) = crop_origin(image, width, height) else {
        return Err(EditError::DimensionsExceedBounds {
            width,
            height,
            image_width: image.width,
            image_height: image.height,
        });
    };

    let channels = image.channels();
    let src_stride = image.stride();
    let row_len = width as usize * channels;

    let mut output = Vec::with_capacity(row_len * height as usize);

    // Copy pixel data row by row
    for y in 0..height as usize {
        let src_start = (top as usize + y) * src_stride + left as usize * channels;
        output.extend_from_slice(&image.pixels[src_start..src_start + row_len]);
    }

    Ok(Image::with_layout(width, height, image.layout, output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::test_support::position_image;
    use crate::raster::ChannelLayout;

    #[test]
    fn test_full_crop() {
        let img = position_image(100, 100);
        let result = center_crop(&img, 100, 100).unwrap();

        assert_eq!(result, img);
    }

    #[test]
    fn test_center_crop_origin() {
        let img = position_image(10, 10);
        let result = center_crop(&img, 6, 6).unwrap();

        assert_eq!(result.width, 6);
        assert_eq!(result.height, 6);

        // First pixel should be from position (2, 2) in the original
        // Value at (2, 2) = (2 * 10 + 2) % 256 = 22
        assert_eq!(&result.pixels[0..3], &[22, 23, 24]);
    }

    #[test]
    fn test_odd_leftover_rounds_down() {
        let img = position_image(10, 9);
        // (10 - 3) / 2 = 3, (9 - 4) / 2 = 2
        assert_eq!(crop_origin(&img, 3, 4), Some((3, 2)));

        let result = center_crop(&img, 3, 4).unwrap();
        assert_eq!(result.pixels[0], (2 * 10 + 3) as u8);
    }

    #[test]
    fn test_crop_rectangular() {
        let img = position_image(200, 100);
        let result = center_crop(&img, 50, 100).unwrap();

        assert_eq!(result.width, 50);
        assert_eq!(result.height, 100);
        assert_eq!(result.pixels.len(), 50 * 100 * 3);
    }

    #[test]
    fn test_crop_rejects_oversized_region() {
        let img = position_image(100, 80);

        match center_crop(&img, 101, 10) {
            Err(EditError::DimensionsExceedBounds {
                width,
                image_width,
                ..
            }) => {
                assert_eq!(width, 101);
                assert_eq!(image_width, 100);
            }
            other => panic!("Expected DimensionsExceedBounds, got: {:?}", other),
        }
        assert!(center_crop(&img, 10, 81).is_err());
    }

    #[test]
    fn test_origin_of_oversized_region() {
        let img = position_image(10, 8);

        assert_eq!(crop_origin(&img, 11, 1), None);
        assert_eq!(crop_origin(&img, 1, 9), None);
        assert_eq!(crop_origin(&img, 10, 8), Some((0, 0)));
    }

    #[test]
    fn test_crop_rejects_non_positive() {
        let img = position_image(10, 10);

        assert!(matches!(
            center_crop(&img, 0, 5),
            Err(EditError::InvalidDimensions(_))
        ));
        assert!(matches!(
            center_crop(&img, 5, -1),
            Err(EditError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_crop_gray_layout() {
        let img = Image::with_layout(3, 3, ChannelLayout::Gray, (0..9).collect());
        let result = center_crop(&img, 1, 1).unwrap();

        assert_eq!(result.layout, ChannelLayout::Gray);
        assert_eq!(result.pixels, vec![4]);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
