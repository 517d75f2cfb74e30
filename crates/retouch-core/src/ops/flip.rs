//! Mirroring around the vertical or horizontal axis.

use image::DynamicImage;

use super::map_dynamic;
use crate::raster::Image;

/// Mirror the image left-to-right.
pub fn flip_horizontal(image: &Image) -> Image {
    map_dynamic(image, |img| img.fliph())
}

/// Mirror the image top-to-bottom.
pub fn flip_vertical(image: &Image) -> Image {
    map_dynamic(image, DynamicImage::flipv)
}
