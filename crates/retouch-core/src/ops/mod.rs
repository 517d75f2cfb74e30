//! Stateless image operations.
//!
//! Each function takes a source image plus parameters and returns a new
//! image. Nothing here knows about history: snapshots, undo and the toggle
//! flags live in [`crate::history`].
//!
//! # Operations
//!
//! - `blur` - Gaussian blur with an odd kernel size (1 to 31)
//! - `crop` - Centered crop to an exact pixel size
//! - `flip` - Horizontal and vertical mirroring
//! - `adjustments` - Grayscale, hue, saturation and brightness
//! - `gradient` - Vertical fade towards black

mod adjustments;
mod blur;
mod crop;
mod flip;
mod gradient;

pub use adjustments::{adjust_brightness, adjust_saturation, grayscale, shift_hue};
pub use blur::{gaussian_blur, kernel_size, sigma_for_kernel, MAX_KERNEL_SIZE};
pub use crop::{center_crop, crop_origin};
pub use flip::{flip_horizontal, flip_vertical};
pub use gradient::{gradient_alpha, gradient_fade};

use image::DynamicImage;

use crate::raster::Image;

/// Run an `image` crate transform, keeping the source channel layout.
///
/// A buffer whose length does not match its dimensions is returned unchanged.
pub(crate) fn map_dynamic(image: &Image, op: impl FnOnce(&DynamicImage) -> DynamicImage) -> Image {
    match image.to_dynamic() {
        Some(dynamic) => Image::from_dynamic(op(&dynamic), image.layout),
        None => image.clone(),
    }
}
