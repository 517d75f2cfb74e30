//! Gaussian blur.
//!
//! The blur strength is expressed as a kernel size, like a blur slider: an
//! odd number of pixels from 1 to 31. The Gaussian sigma is derived from the
//! kernel size so that the kernel covers roughly +-3 sigma.

use super::map_dynamic;
use crate::raster::Image;

/// Largest accepted kernel size.
pub const MAX_KERNEL_SIZE: u32 = 31;

/// Normalize a slider value to a valid kernel size.
///
/// Even values are bumped to the next odd value, then the result is clamped
/// to `1..=MAX_KERNEL_SIZE`.
pub fn kernel_size(value: i32) -> u32 {
    let odd = if value % 2 == 0 { value + 1 } else { value };
    odd.clamp(1, MAX_KERNEL_SIZE as i32) as u32
}

/// Gaussian sigma for an odd kernel size.
///
/// Formula: `sigma = 0.3 * ((k - 1) * 0.5 - 1) + 0.8`
#[inline]
pub fn sigma_for_kernel(kernel: u32) -> f32 {
    0.3 * ((kernel as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Blur an image with a Gaussian of the given slider size.
///
/// A kernel size of 1 returns an unchanged copy.
pub fn gaussian_blur(image: &Image, size: i32) -> Image {
    let kernel = kernel_size(size);
    if kernel == 1 {
        return image.clone();
    }

    let sigma = sigma_for_kernel(kernel);
    map_dynamic(image, |img| img.blur(sigma))
}
