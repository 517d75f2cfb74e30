//! Loading images from disk.
//!
//! This module provides functionality for:
//! - Decoding any raster format enabled in the `image` crate (PNG, JPEG, BMP)
//! - Applying the EXIF orientation tag so the image is displayed upright
//! - Collecting file information for display next to the image
//!
//! Every loaded image is converted to 3-channel RGB, matching what the edit
//! operations expect from a freshly opened file.

mod info;
mod load;
mod orientation;

pub use info::ImageInfo;
pub use load::{decode_image, load_image};
pub use orientation::{get_orientation, Orientation};
