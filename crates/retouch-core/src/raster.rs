//! In-memory pixel buffer shared by the history and the image operations.

/// Channel layout of an [`Image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelLayout {
    /// One 8-bit luma channel.
    Gray,
    /// Three interleaved 8-bit channels in R, G, B order.
    #[default]
    Rgb,
}

impl ChannelLayout {
    /// Number of bytes per pixel.
    #[inline]
    pub fn count(self) -> usize {
        match self {
            ChannelLayout::Gray => 1,
            ChannelLayout::Rgb => 3,
        }
    }

    /// Human readable color depth label.
    pub fn label(self) -> &'static str {
        match self {
            ChannelLayout::Gray => "Grayscale",
            ChannelLayout::Rgb => "Color (RGB)",
        }
    }
}

/// A decoded image with interleaved 8-bit pixel data.
///
/// Images are treated as immutable once built: operations return new images
/// and `Clone` is a deep copy, so history snapshots never share a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Channel layout of `pixels`.
    pub layout: ChannelLayout,
    /// Pixel data in row-major order.
    /// Length should be width * height * layout.count().
    pub pixels: Vec<u8>,
}

impl Image {
    /// Create an RGB image with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self::with_layout(width, height, ChannelLayout::Rgb, pixels)
    }

    /// Create an image with an explicit channel layout.
    pub fn with_layout(width: u32, height: u32, layout: ChannelLayout, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * layout.count(),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            layout,
            pixels,
        }
    }

    /// Create an image from an `image::RgbImage`.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self::with_layout(width, height, ChannelLayout::Rgb, img.into_raw())
    }

    /// Create an image from an `image::GrayImage`.
    pub fn from_gray_image(img: image::GrayImage) -> Self {
        let (width, height) = img.dimensions();
        Self::with_layout(width, height, ChannelLayout::Gray, img.into_raw())
    }

    /// Create an image from an `image::DynamicImage`, converting to `layout`.
    pub fn from_dynamic(img: image::DynamicImage, layout: ChannelLayout) -> Self {
        match layout {
            ChannelLayout::Rgb => Self::from_rgb_image(img.into_rgb8()),
            ChannelLayout::Gray => Self::from_gray_image(img.into_luma8()),
        }
    }

    /// Convert to an `image::DynamicImage` for codec and `imageops` work.
    ///
    /// Returns `None` when the buffer length does not match the dimensions.
    pub fn to_dynamic(&self) -> Option<image::DynamicImage> {
        match self.layout {
            ChannelLayout::Rgb => {
                image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
                    .map(image::DynamicImage::ImageRgb8)
            }
            ChannelLayout::Gray => {
                image::GrayImage::from_raw(self.width, self.height, self.pixels.clone())
                    .map(image::DynamicImage::ImageLuma8)
            }
        }
    }

    /// Return an RGB copy of this image, expanding gray pixels if needed.
    pub fn to_rgb(&self) -> Image {
        match self.layout {
            ChannelLayout::Rgb => self.clone(),
            ChannelLayout::Gray => {
                let pixels = self.pixels.iter().flat_map(|&v| [v, v, v]).collect();
                Image::new(self.width, self.height, pixels)
            }
        }
    }

    /// Number of bytes per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.layout.count()
    }

    /// Number of bytes in one row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * self.channels()
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}
