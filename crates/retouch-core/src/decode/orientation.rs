//! EXIF orientation handling.
//!
//! Cameras store pixels in sensor order and record how to display them in the
//! EXIF orientation tag (values 1 to 8). Loading applies the tag so every
//! edit works on the upright image.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;

/// How a decoded image must be turned to be upright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Upright,
    Mirrored,
    UpsideDown,
    MirroredUpsideDown,
    /// Mirrored, then turned a quarter counter-clockwise.
    MirroredLeft,
    /// Stored turned a quarter counter-clockwise.
    Left,
    /// Mirrored, then turned a quarter clockwise.
    MirroredRight,
    /// Stored turned a quarter clockwise.
    Right,
}

impl Orientation {
    /// Map an EXIF tag value; unknown values are treated as upright.
    pub fn from_exif(value: u32) -> Self {
        match value {
            2 => Self::Mirrored,
            3 => Self::UpsideDown,
            4 => Self::MirroredUpsideDown,
            5 => Self::MirroredLeft,
            6 => Self::Left,
            7 => Self::MirroredRight,
            8 => Self::Right,
            _ => Self::Upright,
        }
    }

    /// Turn `img` so that it displays upright.
    pub(crate) fn correct(self, img: DynamicImage) -> DynamicImage {
        match self {
            Self::Upright => img,
            Self::Mirrored => img.fliph(),
            Self::UpsideDown => img.rotate180(),
            Self::MirroredUpsideDown => img.flipv(),
            Self::MirroredLeft => img.rotate90().fliph(),
            Self::Left => img.rotate90(),
            Self::MirroredRight => img.rotate270().fliph(),
            Self::Right => img.rotate270(),
        }
    }
}

/// Read the EXIF orientation from encoded file bytes.
///
/// Files without an EXIF block or without the tag are upright.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    let Ok(exif) = Reader::new().read_from_container(&mut Cursor::new(bytes)) else {
        return Orientation::Upright;
    };

    exif.get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .map(Orientation::from_exif)
        .unwrap_or_default()
}
