//! Edit descriptions and their parameter ranges.
//!
//! An [`Edit`] names one operation plus its parameters, the way a button
//! press plus the current slider value describes it. Edits can be parsed
//! from a compact text form:
//!
//! | text              | edit                                 |
//! |-------------------|--------------------------------------|
//! | `blur=5`          | `Edit::Blur { size: 5 }`             |
//! | `crop=200x100`    | `Edit::Crop { width: 200, height: 100 }` |
//! | `grayscale`       | `Edit::Grayscale`                    |
//! | `fliph` / `flipv` | `Edit::FlipHorizontal` / `Edit::FlipVertical` |
//! | `hue=20`          | `Edit::Hue { shift: 20 }`            |
//! | `saturation=150`  | `Edit::Saturation { percent: 150 }`  |
//! | `brightness=-30`  | `Edit::Brightness { offset: -30 }`   |
//! | `gradient=50`     | `Edit::Gradient { strength: 50 }`    |
//!
//! Slider-backed edits may omit the value to use the slider default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ops;
use crate::raster::Image;
use crate::EditError;

/// Range and default of one slider-backed parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderRange {
    pub min: i32,
    pub max: i32,
    pub default: i32,
}

impl SliderRange {
    /// Blur kernel size.
    pub const BLUR: Self = Self::new(1, ops::MAX_KERNEL_SIZE as i32, 5);
    /// Brightness offset.
    pub const BRIGHTNESS: Self = Self::new(-100, 100, 0);
    /// Hue shift in half degrees.
    pub const HUE: Self = Self::new(-180, 180, 0);
    /// Saturation percentage.
    pub const SATURATION: Self = Self::new(0, 200, 100);
    /// Gradient fade strength.
    pub const GRADIENT: Self = Self::new(0, 100, 50);

    pub const fn new(min: i32, max: i32, default: i32) -> Self {
        Self { min, max, default }
    }

    /// Clamp a value into this range.
    #[inline]
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }
}

/// Which toggle flag an edit flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Grayscale,
    /// Shared by both flip directions.
    Flip,
}

/// One user-triggered edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Edit {
    /// Gaussian blur with a kernel size (1 to 31)
    Blur { size: i32 },
    /// Centered crop to an exact pixel size
    Crop { width: i32, height: i32 },
    /// Toggle grayscale
    Grayscale,
    /// Toggle left-right mirroring
    FlipHorizontal,
    /// Toggle top-bottom mirroring
    FlipVertical,
    /// Hue shift in half degrees (-180 to 180)
    Hue { shift: i32 },
    /// Saturation percentage (0 to 200)
    Saturation { percent: i32 },
    /// Brightness offset (-100 to 100)
    Brightness { offset: i32 },
    /// Vertical fade strength (0 to 100)
    Gradient { strength: i32 },
}

impl Edit {
    /// The toggle flag this edit flips, if it is a toggle.
    pub fn toggle(&self) -> Option<Toggle> {
        self.toggle_op().map(|(toggle, _)| toggle)
    }

    /// The toggle flag and the operation it turns on, for toggle edits.
    ///
    /// Toggle operations cannot fail, so the history never has to set a flag
    /// for an image it could not produce.
    pub fn toggle_op(&self) -> Option<(Toggle, fn(&Image) -> Image)> {
        let (toggle, op): (Toggle, fn(&Image) -> Image) = match self {
            Edit::Grayscale => (Toggle::Grayscale, ops::grayscale),
            Edit::FlipHorizontal => (Toggle::Flip, ops::flip_horizontal),
            Edit::FlipVertical => (Toggle::Flip, ops::flip_vertical),
            _ => return None,
        };
        Some((toggle, op))
    }

    /// Check parameters that can be rejected before the source is known.
    pub fn validate(&self) -> Result<(), EditError> {
        if let Edit::Crop { width, height } = *self {
            if width <= 0 || height <= 0 {
                return Err(EditError::InvalidDimensions(format!(
                    "dimensions must be positive values, got {}x{}",
                    width, height
                )));
            }
        }
        Ok(())
    }

    /// Compute the edited image from `source`.
    ///
    /// Slider-backed parameters are clamped into their [`SliderRange`].
    pub fn render(&self, source: &Image) -> Result<Image, EditError> {
        let image = match *self {
            Edit::Blur { size } => ops::gaussian_blur(source, SliderRange::BLUR.clamp(size)),
            Edit::Crop { width, height } => ops::center_crop(source, width, height)?,
            Edit::Grayscale => ops::grayscale(source),
            Edit::FlipHorizontal => ops::flip_horizontal(source),
            Edit::FlipVertical => ops::flip_vertical(source),
            Edit::Hue { shift } => ops::shift_hue(source, SliderRange::HUE.clamp(shift)),
            Edit::Saturation { percent } => {
                ops::adjust_saturation(source, SliderRange::SATURATION.clamp(percent))
            }
            Edit::Brightness { offset } => {
                ops::adjust_brightness(source, SliderRange::BRIGHTNESS.clamp(offset))
            }
            Edit::Gradient { strength } => {
                ops::gradient_fade(source, SliderRange::GRADIENT.clamp(strength))
            }
        };
        Ok(image)
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::Blur { size } => write!(f, "blur={}", size),
            Edit::Crop { width, height } => write!(f, "crop={}x{}", width, height),
            Edit::Grayscale => write!(f, "grayscale"),
            Edit::FlipHorizontal => write!(f, "fliph"),
            Edit::FlipVertical => write!(f, "flipv"),
            Edit::Hue { shift } => write!(f, "hue={}", shift),
            Edit::Saturation { percent } => write!(f, "saturation={}", percent),
            Edit::Brightness { offset } => write!(f, "brightness={}", offset),
            Edit::Gradient { strength } => write!(f, "gradient={}", strength),
        }
    }
}

impl FromStr for Edit {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, value) = match s.split_once('=') {
            Some((name, value)) => (name.trim(), Some(value.trim())),
            None => (s, None),
        };

        let slider = |range: SliderRange| -> Result<i32, EditError> {
            match value {
                None => Ok(range.default),
                Some(v) => v.parse().map_err(|_| EditError::InvalidEdit(s.to_string())),
            }
        };

        let edit = match name.to_ascii_lowercase().as_str() {
            "blur" => Edit::Blur {
                size: slider(SliderRange::BLUR)?,
            },
            "crop" => {
                let (width, height) = parse_crop(value.unwrap_or_default())?;
                Edit::Crop { width, height }
            }
            "grayscale" | "gray" if value.is_none() => Edit::Grayscale,
            "fliph" | "flip-h" if value.is_none() => Edit::FlipHorizontal,
            "flipv" | "flip-v" if value.is_none() => Edit::FlipVertical,
            "hue" => Edit::Hue {
                shift: slider(SliderRange::HUE)?,
            },
            "saturation" => Edit::Saturation {
                percent: slider(SliderRange::SATURATION)?,
            },
            "brightness" => Edit::Brightness {
                offset: slider(SliderRange::BRIGHTNESS)?,
            },
            "gradient" => Edit::Gradient {
                strength: slider(SliderRange::GRADIENT)?,
            },
            _ => return Err(EditError::InvalidEdit(s.to_string())),
        };
        Ok(edit)
    }
}

/// Parse `WIDTHxHEIGHT` crop input.
///
/// Non-numeric input and non-positive values are both reported as
/// `InvalidDimensions`; the bounds check needs the source image and happens
/// later.
pub fn parse_crop(text: &str) -> Result<(i32, i32), EditError> {
    let invalid =
        || EditError::InvalidDimensions("Please enter valid numbers for both dimensions!".into());

    let (w, h) = text
        .split_once(|c: char| c == 'x' || c == 'X')
        .ok_or_else(invalid)?;
    let width: i32 = w.trim().parse().map_err(|_| invalid())?;
    let height: i32 = h.trim().parse().map_err(|_| invalid())?;

    let edit = Edit::Crop { width, height };
    edit.validate()?;
    Ok((width, height))
}
