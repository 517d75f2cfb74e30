//! 8-bit RGB <-> HSV conversion.
//!
//! Uses the compact 8-bit HSV encoding common to image libraries:
//! - Hue is stored in half degrees, `0..=180`
//! - Saturation and value are scaled to `0..=255`
//!
//! Keeping hue in half degrees makes the hue shift and its wrap-around
//! operate on the same scale users see on the hue slider.

/// Largest hue value in the 8-bit encoding (360 degrees / 2).
pub const HUE_RANGE: i32 = 180;

/// A pixel in 8-bit HSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    /// Hue in half degrees (0 to 180)
    pub h: u8,
    /// Saturation (0 to 255)
    pub s: u8,
    /// Value (0 to 255)
    pub v: u8,
}

/// Convert an RGB pixel to HSV.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let (ri, gi, bi) = (r as i32, g as i32, b as i32);
    let v = ri.max(gi).max(bi);
    let min = ri.min(gi).min(bi);
    let diff = v - min;

    let s = if v == 0 {
        0
    } else {
        (diff as f32 * 255.0 / v as f32).round() as i32
    };

    let h = if diff == 0 {
        0
    } else {
        // Sector offsets in units of 60 degrees
        let raw = if v == ri {
            gi - bi
        } else if v == gi {
            bi - ri + 2 * diff
        } else {
            ri - gi + 4 * diff
        };
        let mut h = (raw as f32 * 30.0 / diff as f32).round() as i32;
        if h < 0 {
            h += HUE_RANGE;
        }
        h
    };

    Hsv {
        h: h.clamp(0, HUE_RANGE) as u8,
        s: s.clamp(0, 255) as u8,
        v: v as u8,
    }
}

/// Convert an HSV pixel back to RGB.
pub fn hsv_to_rgb(hsv: Hsv) -> (u8, u8, u8) {
    let v = hsv.v as f32 / 255.0;
    let s = hsv.s as f32 / 255.0;

    if hsv.s == 0 {
        return (hsv.v, hsv.v, hsv.v);
    }

    let mut h = hsv.h as f32 * 6.0 / HUE_RANGE as f32;
    while h >= 6.0 {
        h -= 6.0;
    }
    let sector = h.floor();
    let f = h - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    (to_u8(r), to_u8(g), to_u8(b))
}

/// Shift a hue by `shift` half degrees, wrapping back into `0..=180`.
///
/// Results below zero gain a full turn and results above 180 lose one, so
/// `170 + 20` becomes `10`. A single correction suffices for shifts within
/// the slider range of -180 to 180.
#[inline]
pub fn wrap_hue(hue: u8, shift: i32) -> u8 {
    let mut h = hue as i32 + shift;
    if h < 0 {
        h += HUE_RANGE;
    }
    if h > HUE_RANGE {
        h -= HUE_RANGE;
    }
    h.clamp(0, HUE_RANGE) as u8
}

#[inline]
fn to_u8(channel: f32) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}
