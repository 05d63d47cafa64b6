//! Integer colour types and RGB <-> HSV conversion.
//!
//! Channels are kept as `i32` while a colour is being worked on: palette colours
//! scaled by an intensity above 1.0 and value-boosted colours may exceed 255, and
//! only the final frame entry is clamped into `0..=255`.

use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Multiply every channel by `k`, truncating toward zero.
    pub fn scaled(self, k: f32) -> Self {
        Self {
            r: (self.r as f32 * k) as i32,
            g: (self.g as f32 * k) as i32,
            b: (self.b as f32 * k) as i32,
        }
    }

    /// Channels clamped into the displayable range.
    pub fn clamped(self) -> [u8; 3] {
        [clamp_channel(self.r), clamp_channel(self.g), clamp_channel(self.b)]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0] as i32, c[1] as i32, c[2] as i32)
    }
}

#[inline]
fn clamp_channel(c: i32) -> u8 {
    c.clamp(0, 255) as u8
}

/// Hue in degrees, saturation and value in percent.
///
/// `v` is only bounded by 100 for in-gamut input; an over-bright `Rgb` maps to a
/// proportionally larger value and converts back losslessly enough for blending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hsv {
    pub h: i32,
    pub s: i32,
    pub v: i32,
}

pub fn rgb_to_hsv(c: Rgb) -> Hsv {
    let max = c.r.max(c.g).max(c.b);
    let min = c.r.min(c.g).min(c.b);
    let delta = max - min;

    let v = (max as f32 * 100.0 / 255.0) as i32;
    if max <= 0 {
        return Hsv { h: 0, s: 0, v: 0 };
    }
    let s = (delta as f32 * 100.0 / max as f32) as i32;
    if delta == 0 {
        return Hsv { h: 0, s, v };
    }

    let (r, g, b, d) = (c.r as f32, c.g as f32, c.b as f32, delta as f32);
    let mut h = if c.r == max {
        60.0 * (g - b) / d
    } else if c.g == max {
        120.0 + 60.0 * (b - r) / d
    } else {
        240.0 + 60.0 * (r - g) / d
    };
    if h < 0.0 {
        h += 360.0;
    }
    Hsv {
        h: (h as i32) % 360,
        s,
        v,
    }
}

pub fn hsv_to_rgb(c: Hsv) -> Rgb {
    let h = c.h.rem_euclid(360) as f32;
    let s = c.s as f32 / 100.0;
    let v = c.v as f32 / 100.0 * 255.0;

    let chroma = v * s;
    let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - chroma;

    let (r, g, b) = if h < 60.0 {
        (chroma, x, 0.0)
    } else if h < 120.0 {
        (x, chroma, 0.0)
    } else if h < 180.0 {
        (0.0, chroma, x)
    } else if h < 240.0 {
        (0.0, x, chroma)
    } else if h < 300.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };

    Rgb::new((r + m) as i32, (g + m) as i32, (b + m) as i32)
}
