//! Per-panel colour from the current light-source pool.

use glam::Vec2;

use crate::color::{hsv_to_rgb, rgb_to_hsv, Rgb};
use crate::constants::*;
use crate::source::LightSource;

/// Final colour of a panel centred at `centroid`.
///
/// Sources are folded in pool order, weakest first, so the strongest one has the
/// last word. Each step blends toward the source colour by a distance and age
/// dependent factor and then nudges hue and value; only the result is clamped.
pub fn render_panel<'a>(
    centroid: Vec2,
    sources: impl IntoIterator<Item = &'a LightSource>,
) -> [u8; 3] {
    let mut r = BASE_COLOUR.r as f32;
    let mut g = BASE_COLOUR.g as f32;
    let mut b = BASE_COLOUR.b as f32;

    for source in sources {
        let d = centroid.distance(source.position);
        let factor = blend_factor(source, d);

        r = r * (1.0 - factor) + source.colour.r as f32 * factor;
        g = g * (1.0 - factor) + source.colour.g as f32 * factor;
        b = b * (1.0 - factor) + source.colour.b as f32 * factor;

        let shifted = shift_hue_value(Rgb::new(r as i32, g as i32, b as i32), d);
        r = shifted.r as f32;
        g = shifted.g as f32;
        b = shifted.b as f32;
    }

    Rgb::new(r as i32, g as i32, b as i32).clamped()
}

/// Weight of `source` on a panel `d` units away, floored at `FRACTION_COLOUR_TO_KEEP`.
pub fn blend_factor(source: &LightSource, d: f32) -> f32 {
    let age = source.diffusion_age;
    let mut factor = if source.is_energetic() {
        let d2 = (d * ENERGETIC_DECAY_PER_UNIT - age * ENERGETIC_SHRINK_PER_AGE).max(0.0);
        (1.0 / (d2 * 2.0 + 1.0)).clamp(0.0, 1.0)
    } else {
        1.0 / (d * NEAR_DECAY_PER_UNIT + 1.0)
    };

    if age >= MAX_DIFFUSION_AGE {
        factor = 0.0;
    } else {
        factor *= 1.0 - age / MAX_DIFFUSION_AGE;
    }

    factor.max(FRACTION_COLOUR_TO_KEEP)
}

/// Rotate hue by a tenth of a degree per unit of distance and lift value by a
/// fixed step. Value wraps at 360, not at its 100% ceiling.
pub fn shift_hue_value(colour: Rgb, d: f32) -> Rgb {
    let mut hsv = rgb_to_hsv(colour);
    let d_factor = (d * HUE_DEGREES_PER_UNIT) as i32;
    // `as` saturates for huge distances; reduce before adding.
    hsv.h = (hsv.h + d_factor.rem_euclid(360)) % 360;
    hsv.v = (hsv.v + VALUE_BOOST) % 360;
    hsv_to_rgb(hsv)
}
