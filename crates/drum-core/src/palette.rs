use crate::color::Rgb;
use crate::constants::FALLBACK_GREY;

/// Ordered colour stops, fixed once loaded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Palette {
    stops: Vec<Rgb>,
}

impl Palette {
    pub fn new(stops: Vec<Rgb>) -> Self {
        Self { stops }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn stops(&self) -> &[Rgb] {
        &self.stops
    }

    /// Colour at a continuous position in `0..=len-1`.
    ///
    /// Positions outside the palette stick to the end stops, and channels are
    /// truncated rather than rounded.
    pub fn interpolate(&self, colour: f32) -> Rgb {
        match self.stops.as_slice() {
            [] => FALLBACK_GREY,
            [only] => *only,
            stops => {
                let last = stops.len() - 1;
                let idx = colour as i64;
                if colour <= 0.0 {
                    return stops[0];
                }
                if idx >= last as i64 {
                    return stops[last];
                }
                let idx = idx as usize;
                let frac = colour - idx as f32;
                let (a, b) = (stops[idx], stops[idx + 1]);
                Rgb::new(
                    lerp(a.r, b.r, frac),
                    lerp(a.g, b.g, frac),
                    lerp(a.b, b.b, frac),
                )
            }
        }
    }
}

#[inline]
fn lerp(a: i32, b: i32, t: f32) -> i32 {
    ((1.0 - t) * a as f32 + t * b as f32) as i32
}
