use glam::Vec2;
use rand::prelude::*;

use crate::constants::{BEAT_COUNT, ENERGY_THRESHOLD};
use crate::layout::Layout;

/// Chooses the panel new light sources appear on.
///
/// The same panel is reused for `BEAT_COUNT` spawns, then a random panel takes
/// over. An energetic spawn pushes the counter to the limit so the following
/// spawn re-rolls.
#[derive(Clone, Debug)]
pub struct PanelRotation {
    active: usize,
    count: u32,
    seed: u64,
    rng: StdRng,
}

impl PanelRotation {
    pub fn new(seed: u64) -> Self {
        Self {
            active: 0,
            count: 0,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Centroid for the next spawn, advancing the rotation.
    pub fn next_position(&mut self, layout: &Layout, energy: u16) -> Vec2 {
        let position = layout.panel_clamped(self.active as i64).centroid;
        self.count += 1;
        if self.count >= BEAT_COUNT {
            self.active = self.roll(layout);
            self.count = 0;
        }
        if energy >= ENERGY_THRESHOLD {
            self.count = BEAT_COUNT;
        }
        position
    }

    pub fn reset(&mut self) {
        self.active = 0;
        self.count = 0;
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    // `rand * n - 1` truncates toward zero, so it never picks the last panel of a
    // multi-panel layout. Layouts are never empty, so the clamp range is valid.
    fn roll(&mut self, layout: &Layout) -> usize {
        let n = layout.len() as f64;
        let raw = (self.rng.gen::<f64>() * n - 1.0) as i64;
        raw.clamp(0, layout.len() as i64 - 1) as usize
    }
}
