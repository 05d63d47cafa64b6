//! Light sources and the bounded, intensity-ordered pool that holds them.

use glam::Vec2;
use smallvec::SmallVec;

use crate::color::Rgb;
use crate::constants::{ENERGY_THRESHOLD, MAX_DIFFUSION_AGE, MAX_SOURCES, MIN_SIMULTANEOUS_COLOURS};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightSource {
    /// Always the centroid of the panel the source was spawned on.
    pub position: Vec2,
    /// Carried but never read or written by the engine.
    pub velocity: Vec2,
    pub diffusion_age: f32,
    /// Palette colour scaled by intensity; not clamped.
    pub colour: Rgb,
    pub intensity: f32,
    pub speed: f32,
    pub energy: u16,
}

impl LightSource {
    pub fn new(position: Vec2, colour: Rgb, intensity: f32, speed: f32, energy: u16) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            diffusion_age: 0.0,
            colour,
            intensity,
            speed,
            energy,
        }
    }

    #[inline]
    pub fn is_energetic(&self) -> bool {
        self.energy >= ENERGY_THRESHOLD
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.diffusion_age > MAX_DIFFUSION_AGE
    }
}

/// What [`LightSourcePool::insert`] did with a source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Insertion {
    /// A source already sat at the same position; it was refreshed in place at `index`.
    Merged { index: usize },
    /// A new entry was created at `index`, after evicting the weakest source if the pool was full.
    Inserted {
        index: usize,
        evicted: Option<LightSource>,
    },
}

/// Fixed-capacity sequence of light sources, weakest first.
///
/// Sources are stored inline; the pool never touches the heap. After every new
/// entry the sequence is non-decreasing by intensity, so the strongest source is
/// blended last by the renderer. Merges update a source in place and leave the
/// order alone, even when the new intensity no longer fits its slot.
#[derive(Clone, Debug, Default)]
pub struct LightSourcePool {
    sources: SmallVec<[LightSource; MAX_SOURCES]>,
}

impl LightSourcePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn capacity(&self) -> usize {
        MAX_SOURCES
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.sources.len() >= MAX_SOURCES
    }

    pub fn get(&self, index: usize) -> Option<&LightSource> {
        self.sources.get(index)
    }

    pub fn as_slice(&self) -> &[LightSource] {
        &self.sources
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LightSource> {
        self.sources.iter()
    }

    pub fn clear(&mut self) {
        self.sources.clear();
    }

    /// Index of the source spawned at exactly `position`, if any.
    pub fn find_at(&self, position: Vec2) -> Option<usize> {
        self.sources.iter().position(|s| s.position == position)
    }

    /// Add `source` to the pool.
    ///
    /// A source at the same position is refreshed instead: its age restarts and it
    /// takes the new intensity and speed, keeping its slot, colour and energy. Otherwise
    /// the weakest entry is evicted when the pool is full and the new source goes
    /// in after every entry of lower or equal intensity.
    pub fn insert(&mut self, mut source: LightSource) -> Insertion {
        if let Some(index) = self.find_at(source.position) {
            self.merge(index, source.intensity, source.speed);
            return Insertion::Merged { index };
        }

        let evicted = if self.is_full() {
            self.remove(0)
        } else {
            None
        };

        source.diffusion_age = 0.0;
        let index = self.ordered_slot(source.intensity);
        self.sources.insert(index, source);
        Insertion::Inserted { index, evicted }
    }

    /// Delete the entry at `index`, shifting later entries down.
    pub fn remove(&mut self, index: usize) -> Option<LightSource> {
        if index < self.sources.len() {
            Some(self.sources.remove(index))
        } else {
            None
        }
    }

    /// Advance every source by its speed, then drop expired sources unless the
    /// pool is already down to its minimum population. Returns how many were dropped.
    pub fn age_and_prune(&mut self) -> usize {
        for s in self.sources.iter_mut() {
            s.diffusion_age += s.speed;
        }
        if self.sources.len() <= MIN_SIMULTANEOUS_COLOURS {
            return 0;
        }
        let before = self.sources.len();
        self.sources.retain(|s| !s.is_expired());
        before - self.sources.len()
    }

    fn merge(&mut self, index: usize, intensity: f32, speed: f32) {
        let s = &mut self.sources[index];
        s.diffusion_age = 0.0;
        s.intensity = intensity;
        s.speed = speed;
    }

    // Just after the last entry no stronger than `intensity`. Merges can leave the
    // pool unsorted, so this scans from the strong end instead of bisecting.
    fn ordered_slot(&self, intensity: f32) -> usize {
        self.sources
            .iter()
            .rposition(|s| s.intensity <= intensity)
            .map_or(0, |i| i + 1)
    }
}

impl<'a> IntoIterator for &'a LightSourcePool {
    type Item = &'a LightSource;
    type IntoIter = std::slice::Iter<'a, LightSource>;

    fn into_iter(self) -> Self::IntoIter {
        self.sources.iter()
    }
}
