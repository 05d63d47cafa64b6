use rand::prelude::*;
use std::time::Duration;

use crate::audio::{AudioFeatures, BinAccumulator, FeatureRequest};
use crate::config::EngineConfig;
use crate::constants::*;
use crate::error::EngineError;
use crate::layout::{Layout, Panel};
use crate::palette::Palette;
use crate::provider::{AudioFeatureSource, LayoutProvider, PaletteProvider};
use crate::render;
use crate::source::{Insertion, LightSource, LightSourcePool};
use crate::spawn::PanelRotation;

/// One panel's output for a frame.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameEntry {
    pub panel_id: u32,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub transition_time: u8,
}

/// Borrowed view of the frame produced by [`Engine::tick`].
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    entries: &'a [FrameEntry],
    sleep: Option<Duration>,
}

impl<'a> Frame<'a> {
    pub fn entries(&self) -> &'a [FrameEntry] {
        self.entries
    }

    /// Number of panels written this tick; always the panel count.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inter-call delay requested when running as a timed effect.
    pub fn sleep(&self) -> Option<Duration> {
        self.sleep
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.entries)
    }
}

pub struct Engine {
    config: EngineConfig,
    palette: Palette,
    layout: Layout,
    pool: LightSourcePool,
    rotation: PanelRotation,
    bins: BinAccumulator,
    onset_rng: StdRng,
    frame: Vec<FrameEntry>,
}

impl Engine {
    /// Query the collaborators once and build a ready-to-tick engine.
    pub fn init(
        config: EngineConfig,
        palette: &impl PaletteProvider,
        layout: &impl LayoutProvider,
        audio: &mut impl AudioFeatureSource,
    ) -> Result<Self, EngineError> {
        config.validate()?;

        let palette = Palette::new(palette.palette()?);
        log::info!("[engine] palette has {} colours", palette.len());
        for c in palette.stops() {
            log::info!("[engine]    {} {} {}", c.r, c.g, c.b);
        }

        let layout = Layout::new(layout.panels()?)?;
        log::info!("[engine] layout has {} panels", layout.len());
        for p in layout.panels() {
            log::info!(
                "[engine]    id {}  x,y {:.2}, {:.2}",
                p.id,
                p.centroid.x,
                p.centroid.y
            );
        }

        audio.enable(&FeatureRequest::ENGINE);
        Ok(Self::new(config, palette, layout))
    }

    pub fn new(config: EngineConfig, palette: Palette, layout: Layout) -> Self {
        let rotation = PanelRotation::new(config.seed);
        let onset_rng = StdRng::seed_from_u64(onset_seed(config.seed));
        let frame = Vec::with_capacity(layout.len());
        Self {
            config,
            palette,
            layout,
            pool: LightSourcePool::new(),
            rotation,
            bins: BinAccumulator::default(),
            onset_rng,
            frame,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn pool(&self) -> &LightSourcePool {
        &self.pool
    }

    pub fn rotation(&self) -> &PanelRotation {
        &self.rotation
    }

    /// Clear every light source and the beat/rotation bookkeeping.
    pub fn reset(&mut self) {
        self.pool.clear();
        self.rotation.reset();
        self.bins = BinAccumulator::default();
        self.onset_rng = StdRng::seed_from_u64(onset_seed(self.config.seed));
        self.frame.clear();
    }

    /// Spawn (or refresh) a light source on the current rotation panel.
    pub fn add_source(&mut self, colour: f32, intensity: f32, speed: f32, energy: u16) -> Insertion {
        let position = self.rotation.next_position(&self.layout, energy);
        let rgb = self.palette.interpolate(colour).scaled(intensity);
        let outcome = self
            .pool
            .insert(LightSource::new(position, rgb, intensity, speed, energy));

        match outcome {
            Insertion::Merged { index } => log::trace!(
                "[pool] refreshed source {} at ({:.1},{:.1})",
                index,
                position.x,
                position.y
            ),
            Insertion::Inserted { index, evicted } => {
                if let Some(old) = evicted {
                    log::trace!("[pool] evicted source with intensity {:.2}", old.intensity);
                }
                log::debug!(
                    "[pool] source {} rgb=({},{},{}) intensity={:.2} speed={:.2} energy={} n={}",
                    index,
                    rgb.r,
                    rgb.g,
                    rgb.b,
                    intensity,
                    speed,
                    energy,
                    self.pool.len()
                );
            }
        }
        outcome
    }

    pub fn render_panel(&self, panel: &Panel) -> [u8; 3] {
        render::render_panel(panel.centroid, &self.pool)
    }

    /// Run one frame: maybe spawn, render every panel, age the pool.
    pub fn tick(&mut self, features: &AudioFeatures) -> Frame<'_> {
        self.bins.push(features.dominant_bin());

        if features.is_beat {
            let colour = self.beat_colour();
            let speed = self.beat_speed(features.tempo);
            self.add_source(colour, BEAT_INTENSITY, speed, features.energy);
        } else if features.is_onset {
            let colour = self.onset_rng.gen::<f32>() * (self.palette.len() as f32 - 1.0);
            self.add_source(colour, ONSET_INTENSITY, ONSET_SPEED, features.energy);
        }

        self.frame.clear();
        for panel in self.layout.panels() {
            let [r, g, b] = render::render_panel(panel.centroid, &self.pool);
            self.frame.push(FrameEntry {
                panel_id: panel.id,
                r,
                g,
                b,
                transition_time: self.config.transition_time,
            });
        }

        let pruned = self.pool.age_and_prune();
        if pruned > 0 {
            log::trace!("[pool] pruned {} expired sources, {} left", pruned, self.pool.len());
        }

        Frame {
            entries: &self.frame,
            sleep: self.config.frame_delay(),
        }
    }

    /// Sample `audio` and tick with what it reports.
    pub fn step(&mut self, audio: &mut impl AudioFeatureSource) -> Frame<'_> {
        let features = audio.sample();
        self.tick(&features)
    }

    // Average dominant bin since the last beat, spread over the palette. Low
    // bands map onto the whole palette; anything above the lowest quarter of
    // the spectrum lands past the end and sticks to the last stop.
    fn beat_colour(&mut self) -> f32 {
        let avg = self.bins.take_average() as usize;
        (avg * self.palette.len() / (N_FFT_BINS / 4)) as f32
    }

    fn beat_speed(&self, tempo: u16) -> f32 {
        self.config
            .beat_speed
            .unwrap_or_else(|| (tempo as f32 / TEMPO_SPEED_DIVISOR).max(MIN_BEAT_SPEED))
    }
}

fn onset_seed(seed: u64) -> u64 {
    seed ^ 0x9E37_79B9_7F4A_7C15
}
