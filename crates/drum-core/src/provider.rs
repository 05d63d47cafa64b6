//! Seams to the collaborators that own the palette, the panel layout and the
//! audio analysis. The engine queries palette and layout once, at startup.

use crate::audio::{AudioFeatures, FeatureRequest};
use crate::color::Rgb;
use crate::error::ProviderError;
use crate::layout::Panel;

pub trait PaletteProvider {
    fn palette(&self) -> Result<Vec<Rgb>, ProviderError>;
}

pub trait LayoutProvider {
    fn panels(&self) -> Result<Vec<Panel>, ProviderError>;
}

pub trait AudioFeatureSource {
    /// Called once during engine startup, before the first `sample`.
    fn enable(&mut self, request: &FeatureRequest);
    fn sample(&mut self) -> AudioFeatures;
}

/// Fixed palette and layout, handy for hosts that build them in code.
#[derive(Clone, Debug, Default)]
pub struct StaticScene {
    pub palette: Vec<Rgb>,
    pub panels: Vec<Panel>,
}

impl PaletteProvider for StaticScene {
    fn palette(&self) -> Result<Vec<Rgb>, ProviderError> {
        Ok(self.palette.clone())
    }
}

impl LayoutProvider for StaticScene {
    fn panels(&self) -> Result<Vec<Panel>, ProviderError> {
        Ok(self.panels.clone())
    }
}

/// Replays a fixed list of feature frames, then silence.
#[derive(Clone, Debug, Default)]
pub struct ScriptedAudio {
    frames: Vec<AudioFeatures>,
    cursor: usize,
    enabled: Option<FeatureRequest>,
}

impl ScriptedAudio {
    pub fn new(frames: Vec<AudioFeatures>) -> Self {
        Self {
            frames,
            cursor: 0,
            enabled: None,
        }
    }

    pub fn enabled(&self) -> Option<FeatureRequest> {
        self.enabled
    }
}

impl AudioFeatureSource for ScriptedAudio {
    fn enable(&mut self, request: &FeatureRequest) {
        self.enabled = Some(*request);
    }

    fn sample(&mut self) -> AudioFeatures {
        let f = self.frames.get(self.cursor).copied().unwrap_or_default();
        self.cursor += 1;
        f
    }
}
