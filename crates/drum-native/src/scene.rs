//! Scene files: engine tuning, palette and panel layout in one TOML document.
//!
//! ```toml
//! [engine]
//! seed = 7
//!
//! [[palette]]
//! r = 255
//! g = 0
//! b = 80
//!
//! [[panels]]
//! id = 101
//! x = 0.0
//! y = 0.0
//! ```

use anyhow::Context;
use drum_core::{EngineConfig, LayoutProvider, Panel, PaletteProvider, ProviderError, Rgb};
use serde::Deserialize;
use std::path::Path;

const PANEL_SPACING: f32 = 86.6; // centroid distance between neighbouring panels
const BUILTIN_COLUMNS: u32 = 4;
const BUILTIN_ROWS: u32 = 3;
const BUILTIN_FIRST_ID: u32 = 101;

const BUILTIN_PALETTE: [[u8; 3]; 5] = [
    [255, 40, 0],   // ember
    [255, 170, 0],  // amber
    [40, 220, 120], // mint
    [0, 120, 255],  // azure
    [170, 0, 255],  // violet
];

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneFile {
    #[serde(default)]
    engine: EngineConfig,
    #[serde(default)]
    palette: Vec<PaletteStop>,
    #[serde(default)]
    panels: Vec<PanelEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PaletteStop {
    r: u8,
    g: u8,
    b: u8,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PanelEntry {
    id: u32,
    x: f32,
    y: f32,
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub engine: EngineConfig,
    palette: Vec<Rgb>,
    panels: Vec<Panel>,
}

impl Scene {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scene {}", path.display()))?;
        let scene =
            Self::parse(&text).with_context(|| format!("parsing scene {}", path.display()))?;
        log::info!(
            "[scene] loaded {} ({} colours, {} panels)",
            path.display(),
            scene.palette.len(),
            scene.panels.len()
        );
        Ok(scene)
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let file: SceneFile = toml::from_str(text)?;
        Ok(Self {
            engine: file.engine,
            palette: file
                .palette
                .into_iter()
                .map(|s| Rgb::from([s.r, s.g, s.b]))
                .collect(),
            panels: file
                .panels
                .into_iter()
                .map(|p| Panel::new(p.id, p.x, p.y))
                .collect(),
        })
    }

    /// A small grid of panels and a warm-to-cool palette.
    pub fn builtin() -> Self {
        let panels = (0..BUILTIN_ROWS)
            .flat_map(|row| (0..BUILTIN_COLUMNS).map(move |col| (row, col)))
            .map(|(row, col)| {
                Panel::new(
                    BUILTIN_FIRST_ID + row * BUILTIN_COLUMNS + col,
                    col as f32 * PANEL_SPACING,
                    row as f32 * PANEL_SPACING,
                )
            })
            .collect();
        Self {
            engine: EngineConfig::default(),
            palette: BUILTIN_PALETTE.iter().copied().map(Rgb::from).collect(),
            panels,
        }
    }
}

impl PaletteProvider for Scene {
    fn palette(&self) -> Result<Vec<Rgb>, ProviderError> {
        Ok(self.palette.clone())
    }
}

impl LayoutProvider for Scene {
    fn panels(&self) -> Result<Vec<Panel>, ProviderError> {
        if self.panels.is_empty() {
            return Err(ProviderError::new("layout", "scene defines no panels"));
        }
        Ok(self.panels.clone())
    }
}
