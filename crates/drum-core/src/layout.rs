//! Panel arrangement of the fixture.
//!
//! The layout is read once at startup and never changes afterwards; the engine
//! keeps panels in the order the provider returned them, which is also the order
//! of the frame buffer.

use fnv::FnvHashSet;
use glam::Vec2;

use crate::error::LayoutError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Panel {
    pub id: u32,
    pub centroid: Vec2,
}

impl Panel {
    pub fn new(id: u32, x: f32, y: f32) -> Self {
        Self {
            id,
            centroid: Vec2::new(x, y),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Layout {
    panels: Vec<Panel>,
}

impl Layout {
    /// Validate and wrap the provider's panel list.
    ///
    /// Rejects empty layouts, repeated panel ids and centroids that are NaN or
    /// infinite, so every later index into the layout is in range and every
    /// distance is finite.
    pub fn new(panels: Vec<Panel>) -> Result<Self, LayoutError> {
        if panels.is_empty() {
            return Err(LayoutError::Empty);
        }
        let mut seen = FnvHashSet::default();
        for p in &panels {
            if !seen.insert(p.id) {
                return Err(LayoutError::DuplicatePanelId(p.id));
            }
            if !p.centroid.is_finite() {
                return Err(LayoutError::NonFiniteCentroid(p.id));
            }
        }
        Ok(Self { panels })
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Always false for a constructed layout.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Panel at `index`, with the index clamped into range.
    pub fn panel_clamped(&self, index: i64) -> &Panel {
        let last = self.panels.len() as i64 - 1;
        &self.panels[index.clamp(0, last) as usize]
    }
}
