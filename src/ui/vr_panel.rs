use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::assets::BoundingBox;
use crate::catalog::ClipCatalog;
use crate::playback::{PlaybackState, SelectionChange, SelectionObserver};
use crate::ui::highlight::{HighlightPalette, HighlightState};
use crate::ui::raycast::{self, Quad, Ray};

/// Grid placement of the in-world panel, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelLayout {
    pub columns: usize,
    pub button_size: Vec2,
    pub gap: f32,
    /// Distance between the model's bounding box and the panel's inner edge.
    pub margin: f32,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            columns: 2,
            button_size: Vec2::new(0.5, 0.12),
            gap: 0.03,
            margin: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VrButton {
    /// Catalog position this button triggers.
    pub index: usize,
    pub label: String,
    pub quad: Quad,
    pub rendered: HighlightState,
    pub color: Vec3,
}

/// World-anchored clip panel picked by controller rays.
///
/// The only state it owns besides its geometry is the transient hovered index,
/// cleared whenever no ray hits a button.
#[derive(Debug, Clone)]
pub struct VrPanel {
    buttons: Vec<VrButton>,
    hovered: Option<usize>,
    palette: HighlightPalette,
}

impl VrPanel {
    /// Lays one button per catalog entry in a grid to the right (+X) of `bounds`,
    /// vertically centered on the model and facing +Z.
    #[must_use]
    pub fn layout(
        bounds: &BoundingBox,
        catalog: &ClipCatalog,
        layout: &PanelLayout,
        palette: HighlightPalette,
    ) -> Self {
        let columns = layout.columns.max(1);
        let rows = catalog.len().div_ceil(columns);
        let size = layout.button_size;
        let pitch = size + Vec2::splat(layout.gap);

        let total_height = rows as f32 * pitch.y - layout.gap;
        let center = bounds.center();
        let left = bounds.max.x + layout.margin;
        let top = center.y + total_height.max(0.0) * 0.5;

        let buttons = catalog
            .iter()
            .enumerate()
            .map(|(index, def)| {
                let col = (index % columns) as f32;
                let row = (index / columns) as f32;
                let button_center = Vec3::new(
                    left + col * pitch.x + size.x * 0.5,
                    top - row * pitch.y - size.y * 0.5,
                    center.z,
                );

                VrButton {
                    index,
                    label: def.name.clone(),
                    quad: Quad::facing_z(button_center, size),
                    rendered: HighlightState::Normal,
                    color: palette.normal,
                }
            })
            .collect();

        Self {
            buttons,
            hovered: None,
            palette,
        }
    }

    #[must_use]
    pub fn buttons(&self) -> &[VrButton] {
        &self.buttons
    }

    #[must_use]
    pub fn button(&self, index: usize) -> Option<&VrButton> {
        self.buttons.iter().find(|b| b.index == index)
    }

    /// Catalog index of the hovered button.
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Re-resolves the hovered button from this frame's controller rays and
    /// recolors the panel.
    pub fn update_hover(&mut self, rays: &[Ray], state: &PlaybackState) -> Option<usize> {
        let hit = raycast::pick(rays, self.buttons.iter().map(|b| &b.quad));
        self.hovered = hit.map(|h| self.buttons[h.target].index);
        self.recolor(state);
        self.hovered
    }

    /// Index to select for a trigger press this frame, if a button is hovered.
    #[must_use]
    pub fn trigger(&self) -> Option<usize> {
        self.hovered
    }

    pub fn clear_hover(&mut self, state: &PlaybackState) {
        self.hovered = None;
        self.recolor(state);
    }

    pub fn recolor(&mut self, state: &PlaybackState) {
        for button in &mut self.buttons {
            let hovered = self.hovered == Some(button.index);
            button.rendered = HighlightState::resolve(state.is_active(button.index), hovered);
            button.color = self.palette.color(button.rendered);
        }
    }
}

impl SelectionObserver for VrPanel {
    fn on_selection_changed(&mut self, state: &PlaybackState, _change: SelectionChange) {
        self.recolor(state);
    }
}
