//! Presentation mode and the environment it implies.

use glam::Vec3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PresentationMode {
    /// Flat screen: mouse, desktop buttons.
    #[default]
    Desktop,
    /// Head-mounted session: controller rays, VR panel.
    Immersive,
}

/// Backdrop visibility. Immersive sessions show the passthrough/void instead of
/// the studio background and floor grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub background_color: Vec3,
    pub background_visible: bool,
    pub grid_visible: bool,
}

impl Environment {
    #[must_use]
    pub fn new(background_color: Vec3) -> Self {
        Self {
            background_color,
            background_visible: true,
            grid_visible: true,
        }
    }

    pub fn apply_mode(&mut self, mode: PresentationMode) {
        let desktop = mode == PresentationMode::Desktop;
        self.background_visible = desktop;
        self.grid_visible = desktop;
    }
}
